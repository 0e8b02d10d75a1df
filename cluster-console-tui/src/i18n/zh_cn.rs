//! 简体中文翻译 (zh-CN)

use super::keys::{
    ClustersTexts, CommonTexts, FieldTexts, HelpTexts, HomeTexts, ModalTexts, NavTexts,
    SettingsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "集群管理控制台",
        add: "新建",
        edit: "编辑",
        delete: "删除",
        cancel: "取消",
        confirm: "确认",
        close: "关闭",
        search: "搜索",
        quit: "退出",
        loading: "加载中...",
        no_data: "暂无数据",
        error: "错误",
        back: "返回",
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        home: "主页",
        clusters: "集群",
        settings: "设置",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "欢迎使用集群管理控制台",
        welcome_desc: "在终端中管理你的计算集群",
        quick_actions: "快捷操作",
        manage_clusters: "集群管理",
        configure_settings: "偏好设置",
    },

    clusters: ClustersTexts {
        title: "集群管理",
        no_clusters: "暂无集群。",
        heartbeat: "心跳检测",
        selected_prefix: "已选择",
        selected_suffix: "项",
        disabled_prefix: "被禁用的集群共",
        disabled_suffix: "项",
        batch_delete: "批量删除",
        batch_enable: "批量启用",
        batch_disable: "批量禁用",
        page: "页",
        total: "共",
        sort: "排序",
        filters: "筛选",
        filter_all: "全部",
        detail_title: "详情",
    },

    fields: FieldTexts {
        name: "名称",
        id: "集群ID",
        alias: "别名",
        cluster_type: "类型",
        hosts: "Hosts",
        job_manager_host: "JM 地址",
        status: "状态",
        note: "注释",
        enabled: "是否启用",
        create_time: "创建时间",
        update_time: "最近更新时间",
        status_normal: "正常",
        status_abnormal: "异常",
        enabled_on: "已启用",
        enabled_off: "已禁用",
        name_tip: "名称是唯一的",
    },

    settings: SettingsTexts {
        title: "设置",
        theme: "主题",
        theme_dark: "深色",
        theme_light: "浅色",
        language: "语言",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        create_title: "新建集群",
        update_title: "维护集群",
        required_suffix: "为必填项",
        optional_suffix: "（选填）",
        delete_title: "删除集群",
        delete_one_confirm: "确定删除该集群吗？",
        delete_selected_confirm: "确定删除选中的集群吗？",
        enable_title: "启用集群",
        enable_selected_confirm: "确定启用选中的集群吗？",
        disable_title: "禁用集群",
        disable_selected_confirm: "确定禁用选中的集群吗？",
        search_title: "搜索集群",
        keyword_label: "关键字",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        refreshing: "刷新中...",
        load_failed: "集群列表加载失败",
        created: "集群已创建",
        updated: "集群已更新",
        deleted: "集群已删除",
        enabled_done: "集群已启用",
        disabled_done: "集群已禁用",
        heartbeat_done: "心跳检测完成",
        heartbeat_failed: "心跳检测失败",
        operation_failed: "操作失败",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global_section: "全局快捷键",
        clusters_section: "集群页面",
        move_cursor: "上下移动",
        toggle_select: "勾选/取消勾选当前行",
        open_detail: "打开详情面板",
        switch_page: "上一页/下一页",
        cycle_sort: "切换排序列",
        toggle_order: "切换排序方向",
        cycle_filters: "切换类型/状态/启用筛选",
        clear_filters: "清除筛选",
        switch_panel: "切换面板",
        toggle_value: "切换选项",
        close_hint: "按 Esc 或 Enter 关闭",
    },
};
