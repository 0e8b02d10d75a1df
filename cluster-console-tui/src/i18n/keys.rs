//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `home.*`, `clusters.*`
//! 4. **字段标签归 `fields.*`**：字段描述序列（表格/表单/详情共用）
//! 5. **跨组件复用归 `common.*`**：多处使用的通用词汇

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 主页文本
    pub home: HomeTexts,
    /// 集群页面文本
    pub clusters: ClustersTexts,
    /// 字段标签（表格列头、表单标签、详情面板共用）
    pub fields: FieldTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏消息文本
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    // 操作动词
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub search: &'static str,
    pub quit: &'static str,
    // 状态词
    pub loading: &'static str,
    pub no_data: &'static str,
    pub error: &'static str,
    // 导航词
    pub back: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub home: &'static str,
    pub clusters: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 主页文本
pub struct HomeTexts {
    pub welcome: &'static str,
    pub welcome_desc: &'static str,
    pub quick_actions: &'static str,
    pub manage_clusters: &'static str,
    pub configure_settings: &'static str,
}

/// 集群页面文本
pub struct ClustersTexts {
    pub title: &'static str,
    pub no_clusters: &'static str,
    /// 工具栏：心跳检测
    pub heartbeat: &'static str,
    // 批量操作栏（"已选择 N 项"）
    pub selected_prefix: &'static str,
    pub selected_suffix: &'static str,
    /// "被禁用的集群共 N 项"
    pub disabled_prefix: &'static str,
    pub disabled_suffix: &'static str,
    pub batch_delete: &'static str,
    pub batch_enable: &'static str,
    pub batch_disable: &'static str,
    // 分页 / 排序 / 过滤
    pub page: &'static str,
    pub total: &'static str,
    pub sort: &'static str,
    pub filters: &'static str,
    pub filter_all: &'static str,
    pub detail_title: &'static str,
}

/// 字段标签
pub struct FieldTexts {
    pub name: &'static str,
    pub id: &'static str,
    pub alias: &'static str,
    pub cluster_type: &'static str,
    pub hosts: &'static str,
    pub job_manager_host: &'static str,
    pub status: &'static str,
    pub note: &'static str,
    pub enabled: &'static str,
    pub create_time: &'static str,
    pub update_time: &'static str,
    // 枚举值标签
    pub status_normal: &'static str,
    pub status_abnormal: &'static str,
    pub enabled_on: &'static str,
    pub enabled_off: &'static str,
    /// 名称列提示
    pub name_tip: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub theme: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
    pub language: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    // 表单弹窗
    pub create_title: &'static str,
    pub update_title: &'static str,
    /// 必填项错误后缀（"{字段}为必填项"）
    pub required_suffix: &'static str,
    pub optional_suffix: &'static str,
    // 确认弹窗
    pub delete_title: &'static str,
    pub delete_one_confirm: &'static str,
    pub delete_selected_confirm: &'static str,
    pub enable_title: &'static str,
    pub enable_selected_confirm: &'static str,
    pub disable_title: &'static str,
    pub disable_selected_confirm: &'static str,
    // 搜索弹窗
    pub search_title: &'static str,
    pub keyword_label: &'static str,
}

// ============================================================================
// 状态栏消息
// ============================================================================

/// 状态栏消息文本
pub struct StatusTexts {
    pub refreshing: &'static str,
    pub load_failed: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub enabled_done: &'static str,
    pub disabled_done: &'static str,
    pub heartbeat_done: &'static str,
    pub heartbeat_failed: &'static str,
    pub operation_failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_section: &'static str,
    pub clusters_section: &'static str,
    pub move_cursor: &'static str,
    pub toggle_select: &'static str,
    pub open_detail: &'static str,
    pub switch_page: &'static str,
    pub cycle_sort: &'static str,
    pub toggle_order: &'static str,
    pub cycle_filters: &'static str,
    pub clear_filters: &'static str,
    pub switch_panel: &'static str,
    pub toggle_value: &'static str,
    pub close_hint: &'static str,
}
