//! 英文翻译 (en-US)

use super::keys::{
    ClustersTexts, CommonTexts, FieldTexts, HelpTexts, HomeTexts, ModalTexts, NavTexts,
    SettingsTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Cluster Console",
        add: "New",
        edit: "Edit",
        delete: "Delete",
        cancel: "Cancel",
        confirm: "Confirm",
        close: "Close",
        search: "Search",
        quit: "Quit",
        loading: "Loading...",
        no_data: "No data",
        error: "Error",
        back: "Back",
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        home: "Home",
        clusters: "Clusters",
        settings: "Settings",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    home: HomeTexts {
        welcome: "Welcome to Cluster Console",
        welcome_desc: "Manage your compute clusters from the terminal",
        quick_actions: "Quick Actions",
        manage_clusters: "Manage Clusters",
        configure_settings: "Configure Settings",
    },

    clusters: ClustersTexts {
        title: "Cluster Management",
        no_clusters: "No clusters found.",
        heartbeat: "Heartbeat Check",
        selected_prefix: "Selected",
        selected_suffix: "item(s)",
        disabled_prefix: "disabled clusters:",
        disabled_suffix: "",
        batch_delete: "Batch Delete",
        batch_enable: "Batch Enable",
        batch_disable: "Batch Disable",
        page: "Page",
        total: "total",
        sort: "sort",
        filters: "filters",
        filter_all: "All",
        detail_title: "Details",
    },

    fields: FieldTexts {
        name: "Name",
        id: "Cluster ID",
        alias: "Alias",
        cluster_type: "Type",
        hosts: "Hosts",
        job_manager_host: "JM Host",
        status: "Status",
        note: "Note",
        enabled: "Enabled",
        create_time: "Create Time",
        update_time: "Update Time",
        status_normal: "Normal",
        status_abnormal: "Abnormal",
        enabled_on: "Enabled",
        enabled_off: "Disabled",
        name_tip: "Name must be unique",
    },

    settings: SettingsTexts {
        title: "Settings",
        theme: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
        language: "Language",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        create_title: "New Cluster",
        update_title: "Configure Cluster",
        required_suffix: " is required",
        optional_suffix: " (optional)",
        delete_title: "Delete Cluster",
        delete_one_confirm: "Are you sure to delete this cluster?",
        delete_selected_confirm: "Are you sure to delete the selected clusters?",
        enable_title: "Enable Cluster",
        enable_selected_confirm: "Are you sure to enable the selected clusters?",
        disable_title: "Disable Cluster",
        disable_selected_confirm: "Are you sure to disable the selected clusters?",
        search_title: "Search Clusters",
        keyword_label: "Keyword",
    },

    // ========================================================================
    // 状态栏消息
    // ========================================================================
    status: StatusTexts {
        refreshing: "Refreshing...",
        load_failed: "Failed to load clusters",
        created: "Cluster created",
        updated: "Cluster updated",
        deleted: "Cluster deleted",
        enabled_done: "Clusters enabled",
        disabled_done: "Clusters disabled",
        heartbeat_done: "Heartbeat check completed",
        heartbeat_failed: "Heartbeat check failed",
        operation_failed: "Operation failed",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_section: "Global shortcuts",
        clusters_section: "Clusters page",
        move_cursor: "Move up/down",
        toggle_select: "Toggle row selection",
        open_detail: "Open detail panel",
        switch_page: "Prev/next page",
        cycle_sort: "Cycle sort column",
        toggle_order: "Toggle sort direction",
        cycle_filters: "Cycle type/status/enabled filter",
        clear_filters: "Clear filters",
        switch_panel: "Switch panel",
        toggle_value: "Change value",
        close_hint: "Press Esc or Enter to close",
    },
};
