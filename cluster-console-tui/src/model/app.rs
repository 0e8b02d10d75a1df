//! 应用主状态结构

use crate::backend::{AppConfig, Backend};
use crate::i18n::Language;
use crate::model::state::Theme;

use super::{ClustersState, FocusPanel, ModalState, NavigationState, Page, SettingsState};

/// 应用主状态
///
/// 屏幕级状态（弹窗可见性、勾选集、详情目标）都集中在这里，
/// 由 Update 层作为唯一写入口修改，不使用全局可变量。
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 集群页面状态
    pub clusters: ClustersState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 后端服务（网关调用的同步封装）
    pub backend: Backend,

    /// 应用配置（设置页修改后回写）
    pub config: AppConfig,
}

impl App {
    /// 创建新的应用实例
    pub fn new(backend: Backend, config: AppConfig) -> Self {
        let mut settings = SettingsState::new();
        if let Some(lang) = Language::from_code(&config.language) {
            settings.language = lang;
            crate::i18n::set_language(lang);
        }
        if let Some(theme) = Theme::from_code(&config.theme) {
            settings.theme = theme;
            crate::view::theme::set_theme_index(theme.index());
        }

        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status_message: None,
            clusters: ClustersState::new(),
            settings,
            modal: ModalState::new(),
            backend,
            config,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
