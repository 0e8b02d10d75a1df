//! 页面状态定义

/// 页面枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// 首页
    #[default]
    Home,
    /// 集群管理
    Clusters,
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Clusters => "Clusters",
            Page::Settings => "Settings",
        }
    }
}
