//! 导航面板更新逻辑

use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, NavItemId, Page};

use super::content;

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),

        NavigationMessage::Confirm => {
            let Some(id) = app.navigation.current_id() else {
                return;
            };
            let page = page_from_nav_id(id);
            let entering_clusters =
                page == Page::Clusters && app.current_page != Page::Clusters;

            app.current_page = page;
            app.focus = FocusPanel::Content;
            app.clear_status();

            // 进入集群页面即拉取一次列表（相当于一次显式重载请求）
            if entering_clusters {
                content::reload(app);
            }
        }
    }
}

/// 根据导航项 ID 获取对应的页面
fn page_from_nav_id(id: NavItemId) -> Page {
    match id {
        NavItemId::Home => Page::Home,
        NavItemId::Clusters => Page::Clusters,
        NavItemId::Settings => Page::Settings,
    }
}
