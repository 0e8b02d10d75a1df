//! 内容面板更新逻辑
//!
//! 集群页面的全部操作路径都汇聚到两个重载入口：
//! - `reload`：普通导航（翻页/排序/筛选/搜索），保留勾选集
//! - `reload_and_reset`：变更完成后的统一钩子，清空勾选集与
//!   详情目标后重载（所有变更路径都走这里，保证一致性）

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::schema::{self, FieldKey};
use crate::model::state::ConfirmAction;
use crate::model::{App, Page};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match &app.current_page {
        Page::Clusters => update_clusters(app, msg),
        Page::Settings => update_settings(app, msg),
        Page::Home => {}
    }
}

// ========== 集群页面 ==========

fn update_clusters(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 列表导航 ==========
        ContentMessage::SelectPrevious => app.clusters.select_previous(),
        ContentMessage::SelectNext => app.clusters.select_next(),
        ContentMessage::SelectFirst => app.clusters.select_first(),
        ContentMessage::SelectLast => app.clusters.select_last(),

        ContentMessage::Confirm => {
            // 行点击打开详情面板；纯展示，不发起网络调用
            if let Some(cluster) = app.clusters.current_record().cloned() {
                app.clusters.open_detail(cluster);
            }
        }

        ContentMessage::ToggleSelect => {
            if let Some(cluster) = app.clusters.current_record().cloned() {
                app.clusters.toggle_selected(&cluster);
            }
        }

        // ========== 行级操作 ==========
        ContentMessage::Add => {
            app.modal.show_create_form();
        }

        ContentMessage::Edit => {
            // 行菜单的“编辑”与“配置”等价
            if let Some(cluster) = app.clusters.current_record().cloned() {
                app.modal.show_update_form(&cluster);
            } else {
                app.set_status(t().common.no_data);
            }
        }

        ContentMessage::Delete => {
            if let Some(cluster) = app.clusters.current_record().cloned() {
                app.modal.show_confirm(ConfirmAction::DeleteOne(cluster));
            } else {
                app.set_status(t().common.no_data);
            }
        }

        // ========== 分页 / 排序 / 筛选 ==========
        ContentMessage::NextPage => {
            if app.clusters.next_page() {
                reload(app);
            }
        }

        ContentMessage::PrevPage => {
            if app.clusters.prev_page() {
                reload(app);
            }
        }

        ContentMessage::CycleSort => {
            let fields: Vec<&'static str> = schema::sortable_fields()
                .iter()
                .map(|d| d.key.as_str())
                .collect();
            app.clusters.cycle_sort(&fields);
            reload(app);
        }

        ContentMessage::ToggleSortOrder => {
            // 未设排序键时无参数变化，也就不发列表请求
            if app.clusters.query.sort_field.is_some() {
                app.clusters.toggle_sort_order();
                reload(app);
            }
        }

        ContentMessage::CycleFilter(index) => {
            let Some(descriptor) = schema::filterable_fields().get(index).copied() else {
                return;
            };
            match descriptor.key {
                FieldKey::Type => app.clusters.cycle_type_filter(),
                FieldKey::Status => app.clusters.cycle_status_filter(),
                FieldKey::Enabled => app.clusters.cycle_enabled_filter(),
                _ => return,
            }
            reload(app);
        }

        ContentMessage::ClearFilters => {
            if app.clusters.query.has_filters() {
                app.clusters.clear_filters();
                reload(app);
            }
        }

        ContentMessage::OpenSearch => {
            app.modal.show_search(app.clusters.query.keyword.as_deref());
        }

        // ========== 批量操作 ==========
        ContentMessage::BatchDelete => {
            if app.clusters.selected_count() > 0 {
                app.modal.show_confirm(ConfirmAction::DeleteSelected);
            }
        }

        ContentMessage::BatchEnable => {
            if app.clusters.selected_count() > 0 {
                app.modal.show_confirm(ConfirmAction::EnableSelected);
            }
        }

        ContentMessage::BatchDisable => {
            if app.clusters.selected_count() > 0 {
                app.modal.show_confirm(ConfirmAction::DisableSelected);
            }
        }

        // ========== 工具栏 ==========
        ContentMessage::Heartbeat => heartbeat(app),

        // 设置页面专用消息，在集群页面忽略
        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}
    }
}

/// 普通重载：按当前查询参数重新拉取行集，保留勾选集与详情目标。
///
/// 失败时保留上一次渲染的行，不做局部合并，只给状态栏一条提示。
pub(crate) fn reload(app: &mut App) {
    app.clusters.loading = true;
    let query = app.clusters.query.clone();
    match app.backend.list(&query) {
        Ok(page) => {
            app.clusters.set_page_result(page);
        }
        Err(e) => {
            app.clusters.loading = false;
            if e.is_expected() {
                log::warn!("list clusters failed: {e}");
            } else {
                log::error!("list clusters failed: {e}");
            }
            app.set_status(format!("{}: {e}", t().status.load_failed));
        }
    }
}

/// 变更后的统一钩子：清空勾选集与详情目标，然后重载。
pub(crate) fn reload_and_reset(app: &mut App) {
    app.clusters.clear_selection();
    app.clusters.close_detail();
    reload(app);
}

/// 心跳检测：无目标记录的工具栏操作。
/// 完成后给出具名提示，且无论成败都重载并重置（状态列大概率已变化）。
fn heartbeat(app: &mut App) {
    let texts = t();
    match app.backend.check_heartbeats(texts.clusters.heartbeat) {
        Ok(()) => {
            app.set_status(texts.status.heartbeat_done);
        }
        Err(e) => {
            log::warn!("heartbeat check failed: {e}");
            app.set_status(format!("{}: {e}", texts.status.heartbeat_failed));
        }
    }
    reload_and_reset(app);
}

// ========== 设置页面 ==========

fn update_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::TogglePrev => {
            app.settings.toggle_prev();
            apply_settings(app);
        }
        ContentMessage::ToggleNext => {
            app.settings.toggle_next();
            apply_settings(app);
        }
        _ => {}
    }
}

/// 设置变化后同步主题并回写配置文件
fn apply_settings(app: &mut App) {
    crate::view::theme::set_theme_index(app.settings.theme.index());
    app.config.language = app.settings.language.code().to_string();
    app.config.theme = app.settings.theme.code().to_string();
    if let Err(e) = crate::backend::save(&app.config) {
        log::warn!("Failed to save config: {e}");
    }
}
