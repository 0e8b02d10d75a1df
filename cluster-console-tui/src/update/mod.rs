//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（表格/批量/心跳）
//!         mod modal;              // 弹窗子消息处理（表单/确认/搜索）
//!
//! 所有网关调用都发生在本层，经由 Backend 的同步封装；
//! 每条变更路径结束时统一调用 content::reload_and_reset，
//! 普通导航路径调用 content::reload（保留勾选集）。
//!

mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::{App, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() {
                // 先关弹窗（同步本地取消，零网关调用）
                app.modal.close();
                app.clear_status();
            } else if app.current_page == Page::Clusters && app.clusters.detail.is_some() {
                // 再关详情面板
                app.clusters.close_detail();
            }
        }

        AppMessage::Refresh => {
            // 显式重载请求：保留勾选集
            if app.current_page == Page::Clusters {
                content::reload(app);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cluster_console_client::{Cluster, ClusterType, GatewayError};

    use super::update;
    use crate::backend::mock::{GatewayCall, MockGateway};
    use crate::backend::{AppConfig, Backend};
    use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
    use crate::model::state::Modal;
    use crate::model::{App, FocusPanel, Page};

    fn cluster(id: i64, name: &str, enabled: bool) -> Cluster {
        let json = format!(r#"{{"id": {id}, "name": "{name}", "enabled": {enabled}}}"#);
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("cluster must parse: {e}"))
    }

    /// 集群页上的测试应用；已完成一次初始加载（1 次列表调用）
    fn test_app(records: Vec<Cluster>) -> (App, Arc<MockGateway>) {
        let (mut app, mock) = raw_app(records);
        app.current_page = Page::Clusters;
        app.focus = FocusPanel::Content;
        update(&mut app, AppMessage::Refresh);
        (app, mock)
    }

    /// 未加载、停在首页的测试应用
    fn raw_app(records: Vec<Cluster>) -> (App, Arc<MockGateway>) {
        let mock = Arc::new(MockGateway::with_records(records));
        let backend = Backend::with_gateway(mock.clone())
            .unwrap_or_else(|e| panic!("backend must build: {e}"));
        let app = App::new(backend, AppConfig::default());
        (app, mock)
    }

    fn content(app: &mut App, msg: ContentMessage) {
        update(app, AppMessage::Content(msg));
    }

    fn modal(app: &mut App, msg: ModalMessage) {
        update(app, AppMessage::Modal(msg));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            modal(app, ModalMessage::Input(ch));
        }
    }

    // ========== 列表与查询参数 ==========

    #[test]
    fn entering_clusters_page_loads_once() {
        let (mut app, mock) = raw_app(vec![cluster(1, "a", true)]);
        assert_eq!(mock.list_call_count(), 0);
        update(&mut app, AppMessage::Navigation(NavigationMessage::SelectNext));
        update(&mut app, AppMessage::Navigation(NavigationMessage::Confirm));
        assert_eq!(app.current_page, Page::Clusters);
        assert_eq!(mock.list_call_count(), 1);
        assert_eq!(app.clusters.records.len(), 1);
    }

    #[test]
    fn query_change_issues_one_list_call_and_replaces_rows() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        assert_eq!(mock.list_call_count(), 1);

        mock.set_records(vec![cluster(2, "b", false), cluster(3, "c", true)]);
        content(&mut app, ContentMessage::CycleFilter(0));

        // 恰好一次新列表调用，渲染集完全等于响应（无旧行残留）
        assert_eq!(mock.list_call_count(), 2);
        let ids: Vec<i64> = app.clusters.records.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let calls = mock.calls();
        let Some(GatewayCall::List(params)) = calls.last() else {
            unreachable!("last call must be a list");
        };
        assert_eq!(params.filter_type, Some(ClusterType::Yarn));
        assert_eq!(params.page, 1);
    }

    #[test]
    fn sort_cycle_passes_sort_through_to_gateway() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        content(&mut app, ContentMessage::CycleSort);
        let calls = mock.calls();
        let Some(GatewayCall::List(params)) = calls.last() else {
            unreachable!("last call must be a list");
        };
        assert_eq!(params.sort_field.as_deref(), Some("name"));
        assert!(params.sort_order.is_some());
    }

    #[test]
    fn sort_order_toggle_without_sort_field_is_silent() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        content(&mut app, ContentMessage::ToggleSortOrder);
        // 参数没变化，就不该有新的列表调用
        assert_eq!(mock.list_call_count(), 1);
    }

    #[test]
    fn failed_list_keeps_previous_rows() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        mock.fail_list(GatewayError::Network {
            detail: "connection refused".to_string(),
        });
        update(&mut app, AppMessage::Refresh);

        // 上一次渲染的行原样保留，只有一条状态栏提示
        assert_eq!(app.clusters.records.len(), 1);
        assert!(app.status_message.is_some());
        assert!(!app.clusters.loading);
    }

    // ========== 勾选集 ==========

    #[test]
    fn selection_survives_filter_and_sort_changes() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true), cluster(2, "b", false)]);
        content(&mut app, ContentMessage::ToggleSelect);
        assert_eq!(app.clusters.selected_ids(), vec![1]);

        content(&mut app, ContentMessage::CycleSort);
        content(&mut app, ContentMessage::CycleFilter(1));

        // 普通导航重载不清勾选集
        assert_eq!(app.clusters.selected_ids(), vec![1]);
        assert_eq!(mock.list_call_count(), 3);
    }

    // ========== 表单弹窗 ==========

    #[test]
    fn create_submit_with_empty_name_never_reaches_gateway() {
        let (mut app, mock) = test_app(vec![]);
        content(&mut app, ContentMessage::Add);
        modal(&mut app, ModalMessage::Confirm);

        // 校验失败：零网关调用，弹窗保持打开并显示字段错误
        assert!(!mock
            .calls()
            .iter()
            .any(|c| matches!(c, GatewayCall::Create(_))));
        let Some(Modal::ClusterForm { error, .. }) = &app.modal.active else {
            unreachable!("form must stay open");
        };
        assert!(error.is_some());
    }

    #[test]
    fn create_submit_success_closes_and_reloads() {
        let (mut app, mock) = test_app(vec![]);
        content(&mut app, ContentMessage::Add);
        type_text(&mut app, "flink-prod");
        modal(&mut app, ModalMessage::Confirm);

        let calls = mock.calls();
        let created = calls.iter().find_map(|c| match c {
            GatewayCall::Create(payload) => Some(payload.clone()),
            _ => None,
        });
        assert_eq!(created.map(|p| p.name), Some("flink-prod".to_string()));
        assert!(app.modal.active.is_none());
        // 提交成功后重载一次
        assert_eq!(mock.list_call_count(), 2);
    }

    #[test]
    fn failed_submit_keeps_overlay_open_for_retry() {
        let (mut app, mock) = test_app(vec![]);
        mock.fail_mutations(GatewayError::Api {
            code: 1,
            message: "duplicate name".to_string(),
        });

        content(&mut app, ContentMessage::Add);
        type_text(&mut app, "dup");
        modal(&mut app, ModalMessage::Confirm);

        // 一次 CREATE 调用，但弹窗留在打开态供修正，且不重载
        assert!(mock
            .calls()
            .iter()
            .any(|c| matches!(c, GatewayCall::Create(_))));
        let Some(Modal::ClusterForm { error, .. }) = &app.modal.active else {
            unreachable!("form must stay open on failure");
        };
        assert!(error.as_deref().is_some_and(|e| e.contains("duplicate")));
        assert_eq!(mock.list_call_count(), 1);
    }

    #[test]
    fn scenario_update_name_and_submit() {
        // 维护表单打开于 {id:5, name:"old"}，改名为 "new" 后提交
        let (mut app, mock) = test_app(vec![cluster(5, "old", true)]);
        content(&mut app, ContentMessage::Edit);

        for _ in 0..3 {
            modal(&mut app, ModalMessage::Backspace);
        }
        type_text(&mut app, "new");
        modal(&mut app, ModalMessage::Confirm);

        let updated = mock.calls().iter().find_map(|c| match c {
            GatewayCall::Update(payload) => Some(payload.clone()),
            _ => None,
        });
        let Some(payload) = updated else {
            unreachable!("exactly one UPDATE call expected");
        };
        assert_eq!(payload.id, Some(5));
        assert_eq!(payload.name, "new");

        // 成功后弹窗关闭、目标记录清空、表格重载
        assert!(app.modal.active.is_none());
        assert_eq!(mock.list_call_count(), 2);
    }

    #[test]
    fn form_cancel_discards_candidate_without_calls() {
        let (mut app, mock) = test_app(vec![cluster(5, "old", true)]);
        content(&mut app, ContentMessage::Edit);
        type_text(&mut app, "-suffix");
        update(&mut app, AppMessage::GoBack);

        assert!(app.modal.active.is_none());
        // 取消不产生任何网关调用（只有初始列表）
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn enum_field_cycles_instead_of_typing() {
        let (mut app, _mock) = test_app(vec![]);
        content(&mut app, ContentMessage::Add);
        // 表单字段顺序：名称、别名、类型……焦点移到类型
        modal(&mut app, ModalMessage::NextField);
        modal(&mut app, ModalMessage::NextField);
        modal(&mut app, ModalMessage::NextOption);

        let Some(Modal::ClusterForm { values, .. }) = &app.modal.active else {
            unreachable!("form must be open");
        };
        assert_eq!(values[2], "Standalone");
    }

    // ========== 确认对话框与批量操作 ==========

    #[test]
    fn bulk_disable_sends_one_call_with_all_ids() {
        let (mut app, mock) = test_app(vec![
            cluster(1, "a", true),
            cluster(2, "b", true),
            cluster(3, "c", true),
        ]);
        content(&mut app, ContentMessage::ToggleSelect);
        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::ToggleSelect);
        assert_eq!(app.clusters.selected_ids(), vec![1, 3]);

        content(&mut app, ContentMessage::BatchDisable);
        modal(&mut app, ModalMessage::ToggleConfirmFocus);
        modal(&mut app, ModalMessage::Confirm);

        let set_enabled_calls: Vec<_> = mock
            .calls()
            .into_iter()
            .filter(|c| matches!(c, GatewayCall::SetEnabled(_, _)))
            .collect();
        assert_eq!(
            set_enabled_calls,
            vec![GatewayCall::SetEnabled(vec![1, 3], false)]
        );
        // 成功后勾选清空并重载
        assert_eq!(app.clusters.selected_count(), 0);
        assert_eq!(mock.list_call_count(), 2);
    }

    #[test]
    fn scenario_bulk_enable_two_records() {
        // 表格载入 [{1,"c1",启用},{2,"c2",禁用}]，全选后批量启用
        let (mut app, mock) = test_app(vec![cluster(1, "c1", true), cluster(2, "c2", false)]);
        content(&mut app, ContentMessage::ToggleSelect);
        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::ToggleSelect);
        assert_eq!(app.clusters.disabled_count(), 1);

        content(&mut app, ContentMessage::BatchEnable);
        modal(&mut app, ModalMessage::ToggleConfirmFocus);
        modal(&mut app, ModalMessage::Confirm);

        // 恰好一次 SET_ENABLED([1,2], true)，随后一次重载，勾选数归零
        let calls = mock.calls();
        assert_eq!(calls[1], GatewayCall::SetEnabled(vec![1, 2], true));
        assert!(matches!(calls[2], GatewayCall::List(_)));
        assert_eq!(calls.len(), 3);
        assert_eq!(app.clusters.selected_count(), 0);
    }

    #[test]
    fn cancel_confirmation_issues_zero_gateway_calls() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        content(&mut app, ContentMessage::ToggleSelect);
        content(&mut app, ContentMessage::BatchDelete);

        // Esc 取消
        modal(&mut app, ModalMessage::Close);
        assert!(app.modal.active.is_none());

        // 焦点停在取消上按 Enter，同样是取消
        content(&mut app, ContentMessage::BatchDelete);
        modal(&mut app, ModalMessage::Confirm);

        assert!(!mock
            .calls()
            .iter()
            .any(|c| matches!(c, GatewayCall::Delete(_))));
        // 勾选集与行集均原样
        assert_eq!(app.clusters.selected_ids(), vec![1]);
        assert_eq!(mock.list_call_count(), 1);
    }

    #[test]
    fn row_delete_confirms_then_resets_selection() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true), cluster(2, "b", true)]);
        // 勾选第二行，但行级删除作用于高亮行（第一行）
        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::ToggleSelect);
        content(&mut app, ContentMessage::SelectPrevious);

        content(&mut app, ContentMessage::Delete);
        modal(&mut app, ModalMessage::ToggleConfirmFocus);
        modal(&mut app, ModalMessage::Confirm);

        assert!(mock
            .calls()
            .iter()
            .any(|c| *c == GatewayCall::Delete(vec![1])));
        // 删除路径走重载并重置：勾选集清空
        assert_eq!(app.clusters.selected_count(), 0);
        assert_eq!(mock.list_call_count(), 2);
    }

    #[test]
    fn failed_batch_keeps_selection_and_rows() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        mock.fail_mutations(GatewayError::Timeout {
            detail: "10s elapsed".to_string(),
        });
        content(&mut app, ContentMessage::ToggleSelect);
        content(&mut app, ContentMessage::BatchDelete);
        modal(&mut app, ModalMessage::ToggleConfirmFocus);
        modal(&mut app, ModalMessage::Confirm);

        // 失败：不清勾选、不重载，意外失败弹出错误框
        assert_eq!(app.clusters.selected_ids(), vec![1]);
        assert_eq!(mock.list_call_count(), 1);
        assert!(matches!(&app.modal.active, Some(Modal::Error { .. })));
    }

    #[test]
    fn batch_actions_require_nonempty_selection() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        content(&mut app, ContentMessage::BatchDelete);
        content(&mut app, ContentMessage::BatchEnable);
        content(&mut app, ContentMessage::BatchDisable);
        assert!(app.modal.active.is_none());
        assert_eq!(mock.calls().len(), 1);
    }

    // ========== 详情面板 ==========

    #[test]
    fn detail_panel_replaces_target_directly() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true), cluster(2, "b", true)]);
        content(&mut app, ContentMessage::Confirm);
        assert_eq!(app.clusters.detail.as_ref().map(|c| c.id), Some(1));

        // 打开第二条时直接替换目标，中间不出现空状态
        content(&mut app, ContentMessage::SelectNext);
        content(&mut app, ContentMessage::Confirm);
        assert_eq!(app.clusters.detail.as_ref().map(|c| c.id), Some(2));

        // 打开详情不发起网络调用
        assert_eq!(mock.list_call_count(), 1);

        update(&mut app, AppMessage::GoBack);
        assert!(app.clusters.detail.is_none());
    }

    // ========== 心跳检测 ==========

    #[test]
    fn heartbeat_issues_custom_action_then_resets() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        content(&mut app, ContentMessage::ToggleSelect);
        content(&mut app, ContentMessage::Heartbeat);

        let calls = mock.calls();
        assert_eq!(calls[1], GatewayCall::Custom("heartbeats".to_string()));
        assert!(matches!(calls[2], GatewayCall::List(_)));
        // 具名提示 + 勾选清空
        assert!(app.status_message.is_some());
        assert_eq!(app.clusters.selected_count(), 0);
    }

    #[test]
    fn heartbeat_reloads_even_on_failure() {
        let (mut app, mock) = test_app(vec![cluster(1, "a", true)]);
        mock.fail_mutations(GatewayError::Network {
            detail: "down".to_string(),
        });
        content(&mut app, ContentMessage::Heartbeat);

        // 无论成败都重载并重置
        assert_eq!(mock.list_call_count(), 2);
        assert!(app.status_message.is_some());
    }
}
