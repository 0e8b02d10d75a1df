//! 弹窗更新逻辑
//!
//! 表单与确认对话框的状态机都在这里：
//! 关闭 → 打开 → {提交中 → 成功关闭 | 失败留在打开态} | 取消关闭。
//! 本地校验不通过的提交永远到不了网关。

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::schema;
use crate::model::state::{ConfirmAction, FormMode, Modal};
use crate::model::App;

use super::content::{reload, reload_and_reset};

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ClusterForm { .. } => handle_form(app, msg),
        Modal::Confirm { .. } => handle_confirm(app, msg),
        Modal::Search { .. } => handle_search(app, msg),
        Modal::Help | Modal::Error { .. } => handle_simple_modal(app, msg),
    }
}

/// 处理新建/维护表单弹窗
fn handle_form(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ClusterForm {
        ref mode,
        ref mut values,
        ref mut focus,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    let fields = schema::form_fields();

    match msg {
        ModalMessage::Close => {
            // 取消：丢弃草稿关闭；维护表单的目标记录随弹窗一起清除
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::NextField => {
            *focus = (*focus + 1) % fields.len();
        }

        ModalMessage::PrevField => {
            if *focus == 0 {
                *focus = fields.len() - 1;
            } else {
                *focus -= 1;
            }
        }

        ModalMessage::NextOption | ModalMessage::PrevOption => {
            let forward = matches!(msg, ModalMessage::NextOption);
            let key = fields[*focus].key;
            if let Some(next) = schema::cycle_enum_value(key, &values[*focus], forward) {
                values[*focus] = next;
            }
        }

        ModalMessage::Input(ch) => {
            if !schema::is_enum_field(fields[*focus].key) {
                values[*focus].push(ch);
                *error = None;
            }
        }

        ModalMessage::Backspace => {
            if !schema::is_enum_field(fields[*focus].key) {
                values[*focus].pop();
            }
        }

        ModalMessage::Confirm => {
            // 本地校验在先：必填字段为空时不发起任何网关调用，弹窗保持打开
            if let Some(message) = schema::validate_form_values(values, t()) {
                *error = Some(message);
                return;
            }

            let id = match mode {
                FormMode::Create => None,
                FormMode::Update { id } => Some(*id),
            };
            let payload = schema::payload_from_values(values, id);
            submit_form(app, payload);
        }

        ModalMessage::ToggleConfirmFocus => {}
    }
}

/// 提交表单：成功关闭弹窗并重载；失败保留弹窗供修正
fn submit_form(app: &mut App, payload: cluster_console_client::ClusterPayload) {
    let texts = t();
    let is_create = payload.id.is_none();
    let result = if is_create {
        app.backend.create(&payload)
    } else {
        app.backend.update(&payload)
    };

    match result {
        Ok(()) => {
            app.modal.close();
            app.set_status(if is_create {
                texts.status.created
            } else {
                texts.status.updated
            });
            // 新纪录只在下一次重载后可见
            reload(app);
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("submit cluster failed: {e}");
            } else {
                log::error!("submit cluster failed: {e}");
            }
            let message = e.to_string();
            if let Some(Modal::ClusterForm { ref mut error, .. }) = app.modal.active {
                *error = Some(message.clone());
            }
            app.set_status(format!("{}: {message}", texts.status.operation_failed));
        }
    }
}

/// 处理确认对话框（删除/批量删除/批量启用/批量禁用共用）
fn handle_confirm(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Confirm {
        ref action,
        ref mut focus,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            // 取消：零网关调用，状态原样保留
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::ToggleConfirmFocus
        | ModalMessage::NextField
        | ModalMessage::PrevField
        | ModalMessage::NextOption
        | ModalMessage::PrevOption => {
            *focus = usize::from(*focus == 0);
        }

        ModalMessage::Confirm => {
            if *focus == 1 {
                let action = action.clone();
                app.modal.close();
                execute_confirmed(app, action);
            } else {
                // 焦点在取消上
                app.modal.close();
                app.clear_status();
            }
        }

        _ => {}
    }
}

/// 执行已确认的操作：恰好一次网关调用，成功后清勾选集并重载
fn execute_confirmed(app: &mut App, action: ConfirmAction) {
    let texts = t();

    let ids = match &action {
        ConfirmAction::DeleteOne(cluster) => vec![cluster.id],
        _ => app.clusters.selected_ids(),
    };
    if ids.is_empty() {
        return;
    }

    let result = match action.target_enabled() {
        None => app.backend.delete(&ids),
        Some(enabled) => app.backend.set_enabled(&ids, enabled),
    };

    match result {
        Ok(()) => {
            let status = match action.target_enabled() {
                None => texts.status.deleted,
                Some(true) => texts.status.enabled_done,
                Some(false) => texts.status.disabled_done,
            };
            match action.subject_name() {
                Some(name) => app.set_status(format!("{status}: \"{name}\"")),
                None => app.set_status(status),
            }
            reload_and_reset(app);
        }
        Err(e) => {
            // 失败不动行集与勾选集，由操作者重试；
            // 业务拒绝走状态栏，意外失败弹错误框
            if e.is_expected() {
                log::warn!("batch operation failed: {e}");
                app.set_status(format!("{}: {e}", texts.status.operation_failed));
            } else {
                log::error!("batch operation failed: {e}");
                app.modal.show_error(texts.common.error, &e.to_string());
            }
        }
    }
}

/// 处理搜索弹窗
fn handle_search(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Search { ref mut input }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
            app.clear_status();
        }

        ModalMessage::Input(ch) => {
            input.push(ch);
        }

        ModalMessage::Backspace => {
            input.pop();
        }

        ModalMessage::Confirm => {
            let keyword = input.clone();
            app.modal.close();
            app.clusters.set_keyword(keyword);
            reload(app);
        }

        _ => {}
    }
}

/// 处理简单弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Close | ModalMessage::Confirm => {
            app.modal.close();
        }
        _ => {}
    }
}
