//! 弹窗/对话框状态
//!
//! 每种弹窗一个变体，携带该弹窗的全部本地状态。
//! 状态机：关闭 → 打开 → {提交成功关闭 | 失败留在打开态重试} | 取消关闭。

use cluster_console_client::Cluster;

use crate::i18n::Translations;
use crate::model::schema;

/// 表单模式：新建或维护既有记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// 新建（提交时不带 id）
    Create,
    /// 维护（id 随表单携带，但不可编辑）
    Update { id: i64 },
}

/// 确认弹窗承载的操作
///
/// 三个批量操作共用同一实现，只在文案与网关调用上有差异，
/// 通过这里的访问器区分，不在处理代码里逐个特判。
#[derive(Debug, Clone)]
pub enum ConfirmAction {
    /// 删除单条记录（行级操作）
    DeleteOne(Cluster),
    /// 批量删除勾选集
    DeleteSelected,
    /// 批量启用勾选集
    EnableSelected,
    /// 批量禁用勾选集
    DisableSelected,
}

impl ConfirmAction {
    /// 批量启用/禁用的目标值；删除类操作返回 None
    pub fn target_enabled(&self) -> Option<bool> {
        match self {
            Self::EnableSelected => Some(true),
            Self::DisableSelected => Some(false),
            Self::DeleteOne(_) | Self::DeleteSelected => None,
        }
    }

    /// 是否为删除类操作
    pub fn is_delete(&self) -> bool {
        matches!(self, Self::DeleteOne(_) | Self::DeleteSelected)
    }

    /// 弹窗标题
    pub fn title(&self, texts: &Translations) -> &'static str {
        match self {
            Self::DeleteOne(_) | Self::DeleteSelected => texts.modal.delete_title,
            Self::EnableSelected => texts.modal.enable_title,
            Self::DisableSelected => texts.modal.disable_title,
        }
    }

    /// 弹窗正文
    pub fn message(&self, texts: &Translations) -> &'static str {
        match self {
            Self::DeleteOne(_) => texts.modal.delete_one_confirm,
            Self::DeleteSelected => texts.modal.delete_selected_confirm,
            Self::EnableSelected => texts.modal.enable_selected_confirm,
            Self::DisableSelected => texts.modal.disable_selected_confirm,
        }
    }

    /// 被点名的记录名称（单条删除时展示）
    pub fn subject_name(&self) -> Option<&str> {
        match self {
            Self::DeleteOne(cluster) => Some(&cluster.name),
            _ => None,
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 新建/维护集群表单
    ClusterForm {
        /// 新建或维护
        mode: FormMode,
        /// 表单值，与 schema 的表单字段一一对应
        values: Vec<String>,
        /// 当前焦点字段索引
        focus: usize,
        /// 校验/提交错误
        error: Option<String>,
    },
    /// 确认对话框（删除/批量删除/批量启用/批量禁用共用）
    Confirm {
        action: ConfirmAction,
        /// 焦点：0=取消, 1=确认
        focus: usize,
    },
    /// 关键字搜索
    Search { input: String },
    /// 帮助信息
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示新建集群表单
    pub fn show_create_form(&mut self) {
        self.active = Some(Modal::ClusterForm {
            mode: FormMode::Create,
            values: schema::default_form_values(),
            focus: 0,
            error: None,
        });
    }

    /// 显示维护集群表单，字段值从目标记录预填
    pub fn show_update_form(&mut self, cluster: &Cluster) {
        self.active = Some(Modal::ClusterForm {
            mode: FormMode::Update { id: cluster.id },
            values: schema::form_values_from(cluster),
            focus: 0,
            error: None,
        });
    }

    /// 显示确认对话框（默认焦点在取消上）
    pub fn show_confirm(&mut self, action: ConfirmAction) {
        self.active = Some(Modal::Confirm { action, focus: 0 });
    }

    /// 显示搜索弹窗
    pub fn show_search(&mut self, current: Option<&str>) {
        self.active = Some(Modal::Search {
            input: current.unwrap_or_default().to_string(),
        });
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::t;

    fn cluster(id: i64, name: &str) -> Cluster {
        let json = format!(r#"{{"id": {id}, "name": "{name}"}}"#);
        serde_json::from_str(&json).unwrap_or_else(|e| panic!("cluster must parse: {e}"))
    }

    #[test]
    fn create_form_starts_empty_with_defaults() {
        let mut modal = ModalState::new();
        modal.show_create_form();
        let Some(Modal::ClusterForm { mode, values, .. }) = &modal.active else {
            unreachable!("expected form modal");
        };
        assert_eq!(*mode, FormMode::Create);
        assert_eq!(values.len(), schema::form_fields().len());
        // 名称为空，类型有默认值
        assert!(values[0].is_empty());
    }

    #[test]
    fn update_form_prefills_and_carries_id() {
        let mut modal = ModalState::new();
        modal.show_update_form(&cluster(5, "old"));
        let Some(Modal::ClusterForm { mode, values, .. }) = &modal.active else {
            unreachable!("expected form modal");
        };
        assert_eq!(*mode, FormMode::Update { id: 5 });
        assert_eq!(values[0], "old");
    }

    #[test]
    fn confirm_actions_share_one_shape() {
        let texts = t();
        let actions = [
            ConfirmAction::DeleteOne(cluster(1, "a")),
            ConfirmAction::DeleteSelected,
            ConfirmAction::EnableSelected,
            ConfirmAction::DisableSelected,
        ];
        for action in &actions {
            // 每个操作都有标题与正文，不需要逐个特判
            assert!(!action.title(texts).is_empty());
            assert!(!action.message(texts).is_empty());
        }
        assert_eq!(actions[2].target_enabled(), Some(true));
        assert_eq!(actions[3].target_enabled(), Some(false));
        assert!(actions[0].is_delete());
        assert!(actions[1].is_delete());
        assert_eq!(actions[0].subject_name(), Some("a"));
        assert_eq!(actions[1].subject_name(), None);
    }

    #[test]
    fn close_discards_any_modal() {
        let mut modal = ModalState::new();
        modal.show_confirm(ConfirmAction::DeleteSelected);
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }
}
