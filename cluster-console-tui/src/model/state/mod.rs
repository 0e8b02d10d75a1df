//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod clusters;
mod modal;
mod settings;

pub use clusters::ClustersState;
pub use modal::{ConfirmAction, FormMode, Modal, ModalState};
pub use settings::{SettingItem, SettingsState, Theme};
