//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 应用级主消息
//!         mod content;        // 内容面板子消息（表格/批量操作/心跳）
//!         mod modal;          // 弹窗子消息（表单/确认/搜索）
//!         mod navigation;     // 导航栏子消息
//!
//! 在 src/event/handler.rs 中，handle_event 接收原始按键事件并返回
//! 一条 AppMessage；Update 层消费该消息并修改 Model。
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
