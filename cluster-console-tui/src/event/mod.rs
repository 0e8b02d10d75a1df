//! Event 层：输入处理
//!
//! 轮询终端事件，并把按键翻译成 Message 层的消息

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
