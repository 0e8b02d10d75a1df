//! Util 层：终端管理与文本工具

mod terminal;
mod text;

pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::pad_to_width;
