//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
