//!
//! app.rs
//! 应用主循环
//!
//! 单线程、协作式、事件驱动：所有工作都由用户输入或上一次
//! 网关调用的完成触发，没有后台轮询。主循环大约每 100 ms
//! 执行一次（取决于有无事件）：
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))    // 渲染 UI
//!     if app.should_quit { break }                // 检查是否应该退出
//!     if let Some(event) = poll_event() {         // 轮询输入，等待 100ms
//!         let msg = handle_event(event, &app);    // 翻译为消息
//!         update::update(&mut app, msg)           // 更新状态（可能阻塞等待网关）
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
