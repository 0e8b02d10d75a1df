//! Cluster Console TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 网关调用的同步封装 (`backend/`)
//!
//! 启动流程：初始化日志（写入文件，终端留给 UI）→ 加载配置 →
//! 构建 Backend（REST 网关 + tokio 运行时）→ 初始化终端 →
//! 进入主循环 → 无论成功与否都恢复终端。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

use util::{init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志写入文件（stdout 被 UI 占用）
    let log_file =
        File::create("cluster-console-tui.log").context("failed to create log file")?;
    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .context("failed to initialize logger")?;

    // 2. 加载配置并构建后端
    let config = backend::load_or_default();
    let backend = backend::Backend::new(&config)?;

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例并运行主循环
    let mut app = model::App::new(backend, config);
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
