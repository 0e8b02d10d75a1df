//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Modal;
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat，
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // Alt+q: 退出
    if key.modifiers == KeyModifiers::ALT && key.code == KeyCode::Char('q') {
        return AppMessage::Quit;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match &app.current_page {
        Page::Clusters => handle_clusters_keys(key, app),
        Page::Settings => handle_settings_keys(key),
        Page::Home => AppMessage::Noop,
    }
}

/// 处理集群页面的按键
fn handle_clusters_keys(key: KeyEvent, app: &App) -> AppMessage {
    // 行级操作
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    // 批量操作（批量操作栏仅在勾选集非空时出现）
    if app.clusters.selected_count() > 0 {
        if DefaultKeymap::BATCH_DELETE.matches(&key) {
            return AppMessage::Content(ContentMessage::BatchDelete);
        }
        if DefaultKeymap::BATCH_ENABLE.matches(&key) {
            return AppMessage::Content(ContentMessage::BatchEnable);
        }
        if DefaultKeymap::BATCH_DISABLE.matches(&key) {
            return AppMessage::Content(ContentMessage::BatchDisable);
        }
    }

    // 工具栏：心跳检测
    if DefaultKeymap::HEARTBEAT.matches(&key) {
        return AppMessage::Content(ContentMessage::Heartbeat);
    }

    match key.code {
        // ↑ 或 k: 上一行
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一行
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // Home/End: 第一行/最后一行
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),

        // Enter: 打开详情面板
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),

        // 空格: 勾选/取消勾选当前行
        KeyCode::Char(' ') => AppMessage::Content(ContentMessage::ToggleSelect),

        // ← → 或 h l: 翻页
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextPage),

        // s: 循环排序列；o: 切换排序方向
        KeyCode::Char('s') => AppMessage::Content(ContentMessage::CycleSort),
        KeyCode::Char('o') => AppMessage::Content(ContentMessage::ToggleSortOrder),

        // 1..9: 循环第 n 个可筛选字段；c: 清除筛选
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            let index = (ch as usize) - ('1' as usize);
            AppMessage::Content(ContentMessage::CycleFilter(index))
        }
        KeyCode::Char('c') if key.modifiers.is_empty() => {
            AppMessage::Content(ContentMessage::ClearFilters)
        }

        // /: 关键字搜索
        KeyCode::Char('/') => AppMessage::Content(ContentMessage::OpenSearch),

        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ←: 切换到上一个值
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        // →: 切换到下一个值
        KeyCode::Right => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗（同步本地取消）
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        (KeyModifiers::NONE, KeyCode::Esc) => {
            return AppMessage::Modal(ModalMessage::Close);
        }
        _ => {}
    }

    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ClusterForm { .. } => handle_form_keys(key),
        Modal::Confirm { .. } => handle_confirm_keys(key),
        Modal::Search { .. } => handle_search_keys(key),
        Modal::Help | Modal::Error { .. } => {
            // 帮助和错误弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter | KeyCode::Esc => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理表单弹窗的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Modal(ModalMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Modal(ModalMessage::PrevField),

        // ← →: 切换枚举字段选项（文本字段忽略）
        KeyCode::Left => AppMessage::Modal(ModalMessage::PrevOption),
        KeyCode::Right => AppMessage::Modal(ModalMessage::NextOption),

        // Enter: 提交
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        // Backspace: 删除字符
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),

        // 字符输入
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理确认对话框的按键
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换 取消/确认 焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleConfirmFocus)
        }

        // Enter: 执行当前焦点（默认在取消上）
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 处理搜索弹窗的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Modal(ModalMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}
