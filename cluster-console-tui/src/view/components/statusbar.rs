//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = Vec::new();

    hints.push(("Tab", texts.help.switch_panel));

    match app.focus {
        FocusPanel::Navigation => {
            hints.push(("↑↓", texts.help.move_cursor));
            hints.push(("Enter", texts.common.confirm));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Home => {
                hints.push(("↑↓", texts.help.move_cursor));
            }
            Page::Clusters => {
                hints.push(("Space", texts.help.toggle_select));
                hints.push(("Enter", texts.clusters.detail_title));
                hints.push(("Alt+a", texts.common.add));
                hints.push(("Alt+e", texts.common.edit));
                hints.push(("Alt+d", texts.common.delete));
                hints.push(("H", texts.clusters.heartbeat));
                if app.clusters.selected_count() > 0 {
                    hints.push(("D", texts.clusters.batch_delete));
                    hints.push(("E", texts.clusters.batch_enable));
                    hints.push(("X", texts.clusters.batch_disable));
                }
            }
            Page::Settings => {
                hints.push(("↑↓", texts.help.move_cursor));
                hints.push(("←→", texts.help.toggle_value));
            }
        },
    }

    hints.push(("Alt+q", texts.common.quit));

    hints
}
