//! 首页视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(_app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", texts.home.welcome),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("  {}", texts.home.welcome_desc),
            Style::default().fg(c.muted),
        ),
        Line::from(""),
        Line::styled(
            format!("  {}", texts.home.quick_actions),
            Style::default().fg(c.highlight),
        ),
        Line::styled(
            format!("    · {}", texts.home.manage_clusters),
            Style::default().fg(c.fg),
        ),
        Line::styled(
            format!("    · {}", texts.home.configure_settings),
            Style::default().fg(c.fg),
        ),
    ];

    frame.render_widget(Paragraph::new(content), area);
}
