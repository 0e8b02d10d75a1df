//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::{SettingItem, Theme};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut lines = vec![Line::from("")];

    for (i, item) in SettingItem::all().iter().enumerate() {
        let is_selected = i == app.settings.selected_index;

        let (label, value) = match item {
            SettingItem::Theme => {
                let value = match app.settings.theme {
                    Theme::Dark => texts.settings.theme_dark,
                    Theme::Light => texts.settings.theme_light,
                };
                (texts.settings.theme, value)
            }
            SettingItem::Language => {
                (texts.settings.language, app.settings.language.display_name())
            }
        };

        let marker = if is_selected { "▶ " } else { "  " };
        let label_style = if is_selected {
            Style::default().fg(c.selected_fg).bg(c.selected_bg)
        } else {
            Style::default().fg(c.fg)
        };
        let value_style = if is_selected {
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(c.muted)
        };

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{}{:10}", marker, label), label_style),
            Span::styled(format!("  ◀ {} ▶", value), value_style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
