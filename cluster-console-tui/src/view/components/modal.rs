//! 弹窗组件
//!
//! 表单弹窗按 schema 的表单字段逐个渲染；确认对话框的标题与
//! 正文来自操作本身，四种操作共用同一渲染函数。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::schema;
use crate::model::state::{FormMode, Modal};
use crate::model::App;
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::ClusterForm { .. } => render_cluster_form(frame, modal),
        Modal::Confirm { .. } => render_confirm(frame, modal),
        Modal::Search { .. } => render_search(frame, modal),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 渲染新建/维护集群表单弹窗
fn render_cluster_form(frame: &mut Frame, modal: &Modal) {
    let Modal::ClusterForm {
        mode,
        values,
        focus,
        error,
    } = modal
    else {
        return;
    };

    let texts = t();
    let fields = schema::form_fields();

    let title = match mode {
        FormMode::Create => texts.modal.create_title,
        FormMode::Update { .. } => texts.modal.update_title,
    };

    // 高度：每个字段 3 行 + 错误行(2) + 提示(2) + 边框(2)
    let height = (fields.len() as u16) * 3 + 2 + 2 + 2;
    let area = centered_rect(52, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);
    let mut lines = Vec::new();

    for (i, descriptor) in fields.iter().enumerate() {
        let focused = *focus == i;
        let is_enum = schema::is_enum_field(descriptor.key);
        let value = values.get(i).map(String::as_str).unwrap_or("");

        // 标签行：必填字段加 *
        let mut label = descriptor.key.label(texts).to_string();
        if descriptor.required {
            label.push_str(" *");
        } else if !is_enum {
            label.push_str(texts.modal.optional_suffix);
        }
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Gray)),
            if focused && is_enum {
                Span::styled(" (←→)", Style::default().fg(Color::DarkGray))
            } else {
                Span::raw("")
            },
        ]));

        // 值行
        let display = if is_enum {
            format!(
                "  {} {} {}",
                if focused { "◀" } else { " " },
                value,
                if focused { "▶" } else { " " }
            )
        } else if focused {
            format!("  {}▎", value.replace('\n', " "))
        } else {
            format!("  {}", value.replace('\n', " "))
        };

        let value_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::styled(display, value_style));
        lines.push(Line::from(""));
    }

    // 错误信息（本地校验或提交失败）
    if let Some(err) = error {
        lines.push(Line::styled(
            format!("  ⚠ {}", err),
            Style::default().fg(Color::Red),
        ));
    } else {
        lines.push(Line::from(""));
    }

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled("  Tab", Style::default().fg(Color::Yellow)),
        Span::styled(" | ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.common.confirm),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.common.cancel),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染确认对话框（删除/批量删除/批量启用/批量禁用共用）
fn render_confirm(frame: &mut Frame, modal: &Modal) {
    let Modal::Confirm { action, focus } = modal else {
        return;
    };

    let texts = t();
    let area = centered_rect(44, 9, frame.area());
    frame.render_widget(Clear, area);

    let border_color = if action.is_delete() {
        Color::Red
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(format!(" {} ", action.title(texts)))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let cancel_style = if *focus == 0 {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };

    let confirm_style = if *focus == 1 {
        Style::default().fg(Color::Black).bg(border_color)
    } else {
        Style::default().fg(border_color)
    };

    let subject = action
        .subject_name()
        .map(|name| format!("  \"{}\"", name))
        .unwrap_or_default();

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", action.message(texts)),
            Style::default().fg(Color::White),
        ),
        Line::styled(subject, Style::default().fg(Color::Yellow)),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.cancel), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.common.confirm), confirm_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染搜索弹窗
fn render_search(frame: &mut Frame, modal: &Modal) {
    let Modal::Search { input } = modal else {
        return;
    };

    let texts = t();
    let area = centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.search_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let lines = vec![
        Line::from(Span::styled(
            texts.modal.keyword_label,
            Style::default().fg(Color::Gray),
        )),
        Line::styled(format!("  {}▎", input), Style::default().fg(Color::Cyan)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Enter", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {} | ", texts.common.search),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {}", texts.common.cancel),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 2, area.width - 4, area.height - 4);

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            texts.help.close_hint,
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let c = colors();
    let area = centered_rect(56, 21, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(area.x + 2, area.y + 1, area.width - 4, area.height - 2);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:8}", key), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        Line::styled(
            texts.help.global_section,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        entry("Tab", texts.help.switch_panel),
        entry("↑↓/jk", texts.help.move_cursor),
        entry("Esc", texts.common.back),
        entry("Alt+r", texts.status.refreshing),
        entry("Alt+q", texts.common.quit),
        Line::from(""),
        Line::styled(
            texts.help.clusters_section,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        entry("Space", texts.help.toggle_select),
        entry("Enter", texts.help.open_detail),
        entry("←→/hl", texts.help.switch_page),
        entry("s", texts.help.cycle_sort),
        entry("o", texts.help.toggle_order),
        entry("1-3", texts.help.cycle_filters),
        entry("c", texts.help.clear_filters),
        entry("/", texts.modal.search_title),
        entry("H", texts.clusters.heartbeat),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}
