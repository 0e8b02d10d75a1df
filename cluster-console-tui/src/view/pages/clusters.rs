//! 集群页面视图
//!
//! 自上而下：筛选/排序状态行、表头、数据行、分页脚注、
//! 批量操作栏（仅勾选集非空时出现）。详情面板打开时在右侧
//! 分出一块抽屉区域，渲染 schema 的详情字段。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use cluster_console_client::{Cluster, SortOrder};

use crate::i18n::t;
use crate::model::schema::{self, SemanticTag};
use crate::model::App;
use crate::util::pad_to_width;
use crate::view::theme::colors;

/// 渲染集群页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 详情面板打开时分出右侧抽屉
    let (table_area, detail_area) = if app.clusters.detail.is_some() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    render_table(app, frame, table_area);

    if let Some(detail_area) = detail_area {
        render_detail(app, frame, detail_area);
    }
}

/// 渲染表格区（状态行 + 表头 + 行集 + 脚注 + 批量操作栏）
fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let has_batch_bar = app.clusters.selected_count() > 0;
    let mut constraints = vec![
        Constraint::Length(1), // 筛选/排序状态行
        Constraint::Length(1), // 表头
        Constraint::Min(1),    // 数据行
        Constraint::Length(1), // 分页脚注
    ];
    if has_batch_bar {
        constraints.push(Constraint::Length(1));
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_query_line(app, frame, rows[0]);
    render_header(app, frame, rows[1]);
    if app.clusters.records.is_empty() {
        render_empty(app, frame, rows[2]);
    } else {
        render_rows(app, frame, rows[2]);
    }
    render_footer(app, frame, rows[3]);
    if has_batch_bar {
        render_batch_bar(app, frame, rows[4]);
    }
}

/// 当前筛选与排序状态行
fn render_query_line(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let query = &app.clusters.query;

    let mut parts: Vec<String> = Vec::new();
    for descriptor in schema::filterable_fields() {
        let label = descriptor.key.label(texts);
        let value = match descriptor.key {
            schema::FieldKey::Type => query
                .filter_type
                .map(|v| v.as_str().to_string()),
            schema::FieldKey::Status => query.filter_status.map(|s| {
                match s {
                    cluster_console_client::ClusterStatus::Normal => texts.fields.status_normal,
                    cluster_console_client::ClusterStatus::Abnormal => {
                        texts.fields.status_abnormal
                    }
                }
                .to_string()
            }),
            schema::FieldKey::Enabled => query.filter_enabled.map(|e| {
                if e {
                    texts.fields.enabled_on.to_string()
                } else {
                    texts.fields.enabled_off.to_string()
                }
            }),
            _ => None,
        };
        parts.push(format!(
            "{}: {}",
            label,
            value.unwrap_or_else(|| texts.clusters.filter_all.to_string())
        ));
    }

    if let Some(keyword) = &query.keyword {
        parts.push(format!("{}: \"{}\"", texts.common.search, keyword));
    }

    let sort_display = match (&query.sort_field, query.sort_order) {
        (Some(field), Some(order)) => {
            let arrow = match order {
                SortOrder::Ascending => "▲",
                SortOrder::Descending => "▼",
            };
            format!("{}: {} {}", texts.clusters.sort, field, arrow)
        }
        _ => format!("{}: -", texts.clusters.sort),
    };
    parts.push(sort_display);

    let line = Line::styled(
        format!("  {} │ {}", texts.clusters.filters, parts.join("  ")),
        Style::default().fg(c.muted),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// 表头：schema 的表格列 + 勾选列
fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let query = &app.clusters.query;

    let mut spans = vec![Span::styled("  [ ] ", Style::default().fg(c.muted))];
    for descriptor in schema::table_fields() {
        let width = schema::column_width(descriptor.key);
        let mut label = descriptor.key.label(texts).to_string();
        // 当前排序列加方向标记
        if query.sort_field.as_deref() == Some(descriptor.key.as_str()) {
            label.push_str(match query.sort_order {
                Some(SortOrder::Descending) => " ▼",
                _ => " ▲",
            });
        }
        spans.push(Span::styled(
            pad_to_width(&label, width),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let message = if app.clusters.loading {
        texts.common.loading
    } else {
        texts.clusters.no_clusters
    };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {}", message), Style::default().fg(c.muted)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染数据行
fn render_rows(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let items: Vec<ListItem> = app
        .clusters
        .records
        .iter()
        .enumerate()
        .map(|(i, cluster)| {
            let is_cursor = i == app.clusters.cursor;
            let is_checked = app.clusters.is_selected(cluster.id);

            let row_style = if is_cursor {
                Style::default()
                    .fg(c.selected_fg)
                    .bg(c.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            let checkbox = if is_checked { "  [x] " } else { "  [ ] " };
            let mut spans = vec![Span::styled(
                checkbox,
                if is_checked {
                    Style::default().fg(c.highlight)
                } else {
                    row_style
                },
            )];

            for descriptor in schema::table_fields() {
                let width = schema::column_width(descriptor.key);
                let value = schema::display_value(cluster, descriptor.key, texts);
                let cell_style = match schema::semantic_tag(cluster, descriptor.key) {
                    _ if is_cursor => row_style,
                    Some(SemanticTag::Success) => Style::default().fg(c.success),
                    Some(SemanticTag::Error) => Style::default().fg(c.error),
                    None => row_style,
                };
                spans.push(Span::styled(pad_to_width(&value, width), cell_style));
                spans.push(Span::raw(" "));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.clusters.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 分页脚注
fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let line = Line::styled(
        format!(
            "  {} {}/{} · {} {} ",
            texts.clusters.page,
            app.clusters.query.page,
            app.clusters.page_count(),
            texts.clusters.total,
            app.clusters.total,
        ),
        Style::default().fg(c.muted),
    );
    frame.render_widget(Paragraph::new(line), area);
}

/// 批量操作栏（勾选集非空时出现）
fn render_batch_bar(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let line = Line::from(vec![
        Span::styled(
            format!(
                "  {} {} {}",
                texts.clusters.selected_prefix,
                app.clusters.selected_count(),
                texts.clusters.selected_suffix,
            ),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "  {} {} {}",
                texts.clusters.disabled_prefix,
                app.clusters.disabled_count(),
                texts.clusters.disabled_suffix,
            ),
            Style::default().fg(c.muted),
        ),
        Span::raw("   "),
        Span::styled("[D] ", Style::default().fg(c.error)),
        Span::styled(texts.clusters.batch_delete, Style::default().fg(c.fg)),
        Span::raw("  "),
        Span::styled("[E] ", Style::default().fg(c.success)),
        Span::styled(texts.clusters.batch_enable, Style::default().fg(c.fg)),
        Span::raw("  "),
        Span::styled("[X] ", Style::default().fg(c.warning)),
        Span::styled(texts.clusters.batch_disable, Style::default().fg(c.fg)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// 详情抽屉：按 schema 的详情字段渲染只读视图
fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    let Some(cluster) = &app.clusters.detail else {
        return;
    };

    let texts = t();
    let c = colors();

    let block = Block::default()
        .title(format!(" {} ", texts.clusters.detail_title))
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 目标名称为空时不渲染内容
    if cluster.name.is_empty() {
        return;
    }

    render_detail_fields(cluster, frame, inner);
}

fn render_detail_fields(cluster: &Cluster, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let mut lines = vec![
        Line::styled(
            format!(" {}", cluster.name),
            Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    for descriptor in schema::detail_fields() {
        let label = descriptor.key.label(texts);
        let value = schema::display_value(cluster, descriptor.key, texts);
        let value_style = match schema::semantic_tag(cluster, descriptor.key) {
            Some(SemanticTag::Success) => Style::default().fg(c.success),
            Some(SemanticTag::Error) => Style::default().fg(c.error),
            None => Style::default().fg(c.fg),
        };

        // 多行字段逐行展开
        if descriptor.multiline && value.contains('\n') {
            lines.push(Line::styled(
                format!(" {}:", label),
                Style::default().fg(c.muted),
            ));
            for part in value.lines() {
                lines.push(Line::styled(format!("   {}", part), value_style));
            }
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:12}", label), Style::default().fg(c.muted)),
                Span::styled(value, value_style),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!(" Esc {}", texts.common.close),
        Style::default().fg(c.muted),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}
