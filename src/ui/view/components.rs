//! 通用 UI 组件
//!
//! 条目列表、输入框、提示框等

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::models::Beer;

/// [组件] 条目列表，每行为名称 + 操作按钮
pub fn render_beer_list(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    beers: &[Beer],
    control: &str,
    selected: Option<usize>,
) {
    let items: Vec<ListItem> = beers
        .iter()
        .map(|beer| {
            ListItem::new(Line::from(vec![
                Span::raw(beer.name.clone()),
                Span::raw("  "),
                Span::styled(format!("[{}]", control), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let border_style = if selected.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(selected);

    frame.render_stateful_widget(list, area, &mut state);
}

/// [组件] 带有标题和样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(value)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 居中提示框（加载中 / 错误）
pub fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    frame.render_widget(Clear, area);
    let notice = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(notice, area);
}
