//! 视图层模块
//!
//! 每帧根据 Surface 完整重建，不做增量修补

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::state::{Focus, Surface, SurfaceMode};
use components::{render_beer_list, render_input_widget, render_notice};
use layouts::{centered_rect, columns};

pub const AVAILABLE_TITLE: &str = "Beers list";
pub const FAVOURITES_TITLE: &str = "Favourite beers";
pub const SEARCH_TITLE: &str = "Search";
pub const FAVOURITE_CONTROL: &str = "Favourite ⭐";
pub const REMOVE_CONTROL: &str = "Remove";
pub const LOADING_MESSAGE: &str = "Loading beers...";

/// 渲染 UI
pub fn draw(frame: &mut Frame, surface: &Surface) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(6),    // 三栏
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);

    match surface.mode() {
        SurfaceMode::Ready => {
            let [available, favourites, search] = columns(chunks[1]);
            render_beer_list(
                frame,
                available,
                AVAILABLE_TITLE,
                &surface.available,
                FAVOURITE_CONTROL,
                (surface.focus == Focus::Available).then_some(surface.available_selected),
            );
            render_beer_list(
                frame,
                favourites,
                FAVOURITES_TITLE,
                &surface.favourites,
                REMOVE_CONTROL,
                (surface.focus == Focus::Favourites).then_some(surface.favourites_selected),
            );
            render_search(frame, surface, search);
        }
        SurfaceMode::Loading => {
            if surface.loading {
                let area = centered_rect(50, 40, chunks[1]);
                render_notice(frame, area, LOADING_MESSAGE, Color::Cyan);
            }
        }
        SurfaceMode::Error => {
            if let Some(message) = surface.error {
                let area = centered_rect(60, 40, chunks[1]);
                render_notice(frame, area, message, Color::Red);
            }
        }
    }

    render_help(frame, surface, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🍺 Taproom")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_search(frame: &mut Frame, surface: &Surface, area: Rect) {
    let focused = surface.focus == Focus::Search;
    let block = Block::default().title(SEARCH_TITLE).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "Name contains",
        &surface.search_input,
        focused,
        Color::Yellow,
    );

    let button_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Gray)
    };
    let button = Paragraph::new("[ Search ]")
        .alignment(Alignment::Center)
        .style(button_style);
    frame.render_widget(button, chunks[1]);
}

fn render_help(frame: &mut Frame, surface: &Surface, area: Rect) {
    let help_text = match (surface.mode(), surface.focus) {
        (SurfaceMode::Loading | SurfaceMode::Error, _) => "[q] Quit",
        (SurfaceMode::Ready, Focus::Available) => {
            "[Enter/f] Favourite  [j/k] Move  [Tab] Next column  [/] Search  [q] Quit"
        }
        (SurfaceMode::Ready, Focus::Favourites) => {
            "[Enter/r] Remove  [j/k] Move  [Tab] Next column  [/] Search  [q] Quit"
        }
        (SurfaceMode::Ready, Focus::Search) => "Type a name, [Enter] Search  [Esc] Back",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
