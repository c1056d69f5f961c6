//! Top-level UI layout — title, input box, chart + side column, status bar.

pub mod chart_panel;
pub mod history_panel;
pub mod input_panel;
pub mod metrics_panel;
pub mod overlays;
pub mod status_bar;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;

pub const TITLE: &str = "Crash Predictor — Flat & Martingale Balance Tracker";

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        f.area(),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(Span::styled(TITLE, theme::accent_bold())).alignment(Alignment::Center);
    f.render_widget(title, rows[0]);

    input_panel::render(f, rows[1], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[2]);

    draw_panel(f, columns[0], " SOL Balances ", |f, inner| {
        chart_panel::render(f, inner, app)
    });

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(columns[1]);

    draw_panel(f, side[0], " Accuracy ", |f, inner| {
        metrics_panel::render(f, inner, app)
    });
    draw_panel(f, side[1], " History [↑/↓] ", |f, inner| {
        history_panel::render(f, inner, app)
    });

    status_bar::render(f, rows[3], app);

    if app.overlay == Overlay::Help {
        overlays::render_help(f, rows[2], app);
    }
}

/// Draw a bordered panel and hand its inner area to `body`.
fn draw_panel(f: &mut Frame, area: Rect, title: &str, body: impl FnOnce(&mut Frame, Rect)) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(title)
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);
    body(f, inner);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
