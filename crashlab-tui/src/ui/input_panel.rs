//! Multiplier entry box.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Enter multiplier (e.g. 1.87 or 187 for %) ")
        .title_style(theme::accent_bold());

    let line = Line::from(vec![
        Span::styled("> ", theme::accent()),
        Span::styled(app.input.as_str(), theme::text()),
        Span::styled("█", theme::accent()),
        Span::styled("   [Enter] Add  [Ctrl+R] Reset Data  [F1] Help", theme::muted()),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}
