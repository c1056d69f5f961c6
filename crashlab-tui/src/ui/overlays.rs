//! Help overlay — key bindings and the recent activity log.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;
use crate::ui::centered_rect;

const KEYS: [(&str, &str); 6] = [
    ("Enter", "Add the typed multiplier"),
    ("Ctrl+R", "Reset Data (deletes every record)"),
    ("Up/Down", "Scroll history"),
    ("F1 / ?", "Toggle this help"),
    ("Backspace", "Delete last character"),
    ("Esc / Ctrl+C", "Quit"),
];

pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(80, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let mut text = vec![Line::from(Span::styled("Keys", theme::accent_bold()))];
    for (key, what) in KEYS {
        text.push(Line::from(vec![
            Span::styled(format!("  {key:<14}"), theme::accent()),
            Span::styled(what, theme::muted()),
        ]));
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Values above 10 are read as percent: 187 → 1.87, 15.5 → 0.155.",
        theme::neutral(),
    )));
    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        format!("Activity ({})", app.activity.len()),
        theme::accent_bold(),
    )));

    for record in &app.activity {
        let style = match record.level {
            StatusLevel::Info => theme::muted(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        text.push(Line::from(vec![
            Span::styled(
                format!("  {} ", record.timestamp.format("%H:%M:%S")),
                theme::neutral(),
            ),
            Span::styled(record.message.as_str(), style),
        ]));
    }

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
