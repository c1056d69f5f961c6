//! Recent records, newest first, with the martingale stake placed on each.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.records.is_empty() {
        return;
    }

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        format!("{:>4} {:<6} {:>7} {:<8} {:>8}", "#", "Pred", "Actual", "Result", "Stake"),
        theme::accent_bold(),
    ))];

    let visible = area.height.saturating_sub(1) as usize;
    let rows = app
        .records
        .iter()
        .zip(&app.stakes)
        .enumerate()
        .rev()
        .skip(app.history_scroll)
        .take(visible);

    for (i, (record, stake)) in rows {
        let stake = if *stake > 0.0 {
            format!("{stake:.4}")
        } else {
            "-".to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>4} ", i + 1), theme::muted()),
            Span::styled(format!("{:<6} ", record.prediction()), theme::neutral()),
            Span::styled(format!("{:>7.2} ", record.actual()), theme::text()),
            Span::styled(
                format!("{:<8} ", record.verdict()),
                theme::verdict_style(record.correct()),
            ),
            Span::styled(format!("{stake:>8}"), theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}
