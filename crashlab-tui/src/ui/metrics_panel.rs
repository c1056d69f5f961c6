//! Metrics — latest balances, prediction counts and accuracy.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crashlab_core::metrics::format_balance;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let d = &app.dashboard;
    if d.is_empty() {
        let line = Line::from(Span::styled("No predictions yet.", theme::muted()));
        f.render_widget(Paragraph::new(line), area);
        return;
    }

    let mut lines = Vec::new();

    if let Some(flat) = d.series.latest_flat() {
        lines.push(metric_line(
            "Flat Balance",
            format_balance(flat),
            theme::balance_style(flat),
        ));
    }
    if let Some(mg) = d.series.latest_martingale() {
        lines.push(metric_line(
            "Martingale Balance",
            format_balance(mg),
            theme::balance_style(mg),
        ));
    }
    lines.push(Line::from(""));
    lines.push(metric_line(
        "Total Predictions",
        d.summary.total.to_string(),
        theme::text(),
    ));
    lines.push(metric_line(
        "Correct Predictions",
        d.summary.correct.to_string(),
        theme::text(),
    ));
    if let (Some(acc), Some(pct)) = (d.summary.accuracy, d.summary.accuracy_pct()) {
        lines.push(metric_line("Accuracy", pct, theme::accuracy_style(acc)));
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn metric_line(label: &str, value: String, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<20}"), theme::muted()),
        Span::styled(value, style),
    ])
}
