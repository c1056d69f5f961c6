//! Balance chart — flat and martingale series as braille line graphs.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use crashlab_core::simulator::Strategy;

use crate::app::AppState;
use crate::theme;

pub const EMPTY_HINT: &str = "Add at least one multiplier to start tracking.";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.dashboard.series.is_empty() {
        render_empty(f, area);
    } else {
        render_chart(f, area, app);
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(EMPTY_HINT, theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// `(index, value)` points for a series.
fn points(series: &[f64]) -> Vec<(f64, f64)> {
    series
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

/// Y bounds over both series, padded 5%. A flat line gets a fixed margin.
/// Non-finite points (an overflowed martingale) are left out of the bounds.
pub fn y_bounds(a: &[f64], b: &[f64]) -> [f64; 2] {
    let (min_y, max_y) = a
        .iter()
        .chain(b)
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min_y > max_y {
        return [-0.01, 0.01];
    }
    let range = max_y - min_y;
    let padding = if range > 0.0 { range * 0.05 } else { 0.01 };
    [min_y - padding, max_y + padding]
}

fn dataset(strategy: Strategy, data: &[(f64, f64)]) -> Dataset<'_> {
    Dataset::default()
        .name(format!("{} Balance", strategy.label()))
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::strategy_color(strategy)))
        .graph_type(GraphType::Line)
        .data(data)
}

fn render_chart(f: &mut Frame, area: Rect, app: &AppState) {
    let series = &app.dashboard.series;
    let flat = points(&series.flat);
    let martingale = points(&series.martingale);
    let [y_min, y_max] = y_bounds(&series.flat, &series.martingale);
    let x_max = series.len().saturating_sub(1) as f64;

    let chart = Chart::new(vec![
        dataset(Strategy::Flat, &flat),
        dataset(Strategy::Martingale, &martingale),
    ])
    .x_axis(
        Axis::default()
            .title(Span::styled("Prediction", theme::muted()))
            .style(theme::muted())
            .bounds([0.0, x_max.max(1.0)])
            .labels(vec![
                Span::styled("1", theme::muted()),
                Span::styled(format!("{}", series.len()), theme::muted()),
            ]),
    )
    .y_axis(
        Axis::default()
            .title(Span::styled("SOL", theme::muted()))
            .style(theme::muted())
            .bounds([y_min, y_max])
            .labels(vec![
                Span::styled(format!("{:.4}", y_min), theme::muted()),
                Span::styled(format!("{:.4}", y_max), theme::muted()),
            ]),
    );

    f.render_widget(chart, area);
}
