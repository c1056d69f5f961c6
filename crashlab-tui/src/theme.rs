//! Parrot/neon theme tokens for the CrashLab dashboard.
//!
//! # Color Palette
//! - **Accent**: Electric cyan (focus, flat balance line)
//! - **Positive**: Neon green (wins, balances at or above the start)
//! - **Negative**: Hot pink (losses, errors)
//! - **Warning**: Neon orange (martingale line, alerts)
//! - **Neutral**: Cool purple (secondary info)
//! - **Muted**: Steel blue (labels, hints)

use ratatui::style::{Color, Modifier, Style};

use crashlab_core::simulator::{Strategy, INITIAL_BALANCE};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Line color for a strategy's balance series.
pub fn strategy_color(strategy: Strategy) -> Color {
    match strategy {
        Strategy::Flat => ACCENT,
        Strategy::Martingale => WARNING,
    }
}

/// Green at or above the starting bankroll, pink below.
pub fn balance_style(balance: f64) -> Style {
    if balance >= INITIAL_BALANCE {
        positive()
    } else {
        negative()
    }
}

pub fn verdict_style(correct: bool) -> Style {
    if correct {
        positive()
    } else {
        negative()
    }
}

/// Accuracy gradient: above a coin flip is good, below is bad.
pub fn accuracy_style(accuracy: f64) -> Style {
    match accuracy {
        a if a >= 0.6 => positive(),
        a if a >= 0.5 => accent(),
        a if a >= 0.4 => neutral(),
        _ => warning(),
    }
}
