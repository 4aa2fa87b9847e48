//! Chat palette
//!
//! Deep navy background tones with a blue/violet accent for the user's
//! bubbles and muted slate for secondary text.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent - violet
pub const ACCENT: Color = Color::Rgb(124, 58, 237);

/// User bubble background - royal blue
pub const USER_BG: Color = Color::Rgb(37, 99, 235);

/// Bot bubble background - slightly lifted navy
pub const BOT_BG: Color = Color::Rgb(24, 30, 48);

/// Source chip text - soft indigo
pub const CHIP: Color = Color::Rgb(165, 180, 252);

/// Source chip background
pub const CHIP_BG: Color = Color::Rgb(10, 12, 24);

/// Loading indicator - warm amber
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);

/// Muted text - slate
pub const MUTED: Color = Color::Rgb(148, 163, 184);

/// Error indicator - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);

/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Header/title style
pub fn title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}

/// Tagline under the title
pub fn subtitle() -> Style {
    Style::default().fg(MUTED)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Footer/help text style
pub fn footer() -> Style {
    Style::default().fg(MUTED)
}

/// Loading indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

pub fn user_bubble() -> Style {
    Style::default().fg(Color::White).bg(USER_BG)
}

pub fn bot_bubble() -> Style {
    Style::default().fg(Color::White).bg(BOT_BG)
}

/// Speaker and time line above a bubble
pub fn bubble_meta() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

pub fn source_chip() -> Style {
    Style::default().fg(CHIP).bg(CHIP_BG)
}

pub fn no_sources() -> Style {
    Style::default().fg(MUTED)
}

/// Input placeholder text
pub fn placeholder() -> Style {
    Style::default().fg(MUTED).add_modifier(Modifier::ITALIC)
}

/// Send affordance, enabled
pub fn send_enabled() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Send affordance while a request is pending
pub fn send_disabled() -> Style {
    Style::default().fg(MUTED)
}

/// Key hint style for help text
pub fn key_hint() -> Style {
    Style::default().fg(CHIP)
}

/// Destructive action hint
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
