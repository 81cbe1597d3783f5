use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use crate::todo::notification::NoticeKind;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(45, 212, 191);
    pub const ACCENT_AMBER: Color = Color::Rgb(251, 191, 36);
    pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 52);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default()
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Color::Reset)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn item_normal() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn item_selected() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item_editing() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn item_number() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn notice(kind: NoticeKind) -> Style {
        let fg = match kind {
            NoticeKind::Success => Self::SUCCESS,
            NoticeKind::Error => Self::ERROR,
        };
        Style::default().fg(fg)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn key_hint() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
