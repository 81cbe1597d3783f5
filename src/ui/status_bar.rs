use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = match state.focus {
        FocusPanel::Input if state.is_editing() => "⏎ update · esc cancel · tab list",
        FocusPanel::Input if state.notifier.is_showing() => "⏎ add · esc dismiss · tab list",
        FocusPanel::Input => "⏎ add · tab list · ^c quit",
        FocusPanel::List => "↑↓ select · x dismiss · tab input · q quit",
    };
    parts.push(Span::styled(format!("| {} ", hints), Theme::status_bar()));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Input => "INPUT",
        FocusPanel::List => "LIST",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(format!(" [{}] ", focus_name), Theme::key_hint()));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
