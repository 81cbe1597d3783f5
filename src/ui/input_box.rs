use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Input;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    // The submit "button" lives in the right-hand title and follows the edit cursor.
    let button = if state.is_editing() { " Update ⏎ " } else { " Add ⏎ " };
    let button_style = if state.is_editing() {
        Style::default().fg(Theme::ACCENT_AMBER).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Theme::ACCENT_TEAL).add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(" Item ")
        .title_top(Line::styled(button, button_style).right_aligned())
        .title_style(if focused {
            Theme::title()
        } else {
            Theme::border()
        })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = &state.input.text;
    let body = if input_text.is_empty() {
        Span::styled(state.config.ui.placeholder.as_str(), Theme::placeholder())
    } else {
        Span::styled(input_text.as_str(), Theme::input_text())
    };

    if focused {
        // Prompt chevron + input text
        let line = Line::from(vec![
            Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
            body,
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        // Cursor offset: chevron "❯ " (2 columns)
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.input.cursor_column() as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    } else {
        frame.render_widget(Paragraph::new(Line::from(body)), inner);
    }
}
