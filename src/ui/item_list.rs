use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

/// Row actions, shown next to the selected row while the list has focus.
const ROW_ACTIONS: &str = " e edit · d delete · K up · J down ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::List;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let mut block = Block::default()
        .title(" Items ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);
    if focused && !state.todos.is_empty() {
        block = block.title_bottom(Line::styled(ROW_ACTIONS, Theme::item_number()).right_aligned());
    }

    if state.todos.is_empty() {
        let empty = List::new([ListItem::new(Span::styled(
            " Nothing to do yet",
            Style::default().fg(Theme::TEXT_SECONDARY),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let editing = state.todos.editing();
    let width = state.todos.len().to_string().len();
    let items: Vec<ListItem> = state
        .todos
        .items()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if editing == Some(i) {
                Theme::item_editing()
            } else {
                Theme::item_normal()
            };
            let mut spans = vec![
                Span::styled(format!(" {:>width$}. ", i + 1, width = width), Theme::item_number()),
                Span::styled(text.as_str(), style),
            ];
            if editing == Some(i) {
                spans.push(Span::styled("  (editing)", Theme::item_editing()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(state.selected_index());
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Theme::item_selected());
    frame.render_stateful_widget(list, area, &mut list_state);
}
