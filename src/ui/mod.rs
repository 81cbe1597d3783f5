mod input_box;
mod item_list;
mod layout;
mod notification;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    render_title(frame, app_layout.title_bar, state);
    input_box::render(frame, app_layout.input_box, state);
    item_list::render(frame, app_layout.item_list, state);
    status_bar::render(frame, app_layout.status_bar, state);
    // Drawn last so it floats over everything else.
    notification::render(frame, area, state);
}

fn render_title(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = Paragraph::new(Span::styled(
        state.config.ui.title.as_str(),
        theme::Theme::heading(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}
