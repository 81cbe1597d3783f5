//! Floating notification banner.

use crate::app::state::AppState;
use crate::ui::layout::banner_area;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(notice) = state.notifier.current() else {
        return;
    };

    let banner = banner_area(area);
    let style = Theme::notice(notice.kind);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style)
        .title_top(Line::styled(" × esc ", Theme::item_number()).right_aligned())
        .style(Style::default().bg(Theme::BG_ELEVATED));

    let line = Line::from(vec![
        Span::styled(notice.kind.label(), style.add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::styled(notice.message.as_str(), style),
    ]);

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(line).block(block).wrap(Wrap { trim: true }),
        banner,
    );
}
