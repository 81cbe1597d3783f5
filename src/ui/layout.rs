use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub title_bar: Rect,
    pub input_box: Rect,
    pub item_list: Rect,
    pub status_bar: Rect,
}

const MAX_CONTENT_WIDTH: u16 = 72;
const BANNER_WIDTH: u16 = 44;
const BANNER_HEIGHT: u16 = 4;

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = centered_column(main_chunks[0], MAX_CONTENT_WIDTH);
    let status_bar = main_chunks[1];

    let content_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input box
            Constraint::Min(3),    // Items
        ])
        .split(content);

    AppLayout {
        title_bar: content_chunks[0],
        input_box: content_chunks[1],
        item_list: content_chunks[2],
        status_bar,
    }
}

/// Floating notification rectangle pinned to the top-right corner.
pub fn banner_area(area: Rect) -> Rect {
    let width = BANNER_WIDTH.min(area.width);
    let height = BANNER_HEIGHT.min(area.height);
    Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    }
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
