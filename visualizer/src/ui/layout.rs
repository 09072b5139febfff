use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computes the main layout regions.
///
/// # Returns
/// (header, body, logs)
pub fn vertical(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(8),
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Splits body into (plot, side panel).
pub fn body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    (cols[0], cols[1])
}

/// Splits the side panel into (weights, legend).
pub fn side(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(7)])
        .split(area);

    (rows[0], rows[1])
}
