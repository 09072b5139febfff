use ratatui::{widgets::Block, Frame};

use crate::state::model::FrameView;

use super::{layout, theme::Theme, widgets};

/// Draws the entire UI.
pub fn draw(f: &mut Frame, view: &FrameView) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (header_area, body_area, logs_area) = layout::vertical(area);
    let (plot_area, side_area) = layout::body(body_area);
    let (weights_area, legend_area) = layout::side(side_area);

    f.render_widget(widgets::header(view), header_area);
    f.render_widget(widgets::plot(view), plot_area);
    f.render_widget(widgets::weights(view), weights_area);
    f.render_widget(widgets::legend(view), legend_area);
    f.render_widget(widgets::logs(view), logs_area);
}
