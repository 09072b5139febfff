use ratatui::{
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as Segment, Points},
        Block, Borders, Paragraph, Wrap,
    },
};

use super::theme::Theme;
use crate::state::model::{FrameView, Phase};

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()))
}

pub fn header(view: &FrameView) -> Paragraph<'_> {
    let (phase, phase_style) = match view.phase {
        Phase::Training => ("TRAINING", Theme::title()),
        Phase::Paused => ("PAUSED", Theme::warn()),
        Phase::Finished => ("FINISHED", Theme::title()),
    };

    let steps = match view.max_steps {
        Some(max) => format!("{} / {max}", view.step),
        None => view.step.to_string(),
    };

    let line1 = Line::from(vec![
        Span::styled("Single neuron perceptron", Theme::title()),
        Span::raw("  |  "),
        Span::styled(phase, phase_style),
    ]);

    let line2 = Line::from(Span::styled(
        format!(
            "Elapsed: {:02}:{:02}  |  Steps: {steps}  |  Tick: {} ms",
            view.elapsed.as_secs() / 60,
            view.elapsed.as_secs() % 60,
            view.tick_interval.as_millis(),
        ),
        Theme::dim(),
    ));

    Paragraph::new(vec![line1, line2])
        .style(Theme::base())
        .block(panel("Overview"))
        .wrap(Wrap { trim: true })
}

/// The sampling plane: every point shaded by the perceptron's answer, the ground truth line and
/// the estimated boundary when there is one.
pub fn plot(view: &FrameView) -> Canvas<'_, impl Fn(&mut Context) + '_> {
    Canvas::default()
        .block(panel("Plane"))
        .marker(Marker::Braille)
        .background_color(Theme::BG)
        .x_bounds(view.x_bounds)
        .y_bounds(view.y_bounds)
        .paint(move |ctx| {
            let [(x1, y1), (x2, y2)] = view.target;
            ctx.draw(&Segment {
                x1,
                y1,
                x2,
                y2,
                color: Theme::FG_MUTED,
            });

            ctx.layer();

            ctx.draw(&Points {
                coords: &view.over,
                color: Theme::OVER,
            });
            ctx.draw(&Points {
                coords: &view.under,
                color: Theme::UNDER,
            });

            if let Some(line) = view.boundary {
                ctx.layer();
                ctx.draw(&Segment {
                    x1: line.p0.x as f64,
                    y1: line.p0.y as f64,
                    x2: line.p1.x as f64,
                    y2: line.p1.y as f64,
                    color: Theme::FG_NEON,
                });
            }
        })
}

pub fn weights(view: &FrameView) -> Paragraph<'_> {
    let mut lines: Vec<Line> = view
        .weights
        .iter()
        .zip(["w_x", "w_y", "w_bias"])
        .map(|(w, name)| Line::from(format!("{name:>7}: {w:+.4}")))
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(format!("corrections: {}", view.corrections)));

    let agreement = match view.agreement {
        Some(a) => format!("{:.1}%", a * 100.),
        None => "-".into(),
    };
    lines.push(Line::from(format!("agreement: {agreement}")));

    let estimate = match view.boundary.and_then(|line| line.slope()) {
        Some(slope) => Span::raw(format!("estimate slope: {slope:+.3}")),
        None if view.boundary.is_some() => Span::raw("estimate slope: vertical"),
        None => Span::styled("no estimate this frame", Theme::muted()),
    };
    lines.push(Line::from(estimate));

    Paragraph::new(lines)
        .style(Theme::base())
        .block(panel("Neuron"))
        .wrap(Wrap { trim: true })
}

pub fn legend(view: &FrameView) -> Paragraph<'_> {
    let entry = |symbol: &'static str, style: Style, text: String| {
        Line::from(vec![Span::styled(symbol, style), Span::raw(" "), Span::raw(text)])
    };

    let lines = vec![
        entry("•", Theme::over(), "neuron says over the line".into()),
        entry("•", Theme::under(), "neuron says under the line".into()),
        entry("─", Theme::muted(), format!("target {}", view.target_label)),
        entry("─", Theme::title(), "estimated boundary".into()),
        Line::from(Span::styled("space: pause  q: quit", Theme::dim())),
    ];

    Paragraph::new(lines).style(Theme::base()).block(panel("Legend"))
}

pub fn logs(view: &FrameView) -> Paragraph<'_> {
    let tail = view.logs.iter().rev().take(6).rev();

    let lines = tail
        .map(|l| {
            Line::from(vec![
                Span::styled(format!("[{}] ", l.level), Theme::dim()),
                Span::raw(l.message.as_str()),
            ])
        })
        .collect::<Vec<_>>();

    Paragraph::new(lines)
        .style(Theme::base())
        .block(panel("Events"))
        .wrap(Wrap { trim: true })
}
