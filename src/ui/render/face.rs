use super::{centered, Frame};
use crate::state::State;
use crate::ui::widgets::{arc::ArcShape, styling};
use crate::utils::time_format::format_hms;
use ratatui::{
    layout::{Alignment, Rect},
    symbols::Marker,
    widgets::{canvas::Canvas, Paragraph},
};

const CANVAS_BOUND: f64 = 1.1;
const TRACK_RADII: (f64, f64) = (0.965, 0.985);
const PROGRESS_RADII: (f64, f64) = (0.9, 1.0);
const DISC_RADIUS: f64 = 0.8;

/// Render the timer face: track, disc, progress arc and remaining time.
///
pub fn face(frame: &mut Frame, size: Rect, state: &mut State) {
    if size.height < 3 {
        return;
    }
    // Cells are about twice as tall as wide
    let area = centered(size.height.saturating_mul(2), size.height, size);
    let theme = state.get_theme();
    let timer = state.timer();
    let threshold = state.get_urgency_threshold();
    let sweep = state.displayed_sweep();
    let arc_color = styling::progress_arc_color(theme, timer.is_arc_urgent(threshold));

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(theme.background.to_color())
        .x_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .y_bounds([-CANVAS_BOUND, CANVAS_BOUND])
        .paint(|ctx| {
            ctx.draw(&ArcShape::ring(
                TRACK_RADII.0,
                TRACK_RADII.1,
                theme.track.to_color(),
            ));
            ctx.layer();
            ctx.draw(&ArcShape::disc(DISC_RADIUS, theme.surface.to_color()));
            ctx.layer();
            ctx.draw(&ArcShape::progress(
                PROGRESS_RADII.0,
                PROGRESS_RADII.1,
                sweep,
                arc_color.to_color(),
            ));
        });
    frame.render_widget(canvas, area);

    let middle = area.y + area.height / 2;
    let text_width = (area.width / 2).max(10).min(area.width);
    let time_area = Rect::new(
        area.x + (area.width - text_width) / 2,
        middle.saturating_sub(1).max(area.y),
        text_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(format_hms(timer.remaining_seconds()))
            .style(
                styling::time_text_style(theme, timer.is_text_urgent(threshold))
                    .bg(theme.surface.to_color()),
            )
            .alignment(Alignment::Center),
        time_area,
    );

    if time_area.y + 1 < area.y + area.height {
        let label_area = Rect::new(time_area.x, time_area.y + 1, time_area.width, 1);
        frame.render_widget(
            Paragraph::new(timer.phase().label())
                .style(styling::muted_text_style(theme).bg(theme.surface.to_color()))
                .alignment(Alignment::Center),
            label_area,
        );
    }
}
