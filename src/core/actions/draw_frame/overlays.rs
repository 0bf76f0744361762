//! Optional overlays drawn over a finished fractal sweep.

use crate::core::actions::draw_frame::ports::canvas::Canvas;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewer_settings::ViewerSettings;
use crate::core::fractals::escape_time::colour_map::spectrum_colour;

fn screen_size(view: &ViewState) -> (i32, i32) {
    (view.screen_width as i32, view.screen_height as i32)
}

/// One short vertical tick per column along the bottom edge, coloured with
/// the same ramp as escaping samples.
pub fn draw_spectrum<C: Canvas>(view: &ViewState, settings: &ViewerSettings, canvas: &mut C) {
    let (width, height) = screen_size(view);
    let tick = settings.overlay_margin - 1;

    for x in 0..width {
        canvas.set_draw_colour(spectrum_colour(f64::from(x) / f64::from(width)));
        canvas.draw_line(Point { x, y: height }, Point { x, y: height - tick });
    }
}

pub fn draw_crosshair<C: Canvas>(view: &ViewState, settings: &ViewerSettings, canvas: &mut C) {
    let (width, height) = screen_size(view);
    let half_width = width / 2;
    let half_height = height / 2;
    let gap = settings.crosshair_gap;

    canvas.set_draw_colour(Colour::CROSSHAIR);
    canvas.draw_line(
        Point { x: 0, y: half_height },
        Point { x: half_width - gap, y: half_height },
    );
    canvas.draw_line(
        Point { x: half_width, y: 0 },
        Point { x: half_width, y: half_height - gap },
    );
    canvas.draw_line(
        Point { x: width, y: half_height },
        Point { x: half_width + gap, y: half_height },
    );
    canvas.draw_line(
        Point { x: half_width, y: height },
        Point { x: half_width, y: half_height + gap },
    );
}

/// Fraction of the frame-time ceiling used by `average_ms`, capped at 1.
#[must_use]
pub fn frame_time_proportion(average_ms: f64, settings: &ViewerSettings) -> f64 {
    (average_ms / settings.frame_time_ceiling_ms).clamp(0.0, 1.0)
}

/// Vertical bar along the right edge, growing upward from the bottom of the
/// fractal area.
pub fn draw_frame_time<C: Canvas>(
    view: &ViewState,
    settings: &ViewerSettings,
    average_ms: f64,
    canvas: &mut C,
) {
    let (width, mut height) = screen_size(view);
    if view.view_flags.spectrum_overlay {
        height -= settings.overlay_margin;
    }

    let proportion = frame_time_proportion(average_ms, settings);
    let bar_height = (proportion * f64::from(height)) as i32;
    let bar_width = settings.overlay_margin - 1;

    canvas.set_draw_colour(Colour::opaque(
        Colour::channel(proportion),
        Colour::channel(1.0 - proportion),
        0x40,
    ));
    for y in 0..bar_height {
        canvas.draw_line(
            Point { x: width - bar_width, y: height - y },
            Point { x: width, y: height - y },
        );
    }
}
