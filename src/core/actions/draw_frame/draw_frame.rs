use tracing::trace;

use crate::core::actions::clock::Clock;
use crate::core::actions::draw_frame::overlays::{draw_crosshair, draw_frame_time, draw_spectrum};
use crate::core::actions::draw_frame::ports::canvas::Canvas;
use crate::core::actions::draw_frame::ports::colour_map::ColourMap;
use crate::core::actions::draw_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewer_settings::ViewerSettings;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::colour_map::SpectrumColourMap;
use crate::core::util::pixel_to_complex_coords::{complex_to_pixel_coords, pixel_to_complex_coords};

/// Draws whole frames and keeps the running render-time average shown by the
/// frame-time overlay.
#[derive(Debug)]
pub struct FrameRenderer<C: Clock> {
    settings: ViewerSettings,
    clock: C,
    average_frame_time_ms: f64,
}

impl<C: Clock> FrameRenderer<C> {
    #[must_use]
    pub fn new(settings: ViewerSettings, clock: C) -> Self {
        Self {
            settings,
            clock,
            average_frame_time_ms: 0.0,
        }
    }

    #[must_use]
    pub fn average_frame_time_ms(&self) -> f64 {
        self.average_frame_time_ms
    }

    /// Renders the fractal and any active overlays. Does nothing without a view.
    pub fn draw<K: Canvas>(&mut self, view: Option<&ViewState>, canvas: &mut K) {
        let Some(view) = view else {
            return;
        };

        let started_ms = self.clock.now_ms();
        draw_fractal(view, &self.settings, canvas);
        let duration_ms = self.clock.now_ms().saturating_sub(started_ms) as f64;
        self.record_frame_time(duration_ms);

        trace!(
            duration_ms,
            average_ms = self.average_frame_time_ms,
            "frame rendered"
        );

        if view.view_flags.spectrum_overlay {
            draw_spectrum(view, &self.settings, canvas);
        }
        if view.view_flags.crosshair {
            draw_crosshair(view, &self.settings, canvas);
        }
        if view.view_flags.frame_time_overlay {
            draw_frame_time(view, &self.settings, self.average_frame_time_ms, canvas);
        }
    }

    fn record_frame_time(&mut self, duration_ms: f64) {
        let frames = f64::from(self.settings.frame_time_average_frames);
        self.average_frame_time_ms -= self.average_frame_time_ms / frames;
        self.average_frame_time_ms += duration_ms / frames;
    }
}

/// Width and height left for the fractal once overlay margins are reserved.
#[must_use]
pub fn fractal_region(view: &ViewState, settings: &ViewerSettings) -> (i32, i32) {
    let mut width = view.screen_width as i32;
    let mut height = view.screen_height as i32;

    if view.view_flags.spectrum_overlay {
        height -= settings.overlay_margin;
    }
    if view.view_flags.frame_time_overlay {
        width -= settings.overlay_margin;
    }

    (width.max(0), height.max(0))
}

/// Sweeps every pixel of the fractal region.
///
/// When Julia mode is on and Alt is held, the row and column through the
/// Julia constant are painted with the marker colour instead.
pub fn draw_fractal<K: Canvas>(view: &ViewState, settings: &ViewerSettings, canvas: &mut K) {
    let (width, height) = fractal_region(view, settings);
    let algorithm = EscapeTimeAlgorithm::from_view(view, settings);
    let colour_map = SpectrumColourMap::new(algorithm.max_iterations());

    let marker = (view.view_flags.julia_mode && view.input_flags.alt_held)
        .then(|| complex_to_pixel_coords(view.julia_constant, view));

    for y in 0..height {
        for x in 0..width {
            let pixel = Point { x, y };

            let colour = if marker.is_some_and(|m| m.x == x || m.y == y) {
                Colour::JULIA_CONSTANT_MARKER
            } else {
                let sample = pixel_to_complex_coords(pixel, view);
                colour_map.map(algorithm.compute(sample))
            };

            canvas.set_draw_colour(colour);
            canvas.draw_point(pixel);
        }
    }
}
