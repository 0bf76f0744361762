use tracing::debug;

use crate::core::actions::clock::Clock;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewer_settings::ViewerSettings;

/// Runs the time-driven animations, at most once per tick interval however
/// often it is polled.
#[derive(Debug)]
pub struct TickScheduler<C: Clock> {
    settings: ViewerSettings,
    clock: C,
    last_fired_ms: u64,
}

impl<C: Clock> TickScheduler<C> {
    #[must_use]
    pub fn new(settings: ViewerSettings, clock: C) -> Self {
        Self {
            settings,
            clock,
            last_fired_ms: 0,
        }
    }

    /// Returns whether a redraw was requested. Without a view nothing happens.
    pub fn handle_tick(&mut self, view: Option<&mut ViewState>) -> bool {
        let Some(view) = view else {
            return false;
        };

        let now_ms = self.clock.now_ms();
        if now_ms.saturating_sub(self.last_fired_ms) < self.settings.tick_interval_ms {
            return false;
        }
        self.last_fired_ms = now_ms;

        let mut redraw = false;

        if view.view_flags.auto_zoom_out {
            self.step_auto_zoom(view);
            redraw = true;
        }

        if view.view_flags.julia_rotate {
            view.advance_julia_angle(self.settings.julia_angle_step);
            redraw = true;
        }

        redraw
    }

    fn step_auto_zoom(&self, view: &mut ViewState) {
        let factor = self.settings.zoom_step(view.input_flags.shift_held);
        view.scale_zoom(1.0 / factor, self.settings.min_zoom);

        if view.zoom < self.settings.auto_zoom_floor {
            view.zoom = self.settings.auto_zoom_floor;
            view.view_flags.auto_zoom_out = false;
            debug!(zoom = view.zoom, "auto zoom out finished");
        }
    }
}
