use tracing::debug;

use crate::controllers::interactive::events::{InputEvent, Key};
use crate::core::data::complex::Complex;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewer_settings::ViewerSettings;

/// Applies input events to a [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputController {
    settings: ViewerSettings,
}

impl InputController {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self { settings }
    }

    /// Returns whether a redraw was requested. Without a view nothing happens.
    pub fn handle_event(&self, view: Option<&mut ViewState>, event: InputEvent) -> bool {
        let Some(view) = view else {
            return false;
        };

        match event {
            InputEvent::KeyDown(key) => {
                Self::key_down(view, key);
                true
            }
            InputEvent::KeyUp(key) => {
                self.key_up(view, key);
                true
            }
            InputEvent::PointerDown => {
                view.input_flags.mouse_drag_active = true;
                true
            }
            InputEvent::PointerUp => {
                view.input_flags.mouse_drag_active = false;
                true
            }
            InputEvent::PointerMotion { dx, dy } => {
                if view.input_flags.mouse_drag_active {
                    Self::drag(view, dx, dy);
                }
                true
            }
            InputEvent::Scroll { y } => self.scroll(view, y),
            InputEvent::Quit => false,
        }
    }

    fn key_down(view: &mut ViewState, key: Key) {
        match key {
            Key::Shift => view.input_flags.shift_held = true,
            Key::Alt => view.input_flags.alt_held = true,
            Key::Crosshair => view.view_flags.crosshair = true,
            _ => {}
        }
    }

    fn key_up(&self, view: &mut ViewState, key: Key) {
        let flags = &mut view.view_flags;

        match key {
            Key::Shift => view.input_flags.shift_held = false,
            Key::Alt => view.input_flags.alt_held = false,
            Key::Crosshair => flags.crosshair = false,
            Key::IncreaseIterations => {
                if view.increase_iteration_limit(self.settings.max_iteration_limit) {
                    debug!(limit = view.iteration_limit, "iteration limit increased");
                }
            }
            Key::DecreaseIterations => {
                if view.decrease_iteration_limit() {
                    debug!(limit = view.iteration_limit, "iteration limit decreased");
                }
            }
            Key::SpectrumToggle => {
                flags.spectrum_overlay = !flags.spectrum_overlay;
                debug!(enabled = flags.spectrum_overlay, "spectrum overlay toggled");
            }
            Key::AutoZoomOut => {
                flags.auto_zoom_out = true;
                debug!("auto zoom out started");
            }
            Key::JuliaToggle => {
                flags.julia_mode = !flags.julia_mode;
                debug!(enabled = flags.julia_mode, "julia mode toggled");
            }
            Key::JuliaRotateToggle => {
                flags.julia_rotate = !flags.julia_rotate;
                debug!(enabled = flags.julia_rotate, "julia rotation toggled");
            }
            Key::FrameTimeToggle => {
                flags.frame_time_overlay = !flags.frame_time_overlay;
                debug!(enabled = flags.frame_time_overlay, "frame time overlay toggled");
            }
            Key::Other => {}
        }
    }

    // Alt drags the Julia constant, otherwise the view is panned.
    fn drag(view: &mut ViewState, dx: f64, dy: f64) {
        let rel_x = dx / view.zoom;
        let rel_y = -dy / view.zoom;

        if view.input_flags.alt_held {
            view.julia_constant = view.julia_constant + Complex::new(rel_x, rel_y);
        } else {
            view.center_x -= rel_x;
            view.center_y -= rel_y;
        }
    }

    fn scroll(&self, view: &mut ViewState, y: f64) -> bool {
        if view.view_flags.auto_zoom_out {
            return false;
        }

        let factor = self.settings.zoom_step(view.input_flags.shift_held);
        let multiplier = if y < 0.0 { 1.0 / factor } else { factor };
        view.scale_zoom(multiplier, self.settings.min_zoom);

        true
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(ViewerSettings::default())
    }
}
