//! The mutable parameter set describing what the viewer currently shows.

use std::f64::consts::TAU;

use crate::core::data::complex::Complex;
use crate::core::data::viewer_settings::ViewerSettings;

/// Modifiers that are held down right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFlags {
    pub mouse_drag_active: bool,
    pub shift_held: bool,
    pub alt_held: bool,
}

/// Display and behaviour modes toggled from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewFlags {
    pub julia_mode: bool,
    pub julia_rotate: bool,
    pub spectrum_overlay: bool,
    pub frame_time_overlay: bool,
    pub auto_zoom_out: bool,
    pub crosshair: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub screen_width: u32,
    pub screen_height: u32,
    pub center_x: f64,
    pub center_y: f64,
    /// Pixels per unit length on the complex plane. Never below 1.
    pub zoom: f64,
    /// Kept within `[0, 2π)`.
    pub julia_angle: f64,
    pub julia_constant: Complex,
    pub iteration_limit: u32,
    pub input_flags: InputFlags,
    pub view_flags: ViewFlags,
}

impl ViewState {
    #[must_use]
    pub fn new(settings: &ViewerSettings) -> Self {
        Self {
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            center_x: 0.0,
            center_y: 0.0,
            zoom: settings.default_zoom,
            julia_angle: 0.0,
            julia_constant: Complex::ZERO,
            iteration_limit: settings.default_iteration_limit,
            input_flags: InputFlags::default(),
            view_flags: ViewFlags::default(),
        }
    }

    /// Multiplies the zoom by `factor`, never letting it drop below `min_zoom`.
    pub fn scale_zoom(&mut self, factor: f64, min_zoom: f64) {
        self.zoom *= factor;
        if self.zoom < min_zoom || self.zoom.is_nan() {
            self.zoom = min_zoom;
        }
    }

    pub fn advance_julia_angle(&mut self, step: f64) {
        self.julia_angle = (self.julia_angle + step).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if self.julia_angle >= TAU {
            self.julia_angle = 0.0;
        }
    }

    /// Returns whether the limit changed.
    pub fn increase_iteration_limit(&mut self, max: u32) -> bool {
        if self.iteration_limit < max {
            self.iteration_limit += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the limit changed.
    pub fn decrease_iteration_limit(&mut self) -> bool {
        if self.iteration_limit > 0 {
            self.iteration_limit -= 1;
            true
        } else {
            false
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewerSettings::default())
    }
}
