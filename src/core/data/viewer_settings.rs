#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    pub screen_width: u32,
    pub screen_height: u32,
    pub presentation_scale: u32,
    pub default_zoom: f64,
    pub min_zoom: f64,
    pub auto_zoom_floor: f64,
    pub zoom_factor: f64,
    pub zoom_factor_fast: f64,
    pub tick_interval_ms: u64,
    pub event_wait_ms: u64,
    pub julia_angle_step: f64,
    pub escape_threshold: f64,
    pub default_iteration_limit: u32,
    pub max_iteration_limit: u32,
    pub overlay_margin: i32,
    pub crosshair_gap: i32,
    pub frame_time_ceiling_ms: f64,
    pub frame_time_average_frames: u32,
}

impl ViewerSettings {
    #[must_use]
    pub fn window_width(&self) -> u32 {
        self.screen_width * self.presentation_scale
    }

    #[must_use]
    pub fn window_height(&self) -> u32 {
        self.screen_height * self.presentation_scale
    }

    /// Zoom multiplier for one scroll step or auto-zoom tick.
    #[must_use]
    pub fn zoom_step(&self, fast: bool) -> f64 {
        if fast {
            self.zoom_factor_fast
        } else {
            self.zoom_factor
        }
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            screen_width: 256,
            screen_height: 256,
            presentation_scale: 4,
            default_zoom: 40.0,
            min_zoom: 1.0,
            auto_zoom_floor: 40.0,
            zoom_factor: 1.1,
            zoom_factor_fast: 1.5,
            tick_interval_ms: 50,
            event_wait_ms: 10,
            julia_angle_step: 0.05,
            escape_threshold: 2.0,
            default_iteration_limit: 50,
            max_iteration_limit: 1000,
            overlay_margin: 5,
            crosshair_gap: 4,
            frame_time_ceiling_ms: 100.0,
            frame_time_average_frames: 10,
        }
    }
}
