use crate::core::data::view_state::ViewFlags;

/// Iteration variant selected from the active view flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    RotatingJulia,
}

impl FractalKinds {
    /// Rotation wins over plain Julia mode, even when Julia mode itself is off.
    #[must_use]
    pub const fn from_flags(flags: ViewFlags) -> Self {
        if flags.julia_rotate {
            Self::RotatingJulia
        } else if flags.julia_mode {
            Self::Julia
        } else {
            Self::Mandelbrot
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_selects_mandelbrot() {
        assert_eq!(
            FractalKinds::from_flags(ViewFlags::default()),
            FractalKinds::Mandelbrot
        );
    }

    #[test]
    fn julia_mode_selects_julia() {
        let flags = ViewFlags {
            julia_mode: true,
            ..ViewFlags::default()
        };

        assert_eq!(FractalKinds::from_flags(flags), FractalKinds::Julia);
    }

    #[test]
    fn rotate_alone_still_selects_rotating_julia() {
        let flags = ViewFlags {
            julia_rotate: true,
            ..ViewFlags::default()
        };

        assert_eq!(FractalKinds::from_flags(flags), FractalKinds::RotatingJulia);
    }

    #[test]
    fn rotate_takes_precedence_over_julia_mode() {
        let flags = ViewFlags {
            julia_mode: true,
            julia_rotate: true,
            ..ViewFlags::default()
        };

        assert_eq!(FractalKinds::from_flags(flags), FractalKinds::RotatingJulia);
    }

    #[test]
    fn overlay_flags_do_not_affect_selection() {
        let flags = ViewFlags {
            spectrum_overlay: true,
            frame_time_overlay: true,
            auto_zoom_out: true,
            crosshair: true,
            ..ViewFlags::default()
        };

        assert_eq!(FractalKinds::from_flags(flags), FractalKinds::Mandelbrot);
    }
}
