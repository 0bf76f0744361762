use crate::core::actions::draw_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::algorithm::Escape;

/// Red rises, blue falls, and green dips to zero at the midpoint.
#[must_use]
pub fn spectrum_colour(brightness: f64) -> Colour {
    Colour::opaque(
        Colour::channel(brightness),
        Colour::channel((brightness - 0.5).abs()),
        Colour::channel(1.0 - brightness),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectrumColourMap {
    max_iterations: u32,
}

impl SpectrumColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap for SpectrumColourMap {
    type T = Escape;

    fn map(&self, value: Escape) -> Colour {
        match value {
            // an escape implies at least one iteration ran, so the budget is non-zero
            Escape::Escaped(iteration) if self.max_iterations > 0 => {
                spectrum_colour(f64::from(iteration) / f64::from(self.max_iterations))
            }
            Escape::Escaped(_) | Escape::InSet => Colour::IN_SET,
        }
    }
}
