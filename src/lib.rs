mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use crate::controllers::interactive::{
    InputController, InputEvent, Key, LoopControl, TickScheduler, ViewerSession,
};
pub use crate::core::actions::clock::{Clock, MonotonicClock};
pub use crate::core::actions::draw_frame::draw_frame::{FrameRenderer, draw_fractal, fractal_region};
pub use crate::core::actions::draw_frame::ports::canvas::Canvas;
pub use crate::core::actions::draw_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::draw_frame::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::view_state::{InputFlags, ViewFlags, ViewState};
pub use crate::core::data::viewer_settings::ViewerSettings;
pub use crate::core::fractals::escape_time::algorithm::{Escape, EscapeTimeAlgorithm, escape_iteration};
pub use crate::core::fractals::escape_time::colour_map::{SpectrumColourMap, spectrum_colour};
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::util::pixel_to_complex_coords::{complex_to_pixel_coords, pixel_to_complex_coords};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::input::gui::errors::ViewerError;
