//! Windowed front end: winit for the window and event loop, pixels for the
//! integer-scaled framebuffer.

pub mod commands;
pub mod errors;
mod gui_app;
pub mod translate;
