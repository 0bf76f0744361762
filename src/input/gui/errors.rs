use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBufferError;

/// Failures of the window, event loop or pixel surface. None are recoverable.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Failed to create renderer: {0}")]
    Renderer(#[from] pixels::Error),
    #[error("Failed to resize surface: {0}")]
    Surface(#[from] pixels::TextureError),
    #[error("Frame does not fit the surface: {0}")]
    Frame(#[from] PixelBufferError),
}
