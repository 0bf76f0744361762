use pixels::{Pixels, SurfaceTexture};
use tracing::debug;
use winit::window::Window;

use crate::controllers::interactive::ViewerSession;
use crate::core::actions::clock::Clock;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewer_settings::ViewerSettings;
use crate::input::gui::errors::ViewerError;

/// Presents the logical framebuffer, integer-scaled into the window.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    buffer: PixelBuffer,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, settings: &ViewerSettings) -> Result<Self, ViewerError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(settings.screen_width, settings.screen_height, surface_texture)?;

        Ok(Self {
            pixels,
            buffer: PixelBuffer::new(settings.screen_width, settings.screen_height),
        })
    }

    /// Redraws the view if the session asked for it, then shows the latest frame.
    pub fn render<C: Clock + Clone>(
        &mut self,
        session: &mut ViewerSession<C>,
    ) -> Result<(), ViewerError> {
        if session.redraw_if_requested(&mut self.buffer) {
            self.buffer.copy_into(self.pixels.frame_mut())?;
        }

        self.pixels.render()?;
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), ViewerError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        debug!(width, height, "resizing surface");
        self.pixels.resize_surface(width, height)?;
        Ok(())
    }
}
