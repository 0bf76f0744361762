use tracing::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::core::data::viewer_settings::ViewerSettings;
use crate::input::gui::errors::ViewerError;
use crate::input::gui::gui_app::GuiApp;

pub struct RunGuiCommand {
    settings: ViewerSettings,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(settings: ViewerSettings) -> Self {
        Self { settings }
    }

    /// Opens the window and runs the viewer until it is closed.
    pub fn execute(&self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot rendering in software")
                .with_inner_size(LogicalSize::new(
                    self.settings.window_width(),
                    self.settings.window_height(),
                ))
                .build(&event_loop)?,
        ));

        info!(
            width = self.settings.screen_width,
            height = self.settings.screen_height,
            scale = self.settings.presentation_scale,
            "viewer started"
        );

        let app = GuiApp::new(window, self.settings)?;
        app.run(event_loop)?;

        info!("viewer closed");
        Ok(())
    }
}
