use std::time::{Duration, Instant};

use tracing::error;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::Window;

use crate::controllers::interactive::{InputEvent, LoopControl, ViewerSession};
use crate::core::actions::clock::MonotonicClock;
use crate::core::data::viewer_settings::ViewerSettings;
use crate::input::gui::errors::ViewerError;
use crate::input::gui::translate::{CursorTracker, button_input, key_input, scroll_input};
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiApp {
    window: &'static Window,
    presenter: PixelsPresenter,
    session: ViewerSession<MonotonicClock>,
    cursor: CursorTracker,
    settings: ViewerSettings,
}

impl GuiApp {
    pub fn new(window: &'static Window, settings: ViewerSettings) -> Result<Self, ViewerError> {
        let presenter = PixelsPresenter::new(window, &settings)?;
        let session = ViewerSession::new(settings, MonotonicClock::new());
        let cursor = CursorTracker::new(presentation_scale(window, &settings));

        Ok(Self {
            window,
            presenter,
            session,
            cursor,
            settings,
        })
    }

    /// Blocks until the window is closed or presentation fails.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), ViewerError> {
        let wait = Duration::from_millis(self.settings.event_wait_ms);
        let mut failure = None;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                match self.handle_window_event(&event) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Quit) => elwt.exit(),
                    Err(err) => {
                        error!(error = %err, "presentation failed");
                        failure = Some(err);
                        elwt.exit();
                    }
                }
            }
            Event::AboutToWait => {
                self.session.step(None);
                if self.session.redraw_requested() {
                    self.window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + wait));
            }
            _ => {}
        })?;

        failure.map_or(Ok(()), Err)
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> Result<LoopControl, ViewerError> {
        let input = match event {
            WindowEvent::CloseRequested => Some(InputEvent::Quit),
            WindowEvent::KeyboardInput { event, .. } => {
                key_input(event.physical_key, event.state, event.repeat)
            }
            WindowEvent::MouseInput { state, .. } => Some(button_input(*state)),
            WindowEvent::CursorMoved { position, .. } => self.cursor.moved_to(*position),
            WindowEvent::CursorLeft { .. } => {
                self.cursor.left();
                None
            }
            WindowEvent::MouseWheel { delta, .. } => scroll_input(*delta),
            WindowEvent::Resized(size) => {
                self.presenter.resize(size.width, size.height)?;
                self.cursor
                    .set_scale(presentation_scale(self.window, &self.settings));
                self.window.request_redraw();
                None
            }
            WindowEvent::RedrawRequested => {
                self.presenter.render(&mut self.session)?;
                None
            }
            _ => None,
        };

        Ok(match input {
            Some(input) => self.session.step(Some(input)),
            None => LoopControl::Continue,
        })
    }
}

/// Whole physical pixels per logical pixel, matching the letterboxed integer scaling.
fn presentation_scale(window: &Window, settings: &ViewerSettings) -> f64 {
    let size = window.inner_size();
    let scale = (size.width / settings.screen_width).min(size.height / settings.screen_height);

    f64::from(scale.max(1))
}
