use tracing::info;

use crate::controllers::interactive::controller::InputController;
use crate::controllers::interactive::events::InputEvent;
use crate::controllers::interactive::tick::TickScheduler;
use crate::core::actions::clock::Clock;
use crate::core::actions::draw_frame::draw_frame::FrameRenderer;
use crate::core::actions::draw_frame::ports::canvas::Canvas;
use crate::core::data::colour::Colour;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewer_settings::ViewerSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Owns the view and the components that mutate and draw it, and runs one
/// iteration of the event loop at a time.
#[derive(Debug)]
pub struct ViewerSession<C: Clock + Clone> {
    view: ViewState,
    controller: InputController,
    scheduler: TickScheduler<C>,
    renderer: FrameRenderer<C>,
    redraw_requested: bool,
}

impl<C: Clock + Clone> ViewerSession<C> {
    #[must_use]
    pub fn new(settings: ViewerSettings, clock: C) -> Self {
        Self {
            view: ViewState::new(&settings),
            controller: InputController::new(settings),
            scheduler: TickScheduler::new(settings, clock.clone()),
            renderer: FrameRenderer::new(settings, clock),
            redraw_requested: true,
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    #[must_use]
    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    #[must_use]
    pub fn average_frame_time_ms(&self) -> f64 {
        self.renderer.average_frame_time_ms()
    }

    /// Ticks the animations, then applies `event` if one arrived.
    ///
    /// Redraw requests accumulate until the next [`Self::redraw_if_requested`].
    pub fn step(&mut self, event: Option<InputEvent>) -> LoopControl {
        self.redraw_requested |= self.scheduler.handle_tick(Some(&mut self.view));

        let Some(event) = event else {
            return LoopControl::Continue;
        };

        self.redraw_requested |= self.controller.handle_event(Some(&mut self.view), event);

        if event == InputEvent::Quit {
            info!("quit requested");
            return LoopControl::Quit;
        }

        LoopControl::Continue
    }

    /// Clears and redraws the canvas if anything asked for it since the last
    /// frame. Returns whether a frame was drawn.
    pub fn redraw_if_requested<K: Canvas>(&mut self, canvas: &mut K) -> bool {
        if !self.redraw_requested {
            return false;
        }

        canvas.set_draw_colour(Colour::IN_SET);
        canvas.clear();
        self.renderer.draw(Some(&self.view), canvas);
        self.redraw_requested = false;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::events::Key;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::cell::Cell;

    fn canvas() -> PixelBuffer {
        PixelBuffer::new(256, 256)
    }

    #[test]
    fn first_iteration_draws_initial_frame() {
        let mut session = ViewerSession::new(ViewerSettings::default(), || 0_u64);
        let mut canvas = canvas();

        assert_eq!(session.step(None), LoopControl::Continue);
        assert!(session.redraw_if_requested(&mut canvas));
        assert!(!session.redraw_if_requested(&mut canvas));
    }

    #[test]
    fn several_events_coalesce_into_one_frame() {
        let mut session = ViewerSession::new(ViewerSettings::default(), || 0_u64);
        let mut canvas = canvas();
        session.redraw_if_requested(&mut canvas);

        session.step(Some(InputEvent::Scroll { y: 1.0 }));
        session.step(Some(InputEvent::KeyUp(Key::SpectrumToggle)));
        session.step(Some(InputEvent::KeyUp(Key::IncreaseIterations)));

        assert!(session.redraw_if_requested(&mut canvas));
        assert!(!session.redraw_if_requested(&mut canvas));
        assert!(session.view().view_flags.spectrum_overlay);
        assert_eq!(session.view().iteration_limit, 51);
    }

    #[test]
    fn idle_iterations_do_not_redraw() {
        let now = Cell::new(0_u64);
        let mut session = ViewerSession::new(ViewerSettings::default(), || now.get());
        let mut canvas = canvas();
        session.redraw_if_requested(&mut canvas);

        for _ in 0..10 {
            now.set(now.get() + 10);
            session.step(None);
            assert!(!session.redraw_if_requested(&mut canvas));
        }
    }

    #[test]
    fn animation_requests_redraw_from_tick() {
        let now = Cell::new(0_u64);
        let mut session = ViewerSession::new(ViewerSettings::default(), || now.get());
        let mut canvas = canvas();
        session.redraw_if_requested(&mut canvas);
        session.step(Some(InputEvent::KeyUp(Key::JuliaRotateToggle)));
        session.redraw_if_requested(&mut canvas);

        now.set(50);
        session.step(None);

        assert!(session.redraw_requested());
        assert!((session.view().julia_angle - 0.05).abs() < 1e-12);
    }

    #[test]
    fn quit_ends_the_loop() {
        let mut session = ViewerSession::new(ViewerSettings::default(), || 0_u64);

        assert_eq!(session.step(Some(InputEvent::Quit)), LoopControl::Quit);
    }

    #[test]
    fn redraw_clears_previous_frame() {
        let mut session = ViewerSession::new(ViewerSettings::default(), || 0_u64);
        let mut canvas = canvas();
        session.view_mut().view_flags.crosshair = true;
        session.redraw_if_requested(&mut canvas);

        session.step(Some(InputEvent::KeyUp(Key::Crosshair)));
        session.redraw_if_requested(&mut canvas);

        let centre_column = crate::core::data::point::Point { x: 128, y: 10 };
        assert_ne!(canvas.pixel(centre_column), Some(Colour::CROSSHAIR));
    }
}
