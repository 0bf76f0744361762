//! Translation of winit input into viewer events.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::interactive::{InputEvent, Key};

#[must_use]
pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::F1 => Key::SpectrumToggle,
        KeyCode::F2 => Key::AutoZoomOut,
        KeyCode::F3 => Key::JuliaToggle,
        KeyCode::F4 => Key::JuliaRotateToggle,
        KeyCode::F5 => Key::FrameTimeToggle,
        KeyCode::F6 => Key::Crosshair,
        KeyCode::NumpadAdd => Key::IncreaseIterations,
        KeyCode::NumpadSubtract => Key::DecreaseIterations,
        _ => Key::Other,
    }
}

/// Auto-repeated presses are dropped; the first press already set the flag.
#[must_use]
pub fn key_input(physical_key: PhysicalKey, state: ElementState, repeat: bool) -> Option<InputEvent> {
    let key = match physical_key {
        PhysicalKey::Code(code) => key_from_code(code),
        PhysicalKey::Unidentified(_) => Key::Other,
    };

    match state {
        ElementState::Pressed if repeat => None,
        ElementState::Pressed => Some(InputEvent::KeyDown(key)),
        ElementState::Released => Some(InputEvent::KeyUp(key)),
    }
}

#[must_use]
pub fn button_input(state: ElementState) -> InputEvent {
    match state {
        ElementState::Pressed => InputEvent::PointerDown,
        ElementState::Released => InputEvent::PointerUp,
    }
}

/// Horizontal-only scrolling carries no zoom direction and is dropped.
#[must_use]
pub fn scroll_input(delta: MouseScrollDelta) -> Option<InputEvent> {
    let y = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    (y != 0.0).then_some(InputEvent::Scroll { y })
}

/// Tracks the cursor so absolute window positions become logical-pixel deltas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTracker {
    last_position: Option<PhysicalPosition<f64>>,
    scale: f64,
}

impl CursorTracker {
    #[must_use]
    pub fn new(scale: f64) -> Self {
        Self {
            last_position: None,
            scale: scale.max(1.0),
        }
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.max(1.0);
    }

    /// The first position after entering the window only primes the tracker.
    pub fn moved_to(&mut self, position: PhysicalPosition<f64>) -> Option<InputEvent> {
        let previous = self.last_position.replace(position)?;

        Some(InputEvent::PointerMotion {
            dx: (position.x - previous.x) / self.scale,
            dy: (position.y - previous.y) / self.scale,
        })
    }

    pub fn left(&mut self) {
        self.last_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn function_keys_map_to_toggles() {
        assert_eq!(key_from_code(KeyCode::F1), Key::SpectrumToggle);
        assert_eq!(key_from_code(KeyCode::F2), Key::AutoZoomOut);
        assert_eq!(key_from_code(KeyCode::F3), Key::JuliaToggle);
        assert_eq!(key_from_code(KeyCode::F4), Key::JuliaRotateToggle);
        assert_eq!(key_from_code(KeyCode::F5), Key::FrameTimeToggle);
        assert_eq!(key_from_code(KeyCode::F6), Key::Crosshair);
    }

    #[test]
    fn both_sides_of_modifiers_map_to_same_key() {
        assert_eq!(key_from_code(KeyCode::ShiftLeft), Key::Shift);
        assert_eq!(key_from_code(KeyCode::ShiftRight), Key::Shift);
        assert_eq!(key_from_code(KeyCode::AltLeft), Key::Alt);
        assert_eq!(key_from_code(KeyCode::AltRight), Key::Alt);
    }

    #[test]
    fn numpad_keys_adjust_iterations() {
        assert_eq!(key_from_code(KeyCode::NumpadAdd), Key::IncreaseIterations);
        assert_eq!(key_from_code(KeyCode::NumpadSubtract), Key::DecreaseIterations);
        assert_eq!(key_from_code(KeyCode::KeyA), Key::Other);
    }

    #[test]
    fn press_release_and_repeat() {
        let f3 = PhysicalKey::Code(KeyCode::F3);

        assert_eq!(
            key_input(f3, ElementState::Pressed, false),
            Some(InputEvent::KeyDown(Key::JuliaToggle))
        );
        assert_eq!(key_input(f3, ElementState::Pressed, true), None);
        assert_eq!(
            key_input(f3, ElementState::Released, false),
            Some(InputEvent::KeyUp(Key::JuliaToggle))
        );
    }

    #[test]
    fn unidentified_keys_still_produce_events() {
        let key = PhysicalKey::Unidentified(NativeKeyCode::Unidentified);

        assert_eq!(
            key_input(key, ElementState::Released, false),
            Some(InputEvent::KeyUp(Key::Other))
        );
    }

    #[test]
    fn buttons_map_to_pointer_events() {
        assert_eq!(button_input(ElementState::Pressed), InputEvent::PointerDown);
        assert_eq!(button_input(ElementState::Released), InputEvent::PointerUp);
    }

    #[test]
    fn scroll_keeps_sign_and_drops_horizontal() {
        assert_eq!(
            scroll_input(MouseScrollDelta::LineDelta(0.0, -1.0)),
            Some(InputEvent::Scroll { y: -1.0 })
        );
        assert_eq!(
            scroll_input(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 12.0))),
            Some(InputEvent::Scroll { y: 12.0 })
        );
        assert_eq!(scroll_input(MouseScrollDelta::LineDelta(2.0, 0.0)), None);
    }

    #[test]
    fn cursor_deltas_are_scaled_to_logical_pixels() {
        let mut tracker = CursorTracker::new(4.0);

        assert_eq!(tracker.moved_to(PhysicalPosition::new(100.0, 100.0)), None);
        assert_eq!(
            tracker.moved_to(PhysicalPosition::new(108.0, 96.0)),
            Some(InputEvent::PointerMotion { dx: 2.0, dy: -1.0 })
        );

        tracker.left();
        assert_eq!(tracker.moved_to(PhysicalPosition::new(0.0, 0.0)), None);
    }
}
