/// Keys the viewer reacts to, independent of the physical key that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Shift,
    Alt,
    Crosshair,
    IncreaseIterations,
    DecreaseIterations,
    SpectrumToggle,
    AutoZoomOut,
    JuliaToggle,
    JuliaRotateToggle,
    FrameTimeToggle,
    Other,
}

/// One discrete input delivered by the event source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    PointerDown,
    PointerUp,
    /// Relative pointer movement in logical pixels, y growing downward.
    PointerMotion { dx: f64, dy: f64 },
    /// Negative values scroll down.
    Scroll { y: f64 },
    Quit,
}
