#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Colour of samples that never escape, and of the cleared background.
    pub const IN_SET: Self = Self::opaque(0x00, 0x00, 0x00);
    /// Row and column through the Julia constant.
    pub const JULIA_CONSTANT_MARKER: Self = Self::opaque(0xFF, 0x00, 0x00);
    pub const CROSSHAIR: Self = Self::opaque(0xFF, 0x40, 0x40);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Quantises a channel intensity in `[0, 1]` to a byte, truncating.
    ///
    /// Out-of-range and NaN inputs saturate to the nearest end of `[0, 255]`.
    #[must_use]
    pub fn channel(intensity: f64) -> u8 {
        (intensity * 255.0) as u8
    }
}
