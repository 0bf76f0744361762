use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Pixel-draw primitive the frame renderer draws through.
///
/// Coordinates outside the surface are ignored rather than reported.
pub trait Canvas {
    fn set_draw_colour(&mut self, colour: Colour);

    /// Fills the whole surface with the current draw colour.
    fn clear(&mut self);

    fn draw_point(&mut self, point: Point);

    /// Draws every pixel from `from` to `to`, both endpoints included.
    fn draw_line(&mut self, from: Point, to: Point);
}
