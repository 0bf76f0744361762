use thiserror::Error;

use crate::core::actions::draw_frame::ports::canvas::Canvas;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

const BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("pixel at x:{}, y:{} outside of {}x{} buffer", .pixel.x, .pixel.y, .width, .height)]
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    #[error("frame of {frame_size} bytes does not match buffer size {buffer_size}")]
    BoundsMismatch {
        frame_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// RGBA8 framebuffer, row-major from the top-left pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    draw_colour: Colour,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            draw_colour: Colour::IN_SET,
            buffer: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Colour> {
        let index = self.index(point)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    pub fn set_pixel(&mut self, point: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index(point)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel: point,
                width: self.width,
                height: self.height,
            })?;

        self.write_colour(index, colour);
        Ok(())
    }

    /// Copies the buffer into an equally sized RGBA frame.
    pub fn copy_into(&self, frame: &mut [u8]) -> Result<(), PixelBufferError> {
        if frame.len() != self.buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                frame_size: frame.len(),
                buffer_size: self.buffer.len(),
            });
        }

        frame.copy_from_slice(&self.buffer);
        Ok(())
    }

    fn index(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some((point.y as usize * self.width as usize + point.x as usize) * BYTES_PER_PIXEL)
    }

    fn write_colour(&mut self, index: usize, colour: Colour) {
        self.buffer[index..index + BYTES_PER_PIXEL]
            .copy_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
    }
}

impl Canvas for PixelBuffer {
    fn set_draw_colour(&mut self, colour: Colour) {
        self.draw_colour = colour;
    }

    fn clear(&mut self) {
        let colour = self.draw_colour;
        for pixel in self.buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
        }
    }

    fn draw_point(&mut self, point: Point) {
        if let Some(index) = self.index(point) {
            self.write_colour(index, self.draw_colour);
        }
    }

    // Bresenham, so off-surface endpoints still draw their visible part.
    fn draw_line(&mut self, from: Point, to: Point) {
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };
        let mut error = dx + dy;
        let mut current = from;

        loop {
            self.draw_point(current);
            if current == to {
                break;
            }

            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                current.x += step_x;
            }
            if doubled <= dx {
                error += dx;
                current.y += step_y;
            }
        }
    }
}
