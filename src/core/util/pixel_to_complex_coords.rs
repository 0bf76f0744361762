use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::view_state::ViewState;

/// Maps a screen pixel (origin top-left, y down) to the complex plane (y up).
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, view: &ViewState) -> Complex {
    let half_width = f64::from(view.screen_width / 2);
    let half_height = f64::from(view.screen_height / 2);
    let height = f64::from(view.screen_height);

    let real = (f64::from(pixel.x) - half_width) / view.zoom + view.center_x;
    let imag = (height - f64::from(pixel.y) - half_height) / view.zoom + view.center_y;

    Complex { real, imag }
}

/// Inverse of [`pixel_to_complex_coords`], rounded to the nearest pixel.
///
/// The result may lie outside the screen when the value is not in view.
#[must_use]
pub fn complex_to_pixel_coords(value: Complex, view: &ViewState) -> Point {
    let half_width = f64::from(view.screen_width / 2);
    let half_height = f64::from(view.screen_height / 2);
    let height = f64::from(view.screen_height);

    let x = (value.real - view.center_x) * view.zoom + half_width;
    let y = height - half_height - (value.imag - view.center_y) * view.zoom;

    Point {
        x: x.round() as i32,
        y: y.round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> ViewState {
        ViewState::default()
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let result = pixel_to_complex_coords(Point { x: 128, y: 128 }, &view());

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_pixel_to_complex_right_of_center() {
        let result = pixel_to_complex_coords(Point { x: 228, y: 128 }, &view());

        assert_eq!(result, Complex::new(2.5, 0.0));
    }

    #[test]
    fn test_pixel_to_complex_top_left_has_positive_imag() {
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, &view());

        assert_eq!(result, Complex::new(-3.2, 3.2));
    }

    #[test]
    fn test_pixel_to_complex_follows_center_and_zoom() {
        let view = ViewState {
            center_x: -0.5,
            center_y: 0.25,
            zoom: 100.0,
            ..ViewState::default()
        };

        let result = pixel_to_complex_coords(Point { x: 178, y: 78 }, &view);

        assert!((result.real - 0.0).abs() < 1e-12);
        assert!((result.imag - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_complex_to_pixel_center() {
        let result = complex_to_pixel_coords(Complex::ZERO, &view());

        assert_eq!(result, Point { x: 128, y: 128 });
    }

    #[test]
    fn test_complex_to_pixel_rounds_to_nearest() {
        // -0.8 * 40 + 128 = 96, 128 - 0.156 * 40 = 121.76
        let result = complex_to_pixel_coords(Complex::new(-0.8, 0.156), &view());

        assert_eq!(result, Point { x: 96, y: 122 });
    }

    #[test]
    fn test_round_trip_every_pixel() {
        let views = [
            view(),
            ViewState {
                center_x: 1.75,
                center_y: -0.3,
                zoom: 1234.5,
                ..ViewState::default()
            },
            ViewState {
                zoom: 1.0,
                ..ViewState::default()
            },
        ];

        for view in &views {
            for y in 0..view.screen_height as i32 {
                for x in 0..view.screen_width as i32 {
                    let pixel = Point { x, y };
                    let world = pixel_to_complex_coords(pixel, view);

                    assert_eq!(complex_to_pixel_coords(world, view), pixel);
                }
            }
        }
    }
}
