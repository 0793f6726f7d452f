use crate::core::data::complex::Complex;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::view::view_state::ViewState;

/// Maps a pixel onto the complex plane for the given view.
///
/// `c = center + (x - width/2) / zoom + i * (y - height/2) / zoom`
///
/// Rendering and click-to-recenter both go through here, so a clicked pixel
/// becomes exactly the center of the next frame. Pixels outside the image
/// are mapped too; the caller decides whether that is meaningful.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, image_size: ImageSize, view: &ViewState) -> Complex {
    let origin = image_size.center_pixel();
    let center = view.center();
    let zoom = view.zoom();

    Complex {
        real: center.real + f64::from(pixel.x - origin.x) / zoom,
        imag: center.imag + f64::from(pixel.y - origin.y) / zoom,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_size() -> ImageSize {
        ImageSize::new(1280, 720).unwrap()
    }

    #[test]
    fn image_center_maps_to_view_center() {
        let views = [
            ViewState::new(Complex::new(-0.5, 0.0), 323.8, 4.0).unwrap(),
            ViewState::new(Complex::new(0.28, -0.0113), 1.0e12, 4.0).unwrap(),
            ViewState::new(Complex::new(-1.75, 0.5), 0.25, 4.0).unwrap(),
        ];

        for view in views {
            let c = pixel_to_complex_coords(Point { x: 640, y: 360 }, image_size(), &view);

            assert_eq!(c, view.center());
        }
    }

    #[test]
    fn top_left_pixel_is_half_a_view_away() {
        let view = ViewState::new(Complex::ZERO, 100.0, 4.0).unwrap();

        let c = pixel_to_complex_coords(Point { x: 0, y: 0 }, image_size(), &view);

        assert_eq!(c, Complex::new(-6.4, -3.6));
    }

    #[test]
    fn one_pixel_step_is_one_over_zoom() {
        let view = ViewState::new(Complex::new(1.0, 1.0), 8.0, 4.0).unwrap();

        let c = pixel_to_complex_coords(Point { x: 641, y: 359 }, image_size(), &view);

        assert_eq!(c, Complex::new(1.125, 0.875));
    }
}
