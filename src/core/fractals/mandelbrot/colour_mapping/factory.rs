use crate::core::fractals::mandelbrot::colour_mapping::{
    kinds::MandelbrotColourMapKinds,
    map::MandelbrotColourMap,
    maps::{grayscale::MandelbrotGrayscale, smooth_sine::MandelbrotSmoothSine},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
    escape_radius: f64,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::SmoothSine => {
            Box::new(MandelbrotSmoothSine::new(escape_radius))
        }
        MandelbrotColourMapKinds::Grayscale => Box::new(MandelbrotGrayscale::new()),
    }
}
