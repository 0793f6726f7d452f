use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;

/// Linear grey ramp over the iteration budget. Banded, but cheap.
#[derive(Debug, Default)]
pub struct MandelbrotGrayscale {}

impl MandelbrotGrayscale {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl ColourMap for MandelbrotGrayscale {
    fn map(&self, result: &IterationResult) -> Colour {
        if result.is_interior() {
            return Colour::BLACK;
        }

        let level = (255 * u64::from(result.iterations) / u64::from(result.max_iterations)) as u8;

        Colour {
            r: level,
            g: level,
            b: level,
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotGrayscale {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Grayscale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn result(iterations: u32, max_iterations: u32) -> IterationResult {
        IterationResult {
            iterations,
            max_iterations,
            z_final: Complex::new(3.0, 0.0),
        }
    }

    #[test]
    fn immediate_escape_is_black() {
        assert_eq!(MandelbrotGrayscale::new().map(&result(0, 100)), Colour::BLACK);
    }

    #[test]
    fn interior_is_black() {
        assert_eq!(MandelbrotGrayscale::new().map(&result(100, 100)), Colour::BLACK);
    }

    #[test]
    fn halfway_is_mid_grey() {
        assert_eq!(
            MandelbrotGrayscale::new().map(&result(50, 100)),
            Colour { r: 127, g: 127, b: 127 }
        );
    }

    #[test]
    fn last_escaping_iteration_is_nearly_white() {
        let colour = MandelbrotGrayscale::new().map(&result(99, 100));

        assert_eq!(colour.r, 252);
    }
}
