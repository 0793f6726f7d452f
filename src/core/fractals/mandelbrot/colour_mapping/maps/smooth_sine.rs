use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;

/// Continuous colouring: the fractional escape count drives three phase-shifted sine waves.
#[derive(Debug)]
pub struct MandelbrotSmoothSine {
    log_escape_radius: f64,
}

impl MandelbrotSmoothSine {
    #[must_use]
    pub fn new(escape_radius: f64) -> Self {
        Self {
            log_escape_radius: escape_radius.ln(),
        }
    }

    /// `n - log2(ln|z| / ln R)`
    #[must_use]
    pub fn continuous_iterations(&self, result: &IterationResult) -> f64 {
        let log_magnitude = result.z_final.magnitude().ln();

        f64::from(result.iterations) - (log_magnitude / self.log_escape_radius).log2()
    }
}

impl ColourMap for MandelbrotSmoothSine {
    fn map(&self, result: &IterationResult) -> Colour {
        if result.is_interior() {
            return Colour::BLACK;
        }

        let nu = self.continuous_iterations(result);

        Colour {
            r: Colour::channel((1.0 + (nu * 0.07 + 5.0).sin()) * 127.0),
            g: Colour::channel((1.0 + (nu * 0.05).cos()) * 127.0),
            b: Colour::channel((1.0 + (nu * 0.05).sin()) * 127.0),
        }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotSmoothSine {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::SmoothSine
    }
}
