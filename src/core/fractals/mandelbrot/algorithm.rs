use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;

pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;

/// Closed-form test for the main cardioid.
#[inline]
fn in_main_cardioid(c: Complex) -> bool {
    let x = c.real - 0.25;
    let y_squared = c.imag * c.imag;
    let q = x * x + y_squared;

    q * (q + x) < y_squared / 4.0
}

/// Closed-form test for the period-2 bulb centred on -1.
#[inline]
fn in_period_two_bulb(c: Complex) -> bool {
    let x = c.real + 1.0;

    x * x + c.imag * c.imag < 0.0625
}

/// `z -> z² + c` escape-time iteration with cardioid and bulb shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    escape_radius_squared: f64,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, escape_radius: f64) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError);
        }

        if !(escape_radius.is_finite() && escape_radius > 1.0) {
            return Err(MandelbrotError::EscapeRadiusError(escape_radius));
        }

        Ok(Self {
            max_iterations,
            escape_radius_squared: escape_radius * escape_radius,
        })
    }

    /// Whether `c` is known to be interior without iterating.
    #[must_use]
    pub fn is_known_interior(c: Complex) -> bool {
        in_main_cardioid(c) || in_period_two_bulb(c)
    }
}

impl EscapeTimeAlgorithm for MandelbrotAlgorithm {
    fn evaluate(&self, c: Complex) -> IterationResult {
        if Self::is_known_interior(c) {
            return IterationResult {
                iterations: self.max_iterations,
                max_iterations: self.max_iterations,
                z_final: c,
            };
        }

        // the orbit starts at z1 = c, skipping the trivial z0 = 0 step
        let mut z = c;
        let mut iterations = 0;

        while iterations < self.max_iterations
            && z.magnitude_squared() < self.escape_radius_squared
        {
            z = z.square() + c;
            iterations += 1;
        }

        IterationResult {
            iterations,
            max_iterations: self.max_iterations,
            z_final: z,
        }
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
