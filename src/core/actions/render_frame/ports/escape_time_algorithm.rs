use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;

pub trait EscapeTimeAlgorithm {
    fn evaluate(&self, c: Complex) -> IterationResult;

    fn max_iterations(&self) -> u32;
}
