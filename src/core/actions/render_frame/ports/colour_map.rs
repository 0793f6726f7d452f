use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::iteration_result::IterationResult;

/// Turns an iteration result into a colour. Must be pure: equal inputs give equal colours.
pub trait ColourMap {
    fn map(&self, result: &IterationResult) -> Colour;

    fn display_name(&self) -> &str;
}
