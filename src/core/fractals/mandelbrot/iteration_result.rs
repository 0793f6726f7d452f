use crate::core::data::complex::Complex;

/// Outcome of iterating one point: how many steps it survived and where the orbit ended.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationResult {
    pub iterations: u32,
    pub max_iterations: u32,
    pub z_final: Complex,
}

impl IterationResult {
    /// The point never escaped within the budget and is treated as part of the set.
    #[must_use]
    pub fn is_interior(&self) -> bool {
        self.iterations >= self.max_iterations
    }
}
