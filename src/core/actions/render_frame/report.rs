use std::time::Duration;
use crate::core::data::complex::Complex;

/// What a completed render pass drew and how long it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    pub worker_count: u32,
    pub duration: Duration,
}
