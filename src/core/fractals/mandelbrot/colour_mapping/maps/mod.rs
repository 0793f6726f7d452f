pub mod grayscale;
pub mod smooth_sine;
