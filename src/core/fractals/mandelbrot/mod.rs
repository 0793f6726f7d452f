pub mod algorithm;
pub mod colour_mapping;
pub mod errors;
pub mod iteration_result;
pub mod mandelbrot_config;
