pub mod colour_map;
pub mod display_surface;
pub mod escape_time_algorithm;

pub use colour_map::ColourMap;
pub use display_surface::DisplaySurface;
pub use escape_time_algorithm::EscapeTimeAlgorithm;
