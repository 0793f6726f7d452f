use std::fmt::Debug;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap + Send + Sync + Debug {
    fn kind(&self) -> MandelbrotColourMapKinds;
}
