use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::actions::render_frame::ports::escape_time_algorithm::EscapeTimeAlgorithm;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{PixelBufferError, RowBand};
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use crate::core::view::view_state::ViewState;

/// Read-only inputs shared by every worker of one render pass.
#[derive(Debug)]
pub struct FrameJob<'a, A: ?Sized, C: ?Sized> {
    pub image_size: ImageSize,
    pub view: &'a ViewState,
    pub algorithm: &'a A,
    pub colour_map: &'a C,
}

impl<A, C> FrameJob<'_, A, C>
where
    A: EscapeTimeAlgorithm + ?Sized,
    C: ColourMap + ?Sized,
{
    /// Evaluates and colours every pixel of `band`, and nothing outside it.
    pub fn fill_band(&self, band: &mut RowBand<'_>) -> Result<(), PixelBufferError> {
        for row in band.rows() {
            for col in 0..band.width() {
                let pixel = Point {
                    x: col as i32,
                    y: row as i32,
                };
                let c = pixel_to_complex_coords(pixel, self.image_size, self.view);
                let colour = self.colour_map.map(&self.algorithm.evaluate(c));

                band.set_pixel(row, col, colour)?;
            }
        }

        Ok(())
    }
}
