use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{PixelBufferError, PixelBufferView};
use crate::core::actions::render_frame::report::RenderReport;
use std::error::Error;

/// Something that owns a fixed-size pixel buffer and can show it.
pub trait DisplaySurface {
    type Error: Error + 'static;

    fn size(&self) -> ImageSize;

    fn pixel_buffer(&mut self) -> Result<PixelBufferView<'_>, PixelBufferError>;

    /// Pushes the current buffer contents to the screen. Only called between render passes.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Lets a surface show what was just rendered, e.g. in a window title.
    fn show_report(&mut self, _report: &RenderReport) {}
}
