use std::convert::Infallible;

use crate::core::actions::render_frame::ports::display_surface::DisplaySurface;
use crate::core::actions::render_frame::report::RenderReport;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, PixelBufferView};

/// Display surface backed by an owned buffer, for headless rendering.
#[derive(Debug)]
pub struct MemorySurface {
    buffer: PixelBuffer,
    presented_frames: u64,
    last_report: Option<RenderReport>,
}

impl MemorySurface {
    #[must_use]
    pub fn new(size: ImageSize) -> Self {
        Self {
            buffer: PixelBuffer::new(size),
            presented_frames: 0,
            last_report: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented_frames
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&RenderReport> {
        self.last_report.as_ref()
    }
}

impl DisplaySurface for MemorySurface {
    type Error = Infallible;

    fn size(&self) -> ImageSize {
        self.buffer.size()
    }

    fn pixel_buffer(&mut self) -> Result<PixelBufferView<'_>, PixelBufferError> {
        Ok(self.buffer.view_mut())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.presented_frames += 1;
        Ok(())
    }

    fn show_report(&mut self, report: &RenderReport) {
        self.last_report = Some(*report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;

    #[test]
    fn starts_black_and_unpresented() {
        let surface = MemorySurface::new(ImageSize::new(3, 2).unwrap());

        assert_eq!(surface.presented_frames(), 0);
        assert!(surface.last_report().is_none());
        assert_eq!(surface.buffer().pixel(1, 2).unwrap(), Colour::BLACK);
    }

    #[test]
    fn present_counts_frames() {
        let mut surface = MemorySurface::new(ImageSize::new(3, 2).unwrap());

        surface.present().unwrap();
        surface.present().unwrap();

        assert_eq!(surface.presented_frames(), 2);
    }
}
