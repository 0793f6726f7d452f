use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::actions::render_frame::ports::display_surface::DisplaySurface;
use crate::core::actions::render_frame::report::RenderReport;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::{PixelBufferError, PixelBufferView};

pub const WINDOW_TITLE: &str = "Mandelbrot Explorer";

/// Window-backed display surface. The `pixels` frame is the render target.
pub struct PixelsSurface {
    window: &'static Window,
    pixels: Pixels<'static>,
    size: ImageSize,
}

impl PixelsSurface {
    pub fn new(window: &'static Window, size: ImageSize) -> Result<Self, pixels::Error> {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, window);
        let pixels = Pixels::new(size.width(), size.height(), surface_texture)?;

        Ok(Self {
            window,
            pixels,
            size,
        })
    }
}

impl DisplaySurface for PixelsSurface {
    type Error = pixels::Error;

    fn size(&self) -> ImageSize {
        self.size
    }

    fn pixel_buffer(&mut self) -> Result<PixelBufferView<'_>, PixelBufferError> {
        PixelBufferView::new(self.size, self.pixels.frame_mut())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.pixels.render()
    }

    fn show_report(&mut self, report: &RenderReport) {
        self.window.set_title(&status_title(report));
    }
}

pub fn status_title(report: &RenderReport) -> String {
    format!(
        "{} | center ({:.6}, {:.6}) | zoom {:.3e} | {} iterations | {} ms",
        WINDOW_TITLE,
        report.center.real,
        report.center.imag,
        report.zoom,
        report.max_iterations,
        report.duration.as_millis()
    )
}
