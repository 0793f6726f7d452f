use crate::core::data::pixel_buffer::PixelBufferError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum FillFrameError {
    PixelBuffer(PixelBufferError),
    ThreadPool(rayon::ThreadPoolBuildError),
    WorkerPanicked,
}

impl fmt::Display for FillFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
            Self::ThreadPool(err) => write!(f, "could not start render workers: {}", err),
            Self::WorkerPanicked => write!(f, "a render worker panicked"),
        }
    }
}

impl Error for FillFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelBuffer(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
            Self::WorkerPanicked => None,
        }
    }
}

impl From<PixelBufferError> for FillFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for FillFrameError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}

/// Failure of a full render pass. `E` is the display surface's own error type.
#[derive(Debug)]
pub enum RenderFrameError<E> {
    Algorithm(MandelbrotError),
    Fill(FillFrameError),
    Present(E),
}

impl<E: fmt::Display> fmt::Display for RenderFrameError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "fractal algorithm error: {}", err),
            Self::Fill(err) => write!(f, "render error: {}", err),
            Self::Present(err) => write!(f, "present error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for RenderFrameError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::Fill(err) => Some(err),
            Self::Present(err) => Some(err),
        }
    }
}

impl<E> From<MandelbrotError> for RenderFrameError<E> {
    fn from(err: MandelbrotError) -> Self {
        Self::Algorithm(err)
    }
}

impl<E> From<FillFrameError> for RenderFrameError<E> {
    fn from(err: FillFrameError) -> Self {
        Self::Fill(err)
    }
}
