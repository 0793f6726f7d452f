use std::convert::Infallible;
use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

use log::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::errors::RenderFrameError;
use crate::core::actions::render_frame::render_frame::ParallelRenderer;
use crate::core::actions::render_frame::report::RenderReport;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, MandelbrotConfig};
use crate::core::view::view_state::ViewState;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::presenters::memory::surface::MemorySurface;

#[derive(Debug)]
pub enum RenderToFileError {
    Config(ConfigError),
    Render(RenderFrameError<Infallible>),
    Io(io::Error),
}

impl fmt::Display for RenderToFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "{}", err),
            Self::Render(err) => write!(f, "{}", err),
            Self::Io(err) => write!(f, "failed to write image: {}", err),
        }
    }
}

impl Error for RenderToFileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for RenderToFileError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<RenderFrameError<Infallible>> for RenderToFileError {
    fn from(err: RenderFrameError<Infallible>) -> Self {
        Self::Render(err)
    }
}

impl From<io::Error> for RenderToFileError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Renders single frames off-screen and hands them to a file presenter.
pub struct RenderToFileController<P: FilePresenterPort> {
    presenter: P,
    config: MandelbrotConfig,
    renderer: ParallelRenderer,
}

impl<P: FilePresenterPort> RenderToFileController<P> {
    pub fn new(presenter: P, config: MandelbrotConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            presenter,
            renderer: ParallelRenderer::new(&config),
            config,
        })
    }

    /// Renders the configured home view.
    pub fn render_initial(
        &self,
        filepath: impl AsRef<Path>,
    ) -> Result<RenderReport, RenderToFileError> {
        let view = self.config.initial_view()?;

        self.render(&view, filepath)
    }

    pub fn render(
        &self,
        view: &ViewState,
        filepath: impl AsRef<Path>,
    ) -> Result<RenderReport, RenderToFileError> {
        let filepath = filepath.as_ref();
        let mut surface = MemorySurface::new(self.config.image_size()?);
        let report = self.renderer.render(view, &mut surface)?;

        self.presenter.present(surface.buffer(), filepath)?;
        info!("saved to {}", filepath.display());

        Ok(report)
    }
}

/// One-shot form of [`RenderToFileController::render`] writing a PPM.
pub fn render_to_file(
    config: &MandelbrotConfig,
    view: &ViewState,
    filepath: impl AsRef<Path>,
) -> Result<RenderReport, RenderToFileError> {
    let controller = RenderToFileController::new(PpmFilePresenter::new(), *config)?;

    controller.render(view, filepath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::cell::RefCell;
    use std::num::NonZeroU32;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, PixelBuffer)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.clone()));
            Ok(())
        }
    }

    struct FailingPresenter {}

    impl FilePresenterPort for FailingPresenter {
        fn present(&self, _buffer: &PixelBuffer, _filepath: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    fn small_config() -> MandelbrotConfig {
        MandelbrotConfig {
            width: 48,
            height: 27,
            initial_zoom: 48.0 * 0.25296875,
            worker_count: NonZeroU32::new(3),
            ..MandelbrotConfig::default()
        }
    }

    #[test]
    fn renders_initial_view_and_presents_it_once() {
        let presenter = RecordingPresenter::default();
        let controller = RenderToFileController::new(&presenter, small_config()).unwrap();

        let report = controller.render_initial("out/frame.ppm").unwrap();

        let written = presenter.written.borrow();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out/frame.ppm"));
        assert_eq!(written[0].1.size().width(), 48);
        assert_eq!(report.worker_count, 3);
        assert_eq!(report.zoom, 48.0 * 0.25296875);
    }

    #[test]
    fn invalid_config_fails_before_rendering() {
        let config = MandelbrotConfig {
            width: 0,
            ..small_config()
        };

        assert!(matches!(
            RenderToFileController::new(FailingPresenter {}, config),
            Err(ConfigError::ImageSize(_))
        ));
    }

    #[test]
    fn write_failures_are_reported() {
        let controller = RenderToFileController::new(FailingPresenter {}, small_config()).unwrap();

        let err = controller.render_initial("anywhere.ppm").unwrap_err();

        assert!(matches!(err, RenderToFileError::Io(_)));
        assert_eq!(err.to_string(), "failed to write image: read-only");
    }
}
