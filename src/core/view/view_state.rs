use std::error::Error;
use std::fmt;
use log::warn;
use crate::core::data::complex::Complex;

/// Iterations granted per pixel of half-width per decade of zoom.
const ITERATION_BUDGET_SCALE: f64 = 0.06;

/// Beyond this, neighbouring pixels are no longer distinct in double precision.
pub const MAX_ZOOM: f64 = 1.0e15;

/// Below this one pixel spans more of the plane than the set's neighbourhood.
pub const MIN_ZOOM: f64 = 1.0e-12;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    NonPositiveZoom(f64),
    ZoomFactorTooSmall(f64),
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveZoom(zoom) => {
                write!(f, "zoom must be a finite value greater than zero, got {}", zoom)
            }
            Self::ZoomFactorTooSmall(factor) => {
                write!(f, "zoom factor must be greater than one, got {}", factor)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Iteration budget for a view `image_width` pixels wide at `zoom`.
///
/// `floor((width / 2) * 0.06 * log10(zoom))`, never less than one.
#[must_use]
pub fn max_iterations_for_zoom(zoom: f64, image_width: u32) -> u32 {
    let budget = f64::from(image_width / 2) * ITERATION_BUDGET_SCALE * zoom.log10();

    // `as` saturates, and NaN lands on 0 before the clamp
    (budget.floor() as u32).max(1)
}

/// Which part of the complex plane is on screen: a center and a pixels-per-unit zoom.
///
/// The home position is remembered so `reset` restores it bit for bit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    zoom: f64,
    home_center: Complex,
    home_zoom: f64,
    zoom_factor: f64,
}

impl ViewState {
    pub fn new(center: Complex, zoom: f64, zoom_factor: f64) -> Result<Self, ViewStateError> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(ViewStateError::NonPositiveZoom(zoom));
        }

        if !(zoom_factor.is_finite() && zoom_factor > 1.0) {
            return Err(ViewStateError::ZoomFactorTooSmall(zoom_factor));
        }

        Ok(Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            home_center: center,
            home_zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            zoom_factor,
        })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn max_iterations(&self, image_width: u32) -> u32 {
        max_iterations_for_zoom(self.zoom, image_width)
    }

    pub fn recenter(&mut self, center: Complex) {
        self.center = center;
    }

    /// Multiplies the zoom by `zoom_factor + log10(zoom)`, so deep views zoom in faster.
    ///
    /// Far enough out the multiplier would reach zero or below; there the
    /// plain `zoom_factor` is used instead.
    pub fn zoom_in(&mut self) {
        let mut growth = self.zoom_factor + self.zoom.log10();

        if growth <= 0.0 {
            growth = self.zoom_factor;
        }

        let zoom = self.zoom * growth;

        if zoom > MAX_ZOOM {
            warn!("zoom {:e} exceeds double precision, holding at {:e}", zoom, MAX_ZOOM);
        }

        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        let zoom = self.zoom / self.zoom_factor;

        if zoom < MIN_ZOOM {
            warn!("zoom {:e} is below the minimum, holding at {:e}", zoom, MIN_ZOOM);
        }

        self.zoom = zoom.max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        self.center = self.home_center;
        self.zoom = self.home_zoom;
    }
}
