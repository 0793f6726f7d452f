use std::error::Error;
use std::fmt;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageSizeError {
    ZeroDimension { width: u32, height: u32 },
}

impl fmt::Display for ImageSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "image size must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for ImageSizeError {}

/// Dimensions of the pixel buffer, fixed for the lifetime of a surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ImageSize {
    width: u32,
    height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ImageSizeError> {
        if width == 0 || height == 0 {
            return Err(ImageSizeError::ZeroDimension { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The pixel that maps onto the view center. Uses integer halving so the
    /// center pixel is exact for odd sizes too.
    #[must_use]
    pub fn center_pixel(&self) -> Point {
        Point {
            x: (self.width / 2) as i32,
            y: (self.height / 2) as i32,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_or_height_is_rejected() {
        assert_eq!(
            ImageSize::new(0, 720),
            Err(ImageSizeError::ZeroDimension { width: 0, height: 720 })
        );
        assert_eq!(
            ImageSize::new(1280, 0),
            Err(ImageSizeError::ZeroDimension { width: 1280, height: 0 })
        );
    }

    #[test]
    fn center_pixel_of_default_window() {
        let size = ImageSize::new(1280, 720).unwrap();

        assert_eq!(size.center_pixel(), Point { x: 640, y: 360 });
        assert_eq!(size.pixel_count(), 921_600);
    }

    #[test]
    fn center_pixel_rounds_down_for_odd_sizes() {
        let size = ImageSize::new(5, 3).unwrap();

        assert_eq!(size.center_pixel(), Point { x: 2, y: 1 });
    }

    #[test]
    fn contains_point_checks_all_edges() {
        let size = ImageSize::new(10, 4).unwrap();

        assert!(size.contains_point(Point { x: 0, y: 0 }));
        assert!(size.contains_point(Point { x: 9, y: 3 }));
        assert!(!size.contains_point(Point { x: 10, y: 0 }));
        assert!(!size.contains_point(Point { x: 0, y: 4 }));
        assert!(!size.contains_point(Point { x: -1, y: 2 }));
        assert!(!size.contains_point(Point { x: 3, y: -1 }));
    }
}
