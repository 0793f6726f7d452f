use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MandelbrotError {
    ZeroMaxIterationsError,
    EscapeRadiusError(f64),
}

impl fmt::Display for MandelbrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::EscapeRadiusError(radius) => {
                write!(f, "Escape radius must be a finite value greater than one, got {}", radius)
            }
        }
    }
}

impl Error for MandelbrotError {}
