use std::fmt;

/// Palettes selectable at startup. Interior points are black under every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    /// Sine-wave palette over the continuous iteration count.
    #[default]
    SmoothSine,
    /// Linear grey ramp over the raw iteration count.
    Grayscale,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::SmoothSine, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SmoothSine => "Smooth sine",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
