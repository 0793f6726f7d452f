#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Converts a channel intensity to a byte, clamping to `[0, 255]`. NaN maps to 0.
    #[must_use]
    pub fn channel(value: f64) -> u8 {
        value.clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_clamps_out_of_range_values() {
        assert_eq!(Colour::channel(-12.5), 0);
        assert_eq!(Colour::channel(300.0), 255);
        assert_eq!(Colour::channel(127.9), 127);
    }

    #[test]
    fn channel_maps_nan_to_zero() {
        assert_eq!(Colour::channel(f64::NAN), 0);
    }
}
