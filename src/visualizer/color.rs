// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use image::Rgb;
use serde::{Deserialize, Serialize};

/// Color type for visualization.
///
/// Channels are written to the image buffer in the order given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Red color.
    pub const RED: Self = Self(255, 0, 0);
    /// Green color.
    pub const GREEN: Self = Self(0, 255, 0);
    /// Blue color.
    pub const BLUE: Self = Self(0, 0, 255);
    /// White color.
    pub const WHITE: Self = Self(255, 255, 255);
    /// Black color.
    pub const BLACK: Self = Self(0, 0, 0);

    /// Create a new color from channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Convert to an `image` pixel.
    #[must_use]
    pub const fn to_rgb(self) -> Rgb<u8> {
        Rgb([self.0, self.1, self.2])
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}
