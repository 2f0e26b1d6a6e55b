//! Display color attached to point masses for render sinks.

use alloc::string::String;
use core::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Subtract `amount` from each channel, saturating at zero.
    pub fn darker(self, amount: u8) -> Self {
        Color {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }

    /// CSS `rgb(r, g, b)` notation.
    pub fn to_rgb(self) -> String {
        let mut out = String::new();
        let _ = write!(out, "rgb({}, {}, {})", self.r, self.g, self.b);
        out
    }

    /// CSS `rgba(r, g, b, a)` notation.
    pub fn to_rgba(self, alpha: f32) -> String {
        let mut out = String::new();
        let _ = write!(out, "rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darker_saturates() {
        let c = Color::new(10, 200, 30).darker(20);
        assert_eq!(c, Color::new(0, 180, 10));
    }

    #[test]
    fn css_notation() {
        assert_eq!(Color::new(1, 2, 3).to_rgb(), "rgb(1, 2, 3)");
        assert_eq!(Color::BLACK.to_rgba(0.5), "rgba(0, 0, 0, 0.5)");
    }
}
