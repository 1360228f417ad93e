//! Colours handed to a `Surface`. Kept as data rather than pre-formatted
//! strings so surfaces can pick their own representation; `to_css` gives the
//! canvas form.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// `rgba(r, g, b, a)` with `a` in [0, 1].
    Rgba { r: u8, g: u8, b: u8, a: f64 },
    /// Fully saturated, half-lightness hue in degrees with alpha.
    Hue { degrees: f64, a: f64 },
}

pub const MATRIX_GREEN: Color = Color::rgb(0x00, 0xff, 0x41);
pub const INK: Color = Color::rgb(0x00, 0x00, 0x00);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn hue(degrees: f64) -> Self {
        Color::Hue { degrees, a: 1.0 }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a: alpha },
            Color::Hue { degrees, .. } => Color::Hue { degrees, a: alpha },
        }
    }

    pub fn alpha(&self) -> f64 {
        match *self {
            Color::Rgba { a, .. } | Color::Hue { a, .. } => a,
        }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } if a >= 1.0 => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Color::Hue { degrees, a } if a >= 1.0 => write!(f, "hsl({degrees}, 100%, 50%)"),
            Color::Hue { degrees, a } => write!(f, "hsla({degrees}, 100%, 50%, {a})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_forms() {
        assert_eq!(MATRIX_GREEN.to_css(), "#00ff41");
        assert_eq!(INK.to_css(), "#000000");
        assert_eq!(INK.with_alpha(0.5).to_css(), "rgba(0, 0, 0, 0.5)");
        assert_eq!(Color::hue(120.0).to_css(), "hsl(120, 100%, 50%)");
        assert_eq!(
            Color::hue(42.0).with_alpha(0.25).to_css(),
            "hsla(42, 100%, 50%, 0.25)"
        );
    }
}
