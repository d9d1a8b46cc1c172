//! Color tokens carried by the fixed data tables.
//!
//! Kept free of any terminal type so the model crate stays renderer-agnostic;
//! the TUI maps a [`Swatch`] onto its own color type.

use serde::{Deserialize, Serialize};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Swatch {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Swatch {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

// Palette used by the dashboard tables.
pub const RED_400: Swatch = Swatch::rgb(0xF8, 0x71, 0x71);
pub const YELLOW_400: Swatch = Swatch::rgb(0xFA, 0xCC, 0x15);
pub const AMBER_400: Swatch = Swatch::rgb(0xFB, 0xBF, 0x24);
pub const SLATE_700: Swatch = Swatch::rgb(0x33, 0x41, 0x55);
pub const GREEN_400: Swatch = Swatch::rgb(0x4A, 0xDE, 0x80);
pub const EMERALD_400: Swatch = Swatch::rgb(0x34, 0xD3, 0x99);
pub const BLUE_400: Swatch = Swatch::rgb(0x60, 0xA5, 0xFA);
pub const PURPLE_400: Swatch = Swatch::rgb(0xC0, 0x84, 0xFC);
pub const EMERALD_500: Swatch = Swatch::rgb(0x10, 0xB9, 0x81);
pub const RED_500: Swatch = Swatch::rgb(0xEF, 0x44, 0x44);
pub const WHITE: Swatch = Swatch::rgb(0xFF, 0xFF, 0xFF);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_channels() {
        assert_eq!((RED_400.r, RED_400.g, RED_400.b), (0xF8, 0x71, 0x71));
        assert_eq!((EMERALD_500.r, EMERALD_500.g, EMERALD_500.b), (0x10, 0xB9, 0x81));
        assert_eq!(WHITE, Swatch::rgb(0xFF, 0xFF, 0xFF));
    }
}
