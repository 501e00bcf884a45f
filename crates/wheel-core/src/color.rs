//! Slice colors and the cyclic palette.

use serde::{Deserialize, Serialize};

/// RGB color of a wheel slice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const PEACH: Color = Color::rgb(0xFF, 0x9A, 0x9E);
    pub const BLUSH: Color = Color::rgb(0xFE, 0xCF, 0xEF);
    pub const WISTERIA: Color = Color::rgb(0xA1, 0x8C, 0xD1);
    pub const ORCHID: Color = Color::rgb(0xFB, 0xC2, 0xEB);
    pub const SKY: Color = Color::rgb(0x8F, 0xD3, 0xF4);
    pub const MINT: Color = Color::rgb(0x84, 0xFA, 0xB0);
    pub const LILAC: Color = Color::rgb(0xE0, 0xC3, 0xFC);

    /// CSS color string, e.g. `rgb(255, 154, 158)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Uppercase hex notation, e.g. `#FF9A9E`. Used for gradient stops.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Ordered slice colors, assigned cyclically by slice index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: vec![
                Color::PEACH,
                Color::BLUSH,
                Color::WISTERIA,
                Color::ORCHID,
                Color::SKY,
                Color::MINT,
                Color::LILAC,
            ],
        }
    }
}

impl Palette {
    /// Returns `None` for an empty color list.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        (!colors.is_empty()).then_some(Self { colors })
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for slice `index`, wrapping around the palette.
    ///
    /// A palette deserialized as `[]` falls back to the default colors;
    /// `WheelConfig::validate` rejects that case before it reaches rendering.
    pub fn color_for(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Palette::default().color_for(index);
        }
        self.colors[index % self.colors.len()]
    }
}
