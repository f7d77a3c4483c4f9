//! Colour tags carried by agents for the host renderer.

use std::fmt;

/// An opaque 8-bit RGB colour tag.  The simulation never interprets it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `[0.0, 1.0]`, the form GPU renderers expect.
    #[inline]
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Soft-green palette.  The last entry is the background colour; agents
/// draw from the others.
pub const SOFT_GREEN: [Rgb; 8] = [
    Rgb::new(97, 157, 110),
    Rgb::new(119, 180, 106),
    Rgb::new(143, 173, 91),
    Rgb::new(145, 195, 161),
    Rgb::new(93, 169, 145),
    Rgb::new(249, 229, 128),
    Rgb::new(131, 193, 215),
    Rgb::new(255, 255, 255),
];
