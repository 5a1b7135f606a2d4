//! Colour type and attribute parsing.

use image::Rgba;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Yellow (default text colour).
    pub const YELLOW: Self = Self::rgb(255, 255, 0);

    /// Parse a `#RRGGBBAA` attribute value.
    ///
    /// Values shorter than nine characters resolve to [`Colour::TRANSPARENT`].
    /// The leading character is not checked and anything after the alpha
    /// pair is ignored. A channel whose two characters are not valid hex
    /// resolves to 0; attribute text is never rejected.
    pub fn from_attribute(value: &str) -> Self {
        let chars: Vec<char> = value.chars().collect();
        if chars.len() < 9 {
            return Self::TRANSPARENT;
        }

        let channel = |offset: usize| {
            let pair: String = chars[offset..offset + 2].iter().collect();
            u8::from_str_radix(&pair, 16).unwrap_or(0)
        };

        Self::new(channel(1), channel(3), channel(5), channel(7))
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(colour: Colour) -> Self {
        Rgba(colour.to_rgba())
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(r, g, b, a)
    }
}
