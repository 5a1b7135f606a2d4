//! Tileset and tile definitions.
//!
//! Specs are built from element attributes. Missing attributes take the
//! defaults below; only an `<image>` without `source` is an error.

use std::path::PathBuf;

use crate::error::{Result, TileMergeError};
use crate::parser::Attributes;

use super::Colour;

/// Largest raster, in pixels, that a canvas or tile may allocate.
///
/// 16384 × 16384 RGBA pixels, 1 GiB of buffer.
pub const MAX_PIXELS: u64 = 1 << 28;

/// Pixel dimensions of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixels(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// True when a buffer of this size stays within [`MAX_PIXELS`].
    pub fn fits(self) -> bool {
        self.pixels() <= MAX_PIXELS
    }
}

/// Zero-based position of a tile in row-major grid order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GridIndex(pub u32);

impl GridIndex {
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// A tileset definition (`<tileset>` element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSetSpec {
    /// Output name; the canvas is written to `<name>.png`.
    pub name: String,

    /// Grid columns (`width` attribute).
    pub columns: u32,

    /// Grid rows (`height` attribute).
    pub rows: u32,

    /// Tile width in pixels (`tilewidth` attribute).
    pub tile_width: u32,

    /// Tile height in pixels (`tileheight` attribute).
    pub tile_height: u32,

    /// Canvas fill colour (`background` attribute).
    pub background: Colour,
}

impl TileSetSpec {
    pub const DEFAULT_NAME: &'static str = "unamed";
    pub const DEFAULT_COLUMNS: u32 = 1;
    pub const DEFAULT_ROWS: u32 = 1;
    pub const DEFAULT_TILE_WIDTH: u32 = 32;
    pub const DEFAULT_TILE_HEIGHT: u32 = 32;

    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            name: attrs.string("name", Self::DEFAULT_NAME),
            columns: attrs.uint("width", Self::DEFAULT_COLUMNS),
            rows: attrs.uint("height", Self::DEFAULT_ROWS),
            tile_width: attrs.uint("tilewidth", Self::DEFAULT_TILE_WIDTH),
            tile_height: attrs.uint("tileheight", Self::DEFAULT_TILE_HEIGHT),
            background: attrs.colour("background", Colour::TRANSPARENT),
        }
    }

    pub fn tile_size(&self) -> TileSize {
        TileSize::new(self.tile_width, self.tile_height)
    }

    /// Canvas dimensions, `None` if either side overflows `u32` or the
    /// whole raster exceeds [`MAX_PIXELS`].
    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        let width = self.columns.checked_mul(self.tile_width)?;
        let height = self.rows.checked_mul(self.tile_height)?;
        TileSize::new(width, height)
            .fits()
            .then_some((width, height))
    }

    /// Top-left pixel of the tile at `index`.
    ///
    /// Indices past `columns × rows` map below the canvas; nothing bounds
    /// them here. Returns `None` for a zero-column grid.
    pub fn placement(&self, index: GridIndex) -> Option<(u64, u64)> {
        if self.columns == 0 {
            return None;
        }
        let column = u64::from(index.0 % self.columns);
        let row = u64::from(index.0 / self.columns);
        Some((
            column * u64::from(self.tile_width),
            row * u64::from(self.tile_height),
        ))
    }
}

impl Default for TileSetSpec {
    fn default() -> Self {
        Self::from_attributes(&Attributes::new())
    }
}

/// An image tile (`<image>` element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTileSpec {
    pub source: PathBuf,

    /// Pixels exactly matching this colour become fully transparent.
    pub transparent_colour: Option<Colour>,
}

impl ImageTileSpec {
    pub fn from_attributes(attrs: &Attributes) -> Result<Self> {
        let source = attrs.get("source").ok_or(TileMergeError::MissingSource)?;

        Ok(Self {
            source: PathBuf::from(source),
            transparent_colour: attrs.optional_colour("transparentcolor"),
        })
    }
}

/// A text tile (`<text>` element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTileSpec {
    pub content: String,

    /// Glyph cell size in pixels.
    pub size: u32,

    pub colour: Colour,
}

impl TextTileSpec {
    pub const DEFAULT_CONTENT: &'static str = "T";
    pub const DEFAULT_SIZE: u32 = 16;
    pub const DEFAULT_COLOUR: Colour = Colour::YELLOW;

    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self {
            content: attrs.string("content", Self::DEFAULT_CONTENT),
            size: attrs.uint("size", Self::DEFAULT_SIZE),
            colour: attrs.colour("color", Self::DEFAULT_COLOUR),
        }
    }
}
