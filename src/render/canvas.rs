//! Output canvas and copy compositing.

use image::{imageops, RgbaImage};

use crate::error::{Result, TileMergeError};
use crate::types::{Colour, TileSetSpec, TileSize, MAX_PIXELS};

/// A single tile's pixels, `tile_width × tile_height`.
pub type TileBuffer = RgbaImage;

/// Fully transparent tile buffer.
pub fn blank_tile(size: TileSize) -> TileBuffer {
    RgbaImage::new(size.width, size.height)
}

/// Reject tile sizes whose buffer would exceed [`MAX_PIXELS`].
pub fn check_tile_size(size: TileSize) -> Result<()> {
    if size.fits() {
        return Ok(());
    }
    Err(TileMergeError::Build {
        message: format!("Tile of {}x{} pixels is too large", size.width, size.height),
        help: Some(format!("Keep tilewidth x tileheight within {} pixels", MAX_PIXELS)),
    })
}

/// The full output raster for one tileset.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a canvas sized from the grid and filled with the background.
    pub fn new(spec: &TileSetSpec) -> Result<Self> {
        let (width, height) = spec.canvas_size().ok_or_else(|| TileMergeError::Build {
            message: format!(
                "Tileset '{}': canvas of {}x{} tiles at {}x{} pixels is too large",
                spec.name, spec.columns, spec.rows, spec.tile_width, spec.tile_height
            ),
            help: Some("Reduce width/height or tilewidth/tileheight".to_string()),
        })?;

        Ok(Self {
            image: RgbaImage::from_pixel(width, height, spec.background.into()),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// True when the canvas has no pixels (zero columns, rows or tile size).
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|&px| px.into())
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Copy a tile onto the canvas with its top-left corner at `(x, y)`.
    ///
    /// Source pixels replace the destination outright, alpha included.
    /// Anything outside the canvas is clipped.
    pub fn composite(&mut self, tile: &TileBuffer, x: u64, y: u64) {
        let (Ok(x), Ok(y)) = (i64::try_from(x), i64::try_from(y)) else {
            return;
        };
        imageops::replace(&mut self.image, tile, x, y);
    }
}
