//! Image tiles: a source image stretched to the tile size.

use image::imageops::{self, FilterType};
use image::{ImageResult, Rgba, RgbaImage};

use crate::types::{Colour, ImageTileSpec, TileSize};

use super::canvas::{blank_tile, TileBuffer};

/// Load the spec's source image and render it as a tile.
///
/// Decode failures are returned to the caller, which decides whether a
/// missing image is fatal.
pub fn render_image_tile(spec: &ImageTileSpec, size: TileSize) -> ImageResult<TileBuffer> {
    let source = image::open(&spec.source)?.to_rgba8();
    Ok(scale_to_tile(&source, spec.transparent_colour, size))
}

/// Stretch `source` to exactly `size` and apply the colour key.
///
/// Scaling is non-uniform nearest-neighbour. An empty source leaves the
/// tile fully transparent.
pub fn scale_to_tile(source: &RgbaImage, key: Option<Colour>, size: TileSize) -> TileBuffer {
    let mut tile = if source.width() == 0
        || source.height() == 0
        || size.width == 0
        || size.height == 0
    {
        blank_tile(size)
    } else {
        imageops::resize(source, size.width, size.height, FilterType::Nearest)
    };

    if let Some(key) = key {
        strip_colour(&mut tile, key);
    }

    tile
}

/// Replace every pixel exactly equal to `key` (all four channels) with
/// transparent black.
pub fn strip_colour(tile: &mut TileBuffer, key: Colour) {
    let key: Rgba<u8> = key.into();
    for pixel in tile.pixels_mut() {
        if *pixel == key {
            *pixel = Colour::TRANSPARENT.into();
        }
    }
}
