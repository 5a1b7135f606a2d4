//! Rendering module for tilemerge.
//!
//! This module produces tile buffers from image and text definitions,
//! composites them onto the tileset canvas, and encodes the result.

mod canvas;
mod image_tile;
mod png;
mod text_tile;

pub use canvas::{blank_tile, check_tile_size, Canvas, TileBuffer};
pub use image_tile::{render_image_tile, scale_to_tile, strip_colour};
pub use png::{write_png, PngWriter};
pub use text_tile::{render_text_tile, BitmapFont, TextRasterizer, TextStyle};
