//! Core domain types for tilemerge.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `TileSetSpec` - Grid geometry and background of one output image
//! - `ImageTileSpec` / `TextTileSpec` - Per-tile definitions

mod colour;
mod tileset;

pub use colour::Colour;
pub use tileset::{GridIndex, MAX_PIXELS, ImageTileSpec, TextTileSpec, TileSetSpec, TileSize};
