//! tilemerge - Tileset composer
//!
//! A library for composing XML tileset definitions into PNG images. Each
//! `<tileset>` becomes one canvas; its `<image>` and `<text>` children fill
//! the grid cells in row-major order.

pub mod cli;
pub mod compose;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use compose::{compose_file, CanvasSink, ComposedTileset, Composer};
pub use config::BuildInfo;
pub use error::{Result, TileMergeError};
pub use parser::{Attributes, Element, XmlEvent, XmlEvents};
pub use render::{
    render_image_tile, render_text_tile, write_png, BitmapFont, Canvas, PngWriter,
    TextRasterizer, TextStyle, TileBuffer,
};
pub use types::{Colour, GridIndex, ImageTileSpec, TextTileSpec, TileSetSpec, TileSize};
