//! PNG output for composed tilesets.

use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::compose::{CanvasSink, ComposedTileset};
use crate::error::{Result, TileMergeError};

use super::Canvas;

/// Write a canvas to a PNG file, replacing any existing file.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    canvas
        .as_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| TileMergeError::Encode {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Sink that writes each tileset to `<dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct PngWriter {
    dir: PathBuf,
}

impl PngWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Output path for a tileset name.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", name))
    }

    /// Write a tileset, returning the path written.
    ///
    /// PNG cannot hold a zero-area image, so an empty canvas is skipped and
    /// `None` is returned.
    pub fn write(&self, tileset: &ComposedTileset) -> Result<Option<PathBuf>> {
        if tileset.canvas.is_empty() {
            return Ok(None);
        }
        let path = self.output_path(&tileset.spec.name);
        write_png(&tileset.canvas, &path)?;
        Ok(Some(path))
    }
}

impl CanvasSink for PngWriter {
    fn consume(&mut self, tileset: ComposedTileset) -> Result<()> {
        self.write(&tileset).map(|_| ())
    }
}
