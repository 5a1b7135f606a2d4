//! Build command implementation.
//!
//! Composes every tileset in a definition file and writes `<name>.png`
//! into the working directory.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::compose::{CanvasSink, ComposedTileset, Composer};
use crate::error::Result;
use crate::output::{count, dimensions, relative_path, Printer};
use crate::render::PngWriter;

/// Compose tilesets from an XML definition file
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// XML file containing one or more <tileset> elements
    pub file: PathBuf,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<usize> {
    let written = build_into(&args.file, Path::new("."), printer)?;
    printer.status("Finished", &count(written, "tileset"));
    Ok(written)
}

/// Compose `file`, writing images into `out_dir`.
pub fn build_into(file: &Path, out_dir: &Path, printer: &Printer) -> Result<usize> {
    let mut sink = ReportingSink {
        writer: PngWriter::new(out_dir),
        printer,
    };
    Composer::new().compose_file(file, &mut sink)
}

/// Writes PNGs and reports progress for each tileset.
struct ReportingSink<'a> {
    writer: PngWriter,
    printer: &'a Printer,
}

impl CanvasSink for ReportingSink<'_> {
    fn consume(&mut self, tileset: ComposedTileset) -> Result<()> {
        let name = &tileset.spec.name;
        self.printer.status(
            "Composing",
            &format!(
                "{} ({}, {})",
                name,
                dimensions(tileset.canvas.width(), tileset.canvas.height()),
                count(tileset.tiles as usize, "tile")
            ),
        );

        for warning in &tileset.warnings {
            self.printer.warning("Warning", &format!("{}: {}", name, warning));
        }

        match self.writer.write(&tileset)? {
            Some(path) => self
                .printer
                .status("Writing", &self.printer.highlight(&relative_path(&path))),
            None => self
                .printer
                .warning("Skipped", &format!("{}: canvas has no pixels", name)),
        }

        Ok(())
    }
}
