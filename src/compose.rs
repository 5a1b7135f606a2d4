//! Tileset composition.
//!
//! Walks the XML event stream, builds one canvas per `<tileset>`, renders a
//! tile for each child element and copies it into its grid cell. Finished
//! canvases are handed to a [`CanvasSink`].
//!
//! Any error aborts the whole file. The tileset being composed at that point
//! never reaches the sink; tilesets finished earlier already have.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TileMergeError};
use crate::parser::{Attributes, Element, XmlEvent, XmlEvents};
use crate::render::{
    blank_tile, check_tile_size, render_image_tile, render_text_tile, BitmapFont, Canvas,
    TextRasterizer, TileBuffer,
};
use crate::types::{GridIndex, ImageTileSpec, TextTileSpec, TileSetSpec, TileSize};

const TILESET: &str = "tileset";
const IMAGE: &str = "image";
const TEXT: &str = "text";

/// A fully composed tileset, ready for encoding.
#[derive(Debug, Clone)]
pub struct ComposedTileset {
    pub spec: TileSetSpec,
    pub canvas: Canvas,

    /// Number of child elements processed (the final grid index).
    pub tiles: u32,

    /// Non-fatal problems, e.g. an image that failed to load.
    pub warnings: Vec<String>,
}

/// Consumer of finished canvases.
pub trait CanvasSink {
    fn consume(&mut self, tileset: ComposedTileset) -> Result<()>;
}

impl CanvasSink for Vec<ComposedTileset> {
    fn consume(&mut self, tileset: ComposedTileset) -> Result<()> {
        self.push(tileset);
        Ok(())
    }
}

/// Composes tilesets using a text rasterizer for `<text>` tiles.
pub struct Composer<T = BitmapFont> {
    text: T,
}

impl Composer<BitmapFont> {
    pub fn new() -> Self {
        Self { text: BitmapFont }
    }
}

impl Default for Composer<BitmapFont> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TextRasterizer> Composer<T> {
    /// Create a composer with a custom text rasterizer.
    pub fn with_rasterizer(text: T) -> Self {
        Self { text }
    }

    /// Compose every tileset in the file at `path`.
    ///
    /// Returns the number of tilesets handed to the sink.
    pub fn compose_file(&self, path: &Path, sink: &mut dyn CanvasSink) -> Result<usize> {
        let file = File::open(path).map_err(|e| TileMergeError::FileOpen {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.compose_reader(BufReader::new(file), sink)
    }

    /// Compose every tileset read from `source`.
    ///
    /// `tileset` elements are picked up at any depth; other elements outside
    /// a tileset only act as containers. The document must have exactly one
    /// root element and every element must be closed.
    pub fn compose_reader<R: BufRead>(
        &self,
        source: R,
        sink: &mut dyn CanvasSink,
    ) -> Result<usize> {
        let mut events = XmlEvents::new(source);
        let mut count = 0;
        let mut depth = 0usize;
        let mut root_closed = false;

        while let Some(event) = events.next_event()? {
            match event {
                XmlEvent::Start(_) if depth == 0 && root_closed => {
                    return Err(events.error("extra content at end of document"));
                }
                XmlEvent::Start(element) if element.name == TILESET => {
                    self.compose_tileset(&mut events, &element.attributes, sink)?;
                    count += 1;
                    root_closed = depth == 0;
                }
                XmlEvent::Start(_) => depth += 1,
                XmlEvent::End(_) => {
                    depth = depth.saturating_sub(1);
                    root_closed = depth == 0;
                }
            }
        }

        if depth > 0 {
            return Err(events.unexpected_eof());
        }
        Ok(count)
    }

    /// Compose one tileset whose start element has just been read.
    ///
    /// Consumes events up to and including the tileset's end.
    fn compose_tileset<R: BufRead>(
        &self,
        events: &mut XmlEvents<R>,
        attributes: &Attributes,
        sink: &mut dyn CanvasSink,
    ) -> Result<()> {
        let spec = TileSetSpec::from_attributes(attributes);
        let mut canvas = Canvas::new(&spec)?;
        let size = spec.tile_size();
        let mut index = GridIndex::default();
        let mut warnings = Vec::new();

        loop {
            let element = match events.next_event()? {
                Some(XmlEvent::Start(element)) => element,
                Some(XmlEvent::End(_)) => break,
                None => return Err(events.unexpected_eof()),
            };

            let tile = self.render_child(&element, size, &mut warnings)?;
            events.skip_element()?;

            if let (Some(tile), Some((x, y))) = (tile, spec.placement(index)) {
                canvas.composite(&tile, x, y);
            }
            index = index.next();
        }

        sink.consume(ComposedTileset {
            spec,
            canvas,
            tiles: index.0,
            warnings,
        })
    }

    /// Render the tile for one child element, `None` for unknown elements.
    fn render_child(
        &self,
        element: &Element,
        size: TileSize,
        warnings: &mut Vec<String>,
    ) -> Result<Option<TileBuffer>> {
        match element.name.as_str() {
            IMAGE | TEXT => check_tile_size(size)?,
            _ => {}
        }

        match element.name.as_str() {
            IMAGE => {
                let spec = ImageTileSpec::from_attributes(&element.attributes)?;
                let tile = render_image_tile(&spec, size).unwrap_or_else(|e| {
                    warnings.push(format!(
                        "Failed to load image {}: {}",
                        spec.source.display(),
                        e
                    ));
                    blank_tile(size)
                });
                Ok(Some(tile))
            }
            TEXT => {
                let spec = TextTileSpec::from_attributes(&element.attributes);
                Ok(Some(render_text_tile(&spec, size, &self.text)))
            }
            other => {
                warnings.push(format!("Ignoring unknown element <{}>", other));
                Ok(None)
            }
        }
    }
}

/// Compose every tileset in `path` with the default bitmap font.
pub fn compose_file(path: &Path, sink: &mut dyn CanvasSink) -> Result<usize> {
    Composer::new().compose_file(path, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextStyle;
    use crate::types::Colour;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const RED: Colour = Colour::rgb(255, 0, 0);

    /// Fills the whole tile with the text colour, so placement is easy to see.
    struct Flood;

    impl TextRasterizer for Flood {
        fn draw(&self, target: &mut TileBuffer, _text: &str, style: &TextStyle) {
            for px in target.pixels_mut() {
                *px = style.colour.into();
            }
        }
    }

    fn compose(source: &str) -> Result<Vec<ComposedTileset>> {
        let mut out = Vec::new();
        Composer::with_rasterizer(Flood).compose_reader(source.as_bytes(), &mut out)?;
        Ok(out)
    }

    fn colour_at(tileset: &ComposedTileset, x: u32, y: u32) -> Colour {
        tileset.canvas.get(x, y).unwrap()
    }

    #[test]
    fn test_empty_tileset_uses_defaults() {
        let out = compose("<tileset/>").unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].spec, TileSetSpec::default());
        assert_eq!((out[0].canvas.width(), out[0].canvas.height()), (32, 32));
        assert_eq!(out[0].tiles, 0);
        assert_eq!(colour_at(&out[0], 0, 0), Colour::TRANSPARENT);
    }

    #[test]
    fn test_tiles_placed_row_major() {
        let out = compose(
            r##"<tileset width="2" height="2" tilewidth="2" tileheight="2" background="#000000FF">
                <text color="#FF0000FF"/>
                <text color="#00FF00FF"/>
                <text color="#0000FFFF"/>
            </tileset>"##,
        )
        .unwrap();

        let ts = &out[0];
        assert_eq!(ts.tiles, 3);
        assert_eq!(colour_at(ts, 1, 1), RED);
        assert_eq!(colour_at(ts, 2, 0), Colour::rgb(0, 255, 0));
        assert_eq!(colour_at(ts, 1, 3), Colour::rgb(0, 0, 255));
        // Fourth cell untouched
        assert_eq!(colour_at(ts, 3, 3), Colour::BLACK);
        assert!(ts.warnings.is_empty());
    }

    #[test]
    fn test_unknown_child_advances_index() {
        let out = compose(
            r##"<tileset width="3" height="1" tilewidth="1" tileheight="1" background="#000000FF">
                <text color="#FF0000FF"/>
                <sprite><text color="#00FF00FF"/></sprite>
                <text color="#FF0000FF"/>
            </tileset>"##,
        )
        .unwrap();

        let ts = &out[0];
        assert_eq!(ts.tiles, 3);
        assert_eq!(colour_at(ts, 0, 0), RED);
        assert_eq!(colour_at(ts, 1, 0), Colour::BLACK);
        assert_eq!(colour_at(ts, 2, 0), RED);
        assert_eq!(ts.warnings, vec!["Ignoring unknown element <sprite>".to_string()]);
    }

    #[test]
    fn test_nested_content_in_tile_is_skipped() {
        let out = compose(
            r##"<tileset width="2" height="1" tilewidth="1" tileheight="1">
                <text color="#FF0000FF"><text color="#00FF00FF"/>ignored</text>
                <text color="#FF0000FF"/>
            </tileset>"##,
        )
        .unwrap();

        assert_eq!(out[0].tiles, 2);
        assert_eq!(colour_at(&out[0], 1, 0), RED);
    }

    #[test]
    fn test_tiles_past_grid_are_clipped() {
        let out = compose(
            r##"<tileset width="1" height="1" tilewidth="1" tileheight="1">
                <text color="#FF0000FF"/>
                <text color="#00FF00FF"/>
            </tileset>"##,
        )
        .unwrap();

        assert_eq!(out[0].tiles, 2);
        assert_eq!((out[0].canvas.width(), out[0].canvas.height()), (1, 1));
        assert_eq!(colour_at(&out[0], 0, 0), RED);
    }

    #[test]
    fn test_multiple_tilesets_in_order() {
        let out = compose(
            r#"<tilesets>
                <tileset name="a" tilewidth="1" tileheight="1"/>
                <tileset name="b" tilewidth="1" tileheight="1"/>
            </tilesets>"#,
        )
        .unwrap();

        let names: Vec<&str> = out.iter().map(|t| t.spec.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_source_aborts() {
        let err = compose(
            r##"<tileset><text/><image transparentcolor="#FF00FFFF"/></tileset>"##,
        )
        .unwrap_err();

        assert_eq!(err.kind(), 1);
    }

    #[test]
    fn test_error_keeps_earlier_tilesets_only() {
        let mut out = Vec::new();
        let result = Composer::with_rasterizer(Flood).compose_reader(
            r#"<root><tileset name="ok"/><tileset name="bad"><image/></tileset></root>"#.as_bytes(),
            &mut out,
        );

        assert!(result.is_err());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].spec.name, "ok");
    }

    #[test]
    fn test_unterminated_tileset_is_error() {
        let err = compose("<tileset><text/>").unwrap_err();
        assert_eq!(err.kind(), 2);
    }

    #[test]
    fn test_unclosed_container_is_error() {
        let mut out = Vec::new();
        let err = Composer::with_rasterizer(Flood)
            .compose_reader("<root><tileset/>".as_bytes(), &mut out)
            .unwrap_err();

        assert_eq!(err.kind(), 2);
        // The tileset itself was complete and already delivered
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_second_root_element_is_error() {
        let err = compose(r#"<tileset name="a"/><tileset name="b"/>"#).unwrap_err();
        assert_eq!(err.kind(), 2);

        let err = compose("<root></root><tileset/>").unwrap_err();
        assert_eq!(err.kind(), 2);
    }

    #[test]
    fn test_huge_canvas_is_build_error() {
        let err = compose(
            r#"<tileset width="65536" height="65536" tilewidth="65535" tileheight="65535"/>"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), 4);
    }

    #[test]
    fn test_huge_tile_is_build_error() {
        // No canvas to speak of, but each tile would still be allocated
        let huge = r#"<tileset width="0" tilewidth="70000" tileheight="70000">"#;

        let err = compose(&format!("{huge}<text/></tileset>")).unwrap_err();
        assert_eq!(err.kind(), 4);

        let out = compose(&format!("{huge}</tileset>")).unwrap();
        assert!(out[0].canvas.is_empty());
    }

    #[test]
    fn test_image_load_failure_warns_and_clears_cell() {
        let out = compose(
            r##"<tileset tilewidth="2" tileheight="2" background="#000000FF">
                <image source="/nonexistent/missing.png"/>
            </tileset>"##,
        )
        .unwrap();

        let ts = &out[0];
        assert_eq!(ts.warnings.len(), 1);
        assert!(ts.warnings[0].starts_with("Failed to load image"));
        assert_eq!(colour_at(ts, 0, 0), Colour::TRANSPARENT);
    }

    #[test]
    fn test_image_tile_with_colour_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("src.png");
        let mut src = RgbaImage::from_pixel(2, 1, Rgba([255, 0, 255, 255]));
        src.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        src.save(&path).unwrap();

        let xml = format!(
            r##"<tileset width="2" tilewidth="2" tileheight="1" background="#000000FF">
                <text color="#FF0000FF"/>
                <image source="{}" transparentcolor="#FF00FFFF"/>
            </tileset>"##,
            path.display()
        );
        let out = compose(&xml).unwrap();
        let ts = &out[0];

        assert_eq!(colour_at(ts, 0, 0), RED);
        assert_eq!(colour_at(ts, 2, 0), Colour::TRANSPARENT);
        assert_eq!(colour_at(ts, 3, 0), Colour::rgb(0, 0, 255));
    }

    #[test]
    fn test_zero_columns_composes_nothing() {
        let out = compose(r#"<tileset width="0"><text/><text/></tileset>"#).unwrap();
        assert!(out[0].canvas.is_empty());
        assert_eq!(out[0].tiles, 2);
    }

    #[test]
    fn test_compose_file_open_error() {
        let mut out: Vec<ComposedTileset> = Vec::new();
        let err = compose_file(Path::new("/nonexistent/tiles.xml"), &mut out).unwrap_err();
        assert_eq!(err.kind(), 0);
    }
}
