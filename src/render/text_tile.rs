//! Text tiles: a string drawn centred on a transparent tile.
//!
//! Glyph rasterization sits behind [`TextRasterizer`]. The default
//! [`BitmapFont`] scales the 8x8 `font8x8` glyphs to the requested size, so
//! output is identical on every machine and needs no font files.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::Rgba;

use crate::types::{Colour, TextTileSpec, TileSize};

use super::canvas::{blank_tile, TileBuffer};

/// Drawing parameters for a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Glyph cell height in pixels.
    pub size: u32,
    pub colour: Colour,
    pub bold: bool,
}

/// Draws a single line of text centred in the target buffer.
///
/// Implementations must not wrap. Pixels falling outside the target are
/// dropped.
pub trait TextRasterizer {
    fn draw(&self, target: &mut TileBuffer, text: &str, style: &TextStyle);
}

/// Fixed 8x8 bitmap font scaled with nearest-neighbour sampling.
///
/// Each glyph occupies a `size × size` cell. Bold is a one-pixel
/// overstrike to the right.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    fn glyph(c: char) -> Option<[u8; 8]> {
        BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
    }
}

impl TextRasterizer for BitmapFont {
    fn draw(&self, target: &mut TileBuffer, text: &str, style: &TextStyle) {
        let cell = i64::from(style.size);
        if cell == 0 || text.is_empty() {
            return;
        }

        let (width, height) = (i64::from(target.width()), i64::from(target.height()));
        let glyphs: Vec<Option<[u8; 8]>> = text.chars().map(Self::glyph).collect();
        let overstrike = i64::from(style.bold);
        let text_width = glyphs.len() as i64 * cell + overstrike;

        let origin_x = (width - text_width) / 2;
        let origin_y = (height - cell) / 2;
        let pixel: Rgba<u8> = style.colour.into();

        // Only visit rows and columns that can land inside the target
        let rows = (-origin_y).max(0)..(height - origin_y).min(cell);

        for (i, glyph) in glyphs.iter().enumerate() {
            let Some(bitmap) = glyph else {
                continue;
            };
            let glyph_x = origin_x + i as i64 * cell;
            let columns = (-glyph_x - overstrike).max(0)..(width - glyph_x).min(cell);

            for gy in rows.clone() {
                let bits = bitmap[(gy * 8 / cell) as usize];
                if bits == 0 {
                    continue;
                }
                for gx in columns.clone() {
                    if bits & (1 << (gx * 8 / cell)) == 0 {
                        continue;
                    }
                    for dx in 0..=overstrike {
                        put(target, glyph_x + gx + dx, origin_y + gy, pixel);
                    }
                }
            }
        }
    }
}

fn put(target: &mut TileBuffer, x: i64, y: i64, pixel: Rgba<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
        if x < target.width() && y < target.height() {
            target.put_pixel(x, y, pixel);
        }
    }
}

/// Render a text tile: transparent background, bold centred text.
pub fn render_text_tile<T: TextRasterizer + ?Sized>(
    spec: &TextTileSpec,
    size: TileSize,
    rasterizer: &T,
) -> TileBuffer {
    let mut tile = blank_tile(size);
    let style = TextStyle {
        size: spec.size,
        colour: spec.colour,
        bold: true,
    };
    rasterizer.draw(&mut tile, &spec.content, &style);
    tile
}
