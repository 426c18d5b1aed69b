//! Text measurement and rasterization.
//!
//! Two backends sit behind [`Font`]: a TrueType face loaded through
//! `ab_glyph`, and an embedded 5x7 bitmap face. Loading never fails a
//! render: a missing or unreadable font file degrades to the bitmap face,
//! so a report is always producible (with reduced legibility, which is the
//! accepted trade).

use ab_glyph::{point, Font as AbFont, FontVec, GlyphId, PxScale, ScaleFont};
use std::fs;
use std::path::PathBuf;

/// Where the engine sources its face from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontSource {
    #[default]
    BuiltIn,
    TtfPath(PathBuf),
}

pub struct Font {
    backend: Backend,
}

enum Backend {
    BuiltIn,
    Ttf(FontVec),
}

impl Font {
    /// Load the requested face, degrading to the built-in bitmap face when
    /// the file is missing or not a parseable font.
    pub fn load(source: &FontSource) -> Self {
        let backend = match source {
            FontSource::BuiltIn => Backend::BuiltIn,
            FontSource::TtfPath(path) => {
                match fs::read(path)
                    .ok()
                    .and_then(|bytes| FontVec::try_from_vec(bytes).ok())
                {
                    Some(face) => Backend::Ttf(face),
                    None => Backend::BuiltIn,
                }
            }
        };
        Self { backend }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.backend, Backend::BuiltIn)
    }

    /// Advance width of `text` at the given pixel size.
    pub fn text_width(&self, text: &str, px: f32) -> f32 {
        match &self.backend {
            Backend::BuiltIn => {
                (text.chars().count() as u32 * CELL_ADVANCE * bitmap_scale(px)) as f32
            }
            Backend::Ttf(face) => {
                let scaled = face.as_scaled(PxScale::from(px));
                let mut width = 0.0;
                let mut prev: Option<GlyphId> = None;
                for ch in text.chars() {
                    let id = face.glyph_id(ch);
                    if let Some(prev) = prev {
                        width += scaled.kern(prev, id);
                    }
                    width += scaled.h_advance(id);
                    prev = Some(id);
                }
                width
            }
        }
    }

    /// Rasterize `text` with the top of its line box at `(x, y)`, invoking
    /// `paint` with absolute pixel coordinates and a 0..=1 coverage value.
    pub fn for_each_pixel<F: FnMut(i32, i32, f32)>(
        &self,
        text: &str,
        px: f32,
        x: i32,
        y: i32,
        mut paint: F,
    ) {
        match &self.backend {
            Backend::BuiltIn => {
                let scale = bitmap_scale(px) as i32;
                // Center the 7-row glyph grid inside the px-tall line box
                let v_pad = ((px as i32) - GLYPH_HEIGHT as i32 * scale).max(0) / 2;
                let mut cx = x;
                for ch in text.chars() {
                    let columns = glyph_columns(ch);
                    for (ci, column) in columns.iter().copied().enumerate() {
                        for row in 0..GLYPH_HEIGHT as i32 {
                            if column & (1 << row) == 0 {
                                continue;
                            }
                            for dx in 0..scale {
                                for dy in 0..scale {
                                    paint(
                                        cx + ci as i32 * scale + dx,
                                        y + v_pad + row * scale + dy,
                                        1.0,
                                    );
                                }
                            }
                        }
                    }
                    cx += CELL_ADVANCE as i32 * scale;
                }
            }
            Backend::Ttf(face) => {
                let scale = PxScale::from(px);
                let scaled = face.as_scaled(scale);
                let baseline = y as f32 + scaled.ascent();
                let mut caret = x as f32;
                let mut prev: Option<GlyphId> = None;
                for ch in text.chars() {
                    let id = face.glyph_id(ch);
                    if let Some(prev) = prev {
                        caret += scaled.kern(prev, id);
                    }
                    let glyph = id.with_scale_and_position(scale, point(caret, baseline));
                    caret += scaled.h_advance(id);
                    prev = Some(id);

                    if let Some(outlined) = face.outline_glyph(glyph) {
                        let bounds = outlined.px_bounds();
                        outlined.draw(|gx, gy, coverage| {
                            paint(
                                bounds.min.x as i32 + gx as i32,
                                bounds.min.y as i32 + gy as i32,
                                coverage,
                            );
                        });
                    }
                }
            }
        }
    }
}

const GLYPH_HEIGHT: u32 = 7;
const CELL_ADVANCE: u32 = 6;
/// Native size of the bitmap face; larger sizes are integer-scaled.
const BASE_PX: f32 = 8.0;

fn bitmap_scale(px: f32) -> u32 {
    ((px / BASE_PX).round() as u32).max(1)
}

fn glyph_columns(ch: char) -> &'static [u8; 5] {
    let index = (ch as u32)
        .checked_sub(0x20)
        .filter(|&i| i < 96)
        .unwrap_or(('?' as u32) - 0x20);
    &GLYPHS[index as usize]
}

/// Embedded 5x7 face for ASCII 0x20..=0x7F. Each glyph is five column
/// bitmasks, bit 0 at the top. Characters outside the range render as `?`.
#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x00, 0x08, 0x14, 0x22, 0x41], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x41, 0x22, 0x14, 0x08, 0x00], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x3A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x02, 0x01, 0x02, 0x04, 0x02], // '~'
    [0x7F, 0x41, 0x41, 0x41, 0x7F], // DEL (box)
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_width_scales_with_size() {
        let font = Font::load(&FontSource::BuiltIn);
        assert_eq!(font.text_width("abc", 8.0), 18.0);
        assert_eq!(font.text_width("abc", 16.0), 36.0);
    }

    #[test]
    fn missing_font_file_degrades_to_builtin() {
        let font = Font::load(&FontSource::TtfPath(PathBuf::from(
            "/definitely/not/here.ttf",
        )));
        assert!(font.is_builtin());
    }

    #[test]
    fn non_font_file_degrades_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.ttf");
        std::fs::write(&path, b"not a font at all").unwrap();
        let font = Font::load(&FontSource::TtfPath(path));
        assert!(font.is_builtin());
    }

    #[test]
    fn unknown_characters_fall_back_to_question_mark() {
        assert_eq!(glyph_columns('\u{1F947}'), glyph_columns('?'));
        assert_eq!(glyph_columns('\u{7}'), glyph_columns('?'));
    }

    #[test]
    fn builtin_rasterizes_within_the_line_box() {
        let font = Font::load(&FontSource::BuiltIn);
        let mut min_y = i32::MAX;
        let mut max_y = i32::MIN;
        let mut painted = 0;
        font.for_each_pixel("Hg", 16.0, 10, 100, |_, y, _| {
            min_y = min_y.min(y);
            max_y = max_y.max(y);
            painted += 1;
        });
        assert!(painted > 0);
        assert!(min_y >= 100);
        assert!(max_y < 116);
    }
}
