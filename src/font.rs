//! Label font resolution.
//!
//! Tries the DejaVu system path the original assets were drawn with, then
//! falls back to the same face bundled into the binary so output is
//! reproducible on machines without system fonts installed.

use std::{fs, path::Path};

use ab_glyph::FontArc;
use anyhow::{Context, Result};

const PREFERRED_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
];

static BUNDLED_FONT: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

/// Load the label font. A missing or unreadable system font is not an
/// error (the bundled face is substituted silently); only a corrupt
/// bundled font aborts.
pub fn load_font() -> Result<FontArc> {
    load_font_from(PREFERRED_FONTS)
}

pub(crate) fn load_font_from(preferred: &[&str]) -> Result<FontArc> {
    for path in preferred {
        if !Path::new(path).is_file() {
            continue;
        }
        if let Ok(bytes) = fs::read(path) {
            if let Ok(font) = FontArc::try_from_vec(bytes) {
                return Ok(font);
            }
        }
    }
    FontArc::try_from_slice(BUNDLED_FONT).context("decode bundled fallback font")
}

#[cfg(test)]
mod tests {
    use ab_glyph::Font;

    #[test]
    fn missing_preferred_font_falls_back() {
        let font = super::load_font_from(&["/definitely/not/a/font.ttf"]).unwrap();
        // Fallback face must actually carry the label glyphs.
        assert!(font.glyph_id('P').0 != 0);
        assert!(font.glyph_id('2').0 != 0);
    }

    #[test]
    fn unparsable_preferred_font_falls_back() {
        // Cargo.toml exists but is no font; the loader must skip it.
        let font = super::load_font_from(&["Cargo.toml"]).unwrap();
        assert!(font.glyph_id('M').0 != 0);
    }
}
