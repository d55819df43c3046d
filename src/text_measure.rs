//! Text Measurement
//!
//! Utilities for measuring title and button caption widths.
//!
//! Display width depends on Unicode character widths:
//! - ASCII characters: 1 column
//! - CJK characters: 2 columns (fullwidth)
//! - Emoji: 2 columns (most)
//! - Zero-width characters: 0 columns
//!
//! Column counts come from the `unicode-width` crate and are converted to
//! layout units through the font's approximate em advance. Real glyph
//! shaping belongs to the rendering collaborator; layout only needs a
//! content-driven estimate that is stable across passes.

use unicode_width::UnicodeWidthStr;

use crate::types::Font;

/// Horizontal advance per display column, as a fraction of the font size.
const EM_ADVANCE: f32 = 0.5;

/// Measure the display width of a string in columns.
pub fn string_width(s: &str) -> u16 {
    s.width().min(u16::MAX as usize) as u16
}

/// Measure the width of a string in layout units under the given font.
pub fn text_width(s: &str, font: &Font) -> f32 {
    f32::from(string_width(s)) * font.size * EM_ADVANCE
}
