//! Bitmap font value types
//!
//! A font is a contiguous codepoint range of proportional glyphs. Each
//! glyph carries its own width and its column data as vertical bit masks,
//! stored column-major with the glyph's row-bands adjacent per column
//! (`columns[col * bands + band]`). Bit 0 is the top row of a band.

/// One proportional glyph: its advance width and packed column data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Advance width in columns.
    pub width: u8,
    /// `width * bands` vertical bit masks, column-major.
    pub columns: &'static [u8],
}

/// An immutable bitmap font covering the codepoint range `[first, last]`.
pub struct Font {
    /// Total glyph height in pixels.
    pub height_px: u8,
    /// Number of 8-row bands a glyph spans (1 or 2).
    pub bands: u8,
    /// First covered codepoint.
    pub first: u8,
    /// Last covered codepoint (inclusive).
    pub last: u8,
    /// One glyph per codepoint in `[first, last]`.
    pub glyphs: &'static [Glyph],
}

impl Font {
    /// Look up the glyph for a character.
    ///
    /// Characters outside the font's range yield `None`; callers treat
    /// them as zero-width and draw nothing.
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        let code = u32::from(ch);
        if code < u32::from(self.first) || code > u32::from(self.last) {
            return None;
        }
        self.glyphs.get((code - u32::from(self.first)) as usize)
    }

    /// Advance width of a character, 0 when unsupported.
    pub fn char_width(&self, ch: char) -> u8 {
        self.glyph(ch).map(|g| g.width).unwrap_or(0)
    }
}
