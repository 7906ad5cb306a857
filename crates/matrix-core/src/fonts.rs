//! Built-in bitmap font tables
//!
//! Five fixed fonts of varying height and width. Column bytes are vertical
//! masks with bit 0 at the top of the band; two-band fonts store the two
//! band bytes of a column adjacently (`columns[col * 2 + band]`).
//!
//! - [`FONT_3X7`]  — 3×7 text font, `' '..='Z'`; labels and dates
//! - [`DIGITS_3X5`] — 3×5 digits; small seconds
//! - [`DIGITS_5X8`] — 5×8 digits and colon; main time row
//! - [`DIGITS_5X16`] — 5×16 digits and colon spanning both bands
//! - [`FONT_5X7`]  — classic 5×7 text font, `' '..='Z'`; banner messages

use crate::font::{Font, Glyph};

const fn g(width: u8, columns: &'static [u8]) -> Glyph {
    Glyph { width, columns }
}

/// 3×7 proportional text font covering `' '..='Z'`.
pub static FONT_3X7: Font = Font {
    height_px: 7,
    bands: 1,
    first: b' ',
    last: b'Z',
    glyphs: &[
        g(2, &[0x00, 0x00]),             // ' '
        g(1, &[0x5F]),                   // '!'
        g(3, &[0x03, 0x00, 0x03]),       // '"'
        g(3, &[0x14, 0x7F, 0x14]),       // '#'
        g(3, &[0x4F, 0x7F, 0x79]),       // '$'
        g(3, &[0x61, 0x1C, 0x43]),       // '%'
        g(3, &[0x36, 0x49, 0x76]),       // '&'
        g(1, &[0x03]),                   // '\''
        g(2, &[0x3E, 0x41]),             // '('
        g(2, &[0x41, 0x3E]),             // ')'
        g(3, &[0x0A, 0x04, 0x0A]),       // '*'
        g(3, &[0x08, 0x1C, 0x08]),       // '+'
        g(1, &[0x60]),                   // ','
        g(3, &[0x08, 0x08, 0x08]),       // '-'
        g(1, &[0x40]),                   // '.'
        g(2, &[0x70, 0x07]),             // '/'
        g(3, &[0x7F, 0x41, 0x7F]),       // '0'
        g(3, &[0x42, 0x7F, 0x40]),       // '1'
        g(3, &[0x79, 0x49, 0x4F]),       // '2'
        g(3, &[0x49, 0x49, 0x7F]),       // '3'
        g(3, &[0x0F, 0x08, 0x7F]),       // '4'
        g(3, &[0x4F, 0x49, 0x79]),       // '5'
        g(3, &[0x7F, 0x49, 0x79]),       // '6'
        g(3, &[0x01, 0x01, 0x7F]),       // '7'
        g(3, &[0x7F, 0x49, 0x7F]),       // '8'
        g(3, &[0x4F, 0x49, 0x7F]),       // '9'
        g(1, &[0x14]),                   // ':'
        g(1, &[0x64]),                   // ';'
        g(3, &[0x08, 0x14, 0x22]),       // '<'
        g(3, &[0x14, 0x14, 0x14]),       // '='
        g(3, &[0x22, 0x14, 0x08]),       // '>'
        g(3, &[0x01, 0x51, 0x07]),       // '?'
        g(3, &[0x3E, 0x49, 0x5E]),       // '@'
        g(3, &[0x7E, 0x09, 0x7E]),       // 'A'
        g(3, &[0x7F, 0x49, 0x36]),       // 'B'
        g(3, &[0x3E, 0x41, 0x41]),       // 'C'
        g(3, &[0x7F, 0x41, 0x3E]),       // 'D'
        g(3, &[0x7F, 0x49, 0x41]),       // 'E'
        g(3, &[0x7F, 0x09, 0x01]),       // 'F'
        g(3, &[0x3E, 0x41, 0x79]),       // 'G'
        g(3, &[0x7F, 0x08, 0x7F]),       // 'H'
        g(3, &[0x41, 0x7F, 0x41]),       // 'I'
        g(3, &[0x20, 0x40, 0x3F]),       // 'J'
        g(3, &[0x7F, 0x08, 0x77]),       // 'K'
        g(3, &[0x7F, 0x40, 0x40]),       // 'L'
        g(3, &[0x7F, 0x06, 0x7F]),       // 'M'
        g(3, &[0x7F, 0x1C, 0x7F]),       // 'N'
        g(3, &[0x3E, 0x41, 0x3E]),       // 'O'
        g(3, &[0x7F, 0x09, 0x06]),       // 'P'
        g(3, &[0x3E, 0x61, 0x7E]),       // 'Q'
        g(3, &[0x7F, 0x09, 0x76]),       // 'R'
        g(3, &[0x4F, 0x49, 0x79]),       // 'S'
        g(3, &[0x01, 0x7F, 0x01]),       // 'T'
        g(3, &[0x3F, 0x40, 0x3F]),       // 'U'
        g(3, &[0x1F, 0x60, 0x1F]),       // 'V'
        g(3, &[0x7F, 0x30, 0x7F]),       // 'W'
        g(3, &[0x63, 0x1C, 0x63]),       // 'X'
        g(3, &[0x07, 0x78, 0x07]),       // 'Y'
        g(3, &[0x71, 0x49, 0x47]),       // 'Z'
    ],
};

/// 3×5 digit font, `'0'..='9'`; used for small seconds.
pub static DIGITS_3X5: Font = Font {
    height_px: 5,
    bands: 1,
    first: b'0',
    last: b'9',
    glyphs: &[
        g(3, &[0x1F, 0x11, 0x1F]), // '0'
        g(3, &[0x12, 0x1F, 0x10]), // '1'
        g(3, &[0x1D, 0x15, 0x17]), // '2'
        g(3, &[0x15, 0x15, 0x1F]), // '3'
        g(3, &[0x07, 0x04, 0x1F]), // '4'
        g(3, &[0x17, 0x15, 0x1D]), // '5'
        g(3, &[0x1F, 0x15, 0x1D]), // '6'
        g(3, &[0x01, 0x01, 0x1F]), // '7'
        g(3, &[0x1F, 0x15, 0x1F]), // '8'
        g(3, &[0x17, 0x15, 0x1F]), // '9'
    ],
};

/// 5×8 digit font with colon, `'0'..=':'`; the main time row.
pub static DIGITS_5X8: Font = Font {
    height_px: 8,
    bands: 1,
    first: b'0',
    last: b':',
    glyphs: &[
        g(5, &[0x7E, 0x81, 0x81, 0x81, 0x7E]), // '0'
        g(5, &[0x00, 0x82, 0xFF, 0x80, 0x00]), // '1'
        g(5, &[0xC2, 0xA1, 0x91, 0x89, 0x86]), // '2'
        g(5, &[0x42, 0x81, 0x89, 0x89, 0x76]), // '3'
        g(5, &[0x18, 0x14, 0x12, 0xFF, 0x10]), // '4'
        g(5, &[0x4F, 0x89, 0x89, 0x89, 0x70]), // '5'
        g(5, &[0x7E, 0x89, 0x89, 0x89, 0x72]), // '6'
        g(5, &[0x01, 0x01, 0xF9, 0x05, 0x03]), // '7'
        g(5, &[0x76, 0x89, 0x89, 0x89, 0x76]), // '8'
        g(5, &[0x46, 0x89, 0x89, 0x89, 0x7E]), // '9'
        g(2, &[0x6C, 0x6C]),                   // ':'
    ],
};

/// 5×16 digit font with colon, `'0'..=':'`, spanning both row-bands.
pub static DIGITS_5X16: Font = Font {
    height_px: 16,
    bands: 2,
    first: b'0',
    last: b':',
    glyphs: &[
        // '0'
        g(5, &[0xFE, 0x7F, 0x01, 0x80, 0x01, 0x80, 0x01, 0x80, 0xFE, 0x7F]),
        // '1'
        g(5, &[0x00, 0x80, 0x06, 0x80, 0xFF, 0xFF, 0x00, 0x80, 0x00, 0x80]),
        // '2'
        g(5, &[0x02, 0xF0, 0x01, 0x8C, 0x01, 0x83, 0x81, 0x80, 0x7E, 0x80]),
        // '3'
        g(5, &[0x02, 0x40, 0x01, 0x80, 0x81, 0x81, 0x81, 0x81, 0x7E, 0x7E]),
        // '4'
        g(5, &[0x00, 0x07, 0xE0, 0x04, 0x1C, 0x04, 0xFF, 0xFF, 0x00, 0x04]),
        // '5'
        g(5, &[0xFF, 0x40, 0x81, 0x80, 0x81, 0x80, 0x81, 0x80, 0x01, 0x7F]),
        // '6'
        g(5, &[0xFE, 0x7F, 0x01, 0x81, 0x01, 0x81, 0x01, 0x81, 0x02, 0x7E]),
        // '7'
        g(5, &[0x01, 0x00, 0x01, 0x00, 0xC1, 0xFF, 0x31, 0x00, 0x0F, 0x00]),
        // '8'
        g(5, &[0x7E, 0x7E, 0x81, 0x81, 0x81, 0x81, 0x81, 0x81, 0x7E, 0x7E]),
        // '9'
        g(5, &[0x7E, 0x40, 0x81, 0x80, 0x81, 0x80, 0x81, 0x80, 0xFE, 0x7F]),
        // ':'
        g(1, &[0x30, 0x0C]),
    ],
};

/// Classic 5×7 text font covering `' '..='Z'`; boot/status banners.
pub static FONT_5X7: Font = Font {
    height_px: 7,
    bands: 1,
    first: b' ',
    last: b'Z',
    glyphs: &[
        g(5, &[0x00, 0x00, 0x00, 0x00, 0x00]), // ' '
        g(5, &[0x00, 0x00, 0x5F, 0x00, 0x00]), // '!'
        g(5, &[0x00, 0x07, 0x00, 0x07, 0x00]), // '"'
        g(5, &[0x14, 0x7F, 0x14, 0x7F, 0x14]), // '#'
        g(5, &[0x24, 0x2A, 0x7F, 0x2A, 0x12]), // '$'
        g(5, &[0x23, 0x13, 0x08, 0x64, 0x62]), // '%'
        g(5, &[0x36, 0x49, 0x55, 0x22, 0x50]), // '&'
        g(5, &[0x00, 0x05, 0x03, 0x00, 0x00]), // '\''
        g(5, &[0x00, 0x1C, 0x22, 0x41, 0x00]), // '('
        g(5, &[0x00, 0x41, 0x22, 0x1C, 0x00]), // ')'
        g(5, &[0x08, 0x2A, 0x1C, 0x2A, 0x08]), // '*'
        g(5, &[0x08, 0x08, 0x3E, 0x08, 0x08]), // '+'
        g(5, &[0x00, 0x50, 0x30, 0x00, 0x00]), // ','
        g(5, &[0x08, 0x08, 0x08, 0x08, 0x08]), // '-'
        g(5, &[0x00, 0x60, 0x60, 0x00, 0x00]), // '.'
        g(5, &[0x20, 0x10, 0x08, 0x04, 0x02]), // '/'
        g(5, &[0x3E, 0x51, 0x49, 0x45, 0x3E]), // '0'
        g(5, &[0x00, 0x42, 0x7F, 0x40, 0x00]), // '1'
        g(5, &[0x42, 0x61, 0x51, 0x49, 0x46]), // '2'
        g(5, &[0x21, 0x41, 0x45, 0x4B, 0x31]), // '3'
        g(5, &[0x18, 0x14, 0x12, 0x7F, 0x10]), // '4'
        g(5, &[0x27, 0x45, 0x45, 0x45, 0x39]), // '5'
        g(5, &[0x3C, 0x4A, 0x49, 0x49, 0x30]), // '6'
        g(5, &[0x01, 0x71, 0x09, 0x05, 0x03]), // '7'
        g(5, &[0x36, 0x49, 0x49, 0x49, 0x36]), // '8'
        g(5, &[0x06, 0x49, 0x49, 0x29, 0x1E]), // '9'
        g(5, &[0x00, 0x36, 0x36, 0x00, 0x00]), // ':'
        g(5, &[0x00, 0x56, 0x36, 0x00, 0x00]), // ';'
        g(5, &[0x00, 0x08, 0x14, 0x22, 0x41]), // '<'
        g(5, &[0x14, 0x14, 0x14, 0x14, 0x14]), // '='
        g(5, &[0x41, 0x22, 0x14, 0x08, 0x00]), // '>'
        g(5, &[0x02, 0x01, 0x51, 0x09, 0x06]), // '?'
        g(5, &[0x32, 0x49, 0x79, 0x41, 0x3E]), // '@'
        g(5, &[0x7E, 0x11, 0x11, 0x11, 0x7E]), // 'A'
        g(5, &[0x7F, 0x49, 0x49, 0x49, 0x36]), // 'B'
        g(5, &[0x3E, 0x41, 0x41, 0x41, 0x22]), // 'C'
        g(5, &[0x7F, 0x41, 0x41, 0x22, 0x1C]), // 'D'
        g(5, &[0x7F, 0x49, 0x49, 0x49, 0x41]), // 'E'
        g(5, &[0x7F, 0x09, 0x09, 0x09, 0x01]), // 'F'
        g(5, &[0x3E, 0x41, 0x49, 0x49, 0x7A]), // 'G'
        g(5, &[0x7F, 0x08, 0x08, 0x08, 0x7F]), // 'H'
        g(5, &[0x00, 0x41, 0x7F, 0x41, 0x00]), // 'I'
        g(5, &[0x20, 0x40, 0x41, 0x3F, 0x01]), // 'J'
        g(5, &[0x7F, 0x08, 0x14, 0x22, 0x41]), // 'K'
        g(5, &[0x7F, 0x40, 0x40, 0x40, 0x40]), // 'L'
        g(5, &[0x7F, 0x02, 0x0C, 0x02, 0x7F]), // 'M'
        g(5, &[0x7F, 0x04, 0x08, 0x10, 0x7F]), // 'N'
        g(5, &[0x3E, 0x41, 0x41, 0x41, 0x3E]), // 'O'
        g(5, &[0x7F, 0x09, 0x09, 0x09, 0x06]), // 'P'
        g(5, &[0x3E, 0x41, 0x51, 0x21, 0x5E]), // 'Q'
        g(5, &[0x7F, 0x09, 0x19, 0x29, 0x46]), // 'R'
        g(5, &[0x46, 0x49, 0x49, 0x49, 0x31]), // 'S'
        g(5, &[0x01, 0x01, 0x7F, 0x01, 0x01]), // 'T'
        g(5, &[0x3F, 0x40, 0x40, 0x40, 0x3F]), // 'U'
        g(5, &[0x1F, 0x20, 0x40, 0x20, 0x1F]), // 'V'
        g(5, &[0x3F, 0x40, 0x38, 0x40, 0x3F]), // 'W'
        g(5, &[0x63, 0x14, 0x08, 0x14, 0x63]), // 'X'
        g(5, &[0x07, 0x08, 0x70, 0x08, 0x07]), // 'Y'
        g(5, &[0x61, 0x51, 0x49, 0x45, 0x43]), // 'Z'
    ],
};
