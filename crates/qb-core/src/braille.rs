//! Braille Pattern cell encoding (U+2800..U+28FF).
//!
//! Dot numbering (column-major):
//! ```text
//!  1 4
//!  2 5
//!  3 6
//!  7 8
//! ```
//! Bit `i` of the mask corresponds to dot `i + 1`; the glyph is the code
//! point `U+2800 + mask`.

/// Braille base codepoint (U+2800).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Map an 8-bit dot mask to the corresponding Braille character.
///
/// Total over all 256 masks: the Braille block covers every offset, so the
/// fallback arm is unreachable in practice.
///
/// # Example
/// ```
/// use qb_core::braille::braille_char;
/// assert_eq!(braille_char(0x00), '\u{2800}'); // blank
/// assert_eq!(braille_char(0xFF), '\u{28FF}'); // full
/// ```
#[must_use]
#[inline(always)]
pub const fn braille_char(mask: u8) -> char {
    match char::from_u32(BRAILLE_BASE + mask as u32) {
        Some(c) => c,
        None => ' ',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_full() {
        assert_eq!(braille_char(0), '\u{2800}');
        assert_eq!(braille_char(0xFF), '\u{28FF}');
    }

    #[test]
    fn every_mask_lands_in_the_braille_block() {
        for mask in 0..=u8::MAX {
            let c = braille_char(mask) as u32;
            assert_eq!(c, BRAILLE_BASE + u32::from(mask));
        }
    }

    #[test]
    fn masks_are_three_byte_utf8() {
        // U+2800..U+28FF all encode to 3 bytes, so a full bar is 30 bytes.
        for mask in 0..=u8::MAX {
            assert_eq!(braille_char(mask).len_utf8(), 3);
        }
    }
}
