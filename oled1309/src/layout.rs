//! Text placement
//!
//! Text is laid out with the fixed 6-pixel character cell, so placing a
//! string only needs its character count.

use crate::font::CHAR_WIDTH;
use crate::WIDTH;

/// Horizontal alignment of a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    /// Start at column 0
    #[default]
    Left,
    /// Centre on the display, rounding the start column down
    Center,
    /// End flush with the right edge
    Right,
}

/// Where a line of text starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextPosition {
    /// Explicit start column in pixels (0-127)
    Column(u8),
    /// Start column derived from the text width
    Align(Align),
}

impl From<Align> for TextPosition {
    fn from(align: Align) -> Self {
        TextPosition::Align(align)
    }
}

impl From<u8> for TextPosition {
    fn from(column: u8) -> Self {
        TextPosition::Column(column)
    }
}

/// Layout rejections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutError {
    /// Explicit column beyond 127
    ColumnOutOfRange(u8),
    /// Text does not fit between its start column and the right edge
    TextTooWide,
}

/// Pixel width of `char_count` characters
pub const fn text_width(char_count: usize) -> usize {
    char_count * CHAR_WIDTH
}

impl TextPosition {
    /// Start column for a text of `char_count` characters
    ///
    /// The whole text, including the blank column after its last glyph,
    /// must fit on the line.
    pub fn start_column(self, char_count: usize) -> Result<u8, LayoutError> {
        let width = text_width(char_count);
        let free = (WIDTH as usize)
            .checked_sub(width)
            .ok_or(LayoutError::TextTooWide)?;

        let column = match self {
            TextPosition::Column(column) => {
                if column >= WIDTH {
                    return Err(LayoutError::ColumnOutOfRange(column));
                }
                if column as usize > free {
                    return Err(LayoutError::TextTooWide);
                }
                column as usize
            }
            TextPosition::Align(Align::Left) => 0,
            TextPosition::Align(Align::Center) => free / 2,
            TextPosition::Align(Align::Right) => free,
        };

        // Zero-width text right-aligned lands one past the last column
        Ok(column.min(WIDTH as usize - 1) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rounds_down() {
        // (128 - 12) / 2
        assert_eq!(TextPosition::Align(Align::Center).start_column(2), Ok(58));
        // (128 - 18) / 2 = 55
        assert_eq!(TextPosition::Align(Align::Center).start_column(3), Ok(55));
    }

    #[test]
    fn test_right_and_left() {
        assert_eq!(TextPosition::Align(Align::Right).start_column(2), Ok(116));
        assert_eq!(TextPosition::Align(Align::Left).start_column(21), Ok(0));
    }

    #[test]
    fn test_explicit_column() {
        assert_eq!(TextPosition::Column(10).start_column(3), Ok(10));
        assert_eq!(TextPosition::Column(116).start_column(2), Ok(116));
        assert_eq!(
            TextPosition::Column(117).start_column(2),
            Err(LayoutError::TextTooWide)
        );
        assert_eq!(
            TextPosition::Column(128).start_column(0),
            Err(LayoutError::ColumnOutOfRange(128))
        );
    }

    #[test]
    fn test_too_wide_for_any_alignment() {
        // 22 characters = 132 pixels
        for align in [Align::Left, Align::Center, Align::Right] {
            assert_eq!(
                TextPosition::Align(align).start_column(22),
                Err(LayoutError::TextTooWide)
            );
        }
    }

    #[test]
    fn test_empty_text_stays_on_screen() {
        assert_eq!(TextPosition::Align(Align::Right).start_column(0), Ok(127));
        assert_eq!(TextPosition::Align(Align::Center).start_column(0), Ok(64));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(TextPosition::from(Align::Right), TextPosition::Align(Align::Right));
        assert_eq!(TextPosition::from(12u8), TextPosition::Column(12));
    }
}
