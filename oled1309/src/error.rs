//! Driver error taxonomy

use crate::format::FormatError;
use crate::layout::LayoutError;

/// Errors returned by the driver
///
/// `E` is the transport error of the underlying [`crate::Transact`]
/// implementation. Every variant other than [`Error::Bus`] is raised before
/// any bus traffic for the rejected call has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus did not accept a transaction
    Bus(E),
    /// Character outside the printable ASCII range (32..=126)
    InvalidCharacter(char),
    /// Column beyond the last addressable column (127)
    ColumnOutOfRange(u8),
    /// Page beyond the last page (7)
    PageOutOfRange(u8),
    /// Text does not fit between its start column and the right edge
    TextTooWide,
    /// Fewer tiles supplied than the requested grid needs
    TileCountMismatch,
    /// Integer formatting failed
    Format(FormatError),
}

impl<E> From<FormatError> for Error<E> {
    fn from(e: FormatError) -> Self {
        Error::Format(e)
    }
}

impl<E> From<LayoutError> for Error<E> {
    fn from(e: LayoutError) -> Self {
        match e {
            LayoutError::ColumnOutOfRange(column) => Error::ColumnOutOfRange(column),
            LayoutError::TextTooWide => Error::TextTooWide,
        }
    }
}

impl<E> Error<E> {
    /// True if the error came from the transport rather than from input checks
    pub fn is_bus(&self) -> bool {
        matches!(self, Error::Bus(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_errors_map_onto_driver_errors() {
        let e: Error<()> = LayoutError::ColumnOutOfRange(130).into();
        assert_eq!(e, Error::ColumnOutOfRange(130));
        let e: Error<()> = LayoutError::TextTooWide.into();
        assert_eq!(e, Error::TextTooWide);
        assert!(!e.is_bus());
    }

    #[test]
    fn test_format_errors_are_wrapped() {
        let e: Error<()> = FormatError::Overflow.into();
        assert_eq!(e, Error::Format(FormatError::Overflow));
        assert!(Error::Bus(()).is_bus());
    }
}
