//! Bounded integer formatting
//!
//! `draw_int` takes a printf-style format string with exactly one integer
//! conversion, optionally surrounded by literal text:
//!
//! ```text
//! %[flags][width][length]conversion
//!
//! flags       '-' left align, '0' zero pad, '+' always sign,
//!             ' ' space for positive, '#' alternate form (0x / 0X / 0)
//! width       minimum field width
//! length      'h' / 'l' accepted and ignored (values are 32-bit)
//! conversion  d i (signed), u (unsigned), x X (hex), o (octal)
//! ```
//!
//! `%%` is a literal percent sign. The rendered text must fit in
//! [`FORMAT_CAPACITY`] characters; anything longer is reported as
//! [`FormatError::Overflow`] instead of being written past the buffer.

use core::fmt::Write;

use heapless::String;

/// Maximum number of characters a formatted value may occupy
pub const FORMAT_CAPACITY: usize = 9;

/// Output of [`format_int`]
pub type Formatted = String<FORMAT_CAPACITY>;

/// Errors from parsing a format string or rendering into it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// No conversion in the format string
    MissingConversion,
    /// More than one conversion in the format string
    MultipleConversions,
    /// Format string ends inside a conversion
    Incomplete,
    /// Conversion or modifier this formatter does not handle
    Unsupported(char),
    /// Rendered text longer than [`FORMAT_CAPACITY`]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Radix {
    Signed,
    Unsigned,
    LowerHex,
    UpperHex,
    Octal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Flags {
    left_align: bool,
    zero_pad: bool,
    plus: bool,
    space: bool,
    alternate: bool,
}

/// A parsed format string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntFormat<'a> {
    prefix: &'a str,
    flags: Flags,
    width: usize,
    radix: Radix,
    suffix: &'a str,
}

impl Default for IntFormat<'_> {
    /// Plain `%d`
    fn default() -> Self {
        Self {
            prefix: "",
            flags: Flags::default(),
            width: 0,
            radix: Radix::Signed,
            suffix: "",
        }
    }
}

impl<'a> IntFormat<'a> {
    /// Parse a format string
    pub fn parse(fmt: &'a str) -> Result<Self, FormatError> {
        let bytes = fmt.as_bytes();
        let start = find_conversion(bytes, 0).ok_or(FormatError::MissingConversion)?;

        let mut flags = Flags::default();
        let mut i = start + 1;
        while let Some(&b) = bytes.get(i) {
            match b {
                b'-' => flags.left_align = true,
                b'0' => flags.zero_pad = true,
                b'+' => flags.plus = true,
                b' ' => flags.space = true,
                b'#' => flags.alternate = true,
                _ => break,
            }
            i += 1;
        }

        let mut width = 0usize;
        while let Some(&b) = bytes.get(i) {
            if !b.is_ascii_digit() {
                break;
            }
            // Anything wider than the buffer overflows at render time anyway
            width = (width * 10 + (b - b'0') as usize).min(FORMAT_CAPACITY + 1);
            i += 1;
        }

        while let Some(b'h' | b'l') = bytes.get(i).copied() {
            i += 1;
        }

        let radix = match bytes.get(i).copied() {
            None => return Err(FormatError::Incomplete),
            Some(b'd' | b'i') => Radix::Signed,
            Some(b'u') => Radix::Unsigned,
            Some(b'x') => Radix::LowerHex,
            Some(b'X') => Radix::UpperHex,
            Some(b'o') => Radix::Octal,
            Some(_) => {
                let c = fmt[i..].chars().next().unwrap_or('?');
                return Err(FormatError::Unsupported(c));
            }
        };

        let suffix = &fmt[i + 1..];
        if find_conversion(bytes, i + 1).is_some() {
            return Err(FormatError::MultipleConversions);
        }

        Ok(Self {
            prefix: &fmt[..start],
            flags,
            width,
            radix,
            suffix,
        })
    }

    /// Render `value` through this format
    pub fn render(&self, value: i32) -> Result<Formatted, FormatError> {
        let mut out = Formatted::new();
        push_literal(&mut out, self.prefix)?;
        self.render_conversion(value, &mut out)?;
        push_literal(&mut out, self.suffix)?;
        Ok(out)
    }

    fn render_conversion(&self, value: i32, out: &mut Formatted) -> Result<(), FormatError> {
        // u32 in octal is the longest case: 11 digits
        let mut digits: String<11> = String::new();
        let written = match self.radix {
            Radix::Signed => write!(digits, "{}", value.unsigned_abs()),
            Radix::Unsigned => write!(digits, "{}", value as u32),
            Radix::LowerHex => write!(digits, "{:x}", value as u32),
            Radix::UpperHex => write!(digits, "{:X}", value as u32),
            Radix::Octal => write!(digits, "{:o}", value as u32),
        };
        written.map_err(|_| FormatError::Overflow)?;

        let sign = match self.radix {
            Radix::Signed if value < 0 => "-",
            Radix::Signed if self.flags.plus => "+",
            Radix::Signed if self.flags.space => " ",
            _ => "",
        };

        let alternate = match self.radix {
            _ if !self.flags.alternate => "",
            Radix::LowerHex if value != 0 => "0x",
            Radix::UpperHex if value != 0 => "0X",
            Radix::Octal if !digits.starts_with('0') => "0",
            _ => "",
        };

        let len = sign.len() + alternate.len() + digits.len();
        let pad = self.width.saturating_sub(len);

        if self.flags.left_align {
            push_str(out, sign)?;
            push_str(out, alternate)?;
            push_str(out, &digits)?;
            push_repeated(out, ' ', pad)?;
        } else if self.flags.zero_pad {
            push_str(out, sign)?;
            push_str(out, alternate)?;
            push_repeated(out, '0', pad)?;
            push_str(out, &digits)?;
        } else {
            push_repeated(out, ' ', pad)?;
            push_str(out, sign)?;
            push_str(out, alternate)?;
            push_str(out, &digits)?;
        }

        Ok(())
    }
}

/// Parse `fmt` and render `value` through it
pub fn format_int(value: i32, fmt: &str) -> Result<Formatted, FormatError> {
    IntFormat::parse(fmt)?.render(value)
}

/// Index of the first `%` at or after `from` that starts a conversion
fn find_conversion(bytes: &[u8], from: usize) -> Option<usize> {
    let mut i = from;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if bytes.get(i + 1) == Some(&b'%') {
                i += 2;
                continue;
            }
            return Some(i);
        }
        i += 1;
    }
    None
}

fn push_literal(out: &mut Formatted, literal: &str) -> Result<(), FormatError> {
    let mut escaped = false;
    for c in literal.chars() {
        if c == '%' && !escaped {
            escaped = true;
            continue;
        }
        escaped = false;
        out.push(c).map_err(|_| FormatError::Overflow)?;
    }
    Ok(())
}

fn push_str(out: &mut Formatted, s: &str) -> Result<(), FormatError> {
    out.push_str(s).map_err(|_| FormatError::Overflow)
}

fn push_repeated(out: &mut Formatted, c: char, count: usize) -> Result<(), FormatError> {
    for _ in 0..count {
        out.push(c).map_err(|_| FormatError::Overflow)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fmt(value: i32, spec: &str) -> Result<std::string::String, FormatError> {
        format_int(value, spec).map(|s| s.as_str().into())
    }

    #[test]
    fn test_decimal() {
        assert_eq!(fmt(42, "%d").unwrap(), "42");
        assert_eq!(fmt(-7, "%i").unwrap(), "-7");
        assert_eq!(fmt(0, "%d").unwrap(), "0");
    }

    #[test]
    fn test_width_and_padding() {
        assert_eq!(fmt(5, "%3d").unwrap(), "  5");
        assert_eq!(fmt(-42, "%05d").unwrap(), "-0042");
        assert_eq!(fmt(7, "%-4d|").unwrap(), "7   |");
        assert_eq!(fmt(7, "%+d").unwrap(), "+7");
        assert_eq!(fmt(7, "% d").unwrap(), " 7");
    }

    #[test]
    fn test_radixes() {
        assert_eq!(fmt(255, "%x").unwrap(), "ff");
        assert_eq!(fmt(255, "%X").unwrap(), "FF");
        assert_eq!(fmt(255, "%#X").unwrap(), "0XFF");
        assert_eq!(fmt(0, "%#x").unwrap(), "0");
        assert_eq!(fmt(8, "%o").unwrap(), "10");
        assert_eq!(fmt(8, "%#o").unwrap(), "010");
        assert_eq!(fmt(-1, "%x").unwrap(), "ffffffff");
        assert_eq!(fmt(3000, "%lu").unwrap(), "3000");
    }

    #[test]
    fn test_literals_around_conversion() {
        assert_eq!(fmt(5, "T=%3d%%").unwrap(), "T=  5%");
        assert_eq!(fmt(12, "%%%d").unwrap(), "%12");
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(fmt(i32::MIN, "%d"), Err(FormatError::Overflow));
        assert_eq!(fmt(-1, "%u"), Err(FormatError::Overflow));
        assert_eq!(fmt(1, "%10d"), Err(FormatError::Overflow));
        assert_eq!(fmt(1, "counter: %d"), Err(FormatError::Overflow));
        // Exactly at capacity
        assert_eq!(fmt(123_456_789, "%d").unwrap(), "123456789");
    }

    #[test]
    fn test_malformed_formats() {
        assert_eq!(fmt(1, "abc"), Err(FormatError::MissingConversion));
        assert_eq!(fmt(1, "100%%"), Err(FormatError::MissingConversion));
        assert_eq!(fmt(1, "%d/%d"), Err(FormatError::MultipleConversions));
        assert_eq!(fmt(1, "%f"), Err(FormatError::Unsupported('f')));
        assert_eq!(fmt(1, "%.2d"), Err(FormatError::Unsupported('.')));
        assert_eq!(fmt(1, "%"), Err(FormatError::Incomplete));
        assert_eq!(fmt(1, "%05"), Err(FormatError::Incomplete));
    }

    #[test]
    fn test_default_is_plain_decimal() {
        assert_eq!(IntFormat::default(), IntFormat::parse("%d").unwrap());
    }

    proptest! {
        #[test]
        fn decimal_matches_core_fmt(value in any::<i32>()) {
            let expected = std::format!("{}", value);
            let result = fmt(value, "%d");
            if expected.len() <= FORMAT_CAPACITY {
                prop_assert_eq!(result, Ok(expected));
            } else {
                prop_assert_eq!(result, Err(FormatError::Overflow));
            }
        }
    }
}
