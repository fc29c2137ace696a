use crate::base::{Error, ErrorKind, Result};
use log::error;

/// Encodes `value` as two ASCII decimal digits, e.g. `5` -> `b"05"`.
///
/// Command arguments are sent this way. Values above 99 do not fit and are
/// rejected with [`ErrorKind::InvalidArgument`].
pub fn ascii_digits(value: u8) -> Result<[u8; 2]> {
    if value > 99 {
        error!("Argument {} does not fit two ASCII digits", value);
        return Err(Error::new(
            ErrorKind::InvalidArgument,
            "argument out of range",
        ));
    }
    Ok([b'0' + value / 10, b'0' + value % 10])
}

/// Parses two ASCII decimal digits, e.g. `b"12"` -> `Some(12)`.
///
/// Returns `None` if either byte is not a digit.
pub fn parse_ascii_digits(digits: [u8; 2]) -> Option<u8> {
    if digits.iter().all(u8::is_ascii_digit) {
        Some((digits[0] - b'0') * 10 + (digits[1] - b'0'))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_are_zero_padded() {
        assert_eq!(ascii_digits(0).unwrap(), *b"00");
        assert_eq!(ascii_digits(7).unwrap(), *b"07");
        assert_eq!(ascii_digits(99).unwrap(), *b"99");
    }

    #[test]
    fn out_of_range_argument() {
        let err = ascii_digits(100).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert_eq!(parse_ascii_digits(*b"42"), Some(42));
        assert_eq!(parse_ascii_digits(*b"4x"), None);
        assert_eq!(parse_ascii_digits([0x00, b'1']), None);
    }
}
