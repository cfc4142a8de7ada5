//! Text-conversion plumbing shared by `Bignum` and `Wideint`.
//!
//! Parsing consumes the digit string left to right in chunks sized so the
//! chunk value fits a `u64`: 18 decimal digits, 64 binary digits, or 16 hex
//! digits. The caller multiplies its accumulator by `radix^chunk_len` and
//! adds the chunk value using its own (possibly wrapping) arithmetic.

use std::error::Error;
use std::fmt;

pub(crate) const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Failure reported by `from_str_radix` and the `FromStr` impls.
///
/// The arithmetic surface of the crate is total; parsing is the one
/// operation that can reject its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// A chunk of the input contained a character that is not a digit of
    /// the selected radix.
    InvalidDigit,
    /// The radix is not one of 0 (auto-detect), 2, 10 or 16.
    UnsupportedRadix,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidDigit => f.write_str("invalid digit in integer literal"),
            ParseError::UnsupportedRadix => f.write_str("unsupported radix"),
        }
    }
}

impl Error for ParseError {}

/// Strip a `0b`/`0x` prefix (which overrides `radix`) and resolve radix 0
/// to decimal. Returns the digit text and the effective radix.
pub(crate) fn detect(s: &str, radix: u32) -> Result<(&str, u32), ParseError> {
    let (s, radix) = if s.len() > 2 && s.starts_with("0b") {
        (&s[2..], 2)
    } else if s.len() > 2 && s.starts_with("0x") {
        (&s[2..], 16)
    } else if radix == 0 {
        (s, 10)
    } else {
        (s, radix)
    };
    match radix {
        2 | 10 | 16 => Ok((s, radix)),
        _ => Err(ParseError::UnsupportedRadix),
    }
}

/// Largest chunk whose value fits in 64 bits for the given radix.
pub(crate) const fn chunk_digits(radix: u32) -> usize {
    match radix {
        2 => 64,
        16 => 16,
        _ => 18,
    }
}

/// Split the digit text into `(value, digit_count)` chunks, left to right.
pub(crate) fn chunks(
    s: &str,
    radix: u32,
) -> impl Iterator<Item = Result<(u64, usize), ParseError>> + '_ {
    let step = chunk_digits(radix);
    let mut pos = 0;
    let mut bad = !s.is_ascii();
    std::iter::from_fn(move || {
        if bad {
            bad = false;
            pos = s.len();
            return Some(Err(ParseError::InvalidDigit));
        }
        if pos >= s.len() {
            return None;
        }
        let end = (pos + step).min(s.len());
        let chunk = &s[pos..end];
        pos = end;
        match u64::from_str_radix(chunk, radix) {
            Ok(v) => Some(Ok((v, chunk.len()))),
            Err(_) => {
                pos = s.len();
                Some(Err(ParseError::InvalidDigit))
            }
        }
    })
}
