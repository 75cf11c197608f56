//! Convert between text and comma-separated lists of decimal character codes.
//!
//! A code list such as `72,101,108,108,111` names one character per token,
//! by its Unicode scalar value, in order. Decoding turns the list back into
//! text, and encoding produces the list for a piece of text.
//!
//! Every value of Rust's `char` is accepted, so the familiar ASCII range
//! `0..=127` is a subset of what decodes. Negative numbers, surrogates
//! (`0xD800..=0xDFFF`) and anything above `0x10FFFF` are rejected.
//!
//! ## Example
//!
//! ```rust
//! let s = charcodes::to_string("Hello");
//! assert_eq!(s, "72,101,108,108,111");
//!
//! let mut decoded = Vec::<u8>::new();
//! charcodes::decode(s, &mut decoded).unwrap();
//!
//! assert_eq!(decoded, b"Hello");
//! ```

use log::{debug, trace};
use std::io;
use std::io::prelude::*;
use std::num::IntErrorKind;
use std::result;
use thiserror::Error;

/// Errors returned by character code decoding.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The token at `index` is not a base-10 integer.
    #[error("invalid character code {token:?} at position {index}")]
    InvalidCode { index: usize, token: String },
    /// The token at `index` parsed, but is not a Unicode scalar value.
    #[error("character code {code} at position {index} is out of range")]
    OutOfRange { index: usize, code: String },
}
use Error::*;

/// Result type returned by character code decoding.
pub type Result<T> = result::Result<T, Error>;

/// Separator between codes, in both directions.
pub const SEPARATOR: &str = ",";

/// Parse a single token into the character it names.
///
/// A token is ASCII decimal digits with an optional sign, surrounded by
/// optional whitespace. Digit-group underscores and non-ASCII digits are
/// not accepted.
fn parse_code(index: usize, token: &str) -> Result<char> {
    let literal = token.trim();
    let value = match literal.parse::<i64>() {
        Ok(value) => value,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OutOfRange {
                    index,
                    code: literal.to_owned(),
                },
                _ => InvalidCode {
                    index,
                    token: literal.to_owned(),
                },
            })
        }
    };
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| OutOfRange {
            index,
            code: value.to_string(),
        })
}

/// Parse every code in `src`, failing on the first bad token.
///
/// The empty string is a single empty token, and therefore an error.
///
/// ## Example
/// ```
/// assert_eq!(charcodes::parse_codes("72,105").unwrap(), ['H', 'i']);
/// assert!(charcodes::parse_codes("").is_err());
/// ```
pub fn parse_codes<S: AsRef<str>>(src: S) -> Result<Vec<char>> {
    src.as_ref()
        .split(SEPARATOR)
        .enumerate()
        .map(|(i, token)| {
            let c = parse_code(i, token)?;
            trace!("code {} at position {} -> {:?}", token.trim(), i, c);
            Ok(c)
        })
        .collect()
}

/// Decode the code list `src` into text, and write the UTF-8 bytes to `dest`.
///
/// The whole list is validated before anything is written, so on error
/// `dest` is left untouched. Returns the number of characters written.
///
/// ## Example
///
/// ```
/// let mut dest = Vec::<u8>::new();
/// let n = charcodes::decode("87,111,114,108,100,33", &mut dest).unwrap();
///
/// assert_eq!(n, 6);
/// assert_eq!(dest, b"World!");
/// ```
pub fn decode<S, W>(src: S, mut dest: W) -> Result<usize>
    where S: AsRef<str>,
          W: Write
{
    let chars = parse_codes(src)?;
    let text: String = chars.iter().collect();
    dest.write_all(text.as_bytes())?;
    debug!("decoded {} characters ({} bytes)", chars.len(), text.len());
    Ok(chars.len())
}

/// Decode the code list `src` and return the text as a String.
///
/// ## Example
/// ```
/// assert_eq!(charcodes::decode_to_string("65").unwrap(), "A");
/// ```
pub fn decode_to_string<S: AsRef<str>>(src: S) -> Result<String> {
    Ok(parse_codes(src)?.into_iter().collect())
}

/// Encode the characters of `src` as a code list, and write it to `dest`.
///
/// Empty text writes nothing. There is no trailing separator.
///
/// ## Example
/// ```
/// let mut dest = Vec::<u8>::new();
///
/// charcodes::encode("Hi!", &mut dest).unwrap();
/// assert_eq!(dest, b"72,105,33");
/// ```
pub fn encode<S, W>(src: S, mut dest: W) -> io::Result<()>
    where S: AsRef<str>,
          W: Write
{
    for (i, c) in src.as_ref().chars().enumerate() {
        if i > 0 {
            write!(dest, "{}", SEPARATOR)?;
        }
        write!(dest, "{}", u32::from(c))?;
    }
    Ok(())
}

/// Encode the characters of `src` and return the code list as a String.
///
/// ## Example
/// ```
/// assert_eq!(charcodes::to_string("Hi"), "72,105");
/// ```
pub fn to_string<S: AsRef<str>>(src: S) -> String {
    src.as_ref()
        .chars()
        .map(|c| u32::from(c).to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
