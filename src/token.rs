//! Classify token characters.
//!
//! A token is one or more printable US-ASCII characters other than space and
//! the `tspecials` defined in [RFC2045 §5.1]:
//!
//! > ```ABNF
//! > tspecials :=  "(" / ")" / "<" / ">" / "@" /
//! >               "," / ";" / ":" / "\" / <">
//! >               "/" / "[" / "]" / "?" / "="
//! > ```
//!
//! This is slightly more permissive than the `tchar` of [RFC7231 (HTTP)]; for
//! example `{` and `}` are allowed. The wildcard `*` is an ordinary token
//! character, so `*/*` needs no special casing.
//!
//! [RFC2045 §5.1]: https://datatracker.ietf.org/doc/html/rfc2045#section-5.1
//! [RFC7231 (HTTP)]: https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.1.1

use crate::rfc7231::{ParseError, Result, TokenKind};

/// The characters excluded from tokens even though they are printable.
pub const TSPECIALS: &str = "()<>@,;:\\\"/[]?=";

/// Lookup table for ASCII, built at compile time.
static TOKEN_MAP: [bool; 128] = token_map();

const fn token_map() -> [bool; 128] {
    let mut map = [false; 128];
    let mut c = 0x21;
    while c < 0x7f {
        map[c] = true;
        c += 1;
    }

    let specials = TSPECIALS.as_bytes();
    let mut i = 0;
    while i < specials.len() {
        map[specials[i] as usize] = false;
        i += 1;
    }

    map
}

/// Is `c` allowed in a type, subtype, parameter name, or unquoted parameter
/// value?
///
/// ```rust
/// use mime_value::is_token_char;
///
/// assert!(is_token_char('a'));
/// assert!(is_token_char('*'));
/// assert!(!is_token_char(' '));
/// assert!(!is_token_char(';'));
/// assert!(!is_token_char('é'));
/// ```
#[inline]
#[must_use]
pub fn is_token_char(c: char) -> bool {
    c.is_ascii() && TOKEN_MAP[c as usize]
}

/// Is `s` a complete, non-empty token?
#[inline]
#[must_use]
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

/// Check that `value` is a valid token.
///
/// `token` names what is being validated and is only used for the error.
///
/// # Errors
///
/// Returns [`ParseError::MissingToken`] if `value` is empty, or
/// [`ParseError::InvalidCharacter`] for the first character that isn’t a
/// token character.
pub fn validate_token(token: TokenKind, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ParseError::MissingToken {
            token,
            pos: 0,
            input: String::new(),
        });
    }

    match value.chars().enumerate().find(|(_, c)| !is_token_char(*c)) {
        Some((pos, ch)) => Err(ParseError::InvalidCharacter {
            pos,
            ch,
            input: value.to_owned(),
        }),
        None => Ok(()),
    }
}
