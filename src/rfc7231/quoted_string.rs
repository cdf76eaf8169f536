//! Deal with quoted strings
//!
//! Defined in [RFC7230 (HTTP) §3.2.6].
//!
//! [RFC7230 (HTTP) §3.2.6]: https://datatracker.ietf.org/doc/html/rfc7230#section-3.2.6

use crate::token::is_token;
use std::borrow::Cow;
use std::fmt::{self, Write};

/// Quote a parameter value if it isn’t a valid bare token.
///
/// [RFC7230 (HTTP) §3.2.6] defines `quoted-string`:
///
/// > ```ABNF
/// > quoted-string  = DQUOTE *( qdtext / quoted-pair ) DQUOTE
/// > ```
/// >
/// > ...
/// >
/// > The backslash octet ("\") can be used as a single-octet quoting
/// > mechanism within quoted-string and comment constructs.  Recipients
/// > that process the value of a quoted-string MUST handle a quoted-pair
/// > as if it were replaced by the octet following the backslash.
///
/// Only `"` and `\` are escaped, since those are the only escapes the parser
/// accepts. Empty values are quoted.
///
/// ```rust
/// use mime_value::quote_parameter_value;
///
/// assert_eq!(quote_parameter_value("UTF-8"), "UTF-8");
/// assert_eq!(quote_parameter_value("a b"), r#""a b""#);
/// assert_eq!(quote_parameter_value(r#"say "hi"\"#), r#""say \"hi\"\\""#);
/// assert_eq!(quote_parameter_value(""), r#""""#);
/// ```
///
/// [RFC7230 (HTTP) §3.2.6]: https://datatracker.ietf.org/doc/html/rfc7230#section-3.2.6
#[must_use]
pub fn quote_parameter_value(value: &str) -> Cow<'_, str> {
    if is_token(value) {
        return Cow::Borrowed(value);
    }

    let mut output = String::with_capacity(value.len() + 2);
    // Writing to a String can’t fail.
    let _ = write_quoted(&mut output, value);
    Cow::Owned(output)
}

/// Write `value` as a `quoted-string` (always quoted).
pub(crate) fn write_quoted<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    out.write_char('"')?;
    let mut rest = value;
    while let Some(i) = rest.find(&['"', '\\'][..]) {
        out.write_str(&rest[..i])?;
        out.write_char('\\')?;
        // Both escaped characters are a single byte.
        out.write_str(&rest[i..i + 1])?;
        rest = &rest[i + 1..];
    }
    out.write_str(rest)?;
    out.write_char('"')
}

/// Write `value`, quoting it if necessary.
pub(crate) fn write_parameter_value<W: Write>(
    out: &mut W,
    value: &str,
) -> fmt::Result {
    if is_token(value) {
        out.write_str(value)
    } else {
        write_quoted(out, value)
    }
}
