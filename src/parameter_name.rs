//! Names of media type parameters.

use crate::rfc7231::{Result, TokenKind};
use crate::token::validate_token;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Parameters of a media type in the order they were added.
pub type Parameters = IndexMap<ParameterName, String>;

/// The name of a parameter, e.g. `charset` in `text/plain; charset=utf-8`.
///
/// Names are validated as tokens when created and are case-sensitive:
/// `charset` and `Charset` are different names.
///
/// ```rust
/// use mime_value::ParameterName;
///
/// let name = ParameterName::new("charset").unwrap();
/// assert_eq!(name.as_str(), "charset");
/// assert!(ParameterName::new("char set").is_err());
/// assert!(ParameterName::new("").is_err());
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ParameterName(String);

impl ParameterName {
    /// Create a validated `ParameterName`.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty or contains a character that isn’t
    /// allowed in a token.
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        validate_token(TokenKind::ParameterName, &name)?;
        Ok(Self(name))
    }

    /// Wrap a name that has already been checked.
    pub(crate) fn from_validated(name: String) -> Self {
        debug_assert!(crate::token::is_token(&name), "invalid name {:?}", name);
        Self(name)
    }

    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParameterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Allows looking up [`Parameters`] by `&str`.
impl Borrow<str> for ParameterName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ParameterName {
    type Err = crate::rfc7231::ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ParameterName {
    type Error = crate::rfc7231::ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ParameterName {
    type Error = crate::rfc7231::ParseError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(s)
    }
}

impl PartialEq<str> for ParameterName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ParameterName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
