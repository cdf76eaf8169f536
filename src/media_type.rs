//! Immutable media type values.

use crate::constants;
use crate::parameter_name::{ParameterName, Parameters};
use crate::rfc7231::{
    write_parameter_value, ParseError, Parser, Result, Scanned, TokenKind,
};
use crate::token::validate_token;
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

/// The wildcard used for a type or subtype in a media range.
pub const WILDCARD: &str = "*";

/// A parsed media type, e.g. `text/plain; charset=utf-8`.
///
/// `MediaType` is immutable and cheap to clone: clones share the same
/// storage. The `with_*` methods return a new value (or a clone of `self` if
/// nothing changed).
///
/// Equality and hashing ignore the order of parameters. Rendering keeps it.
///
/// ```rust
/// use mime_value::MediaType;
///
/// let mime = MediaType::parse("text/plain;charset=UTF-8").unwrap();
/// assert_eq!(mime.type_(), "text");
/// assert_eq!(mime.subtype(), "plain");
/// assert_eq!(mime.parameter("charset"), Some("UTF-8"));
/// assert_eq!(mime.to_string(), "text/plain; charset=UTF-8");
/// ```
#[derive(Clone)]
pub struct MediaType(Arc<Inner>);

struct Inner {
    type_: String,
    subtype: String,
    parameters: Parameters,
    /// Canonical text, e.g. `text/plain; charset=utf-8`.
    text: String,
}

impl MediaType {
    /// Parse a single media type.
    ///
    /// Well known media types (see [`crate::constants`]) are returned as
    /// shared constants.
    ///
    /// ```rust
    /// use mime_value::{constants, MediaType};
    ///
    /// let any = MediaType::parse("*/*").unwrap();
    /// assert!(MediaType::ptr_eq(&any, &constants::STAR_STAR));
    ///
    /// assert!(MediaType::parse("text/plain, text/html").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Blank`] if `input` is empty or whitespace, and
    /// other variants of [`ParseError`] for invalid input, including
    /// [`ParseError::UnexpectedSeparator`] if `input` is a list.
    pub fn parse(input: &str) -> Result<Self> {
        match Parser::single().parse_one(input) {
            Ok(scanned) => {
                tracing::trace!(input, "parsed media type");
                Ok(Self::from_scanned(scanned))
            }
            Err(error) => {
                tracing::debug!(input, %error, "failed to parse media type");
                Err(error)
            }
        }
    }

    /// Parse a comma separated list of media types, e.g. an `Accept` header.
    ///
    /// ```rust
    /// use mime_value::MediaType;
    ///
    /// let list = MediaType::parse_many("text/html, text/plain; q=0.5").unwrap();
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list[0].as_str(), "text/html");
    /// assert_eq!(list[1].as_str(), "text/plain; q=0.5");
    /// ```
    ///
    /// # Errors
    ///
    /// Fails if any media type in the list is invalid. There are no partial
    /// results.
    pub fn parse_many(input: &str) -> Result<Vec<Self>> {
        match Parser::list().parse(input) {
            Ok(values) => {
                tracing::trace!(
                    input,
                    count = values.len(),
                    "parsed media type list"
                );
                Ok(values.into_iter().map(Self::from_scanned).collect())
            }
            Err(error) => {
                tracing::debug!(input, %error, "failed to parse media type list");
                Err(error)
            }
        }
    }

    /// Create a media type with no parameters.
    ///
    /// ```rust
    /// use mime_value::{constants, MediaType};
    ///
    /// let png = MediaType::new("image", "png").unwrap();
    /// assert!(MediaType::ptr_eq(&png, &constants::IMAGE_PNG));
    /// assert!(MediaType::new("image", "p n g").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `type_` or `subtype` isn’t a valid token (`*` is
    /// a valid token).
    pub fn new(type_: &str, subtype: &str) -> Result<Self> {
        Self::from_parts(type_, subtype, Parameters::new())
    }

    /// Create a media type from its parts.
    ///
    /// Parameter names were validated when they were created. Parameter
    /// values may be any string; they are quoted as needed when rendered.
    ///
    /// # Errors
    ///
    /// Returns an error if `type_` or `subtype` isn’t a valid token.
    pub fn from_parts<I, V>(
        type_: &str,
        subtype: &str,
        parameters: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (ParameterName, V)>,
        V: Into<String>,
    {
        validate_token(TokenKind::Type, type_)?;
        validate_token(TokenKind::Subtype, subtype)?;
        let parameters = collect_parameters(parameters);
        Ok(Self::build(type_.to_owned(), subtype.to_owned(), parameters)
            .interned())
    }

    /// Create a media type without validation or interning.
    ///
    /// Only for building the constants.
    pub(crate) fn from_static(
        type_: &str,
        subtype: &str,
        parameters: &[(&str, &str)],
    ) -> Self {
        let parameters = parameters
            .iter()
            .map(|(name, value)| {
                (
                    ParameterName::from_validated((*name).to_owned()),
                    (*value).to_owned(),
                )
            })
            .collect();
        Self::build(type_.to_owned(), subtype.to_owned(), parameters)
    }

    fn from_scanned(Scanned { type_, subtype, parameters }: Scanned) -> Self {
        Self::build(type_, subtype, parameters).interned()
    }

    fn build(type_: String, subtype: String, parameters: Parameters) -> Self {
        let text = render(&type_, &subtype, &parameters);
        Self(Arc::new(Inner { type_, subtype, parameters, text }))
    }

    /// Replace `self` with the matching constant, if there is one.
    fn interned(self) -> Self {
        match constants::lookup(self.as_str()) {
            Some(constant) => {
                tracing::trace!(
                    media_type = constant.as_str(),
                    "using interned constant"
                );
                constant.clone()
            }
            None => self,
        }
    }

    /// The primary type, e.g. `text` or `*`.
    #[must_use]
    #[inline]
    pub fn type_(&self) -> &str {
        &self.0.type_
    }

    /// The subtype, e.g. `plain` or `*`.
    #[must_use]
    #[inline]
    pub fn subtype(&self) -> &str {
        &self.0.subtype
    }

    /// The parameters in the order they were given.
    #[must_use]
    #[inline]
    pub fn parameters(&self) -> &Parameters {
        &self.0.parameters
    }

    /// Get the value of a parameter (case-sensitive).
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.0.parameters.get(name).map(String::as_str)
    }

    #[must_use]
    #[inline]
    pub fn has_parameters(&self) -> bool {
        !self.0.parameters.is_empty()
    }

    /// The canonical text, e.g. `text/plain; charset=utf-8`.
    ///
    /// Parsing this produces an equal `MediaType`.
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0.text
    }

    /// The type and subtype without parameters, e.g. `text/plain`.
    #[must_use]
    pub fn essence(&self) -> &str {
        let len = self.0.type_.len() + 1 + self.0.subtype.len();
        &self.0.text[..len]
    }

    /// Is either the type or the subtype `*`?
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.type_() == WILDCARD || self.subtype() == WILDCARD
    }

    /// Do `a` and `b` share storage?
    ///
    /// Interned constants and unchanged results of the `with_*` methods are
    /// the same instance as their source.
    #[must_use]
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Return a media type with a different primary type.
    ///
    /// ```rust
    /// use mime_value::MediaType;
    ///
    /// let mime = MediaType::parse("text/x-c; charset=utf-8").unwrap();
    /// let changed = mime.with_type("application").unwrap();
    /// assert_eq!(changed.as_str(), "application/x-c; charset=utf-8");
    /// assert!(MediaType::ptr_eq(&mime, &mime.with_type("text").unwrap()));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `type_` isn’t a valid token.
    pub fn with_type(&self, type_: &str) -> Result<Self> {
        validate_token(TokenKind::Type, type_)?;
        if type_ == self.type_() {
            return Ok(self.clone());
        }
        Ok(Self::build(
            type_.to_owned(),
            self.0.subtype.clone(),
            self.0.parameters.clone(),
        )
        .interned())
    }

    /// Return a media type with a different subtype.
    ///
    /// # Errors
    ///
    /// Returns an error if `subtype` isn’t a valid token.
    pub fn with_subtype(&self, subtype: &str) -> Result<Self> {
        validate_token(TokenKind::Subtype, subtype)?;
        if subtype == self.subtype() {
            return Ok(self.clone());
        }
        Ok(Self::build(
            self.0.type_.clone(),
            subtype.to_owned(),
            self.0.parameters.clone(),
        )
        .interned())
    }

    /// Return a media type with its parameters replaced.
    ///
    /// The parameters are copied. If they are the same as the current
    /// parameters in the same order, a clone of `self` is returned.
    ///
    /// ```rust
    /// use mime_value::{MediaType, ParameterName};
    ///
    /// let mime = MediaType::parse("text/plain").unwrap();
    /// let charset = ParameterName::new("charset").unwrap();
    /// let changed = mime.with_parameters([(charset, "utf-8")]);
    /// assert_eq!(changed.as_str(), "text/plain; charset=utf-8");
    /// ```
    #[must_use]
    pub fn with_parameters<I, V>(&self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (ParameterName, V)>,
        V: Into<String>,
    {
        let parameters = collect_parameters(parameters);
        if parameters.iter().eq(self.0.parameters.iter()) {
            return self.clone();
        }
        Self::build(self.0.type_.clone(), self.0.subtype.clone(), parameters)
            .interned()
    }

    /// Return a media type with one parameter added or replaced.
    ///
    /// A replaced parameter keeps its position.
    #[must_use]
    pub fn with_parameter<V: Into<String>>(
        &self,
        name: ParameterName,
        value: V,
    ) -> Self {
        let value = value.into();
        if self.parameter(name.as_str()) == Some(value.as_str()) {
            return self.clone();
        }
        let mut parameters = self.0.parameters.clone();
        parameters.insert(name, value);
        Self::build(self.0.type_.clone(), self.0.subtype.clone(), parameters)
            .interned()
    }

    /// Return a media type with no parameters.
    #[must_use]
    pub fn without_parameters(&self) -> Self {
        self.with_parameters(std::iter::empty::<(ParameterName, String)>())
    }

    /// Does `self` match `other`, treating `*` in `self` as a wildcard?
    ///
    /// Parameters are ignored. Only wildcards in `self` are considered, so
    /// this is not symmetric: `*/*` is compatible with `text/plain`, but not
    /// the other way around. Check both directions if that’s what you need.
    ///
    /// ```rust
    /// use mime_value::{constants, MediaType};
    ///
    /// let png = MediaType::parse("image/png").unwrap();
    /// assert!(constants::STAR_STAR.is_compatible(&png));
    /// assert!(constants::IMAGE_STAR.is_compatible(&png));
    /// assert!(!png.is_compatible(&constants::IMAGE_STAR));
    /// assert!(!png.is_compatible(&constants::TEXT_PLAIN));
    /// ```
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        if Self::ptr_eq(self, other) || self.type_() == WILDCARD {
            return true;
        }
        if self.type_() != other.type_() {
            return false;
        }
        self.subtype() == WILDCARD || self.subtype() == other.subtype()
    }
}

/// Copy parameters into a fresh map.
fn collect_parameters<I, V>(parameters: I) -> Parameters
where
    I: IntoIterator<Item = (ParameterName, V)>,
    V: Into<String>,
{
    parameters
        .into_iter()
        .map(|(name, value)| (name, value.into()))
        .collect()
}

/// Build the canonical text.
fn render(type_: &str, subtype: &str, parameters: &Parameters) -> String {
    let mut text = String::with_capacity(type_.len() + 1 + subtype.len());
    text.push_str(type_);
    text.push('/');
    text.push_str(subtype);
    for (name, value) in parameters {
        text.push_str("; ");
        text.push_str(name.as_str());
        text.push('=');
        // Writing to a String can’t fail.
        let _ = write_parameter_value(&mut text, value);
    }
    text
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order.
        Self::ptr_eq(self, other)
            || (self.0.type_ == other.0.type_
                && self.0.subtype == other.0.subtype
                && self.0.parameters == other.0.parameters)
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.type_.hash(state);
        self.0.subtype.hash(state);

        // Must not depend on parameter order.
        let mut parameters: Vec<_> = self.0.parameters.iter().collect();
        parameters.sort_unstable();
        state.write_usize(parameters.len());
        for parameter in parameters {
            parameter.hash(state);
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("MediaType(")?;
        fmt::Debug::fmt(self.as_str(), f)?;
        f.write_char(')')
    }
}

impl AsRef<str> for MediaType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for MediaType {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl PartialEq<str> for MediaType {
    /// Compare against the canonical text.
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for MediaType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
