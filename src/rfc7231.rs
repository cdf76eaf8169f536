//! # Code to parse a media type or a list of media types
//!
//! The grammar is close to [RFC7231 (HTTP)], but stricter about whitespace
//! and looser about which characters make up a token (see [`crate::token`]):
//!
//! > ```ABNF
//! > media-type    = type "/" subtype *( ";" OWS parameter )
//! > type          = token
//! > subtype       = token
//! > parameter     = token "=" ( token / quoted-string )
//! > quoted-string = DQUOTE *( qdtext / "\" DQUOTE / "\" "\" ) DQUOTE
//! > ```
//!
//! A list of media types, e.g. an `Accept` header, is
//! `media-type *( "," OWS media-type )`.
//!
//! ## Parsing details
//!
//!   * Only spaces (not tabs) are skipped, and only after a `;` or, in a
//!     list, after a `,`. Whitespace anywhere else is an invalid character.
//!   * Empty unquoted parameter values are rejected, but empty quoted values
//!     are fine.
//!   * Inside a quoted value any character is accepted. The only escapes
//!     are `\\` and `\"`.
//!   * Case is preserved everywhere.
//!   * If a parameter name is repeated the last value wins.
//!
//! [RFC7231 (HTTP)]: https://datatracker.ietf.org/doc/html/rfc7231#section-3.1.1.1

mod errors;
mod quoted_string;
#[cfg(test)]
mod tests_parse;

pub use errors::*;
pub use quoted_string::*;
pub(crate) use quoted_string::write_parameter_value;

use crate::parameter_name::{ParameterName, Parameters};
use crate::token::is_token_char;
use std::mem;

/// What to do when a `,` is found at the end of a media type.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Separator {
    /// Fail with [`ParseError::UnexpectedSeparator`].
    Reject,
    /// End the current media type and start parsing the next one.
    Split,
}

/// Parser for media types.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parser {
    pub separator: Separator,
}

impl Parser {
    /// Create a `Parser` that accepts exactly one media type.
    #[inline]
    #[must_use]
    pub fn single() -> Self {
        Parser { separator: Separator::Reject }
    }

    /// Create a `Parser` that accepts a comma separated list of media
    /// types, e.g. `text/html, text/plain; charset=utf-8`.
    #[inline]
    #[must_use]
    pub fn list() -> Self {
        Parser { separator: Separator::Split }
    }

    /// Parse `input` into its parts.
    ///
    /// A `single()` parser always returns exactly one element on success. A
    /// `list()` parser returns at least one.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Blank`] if `input` is empty or whitespace, or
    /// another [`ParseError`] describing the first problem found.
    pub fn parse(&self, input: &str) -> Result<Vec<Scanned>> {
        if input.trim().is_empty() {
            return Err(ParseError::Blank);
        }

        let scanner = Scanner {
            input,
            chars: input.chars().collect(),
            separator: self.separator,
        };

        let mut values = Vec::new();
        let mut start = 0;
        loop {
            let (scanned, next) = scanner.scan(start)?;
            values.push(scanned);
            match next {
                Some(next) => start = scanner.skip_spaces(next),
                None => return Ok(values),
            }
        }
    }

    /// Parse `input`, which must contain exactly one media type.
    ///
    /// # Errors
    ///
    /// See [`Parser::parse()`]. A `list()` parser given more than one media
    /// type fails with [`ParseError::UnexpectedSeparator`] at the first `,`.
    pub fn parse_one(&self, input: &str) -> Result<Scanned> {
        match self.separator {
            Separator::Reject => {
                let mut values = self.parse(input)?;
                // Reject never yields more than one value.
                Ok(values.swap_remove(0))
            }
            Separator::Split => Parser::single().parse_one(input),
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::single()
    }
}

/// The parts of a media type as found by the [`Parser`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scanned {
    pub type_: String,
    pub subtype: String,
    pub parameters: Parameters,
}

/// States of the scanner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Type,
    Subtype,
    /// Skipping spaces after `;`.
    ParamSepWs,
    ParamName,
    /// Just after the `=`.
    ParamValueInitial,
    ParamValue,
    ParamQuoted,
    /// Just after a `\` inside quotes.
    ParamEscape,
    /// Just after a closing quote.
    ParamSep,
}

/// State for a single call to [`Parser::parse()`].
struct Scanner<'a> {
    input: &'a str,
    chars: Vec<char>,
    separator: Separator,
}

impl Scanner<'_> {
    /// Scan one media type starting at `start`.
    ///
    /// Returns the media type and, if it ended at a `,` that should be split
    /// on, the index just past the `,`.
    fn scan(&self, start: usize) -> Result<(Scanned, Option<usize>)> {
        let mut state = State::Type;
        let mut type_ = String::new();
        let mut subtype = String::new();
        let mut name = String::new();
        let mut value = String::new();
        let mut parameters = Parameters::new();

        let mut i = start;
        while let Some(&c) = self.chars.get(i) {
            match state {
                State::Type => match c {
                    '/' => {
                        self.require(TokenKind::Type, &type_, i)?;
                        state = State::Subtype;
                    }
                    c if is_token_char(c) => type_.push(c),
                    c => return Err(self.invalid(i, c)),
                },
                State::Subtype => match c {
                    ';' => {
                        self.require(TokenKind::Subtype, &subtype, i)?;
                        state = State::ParamSepWs;
                    }
                    ',' => {
                        self.require(TokenKind::Subtype, &subtype, i)?;
                        let next = self.separate(i)?;
                        return Ok((
                            Scanned { type_, subtype, parameters },
                            Some(next),
                        ));
                    }
                    c if is_token_char(c) => subtype.push(c),
                    c => return Err(self.invalid(i, c)),
                },
                State::ParamSepWs => {
                    if c != ' ' {
                        // Reprocess this character as part of the name.
                        state = State::ParamName;
                        continue;
                    }
                }
                State::ParamName => match c {
                    '=' => {
                        self.require(TokenKind::ParameterName, &name, i)?;
                        state = State::ParamValueInitial;
                    }
                    c if is_token_char(c) => name.push(c),
                    c => return Err(self.invalid(i, c)),
                },
                State::ParamValueInitial => {
                    if c == '"' {
                        state = State::ParamQuoted;
                    } else {
                        state = State::ParamValue;
                        continue;
                    }
                }
                State::ParamValue => match c {
                    ';' => {
                        self.require(TokenKind::ParameterValue, &value, i)?;
                        insert(&mut parameters, &mut name, &mut value);
                        state = State::ParamSepWs;
                    }
                    ',' => {
                        self.require(TokenKind::ParameterValue, &value, i)?;
                        let next = self.separate(i)?;
                        insert(&mut parameters, &mut name, &mut value);
                        return Ok((
                            Scanned { type_, subtype, parameters },
                            Some(next),
                        ));
                    }
                    c if is_token_char(c) => value.push(c),
                    c => return Err(self.invalid(i, c)),
                },
                State::ParamQuoted => match c {
                    '"' => {
                        insert(&mut parameters, &mut name, &mut value);
                        state = State::ParamSep;
                    }
                    '\\' => state = State::ParamEscape,
                    c => value.push(c),
                },
                State::ParamEscape => match c {
                    '\\' | '"' => {
                        value.push(c);
                        state = State::ParamQuoted;
                    }
                    c => return Err(self.invalid(i, c)),
                },
                State::ParamSep => match c {
                    ';' => state = State::ParamSepWs,
                    ',' => {
                        let next = self.separate(i)?;
                        return Ok((
                            Scanned { type_, subtype, parameters },
                            Some(next),
                        ));
                    }
                    c => return Err(self.invalid(i, c)),
                },
            }
            i += 1;
        }

        // End of input.
        let end = self.chars.len();
        match state {
            State::Type if type_.is_empty() => {
                return Err(self.missing(TokenKind::Type, end));
            }
            State::Type => return Err(self.missing(TokenKind::Subtype, end)),
            State::Subtype => self.require(TokenKind::Subtype, &subtype, end)?,
            State::ParamSepWs => {
                return Err(self.missing(TokenKind::ParameterName, end));
            }
            State::ParamName => {
                // A name without `=value`.
                return Err(self.missing(TokenKind::ParameterValue, end));
            }
            State::ParamValueInitial | State::ParamValue => {
                self.require(TokenKind::ParameterValue, &value, end)?;
                insert(&mut parameters, &mut name, &mut value);
            }
            State::ParamQuoted | State::ParamEscape => {
                return Err(ParseError::UnterminatedQuote {
                    pos: end.saturating_sub(1),
                    input: self.input.to_owned(),
                });
            }
            State::ParamSep => (),
        }

        Ok((Scanned { type_, subtype, parameters }, None))
    }

    /// Handle a `,` at `pos` that ends a media type.
    fn separate(&self, pos: usize) -> Result<usize> {
        match self.separator {
            Separator::Reject => Err(ParseError::UnexpectedSeparator {
                pos,
                input: self.input.to_owned(),
            }),
            Separator::Split => Ok(pos + 1),
        }
    }

    /// Skip spaces starting at `i` and return the index of the next
    /// character (or the end).
    fn skip_spaces(&self, mut i: usize) -> usize {
        while self.chars.get(i) == Some(&' ') {
            i += 1;
        }
        i
    }

    /// Fail if the token that ended at `pos` is empty.
    fn require(&self, token: TokenKind, value: &str, pos: usize) -> Result<()> {
        if value.is_empty() {
            Err(self.missing(token, pos))
        } else {
            Ok(())
        }
    }

    fn missing(&self, token: TokenKind, pos: usize) -> ParseError {
        ParseError::MissingToken { token, pos, input: self.input.to_owned() }
    }

    fn invalid(&self, pos: usize, ch: char) -> ParseError {
        ParseError::InvalidCharacter { pos, ch, input: self.input.to_owned() }
    }
}

/// Move the pending name and value into `parameters`.
fn insert(parameters: &mut Parameters, name: &mut String, value: &mut String) {
    parameters.insert(
        ParameterName::from_validated(mem::take(name)),
        mem::take(value),
    );
}
