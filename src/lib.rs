//! Parse media types (MIME types) into immutable values.
//!
//! ```rust
//! use mime_value::{constants, MediaType};
//!
//! let mime = MediaType::parse(r#"text/plain; charset=utf-8; title="a b""#)
//!     .unwrap();
//! assert_eq!(mime.type_(), "text");
//! assert_eq!(mime.subtype(), "plain");
//! assert_eq!(mime.parameter("title"), Some("a b"));
//! assert!(constants::TEXT_STAR.is_compatible(&mime));
//!
//! let accept = MediaType::parse_many("text/html, */*").unwrap();
//! assert!(MediaType::ptr_eq(&accept[1], &constants::STAR_STAR));
//! ```
//!
//! See [`rfc7231`] for the details of the grammar.
//!
//! # Features
//!
//!   * `serde`: implement `Serialize` and `Deserialize` for [`MediaType`] and
//!     [`ParameterName`] as strings.

#![forbid(unsafe_code)]
// Enable doc_cfg on docsrs so that we get feature markers.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod media_type;
mod parameter_name;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_impl;

pub mod constants;
pub mod rfc7231;
pub mod token;

pub use media_type::{MediaType, WILDCARD};
pub use parameter_name::{ParameterName, Parameters};
pub use rfc7231::{
    quote_parameter_value, ParseError, Parser, Result, Separator, TokenKind,
};
pub use token::{is_token, is_token_char, validate_token};
