//! Well known media types.
//!
//! Parsing or constructing a media type whose canonical text matches one of
//! these returns the constant itself rather than a new allocation:
//!
//! ```rust
//! use mime_value::{constants, MediaType};
//!
//! let json = MediaType::parse("application/json").unwrap();
//! assert!(MediaType::ptr_eq(&json, &constants::APPLICATION_JSON));
//! ```
//!
//! The registry is built on first use and never changes afterward, so it is
//! safe to read from any thread without locking.

use crate::media_type::MediaType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

macro_rules! media_types {
    ($(
        $id:ident = $type_:literal / $subtype:literal
            $([$name:literal = $value:literal])*;
    )+) => {
        $(
            #[doc = concat!(
                "`", $type_, "/", $subtype,
                $("; ", $name, "=", $value,)*
                "`",
            )]
            pub static $id: Lazy<MediaType> = Lazy::new(|| {
                MediaType::from_static(
                    $type_,
                    $subtype,
                    &[$(($name, $value)),*],
                )
            });
        )+

        /// Every constant, in declaration order.
        static ALL: &[&Lazy<MediaType>] = &[$(&$id),+];
    };
}

media_types! {
    STAR_STAR = "*" / "*";

    TEXT_STAR = "text" / "*";
    TEXT_PLAIN = "text" / "plain";
    TEXT_PLAIN_UTF_8 = "text" / "plain" ["charset" = "utf-8"];
    TEXT_HTML = "text" / "html";
    TEXT_HTML_UTF_8 = "text" / "html" ["charset" = "utf-8"];
    TEXT_CSS = "text" / "css";
    TEXT_CSV = "text" / "csv";
    TEXT_JAVASCRIPT = "text" / "javascript";
    TEXT_XML = "text" / "xml";
    TEXT_EVENT_STREAM = "text" / "event-stream";

    IMAGE_STAR = "image" / "*";
    IMAGE_PNG = "image" / "png";
    IMAGE_JPEG = "image" / "jpeg";
    IMAGE_GIF = "image" / "gif";
    IMAGE_BMP = "image" / "bmp";
    IMAGE_SVG = "image" / "svg+xml";

    AUDIO_STAR = "audio" / "*";
    VIDEO_STAR = "video" / "*";

    APPLICATION_STAR = "application" / "*";
    APPLICATION_JSON = "application" / "json";
    APPLICATION_JAVASCRIPT = "application" / "javascript";
    APPLICATION_XML = "application" / "xml";
    APPLICATION_OCTET_STREAM = "application" / "octet-stream";
    APPLICATION_PDF = "application" / "pdf";
    APPLICATION_WWW_FORM_URLENCODED = "application" / "x-www-form-urlencoded";

    MULTIPART_STAR = "multipart" / "*";
    MULTIPART_FORM_DATA = "multipart" / "form-data";
}

/// Canonical text to constant.
static REGISTRY: Lazy<HashMap<&'static str, &'static MediaType>> =
    Lazy::new(|| {
        ALL.iter()
            .map(|constant| {
                let constant: &'static MediaType = Lazy::force(constant);
                (constant.as_str(), constant)
            })
            .collect()
    });

/// Find the constant with the canonical text `text`.
pub(crate) fn lookup(text: &str) -> Option<&'static MediaType> {
    REGISTRY.get(text).copied()
}

/// Iterate over all the constants.
pub fn all() -> impl Iterator<Item = &'static MediaType> {
    ALL.iter().map(|constant| Lazy::force(constant))
}
