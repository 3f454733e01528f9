//! Content negotiation for the wikitext/HTML transform REST API.
//!
//! This crate decides the exact `Content-Type` header value for a response
//! format (wikitext, HTML, page bundle) and recovers the format and content
//! version a client named in a received `Content-Type` header. It also holds
//! the static tables describing which formats exist, how their error bodies
//! are encoded, and which format-to-format transforms the API serves.
//!
//! # Example
//!
//! ```
//! use mwrest_format::{content_type_for, parse_content_type, Format};
//!
//! let value = content_type_for(Format::Html, Some("2.1.0")).unwrap();
//! assert_eq!(
//!     value,
//!     "text/html; charset=utf-8; profile=\"https://www.mediawiki.org/wiki/Specs/HTML/2.1.0\""
//! );
//!
//! let parsed = parse_content_type(&value).unwrap();
//! assert_eq!(parsed.format, Format::Html);
//! assert_eq!(parsed.version, "2.1.0");
//! ```

pub mod content_type;
pub mod error;
pub mod format;
pub mod headers;

pub use content_type::{content_type_for, parse_content_type, ProfileMatch, WIKITEXT_VERSION};
pub use error::FormatError;
pub use format::{is_valid_transform, valid_transforms, ErrorEncoding, Format, PAGE_FORMATS};
pub use headers::{set_content_type, SetHeader, CONTENT_TYPE};
