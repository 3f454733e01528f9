//! Response formats and the static tables describing them.
//!
//! The tables are built once at first use and never mutated; callers only ever
//! ask membership questions of them.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A document representation served or accepted by the transform API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Raw wikitext source.
    Wikitext,
    /// Rendered HTML.
    Html,
    /// HTML plus auxiliary metadata, bundled as JSON.
    PageBundle,
    /// Lint report over a page's wikitext.
    Lint,
}

/// How the error body for a response format is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorEncoding {
    Plain,
    Html,
    Json,
}

impl Format {
    /// Wire name used in routes and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Wikitext => "wikitext",
            Format::Html => "html",
            Format::PageBundle => "pagebundle",
            Format::Lint => "lint",
        }
    }

    /// Inverse of [`as_str`]. An unknown name is a negotiation outcome the
    /// caller handles, not an error.
    pub fn from_name(name: &str) -> Option<Format> {
        match name {
            "wikitext" => Some(Format::Wikitext),
            "html" => Some(Format::Html),
            "pagebundle" => Some(Format::PageBundle),
            "lint" => Some(Format::Lint),
            _ => None,
        }
    }

    /// Encoding for error bodies of this format. Exhaustive over [`Format`],
    /// so every page format has exactly one entry.
    pub fn error_encoding(&self) -> ErrorEncoding {
        match self {
            Format::Wikitext => ErrorEncoding::Plain,
            Format::Html => ErrorEncoding::Html,
            Format::PageBundle => ErrorEncoding::Json,
            Format::Lint => ErrorEncoding::Json,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every format a page endpoint can serve.
pub const PAGE_FORMATS: [Format; 4] = [
    Format::Wikitext,
    Format::Html,
    Format::PageBundle,
    Format::Lint,
];

lazy_static! {
    /// Which source format may be transformed into which targets. Lint is
    /// never a transform source.
    static ref VALID_TRANSFORMS: HashMap<Format, Vec<Format>> = {
        let mut m = HashMap::new();
        m.insert(
            Format::Wikitext,
            vec![Format::Html, Format::PageBundle, Format::Lint],
        );
        m.insert(Format::Html, vec![Format::Wikitext]);
        m.insert(Format::PageBundle, vec![Format::Wikitext, Format::PageBundle]);
        m
    };
}

/// Transform targets legal for `from`; empty when `from` is not a source.
pub fn valid_transforms(from: Format) -> &'static [Format] {
    VALID_TRANSFORMS
        .get(&from)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Whether transforming `from` into `to` is served at all.
pub fn is_valid_transform(from: Format, to: Format) -> bool {
    VALID_TRANSFORMS
        .get(&from)
        .map(|targets| targets.contains(&to))
        .unwrap_or(false)
}
