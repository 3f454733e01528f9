//! Content-type resolution and parsing.
//!
//! The resolve direction builds the exact `Content-Type` value for a response
//! format; the parse direction recovers the format and version named by a
//! received header's `profile` parameter. Both directions share one profile
//! URI vocabulary and must stay in agreement.

use crate::error::FormatError;
use crate::format::Format;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Version of the wikitext spec. Fixed in the profile URI, never negotiated.
pub const WIKITEXT_VERSION: &str = "1.0.0";

/// Base of every current-syntax profile URI. Shared by the resolver and the
/// parser; the two directions must agree on it.
const SPECS_BASE: &str = "https://www.mediawiki.org/wiki/Specs/";

lazy_static! {
    /// Quoted `profile` parameter carrying either the current spec URI or the
    /// legacy bare form. The version must be exactly three numeric components
    /// running up against the closing quote.
    static ref PROFILE: Regex = Regex::new(&format!(
        r#"\bprofile="(?:{}(HTML|pagebundle)/|mediawiki\.org/specs/(html)/)(\d+\.\d+\.\d+)""#,
        regex::escape(SPECS_BASE)
    ))
    .unwrap();
}

/// A recognized format and version recovered from a `Content-Type` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMatch {
    pub format: Format,
    pub version: String,
}

/// Build the `Content-Type` value for a response in `format`.
///
/// `version` is required for every format except [`Format::Wikitext`], which
/// carries the fixed [`WIKITEXT_VERSION`] profile and ignores the argument.
/// [`Format::Lint`] has no content type of its own.
pub fn content_type_for(format: Format, version: Option<&str>) -> Result<String, FormatError> {
    let version = version.filter(|v| !v.is_empty());
    let (mime, profile) = match (format, version) {
        (Format::Wikitext, _) => (
            "text/plain",
            format!("{}wikitext/{}", SPECS_BASE, WIKITEXT_VERSION),
        ),
        (_, None) => return Err(FormatError::MissingVersion(format)),
        (Format::Html, Some(v)) => ("text/html", format!("{}HTML/{}", SPECS_BASE, v)),
        (Format::PageBundle, Some(v)) => (
            "application/json",
            format!("{}pagebundle/{}", SPECS_BASE, v),
        ),
        (Format::Lint, Some(_)) => return Err(FormatError::UnsupportedFormat(Format::Lint)),
    };
    Ok(format!("{}; charset=utf-8; profile=\"{}\"", mime, profile))
}

/// Recover the format and version a client named in a `Content-Type` header.
///
/// Searches the raw header value for a quoted `profile` parameter in either
/// the current spec-URI syntax or the legacy bare syntax. A header with no
/// recognizable profile yields `None`; that is a normal outcome (bare
/// wikitext requests carry no profile at all).
pub fn parse_content_type(header: &str) -> Option<ProfileMatch> {
    let caps = PROFILE.captures(header)?;
    // The format token comes from whichever alternation branch took part in
    // the match: group 1 for the spec-URI syntax, group 2 for the legacy one.
    let token = caps.get(1).or_else(|| caps.get(2))?;
    let format = match token.as_str() {
        "HTML" | "html" => Format::Html,
        "pagebundle" => Format::PageBundle,
        _ => return None,
    };
    let version = caps.get(3)?.as_str().to_string();
    tracing::trace!("profile matched: format={} version={}", format, version);
    Some(ProfileMatch { format, version })
}
