//! Error model for the resolve direction of negotiation.
use crate::format::Format;
use thiserror::Error;

/// Failures when resolving a format to a content type.
///
/// Parsing never fails: a header without a recognizable profile is a normal
/// negotiation outcome, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Every format except wikitext needs an explicit content version.
    #[error("a content version is required for the {0} format")]
    MissingVersion(Format),

    /// The format has no content type of its own (lint).
    #[error("no content type is defined for the {0} format")]
    UnsupportedFormat(Format),
}
