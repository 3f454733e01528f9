//! `http`-type bindings for the negotiation core.
//!
//! Bridges the abstract [`SetHeader`] seam to the `http` crate's concrete
//! response types and offers the request-side helper that feeds a received
//! `Content-Type` header to the parser. Transport stacks built on `http`
//! (axum, reqwest) can use these directly.

use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::{HeaderMap, Response};
use mwrest_format::{parse_content_type, Format, FormatError, ProfileMatch, SetHeader};

/// Adapter giving a `HeaderMap` the write capability the core asks for.
struct HeaderSink<'a>(&'a mut HeaderMap);

impl SetHeader for HeaderSink<'_> {
    fn set_header(&mut self, name: &str, value: &str) {
        // Negotiated names and values are fixed-grammar ASCII.
        let name = HeaderName::try_from(name).expect("negotiated header name is valid");
        let value = HeaderValue::from_str(value).expect("negotiated header value is ASCII");
        self.0.insert(name, value);
    }
}

/// Resolve the content type for `format` and set it on an `http` response.
///
/// Resolver failures propagate unchanged; the response is untouched on error.
pub fn set_content_type<B>(
    response: &mut Response<B>,
    format: Format,
    version: Option<&str>,
) -> Result<(), FormatError> {
    mwrest_format::set_content_type(&mut HeaderSink(response.headers_mut()), format, version)
}

/// Same as [`set_content_type`], for callers holding a bare header map.
pub fn insert_content_type(
    headers: &mut HeaderMap,
    format: Format,
    version: Option<&str>,
) -> Result<(), FormatError> {
    mwrest_format::set_content_type(&mut HeaderSink(headers), format, version)
}

/// Parse the `Content-Type` header of a request header map.
///
/// A missing header, non-UTF-8 header bytes and unrecognized profiles all
/// come back as `None`.
pub fn content_type_of(headers: &HeaderMap) -> Option<ProfileMatch> {
    let raw = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    parse_content_type(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_header_on_response() {
        let mut response = Response::new(());
        set_content_type(&mut response, Format::Html, Some("2.1.0")).unwrap();

        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8; profile=\"https://www.mediawiki.org/wiki/Specs/HTML/2.1.0\""
        );
    }

    #[test]
    fn test_error_leaves_response_untouched() {
        let mut response = Response::new(());
        let err = set_content_type(&mut response, Format::Lint, Some("1.0.0")).unwrap_err();
        assert_eq!(err, FormatError::UnsupportedFormat(Format::Lint));
        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn test_insert_overwrites_previous_value() {
        let mut headers = HeaderMap::new();
        insert_content_type(&mut headers, Format::Wikitext, None).unwrap();
        insert_content_type(&mut headers, Format::PageBundle, Some("1.0.0")).unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8; profile=\"https://www.mediawiki.org/wiki/Specs/pagebundle/1.0.0\""
        );
    }

    #[test]
    fn test_content_type_of_round_trips() {
        let mut headers = HeaderMap::new();
        insert_content_type(&mut headers, Format::Html, Some("2.1.0")).unwrap();

        let parsed = content_type_of(&headers).unwrap();
        assert_eq!(parsed.format, Format::Html);
        assert_eq!(parsed.version, "2.1.0");
    }

    #[test]
    fn test_content_type_of_without_header() {
        let headers = HeaderMap::new();
        assert_eq!(content_type_of(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert_eq!(content_type_of(&headers), None);
    }
}
