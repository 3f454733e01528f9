//! Header application over an abstract response object.

use crate::content_type::content_type_for;
use crate::error::FormatError;
use crate::format::Format;

/// Name of the header written by [`set_content_type`].
pub const CONTENT_TYPE: &str = "Content-Type";

/// The single capability the negotiation layer needs from a transport
/// response. Transport crates implement this for their own response types.
pub trait SetHeader {
    fn set_header(&mut self, name: &str, value: &str);
}

/// Resolve the content type for `format` and write it to `response`.
///
/// Pure delegation: resolver failures propagate unchanged and nothing is
/// written on error.
pub fn set_content_type<R: SetHeader + ?Sized>(
    response: &mut R,
    format: Format,
    version: Option<&str>,
) -> Result<(), FormatError> {
    let value = content_type_for(format, version)?;
    tracing::debug!("setting {}: {}", CONTENT_TYPE, value);
    response.set_header(CONTENT_TYPE, &value);
    Ok(())
}
