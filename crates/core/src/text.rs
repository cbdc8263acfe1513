use std::borrow::Cow;

/// Decode HTML entities in text coming from the backend.
///
/// The question source entity-encodes reserved characters (`&quot;`,
/// `&#039;`, ...), and the encoding is not guaranteed to be consistent
/// between the options list and the reported correct answer. Decoding both
/// sides before display or comparison keeps them in one representation.
#[must_use]
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(raw)
}

/// Decode into an owned `String`, for call sites that store the result.
#[must_use]
pub fn decode_owned(raw: &str) -> String {
    decode_entities(raw).into_owned()
}
