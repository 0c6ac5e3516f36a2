use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use thiserror::Error;

/// Bytes escaped by [`url_encode`]: everything but ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )`, the URI-component unreserved set. `+` is also left
/// alone; [`url_decode`] reads it back as a space.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'+');

const ESCAPE: u8 = b'%';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Malformed percent escape at byte {offset}")]
    MalformedEscape { offset: usize },
    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Percent-encodes `s` for use as a URI component. Multi-byte characters
/// are escaped byte by byte with upper-case hex.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Decodes a URI component, reading `+` as a space first (form encoding).
///
/// Fails on a `%` not followed by two hex digits, or when the escapes
/// decode to bytes that are not UTF-8.
pub fn url_decode(s: &str) -> Result<String, DecodeError> {
    let plus_as_space = s.replace('+', " ");
    let b = plus_as_space.as_bytes();

    let mut i = 0;
    while i < b.len() {
        if b[i] == ESCAPE {
            let well_formed = b.len() > i + 2
                && b[i + 1].is_ascii_hexdigit()
                && b[i + 2].is_ascii_hexdigit();
            if !well_formed {
                log::debug!("rejecting malformed escape at byte {i}");
                return Err(DecodeError::MalformedEscape { offset: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(&plus_as_space)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("hello world", "hello%20world")]
    #[case("a&b=c/d?e#f", "a%26b%3Dc%2Fd%3Fe%23f")]
    #[case("-_.!~*'()", "-_.!~*'()")]
    #[case("café", "caf%C3%A9")]
    #[case("😀", "%F0%9F%98%80")]
    #[case("a+b", "a+b")]
    fn encode_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(url_encode(input), expected);
    }

    #[rstest]
    #[case("hello%20world", "hello world")]
    #[case("caf%c3%a9", "café")]
    #[case("a+b", "a b")]
    #[case("100%25", "100%")]
    #[case("plain", "plain")]
    fn decode_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(url_decode(input).unwrap(), expected);
    }

    #[rstest]
    #[case("%", 0)]
    #[case("abc%2", 3)]
    #[case("%zz", 0)]
    #[case("ok%20then%g0", 9)]
    fn malformed_escapes_fail(#[case] input: &str, #[case] offset: usize) {
        assert_eq!(
            url_decode(input),
            Err(DecodeError::MalformedEscape { offset })
        );
    }

    #[test]
    fn invalid_utf8_fails() {
        assert_eq!(url_decode("%C3%28"), Err(DecodeError::InvalidUtf8));
        assert_eq!(url_decode("%FF"), Err(DecodeError::InvalidUtf8));
    }

    #[rstest]
    #[case("hello world")]
    #[case("a&b=c")]
    #[case("naïve café 😀")]
    #[case("100% sure?")]
    #[case("")]
    fn round_trip_without_plus(#[case] s: &str) {
        assert_eq!(url_decode(&url_encode(s)).unwrap(), s);
    }

    #[test]
    fn round_trip_maps_plus_to_space() {
        assert_eq!(url_decode(&url_encode("a+b")).unwrap(), "a b");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DecodeError::MalformedEscape { offset: 4 }.to_string(),
            "Malformed percent escape at byte 4"
        );
    }
}
