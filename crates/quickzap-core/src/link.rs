//! wa.me deep link construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const WA_ME_BASE: &str = "https://wa.me/";

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, matching
/// ECMAScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query value.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Keep only the ASCII digits `0`-`9`.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Build `https://wa.me/<phone_code><digits>[?text=<message>]`.
///
/// Returns `None` when `phone` is blank. The dialing code is prefixed
/// as-is, leading `+` included, with no separator.
pub fn build_link(phone_code: &str, phone: &str, message: &str) -> Option<String> {
    if phone.trim().is_empty() {
        return None;
    }

    let mut link = format!("{WA_ME_BASE}{phone_code}{}", digits_only(phone));
    if !message.is_empty() {
        link.push_str("?text=");
        link.push_str(&encode_uri_component(message));
    }
    Some(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_digits_only_strips_formatting() {
        assert_eq!(digits_only("(11) 98765-4321"), "11987654321");
        assert_eq!(digits_only("+44 20 7946 0958"), "442079460958");
        assert_eq!(digits_only("call me"), "");
    }

    #[test]
    fn test_digits_only_ignores_non_ascii_digits() {
        assert_eq!(digits_only("١٢3"), "3");
    }

    #[test]
    fn test_encode_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("Hi there!"), "Hi%20there!");
        assert_eq!(encode_uri_component("a&b=c?d"), "a%26b%3Dc%3Fd");
        assert_eq!(encode_uri_component("(it's) *fine* ~ok_-."), "(it's)%20*fine*%20~ok_-.");
        assert_eq!(encode_uri_component("olá\n"), "ol%C3%A1%0A");
        assert_eq!(encode_uri_component("+/#"), "%2B%2F%23");
    }

    #[test]
    fn test_encoded_message_roundtrips() {
        for message in ["fish & chips", "x=1?y=2", "50% off", "line one\nline two", "ça va? 👍"] {
            let encoded = encode_uri_component(message);
            let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
            assert_eq!(decoded, message);
        }
    }

    #[test]
    fn test_build_link_example() {
        assert_eq!(
            build_link("+55", "(11) 98765-4321", "Hi there!").as_deref(),
            Some("https://wa.me/+5511987654321?text=Hi%20there!")
        );
    }

    #[test]
    fn test_build_link_without_message_has_no_query() {
        let link = build_link("+33", "6 12 34 56 78", "").unwrap();
        assert_eq!(link, "https://wa.me/+33612345678");
        assert!(!link.contains('?'));
    }

    #[test]
    fn test_build_link_blank_phone_is_none() {
        assert_eq!(build_link("+55", "", "hello"), None);
        assert_eq!(build_link("+55", "   \t", "hello"), None);
    }

    #[test]
    fn test_build_link_whitespace_message_is_kept() {
        assert_eq!(
            build_link("+1", "555 0100", " ").as_deref(),
            Some("https://wa.me/+15550100?text=%20")
        );
    }
}
