//! Lenient parsing of the `{id}` path segment.
//!
//! The segment is read like a `%d` scan: optional sign, then decimal digits, stopping at the
//! first other character. Anything without a usable number (empty, `abc`, a negative value, an
//! overflow) becomes 0. Identifiers start at 1, so 0 never matches a record and the request ends
//! in a 404 rather than a 400.

use percent_encoding::percent_decode_str;

/// Identifier used when the segment holds no usable number.
pub const UNPARSED_ID: u64 = 0;

/// Id named by a request path under `prefix` (e.g. `/users/`).
///
/// Everything after the prefix is percent-decoded (invalid UTF-8 replaced) and scanned with
/// [`parse_id_lenient`], so `/users/1/extra` names user 1 and `/users/%FF` names nobody.
pub fn id_from_path(path: &str, prefix: &str) -> u64 {
    let rest = path.strip_prefix(prefix).unwrap_or_default();
    parse_id_lenient(&percent_decode_str(rest).decode_utf8_lossy())
}

pub fn parse_id_lenient(segment: &str) -> u64 {
    let trimmed = segment.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if negative || digits.is_empty() {
        return UNPARSED_ID;
    }
    digits.parse().unwrap_or(UNPARSED_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_id_lenient("1"), 1);
        assert_eq!(parse_id_lenient("999"), 999);
        assert_eq!(parse_id_lenient("+7"), 7);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(parse_id_lenient("12abc"), 12);
        assert_eq!(parse_id_lenient("3.5"), 3);
    }

    #[test]
    fn path_suffix_is_decoded_then_scanned() {
        assert_eq!(id_from_path("/users/1/extra", "/users/"), 1);
        assert_eq!(id_from_path("/orders/%32", "/orders/"), 2);
        assert_eq!(id_from_path("/users/%FF", "/users/"), UNPARSED_ID);
        assert_eq!(id_from_path("/users/", "/users/"), UNPARSED_ID);
    }

    #[test]
    fn unusable_segments_become_zero() {
        assert_eq!(parse_id_lenient(""), UNPARSED_ID);
        assert_eq!(parse_id_lenient("abc"), UNPARSED_ID);
        assert_eq!(parse_id_lenient("-5"), UNPARSED_ID);
        assert_eq!(parse_id_lenient("-"), UNPARSED_ID);
        assert_eq!(parse_id_lenient("99999999999999999999999"), UNPARSED_ID);
    }
}
