//! Path segment extraction for listing addresses.

use url::Url;

/// Format suffixes the listing endpoints accept and the grammar ignores.
const FORMAT_SUFFIXES: [&str; 2] = [".json", ".xml"];

/// Decoded path segments of `url` with format suffixes stripped and empty
/// segments dropped.
///
/// - `/r/pics/top.json` → `["r", "pics", "top"]`
/// - `/.json` → `[]`
/// - `/r//pics/` → `["r", "pics"]`
pub(super) fn listing_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .into_iter()
        .flatten()
        .map(percent_decode)
        .filter_map(|segment| {
            let stripped = strip_format_suffixes(&segment);
            (!stripped.is_empty()).then(|| stripped.to_string())
        })
        .collect()
}

/// Removes trailing `.json` / `.xml` (any case) repeatedly.
pub(super) fn strip_format_suffixes(segment: &str) -> &str {
    let mut rest = segment;
    while let Some(shorter) = FORMAT_SUFFIXES
        .iter()
        .find_map(|suffix| strip_suffix_ignore_case(rest, suffix))
    {
        rest = shorter;
    }
    rest
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    // An ASCII suffix match guarantees `split` is a char boundary.
    if s.as_bytes()[split..].eq_ignore_ascii_case(suffix.as_bytes()) {
        Some(&s[..split])
    } else {
        None
    }
}

/// Percent-decodes one path segment; malformed escapes are kept literally.
fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let high = bytes.get(i + 1).copied().and_then(hex_digit);
            let low = bytes.get(i + 2).copied().and_then(hex_digit);
            if let (Some(high), Some(low)) = (high, low) {
                out.push(high << 4 | low);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(url: &str) -> Vec<String> {
        listing_segments(&Url::parse(url).unwrap())
    }

    #[test]
    fn root_has_no_segments() {
        assert!(segments("https://reddit.com/").is_empty());
        assert!(segments("https://reddit.com").is_empty());
        assert!(segments("https://reddit.com/.json").is_empty());
    }

    #[test]
    fn strips_suffixes_and_empty_segments() {
        assert_eq!(segments("https://reddit.com/r/pics/top.json"), ["r", "pics", "top"]);
        assert_eq!(segments("https://reddit.com/r//pics/"), ["r", "pics"]);
        assert_eq!(segments("https://reddit.com/r/pics/.xml/"), ["r", "pics"]);
    }

    #[test]
    fn suffixes_are_stripped_repeatedly_and_case_insensitively() {
        assert_eq!(strip_format_suffixes("pics.JSON"), "pics");
        assert_eq!(strip_format_suffixes("pics.json.Xml.json"), "pics");
        assert_eq!(strip_format_suffixes(".json.json"), "");
        assert_eq!(strip_format_suffixes("pics.jsonx"), "pics.jsonx");
        assert_eq!(strip_format_suffixes("json"), "json");
    }

    #[test]
    fn non_ascii_segments() {
        assert_eq!(strip_format_suffixes("café"), "café");
        assert_eq!(strip_format_suffixes("日本.json"), "日本");
    }

    #[test]
    fn decodes_escapes() {
        assert_eq!(percent_decode("news%2Bworld"), "news+world");
        assert_eq!(percent_decode("caf%C3%A9"), "café");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(segments("https://reddit.com/r/a%20b"), ["r", "a b"]);
    }
}
