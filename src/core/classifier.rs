//! Lenient URL-vs-search classification for address bar input.

use once_cell::sync::Lazy;
use regex::Regex;

// Anything that contains a `:`, `://` or `.` between two word tokens and has no
// internal spaces is potentially a URL.
//
//   (\w+-+)*\w+        a token: "w", "w-w", "w-w-w" match; "w-", "-w" do not
//   (://[/]*|:|\.)     separator
//   ([\S&&[^\w-]]\S*)? optional tail starting with a non-word, non-dash,
//                      non-space character, e.g. ':', '/', '.', '?'
//
// Odd inputs that still count as URLs: "c-http://c.com", "about-mozilla:mozilla",
// "www.c.-", "3-3.3". Inputs that don't: "-x.com", "http://www-.com", "3-3".
static URL_LENIENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:\w+-+)*\w+(?::///*|:|\.)(?:\w+-+)*\w+(?:[\S&&[^\w-]]\S*)?\s*$")
        .expect("lenient URL pattern is valid")
});

/// Determine whether a string is a URL.
///
/// This is a lenient check. Use [`crate::core::suffix_check::url_has_public_suffix`]
/// when the input must also end in a known registry suffix.
pub fn is_url_like(input: &str) -> bool {
    URL_LENIENT_RE.is_match(input)
}

/// Anything that is not URL-like is a search term.
pub fn is_search_term(input: &str) -> bool {
    !is_url_like(input)
}

/// Returns the scheme of `input` if it has one.
///
/// The scheme is the text before the first `:`, provided that colon comes
/// before any `/`, `?` or `#` and is not the first character.
pub fn scheme_of(input: &str) -> Option<&str> {
    let colon = input.find(':')?;
    let head = &input[..colon];
    if head.is_empty() || head.contains(['/', '?', '#']) {
        return None;
    }
    Some(head)
}

/// Normalizes a URL string for navigation.
///
/// Input without a scheme gets `http://` prepended, otherwise the scheme is
/// lower-cased and the rest is kept as typed.
pub fn to_normalized_url(input: &str) -> String {
    let trimmed = input.trim();
    match scheme_of(trimmed) {
        None => format!("http://{}", trimmed),
        Some(scheme) => {
            let rest = &trimmed[scheme.len()..];
            format!("{}{}", scheme.to_lowercase(), rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_normalized_url() {
        let expected = "http://mozilla.org";
        assert_eq!(to_normalized_url("http://mozilla.org"), expected);
        assert_eq!(to_normalized_url("  http://mozilla.org  "), expected);
        assert_eq!(to_normalized_url("mozilla.org"), expected);
        assert_eq!(to_normalized_url("HTTP://mozilla.org"), expected);
    }

    #[test]
    fn test_to_normalized_url_keeps_other_schemes() {
        assert_eq!(to_normalized_url("About:Config"), "about:Config");
        assert_eq!(to_normalized_url("file:///home/user/a.html"), "file:///home/user/a.html");
        assert_eq!(to_normalized_url("mozilla.org/a:b"), "http://mozilla.org/a:b");
        assert_eq!(to_normalized_url("Mozilla.org/A:b"), "http://Mozilla.org/A:b");
        assert_eq!(to_normalized_url(":8080"), "http://:8080");
    }

    #[test]
    fn test_scheme_of() {
        assert_eq!(scheme_of("https://x.org"), Some("https"));
        assert_eq!(scheme_of("about:config"), Some("about"));
        assert_eq!(scheme_of("x.org/?q=a:b"), None);
        assert_eq!(scheme_of("x.org"), None);
        assert_eq!(scheme_of(":x"), None);
    }

    #[test]
    fn test_is_url_like() {
        assert!(!is_url_like("inurl:mozilla.org advanced search"));
        assert!(!is_url_like("sf: help"));
        assert!(!is_url_like("mozilla./~"));
        assert!(!is_url_like("cnn.com politics"));

        assert!(is_url_like("about:config"));
        assert!(is_url_like("about:config:8000"));
        assert!(is_url_like("file:///home/user/myfile.html"));
        assert!(is_url_like("file://////////////home//user/myfile.html"));
        assert!(is_url_like("file://C:\\Users\\user\\myfile.html"));
        assert!(is_url_like("http://192.168.255.255"));
        assert!(is_url_like("link.unknown"));
        // ICANN accepts purely numeric gTLDs.
        assert!(is_url_like("3.14.2019"));
        assert!(is_url_like("3-four.14.2019"));
        assert!(is_url_like(" cnn.com "));
        assert!(is_url_like(" cnn.com"));
        assert!(is_url_like("cnn.com "));
        assert!(is_url_like("mozilla.com/~userdir"));
        assert!(is_url_like("my-domain.com"));
        assert!(is_url_like("http://faß.de//"));
        assert!(is_url_like("cnn.cơḿ"));
        assert!(is_url_like("cnn.çơḿ"));

        assert!(is_url_like("c-c.com"));
        assert!(is_url_like("c-c-c-c.c-c-c"));
        assert!(is_url_like("c-http://c.com"));
        assert!(is_url_like("about-mozilla:mozilla"));
        assert!(is_url_like("c-http.d-x"));
        assert!(is_url_like("www.c.-"));
        assert!(is_url_like("3-3.3"));
        assert!(is_url_like("www.c-c.-"));

        assert!(!is_url_like(" -://x.com "));
        assert!(!is_url_like("  -x.com"));
        assert!(!is_url_like("http://www-.com"));
        assert!(!is_url_like("www.c-c-  "));
        assert!(!is_url_like("3-3 "));

        assert!(is_url_like("https://abc--cba.com/"));
    }

    #[test]
    fn test_is_search_term() {
        assert!(is_search_term("inurl:mozilla.org advanced search"));
        assert!(is_search_term("sf: help"));
        assert!(is_search_term("3-3 "));
        assert!(is_search_term(""));
        assert!(is_search_term("   "));

        assert!(!is_search_term("camp-firefox.de"));
        assert!(!is_search_term("http://my-domain.com"));
        assert!(!is_search_term("about:config"));
    }
}
