use crate::core::classifier::{scheme_of, to_normalized_url};
use crate::core::display::{to_display_url, FirstStrongLtr, LEFT_TO_RIGHT_MARK};
use crate::core::public_suffix::PublicSuffixList;
use crate::core::web_url::{is_ip_literal, is_valid_web_url};

/// Extracts the host of a web URL as shown in the address bar: no scheme,
/// no `www.`, no user info, no port, nothing after the first `/`.
///
/// The input must already conform to [`is_valid_web_url`].
pub fn display_host(url: &str) -> String {
    // "HTTPS://" would otherwise survive the display stripping
    let url = match scheme_of(url) {
        Some(_) => to_normalized_url(url),
        None => url.to_string(),
    };
    let display = to_display_url(&url, &FirstStrongLtr, true);
    let display = display.trim_start_matches(LEFT_TO_RIGHT_MARK);
    let display = display.split('?').next().unwrap_or(display);
    let host = match display.rfind('@') {
        Some(at) => &display[at + 1..],
        None => display,
    };
    let host = match host.rfind(':') {
        Some(colon)
            if colon + 1 < host.len() && host[colon + 1..].chars().all(|c| c.is_ascii_digit()) =>
        {
            &host[..colon]
        }
        _ => host,
    };
    host.to_string()
}

/// Check whether `input` is a well-formed web URL whose host ends in a known
/// public suffix.
pub fn url_has_public_suffix(input: &str, list: &PublicSuffixList) -> bool {
    let stripped = input.trim();
    if !is_valid_web_url(stripped) {
        return false;
    }

    let host = display_host(stripped);
    if is_ip_literal(&host) {
        return false;
    }

    match list.get_public_suffix(&host) {
        Some(suffix) => list.is_public_suffix(&suffix),
        None => false,
    }
}
