use unicode_bidi::{bidi_class, BidiClass};

const HTTP: &str = "http://";
const HTTPS: &str = "https://";
const WWW: &str = "www.";

/// Forces left-to-right rendering when prepended to text.
pub const LEFT_TO_RIGHT_MARK: char = '\u{200E}';

/// Decides the directionality of a run of text.
pub trait TextDirectionHeuristic {
    /// `start` and `count` are in characters, not bytes.
    fn is_rtl(&self, text: &str, start: usize, count: usize) -> bool;
}

/// The first character with a strong direction decides; LTR when there is none.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstStrongLtr;

impl TextDirectionHeuristic for FirstStrongLtr {
    fn is_rtl(&self, text: &str, start: usize, count: usize) -> bool {
        for c in text.chars().skip(start).take(count) {
            match bidi_class(c) {
                BidiClass::R | BidiClass::AL => return true,
                BidiClass::L => return false,
                _ => {}
            }
        }
        false
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    /// Cut everything from the first `/` instead of only trailing slashes.
    pub strip_trailing_data: bool,
}

impl DisplayOptions {
    pub fn apply(&self, original: &str) -> String {
        to_display_url(original, &FirstStrongLtr, self.strip_trailing_data)
    }
}

/// Generates a shorter version of a URL for display.
///
/// Strips `https://`/`http://` (and then `www.`), then either trailing slashes
/// or everything after the host. The result always renders left to right: if
/// `heuristic` reports RTL for its first character, a [`LEFT_TO_RIGHT_MARK`]
/// is prepended.
pub fn to_display_url(
    original: &str,
    heuristic: &dyn TextDirectionHeuristic,
    strip_trailing_data: bool,
) -> String {
    let without_protocol = strip_protocol(original);
    let stripped = if strip_trailing_data {
        match without_protocol.find('/') {
            Some(slash) => &without_protocol[..slash],
            None => without_protocol,
        }
    } else {
        without_protocol.trim_end_matches('/')
    };

    if !stripped.trim().is_empty() && heuristic.is_rtl(stripped, 0, 1) {
        format!("{}{}", LEFT_TO_RIGHT_MARK, stripped)
    } else {
        stripped.to_string()
    }
}

fn strip_protocol(url: &str) -> &str {
    match url
        .strip_prefix(HTTPS)
        .or_else(|| url.strip_prefix(HTTP))
    {
        Some(rest) => rest.strip_prefix(WWW).unwrap_or(rest),
        None => url,
    }
}
