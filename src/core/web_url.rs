//! Strict "web URL" grammar: scheme, user info, host name or IPv4, port, path.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::net::IpAddr;

// Non-ASCII characters allowed in host labels and paths (IRI).
const UCS_CHAR: &str = concat!(
    r"\x{A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}",
    r"\x{10000}-\x{1FFFD}\x{20000}-\x{2FFFD}\x{30000}-\x{3FFFD}\x{40000}-\x{4FFFD}",
    r"\x{50000}-\x{5FFFD}\x{60000}-\x{6FFFD}\x{70000}-\x{7FFFD}\x{80000}-\x{8FFFD}",
    r"\x{90000}-\x{9FFFD}\x{A0000}-\x{AFFFD}\x{B0000}-\x{BFFFD}\x{C0000}-\x{CFFFD}",
    r"\x{D0000}-\x{DFFFD}\x{E1000}-\x{EFFFD}",
);

const PROTOCOL: &str = r"(?i:http|https|rtsp)://";

const USER_INFO: &str = concat!(
    r"(?:[a-zA-Z0-9$\-_.+!*'(),;?&=]|(?:%[a-fA-F0-9]{2})){1,64}",
    r"(?::(?:[a-zA-Z0-9$\-_.+!*'(),;?&=]|(?:%[a-fA-F0-9]{2})){1,25})?@",
);

const IP_ADDRESS: &str = concat!(
    r"(?:(?:25[0-5]|2[0-4][0-9]|[0-1][0-9]{2}|[1-9][0-9]|[1-9])\.",
    r"(?:25[0-5]|2[0-4][0-9]|[0-1][0-9]{2}|[1-9][0-9]|[1-9]|0)\.",
    r"(?:25[0-5]|2[0-4][0-9]|[0-1][0-9]{2}|[1-9][0-9]|[1-9]|0)\.",
    r"(?:25[0-5]|2[0-4][0-9]|[0-1][0-9]{2}|[1-9][0-9]|[0-9]))",
);

const PORT_NUMBER: &str = r":[0-9]{1,5}";

const PUNYCODE_TLD: &str = r"xn--[\w-]{0,58}\w";

fn web_url_pattern() -> String {
    let label_char = format!("a-zA-Z0-9{}", UCS_CHAR);
    let tld_char = format!("a-zA-Z{}", UCS_CHAR);

    let iri_label = format!("[{lc}](?:[{lc}_\\-]{{0,61}}[{lc}])?", lc = label_char);
    let tld = format!("(?:{}|[{}]{{2,63}})", PUNYCODE_TLD, tld_char);
    let host_name = format!("(?:{}\\.)+{}", iri_label, tld);
    let domain_name = format!("(?:{}|{})", host_name, IP_ADDRESS);
    let path_and_query = format!(
        "[/?](?:[{};/?:@&=#~\\-.+!*'(),_$]|(?:%[a-fA-F0-9]{{2}}))*",
        label_char
    );

    format!(
        "^(?:(?:{protocol}(?:{user_info})?)?{domain}(?:{port})?)(?:{path})?$",
        protocol = PROTOCOL,
        user_info = USER_INFO,
        domain = domain_name,
        port = PORT_NUMBER,
        path = path_and_query,
    )
}

static WEB_URL_RE: Lazy<Regex> = Lazy::new(|| {
    // 大量 Unicode 範圍加上有界重複，預設大小上限不夠
    RegexBuilder::new(&web_url_pattern())
        .size_limit(256 * (1 << 20))
        .dfa_size_limit(64 * (1 << 20))
        .build()
        .expect("web URL pattern is valid")
});

/// Check whether the whole input conforms to the web URL grammar.
pub fn is_valid_web_url(input: &str) -> bool {
    WEB_URL_RE.is_match(input)
}

/// True for IPv4 literals and IPv6 literals, bracketed or not.
pub fn is_ip_literal(host: &str) -> bool {
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    host.parse::<IpAddr>().is_ok()
}
