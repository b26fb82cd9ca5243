//! Netscape HTTP Cookie File codec (`cookies.txt`).
//!
//! The format used by curl, wget and the old Mozilla browsers: a magic
//! comment line, then one tab-separated line per cookie.
//!
//! ## Line Format
//! ```text
//! domain \t include_subdomains \t path \t secure \t expiry \t name \t value
//! ```
//! - `include_subdomains` and `secure` are `TRUE` or `FALSE`
//! - `expiry` is UTC seconds since the epoch, `0` for session cookies
//! - HttpOnly cookies carry a `#HttpOnly_` prefix on the domain column,
//!   which older readers skip as a comment
//!
//! ## References
//! - http://curl.haxx.se/rfc/cookie_spec.html

pub mod decode;
pub mod encode;
pub mod file;

pub use decode::{decode, Decoder};
pub use encode::{encode, Encoder, EncoderConfig, LineEnding};
pub use file::{read, write};

/// Prefix on the domain column marking an HttpOnly cookie.
pub const HTTP_ONLY_PREFIX: &str = "#HttpOnly_";

/// Attribute name for HttpOnly in Set-Cookie syntax.
pub const HTTP_ONLY_ATTR: &str = "HTTPOnly";

/// Header block written once before the first record, one line per entry.
pub const HEADER_LINES: [&str; 4] = [
    "# Netscape HTTP Cookie File",
    "# http://curl.haxx.se/rfc/cookie_spec.html",
    "# This is a generated file!  Do not edit.",
    "",
];

const TRUE: &str = "TRUE";
const FALSE: &str = "FALSE";

/// Check a trimmed first line against the magic header.
///
/// Accepts `#`-optional, ` Netscape`-optional, then ` HTTP Cookie File`,
/// anchored at both ends and case-sensitive.
pub fn is_magic_header(line: &str) -> bool {
    let rest = line.strip_prefix('#').unwrap_or(line);
    let rest = rest.strip_prefix(" Netscape").unwrap_or(rest);
    rest == " HTTP Cookie File"
}

fn format_bool(flag: bool) -> &'static str {
    if flag {
        TRUE
    } else {
        FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_header_variants() {
        assert!(is_magic_header("# Netscape HTTP Cookie File"));
        assert!(is_magic_header("# HTTP Cookie File"));
        assert!(is_magic_header(" Netscape HTTP Cookie File"));
        assert!(is_magic_header(" HTTP Cookie File"));
    }

    #[test]
    fn test_magic_header_rejects() {
        assert!(!is_magic_header("hello"));
        assert!(!is_magic_header(""));
        assert!(!is_magic_header("# netscape http cookie file"));
        assert!(!is_magic_header("#Netscape HTTP Cookie File"));
        assert!(!is_magic_header("# Netscape HTTP Cookie File v2"));
        assert!(!is_magic_header("## Netscape HTTP Cookie File"));
    }

    #[test]
    fn test_header_starts_with_magic() {
        assert!(is_magic_header(HEADER_LINES[0]));
        assert!(HEADER_LINES[3].is_empty());
    }

    #[test]
    fn test_http_only_attr_matches_cookie_crate() {
        let c = cookie::Cookie::build(("a", "1")).http_only(true).build();
        let rendered = c.to_string().to_ascii_lowercase();
        assert!(rendered.contains(&HTTP_ONLY_ATTR.to_ascii_lowercase()));
    }
}
