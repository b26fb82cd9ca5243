//! # netscape-cookies
//!
//! Read and write HTTP cookies in the Netscape HTTP Cookie File format,
//! the `cookies.txt` layout understood by curl, wget and most HTTP tooling.
//!
//! ## Features
//!
//! - **Decoding**: magic header check, `#HttpOnly_` lines, comment skipping,
//!   tolerant of short lines and CRLF files
//! - **Encoding**: header written once, sticky errors, verbatim raw expiry
//! - **Files**: path based [`read`](cookies::netscape::read) and
//!   [`write`](cookies::netscape::write)
//! - **Interop**: conversion to and from [`cookie::Cookie`]
//!
//! ## Quick Start
//!
//! ```rust
//! use netscape_cookies::cookies::netscape;
//!
//! let text = "# Netscape HTTP Cookie File\n\
//!             .example.com\tTRUE\t/\tTRUE\t1257894000\tsid\tabc\n";
//! let cookies = netscape::decode(text.as_bytes())?;
//!
//! let mut out = Vec::new();
//! netscape::encode(&mut out, &cookies)?;
//! assert!(String::from_utf8(out).unwrap().ends_with(
//!     ".example.com\tTRUE\t/\tTRUE\t1257894000\tsid\tabc\n"
//! ));
//! # Ok::<(), netscape_cookies::base::cookieerror::CookieError>(())
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error type and IO context helpers
//! - [`cookies`] - Cookie records and the Netscape codec

pub mod base;
pub mod cookies;

pub use base::cookieerror::CookieError;
pub use cookies::record::CookieRecord;
