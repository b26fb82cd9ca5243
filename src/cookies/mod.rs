//! Cookie records and the Netscape cookie file codec.
//!
//! - **Records**: [`CookieRecord`](record::CookieRecord), one cookie as stored in a file
//! - **Codec**: [`netscape`] decoder and encoder for the `cookies.txt` format
//! - **Files**: [`netscape::read`] / [`netscape::write`] by path
//!
//! # Reading a curl/wget cookie file
//!
//! ```rust,no_run
//! use netscape_cookies::cookies::netscape;
//!
//! let cookies = netscape::read("cookies.txt")?;
//! println!("Found {} cookies", cookies.len());
//! # Ok::<(), netscape_cookies::base::cookieerror::CookieError>(())
//! ```
//!
//! # Writing records
//!
//! ```rust
//! use netscape_cookies::cookies::netscape;
//! use netscape_cookies::cookies::record::CookieRecord;
//!
//! let cookies = vec![
//!     CookieRecord::new("session", "abc123")
//!         .with_domain(".example.com")
//!         .with_path("/")
//!         .with_http_only(true),
//! ];
//!
//! let mut out = Vec::new();
//! netscape::encode(&mut out, &cookies)?;
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("#HttpOnly_.example.com\tTRUE\t/\tFALSE\t0\tsession\tabc123\n"));
//! # Ok::<(), netscape_cookies::base::cookieerror::CookieError>(())
//! ```

pub mod netscape;
pub mod record;

pub use record::CookieRecord;
