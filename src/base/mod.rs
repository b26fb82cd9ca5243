//! Base types and error handling.
//!
//! - [`CookieError`](cookieerror::CookieError): every failure the codec and
//!   the file helpers can report
//! - [`IoResultExt`](context::IoResultExt): path context for raw IO errors

pub mod context;
pub mod cookieerror;
