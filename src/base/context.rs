//! Ergonomic error context helpers.
//!
//! Provides extension traits for adding context to `Result` types,
//! converting IO errors into path-carrying `CookieError` variants.

use crate::base::cookieerror::CookieError;
use std::io;
use std::path::Path;
use std::sync::Arc;

/// Extension trait for adding context to IO Results.
pub trait IoResultExt<T> {
    /// Add open context to an IO error.
    ///
    /// # Example
    /// ```ignore
    /// use netscape_cookies::base::context::IoResultExt;
    ///
    /// let file = File::open(path).open_context(path)?;
    /// // Error: "could not open cookie file \"cookies.txt\""
    /// ```
    fn open_context(self, path: &Path) -> Result<T, CookieError>;

    /// Add create/truncate context to an IO error.
    fn create_context(self, path: &Path) -> Result<T, CookieError>;

    /// Add close (flush) context to an IO error.
    fn close_context(self, path: &Path) -> Result<T, CookieError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn open_context(self, path: &Path) -> Result<T, CookieError> {
        self.map_err(|e| CookieError::Open {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    }

    fn create_context(self, path: &Path) -> Result<T, CookieError> {
        self.map_err(|e| CookieError::Create {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    }

    fn close_context(self, path: &Path) -> Result<T, CookieError> {
        self.map_err(|e| CookieError::Close {
            path: path.to_path_buf(),
            source: Arc::new(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_open_context() {
        let result: Result<(), io::Error> = Err(Error::new(ErrorKind::NotFound, "missing"));
        let err = result.open_context(Path::new("cookies.txt")).unwrap_err();

        match err {
            CookieError::Open { path, source } => {
                assert_eq!(path, Path::new("cookies.txt"));
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            _ => panic!("Expected Open"),
        }
    }

    #[test]
    fn test_close_context() {
        let result: Result<(), io::Error> = Err(Error::new(ErrorKind::Other, "disk full"));
        let err = result.close_context(Path::new("/tmp/c.txt")).unwrap_err();

        assert!(matches!(err, CookieError::Close { .. }));
        assert!(err.to_string().contains("/tmp/c.txt"));
    }
}
