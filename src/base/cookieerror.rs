use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors produced while reading or writing a Netscape cookie file.
///
/// I/O sources are shared behind an `Arc` so the error can be cloned; the
/// [`Encoder`](crate::cookies::netscape::Encoder) relies on that to report
/// the same failure on every call after the first one.
#[derive(Debug, Error, Clone)]
pub enum CookieError {
    // Decode errors
    #[error("invalid cookie file magic header {header:?}")]
    InvalidHeader { header: String },
    #[error("invalid cookie expiry {value:?} on line {line}")]
    InvalidExpiry {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("could not read cookie stream at line {line}")]
    Read {
        line: usize,
        #[source]
        source: Arc<io::Error>,
    },

    // Encode errors
    #[error("could not write cookie file header")]
    WriteHeader {
        #[source]
        source: Arc<io::Error>,
    },
    #[error("could not write cookie {name:?}")]
    Write {
        name: String,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("could not flush cookie sink")]
    Flush {
        #[source]
        source: Arc<io::Error>,
    },
    #[error("short write{}: wrote {written} of {expected} bytes", cookie_label(.name))]
    ShortWrite {
        /// Record being written; `None` for the header block.
        name: Option<String>,
        written: usize,
        expected: usize,
    },

    // File errors
    #[error("could not open cookie file {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("could not create cookie file {path:?}")]
    Create {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("could not close cookie file {path:?}")]
    Close {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("cookie file {path:?}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: Box<CookieError>,
    },
}

fn cookie_label(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" of cookie {name:?}"),
        None => " of header".to_string(),
    }
}

impl CookieError {
    pub fn read_failed(line: usize, err: io::Error) -> Self {
        CookieError::Read {
            line,
            source: Arc::new(err),
        }
    }

    pub fn write_failed(name: impl Into<String>, err: io::Error) -> Self {
        CookieError::Write {
            name: name.into(),
            source: Arc::new(err),
        }
    }

    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        CookieError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// The innermost codec error, looking through [`CookieError::File`] wrappers.
    pub fn root(&self) -> &CookieError {
        match self {
            CookieError::File { source, .. } => source.root(),
            other => other,
        }
    }

    /// Whether the error comes from malformed file content rather than I/O.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self.root(),
            CookieError::InvalidHeader { .. } | CookieError::InvalidExpiry { .. }
        )
    }
}
