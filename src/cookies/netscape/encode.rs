//! Netscape cookie file encoding.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::debug;

use super::{format_bool, HEADER_LINES, HTTP_ONLY_PREFIX};
use crate::base::cookieerror::CookieError;
use crate::cookies::record::CookieRecord;

/// Line terminator used for the header and every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Encoder configuration.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Line terminator (default: `\n`)
    pub line_ending: LineEnding,
}

impl EncoderConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line terminator.
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Encode `records` to `writer` in order, then flush it.
///
/// Writes nothing at all when `records` is empty.
pub fn encode<'a, W, I>(writer: W, records: I) -> Result<(), CookieError>
where
    W: Write,
    I: IntoIterator<Item = &'a CookieRecord>,
{
    let mut enc = Encoder::new(writer);
    for record in records {
        enc.encode(record)?;
    }
    enc.flush()
}

/// Writes cookie records to a sink, one line each.
///
/// The header block goes out with the first record. The first failure is
/// kept and returned from every later call without touching the sink again.
/// Not meant to be shared between threads without a lock.
///
/// # Example
/// ```
/// use netscape_cookies::cookies::netscape::Encoder;
/// use netscape_cookies::cookies::record::CookieRecord;
///
/// let mut enc = Encoder::new(Vec::new());
/// enc.encode(&CookieRecord::new("cookie-2", "v$2")
///     .with_domain("golang.org")
///     .with_path("/pkg/")
///     .with_secure(true))?;
///
/// let out = String::from_utf8(enc.into_inner()).unwrap();
/// assert!(out.ends_with("golang.org\tFALSE\t/pkg/\tTRUE\t0\tcookie-2\tv$2\n"));
/// # Ok::<(), netscape_cookies::base::cookieerror::CookieError>(())
/// ```
pub struct Encoder<W: Write> {
    writer: W,
    config: EncoderConfig,
    buf: String,
    header_written: bool,
    err: Option<CookieError>,
}

impl<W: Write> Encoder<W> {
    /// Create an encoder with the default config. No I/O happens here.
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, EncoderConfig::default())
    }

    pub fn with_config(writer: W, config: EncoderConfig) -> Self {
        Self {
            writer,
            config,
            buf: String::with_capacity(256),
            header_written: false,
            err: None,
        }
    }

    /// Write one record, preceded by the header on the first call.
    pub fn encode(&mut self, record: &CookieRecord) -> Result<(), CookieError> {
        if !self.header_written {
            self.header_written = true;
            self.write_header();
        }
        if let Some(err) = &self.err {
            return Err(err.clone());
        }

        self.buf.clear();
        format_record(&mut self.buf, record, self.config.line_ending);

        if let Err(failure) = write_fully(&mut self.writer, self.buf.as_bytes()) {
            let err = failure.into_error(Some(&record.name));
            return Err(self.stick(err));
        }
        Ok(())
    }

    /// Flush the sink, reporting the sticky error if one is set.
    pub fn flush(&mut self) -> Result<(), CookieError> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }
        if let Err(e) = self.writer.flush() {
            let err = CookieError::Flush {
                source: Arc::new(e),
            };
            return Err(self.stick(err));
        }
        Ok(())
    }

    pub fn header_written(&self) -> bool {
        self.header_written
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) {
        let ending = self.config.line_ending.as_str();
        let mut header = String::new();
        for line in HEADER_LINES {
            header.push_str(line);
            header.push_str(ending);
        }

        debug!(bytes = header.len(), "writing cookie file header");
        if let Err(failure) = write_fully(&mut self.writer, header.as_bytes()) {
            let err = failure.into_error(None);
            self.stick(err);
        }
    }

    fn stick(&mut self, err: CookieError) -> CookieError {
        debug!(error = %err, "cookie encoder failed");
        self.err = Some(err.clone());
        err
    }
}

/// Append the file line for `record` to `buf`, terminator included.
pub(crate) fn format_record(buf: &mut String, record: &CookieRecord, ending: LineEnding) {
    if record.http_only {
        buf.push_str(HTTP_ONLY_PREFIX);
    }
    buf.push_str(&record.domain);
    buf.push('\t');
    buf.push_str(format_bool(record.include_subdomains()));
    buf.push('\t');
    buf.push_str(&record.path);
    buf.push('\t');
    buf.push_str(format_bool(record.secure));
    buf.push('\t');
    buf.push_str(&record.expiry_token());
    buf.push('\t');
    buf.push_str(&record.name);
    buf.push('\t');
    buf.push_str(&record.value);
    buf.push_str(ending.as_str());
}

enum WriteFailure {
    Io(io::Error),
    Short { written: usize, expected: usize },
}

impl WriteFailure {
    /// `name` is the record being written, `None` for the header block.
    fn into_error(self, name: Option<&str>) -> CookieError {
        match (self, name) {
            (WriteFailure::Io(e), Some(name)) => CookieError::write_failed(name, e),
            (WriteFailure::Io(e), None) => CookieError::WriteHeader {
                source: Arc::new(e),
            },
            (WriteFailure::Short { written, expected }, name) => CookieError::ShortWrite {
                name: name.map(str::to_string),
                written,
                expected,
            },
        }
    }
}

/// Like `write_all`, but a sink that stops accepting bytes is a short write.
fn write_fully<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<(), WriteFailure> {
    let mut written = 0;
    while written < bytes.len() {
        match writer.write(&bytes[written..]) {
            Ok(0) => {
                return Err(WriteFailure::Short {
                    written,
                    expected: bytes.len(),
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(WriteFailure::Io(e)),
        }
    }
    Ok(())
}
