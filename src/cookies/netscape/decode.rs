//! Netscape cookie file decoding.

use std::borrow::Cow;
use std::io::{self, BufRead, BufReader, Read};

use time::OffsetDateTime;
use tracing::{debug, trace};

use super::{is_magic_header, HTTP_ONLY_PREFIX, TRUE};
use crate::base::cookieerror::CookieError;
use crate::cookies::record::CookieRecord;

/// Decode every cookie in `reader`.
///
/// An empty stream yields an empty list. A stream whose first line is not
/// the magic header fails with [`CookieError::InvalidHeader`].
///
/// # Example
/// ```
/// use netscape_cookies::cookies::netscape;
///
/// let data = "# Netscape HTTP Cookie File\n\
///             #HttpOnly_example.com\tFALSE\t/\tTRUE\t0\tsid\tabc\n";
/// let cookies = netscape::decode(data.as_bytes())?;
/// assert_eq!(cookies.len(), 1);
/// assert!(cookies[0].http_only);
/// # Ok::<(), netscape_cookies::base::cookieerror::CookieError>(())
/// ```
pub fn decode<R: Read>(reader: R) -> Result<Vec<CookieRecord>, CookieError> {
    Decoder::new(BufReader::new(reader)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Header,
    Body,
    Done,
}

/// Streaming decoder yielding one record per cookie line.
///
/// The header is checked on the first call to `next`. After the first error
/// the iterator is exhausted. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD rather than failing the line.
pub struct Decoder<R> {
    reader: R,
    buf: Vec<u8>,
    line_no: usize,
    decoded: usize,
    state: State,
}

impl<R: BufRead> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            line_no: 0,
            decoded: 0,
            state: State::Header,
        }
    }

    /// Number of the last line read, starting at 1 for the header.
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }

        let line = match String::from_utf8_lossy(&self.buf) {
            Cow::Borrowed(line) => line.to_string(),
            Cow::Owned(line) => {
                trace!(line = self.line_no + 1, "replaced invalid UTF-8 in cookie line");
                line
            }
        };
        Ok(Some(line))
    }

    fn fail(&mut self, err: CookieError) -> Option<Result<CookieRecord, CookieError>> {
        self.state = State::Done;
        Some(Err(err))
    }
}

impl<R: BufRead> Iterator for Decoder<R> {
    type Item = Result<CookieRecord, CookieError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.state == State::Done {
                return None;
            }

            let line = match self.read_line() {
                Ok(Some(line)) => line,
                Err(e) => {
                    let err = CookieError::read_failed(self.line_no + 1, e);
                    return self.fail(err);
                }
                Ok(None) => {
                    if self.state == State::Body {
                        debug!(cookies = self.decoded, lines = self.line_no, "decoded cookie file");
                    }
                    self.state = State::Done;
                    return None;
                }
            };
            self.line_no += 1;

            if self.state == State::Header {
                let header = line.trim();
                if !is_magic_header(header) {
                    debug!(header = %header, "rejected cookie file header");
                    let err = CookieError::InvalidHeader {
                        header: header.to_string(),
                    };
                    return self.fail(err);
                }
                self.state = State::Body;
                continue;
            }

            match parse_line(&line, self.line_no) {
                Ok(Some(record)) => {
                    self.decoded += 1;
                    return Some(Ok(record));
                }
                Ok(None) => continue,
                Err(err) => return self.fail(err),
            }
        }
    }
}

/// Parse one body line. Blank and comment lines yield `None`.
fn parse_line(line: &str, line_no: usize) -> Result<Option<CookieRecord>, CookieError> {
    let mut txt = line.trim();
    let mut record = CookieRecord::default();

    if let Some(rest) = txt.strip_prefix(HTTP_ONLY_PREFIX) {
        record.http_only = true;
        txt = rest;
    }

    if txt.is_empty() || txt.starts_with('#') {
        trace!(line = line_no, "skipping comment line");
        return Ok(None);
    }

    // Short lines leave the trailing fields at their defaults.
    // Column 1 (include_subdomains) is implied by the domain's leading dot.
    let toks: Vec<&str> = txt.split('\t').collect();
    let field = |i: usize| toks.get(i).copied().unwrap_or_default();

    record.domain = field(0).to_lowercase();
    record.path = field(2).to_string();
    record.secure = field(3) == TRUE;
    record.name = field(5).to_string();
    record.value = field(6).to_string();

    let raw = field(4);
    if !raw.is_empty() {
        let secs = raw.parse::<i64>().map_err(|source| CookieError::InvalidExpiry {
            line: line_no,
            value: raw.to_string(),
            source,
        })?;
        record.expires = match OffsetDateTime::from_unix_timestamp(secs) {
            Ok(t) => Some(t),
            Err(_) => {
                trace!(line = line_no, expiry = secs, "expiry outside datetime range, keeping raw value");
                None
            }
        };
        record.raw_expires = Some(raw.to_string());
    }

    Ok(Some(record))
}
