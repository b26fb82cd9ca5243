//! Read and write cookie files by path.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use super::decode::decode;
use super::encode::Encoder;
use crate::base::context::IoResultExt;
use crate::base::cookieerror::CookieError;
use crate::cookies::record::CookieRecord;

/// Read all cookies from the file at `path`.
///
/// # Example
/// ```rust,no_run
/// use netscape_cookies::cookies::netscape;
///
/// let cookies = netscape::read("cookies.txt")?;
/// for c in &cookies {
///     println!("{}: {:?}", c.name, c.value);
/// }
/// # Ok::<(), netscape_cookies::base::cookieerror::CookieError>(())
/// ```
pub fn read(path: impl AsRef<Path>) -> Result<Vec<CookieRecord>, CookieError> {
    let path = path.as_ref();
    let file = File::open(path).open_context(path)?;

    let cookies = decode(file).map_err(|e| e.in_file(path))?;
    debug!(path = %path.display(), count = cookies.len(), "read cookie file");
    Ok(cookies)
}

/// Create or truncate the file at `path` and write `records` to it.
pub fn write<'a, I>(path: impl AsRef<Path>, records: I) -> Result<(), CookieError>
where
    I: IntoIterator<Item = &'a CookieRecord>,
{
    let path = path.as_ref();
    let file = File::create(path).create_context(path)?;

    let mut enc = Encoder::new(BufWriter::new(file));
    let mut count = 0usize;
    for record in records {
        enc.encode(record).map_err(|e| e.in_file(path))?;
        count += 1;
    }

    enc.into_inner()
        .into_inner()
        .map_err(|e| e.into_error())
        .close_context(path)?;

    debug!(path = %path.display(), count, "wrote cookie file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_read_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");

        let records = vec![
            CookieRecord::new("cookie-1", "v$1")
                .with_domain("golang.org")
                .with_path("/pkg/"),
            CookieRecord::new("cookie-3", "v$3")
                .with_domain("golang.org")
                .with_path("/pkg/")
                .with_http_only(true),
        ];

        write(&path, &records).unwrap();
        let loaded = read(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "cookie-1");
        assert!(loaded[1].http_only);
        assert_eq!(loaded[1].domain, "golang.org");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read(&path).unwrap_err();
        match err {
            CookieError::Open { path: p, .. } => assert_eq!(p, path),
            _ => panic!("Expected Open"),
        }
    }

    #[test]
    fn test_write_into_missing_dir() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("cookies.txt");

        let err = write(&path, &[CookieRecord::new("a", "1")]).unwrap_err();
        assert!(matches!(err, CookieError::Create { .. }));
    }

    #[test]
    fn test_read_reports_path_on_bad_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "hello\n").unwrap();

        let err = read(&path).unwrap_err();
        assert!(matches!(err, CookieError::File { .. }));
        assert!(matches!(err.root(), CookieError::InvalidHeader { .. }));
        assert!(err.to_string().contains("bad.txt"));
    }

    #[test]
    fn test_write_empty_creates_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        write(&path, &Vec::<CookieRecord>::new()).unwrap();

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
        assert!(read(&path).unwrap().is_empty());
    }
}
