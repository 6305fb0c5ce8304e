//! Lazily-readable byte sources for binary request parts.
//!
//! A [`ByteSource`] is a handle that can be opened into a fresh byte stream
//! on demand. The request model only carries these handles around; opening
//! and reading them is left entirely to the transport that eventually encodes
//! the request, so large payloads are never materialized by this crate.

use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use bytes::Bytes;

/// An on-demand-readable sequence of bytes.
///
/// Implementations decide whether the source can be opened more than once;
/// re-reading a single-use source across retries is the transport's concern,
/// not this crate's.
pub trait ByteSource: Send + Sync {
    /// Opens a fresh readable stream over the source's bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying bytes cannot be opened for reading,
    /// e.g. a backing file that no longer exists.
    fn open(&self) -> io::Result<Box<dyn Read + Send>>;

    /// Returns the total number of bytes, if known without reading.
    fn size_hint(&self) -> Option<u64> {
        None
    }
}

/// A byte source backed by an in-memory buffer.
///
/// Always re-openable; every `open` yields an independent reader over the
/// same shared bytes.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    data: Bytes,
}

impl InMemorySource {
    /// Creates a new in-memory source from anything convertible to [`Bytes`].
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }
}

impl ByteSource for InMemorySource {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.data.clone())))
    }

    fn size_hint(&self) -> Option<u64> {
        Some(self.data.len() as u64)
    }
}

/// A byte source backed by a file on disk.
///
/// The file is opened only when the source is read, never at construction
/// time. Re-openable as long as the file remains accessible.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a new file-backed source for the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guesses the MIME type from the file extension, falling back to
    /// `application/octet-stream`.
    pub fn guess_content_type(&self) -> String {
        mime_guess::from_path(&self.path)
            .first_or_octet_stream()
            .to_string()
    }
}

impl ByteSource for FileSource {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(fs::File::open(&self.path)?))
    }

    fn size_hint(&self) -> Option<u64> {
        fs::metadata(&self.path).ok().map(|m| m.len())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn read_all(source: &dyn ByteSource) -> Vec<u8> {
        let mut buf = Vec::new();
        source
            .open()
            .expect("source should open")
            .read_to_end(&mut buf)
            .expect("source should be readable");
        buf
    }

    #[test]
    fn in_memory_source_round_trips() {
        let source = InMemorySource::new(&b"hello"[..]);
        assert_eq!(read_all(&source), b"hello");
        assert_eq!(source.size_hint(), Some(5));
    }

    #[test]
    fn in_memory_source_is_re_openable() {
        let source = InMemorySource::new(&b"again"[..]);
        assert_eq!(read_all(&source), b"again");
        assert_eq!(read_all(&source), b"again");
    }

    #[test]
    fn file_source_reads_lazily() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"file contents").expect("write temp file");

        let source = FileSource::new(file.path());
        assert_eq!(read_all(&source), b"file contents");
        assert_eq!(source.size_hint(), Some(13));
    }

    #[test]
    fn file_source_open_fails_for_missing_file() {
        let source = FileSource::new("/definitely/not/a/real/path.bin");
        assert!(source.open().is_err());
        assert_eq!(source.size_hint(), None);
    }

    #[test]
    fn file_source_guesses_content_type_from_extension() {
        assert_eq!(
            FileSource::new("report.json").guess_content_type(),
            "application/json"
        );
        assert_eq!(
            FileSource::new("blob").guess_content_type(),
            "application/octet-stream"
        );
    }
}
