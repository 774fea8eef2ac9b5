//! Windows-1251 line reading and writing.
//!
//! The editor stores its session file in the Cyrillic legacy code page, and
//! preset files share that encoding. Decoding never fails: bytes without a
//! mapping become U+FFFD. Characters with no mapping are replaced by the
//! encoder when writing.

use crate::{Error, Result};
pub use encoding_rs::WINDOWS_1251 as LEGACY_ENCODING;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Line terminator written after every output line.
pub const DOS_LINE_ENDING: &str = "\r\n";

/// Decode a whole byte buffer from the legacy code page.
pub fn decode(bytes: &[u8]) -> String {
    let (text, _) = LEGACY_ENCODING.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Encode text into the legacy code page.
pub fn encode(text: &str) -> Vec<u8> {
    let (bytes, _, had_unmappable) = LEGACY_ENCODING.encode(text);
    if had_unmappable {
        tracing::debug!("Unmappable characters replaced while encoding");
    }
    bytes.into_owned()
}

/// Streaming iterator over the decoded lines of a legacy-encoded source.
///
/// Lines are split on `\n`; a trailing `\r` is stripped, so both DOS and
/// Unix line endings yield the same text. A final line without a terminator
/// is still returned.
pub struct LegacyLines<R> {
    reader: R,
    buf: Vec<u8>,
    path: PathBuf,
}

impl LegacyLines<BufReader<File>> {
    /// Open `path` for streamed, decoded line reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> LegacyLines<R> {
    /// Wrap an arbitrary reader. `path` is only used for error reporting.
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            path: path.into(),
        }
    }
}

impl<R: BufRead> Iterator for LegacyLines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut line: &[u8] = &self.buf;
                if let Some(rest) = line.strip_suffix(b"\n") {
                    line = rest;
                }
                if let Some(rest) = line.strip_suffix(b"\r") {
                    line = rest;
                }
                Some(Ok(decode(line)))
            }
            Err(e) => Some(Err(Error::io(&self.path, e))),
        }
    }
}

/// Writes lines in the legacy code page, each terminated by `\r\n`.
pub struct LegacyWriter<W: Write> {
    inner: W,
}

impl<W: Write> LegacyWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Encode `line` and write it followed by `\r\n`.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(&encode(line))?;
        self.inner.write_all(DOS_LINE_ENDING.as_bytes())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
