use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

///
/// A buffered file writer that gzips its output when the target path ends
/// in `.gz`.
///
/// Call [`DynamicWriter::finish`] when done: it writes the gzip trailer and
/// surfaces any error that dropping the writer would swallow.
///
pub enum DynamicWriter {
    Plain(BufWriter<File>),
    Gzipped(GzEncoder<BufWriter<File>>),
}

impl DynamicWriter {
    ///
    /// Create (or truncate) the file at `path`, creating parent directories
    /// as needed.
    ///
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = BufWriter::new(File::create(path)?);
        let is_gzipped = path.extension() == Some(OsStr::new("gz"));

        Ok(match is_gzipped {
            true => DynamicWriter::Gzipped(GzEncoder::new(file, Compression::default())),
            false => DynamicWriter::Plain(file),
        })
    }

    pub fn is_gzipped(&self) -> bool {
        matches!(self, DynamicWriter::Gzipped(_))
    }

    pub fn finish(self) -> io::Result<()> {
        match self {
            DynamicWriter::Plain(mut inner) => inner.flush(),
            DynamicWriter::Gzipped(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for DynamicWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            DynamicWriter::Plain(inner) => inner.write(buf),
            DynamicWriter::Gzipped(encoder) => encoder.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            DynamicWriter::Plain(inner) => inner.flush(),
            DynamicWriter::Gzipped(encoder) => encoder.flush(),
        }
    }
}
