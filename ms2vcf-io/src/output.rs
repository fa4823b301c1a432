//! Where replicate VCFs go.
//!
//! The converter asks a [`ReplicateOutput`] for a fresh sink per replicate
//! and hands it back once the replicate is fully written.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ms2vcf_core::consts::{VCF_EXT, VCF_GZ_EXT};

use crate::consts::REPLICATE_SUFFIX;
use crate::writer::DynamicWriter;

pub trait ReplicateOutput {
    type Sink: Write;

    /// Open the sink for replicate `index`.
    fn create(&mut self, index: usize) -> io::Result<Self::Sink>;

    /// Flush and close a sink returned by [`ReplicateOutput::create`].
    fn finish(&mut self, index: usize, sink: Self::Sink) -> io::Result<()>;

    /// Human readable name of replicate `index`'s destination, for logging.
    fn describe(&self, index: usize) -> String;
}

///
/// Writes replicate `N` to `<prefix>_rep<N>.vcf`, or `.vcf.gz` when
/// compression is on.
///
#[derive(Debug, Clone)]
pub struct FileOutput {
    prefix: PathBuf,
    compress: bool,
    written: Vec<PathBuf>,
}

impl FileOutput {
    pub fn new<P: AsRef<Path>>(prefix: P, compress: bool) -> Self {
        Self {
            prefix: prefix.as_ref().to_path_buf(),
            compress,
            written: Vec::new(),
        }
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        let ext = if self.compress { VCF_GZ_EXT } else { VCF_EXT };
        let mut name = OsString::from(self.prefix.as_os_str());
        name.push(format!("{REPLICATE_SUFFIX}{index}.{ext}"));
        PathBuf::from(name)
    }

    /// Paths of every replicate finished so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReplicateOutput for FileOutput {
    type Sink = DynamicWriter;

    fn create(&mut self, index: usize) -> io::Result<Self::Sink> {
        DynamicWriter::create(&self.path_for(index))
    }

    fn finish(&mut self, index: usize, sink: Self::Sink) -> io::Result<()> {
        sink.finish()?;
        self.written.push(self.path_for(index));
        Ok(())
    }

    fn describe(&self, index: usize) -> String {
        self.path_for(index).display().to_string()
    }
}

///
/// Keeps every replicate's VCF text in memory. Useful for tests and for
/// library callers that post-process the output themselves.
///
#[derive(Debug, Default)]
pub struct MemoryOutput {
    pub files: Vec<Vec<u8>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replicate `index` as text, if it has been written.
    pub fn text(&self, index: usize) -> Option<String> {
        self.files
            .get(index)
            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
    }
}

impl ReplicateOutput for MemoryOutput {
    type Sink = Vec<u8>;

    fn create(&mut self, _index: usize) -> io::Result<Self::Sink> {
        Ok(Vec::new())
    }

    fn finish(&mut self, _index: usize, sink: Self::Sink) -> io::Result<()> {
        self.files.push(sink);
        Ok(())
    }

    fn describe(&self, index: usize) -> String {
        format!("<memory replicate {index}>")
    }
}
