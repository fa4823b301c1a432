//! Line-at-a-time access to a (possibly decompressed) byte stream.
//!
//! The [`LineSource`] trait is what the replicate scanner consumes. The
//! provided [`LineReader`] reuses one growable buffer for every line, so
//! memory use depends on the longest line, not the size of the input.

use std::io::{self, BufRead};

pub trait LineSource {
    ///
    /// Advance to the next line and return it without its line terminator.
    /// Returns `None` at end of stream.
    ///
    fn next_line(&mut self) -> io::Result<Option<&[u8]>>;

    ///
    /// Make the most recently returned line the next one returned again.
    /// Has no effect if the last call reached end of stream.
    ///
    fn push_back(&mut self);

    /// 1-based number of the most recently returned line, 0 before the first.
    fn line_number(&self) -> usize;
}

pub struct LineReader<R: BufRead> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
    has_line: bool,
    replay: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::with_capacity(8192),
            line_number: 0,
            has_line: false,
            replay: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        if self.replay {
            self.replay = false;
            return Ok(Some(&self.buffer));
        }

        self.buffer.clear();
        let read = self.reader.read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            self.has_line = false;
            return Ok(None);
        }

        self.line_number += 1;
        self.has_line = true;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        Ok(Some(&self.buffer))
    }

    fn push_back(&mut self) {
        if self.has_line {
            self.replay = true;
        }
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
