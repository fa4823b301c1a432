//! Finds replicate blocks in a stream of ms output.
//!
//! A replicate is a `segsites: S` line, a `positions:` line with `S`
//! fractions, and the haplotype lines that follow it. Everything else (the
//! command echo, seeds, `//` separators, `prob:` lines, trees) is skipped.

use ms2vcf_core::consts::{POSITIONS_MARKER, SEGSITES_MARKER};
use ms2vcf_core::models::HaplotypePool;
use ms2vcf_core::{FormatError, Result};
use ms2vcf_io::LineSource;

use crate::consts::REPLICATE_SEPARATOR;

/// A problem found while the offending line is still borrowed. Converted
/// into a [`FormatError`] once the line number can be read.
enum LineIssue {
    Utf8,
    InvalidValue(String),
    TooFew(usize),
}

pub struct ReplicateScanner<L: LineSource> {
    lines: L,
}

impl<L: LineSource> ReplicateScanner<L> {
    pub fn new(lines: L) -> Self {
        Self { lines }
    }

    /// Line number of the last line consumed.
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    pub fn into_inner(self) -> L {
        self.lines
    }

    ///
    /// Skip ahead to the next `segsites:` line and return its count.
    ///
    /// Returns `None` if the stream ends first. Whether that is an error is
    /// up to the caller.
    ///
    pub fn skip_to_segsites(&mut self) -> Result<Option<usize>> {
        loop {
            let parsed = match self.lines.next_line()? {
                None => return Ok(None),
                Some(line) => match line.strip_prefix(SEGSITES_MARKER.as_bytes()) {
                    Some(rest) => parse_count(rest),
                    None => continue,
                },
            };

            let line = self.lines.line_number();
            return match parsed {
                Ok(segsites) => Ok(Some(segsites)),
                Err(LineIssue::InvalidValue(value)) => {
                    Err(FormatError::InvalidSegsites { line, value }.into())
                }
                Err(_) => Err(FormatError::InvalidUtf8 { line }.into()),
            };
        }
    }

    ///
    /// Read the `positions:` line for a replicate with `segsites` sites into
    /// `positions`, replacing its contents.
    ///
    /// Tokens beyond the first `segsites` are ignored. Reaching the end of
    /// the stream, or the next replicate's `segsites:` line, first is an
    /// error.
    ///
    pub fn read_positions(&mut self, segsites: usize, positions: &mut Vec<f64>) -> Result<()> {
        positions.clear();

        loop {
            let parsed = match self.lines.next_line()? {
                None => None,
                Some(line) if line.starts_with(SEGSITES_MARKER.as_bytes()) => None,
                Some(line) => match line.strip_prefix(POSITIONS_MARKER.as_bytes()) {
                    Some(rest) => Some(parse_positions(rest, segsites, positions)),
                    None => continue,
                },
            };

            let line = self.lines.line_number();
            return match parsed {
                None => Err(FormatError::MissingPositions { line, segsites }.into()),
                Some(Ok(0)) => Ok(()),
                Some(Ok(extra)) => {
                    log::warn!(
                        "Line {line}: ignoring {extra} position(s) beyond the declared {segsites}"
                    );
                    Ok(())
                }
                Some(Err(LineIssue::Utf8)) => Err(FormatError::InvalidUtf8 { line }.into()),
                Some(Err(LineIssue::InvalidValue(value))) => {
                    Err(FormatError::InvalidPosition { line, value }.into())
                }
                Some(Err(LineIssue::TooFew(found))) => Err(FormatError::TooFewPositions {
                    line,
                    expected: segsites,
                    found,
                }
                .into()),
            };
        }
    }

    ///
    /// Read the haplotype lines that follow a positions line into `pool`,
    /// replacing its contents, and return how many were read.
    ///
    /// Stops at a blank line, a `//` separator, the end of the stream, or a
    /// `segsites:` line. A `segsites:` line is pushed back so the next
    /// [`ReplicateScanner::skip_to_segsites`] sees it.
    ///
    pub fn read_samples(&mut self, segsites: usize, pool: &mut HaplotypePool) -> Result<usize> {
        pool.clear();

        loop {
            let length = match self.lines.next_line()? {
                None => break,
                Some(line) if is_blank(line) || line.starts_with(REPLICATE_SEPARATOR) => break,
                Some(line) if line.starts_with(SEGSITES_MARKER.as_bytes()) => None,
                Some(line) => {
                    pool.push(line);
                    Some(line.len())
                }
            };

            match length {
                None => {
                    self.lines.push_back();
                    break;
                }
                Some(found) if found != segsites => {
                    return Err(FormatError::HaplotypeLength {
                        line: self.lines.line_number(),
                        expected: segsites,
                        found,
                    }
                    .into());
                }
                Some(_) => {}
            }
        }

        Ok(pool.len())
    }
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

fn parse_count(rest: &[u8]) -> std::result::Result<usize, LineIssue> {
    let text = std::str::from_utf8(rest).map_err(|_| LineIssue::Utf8)?;
    let text = text.trim();
    text.parse::<usize>()
        .map_err(|_| LineIssue::InvalidValue(text.to_string()))
}

///
/// Parse the first `segsites` whitespace separated fractions of a positions
/// line into `out`. Returns the number of extra tokens left unparsed.
///
/// Every fraction must be a finite value in `[0, 1)`.
///
fn parse_positions(
    rest: &[u8],
    segsites: usize,
    out: &mut Vec<f64>,
) -> std::result::Result<usize, LineIssue> {
    let text = std::str::from_utf8(rest).map_err(|_| LineIssue::Utf8)?;
    let mut tokens = text.split_whitespace();

    for token in tokens.by_ref().take(segsites) {
        let position = token
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && (0.0..1.0).contains(p))
            .ok_or_else(|| LineIssue::InvalidValue(token.to_string()))?;
        out.push(position);
    }

    if out.len() < segsites {
        return Err(LineIssue::TooFew(out.len()));
    }

    Ok(tokens.count())
}
