//! Replicate-at-a-time conversion of an ms stream into VCF files.

use std::io::BufRead;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::Rng;

use ms2vcf_core::models::{HaplotypePool, Replicate};
use ms2vcf_core::{ConversionConfig, FormatError, Result};
use ms2vcf_io::{LineReader, LineSource, ReplicateOutput, write_replicate};

use crate::consts::SPINNER_TEMPLATE;
use crate::genotype::{GenotypeEmitter, seeded_rng};
use crate::positions::resolve_positions;
use crate::scanner::ReplicateScanner;

#[derive(Clone, Copy, Debug, PartialEq)]
enum DriverState {
    /// Looking for the next `segsites:` line
    SeekingReplicate,
    ReadingPositions { segsites: usize },
    ReadingSamples { segsites: usize },
    /// A full replicate is buffered and ready to write
    EmittingOutput,
    Done,
}

/// Storage reused by every replicate of a run.
#[derive(Debug, Default)]
struct ReplicateBuffers {
    fractional: Vec<f64>,
    resolved: Vec<u64>,
    haplotypes: HaplotypePool,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConversionSummary {
    /// Number of VCF files written.
    pub replicates: usize,
    /// Records written across all replicates.
    pub sites: usize,
    /// Destination of each replicate, in order.
    pub outputs: Vec<String>,
}

///
/// Drives the conversion: scan a replicate, resolve its positions, write
/// it, repeat until the stream is exhausted.
///
/// A replicate is read completely before its output is created, so
/// malformed input never leaves a partial file for that replicate behind.
/// Files for earlier replicates are kept.
///
pub struct ReplicateDriver<L: LineSource, O: ReplicateOutput, R: Rng> {
    scanner: ReplicateScanner<L>,
    output: O,
    genotypes: GenotypeEmitter<R>,
    segment_length: u64,
    buffers: ReplicateBuffers,
    progress: ProgressBar,
}

impl<L: LineSource, O: ReplicateOutput, R: Rng> ReplicateDriver<L, O, R> {
    ///
    /// Create a driver. `config` is assumed to have been validated.
    ///
    pub fn new(lines: L, output: O, config: &ConversionConfig, rng: R) -> Self {
        Self {
            scanner: ReplicateScanner::new(lines),
            output,
            genotypes: GenotypeEmitter::from_config(config, rng),
            segment_length: config.segment_length,
            buffers: ReplicateBuffers::default(),
            progress: ProgressBar::hidden(),
        }
    }

    /// Report written replicates on `progress`.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    ///
    /// Convert every replicate in the stream.
    ///
    /// Fails with [`FormatError::NoReplicates`] if the stream holds no
    /// `segsites:` line at all. Any error stops the run.
    ///
    pub fn run(&mut self) -> Result<ConversionSummary> {
        let mut summary = ConversionSummary::default();
        let mut state = DriverState::SeekingReplicate;

        while state != DriverState::Done {
            state = match state {
                DriverState::SeekingReplicate => match self.scanner.skip_to_segsites()? {
                    // ms prints neither positions nor haplotypes for these
                    Some(0) => {
                        self.buffers.fractional.clear();
                        self.buffers.haplotypes.clear();
                        DriverState::EmittingOutput
                    }
                    Some(segsites) => DriverState::ReadingPositions { segsites },
                    None if summary.replicates == 0 => {
                        return Err(FormatError::NoReplicates.into());
                    }
                    None => DriverState::Done,
                },
                DriverState::ReadingPositions { segsites } => {
                    self.scanner
                        .read_positions(segsites, &mut self.buffers.fractional)?;
                    DriverState::ReadingSamples { segsites }
                }
                DriverState::ReadingSamples { segsites } => {
                    let count = self
                        .scanner
                        .read_samples(segsites, &mut self.buffers.haplotypes)?;
                    if count % 2 != 0 {
                        return Err(FormatError::OddHaplotypeCount {
                            line: self.scanner.line_number(),
                            count,
                        }
                        .into());
                    }
                    DriverState::EmittingOutput
                }
                DriverState::EmittingOutput => {
                    let index = summary.replicates;
                    summary.sites += self.emit_replicate(index)?;
                    summary.outputs.push(self.output.describe(index));
                    summary.replicates += 1;

                    self.progress.inc(1);
                    self.progress
                        .set_message(format!("Wrote {} replicates", summary.replicates));
                    DriverState::SeekingReplicate
                }
                DriverState::Done => DriverState::Done,
            };
        }

        self.progress.finish_with_message("Done!");
        info!(
            "Converted {} replicates ({} sites)",
            summary.replicates, summary.sites
        );

        Ok(summary)
    }

    fn emit_replicate(&mut self, index: usize) -> Result<usize> {
        resolve_positions(
            &self.buffers.fractional,
            self.segment_length,
            &mut self.buffers.resolved,
        );

        let replicate = Replicate {
            index,
            positions: &self.buffers.resolved,
            haplotypes: self.buffers.haplotypes.as_slice(),
        };

        debug!(
            "Replicate {}: {} sites, {} samples -> {}",
            replicate.index,
            replicate.n_sites(),
            replicate.n_samples(),
            self.output.describe(index)
        );

        let sink = self.output.create(index)?;
        let sink = write_replicate(sink, self.segment_length, &replicate, &mut self.genotypes)?;
        self.output.finish(index, sink)?;

        Ok(replicate.n_sites())
    }
}

///
/// Spinner that reports replicates as they are written.
///
pub fn replicate_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
        spinner.set_style(style.tick_strings(&["-", "\\", "|", "/"]));
    }
    spinner.set_message("Converting replicates...");
    spinner
}

///
/// Convert an ms stream into one VCF per replicate.
///
/// Validates `config`, seeds the random source from `config.seed` and runs
/// a [`ReplicateDriver`] to completion. Returns the summary together with
/// the output so callers can inspect what was written.
///
/// # Arguments
/// - reader: ms output, already decompressed
/// - output: where each replicate's VCF goes
/// - config: conversion settings
///
pub fn convert_ms<B: BufRead, O: ReplicateOutput>(
    reader: B,
    output: O,
    config: &ConversionConfig,
) -> Result<(ConversionSummary, O)> {
    config.validate()?;

    let rng = seeded_rng(config.seed);
    let mut driver = ReplicateDriver::new(LineReader::new(reader), output, config, rng);
    let summary = driver.run()?;

    Ok((summary, driver.into_output()))
}
