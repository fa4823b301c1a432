//! Rendering of one replicate as a VCF file.
//!
//! The layout is fixed: a fileformat line, a contig line carrying the
//! segment length, the column header with one `sN` column per diploid
//! sample, then one record per segregating site. Genotype text comes from a
//! [`GenotypeFormatter`], which owns the phasing and missing-data policy.

use std::io::{self, Write};

use ms2vcf_core::models::Replicate;

use crate::consts::*;

pub trait GenotypeFormatter {
    ///
    /// Render the diploid genotype for one sample at one site, e.g. `0|1`.
    ///
    fn format_genotype(&mut self, left: u8, right: u8) -> [u8; 3];
}

pub struct VcfWriter<W: Write> {
    inner: W,
}

impl<W: Write> VcfWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_header(&mut self, segment_length: u64, n_samples: usize) -> io::Result<()> {
        writeln!(self.inner, "{VCF_FILEFORMAT_LINE}")?;
        writeln!(self.inner, "##contig=<ID={CONTIG_ID},length={segment_length}>")?;

        write!(self.inner, "{VCF_COLUMN_HEADER}")?;
        for sample in 0..n_samples {
            write!(self.inner, "\t{SAMPLE_NAME_PREFIX}{sample}")?;
        }
        writeln!(self.inner)
    }

    ///
    /// Write the record for site `site` of `replicate`: the fixed columns,
    /// then one genotype per diploid sample.
    ///
    pub fn write_site<G: GenotypeFormatter>(
        &mut self,
        replicate: &Replicate,
        site: usize,
        genotypes: &mut G,
    ) -> io::Result<()> {
        write!(
            self.inner,
            "{CONTIG_ID}\t{}\t{MISSING_FIELD}\t{REF_ALLELE}\t{ALT_ALLELE}\t{MISSING_FIELD}\t{MISSING_FIELD}\t{MISSING_FIELD}\t{MISSING_FIELD}",
            replicate.positions[site]
        )?;

        for sample in 0..replicate.n_samples() {
            let (left, right) = replicate.alleles(sample, site);
            let genotype = genotypes.format_genotype(left, right);
            self.inner.write_all(b"\t")?;
            self.inner.write_all(&genotype)?;
        }

        self.inner.write_all(b"\n")
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

///
/// Write a complete VCF for `replicate` to `sink` and hand the sink back so
/// the caller can finish it.
///
/// # Arguments
/// - sink: destination for the VCF text
/// - segment_length: length reported on the contig header line
/// - replicate: resolved positions and haplotypes
/// - genotypes: formatter applying the phasing and missing-data policy
///
pub fn write_replicate<W: Write, G: GenotypeFormatter>(
    sink: W,
    segment_length: u64,
    replicate: &Replicate,
    genotypes: &mut G,
) -> io::Result<W> {
    let mut writer = VcfWriter::new(sink);
    writer.write_header(segment_length, replicate.n_samples())?;
    for site in 0..replicate.n_sites() {
        writer.write_site(replicate, site, genotypes)?;
    }
    Ok(writer.into_inner())
}
