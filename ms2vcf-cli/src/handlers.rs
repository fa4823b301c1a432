use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{debug, info};

use ms2vcf_convert::{ConversionSummary, ReplicateDriver, replicate_spinner, seeded_rng};
use ms2vcf_core::ConversionConfig;
use ms2vcf_core::utils::{get_dynamic_reader_w_stdin, output_prefix_for_input};
use ms2vcf_io::{FileOutput, LineReader};

/// Collect conversion settings from CLAP args
pub fn config_from_matches(matches: &ArgMatches) -> ConversionConfig {
    let defaults = ConversionConfig::default();

    ConversionConfig {
        ploidy: matches
            .get_one::<u8>("ploidy")
            .copied()
            .unwrap_or(defaults.ploidy),
        segment_length: matches
            .get_one::<u64>("length")
            .copied()
            .unwrap_or(defaults.segment_length),
        unphased: matches.get_flag("unphased"),
        missing_probability: matches
            .get_one::<f64>("missing")
            .copied()
            .unwrap_or(defaults.missing_probability),
        compress: matches.get_flag("compress"),
        seed: matches.get_one::<u64>("seed").copied(),
    }
}

pub fn run_convert(matches: &ArgMatches) -> Result<ConversionSummary> {
    let config = config_from_matches(matches);
    config.validate()?;

    let input = matches
        .get_one::<String>("input")
        .expect("An input file is required.");

    let prefix = match matches.get_one::<String>("prefix") {
        Some(prefix) => PathBuf::from(prefix),
        None => output_prefix_for_input(Path::new(input)).with_context(|| {
            format!("Cannot derive an output prefix from {:?}, pass --prefix", input)
        })?,
    };

    let reader = get_dynamic_reader_w_stdin(input)?;
    let output = FileOutput::new(&prefix, config.compress);

    let mut driver = ReplicateDriver::new(
        LineReader::new(reader),
        output,
        &config,
        seeded_rng(config.seed),
    );
    if matches.get_flag("progress") {
        driver = driver.with_progress(replicate_spinner());
    }

    let summary = driver
        .run()
        .with_context(|| format!("Failed to convert {:?}", input))?;

    info!(
        "Wrote {} VCF files with prefix {}",
        summary.replicates,
        prefix.display()
    );
    for output in &summary.outputs {
        debug!("Wrote {}", output);
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::fs::File;
    use std::io::{Read, Write};

    use flate2::Compression;
    use flate2::read::GzDecoder;
    use flate2::write::GzEncoder;
    use ms2vcf_core::{ConfigError, Ms2VcfError};

    use crate::cli::build_parser;

    #[fixture]
    fn ms_output() -> &'static str {
        "ms 4 2 -t 3\n\
         5 6 7\n\
         \n\
         //\n\
         segsites: 2\n\
         positions: 0.1 0.5\n\
         01\n\
         10\n\
         11\n\
         00\n\
         \n\
         //\n\
         segsites: 1\n\
         positions: 0.3\n\
         1\n\
         0\n\
         0\n\
         1\n"
    }

    fn matches_for(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["ms2vcf"];
        argv.extend_from_slice(args);
        build_parser().try_get_matches_from(argv).unwrap()
    }

    #[rstest]
    fn test_defaults() {
        let matches = matches_for(&["sim.ms"]);
        let config = config_from_matches(&matches);
        assert_eq!(config, ConversionConfig::default());
    }

    #[rstest]
    fn test_all_options() {
        let matches = matches_for(&[
            "sim.ms", "-p", "2", "-l", "5000", "-u", "-m", "0.1", "-c", "-s", "42",
        ]);
        let config = config_from_matches(&matches);

        assert_eq!(
            config,
            ConversionConfig {
                ploidy: 2,
                segment_length: 5000,
                unphased: true,
                missing_probability: 0.1,
                compress: true,
                seed: Some(42),
            }
        );
    }

    #[rstest]
    fn test_non_numeric_length_rejected_by_parser() {
        let res = build_parser().try_get_matches_from(["ms2vcf", "sim.ms", "-l", "long"]);
        assert!(res.is_err());
    }

    #[rstest]
    fn test_run_convert_plain(ms_output: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let input = tempdir.path().join("sim.ms");
        std::fs::write(&input, ms_output).unwrap();

        let matches = matches_for(&[input.to_str().unwrap(), "-s", "3"]);
        let summary = run_convert(&matches).unwrap();

        assert_eq!(summary.replicates, 2);
        assert_eq!(
            summary.outputs,
            vec![
                tempdir.path().join("sim_rep0.vcf").display().to_string(),
                tempdir.path().join("sim_rep1.vcf").display().to_string(),
            ]
        );
        let rep0 = std::fs::read_to_string(tempdir.path().join("sim_rep0.vcf")).unwrap();
        assert!(rep0.ends_with(
            "chr1\t100000\t.\tA\tT\t.\t.\t.\t.\t0|1\t1|0\n\
             chr1\t500000\t.\tA\tT\t.\t.\t.\t.\t1|0\t1|0\n"
        ));
        assert!(tempdir.path().join("sim_rep1.vcf").exists());
    }

    #[rstest]
    fn test_run_convert_gzipped_with_prefix(ms_output: &str) {
        let tempdir = tempfile::tempdir().unwrap();
        let input = tempdir.path().join("sim.ms.gz");
        let mut encoder = GzEncoder::new(File::create(&input).unwrap(), Compression::default());
        encoder.write_all(ms_output.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let prefix = tempdir.path().join("out/run");
        let matches = matches_for(&[
            input.to_str().unwrap(),
            "--compress",
            "--prefix",
            prefix.to_str().unwrap(),
        ]);
        run_convert(&matches).unwrap();

        let mut rep1 = String::new();
        GzDecoder::new(File::open(tempdir.path().join("out/run_rep1.vcf.gz")).unwrap())
            .read_to_string(&mut rep1)
            .unwrap();
        assert!(rep1.ends_with("chr1\t300000\t.\tA\tT\t.\t.\t.\t.\t1|0\t0|1\n"));
    }

    #[rstest]
    fn test_invalid_config_fails_before_opening_input() {
        let matches = matches_for(&["does/not/exist.ms", "-l", "10"]);
        let err = run_convert(&matches).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::LengthTooShort { length: 10, .. })
        ));
    }

    #[rstest]
    fn test_stdin_requires_prefix() {
        let matches = matches_for(&["-"]);
        assert!(run_convert(&matches).is_err());
    }

    #[rstest]
    fn test_malformed_input_reports_format_error() {
        let tempdir = tempfile::tempdir().unwrap();
        let input = tempdir.path().join("bad.ms");
        std::fs::write(&input, "segsites: 3\npositions: 0.1 0.2\n").unwrap();

        let matches = matches_for(&[input.to_str().unwrap()]);
        let err = run_convert(&matches).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Ms2VcfError>(),
            Some(Ms2VcfError::Format(_))
        ));
        assert!(!tempdir.path().join("bad_rep0.vcf").exists());
    }
}
