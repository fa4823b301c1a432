use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

use crate::consts::{MS_GZ_SUFFIX, MS_SUFFIX, STDIN_PATH};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

/// Get a reader for either a gzipped, non-gzipped file, or stdin
///
/// # Arguments
///
/// - file_path: path to the file to read, or '-' for stdin
///
/// # Returns
///
/// A `BufReader` object for a given file path or stdin.
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == STDIN_PATH {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        let file_path = Path::new(file_path_str);
        get_dynamic_reader(file_path)
    }
}

///
/// Strip a recognised ms suffix (`.ms.gz`, then `.ms`) from a file name.
/// Names without either suffix are returned whole.
///
pub fn strip_ms_suffix(file_name: &str) -> &str {
    file_name
        .strip_suffix(MS_GZ_SUFFIX)
        .or_else(|| file_name.strip_suffix(MS_SUFFIX))
        .unwrap_or(file_name)
}

///
/// Derive the output prefix for an input path: same directory, file name
/// with its ms suffix stripped. Replicate files are named `<prefix>_rep<N>.vcf`.
///
/// Returns `None` for stdin or a path without a file name.
///
pub fn output_prefix_for_input(input: &Path) -> Option<PathBuf> {
    if input.as_os_str() == STDIN_PATH {
        return None;
    }
    let file_name = input.file_name()?.to_string_lossy();
    let stem = strip_ms_suffix(&file_name);
    if stem.is_empty() {
        return None;
    }
    Some(input.with_file_name(stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::io::{BufRead, Write};

    use flate2::Compression;
    use flate2::write::GzEncoder;

    #[rstest]
    #[case("sim.ms", "sim")]
    #[case("sim.ms.gz", "sim")]
    #[case("sim.txt", "sim.txt")]
    #[case("sim", "sim")]
    #[case("sim.gz", "sim.gz")]
    #[case("my.ms.run.ms", "my.ms.run")]
    fn test_strip_ms_suffix(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(strip_ms_suffix(name), expected);
    }

    #[rstest]
    fn test_output_prefix_keeps_directory() {
        let prefix = output_prefix_for_input(Path::new("runs/a/sim.ms.gz")).unwrap();
        assert_eq!(prefix, PathBuf::from("runs/a/sim"));
    }

    #[rstest]
    fn test_output_prefix_for_stdin() {
        assert!(output_prefix_for_input(Path::new("-")).is_none());
        assert!(output_prefix_for_input(Path::new(".ms")).is_none());
    }

    #[rstest]
    fn test_dynamic_reader_plain_and_gzipped() {
        let tempdir = tempfile::tempdir().unwrap();
        let contents = "segsites: 1\npositions: 0.5\n0\n1\n";

        let plain = tempdir.path().join("sim.ms");
        std::fs::write(&plain, contents).unwrap();

        let gzipped = tempdir.path().join("sim.ms.gz");
        let mut encoder = GzEncoder::new(File::create(&gzipped).unwrap(), Compression::default());
        encoder.write_all(contents.as_bytes()).unwrap();
        encoder.finish().unwrap();

        for path in [plain, gzipped] {
            let reader = get_dynamic_reader(&path).unwrap();
            let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
            assert_eq!(lines, vec!["segsites: 1", "positions: 0.5", "0", "1"]);
        }
    }

    #[rstest]
    fn test_dynamic_reader_missing_file() {
        let res = get_dynamic_reader(Path::new("does/not/exist.ms"));
        assert!(res.is_err());
    }
}
