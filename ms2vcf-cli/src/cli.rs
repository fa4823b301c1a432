use clap::{Arg, ArgAction, Command, value_parser};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "ms2vcf";
}

/// Creates the ms2vcf Command object
pub fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Convert ms style coalescent simulation output into one VCF file per replicate.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("ms output to convert (.ms, .ms.gz, or '-' for stdin)")
                .required(true),
        )
        .arg(
            Arg::new("ploidy")
                .long("ploidy")
                .short('p')
                .value_parser(value_parser!(u8))
                .default_value("2")
                .help("Ploidy of samples. Only diploid samples are supported"),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .short('l')
                .value_parser(value_parser!(u64))
                .default_value("1000000")
                .help("Length of the segment in number of base pairs"),
        )
        .arg(
            Arg::new("unphased")
                .long("unphased")
                .short('u')
                .action(ArgAction::SetTrue)
                .help("Remove phase from genotypes"),
        )
        .arg(
            Arg::new("missing")
                .long("missing")
                .short('m')
                .value_parser(value_parser!(f64))
                .default_value("0")
                .help("Probability that each allele of a genotype is missing"),
        )
        .arg(
            Arg::new("compress")
                .long("compress")
                .short('c')
                .action(ArgAction::SetTrue)
                .help("Write gzip compressed VCF files"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_parser(value_parser!(u64))
                .help("Seed for the random number generator"),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .short('o')
                .help("Output prefix. Defaults to the input path without its .ms/.ms.gz suffix"),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .action(ArgAction::SetTrue)
                .help("Show a progress spinner"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Increase logging verbosity (-v info, -vv debug)"),
        )
}
