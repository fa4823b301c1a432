mod cli;
mod handlers;

use anyhow::Result;
use log::LevelFilter;

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.init();
}

fn main() -> Result<()> {
    let app = cli::build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    handlers::run_convert(&matches)?;

    Ok(())
}
