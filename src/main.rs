use crate::config::Config;
use crate::convert::convert;
use crate::display::display_records;
use crate::loaders::Loader;
use clap::Parser;
use eyre::WrapErr;
use std::io;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};

mod config;
mod convert;
mod display;
mod error;
mod loaders;
mod model;

#[derive(Parser)]
#[command(version, author, about)]
struct Options {
    /// Use FILE instead of student-records.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Set verbosity level (repeat for more)
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
    /// JSON object mapping student names to their records
    input: Option<PathBuf>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        3 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
    let config = Config::load(options.config.as_deref())?;
    let loader = Loader::new(
        options
            .input
            .unwrap_or_else(|| config.input_path().to_owned()),
    );
    debug!(path = %loader.path().display(), "using input file");
    let students = loader.load()?;
    let records = convert(students)
        .wrap_err_with(|| format!("cannot convert {}", loader.path().display()))?;
    display_records(&records, io::stdout().lock()).wrap_err("cannot write records")?;
    info!(records = records.len(), "records written");
    Ok(())
}
