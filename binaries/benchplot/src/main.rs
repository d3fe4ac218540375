#![doc = include_str!("../README.md")]

use std::{fs, path::Path, process::exit};

use tracing::{debug, info, warn};

use benchplot_parser::LogParser;

mod chart;
mod config;
mod constants;
mod display;
mod error;
mod logging;

use config::Config;
use constants::VERSION_BUILD;
use error::BenchplotError;
use logging::eprintln_red;

fn main() {
    // Compile the line patterns up front.
    benchplot_parser::init_lazylock_statics();

    let (benchmark_log, config) = config::read_config_and_args();

    logging::init_logging(&config);
    debug!("{config}");

    if let Err(e) = run(&benchmark_log, &config) {
        eprintln_red(&e.to_string());
        exit(1);
    }
}

/// Parse `benchmark_log` and render it.
fn run(benchmark_log: &Path, config: &Config) -> Result<(), BenchplotError> {
    info!("benchplot {VERSION_BUILD}, plotting {}", benchmark_log.display());

    let bytes = fs::read(benchmark_log).map_err(|source| BenchplotError::Read {
        path: benchmark_log.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let mut parser = LogParser::with_mode(config.parse_mode());
    parser.parse_lines(text.lines())?;

    let summary = parser.summary();
    info!(
        brute_force = summary.brute_force,
        variants = summary.variants,
        skipped = summary.skipped,
        "parsed {} lines",
        summary.lines
    );

    let data = parser.finish();
    if data.is_empty() {
        warn!("no benchmark lines found in {}", benchmark_log.display());
    }

    let output = chart::render(&data, &config.chart)?;
    info!("chart written to {}", output.display());

    if config.chart.show {
        display::show(&output);
    }

    Ok(())
}
