use std::{path::PathBuf, process::exit};

use clap::builder::TypedValueParser;
use tracing::level_filters::LevelFilter;

use crate::config::Config;

/// benchplot args.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// The benchmark log to plot.
    pub benchmark_log: Option<PathBuf>,
    /// The PATH of the rendered chart.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Do not open the chart once written.
    #[arg(long)]
    pub no_show: bool,
    /// Fail on malformed brute force lines instead of skipping them.
    #[arg(long)]
    pub strict: bool,
    /// The minimum log level written to stderr.
    #[arg(
        long,
        value_parser = clap::builder::PossibleValuesParser::new(["off", "error", "warn", "info", "debug", "trace"])
            .try_map(|s| s.parse::<LevelFilter>()),
    )]
    pub log_level: Option<LevelFilter>,
    /// The PATH of the `benchplot` config file.
    #[arg(long)]
    pub config_file: Option<PathBuf>,
    /// Generate a config file and print it to stdout.
    #[arg(long)]
    pub generate_config: bool,
}

impl Args {
    /// Complete any quick requests asked for in [`Args`] and
    /// return the benchmark log to plot, [`None`] if it is missing.
    ///
    /// May cause the process to [`exit`].
    pub fn do_quick_requests(&self) -> Option<PathBuf> {
        if self.generate_config {
            println!("{}", Config::documented_config());
            exit(0);
        }

        self.benchmark_log.clone()
    }

    /// Apply the [`Args`] to the given [`Config`].
    pub fn apply_args(&self, mut config: Config) -> Config {
        if let Some(output) = &self.output {
            config.chart.output.clone_from(output);
        }

        if self.no_show {
            config.chart.show = false;
        }

        if self.strict {
            config.strict = true;
        }

        if let Some(level) = self.log_level {
            config.tracing.level = level;
        }

        config
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use crate::constants::USAGE_MESSAGE;

    use super::*;

    #[test]
    fn no_args_keep_config() {
        let args = Args::try_parse_from(["benchplot", "bench.txt"]).unwrap();
        assert_eq!(args.benchmark_log, Some(PathBuf::from("bench.txt")));
        assert_eq!(args.apply_args(Config::default()), Config::default());
    }

    #[test]
    fn args_override_config() {
        let args = Args::try_parse_from([
            "benchplot",
            "--no-show",
            "--strict",
            "-o",
            "out.png",
            "--log-level",
            "debug",
            "bench.txt",
        ])
        .unwrap();

        let config = args.apply_args(Config::default());
        assert!(config.strict);
        assert!(!config.chart.show);
        assert_eq!(config.chart.output, PathBuf::from("out.png"));
        assert_eq!(config.tracing.level, LevelFilter::DEBUG);
    }

    #[test]
    fn missing_benchmark_log() {
        let args = Args::try_parse_from(["benchplot"]).unwrap();
        assert_eq!(args.benchmark_log, None);
        assert_eq!(args.do_quick_requests(), None);
        assert_eq!(USAGE_MESSAGE, "need a benchmark to plot");
    }

    #[test]
    fn quick_requests_return_benchmark_log() {
        let args = Args::try_parse_from(["benchplot", "--strict", "bench.txt"]).unwrap();
        assert_eq!(args.do_quick_requests(), Some(PathBuf::from("bench.txt")));
    }

    #[test]
    fn invalid_log_level() {
        assert!(Args::try_parse_from(["benchplot", "--log-level", "loud", "bench.txt"]).is_err());
    }
}
