//! benchplot config
use std::{
    fmt,
    fs::read_to_string,
    path::{Path, PathBuf},
    process::exit,
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};

use benchplot_helper::fs::{default_config_file, DEFAULT_CONFIG_FILE_NAME};
use benchplot_parser::ParseMode;

use crate::{constants::USAGE_MESSAGE, logging::eprintln_red};

mod args;
mod chart;
mod tracing_config;

#[macro_use]
mod macros;

pub use chart::ChartConfig;
use tracing_config::TracingConfig;

/// Header to put at the start of the generated config file.
const HEADER: &str = r"## benchplot config
##
## All these config values can be set to
## their default by commenting them out with '#'.
##
## Command line arguments override the values set here.

";

/// Reads the args & config file, returning the benchmark log to plot and the [`Config`].
pub fn read_config_and_args() -> (PathBuf, Config) {
    let args = args::Args::parse();
    let Some(benchmark_log) = args.do_quick_requests() else {
        println!("{USAGE_MESSAGE}");
        exit(1);
    };

    let config_file = args.config_file.clone().or_else(find_config_file);

    let config = match config_file {
        Some(file) => match Config::read_from_path(&file) {
            Ok(config) => {
                eprintln!("Using config at: {}", file.display());
                config
            }
            Err(e) => {
                eprintln_red(&format!("{e:#}"));
                exit(1);
            }
        },
        None => Config::default(),
    };

    (benchmark_log, args.apply_args(config))
}

/// Returns the first existing config file: the current directory first, then the config directory.
fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir()
        .inspect_err(|e| tracing::debug!("Failed to get current dir: {e}"))
        .ok()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME));

    current_dir
        .into_iter()
        .chain(default_config_file())
        .find(|path| path.is_file())
}

config_struct! {
    /// The config for all of benchplot.
    #[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(deny_unknown_fields, default)]
    pub struct Config {
        /// Fail on malformed brute force lines.
        ///
        /// When disabled, lines naming the brute force benchmark
        /// that cannot be parsed are skipped like any other
        /// unrecognized line.
        ///
        /// Type         | boolean
        /// Valid values | true, false
        pub strict: bool,

        #[child = true]
        /// Configuration for benchplot's logging system, tracing.
        pub tracing: TracingConfig,

        #[child = true]
        /// Configuration for the rendered chart.
        pub chart: ChartConfig,
    }
}

impl Config {
    /// Returns a default [`Config`], with doc comments.
    pub fn documented_config() -> String {
        let str = toml::ser::to_string_pretty(&Self::default())
            .expect("default config is serializable");
        let mut doc = toml_edit::DocumentMut::from_str(&str).expect("serialized config is valid toml");
        Self::write_docs(doc.as_table_mut());
        format!("{HEADER}{doc}")
    }

    /// Attempts to read a config file in [`toml`] format from the given [`Path`].
    ///
    /// # Errors
    ///
    /// Will return an [`Err`] if the file cannot be read or if the file is not a valid [`toml`] config.
    pub fn read_from_path(file: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let file = file.as_ref();

        let file_text = read_to_string(file)
            .with_context(|| format!("Failed to read config file at: {}", file.display()))?;

        toml::from_str(&file_text)
            .with_context(|| format!("Failed to parse config file at: {}", file.display()))
    }

    /// The [`ParseMode`] to parse benchmark logs with.
    pub const fn parse_mode(&self) -> ParseMode {
        if self.strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "========== CONFIGURATION ==========\n{self:#?}\n==================================="
        )
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use toml::from_str;
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn documented_config() {
        let str = Config::documented_config();
        let conf: Config = from_str(&str).unwrap();

        assert_eq!(conf, Config::default());
    }

    #[test]
    fn documented_config_has_docs() {
        let str = Config::documented_config();

        assert!(str.starts_with(HEADER));
        assert!(str.contains("## Fail on malformed brute force lines."));
        assert!(str.contains("## Background color of the plotting area."));
        assert!(str.contains("[chart]"));
        assert!(str.contains("[tracing]"));
    }

    #[test]
    fn read_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "strict = true\n\n[tracing]\nlevel = \"warn\"\n\n[chart]\noutput = \"lq.png\"\nshow = false"
        )
        .unwrap();

        let config = Config::read_from_path(file.path()).unwrap();

        assert!(config.strict);
        assert_eq!(config.parse_mode(), ParseMode::Strict);
        assert_eq!(config.tracing.level, LevelFilter::WARN);
        assert_eq!(config.chart.output, PathBuf::from("lq.png"));
        assert!(!config.chart.show);
        // Unset values keep their default.
        assert_eq!(config.chart.width, ChartConfig::default().width);
        assert!(config.chart.grid);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[chart]\ncolour = \"red\"").unwrap();

        let err = Config::read_from_path(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::read_from_path(dir.path().join(DEFAULT_CONFIG_FILE_NAME)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn default_parse_mode_is_lenient() {
        assert_eq!(Config::default().parse_mode(), ParseMode::Lenient);
    }
}
