use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use benchplot_helper::fs::DEFAULT_CHART_FILE_NAME;

use super::macros::config_struct;

config_struct! {
    /// Chart rendering config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub struct ChartConfig {
        /// The PATH of the rendered PNG image.
        ///
        /// Relative paths are relative to the working directory.
        ///
        /// Type     | Filepath
        /// Examples | "benchmark.png", "/tmp/lq.png"
        pub output: PathBuf,

        /// Width of the image in pixels.
        ///
        /// Type         | Number
        /// Valid values | > 0
        pub width: u32,

        /// Height of the image in pixels.
        ///
        /// Type         | Number
        /// Valid values | > 0
        pub height: u32,

        /// Width of every series line in pixels.
        ///
        /// Type         | Number
        /// Examples     | 1, 2, 4
        pub line_width: u32,

        /// Background color of the plotting area.
        ///
        /// Type         | String
        /// Valid values | "#rrggbb"
        /// Examples     | "#2f4f4f", "#ffffff"
        pub background: String,

        /// Draw the grid.
        ///
        /// Type         | boolean
        /// Valid values | true, false
        pub grid: bool,

        /// Open the image in the system viewer once written.
        ///
        /// Type         | boolean
        /// Valid values | true, false
        pub show: bool,

        /// Caption drawn above the chart, no caption if empty.
        ///
        /// Type         | String
        /// Examples     | "", "golq benchmarks"
        pub caption: String,
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_CHART_FILE_NAME),
            width: 1024,
            height: 768,
            line_width: 2,
            // dark slate gray
            background: "#2f4f4f".to_string(),
            grid: true,
            show: true,
            caption: String::new(),
        }
    }
}
