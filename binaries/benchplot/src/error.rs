use std::{io, path::PathBuf};

use benchplot_parser::ParseError;

use crate::chart::ChartError;

/// An unrecoverable error while producing a chart.
#[derive(Debug, thiserror::Error)]
pub enum BenchplotError {
    /// The benchmark log could not be read.
    #[error("failed to read benchmark log {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    /// The benchmark log was rejected by the parser.
    #[error("parse: {0}")]
    Parse(#[from] ParseError),

    /// The chart could not be rendered.
    #[error("chart: {0}")]
    Chart(#[from] ChartError),
}
