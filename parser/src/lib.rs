#![doc = include_str!("../README.md")]

//---------------------------------------------------------------------------------------------------- Public API
mod error;
mod parser;
mod patterns;
mod series;

pub use error::ParseError;
pub use parser::{parse_str, LineKind, LogParser, ParseMode, ParseSummary};
pub use patterns::init_lazylock_statics;
pub use series::{BenchmarkData, Series, BRUTE_FORCE_LABEL};
