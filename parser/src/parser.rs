//! [`LogParser`] and its configuration.

//---------------------------------------------------------------------------------------------------- Use
use tracing::{debug, instrument};

use crate::{
    error::ParseError,
    patterns::{single_match, time_field, BRUTE_FORCE, VARIANT},
    series::BenchmarkData,
};

//---------------------------------------------------------------------------------------------------- Const
/// Lines containing this are brute-force lines, everything else is tried as a variant.
const BRUTE_FORCE_MARKER: &str = "BruteForce";

//---------------------------------------------------------------------------------------------------- ParseMode
/// How the parser reacts to a malformed brute-force line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseMode {
    /// Skip the line and keep going.
    #[default]
    Lenient,
    /// Stop with [`ParseError::MalformedBruteForce`].
    Strict,
}

//---------------------------------------------------------------------------------------------------- LineKind
/// What [`LogParser::parse_line`] did with a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Appended to the brute-force series.
    BruteForce,
    /// Appended to a variant series.
    Variant,
    /// Not recognized, nothing was recorded.
    Skipped,
}

//---------------------------------------------------------------------------------------------------- ParseSummary
/// Line counters of a [`LogParser`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseSummary {
    /// Lines handed to the parser.
    pub lines: usize,
    /// Lines appended to the brute-force series.
    pub brute_force: usize,
    /// Lines appended to a variant series.
    pub variants: usize,
    /// Lines that were not recognized.
    pub skipped: usize,
}

//---------------------------------------------------------------------------------------------------- LogParser
/// Classifies benchmark lines and aggregates their `(size, time)` pairs.
///
/// ```rust
/// use benchplot_parser::{LineKind, LogParser};
///
/// let mut parser = LogParser::new();
///
/// assert_eq!(parser.parse_line("BenchmarkBruteForce10-8  300  ns/op"), Ok(LineKind::BruteForce));
/// assert_eq!(parser.parse_line("BenchmarkKnnLq10Radius3-8  120  ns/op"), Ok(LineKind::Variant));
/// assert_eq!(parser.parse_line("PASS"), Ok(LineKind::Skipped));
///
/// let data = parser.finish();
/// assert_eq!(data.variants()["Knn radius 3"].sizes(), ["10"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct LogParser {
    mode: ParseMode,
    data: BenchmarkData,
    summary: ParseSummary,
}

impl LogParser {
    /// A [`ParseMode::Lenient`] parser with empty aggregates.
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser with empty aggregates using `mode`.
    pub fn with_mode(mode: ParseMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// The [`ParseMode`] in use.
    pub const fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Counters of what was parsed so far.
    pub const fn summary(&self) -> ParseSummary {
        self.summary
    }

    /// The data aggregated so far.
    pub const fn data(&self) -> &BenchmarkData {
        &self.data
    }

    /// Classify `line` and record it.
    ///
    /// A trailing `\r` is ignored.
    ///
    /// # Errors
    /// In [`ParseMode::Strict`] a line containing `BruteForce` that does not
    /// have the brute-force shape returns [`ParseError::MalformedBruteForce`].
    /// The aggregates are left untouched in that case.
    pub fn parse_line(&mut self, line: &str) -> Result<LineKind, ParseError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let kind = self.record_line(line);

        if kind == LineKind::Skipped
            && self.mode == ParseMode::Strict
            && line.contains(BRUTE_FORCE_MARKER)
        {
            return Err(ParseError::MalformedBruteForce {
                line_number: self.summary.lines,
                line: line.to_string(),
            });
        }

        self.count(kind, line);
        Ok(kind)
    }

    /// [`LogParser::parse_line`] every line of `lines` in order.
    ///
    /// # Errors
    /// Returns the first error of [`LogParser::parse_line`], lines after it
    /// are not parsed.
    #[instrument(level = "debug", skip_all, fields(mode = ?self.mode))]
    pub fn parse_lines<I>(&mut self, lines: I) -> Result<(), ParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.parse_line(line.as_ref())?;
        }

        debug!(summary = ?self.summary, "parsed lines");
        Ok(())
    }

    /// Consume the parser, returning the aggregated data.
    pub fn finish(self) -> BenchmarkData {
        self.data
    }

    /// Classify `line` and append it to the matching aggregate.
    ///
    /// Of the counters only [`ParseSummary::lines`] is updated.
    fn record_line(&mut self, line: &str) -> LineKind {
        self.summary.lines += 1;

        if line.contains(BRUTE_FORCE_MARKER) {
            self.brute_force_line(line)
        } else {
            self.variant_line(line)
        }
    }

    fn count(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::BruteForce => self.summary.brute_force += 1,
            LineKind::Variant => self.summary.variants += 1,
            LineKind::Skipped => {
                self.summary.skipped += 1;
                debug!(line_number = self.summary.lines, "skipping line: {line:?}");
            }
        }
    }

    fn brute_force_line(&mut self, line: &str) -> LineKind {
        let Some(caps) = single_match(&BRUTE_FORCE, line) else {
            return LineKind::Skipped;
        };

        let time = time_field(&caps[2], caps.get(3).map(|m| m.as_str()));
        self.data.brute_force.push(&caps[1], time);

        LineKind::BruteForce
    }

    fn variant_line(&mut self, line: &str) -> LineKind {
        let Some(caps) = single_match(&VARIANT, line) else {
            return LineKind::Skipped;
        };

        let label = format!("{} radius {}", &caps[1], &caps[3]);
        let time = time_field(&caps[4], caps.get(5).map(|m| m.as_str()));
        self.data
            .variants
            .entry(label)
            .or_default()
            .push(&caps[2], time);

        LineKind::Variant
    }
}

/// Leniently parse every line of `input`.
pub fn parse_str(input: &str) -> BenchmarkData {
    let mut parser = LogParser::new();

    for line in input.lines() {
        let kind = parser.record_line(line);
        parser.count(kind, line);
    }

    parser.finish()
}
