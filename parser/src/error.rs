//! Parser errors.

/// Errors returned by [`LogParser`](crate::LogParser).
///
/// Only [`ParseMode::Strict`](crate::ParseMode::Strict) produces errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A line names the brute-force benchmark but is not shaped like one.
    #[error("malformed brute force line {line_number}: {line:?}")]
    MalformedBruteForce {
        /// 1-based index of the line in the input.
        line_number: usize,
        /// The offending line.
        line: String,
    },
}
