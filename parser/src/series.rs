//! Aggregated benchmark datasets.

//---------------------------------------------------------------------------------------------------- Use
use indexmap::IndexMap;

//---------------------------------------------------------------------------------------------------- Const
/// Legend label of the brute-force baseline.
pub const BRUTE_FORCE_LABEL: &str = "Brute Force";

//---------------------------------------------------------------------------------------------------- Series
/// Two parallel sequences of benchmark sizes and times.
///
/// Values are stored exactly as they appeared in the input.
///
/// # Invariant
/// `sizes().len() == times().len()`, pairs can only be appended together.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    sizes: Vec<String>,
    times: Vec<String>,
}

impl Series {
    /// Returns an empty [`Series`].
    pub const fn new() -> Self {
        Self {
            sizes: Vec::new(),
            times: Vec::new(),
        }
    }

    /// Append one `(size, time)` pair.
    pub fn push(&mut self, size: impl Into<String>, time: impl Into<String>) {
        self.sizes.push(size.into());
        self.times.push(time.into());
    }

    /// The recorded input sizes, in input order.
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// The recorded times, in input order.
    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// Number of `(size, time)` pairs.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if no pair was recorded.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterate over the `(size, time)` pairs as recorded.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sizes
            .iter()
            .zip(&self.times)
            .map(|(s, t)| (s.as_str(), t.as_str()))
    }

    /// Returns the pairs that can be drawn on a log-log chart.
    ///
    /// Pairs where either value is not a number, or is not strictly
    /// positive, are left out.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.pairs()
            .filter_map(|(size, time)| {
                let x = size.parse::<f64>().ok()?;
                let y = time.parse::<f64>().ok()?;
                (x > 0.0 && y > 0.0 && x.is_finite() && y.is_finite()).then_some((x, y))
            })
            .collect()
    }
}

//---------------------------------------------------------------------------------------------------- BenchmarkData
/// Everything extracted from one benchmark log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkData {
    pub(crate) brute_force: Series,
    pub(crate) variants: IndexMap<String, Series>,
}

impl BenchmarkData {
    /// The brute-force baseline.
    pub const fn brute_force(&self) -> &Series {
        &self.brute_force
    }

    /// Variant series keyed by label, in first-seen order.
    pub const fn variants(&self) -> &IndexMap<String, Series> {
        &self.variants
    }

    /// All series in legend order: the brute-force baseline
    /// (labelled [`BRUTE_FORCE_LABEL`]) then every variant.
    pub fn labelled_series(&self) -> impl Iterator<Item = (&str, &Series)> {
        std::iter::once((BRUTE_FORCE_LABEL, &self.brute_force))
            .chain(self.variants.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Returns `true` if no line was accepted.
    pub fn is_empty(&self) -> bool {
        self.brute_force.is_empty() && self.variants.is_empty()
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn push_keeps_pairs_aligned() {
        let mut series = Series::new();
        assert!(series.is_empty());

        series.push("10", "123");
        series.push("50", "456");

        assert_eq!(series.len(), 2);
        assert_eq!(series.sizes(), ["10", "50"]);
        assert_eq!(series.times(), ["123", "456"]);
        assert_eq!(series.pairs().collect::<Vec<_>>(), [("10", "123"), ("50", "456")]);
    }

    #[test]
    fn points_drop_unplottable_pairs() {
        let mut series = Series::new();
        series.push("10", "123");
        series.push("20", "ns");
        series.push("0", "5");
        series.push("30", "-1");
        series.push("40", "12.5");

        assert_eq!(series.points(), [(10.0, 123.0), (40.0, 12.5)]);
        // The raw values are untouched.
        assert_eq!(series.len(), 5);
    }

    #[test]
    fn labelled_series_starts_with_brute_force() {
        let mut data = BenchmarkData::default();
        assert!(data.is_empty());

        data.variants.insert("b radius 1".into(), Series::new());
        data.variants.insert("a radius 1".into(), Series::new());

        let labels = data.labelled_series().map(|(l, _)| l).collect::<Vec<_>>();
        assert_eq!(labels, [BRUTE_FORCE_LABEL, "b radius 1", "a radius 1"]);
        assert!(!data.is_empty());
    }
}
