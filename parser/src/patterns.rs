//! Compiled line patterns.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Define the pattern `static`s and an initializer that forces them.
///
/// This wraps all `static`s inside a `LazyLock` and generates
/// a [`init_lazylock_statics`] function that should be called
/// early on by binaries so the first parsed line does not pay
/// for regex compilation.
macro_rules! define_init_lazylock_statics {
    ($(
        $( #[$attr:meta] )*
        $name:ident: $t:ty = $init_fn:expr;
    )*) => {
        /// Initialize the pattern `LazyLock` statics.
        pub fn init_lazylock_statics() {
            $(
                LazyLock::force(&$name);
            )*
        }

        $(
            $(#[$attr])*
            pub(crate) static $name: LazyLock<$t> = LazyLock::new(|| $init_fn);
        )*
    };
}

define_init_lazylock_statics! {
    /// `BenchmarkBruteForce<size>-<procs> <field> [<field>]`.
    ///
    /// | Group | Value        |
    /// |-------|--------------|
    /// | 1     | size         |
    /// | 2     | first field  |
    /// | 3     | second field |
    BRUTE_FORCE: Regex = Regex::new(r"BenchmarkBruteForce(\d+)-\d*\s+(\S+)(?:\s+(\S+))?")
        .expect("brute force pattern is valid");

    /// `Benchmark<name>Lq<size>Radius<radius>-<procs> <field> [<field>]`.
    ///
    /// | Group | Value        |
    /// |-------|--------------|
    /// | 1     | name         |
    /// | 2     | size         |
    /// | 3     | radius       |
    /// | 4     | first field  |
    /// | 5     | second field |
    VARIANT: Regex = Regex::new(r"Benchmark(\w+)Lq(\d+)Radius(\d+)-\d*\s+(\S+)(?:\s+(\S+))?")
        .expect("variant pattern is valid");
}

/// Returns the captures of `re` in `line` if it matches exactly once.
///
/// A line with two benchmark names glued together is ambiguous and
/// is treated like a line that does not match at all.
pub(crate) fn single_match<'l>(re: &Regex, line: &'l str) -> Option<Captures<'l>> {
    let mut matches = re.captures_iter(line);
    let caps = matches.next()?;

    matches.next().is_none().then_some(caps)
}

/// Pick the time out of the fields following a benchmark name.
///
/// Go prints `<iterations> <ns> ns/op`, other harnesses print `<ns> ns/op`.
/// If the second field is a finite number it holds the time, otherwise the first does.
pub(crate) fn time_field<'l>(first: &'l str, second: Option<&'l str>) -> &'l str {
    match second {
        Some(second) if second.parse::<f64>().is_ok_and(f64::is_finite) => second,
        _ => first,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn brute_force_groups() {
        let caps = single_match(&BRUTE_FORCE, "BenchmarkBruteForce100-8   500   ns/op").unwrap();
        assert_eq!(&caps[1], "100");
        assert_eq!(&caps[2], "500");
        assert_eq!(caps.get(3).map(|m| m.as_str()), Some("ns/op"));
    }

    #[test]
    fn variant_groups() {
        let caps = single_match(
            &VARIANT,
            "BenchmarkNearestNeighbourLq200Radius2-4 \t 100000 \t 15321 ns/op",
        )
        .unwrap();
        assert_eq!(&caps[1], "NearestNeighbour");
        assert_eq!(&caps[2], "200");
        assert_eq!(&caps[3], "2");
        assert_eq!(&caps[4], "100000");
        assert_eq!(&caps[5], "15321");
    }

    #[test]
    fn repeated_match_is_rejected() {
        let line = "BenchmarkFooLq1Radius1-8 10 ns/op BenchmarkFooLq2Radius1-8 20 ns/op";
        assert!(single_match(&VARIANT, line).is_none());
    }

    #[test]
    fn time_field_prefers_numeric_second_field() {
        assert_eq!(time_field("500", Some("ns/op")), "500");
        assert_eq!(time_field("3000000", Some("456")), "456");
        assert_eq!(time_field("1000", Some("12.5")), "12.5");
        assert_eq!(time_field("500", None), "500");
    }

    #[test]
    fn time_field_ignores_non_finite_second_field() {
        for second in ["NaN", "nan", "inf", "-inf", "infinity", "+Infinity"] {
            assert_eq!(time_field("500", Some(second)), "500", "{second:?}");
        }
    }
}
