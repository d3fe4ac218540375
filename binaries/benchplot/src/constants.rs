//! General constants used throughout `benchplot`.
use const_format::formatcp;

/// `benchplot`'s semantic version (`MAJOR.MINOR.PATCH`) as string.
pub const VERSION: &str = clap::crate_version!();

/// The build type, `debug` or `release`.
pub const BUILD: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

/// [`VERSION`] + the build type.
///
/// If a debug build, the suffix is `-debug`, else it is `-release`.
pub const VERSION_BUILD: &str = formatcp!("{VERSION}-{BUILD}");

/// Printed to stdout when no benchmark log was given.
pub const USAGE_MESSAGE: &str = "need a benchmark to plot";

/// x axis description.
pub const X_AXIS_DESC: &str = "elements in search space";

/// y axis description.
pub const Y_AXIS_DESC: &str = "time(ns)";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn version() {
        let semantic_version = format!(
            "{}.{}.{}",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR"),
            env!("CARGO_PKG_VERSION_PATCH")
        );
        assert_eq!(VERSION, semantic_version);
    }

    #[test]
    fn version_build() {
        if cfg!(debug_assertions) {
            assert_eq!(VERSION_BUILD, format!("{VERSION}-debug"));
        } else {
            assert_eq!(VERSION_BUILD, format!("{VERSION}-release"));
        }
    }
}
