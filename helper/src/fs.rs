//! `benchplot` directories and filenames.

//---------------------------------------------------------------------------------------------------- Use
use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

//---------------------------------------------------------------------------------------------------- Const
/// `benchplot`'s directory name inside the OS directories.
///
/// This is `Benchplot` on `Windows|macOS` and `benchplot` on everything else.
pub const BENCHPLOT_DIR: &str = {
    if cfg!(target_os = "windows") || cfg!(target_os = "macos") {
        // The standard for main directories is capitalized.
        "Benchplot"
    } else {
        // Standard on Linux + BSDs is lowercase.
        "benchplot"
    }
};

/// The file name of the config file.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "benchplot.toml";

/// The file name of the rendered chart.
pub const DEFAULT_CHART_FILE_NAME: &str = "benchmark.png";

//---------------------------------------------------------------------------------------------------- Directories
/// Local `OnceLock` containing the config directory, `None` if the OS has none.
static BENCHPLOT_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// `benchplot`'s config directory.
///
/// | OS      | PATH                                                  |
/// |---------|-------------------------------------------------------|
/// | Windows | `C:\Users\Alice\AppData\Roaming\Benchplot\`           |
/// | macOS   | `/Users/Alice/Library/Application Support/Benchplot/` |
/// | Linux   | `/home/alice/.config/benchplot/`                      |
///
/// Returns `None` if the OS config directory is unknown, or is
/// the filesystem root (e.g. `HOME=/`).
pub fn benchplot_config_dir() -> Option<&'static Path> {
    BENCHPLOT_CONFIG_DIR
        .get_or_init(|| {
            let mut path = dirs::config_dir()?;

            if path.parent().is_none() {
                return None;
            }

            path.push(BENCHPLOT_DIR);
            Some(path)
        })
        .as_deref()
}

/// The default config file inside [`benchplot_config_dir`].
pub fn default_config_file() -> Option<PathBuf> {
    benchplot_config_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME))
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn config_dir_ends_with_benchplot() {
        // CI machines without a home directory are allowed.
        let Some(dir) = benchplot_config_dir() else {
            return;
        };

        assert!(dir.ends_with(BENCHPLOT_DIR));
        assert!(dir.parent().is_some());
        assert_eq!(
            default_config_file().as_deref(),
            Some(dir.join(DEFAULT_CONFIG_FILE_NAME).as_path())
        );
    }
}
