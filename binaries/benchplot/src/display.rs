//! Opening the rendered chart.
use std::path::Path;

use tracing::{debug, warn};

/// Open `path` in the system's default image viewer.
///
/// Failing to do so is not fatal, the chart is already on disk.
pub fn show(path: &Path) {
    match open::that(path) {
        Ok(()) => debug!("opened {}", path.display()),
        Err(e) => warn!("failed to open {}: {e}", path.display()),
    }
}
