//! CSV export for game-tree exploration results

use std::path::Path;

use crate::{Result, t3::TreeStats};

/// Write the per-depth breakdown of an exploration as CSV, one row per
/// depth.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a row cannot be
/// written.
pub fn write_depth_breakdown(path: &Path, stats: &TreeStats) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for slice in &stats.by_depth {
        writer.serialize(slice)?;
    }
    writer.flush().map_err(|source| crate::Error::Io {
        operation: format!("flush CSV export to '{}'", path.display()),
        source,
    })?;
    Ok(())
}
