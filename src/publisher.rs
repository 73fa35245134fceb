//! Artifact publication with backup rotation.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::HostsinkError;

/// Write the aggregated entries to `target`, one rendered entry per line
/// in sorted order, after rotating any pre-existing file to `target.bak`.
///
/// The rotation is a best-effort safety net, not a transaction: a crash
/// between the rename and the write leaves only the `.bak` behind. Any
/// prior `.bak` is overwritten.
pub fn publish(target: &Path, entries: &HashSet<String>) -> Result<(), HostsinkError> {
    let publish_err = |source: std::io::Error| HostsinkError::Publish {
        path: target.display().to_string(),
        source,
    };

    if target.exists() {
        let backup = backup_path(target);
        debug!("Rotating {:?} -> {:?}", target, backup);
        fs::rename(target, &backup).map_err(publish_err)?;
    }

    let mut lines: Vec<&str> = entries.iter().map(String::as_str).collect();
    lines.sort_unstable();

    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(target, content).map_err(publish_err)?;
    info!("Wrote {} entries to {:?}", entries.len(), target);

    Ok(())
}

/// Backup sibling for a target path: the path with `.bak` appended.
pub fn backup_path(target: &Path) -> PathBuf {
    let mut os = target.as_os_str().to_os_string();
    os.push(".bak");
    PathBuf::from(os)
}
