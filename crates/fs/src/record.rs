use std::path::PathBuf;
use std::time::SystemTime;

use serde::Serialize;

/// Metadata for one regular file discovered during a scan.
///
/// Records are built transiently during a single scan and owned by the
/// caller afterwards; the scanner keeps no state between invocations.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Full path, anchored at the scan root. Unique within one result set.
    pub path: PathBuf,
    /// Base name of the file.
    pub name: String,
    /// Size in bytes at scan time.
    pub size: u64,
    /// Last modification time, platform-reported resolution.
    pub modified: SystemTime,
}
