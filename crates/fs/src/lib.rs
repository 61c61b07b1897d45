//! Filesystem enumeration for the offline-download pipeline.
//!
//! The scanner visits every entry under a root path and produces one
//! [`FileRecord`] per regular file. Directories are descended into but never
//! emitted; symbolic links and special files are neither followed nor
//! emitted. Any unreadable path aborts the whole scan with a [`ScanError`] —
//! callers never receive a silently truncated record set.
//!
//! [`get_files`] is the sequential contract; [`scan_parallel`] walks large
//! trees with a worker pool while keeping the same record set and the same
//! fail-fast semantics.

mod error;
mod record;
mod scanner;
mod walker;

pub use error::ScanError;
pub use record::FileRecord;
pub use scanner::get_files;
pub use walker::scan_parallel;
