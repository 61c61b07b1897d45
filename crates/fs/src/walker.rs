use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use crossbeam::channel::{self, RecvTimeoutError, Sender};
use log::debug;

use crate::error::ScanError;
use crate::record::FileRecord;
use crate::scanner::{make_record, stat_root};

/// Records per channel send. Larger batches reduce channel overhead but
/// increase latency before the collector sees them.
const BATCH_SIZE: usize = 64;

/// Parallel variant of [`crate::get_files`] for large trees.
///
/// Directories are distributed over `threads` workers through a shared work
/// queue; record batches fan in through a single channel and are merged by
/// the calling thread, so no two workers touch shared accumulation state.
/// The record set matches the sequential scan for the same tree, sorted by
/// path to keep the output deterministic regardless of worker interleaving.
///
/// Failure semantics are identical to the sequential scan: the first
/// unreadable path aborts the walk and is surfaced exactly once; remaining
/// workers drain the queue without descending further.
pub fn scan_parallel(root: &Path, threads: usize) -> Result<Vec<FileRecord>, ScanError> {
    let meta = stat_root(root)?;

    if meta.is_file() {
        return Ok(vec![make_record(root.to_path_buf(), &meta)?]);
    }
    if !meta.is_dir() {
        return Ok(Vec::new());
    }

    let threads = threads.max(1);
    let (work_tx, work_rx) = channel::unbounded::<PathBuf>();
    let (out_tx, out_rx) = channel::unbounded::<Result<Vec<FileRecord>, ScanError>>();

    // Outstanding directories; workers stop once this drains to zero.
    let pending = AtomicUsize::new(1);
    let failed = AtomicBool::new(false);

    let _ = work_tx.send(root.to_path_buf());

    debug!("[walk] starting parallel scan with {threads} threads");

    thread::scope(|s| {
        for _ in 0..threads {
            let work_rx = work_rx.clone();
            let work_tx = work_tx.clone();
            let out_tx = out_tx.clone();
            let pending = &pending;
            let failed = &failed;

            s.spawn(move || {
                worker_loop(work_rx, work_tx, out_tx, pending, failed);
            });
        }
    });

    drop(work_tx);
    drop(out_tx);

    let mut records = Vec::new();
    let mut first_err = None;

    while let Ok(result) = out_rx.recv() {
        match result {
            Ok(batch) => records.extend(batch),
            // Only one error is ever sent, but keep the first regardless.
            Err(e) => first_err = first_err.or(Some(e)),
        }
    }

    if let Some(e) = first_err {
        return Err(e);
    }

    records.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(records)
}

fn worker_loop(
    work_rx: channel::Receiver<PathBuf>,
    work_tx: channel::Sender<PathBuf>,
    out_tx: Sender<Result<Vec<FileRecord>, ScanError>>,
    pending: &AtomicUsize,
    failed: &AtomicBool,
) {
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    loop {
        // Timeout so idle workers notice when the queue has drained.
        match work_rx.recv_timeout(Duration::from_millis(50)) {
            Ok(dir) => {
                if !failed.load(Ordering::Acquire) {
                    if let Err(e) = scan_dir(&dir, &work_tx, &mut batch, pending) {
                        // First failure wins; later ones are dropped so the
                        // caller sees the abort exactly once.
                        if !failed.swap(true, Ordering::AcqRel) {
                            let _ = out_tx.send(Err(e));
                        }
                    }
                }

                if batch.len() >= BATCH_SIZE {
                    let to_send = std::mem::take(&mut batch);
                    if out_tx.send(Ok(to_send)).is_err() {
                        return;
                    }
                }

                if pending.fetch_sub(1, Ordering::AcqRel) == 1 {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if pending.load(Ordering::Acquire) == 0 {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    if !batch.is_empty() && !failed.load(Ordering::Acquire) {
        let _ = out_tx.send(Ok(batch));
    }
}

/// Scan one directory: queue sub-directories, batch regular-file records.
fn scan_dir(
    dir: &Path,
    work_tx: &channel::Sender<PathBuf>,
    batch: &mut Vec<FileRecord>,
    pending: &AtomicUsize,
) -> Result<(), ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::traversal(dir, e))?;

    for entry_res in entries {
        let entry = entry_res.map_err(|e| ScanError::traversal(dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ScanError::traversal(&path, e))?;

        if file_type.is_dir() {
            // Count the sub-directory before queueing it so the pending
            // counter never reads zero while work is still in flight.
            pending.fetch_add(1, Ordering::AcqRel);
            let _ = work_tx.send(path);
        } else if file_type.is_file() {
            let meta = entry.metadata().map_err(|e| ScanError::traversal(&path, e))?;
            batch.push(make_record(path, &meta)?);
        } else {
            debug!("[walk] skipping non-regular entry {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
