use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Args;
use log::error;

use depot_bootstrap::init_data;
use depot_fs::{FileRecord, get_files, scan_parallel};
use depot_runtime::{ServiceConfig, depot_dir};

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Root path to scan; may be a file or a directory.
    pub root: PathBuf,

    /// Worker threads; more than one selects the parallel walker.
    #[arg(long, short = 't', default_value_t = 1)]
    pub threads: usize,

    /// Emit the record set as a JSON array on stdout.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScanArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e:#}");
            eprintln!("[scan] {e:#}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: ScanArgs) -> Result<ExitCode> {
    let config = ServiceConfig::from_env();
    init_data(&config, &depot_dir()).context("bootstrap failed")?;

    let records = if args.threads > 1 {
        scan_parallel(&args.root, args.threads)?
    } else {
        get_files(&args.root)?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for rec in &records {
            print_record(rec);
        }
        eprintln!("[scan] {} files", records.len());
    }

    Ok(ExitCode::SUCCESS)
}

fn print_record(rec: &FileRecord) {
    let modified: DateTime<Local> = rec.modified.into();
    println!(
        "{}\t{}\t{}\t{}",
        rec.name,
        rec.size,
        rec.path.display(),
        modified.format("%Y-%m-%d %H:%M:%S")
    );
}
