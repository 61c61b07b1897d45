//! Startup sequencing: seed baseline application state once at boot.
//!
//! The composition root is an explicit ordered list of [`Initializer`]s run
//! by a single function. Development-only steps carry a flag and are skipped
//! unless the service config enables dev mode; the flag is checked once
//! here, not scattered through the steps themselves.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::json;

use depot_db::{Dialect, column_name};
use depot_runtime::ServiceConfig;

/// One named startup step.
pub struct Initializer<'a> {
    pub name: &'static str,
    pub dev_only: bool,
    run: Box<dyn FnMut() -> Result<()> + 'a>,
}

impl<'a> Initializer<'a> {
    pub fn step(
        name: &'static str,
        dev_only: bool,
        run: impl FnMut() -> Result<()> + 'a,
    ) -> Self {
        Initializer {
            name,
            dev_only,
            run: Box::new(run),
        }
    }
}

/// Run initializers in declared order, fail-fast. Dev-only steps are
/// skipped unless `dev` is set.
pub fn run_initializers(dev: bool, inits: &mut [Initializer<'_>]) -> Result<()> {
    for init in inits.iter_mut() {
        if init.dev_only && !dev {
            debug!("[bootstrap] skipping dev-only step {}", init.name);
            continue;
        }

        info!("[bootstrap] running {}", init.name);
        (init.run)().with_context(|| format!("initializer {:?} failed", init.name))?;
    }

    Ok(())
}

/// Seed baseline state under `data_dir`. Invoked once per process start.
pub fn init_data(config: &ServiceConfig, data_dir: &Path) -> Result<()> {
    let mut inits = default_initializers(config, data_dir);
    run_initializers(config.dev, &mut inits)
}

/// The production startup sequence: users, then settings, then (dev only)
/// development seed data.
pub fn default_initializers<'a>(
    config: &'a ServiceConfig,
    data_dir: &'a Path,
) -> Vec<Initializer<'a>> {
    vec![
        Initializer::step("users", false, move || init_users(data_dir)),
        Initializer::step("settings", false, move || init_settings(config, data_dir)),
        Initializer::step("dev-seed", true, move || init_dev_seed(config, data_dir)),
    ]
}

fn init_users(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)
        .with_context(|| format!("create data dir {}", data_dir.display()))?;

    let path = data_dir.join("users.json");
    if path.exists() {
        return Ok(());
    }

    let users = json!([
        { "username": "admin", "role": "admin" }
    ]);
    fs::write(&path, serde_json::to_vec_pretty(&users)?)
        .with_context(|| format!("write {}", path.display()))
}

/// Existing settings are never overwritten.
fn init_settings(config: &ServiceConfig, data_dir: &Path) -> Result<()> {
    let path = data_dir.join("settings.json");
    if path.exists() {
        return Ok(());
    }

    fs::write(&path, serde_json::to_vec_pretty(config)?)
        .with_context(|| format!("write {}", path.display()))
}

/// Regenerated on every dev boot, matching the configured dialect.
fn init_dev_seed(config: &ServiceConfig, data_dir: &Path) -> Result<()> {
    let dialect = Dialect::from_kind(&config.database.kind);
    let username = column_name("username", dialect);
    let role = column_name("role", dialect);

    let path = data_dir.join("dev-seed.sql");
    let sql = format!("INSERT INTO users ({username}, {role}) VALUES ('dev', 'admin');\n");
    fs::write(&path, sql).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
