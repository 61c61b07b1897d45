mod config;
pub mod logging;

pub use config::{
    DB_TYPE_VAR, DEV_MODE_VAR, DatabaseConfig, PROGRAM_LOG_LEVEL, PROGRAM_NAME, ServiceConfig,
    depot_dir, xdg_or_home,
};

pub use logging::init;
