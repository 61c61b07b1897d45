//! Identifier quoting for the persistence layer.
//!
//! Column names embedded in generated SQL must be quoted per backend:
//! the Postgres family uses double quotes, everything else backticks.

use serde::{Deserialize, Serialize};

/// SQL backend family, as far as identifier quoting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Postgres,
    Other,
}

impl Dialect {
    /// Map a configured database kind string onto a quoting dialect.
    pub fn from_kind(kind: &str) -> Self {
        if kind == "postgres" {
            Dialect::Postgres
        } else {
            Dialect::Other
        }
    }
}

/// Wrap a column name for safe embedding in SQL under the given dialect.
/// Pure; no I/O, no error case.
pub fn column_name(name: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::Postgres => format!("\"{name}\""),
        Dialect::Other => format!("`{name}`"),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
