//! Dependency-name signal tables
//!
//! The tables encode ecosystem package-naming conventions, not logic.
//! Keeping them as data lets the classification policy grow through
//! configuration without touching the analyzer.

use serde::Deserialize;
use std::collections::HashSet;

/// Lookup tables driving per-app classification.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SignalTables {
    /// Names marking an app as a frontend, checked in both runtime and
    /// development dependencies.
    pub frontend_frameworks: HashSet<String>,
    /// Database clients and ORMs, checked in runtime dependencies.
    pub database_clients: HashSet<String>,
    /// Database tooling conventionally installed as a dev dependency.
    pub dev_database_clients: HashSet<String>,
    /// Authentication libraries, checked in runtime dependencies.
    pub auth_libraries: HashSet<String>,
}

fn name_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for SignalTables {
    fn default() -> Self {
        Self {
            frontend_frameworks: name_set(&[
                "react",
                "next",
                "vue",
                "vite",
                "@angular/core",
                "svelte",
            ]),
            database_clients: name_set(&["mongoose", "sequelize"]),
            dev_database_clients: name_set(&["prisma"]),
            auth_libraries: name_set(&["jsonwebtoken", "passport"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let signals = SignalTables::default();

        assert!(signals.frontend_frameworks.contains("react"));
        assert!(signals.frontend_frameworks.contains("@angular/core"));
        assert!(signals.database_clients.contains("mongoose"));
        assert!(signals.dev_database_clients.contains("prisma"));
        assert!(!signals.database_clients.contains("prisma"));
        assert!(signals.auth_libraries.contains("passport"));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let signals: SignalTables = toml::from_str(
            r#"
            frontend_frameworks = ["react", "solid-js"]
            "#,
        )
        .unwrap();

        assert!(signals.frontend_frameworks.contains("solid-js"));
        assert!(!signals.frontend_frameworks.contains("vue"));
        // Unmentioned tables keep their defaults.
        assert!(signals.database_clients.contains("mongoose"));
    }
}
