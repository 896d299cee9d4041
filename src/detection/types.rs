//! Core detection model types
//!
//! Everything here is created once by its pipeline stage and never mutated
//! afterwards; the emitter consumes the finished [`DetectionModel`].

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Recognized monorepo layout strategies.
///
/// The "no recognized layout" case is not a variant; it surfaces as
/// [`DetectionError::NoRecognizedMonorepo`](super::DetectionError) so that
/// callers branch on it as an ordinary result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonorepoKind {
    NpmWorkspaces,
    Turborepo,
    Nx,
}

impl MonorepoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonorepoKind::NpmWorkspaces => "npm-workspaces",
            MonorepoKind::Turborepo => "turborepo",
            MonorepoKind::Nx => "nx",
        }
    }
}

impl fmt::Display for MonorepoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package manager driving workspace commands. npm is the only supported
/// manager today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result: the layout strategy plus the package manager that
/// operates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Monorepo {
    pub kind: MonorepoKind,
    pub package_manager: PackageManager,
}

impl Monorepo {
    pub fn new(kind: MonorepoKind) -> Self {
        Self {
            kind,
            package_manager: PackageManager::Npm,
        }
    }
}

/// Runtime role of a workspace app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Frontend,
    Backend,
}

impl AppRole {
    /// Conventional port for the role. The port is derived here and nowhere
    /// else, so a descriptor's port and role can never disagree.
    pub fn default_port(&self) -> u16 {
        match self {
            AppRole::Frontend => 3000,
            AppRole::Backend => 5000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppRole::Frontend => "frontend",
            AppRole::Backend => "backend",
        }
    }
}

impl fmt::Display for AppRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analyzed record for one discovered app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppDescriptor {
    /// Workspace-relative path, forward slashes.
    pub path: String,
    /// Final segment of the path.
    pub name: String,
    pub role: AppRole,
    pub port: u16,
    /// `build` script, empty when the app declares none.
    pub build_command: String,
    /// `start` script, falling back to `dev`, empty when neither exists.
    pub start_command: String,
    pub has_database: bool,
    pub has_auth: bool,
}

/// Aggregate detection result, the sole artifact handed to the report
/// emitter.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionModel {
    pub monorepo: Monorepo,
    pub root: PathBuf,
    /// Discovery order, preserved verbatim from the workspace declaration.
    pub apps: Vec<AppDescriptor>,
}

impl DetectionModel {
    pub fn app_count(&self) -> usize {
        self.apps.len()
    }

    /// First backend app in discovery order, the deploy target for the
    /// generated configuration.
    pub fn first_backend(&self) -> Option<&AppDescriptor> {
        self.apps.iter().find(|app| app.role == AppRole::Backend)
    }

    pub fn has_frontend(&self) -> bool {
        self.apps.iter().any(|app| app.role == AppRole::Frontend)
    }

    pub fn has_database(&self) -> bool {
        self.apps.iter().any(|app| app.has_database)
    }

    pub fn has_auth(&self) -> bool {
        self.apps.iter().any(|app| app.has_auth)
    }
}
