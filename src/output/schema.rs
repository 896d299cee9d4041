//! Detection report schema
//!
//! The report is the machine-readable artifact of a detection run. Key
//! names follow the JavaScript ecosystem's camelCase convention so the
//! report reads naturally next to the manifests it describes.

use crate::detection::types::{AppDescriptor, DetectionModel};
use serde::Serialize;

/// Root of the detection report document.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub monorepo: MonorepoReport,
    pub apps: Vec<AppReport>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonorepoReport {
    #[serde(rename = "type")]
    pub kind: String,
    pub package_manager: String,
    pub root_path: String,
    pub apps_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppReport {
    pub path: String,
    pub name: String,
    #[serde(rename = "type")]
    pub role: String,
    pub port: u16,
    pub build_command: String,
    pub start_command: String,
    pub has_database: bool,
    pub has_auth: bool,
}

impl From<&AppDescriptor> for AppReport {
    fn from(app: &AppDescriptor) -> Self {
        Self {
            path: app.path.clone(),
            name: app.name.clone(),
            role: app.role.to_string(),
            port: app.port,
            build_command: app.build_command.clone(),
            start_command: app.start_command.clone(),
            has_database: app.has_database,
            has_auth: app.has_auth,
        }
    }
}

impl From<&DetectionModel> for DetectionReport {
    fn from(model: &DetectionModel) -> Self {
        Self {
            monorepo: MonorepoReport {
                kind: model.monorepo.kind.to_string(),
                package_manager: model.monorepo.package_manager.to_string(),
                root_path: model.root.display().to_string(),
                apps_count: model.app_count(),
            },
            apps: model.apps.iter().map(AppReport::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::types::{AppRole, Monorepo, MonorepoKind};
    use std::path::PathBuf;

    fn sample_model() -> DetectionModel {
        DetectionModel {
            monorepo: Monorepo::new(MonorepoKind::NpmWorkspaces),
            root: PathBuf::from("/repo"),
            apps: vec![AppDescriptor {
                path: "apps/web".to_string(),
                name: "web".to_string(),
                role: AppRole::Frontend,
                port: AppRole::Frontend.default_port(),
                build_command: "vite build".to_string(),
                start_command: "vite".to_string(),
                has_database: false,
                has_auth: true,
            }],
        }
    }

    #[test]
    fn test_report_keys_are_camel_case() {
        let report = DetectionReport::from(&sample_model());
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();

        assert_eq!(json["monorepo"]["type"], "npm-workspaces");
        assert_eq!(json["monorepo"]["packageManager"], "npm");
        assert_eq!(json["monorepo"]["rootPath"], "/repo");
        assert_eq!(json["monorepo"]["appsCount"], 1);

        let app = &json["apps"][0];
        assert_eq!(app["path"], "apps/web");
        assert_eq!(app["type"], "frontend");
        assert_eq!(app["port"], 3000);
        assert_eq!(app["buildCommand"], "vite build");
        assert_eq!(app["startCommand"], "vite");
        assert_eq!(app["hasDatabase"], false);
        assert_eq!(app["hasAuth"], true);
    }

    #[test]
    fn test_report_preserves_app_order() {
        let mut model = sample_model();
        model.apps.push(AppDescriptor {
            path: "server".to_string(),
            name: "server".to_string(),
            role: AppRole::Backend,
            port: AppRole::Backend.default_port(),
            build_command: String::new(),
            start_command: "node index.js".to_string(),
            has_database: true,
            has_auth: false,
        });

        let report = DetectionReport::from(&model);
        let paths: Vec<&str> = report.apps.iter().map(|app| app.path.as_str()).collect();
        assert_eq!(paths, vec!["apps/web", "server"]);
    }
}
