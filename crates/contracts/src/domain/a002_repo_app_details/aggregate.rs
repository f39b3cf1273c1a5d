use crate::domain::a001_application::{
    Application, ApplicationSource, HelmFileParameter, HelmParameter,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Manifest generation tool detected for an application source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceType {
    Helm,
    Kustomize,
    Plugin,
    #[default]
    Directory,
    #[serde(other)]
    Unknown,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Helm => "Helm",
            SourceType::Kustomize => "Kustomize",
            SourceType::Plugin => "Plugin",
            SourceType::Directory => "Directory",
            SourceType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of inspecting the application's repository path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoAppDetails {
    #[serde(rename = "type", default)]
    pub app_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helm: Option<HelmAppSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kustomize: Option<KustomizeAppSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<PluginAppSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<DirectoryAppSpec>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelmAppSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value_files: Vec<String>,
    /// Contents of the chart's `values.yaml`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,
    #[serde(default)]
    pub parameters: Vec<HelmParameter>,
    #[serde(default)]
    pub file_parameters: Vec<HelmFileParameter>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KustomizeAppSpec {
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginAppSpec {
    /// `None` when the plugin publishes no announcement at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters_announcement: Option<Vec<ParameterAnnouncement>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryAppSpec {}

/// Request body for inspecting an application's source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoAppDetailsQuery {
    pub source: ApplicationSource,
    pub app_name: String,
    pub app_project: String,
}

impl RepoAppDetailsQuery {
    pub fn for_application(app: &Application) -> Self {
        Self {
            source: app.spec.source.clone(),
            app_name: app.metadata.name.clone(),
            app_project: app.project().to_string(),
        }
    }
}

/// Plugin-declared metadata for one parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterAnnouncement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<BTreeMap<String, String>>,
}

impl ParameterAnnouncement {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_details() {
        let details: RepoAppDetails = serde_json::from_str(
            r#"{
                "type": "Plugin",
                "plugin": {"parametersAnnouncement": [
                    {"name": "replicas", "title": "Replicas", "collectionType": "string", "string": "1"}
                ]}
            }"#,
        )
        .unwrap();

        assert_eq!(details.app_type, SourceType::Plugin);
        let announcements = details.plugin.unwrap().parameters_announcement.unwrap();
        assert_eq!(announcements[0].display_title(), "Replicas");
        assert_eq!(announcements[0].string.as_deref(), Some("1"));
    }

    #[test]
    fn test_query_for_application() {
        let app = Application::from_json(
            r#"{"metadata": {"name": "gb"}, "spec": {"project": "team-a", "source": {"repoURL": "r"}}}"#,
        )
        .unwrap();
        let query = RepoAppDetailsQuery::for_application(&app);
        assert_eq!(query.app_project, "team-a");
        assert_eq!(query.source.repo_url, "r");

        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(encoded["appName"], "gb");
    }

    #[test]
    fn test_unknown_type() {
        let details: RepoAppDetails = serde_json::from_str(r#"{"type": "Ksonnet"}"#).unwrap();
        assert_eq!(details.app_type, SourceType::Unknown);
        assert_eq!(details.app_type.as_str().to_uppercase(), "UNKNOWN");
    }
}
