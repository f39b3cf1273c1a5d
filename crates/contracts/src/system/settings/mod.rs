use serde::{Deserialize, Serialize};

/// Console settings relevant to source editing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSettings {
    #[serde(default)]
    pub kustomize_versions: Vec<String>,
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginConfig {
    pub name: String,
}

impl AuthSettings {
    pub fn plugin_names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_lists_default_to_empty() {
        let settings: AuthSettings = serde_json::from_str(r#"{"url": "https://cd"}"#).unwrap();
        assert!(settings.kustomize_versions.is_empty());
        assert!(settings.plugin_names().is_empty());
    }
}
