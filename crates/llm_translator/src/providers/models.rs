//! Static provider → model allow-list.
//!
//! The list is built once, either from the built-in defaults or from a YAML
//! document, and never mutated afterwards:
//!
//! ```yaml
//! version: "1.0"
//! source: manual
//! providers:
//!   openai: [gpt-3.5-turbo, gpt-4]
//!   anthropic: [claude-3-opus, claude-3-sonnet]
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use thiserror::Error;

use crate::providers::id::ProviderId;

#[derive(Error, Debug)]
pub enum ModelAllowListError {
    #[error("failed to parse model allow-list: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("provider '{0}' must list at least one model")]
    EmptyProvider(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ProviderModelsFile {
    version: String,
    source: Option<String>,
    providers: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAllowList {
    providers: BTreeMap<String, Vec<String>>,
}

impl Default for ModelAllowList {
    fn default() -> Self {
        let mut providers = BTreeMap::new();
        providers.insert(
            ProviderId::OpenAI.name().to_string(),
            vec!["gpt-3.5-turbo".to_string(), "gpt-4".to_string()],
        );
        providers.insert(
            ProviderId::Anthropic.name().to_string(),
            vec!["claude-3-opus".to_string(), "claude-3-sonnet".to_string()],
        );
        Self { providers }
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for ModelAllowList {
    type Error = ModelAllowListError;

    fn try_from(providers: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        if let Some((name, _)) = providers.iter().find(|(_, models)| models.is_empty()) {
            return Err(ModelAllowListError::EmptyProvider(name.clone()));
        }
        Ok(Self { providers })
    }
}

impl ModelAllowList {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ModelAllowListError> {
        let file: ProviderModelsFile = serde_yaml::from_str(yaml)?;
        debug!(
            "loaded model allow-list version={} source={:?} providers={}",
            file.version,
            file.source,
            file.providers.len()
        );
        Self::try_from(file.providers)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelAllowListError> {
        let file: ProviderModelsFile = serde_yaml::from_reader(reader)?;
        Self::try_from(file.providers)
    }

    /// True if `model` appears verbatim under any provider
    pub fn contains(&self, model: &str) -> bool {
        self.provider_for(model).is_some()
    }

    pub fn provider_for(&self, model: &str) -> Option<&str> {
        self.providers
            .iter()
            .find(|(_, models)| models.iter().any(|m| m == model))
            .map(|(provider, _)| provider.as_str())
    }

    pub fn models(&self, provider: &str) -> Option<&[String]> {
        self.providers.get(provider).map(Vec::as_slice)
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn total_models(&self) -> usize {
        self.providers.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_allow_list() {
        let list = ModelAllowList::default();
        assert_eq!(list.providers().collect::<Vec<_>>(), vec!["anthropic", "openai"]);
        assert_eq!(
            list.models("openai").unwrap(),
            &["gpt-3.5-turbo".to_string(), "gpt-4".to_string()]
        );
        assert_eq!(list.total_models(), 4);
        assert!(list.contains("claude-3-sonnet"));
        assert!(!list.contains("claude-3"));
        assert_eq!(list.provider_for("gpt-4"), Some("openai"));
        assert_eq!(list.models("mistral"), None);
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
version: "1.0"
source: manual
providers:
  openai:
    - gpt-4o
  mistral:
    - mistral-large
"#;
        let list = ModelAllowList::from_yaml_str(yaml).unwrap();
        assert!(list.contains("mistral-large"));
        assert!(list.contains("gpt-4o"));
        assert!(!list.contains("gpt-4"));
        assert_eq!(list.provider_for("mistral-large"), Some("mistral"));
    }

    #[test]
    fn test_from_reader_without_source() {
        let yaml = "version: \"1.0\"\nproviders:\n  anthropic: [claude-3-haiku]\n";
        let list = ModelAllowList::from_reader(yaml.as_bytes()).unwrap();
        assert_eq!(list.provider_for("claude-3-haiku"), Some("anthropic"));
    }

    #[test]
    fn test_rejects_provider_without_models() {
        let yaml = "version: \"1.0\"\nproviders:\n  openai: []\n";
        let err = ModelAllowList::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ModelAllowListError::EmptyProvider(ref p) if p == "openai"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = ModelAllowList::from_yaml_str("providers: [not, a, map]").unwrap_err();
        assert!(matches!(err, ModelAllowListError::Parse(_)));
    }
}
