use thiserror::Error;

use crate::providers::models::ModelAllowListError;
use crate::providers::request::ProviderRequestError;

/// Raised when a model name matches none of the known prefixes, so no
/// target shape can be chosen for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported model: {model}")]
pub struct UnsupportedModelError {
    pub model: String,
}

impl UnsupportedModelError {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum TranslatorError {
    #[error(transparent)]
    UnsupportedModel(#[from] UnsupportedModelError),
    #[error(transparent)]
    AllowList(#[from] ModelAllowListError),
    #[error(transparent)]
    Request(#[from] ProviderRequestError),
}
