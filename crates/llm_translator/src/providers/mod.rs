//! Provider identities, the model allow-list, and full request bodies
//!
pub mod id;
pub mod models;
pub mod request;

pub use id::ProviderId;
pub use models::{ModelAllowList, ModelAllowListError};
pub use request::{ProviderRequest, ProviderRequestError, ProviderRequestType};
