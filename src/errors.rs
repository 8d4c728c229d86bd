//! Error types for failure domain construction

use thiserror::Error;

use crate::domain::PlatformType;

/// Errors that can occur while building failure domains
#[derive(Debug, Error)]
pub enum FailureDomainError {
    /// A platform is declared but its failure domain block is absent
    #[error("missing failure domain configuration")]
    MissingConfiguration,

    /// No codec exists for the platform
    #[error("unsupported platform type: {0}")]
    UnsupportedPlatform(PlatformType),

    /// A machine carries no provider spec payload
    #[error("machine is missing provider spec")]
    MissingProviderSpec,

    /// The provider spec payload could not be decoded for its platform
    #[error("failed to decode provider spec for machine {machine}: {source}")]
    MalformedProviderSpec {
        machine: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration document could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FailureDomainError {
    /// Whether this is the missing provider spec sentinel
    pub fn is_missing_provider_spec(&self) -> bool {
        matches!(self, Self::MissingProviderSpec)
    }
}

/// Result type for failure domain operations
pub type FailureDomainResult<T> = Result<T, FailureDomainError>;
