// Copyright (c) 2025 - Cowboy AI, Inc.
//! Declarative Failure Domain Configuration
//!
//! The failure domain block of a control plane machine set: a platform tag
//! plus one optional list of records per supported platform.

use serde::{Deserialize, Deserializer, Serialize};

use super::{AwsFailureDomain, AzureFailureDomain, GcpFailureDomain, PlatformType};
use crate::errors::{FailureDomainError, FailureDomainResult};

/// Failure domain configuration
///
/// `platform: None` means the cluster is not failure domain aware. A set
/// platform with its block left `None` is a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureDomainsConfig {
    #[serde(
        default,
        deserialize_with = "empty_platform_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub platform: Option<PlatformType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<Vec<AwsFailureDomain>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<Vec<AzureFailureDomain>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<Vec<GcpFailureDomain>>,
}

impl FailureDomainsConfig {
    /// AWS configuration with the given records
    pub fn aws(records: Vec<AwsFailureDomain>) -> Self {
        Self {
            platform: Some(PlatformType::AWS),
            aws: Some(records),
            ..Self::default()
        }
    }

    /// Azure configuration with the given records
    pub fn azure(records: Vec<AzureFailureDomain>) -> Self {
        Self {
            platform: Some(PlatformType::Azure),
            azure: Some(records),
            ..Self::default()
        }
    }

    /// GCP configuration with the given records
    pub fn gcp(records: Vec<GcpFailureDomain>) -> Self {
        Self {
            platform: Some(PlatformType::GCP),
            gcp: Some(records),
            ..Self::default()
        }
    }

    /// Load a configuration from its JSON representation
    pub fn from_json(json: &str) -> FailureDomainResult<Self> {
        serde_json::from_str(json).map_err(|e| FailureDomainError::Configuration(e.to_string()))
    }
}

fn empty_platform_as_none<'de, D>(deserializer: D) -> Result<Option<PlatformType>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = Option::<String>::deserialize(deserializer)?;
    Ok(tag.filter(|tag| !tag.is_empty()).map(PlatformType::from))
}
