// Copyright (c) 2025 - Cowboy AI, Inc.
//! Failure Domain Models
//!
//! Value objects describing where control plane machines may be placed.
//!
//! # Value Objects
//!
//! - [`PlatformType`] - Platform tag shared with the control plane
//! - [`FailureDomain`] - Canonical, comparable failure domain identity
//! - [`AwsFailureDomain`] - Availability zone and/or subnet reference
//! - [`AzureFailureDomain`] / [`GcpFailureDomain`] - Zone-only domains
//!
//! # Inputs
//!
//! - [`FailureDomainsConfig`] - Declarative failure domain configuration
//! - [`Machine`] - Live machine carrying an opaque provider spec

pub mod aws;
pub mod azure;
pub mod config;
pub mod failure_domain;
pub mod gcp;
pub mod machine;
pub mod platform_type;

pub use aws::{
    AwsFailureDomain, AwsFailureDomainPlacement, AwsResourceFilter, AwsResourceReference,
    AwsResourceReferenceType,
};
pub use azure::AzureFailureDomain;
pub use config::FailureDomainsConfig;
pub use failure_domain::{FailureDomain, FailureDomainKind};
pub use gcp::GcpFailureDomain;
pub use machine::{Machine, MachineSpec, ObjectMeta, ProviderSpec};
pub use platform_type::PlatformType;

use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as the field's default, like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
