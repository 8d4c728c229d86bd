// Copyright (c) 2025 - Cowboy AI, Inc.
//! Failure Domain Identity
//!
//! A [`FailureDomain`] is an immutable value naming one fault-isolation
//! boundary on one platform. Its canonical string form is the comparison key
//! used by balancing and diffing, and the form written to logs.
//!
//! # Canonical Form
//!
//! `<Platform>FailureDomain{<field>, <field>}` where unset fields are
//! omitted. For AWS the fields are `AvailabilityZone:<zone>` followed by
//! `Subnet:{Type:<id|arn|filters>, Value:<value>}`. A domain with no fields
//! set renders `{}`.
//!
//! When both zone and subnet are set, both are rendered; the zone does not
//! hide the subnet. This departs from a zone-only precedence rule on purpose,
//! so two domains sharing a zone but not a subnet never share a key.
//!
//! # Serialization
//!
//! Serialized as `{"platform": "<tag>", "spec": {...}}`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AwsFailureDomain, AzureFailureDomain, GcpFailureDomain, PlatformType};

/// Platform-specific payload of a failure domain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "platform", content = "spec")]
pub enum FailureDomainKind {
    #[serde(rename = "AWS")]
    Aws(AwsFailureDomain),
    #[serde(rename = "Azure")]
    Azure(AzureFailureDomain),
    #[serde(rename = "GCP")]
    Gcp(GcpFailureDomain),
}

/// One failure domain on one platform
///
/// Built whole from a configuration record or a machine provider spec; no
/// mutation API is exposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FailureDomain {
    kind: FailureDomainKind,
}

impl FailureDomain {
    pub fn aws(fd: AwsFailureDomain) -> Self {
        Self {
            kind: FailureDomainKind::Aws(fd),
        }
    }

    pub fn azure(fd: AzureFailureDomain) -> Self {
        Self {
            kind: FailureDomainKind::Azure(fd),
        }
    }

    pub fn gcp(fd: GcpFailureDomain) -> Self {
        Self {
            kind: FailureDomainKind::Gcp(fd),
        }
    }

    /// Platform this failure domain belongs to
    pub fn platform_type(&self) -> PlatformType {
        match self.kind {
            FailureDomainKind::Aws(_) => PlatformType::AWS,
            FailureDomainKind::Azure(_) => PlatformType::Azure,
            FailureDomainKind::Gcp(_) => PlatformType::GCP,
        }
    }

    pub fn kind(&self) -> &FailureDomainKind {
        &self.kind
    }

    pub fn as_aws(&self) -> Option<&AwsFailureDomain> {
        match &self.kind {
            FailureDomainKind::Aws(fd) => Some(fd),
            _ => None,
        }
    }

    pub fn as_azure(&self) -> Option<&AzureFailureDomain> {
        match &self.kind {
            FailureDomainKind::Azure(fd) => Some(fd),
            _ => None,
        }
    }

    pub fn as_gcp(&self) -> Option<&GcpFailureDomain> {
        match &self.kind {
            FailureDomainKind::Gcp(fd) => Some(fd),
            _ => None,
        }
    }

    /// Two failure domains are equal when their canonical forms match
    pub fn equal(&self, other: &FailureDomain) -> bool {
        self.to_string() == other.to_string()
    }

    fn fields(&self) -> Vec<String> {
        match &self.kind {
            FailureDomainKind::Aws(fd) => fd.fields(),
            FailureDomainKind::Azure(fd) => fd.fields(),
            FailureDomainKind::Gcp(fd) => fd.fields(),
        }
    }
}

impl fmt::Display for FailureDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}FailureDomain{{{}}}",
            self.platform_type(),
            self.fields().join(", ")
        )
    }
}
