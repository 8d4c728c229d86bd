// Copyright (c) 2025 - Cowboy AI, Inc.
//! Platform Type Domain Model
//!
//! The platform tag shared with the rest of the control plane. Every failure
//! domain belongs to exactly one platform, and the tag selects the codec used
//! to decode configuration records and machine provider specs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cloud or infrastructure platform tag
///
/// Tags this build does not know are kept verbatim in [`PlatformType::Other`]
/// so that rejection messages can name them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformType {
    /// Amazon Web Services
    AWS,
    /// Microsoft Azure
    Azure,
    /// Bare metal hosts
    BareMetal,
    /// Google Cloud Platform
    GCP,
    /// Libvirt virtual machines
    Libvirt,
    /// OpenStack private cloud
    OpenStack,
    /// No platform integration
    None,
    /// VMware vSphere
    VSphere,
    /// oVirt virtualization
    OVirt,
    /// IBM Cloud
    IBMCloud,
    /// KubeVirt virtual machines
    KubeVirt,
    /// Equinix Metal
    EquinixMetal,
    /// IBM Power Virtual Server
    PowerVS,
    /// Alibaba Cloud
    AlibabaCloud,
    /// Nutanix
    Nutanix,
    /// Externally managed platform
    External,
    /// Unrecognized tag
    Other(String),
}

impl PlatformType {
    /// Get the canonical tag string
    pub fn as_str(&self) -> &str {
        match self {
            Self::AWS => "AWS",
            Self::Azure => "Azure",
            Self::BareMetal => "BareMetal",
            Self::GCP => "GCP",
            Self::Libvirt => "Libvirt",
            Self::OpenStack => "OpenStack",
            Self::None => "None",
            Self::VSphere => "VSphere",
            Self::OVirt => "oVirt",
            Self::IBMCloud => "IBMCloud",
            Self::KubeVirt => "KubeVirt",
            Self::EquinixMetal => "EquinixMetal",
            Self::PowerVS => "PowerVS",
            Self::AlibabaCloud => "AlibabaCloud",
            Self::Nutanix => "Nutanix",
            Self::External => "External",
            Self::Other(tag) => tag,
        }
    }

    /// Parse from the canonical tag string
    ///
    /// Matching is exact; anything else is carried as [`PlatformType::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "AWS" => Self::AWS,
            "Azure" => Self::Azure,
            "BareMetal" => Self::BareMetal,
            "GCP" => Self::GCP,
            "Libvirt" => Self::Libvirt,
            "OpenStack" => Self::OpenStack,
            "None" => Self::None,
            "VSphere" => Self::VSphere,
            "oVirt" => Self::OVirt,
            "IBMCloud" => Self::IBMCloud,
            "KubeVirt" => Self::KubeVirt,
            "EquinixMetal" => Self::EquinixMetal,
            "PowerVS" => Self::PowerVS,
            "AlibabaCloud" => Self::AlibabaCloud,
            "Nutanix" => Self::Nutanix,
            "External" => Self::External,
            other => Self::Other(other.to_string()),
        }
    }

    /// Check whether failure domains can be built for this platform
    pub fn is_failure_domain_aware(&self) -> bool {
        crate::codec::codec_for(self).is_some()
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PlatformType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for PlatformType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<PlatformType> for String {
    fn from(platform: PlatformType) -> Self {
        platform.as_str().to_string()
    }
}
