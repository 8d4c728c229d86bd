//! Platform codecs
//!
//! Each supported platform decodes failure domains from its configuration
//! block and from its machine provider spec. Adding a platform means adding
//! a codec and an entry in [`codec_for`].

use serde::Deserialize;

use crate::domain::aws::AwsMachineProviderConfig;
use crate::domain::azure::AzureMachineProviderSpec;
use crate::domain::gcp::GcpMachineProviderSpec;
use crate::domain::{FailureDomain, FailureDomainsConfig, PlatformType};

/// Decoding capability for one platform
pub trait PlatformCodec: Send + Sync {
    /// Platform handled by this codec
    fn platform(&self) -> PlatformType;

    /// One failure domain per configured record, in order.
    ///
    /// Returns `None` when the configuration has no block for this platform.
    fn from_config(&self, config: &FailureDomainsConfig) -> Option<Vec<FailureDomain>>;

    /// Decode the failure domain a machine was placed in
    fn from_provider_spec(
        &self,
        provider_spec: &serde_json::Value,
    ) -> Result<FailureDomain, serde_json::Error>;
}

#[derive(Debug, Clone, Copy)]
pub struct AwsCodec;

impl PlatformCodec for AwsCodec {
    fn platform(&self) -> PlatformType {
        PlatformType::AWS
    }

    fn from_config(&self, config: &FailureDomainsConfig) -> Option<Vec<FailureDomain>> {
        config
            .aws
            .as_ref()
            .map(|records| records.iter().cloned().map(FailureDomain::aws).collect())
    }

    fn from_provider_spec(
        &self,
        provider_spec: &serde_json::Value,
    ) -> Result<FailureDomain, serde_json::Error> {
        let config = AwsMachineProviderConfig::deserialize(provider_spec)?;
        Ok(FailureDomain::aws(config.into()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AzureCodec;

impl PlatformCodec for AzureCodec {
    fn platform(&self) -> PlatformType {
        PlatformType::Azure
    }

    fn from_config(&self, config: &FailureDomainsConfig) -> Option<Vec<FailureDomain>> {
        config
            .azure
            .as_ref()
            .map(|records| records.iter().cloned().map(FailureDomain::azure).collect())
    }

    fn from_provider_spec(
        &self,
        provider_spec: &serde_json::Value,
    ) -> Result<FailureDomain, serde_json::Error> {
        let spec = AzureMachineProviderSpec::deserialize(provider_spec)?;
        Ok(FailureDomain::azure(spec.into()))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GcpCodec;

impl PlatformCodec for GcpCodec {
    fn platform(&self) -> PlatformType {
        PlatformType::GCP
    }

    fn from_config(&self, config: &FailureDomainsConfig) -> Option<Vec<FailureDomain>> {
        config
            .gcp
            .as_ref()
            .map(|records| records.iter().cloned().map(FailureDomain::gcp).collect())
    }

    fn from_provider_spec(
        &self,
        provider_spec: &serde_json::Value,
    ) -> Result<FailureDomain, serde_json::Error> {
        let spec = GcpMachineProviderSpec::deserialize(provider_spec)?;
        Ok(FailureDomain::gcp(spec.into()))
    }
}

/// Look up the codec for a platform
///
/// The tag is re-parsed first so `Other("AWS")` resolves like `AWS`.
pub fn codec_for(platform: &PlatformType) -> Option<&'static dyn PlatformCodec> {
    match PlatformType::parse(platform.as_str()) {
        PlatformType::AWS => Some(&AwsCodec),
        PlatformType::Azure => Some(&AzureCodec),
        PlatformType::GCP => Some(&GcpCodec),
        _ => None,
    }
}
