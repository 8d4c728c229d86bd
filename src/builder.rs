//! Failure domain construction
//!
//! The two entry points consumed by the reconciliation loop. Both are pure:
//! no I/O, no retained state, and any failure discards the partial result.

use tracing::{debug, warn};

use crate::codec::{codec_for, PlatformCodec};
use crate::domain::{FailureDomain, FailureDomainsConfig, Machine, PlatformType};
use crate::errors::{FailureDomainError, FailureDomainResult};

/// Build the failure domains declared in a configuration
///
/// An unset platform yields an empty list. A set platform with no matching
/// block fails with [`FailureDomainError::MissingConfiguration`].
pub fn new_failure_domains(config: &FailureDomainsConfig) -> FailureDomainResult<Vec<FailureDomain>> {
    let Some(platform) = &config.platform else {
        debug!("No failure domain platform configured");
        return Ok(Vec::new());
    };

    let codec = supported_codec(platform)?;
    let failure_domains = codec
        .from_config(config)
        .ok_or(FailureDomainError::MissingConfiguration)?;

    debug!(
        platform = %platform,
        count = failure_domains.len(),
        "Built failure domains from configuration"
    );
    Ok(failure_domains)
}

/// Build the failure domain of each machine, in input order
///
/// Fails on the first machine whose provider spec is absent or cannot be
/// decoded for `platform`.
pub fn new_failure_domains_from_machines(
    machines: &[Machine],
    platform: &PlatformType,
) -> FailureDomainResult<Vec<FailureDomain>> {
    let codec = supported_codec(platform)?;

    let failure_domains = machines
        .iter()
        .map(|machine| failure_domain_from_machine(codec, machine))
        .collect::<FailureDomainResult<Vec<_>>>()?;

    debug!(
        platform = %platform,
        count = failure_domains.len(),
        "Built failure domains from machines"
    );
    Ok(failure_domains)
}

fn supported_codec(platform: &PlatformType) -> FailureDomainResult<&'static dyn PlatformCodec> {
    codec_for(platform).ok_or_else(|| FailureDomainError::UnsupportedPlatform(platform.clone()))
}

fn failure_domain_from_machine(
    codec: &dyn PlatformCodec,
    machine: &Machine,
) -> FailureDomainResult<FailureDomain> {
    let Some(provider_spec) = machine.provider_spec_value() else {
        warn!(machine = machine.name(), "Machine has no provider spec");
        return Err(FailureDomainError::MissingProviderSpec);
    };

    let failure_domain = codec.from_provider_spec(provider_spec).map_err(|source| {
        warn!(machine = machine.name(), error = %source, "Could not decode provider spec");
        FailureDomainError::MalformedProviderSpec {
            machine: machine.name().to_string(),
            source,
        }
    })?;

    debug!(machine = machine.name(), failure_domain = %failure_domain, "Decoded failure domain");
    Ok(failure_domain)
}
