//! Failure domains for control plane machine sets
//!
//! Builds comparable failure domain identities either from a declarative
//! configuration or from the provider specs of machines already running, so
//! both sources can be diffed and balanced against each other.

pub mod builder;
pub mod codec;
pub mod domain;
pub mod errors;

// Re-export commonly used types
pub use builder::{new_failure_domains, new_failure_domains_from_machines};
pub use codec::PlatformCodec;
pub use domain::{FailureDomain, FailureDomainsConfig, Machine, PlatformType};
pub use errors::{FailureDomainError, FailureDomainResult};
