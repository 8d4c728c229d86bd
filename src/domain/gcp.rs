// Copyright (c) 2025 - Cowboy AI, Inc.
//! GCP Failure Domain Value Objects

use serde::{Deserialize, Serialize};

/// GCP failure domain record, one zone within the region
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GcpFailureDomain {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    pub zone: String,
}

impl GcpFailureDomain {
    pub fn new(zone: impl Into<String>) -> Self {
        Self { zone: zone.into() }
    }

    pub(crate) fn fields(&self) -> Vec<String> {
        if self.zone.is_empty() {
            Vec::new()
        } else {
            vec![format!("Zone:{}", self.zone)]
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GcpMachineProviderSpec {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    zone: String,
}

impl From<GcpMachineProviderSpec> for GcpFailureDomain {
    fn from(spec: GcpMachineProviderSpec) -> Self {
        Self { zone: spec.zone }
    }
}
