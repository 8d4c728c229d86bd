// Copyright (c) 2025 - Cowboy AI, Inc.
//! Azure Failure Domain Value Objects

use serde::{Deserialize, Serialize};

/// Azure failure domain record, one availability zone
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AzureFailureDomain {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    pub zone: String,
}

impl AzureFailureDomain {
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

/// Subset of the Azure machine provider spec that carries placement
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AzureMachineProviderSpec {
    #[serde(default)]
    zone: Option<String>,
}

impl From<AzureMachineProviderSpec> for AzureFailureDomain {
    fn from(spec: AzureMachineProviderSpec) -> Self {
        Self {
            zone: spec.zone.unwrap_or_default(),
        }
    }
}
