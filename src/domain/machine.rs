// Copyright (c) 2025 - Cowboy AI, Inc.
//! Machine Model
//!
//! Only what failure domain extraction needs from a machine: its name, for
//! diagnostics, and the opaque provider spec payload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
}

/// Raw provider spec; the payload schema depends on the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSpec {
    #[serde(default)]
    pub provider_spec: ProviderSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: MachineSpec,
}

impl Machine {
    pub fn new(name: impl Into<String>, provider_spec: Option<serde_json::Value>) -> Self {
        Self {
            metadata: ObjectMeta { name: name.into() },
            spec: MachineSpec {
                provider_spec: ProviderSpec {
                    value: provider_spec,
                },
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// The provider spec payload, treating JSON `null` as absent
    pub fn provider_spec_value(&self) -> Option<&serde_json::Value> {
        self.spec
            .provider_spec
            .value
            .as_ref()
            .filter(|value| !value.is_null())
    }
}
