// Copyright (c) 2025 - Cowboy AI, Inc.
//! AWS Failure Domain Value Objects
//!
//! An AWS failure domain is an availability zone, a subnet reference, or
//! both. Subnets can be referenced by ID, by ARN, or by a set of filters
//! resolved dynamically at machine creation time.
//!
//! Machines carry the same placement inside their provider spec, using the
//! provider's own schema where the subnet reference kind is implicit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a subnet is referenced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwsResourceReferenceType {
    /// Opaque resource identifier
    Id,
    /// Fully qualified Amazon Resource Name
    Arn,
    /// Dynamic lookup by filters
    Filters,
}

impl AwsResourceReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Arn => "arn",
            Self::Filters => "filters",
        }
    }
}

impl fmt::Display for AwsResourceReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named filter with its ordered values
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AwsResourceFilter {
    pub name: String,
    #[serde(
        default,
        deserialize_with = "crate::domain::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub values: Vec<String>,
}

impl AwsResourceFilter {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for AwsResourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Name:{} Values:[{}]}}", self.name, self.values.join(" "))
    }
}

/// Reference to an AWS resource, tagged with its kind
///
/// Serialized as `{"type": "<id|arn|filters>", "<kind>": <value>}`. Fields
/// that do not match the declared type are dropped on decode.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawAwsResourceReference", into = "RawAwsResourceReference")]
pub enum AwsResourceReference {
    Id(String),
    Arn(String),
    Filters(Vec<AwsResourceFilter>),
}

impl AwsResourceReference {
    /// Reference by resource ID
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Reference by ARN
    pub fn arn(arn: impl Into<String>) -> Self {
        Self::Arn(arn.into())
    }

    /// Reference by filters
    pub fn filters(filters: Vec<AwsResourceFilter>) -> Self {
        Self::Filters(filters)
    }

    pub fn reference_type(&self) -> AwsResourceReferenceType {
        match self {
            Self::Id(_) => AwsResourceReferenceType::Id,
            Self::Arn(_) => AwsResourceReferenceType::Arn,
            Self::Filters(_) => AwsResourceReferenceType::Filters,
        }
    }

    /// Render the referenced value
    ///
    /// Filters render as `&[{Name:<name> Values:[<v> <v>]} ...]`.
    pub fn value_string(&self) -> String {
        match self {
            Self::Id(id) => id.clone(),
            Self::Arn(arn) => arn.clone(),
            Self::Filters(filters) => {
                let rendered: Vec<String> = filters.iter().map(ToString::to_string).collect();
                format!("&[{}]", rendered.join(" "))
            }
        }
    }
}

impl fmt::Display for AwsResourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{Type:{}, Value:{}}}",
            self.reference_type(),
            self.value_string()
        )
    }
}

/// Wire shape of [`AwsResourceReference`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawAwsResourceReference {
    #[serde(rename = "type")]
    reference_type: AwsResourceReferenceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filters: Option<Vec<AwsResourceFilter>>,
}

impl From<RawAwsResourceReference> for AwsResourceReference {
    fn from(raw: RawAwsResourceReference) -> Self {
        match raw.reference_type {
            AwsResourceReferenceType::Id => Self::Id(raw.id.unwrap_or_default()),
            AwsResourceReferenceType::Arn => Self::Arn(raw.arn.unwrap_or_default()),
            AwsResourceReferenceType::Filters => Self::Filters(raw.filters.unwrap_or_default()),
        }
    }
}

impl From<AwsResourceReference> for RawAwsResourceReference {
    fn from(reference: AwsResourceReference) -> Self {
        let reference_type = reference.reference_type();
        let mut raw = Self {
            reference_type,
            id: None,
            arn: None,
            filters: None,
        };
        match reference {
            AwsResourceReference::Id(id) => raw.id = Some(id),
            AwsResourceReference::Arn(arn) => raw.arn = Some(arn),
            AwsResourceReference::Filters(filters) => raw.filters = Some(filters),
        }
        raw
    }
}

/// Placement portion of an AWS failure domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsFailureDomainPlacement {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    pub availability_zone: String,
}

/// AWS failure domain record
///
/// # Examples
///
/// ```rust
/// use cim_failure_domain::domain::{AwsFailureDomain, AwsResourceReference};
///
/// let fd = AwsFailureDomain::new()
///     .with_availability_zone("us-east-1a")
///     .with_subnet(AwsResourceReference::id("subnet-0a1b2c"));
/// assert_eq!(fd.availability_zone(), Some("us-east-1a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsFailureDomain {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<AwsResourceReference>,
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    pub placement: AwsFailureDomainPlacement,
}

impl AwsFailureDomain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_availability_zone(mut self, zone: impl Into<String>) -> Self {
        self.placement.availability_zone = zone.into();
        self
    }

    pub fn with_subnet(mut self, subnet: AwsResourceReference) -> Self {
        self.subnet = Some(subnet);
        self
    }

    /// Availability zone, if one is set
    pub fn availability_zone(&self) -> Option<&str> {
        let zone = self.placement.availability_zone.as_str();
        (!zone.is_empty()).then_some(zone)
    }

    /// Body fields of the canonical form, in display order
    pub(crate) fn fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(2);
        if let Some(zone) = self.availability_zone() {
            fields.push(format!("AvailabilityZone:{zone}"));
        }
        if let Some(subnet) = &self.subnet {
            fields.push(format!("Subnet:{subnet}"));
        }
        fields
    }
}

/// Subset of the AWS machine provider spec that carries placement
///
/// Missing and `null` fields decode as their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AwsMachineProviderConfig {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    placement: AwsPlacement,
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    subnet: AwsProviderResourceReference,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AwsPlacement {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    availability_zone: String,
}

/// Provider-side reference; the kind is implied by whichever field is set
#[derive(Debug, Default, Deserialize)]
struct AwsProviderResourceReference {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    arn: Option<String>,
    #[serde(default)]
    filters: Option<Vec<AwsProviderFilter>>,
}

#[derive(Debug, Deserialize)]
struct AwsProviderFilter {
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "crate::domain::null_as_default")]
    values: Vec<String>,
}

impl AwsProviderResourceReference {
    /// Pick the reference kind: id, then arn, then filters
    ///
    /// A present filter list, even an empty one, becomes a filters
    /// reference so it matches a configured `filters: []` record. Absent or
    /// `null` filters with no id or arn mean there is no subnet.
    fn into_reference(self) -> Option<AwsResourceReference> {
        if let Some(id) = self.id {
            return Some(AwsResourceReference::id(id));
        }
        if let Some(arn) = self.arn {
            return Some(AwsResourceReference::arn(arn));
        }
        self.filters.map(|filters| {
            AwsResourceReference::filters(
                filters
                    .into_iter()
                    .map(|filter| AwsResourceFilter {
                        name: filter.name,
                        values: filter.values,
                    })
                    .collect(),
            )
        })
    }
}

impl From<AwsMachineProviderConfig> for AwsFailureDomain {
    fn from(config: AwsMachineProviderConfig) -> Self {
        Self {
            subnet: config.subnet.into_reference(),
            placement: AwsFailureDomainPlacement {
                availability_zone: config.placement.availability_zone,
            },
        }
    }
}
