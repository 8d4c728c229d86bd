// Copyright (c) 2025 - Cowboy AI, Inc.
//! Canonical Form Properties
//!
//! The canonical string is a comparison key, so it must be deterministic,
//! preserve filter order, and agree with value equality.

use proptest::prelude::*;

use cim_failure_domain::domain::{
    AwsFailureDomain, AwsResourceFilter, AwsResourceReference, AzureFailureDomain,
};
use cim_failure_domain::FailureDomain;

fn zone_strategy() -> impl Strategy<Value = String> {
    "[a-z]{2}-[a-z]{4,9}-[1-3][a-f]"
}

fn filter_strategy() -> impl Strategy<Value = AwsResourceFilter> {
    (
        "tag:[A-Za-z]{1,8}",
        prop::collection::vec("[a-z0-9-]{1,16}", 0..4),
    )
        .prop_map(|(name, values)| AwsResourceFilter::new(name, values))
}

fn subnet_strategy() -> impl Strategy<Value = AwsResourceReference> {
    prop_oneof![
        "subnet-[0-9a-f]{8}".prop_map(AwsResourceReference::id),
        "arn:aws:ec2:[a-z0-9-]{4,12}:[0-9]{12}:subnet/subnet-[0-9a-f]{8}"
            .prop_map(AwsResourceReference::arn),
        prop::collection::vec(filter_strategy(), 0..4).prop_map(AwsResourceReference::filters),
    ]
}

fn aws_failure_domain_strategy() -> impl Strategy<Value = AwsFailureDomain> {
    (
        prop::option::of(zone_strategy()),
        prop::option::of(subnet_strategy()),
    )
        .prop_map(|(zone, subnet)| {
            let mut fd = AwsFailureDomain::new();
            if let Some(zone) = zone {
                fd = fd.with_availability_zone(zone);
            }
            if let Some(subnet) = subnet {
                fd = fd.with_subnet(subnet);
            }
            fd
        })
}

proptest! {
    /// Formatting the same identity twice yields the same string
    #[test]
    fn prop_format_is_deterministic(fd in aws_failure_domain_strategy()) {
        let fd = FailureDomain::aws(fd);
        prop_assert_eq!(fd.to_string(), fd.clone().to_string());
    }

    /// Every AWS identity is wrapped in the platform prefix and braces
    #[test]
    fn prop_format_envelope(fd in aws_failure_domain_strategy()) {
        let rendered = FailureDomain::aws(fd).to_string();
        prop_assert!(rendered.starts_with("AWSFailureDomain{"), "missing prefix: {}", rendered);
        prop_assert!(rendered.ends_with('}'), "missing closing brace: {}", rendered);
    }

    /// A zone always renders first, and a subnet is rendered whenever set
    #[test]
    fn prop_zone_and_subnet_fields(zone in zone_strategy(), subnet in subnet_strategy()) {
        let rendered = FailureDomain::aws(
            AwsFailureDomain::new()
                .with_availability_zone(zone.clone())
                .with_subnet(subnet.clone()),
        )
        .to_string();

        let expected_prefix = format!("AWSFailureDomain{{AvailabilityZone:{zone}, Subnet:");
        prop_assert!(rendered.starts_with(&expected_prefix));
        let expected_type = format!("Type:{},", subnet.reference_type());
        prop_assert!(rendered.contains(&expected_type));
    }

    /// Filters render in their declared order
    #[test]
    fn prop_filter_order_preserved(filters in prop::collection::vec(filter_strategy(), 2..5)) {
        let rendered = AwsResourceReference::filters(filters.clone()).to_string();

        let mut cursor = 0;
        for filter in &filters {
            let needle = filter.to_string();
            let found = rendered[cursor..].find(&needle);
            prop_assert!(found.is_some(), "{} not found after offset {}", needle, cursor);
            cursor += found.unwrap_or_default() + needle.len();
        }
    }

    /// Equal values always share a canonical form
    #[test]
    fn prop_equality_implies_same_string(a in aws_failure_domain_strategy(), b in aws_failure_domain_strategy()) {
        let (a, b) = (FailureDomain::aws(a), FailureDomain::aws(b));
        if a == b {
            prop_assert_eq!(a.to_string(), b.to_string());
        }
        prop_assert!(a.equal(&a.clone()));
    }

    /// Identities on different platforms never compare equal
    #[test]
    fn prop_platforms_never_collide(zone in zone_strategy()) {
        let aws = FailureDomain::aws(AwsFailureDomain::new().with_availability_zone(zone.clone()));
        let azure = FailureDomain::azure(AzureFailureDomain::new(zone));
        prop_assert!(!aws.equal(&azure));
        prop_assert_ne!(aws, azure);
    }
}
