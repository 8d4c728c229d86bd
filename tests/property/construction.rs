// Copyright (c) 2025 - Cowboy AI, Inc.
//! Construction Properties
//!
//! Both entry points preserve length and order, and fail whole.

use proptest::prelude::*;

use cim_failure_domain::domain::{AwsFailureDomain, Machine};
use cim_failure_domain::{
    new_failure_domains, new_failure_domains_from_machines, FailureDomainsConfig, PlatformType,
};

use crate::fixtures::aws_machine;

fn zones_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("us-(east|west)-[12][a-f]", 0..8)
}

fn unsupported_platform_strategy() -> impl Strategy<Value = PlatformType> {
    prop_oneof![
        Just(PlatformType::BareMetal),
        Just(PlatformType::OpenStack),
        Just(PlatformType::VSphere),
        Just(PlatformType::None),
        "[A-Z][a-z]{3,10}X".prop_map(PlatformType::Other),
    ]
}

proptest! {
    /// N configured records produce N identities in input order
    #[test]
    fn prop_config_preserves_order(zones in zones_strategy()) {
        let config = FailureDomainsConfig::aws(
            zones.iter().map(|zone| AwsFailureDomain::new().with_availability_zone(zone.clone())).collect(),
        );

        let failure_domains = new_failure_domains(&config).unwrap();
        prop_assert_eq!(failure_domains.len(), zones.len());
        for (fd, zone) in failure_domains.iter().zip(&zones) {
            prop_assert_eq!(fd.to_string(), format!("AWSFailureDomain{{AvailabilityZone:{zone}}}"));
        }
    }

    /// N well-formed machines produce N identities in input order
    #[test]
    fn prop_machines_preserve_order(zones in zones_strategy()) {
        let machines: Vec<Machine> = zones
            .iter()
            .enumerate()
            .map(|(i, zone)| aws_machine(&format!("master-{i}"), zone))
            .collect();

        let failure_domains = new_failure_domains_from_machines(&machines, &PlatformType::AWS).unwrap();
        prop_assert_eq!(failure_domains.len(), machines.len());
        for (fd, zone) in failure_domains.iter().zip(&zones) {
            prop_assert_eq!(fd.as_aws().and_then(|aws| aws.availability_zone()), Some(zone.as_str()));
        }
    }

    /// One machine without a provider spec fails the whole list
    #[test]
    fn prop_missing_provider_spec_fails_whole(zones in prop::collection::vec("us-east-1[a-f]", 1..6), index in any::<prop::sample::Index>()) {
        let mut machines: Vec<Machine> = zones
            .iter()
            .enumerate()
            .map(|(i, zone)| aws_machine(&format!("master-{i}"), zone))
            .collect();
        let broken = index.index(machines.len());
        machines[broken].spec.provider_spec.value = None;

        let err = new_failure_domains_from_machines(&machines, &PlatformType::AWS).unwrap_err();
        prop_assert!(err.is_missing_provider_spec());
    }

    /// Unsupported platforms are rejected by both entry points
    #[test]
    fn prop_unsupported_platform_rejected(platform in unsupported_platform_strategy(), zones in zones_strategy()) {
        let expected = format!("unsupported platform type: {platform}");

        let config = FailureDomainsConfig {
            platform: Some(platform.clone()),
            ..FailureDomainsConfig::default()
        };
        let err = new_failure_domains(&config).unwrap_err();
        prop_assert_eq!(err.to_string(), expected.clone());

        let machines: Vec<Machine> = zones.iter().map(|zone| aws_machine("master", zone)).collect();
        let err = new_failure_domains_from_machines(&machines, &platform).unwrap_err();
        prop_assert!(err.to_string().contains(&expected));
    }
}
