// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Content unlock rule
//!
//! `has_access` proves program enrollment (a redeemed code); premium
//! entitlement is a separate subscription tier reported remotely.

use serde::{Deserialize, Serialize};

/// A piece of gated content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub requires_premium: bool,
}

impl Feature {
    /// Content open to every enrolled learner
    pub fn program(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_premium: false,
        }
    }

    /// Content that also needs the premium tier
    pub fn premium(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires_premium: true,
        }
    }
}

/// Whether the remote entitlement has to be consulted at all
pub fn needs_entitlement(has_access: bool, feature: &Feature) -> bool {
    has_access && feature.requires_premium
}

/// `has_access AND (requires_premium => premium_entitled)`
pub fn can_view(has_access: bool, premium_entitled: bool, feature: &Feature) -> bool {
    has_access && (!feature.requires_premium || premium_entitled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        no_access_program = { false, false, false, false },
        no_access_premium_entitled = { false, true, true, false },
        access_program = { true, false, false, true },
        access_program_entitled = { true, true, false, true },
        access_premium_not_entitled = { true, false, true, false },
        access_premium_entitled = { true, true, true, true },
    )]
    fn combination_rule(has_access: bool, entitled: bool, premium: bool, expected: bool) {
        let feature = if premium {
            Feature::premium("masterclass")
        } else {
            Feature::program("syllabus")
        };
        assert_eq!(can_view(has_access, entitled, &feature), expected);
    }

    #[test]
    fn entitlement_only_consulted_for_premium_with_access() {
        assert!(needs_entitlement(true, &Feature::premium("x")));
        assert!(!needs_entitlement(false, &Feature::premium("x")));
        assert!(!needs_entitlement(true, &Feature::program("x")));
    }
}
