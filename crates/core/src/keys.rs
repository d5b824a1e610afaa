// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted key namespace
//!
//! The registry and the ledger write disjoint keys, so neither needs to
//! coordinate with the other.

/// Registry: the full access code list
pub const ACCESS_CODES: &str = "accessCodes";

pub const COMPLETED_LESSONS: &str = "completedLessons";
pub const MODULE_PROGRESS: &str = "moduleProgress";
pub const NOTES: &str = "notes";
pub const PRACTICE_TIME: &str = "practiceTime";
pub const HAS_ACCESS: &str = "hasAccess";
pub const ACCESS_CODE: &str = "accessCode";
pub const USER_NAME: &str = "userName";
pub const USER_EMAIL: &str = "userEmail";
pub const ENROLLMENT_DATE: &str = "enrollmentDate";
pub const ONBOARDING_COMPLETE: &str = "onboardingComplete";
pub const DARK_MODE: &str = "darkMode";

/// Every key owned by the progress ledger, cleared together on logout
pub const LEDGER_KEYS: &[&str] = &[
    COMPLETED_LESSONS,
    MODULE_PROGRESS,
    NOTES,
    PRACTICE_TIME,
    HAS_ACCESS,
    ACCESS_CODE,
    USER_NAME,
    USER_EMAIL,
    ENROLLMENT_DATE,
    ONBOARDING_COMPLETE,
    DARK_MODE,
];
