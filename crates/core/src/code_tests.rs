// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use yare::parameterized;

#[parameterized(
    already_canonical = { "AF-7K2M9P", "AF-7K2M9P" },
    lowercase = { "af-7k2m9p", "AF-7K2M9P" },
    padded = { "  af-7k2m9p \n", "AF-7K2M9P" },
    empty = { "   ", "" },
)]
fn normalize_trims_and_uppercases(input: &str, expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[parameterized(
    valid = { "AF-7K2M9P", true },
    all_digits = { "AF-234567", true },
    missing_prefix = { "7K2M9P", false },
    wrong_prefix = { "AB-7K2M9P", false },
    too_short = { "AF-7K2M9", false },
    too_long = { "AF-7K2M9PQ", false },
    confusable_zero = { "AF-0K2M9P", false },
    confusable_o = { "AF-OK2M9P", false },
    confusable_one = { "AF-1K2M9P", false },
    confusable_i = { "AF-IK2M9P", false },
    lowercase_not_normalized = { "af-7k2m9p", false },
)]
fn well_formed_codes(code: &str, expected: bool) {
    assert_eq!(is_well_formed(code), expected);
}

#[test]
fn alphabet_excludes_confusable_characters() {
    for c in [b'0', b'O', b'1', b'I'] {
        assert!(!CODE_ALPHABET.contains(&c));
    }
    assert_eq!(CODE_ALPHABET.len(), 32);
}

#[test]
fn new_code_is_unredeemed() {
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let code = AccessCode::new("AF-7K2M9P", at);
    assert!(!code.is_redeemed());
    assert_eq!(code.redeemed_at, None);
}

#[test]
fn serializes_with_legacy_field_names() {
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    let mut code = AccessCode::new("AF-7K2M9P", at);
    code.mark_redeemed("a@b.com", at);

    let json = serde_json::to_value(&code).unwrap();
    assert_eq!(json["code"], "AF-7K2M9P");
    assert_eq!(json["usedBy"], "a@b.com");
    assert!(json["createdAt"].is_string());
    assert!(json["usedAt"].is_string());
}

#[test]
fn deserializes_payload_from_earlier_clients() {
    let raw = r#"{"code":"AF-ABCDEF","createdAt":"2024-02-01T10:00:00.000Z","usedBy":null,"usedAt":null}"#;
    let code: AccessCode = serde_json::from_str(raw).unwrap();
    assert_eq!(code.code, "AF-ABCDEF");
    assert!(!code.is_redeemed());
}
