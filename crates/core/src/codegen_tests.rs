// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::code::is_well_formed;

#[test]
fn random_gen_creates_well_formed_codes() {
    let codegen = RandomCodeGen;
    for _ in 0..200 {
        let code = codegen.next();
        assert!(is_well_formed(&code), "malformed code: {}", code);
    }
}

#[test]
fn random_gen_varies_between_calls() {
    let codegen = RandomCodeGen;
    let codes: std::collections::HashSet<_> = (0..50).map(|_| codegen.next()).collect();
    assert!(codes.len() > 1);
}

#[test]
fn scripted_gen_replays_suffixes_in_order() {
    let codegen = ScriptedCodeGen::new(["AAAAAA", "BBBBBB"]);
    assert_eq!(codegen.next(), "AF-AAAAAA");
    assert_eq!(codegen.next(), "AF-BBBBBB");
    assert_eq!(codegen.next(), "AF-AAAAAA");
}

#[test]
fn scripted_gen_is_cloneable_and_shared() {
    let gen1 = ScriptedCodeGen::new(["AAAAAA", "BBBBBB", "CCCCCC"]);
    let gen2 = gen1.clone();
    assert_eq!(gen1.next(), "AF-AAAAAA");
    assert_eq!(gen2.next(), "AF-BBBBBB");
    assert_eq!(gen1.next(), "AF-CCCCCC");
}

#[test]
fn scripted_gen_with_no_suffixes_still_yields_a_code() {
    let codegen = ScriptedCodeGen::new(Vec::<String>::new());
    assert!(is_well_formed(&codegen.next()));
}
