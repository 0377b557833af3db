// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::collections::HashSet;

crate::define_id! {
    /// Test ID type for macro verification.
    pub struct TestId("tst-");
}

#[test]
fn new_ids_carry_prefix_and_fit_inline() {
    let id = TestId::new();
    assert!(id.as_str().starts_with("tst-"));
    assert_eq!(id.as_str().len(), 23);
    assert!(!id.0.is_heap_allocated());
}

#[test]
fn new_ids_are_unique() {
    let ids: HashSet<_> = (0..100).map(|_| TestId::new()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn suffix_and_short_strip_prefix() {
    let id = TestId::from_string("tst-abcdefghij");
    assert_eq!(id.suffix(), "abcdefghij");
    assert_eq!(id.short(4), "abcd");
    assert_eq!(id.short(40), "abcdefghij");
}

#[test]
fn foreign_ids_keep_their_text() {
    let id = TestId::from("legacy");
    assert_eq!(id.suffix(), "legacy");
    assert_eq!(id, "legacy");
    assert_eq!(id.to_string(), "legacy");
}

#[test]
fn serializes_as_plain_string() {
    let id = TestId::from_string("tst-1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"tst-1\"");
    let parsed: TestId = serde_json::from_str("\"tst-1\"").unwrap();
    assert_eq!(parsed, id);
}
