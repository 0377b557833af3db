// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::test_support::capacity;

#[test]
fn agent_id_display_and_serde() {
    let id = AgentId(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    let parsed: AgentId = serde_json::from_str("42").unwrap();
    assert_eq!(parsed, id);
}

#[yare::parameterized(
    basic        = { KnowledgeLevel::Basic, 1 },
    intermediate = { KnowledgeLevel::Intermediate, 2 },
    advanced     = { KnowledgeLevel::Advanced, 3 },
)]
fn knowledge_level_serializes_as_weight(level: KnowledgeLevel, weight: u8) {
    assert_eq!(level.weight(), weight);
    assert_eq!(serde_json::to_string(&level).unwrap(), weight.to_string());
    let parsed: KnowledgeLevel = serde_json::from_str(&weight.to_string()).unwrap();
    assert_eq!(parsed, level);
}

#[yare::parameterized(
    zero = { "0" },
    four = { "4" },
    text = { "\"advanced\"" },
)]
fn knowledge_level_rejects_out_of_range(json: &str) {
    assert!(serde_json::from_str::<KnowledgeLevel>(json).is_err());
}

#[yare::parameterized(
    digit     = { "3", Some(KnowledgeLevel::Advanced) },
    name      = { "Intermediate", Some(KnowledgeLevel::Intermediate) },
    padded    = { " basic ", Some(KnowledgeLevel::Basic) },
    unknown   = { "expert", None },
)]
fn knowledge_level_parse(input: &str, expected: Option<KnowledgeLevel>) {
    assert_eq!(KnowledgeLevel::parse(input), expected);
}

#[test]
fn new_agent_rejects_zero_capacity() {
    let err = Agent::new(7u64, "Ana", "ana@example.com", 0).unwrap_err();
    assert_eq!(err, AgentError::InvalidCapacity(AgentId(7)));
}

#[test]
fn deserializing_zero_capacity_fails() {
    let json = r#"{"id":1,"name":"Ana","email":"a@x","max_capacity":0}"#;
    assert!(serde_json::from_str::<Agent>(json).is_err());
}

#[test]
fn deserializing_minimal_agent_applies_defaults() {
    let json = r#"{"id":1,"name":"Ana","email":"a@x","max_capacity":8}"#;
    let agent: Agent = serde_json::from_str(json).unwrap();
    assert!(agent.is_active);
    assert_eq!(agent.current_workload, 0);
    assert!(agent.expertise.is_empty());
}

#[test]
fn validate_rejects_case_insensitive_duplicates() {
    let agent = Agent::builder()
        .expertise(vec![
            Expertise::new("MagaluPay", KnowledgeLevel::Basic),
            Expertise::new("magalupay", KnowledgeLevel::Advanced),
        ])
        .build();
    assert!(matches!(agent.validate(), Err(AgentError::DuplicateExpertise { .. })));
}

#[test]
fn validate_rejects_blank_names() {
    let agent =
        Agent::builder().expertise(vec![Expertise::new("   ", KnowledgeLevel::Basic)]).build();
    assert_eq!(agent.validate(), Err(AgentError::BlankSystemName(AgentId(1))));
}

#[test]
fn upsert_updates_existing_level_case_insensitively() {
    let mut agent =
        Agent::builder().expertise(vec![Expertise::new("Checkout", KnowledgeLevel::Basic)]).build();

    agent.upsert_expertise("CHECKOUT", KnowledgeLevel::Advanced).unwrap();

    assert_eq!(agent.expertise.len(), 1);
    assert_eq!(agent.expertise[0].system_name, "Checkout");
    assert_eq!(agent.expertise[0].level, KnowledgeLevel::Advanced);
}

#[test]
fn upsert_appends_trimmed_name() {
    let mut agent = Agent::builder().build();
    agent.upsert_expertise("  Fiscal  ", KnowledgeLevel::Intermediate).unwrap();
    assert_eq!(agent.expertise, vec![Expertise::new("Fiscal", KnowledgeLevel::Intermediate)]);
}

#[test]
fn upsert_rejects_blank_name() {
    let mut agent = Agent::builder().build();
    assert!(agent.upsert_expertise(" ", KnowledgeLevel::Basic).is_err());
    assert!(agent.expertise.is_empty());
}

#[test]
fn remove_expertise_is_case_insensitive() {
    let mut agent =
        Agent::builder().expertise(vec![Expertise::new("Checkout", KnowledgeLevel::Basic)]).build();
    assert!(agent.remove_expertise("checkout"));
    assert!(!agent.remove_expertise("checkout"));
    assert!(agent.expertise.is_empty());
}

#[test]
fn remote_agent_uses_default_capacity_when_missing() {
    let remote = RemoteAgent {
        id: AgentId(3),
        name: "Bia".into(),
        email: "bia@x".into(),
        max_capacity: None,
        current_workload: 2,
        active: false,
        avatar_url: None,
        group_ids: vec!["g1".into()],
    };
    let agent = remote.into_agent(8).unwrap();
    assert_eq!(agent.max_capacity, capacity(8));
    assert_eq!(agent.current_workload, 2);
    assert!(!agent.is_active);
    assert_eq!(agent.group_ids, vec!["g1".to_string()]);
}

#[test]
fn remote_agent_with_zero_capacity_is_rejected() {
    let remote: RemoteAgent =
        serde_json::from_str(r#"{"id":3,"name":"Bia","max_capacity":0}"#).unwrap();
    assert_eq!(remote.into_agent(8), Err(AgentError::InvalidCapacity(AgentId(3))));
}

#[test]
fn merge_keeps_local_expertise_and_remote_fields() {
    let local = vec![Agent::builder()
        .id(1u64)
        .name("Old Name")
        .current_workload(5)
        .expertise(vec![Expertise::new("Fiscal", KnowledgeLevel::Advanced)])
        .build()];
    let remote = vec![
        Agent::builder().id(1u64).name("New Name").build(),
        Agent::builder().id(2u64).name("Fresh").build(),
    ];

    let merged = merge_roster(remote, &local);

    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].name, "New Name");
    assert_eq!(merged[0].current_workload, 0);
    assert_eq!(merged[0].expertise, local[0].expertise);
    assert!(merged[1].expertise.is_empty());
}

#[test]
fn merge_with_empty_remote_keeps_local() {
    let local = vec![Agent::builder().id(9u64).build()];
    assert_eq!(merge_roster(Vec::new(), &local), local);
}

#[test]
fn group_membership() {
    let agent = Agent::builder().group_ids(vec!["a".into(), "b".into()]).build();
    assert!(agent.in_any_group(&["b".to_string()]));
    assert!(!agent.in_any_group(&["c".to_string()]));
}
