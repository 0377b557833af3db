// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn sync_keeps_remote_order_and_fields() {
    let desk = desk();
    let agents = desk.agents();
    assert_eq!(agents.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), vec!["Ana", "Bruno"]);
    assert_eq!(agents[1].current_workload, 4);
}

#[test]
fn sync_fills_missing_capacity_from_settings() {
    let desk = Desk::in_memory(Settings::default().default_max_capacity(5), FakeClock::new());
    let mut agent = remote(1, "Ana");
    agent.max_capacity = None;

    desk.sync_agents(vec![agent]).unwrap();

    assert_eq!(desk.agent(AgentId(1)).unwrap().max_capacity.get(), 5);
}

#[test]
fn sync_rejects_zero_capacity() {
    let desk = Desk::in_memory(Settings::default(), FakeClock::new());
    let mut agent = remote(1, "Ana");
    agent.max_capacity = Some(0);

    let err = desk.sync_agents(vec![agent]).unwrap_err();

    assert!(matches!(err, DeskError::Agent(AgentError::InvalidCapacity(AgentId(1)))));
    assert!(desk.agents().is_empty());
}

#[test]
fn sync_preserves_local_expertise() {
    let desk = desk();
    desk.set_expertise("pix", KnowledgeLevel::Advanced, &[AgentId(1)]).unwrap();

    desk.sync_agents(vec![remote(1, "Ana Paula"), remote(3, "Carla")]).unwrap();

    let ana = desk.agent(AgentId(1)).unwrap();
    assert_eq!(ana.name, "Ana Paula");
    assert_eq!(ana.expertise, vec![expertise("pix", 3)]);
    assert!(desk.agent(AgentId(2)).is_none());
}

#[test]
fn empty_sync_keeps_local_roster() {
    let desk = desk();
    assert_eq!(desk.sync_agents(Vec::new()).unwrap(), 2);
    assert_eq!(desk.agents().len(), 2);
}

#[test]
fn sync_filters_by_allowed_groups() {
    let desk = Desk::in_memory(
        Settings::default().allowed_group_ids(vec!["n2".to_string()]),
        FakeClock::new(),
    );
    let mut inside = remote(1, "Ana");
    inside.group_ids = vec!["n1".to_string(), "n2".to_string()];
    let outside = remote(2, "Bruno");

    assert_eq!(desk.sync_agents(vec![inside, outside]).unwrap(), 1);
    assert!(desk.agent(AgentId(2)).is_none());
}

#[test]
fn sync_drops_repeated_ids() {
    let desk = Desk::in_memory(Settings::default(), FakeClock::new());
    assert_eq!(desk.sync_agents(vec![remote(1, "Ana"), remote(1, "Imposter")]).unwrap(), 1);
    assert_eq!(desk.agent(AgentId(1)).unwrap().name, "Ana");
}

#[test]
fn bulk_set_expertise_applies_to_each_agent() {
    let desk = desk();

    let updated =
        desk.set_expertise("MagaluPay", KnowledgeLevel::Intermediate, &[AgentId(1), AgentId(2)]).unwrap();

    assert_eq!(updated.len(), 2);
    for agent in desk.agents() {
        assert_eq!(agent.expertise, vec![expertise("MagaluPay", 2)]);
    }
}

#[test]
fn set_expertise_updates_existing_level_case_insensitively() {
    let desk = desk();
    desk.set_expertise("Pix", KnowledgeLevel::Basic, &[AgentId(1)]).unwrap();

    desk.set_expertise("PIX", KnowledgeLevel::Advanced, &[AgentId(1)]).unwrap();

    assert_eq!(desk.agent(AgentId(1)).unwrap().expertise, vec![expertise("Pix", 3)]);
}

#[test]
fn set_expertise_is_all_or_nothing() {
    let desk = desk();

    let err = desk.set_expertise("pix", KnowledgeLevel::Basic, &[AgentId(1), AgentId(9)]).unwrap_err();

    assert!(matches!(err, DeskError::UnknownAgent(AgentId(9))));
    assert!(desk.agent(AgentId(1)).unwrap().expertise.is_empty());
}

#[test]
fn set_expertise_rejects_blank_name() {
    let desk = desk();
    let err = desk.set_expertise("  ", KnowledgeLevel::Basic, &[AgentId(1)]).unwrap_err();
    assert!(matches!(err, DeskError::Agent(AgentError::BlankSystemName(AgentId(1)))));
}

#[test]
fn remove_expertise_reports_whether_declared() {
    let desk = desk();
    desk.set_expertise("pix", KnowledgeLevel::Basic, &[AgentId(1)]).unwrap();

    assert!(desk.remove_expertise(AgentId(1), "PIX").unwrap());
    assert!(!desk.remove_expertise(AgentId(1), "pix").unwrap());
    assert!(matches!(desk.remove_expertise(AgentId(7), "pix"), Err(DeskError::UnknownAgent(_))));
}

#[test]
fn team_insight_reads_current_roster() {
    let desk = desk();
    desk.set_expertise("pix", KnowledgeLevel::Basic, &[AgentId(1)]).unwrap();
    desk.set_expertise("pix", KnowledgeLevel::Advanced, &[AgentId(2)]).unwrap();

    let insight = desk.team_insight("pix").unwrap();

    assert_eq!(insight.agent_count, 2);
    assert_eq!(insight.average_level, KnowledgeLevel::Intermediate);
}

#[test]
fn overloaded_agents_uses_threshold() {
    let desk = desk_with(Settings::default().overload_threshold(40));
    let names: Vec<_> = desk.overloaded_agents().into_iter().map(|a| a.name).collect();
    assert_eq!(names, vec!["Bruno"]);

    let desk = desk_with(Settings::default().overload_threshold(50));
    assert!(desk.overloaded_agents().is_empty());
}
