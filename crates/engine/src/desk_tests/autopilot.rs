// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn prioritized(id: &str, priority: TicketPriority) -> Ticket {
    Ticket::builder().id(id).priority(priority).build()
}

#[test]
fn sweep_requires_autopilot() {
    assert!(matches!(desk().autopilot_sweep(), Err(DeskError::AutopilotDisabled)));
}

#[test]
fn sweep_spreads_load_across_agents() {
    let desk = desk_with(Settings::default().autopilot_enabled(true));
    for id in ["1", "2", "3"] {
        desk.enqueue(ticket(id)).unwrap();
    }

    let assignments = desk.autopilot_sweep().unwrap();

    // Ana: 0/8 -> 30, 1/8 -> 26.25, 2/8 -> 22.5; Bruno stays at 4/8 -> 15
    let agents: Vec<_> = assignments.iter().map(|a| a.agent.id).collect();
    assert_eq!(agents, vec![AgentId(1), AgentId(1), AgentId(1)]);
    assert!(desk.pending().is_empty());
    assert_eq!(desk.agent(AgentId(1)).unwrap().current_workload, 3);
}

#[test]
fn sweep_sees_previous_increments() {
    let desk = desk_with(Settings::default().autopilot_enabled(true));
    desk.sync_agents(vec![remote(1, "Ana"), remote(2, "Bruno")]).unwrap();
    for id in ["1", "2", "3", "4"] {
        desk.enqueue(ticket(id)).unwrap();
    }

    let assignments = desk.autopilot_sweep().unwrap();

    let agents: Vec<_> = assignments.iter().map(|a| a.agent.id.get()).collect();
    assert_eq!(agents, vec![1, 2, 1, 2]);
}

#[test]
fn sweep_takes_elevated_tickets_first() {
    let desk = desk_with(Settings::default().autopilot_enabled(true));
    desk.enqueue(prioritized("low", TicketPriority::Low)).unwrap();
    desk.enqueue(prioritized("urgent", TicketPriority::Urgent)).unwrap();
    desk.enqueue(prioritized("normal", TicketPriority::Normal)).unwrap();
    desk.enqueue(prioritized("high", TicketPriority::High)).unwrap();

    let order: Vec<_> =
        desk.autopilot_sweep().unwrap().into_iter().map(|a| a.entry.ticket_id.0).collect();

    assert_eq!(order, vec!["urgent", "high", "low", "normal"]);
}

#[test]
fn sweep_keeps_arrival_order_without_priority_boost() {
    let desk = desk_with(
        Settings::default().autopilot_enabled(true).auto_assign_high_priority(false),
    );
    desk.enqueue(prioritized("low", TicketPriority::Low)).unwrap();
    desk.enqueue(prioritized("urgent", TicketPriority::Urgent)).unwrap();

    let order: Vec<_> =
        desk.autopilot_sweep().unwrap().into_iter().map(|a| a.entry.ticket_id.0).collect();

    assert_eq!(order, vec!["low", "urgent"]);
}

#[test]
fn sweep_without_active_agents_leaves_queue() {
    let desk = Desk::in_memory(Settings::default().autopilot_enabled(true), FakeClock::new());
    desk.enqueue(ticket("1")).unwrap();

    assert!(desk.autopilot_sweep().unwrap().is_empty());
    assert_eq!(desk.pending().len(), 1);
}

mod properties {
    use super::*;
    use proptest::prelude::*;
    use triage_core::test_support::strategies::{arb_roster, arb_ticket};

    fn to_remote(agent: &Agent) -> RemoteAgent {
        RemoteAgent {
            max_capacity: Some(agent.max_capacity.get()),
            current_workload: agent.current_workload,
            active: agent.is_active,
            ..remote(agent.id.get(), &agent.name)
        }
    }

    proptest! {
        #[test]
        fn sweep_assigns_only_active_agents_and_counts_load(
            roster in arb_roster(),
            tickets in proptest::collection::vec(arb_ticket(), 0..6),
        ) {
            let desk = Desk::in_memory(Settings::default().autopilot_enabled(true), FakeClock::new());
            desk.sync_agents(roster.iter().map(to_remote).collect()).unwrap();
            for (index, mut ticket) in tickets.into_iter().enumerate() {
                ticket.id = TicketId::new(format!("t{index}"));
                desk.enqueue(ticket).unwrap();
            }
            let queued = desk.pending().len();
            let load_before: u32 = desk.agents().iter().map(|a| a.current_workload).sum();

            let assignments = desk.autopilot_sweep().unwrap();

            let any_active = desk.agents().iter().any(|a| a.is_active);
            prop_assert_eq!(assignments.len(), if any_active { queued } else { 0 });
            prop_assert!(assignments.iter().all(|a| a.agent.is_active));
            let load_after: u32 = desk.agents().iter().map(|a| a.current_workload).sum();
            prop_assert_eq!(load_after - load_before, assignments.len() as u32);
            prop_assert_eq!(desk.log(usize::MAX).len(), assignments.len());
        }
    }
}
