// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use triage_core::{AssignmentKind, AVAILABILITY_REASON};

fn magalu_ticket() -> Ticket {
    Ticket::builder()
        .id("459203")
        .subject("Falha no Checkout MagaluPay")
        .description("erro 500")
        .tags(vec!["checkout".into(), "financeiro".into()])
        .field("system_field", "MagaluPay")
        .build()
}

#[test]
fn recommend_without_tickets_is_none() {
    assert!(desk().recommend(None).unwrap().is_none());
}

#[test]
fn recommend_without_active_agents_is_none() {
    let desk = Desk::in_memory(Settings::default(), FakeClock::new());
    desk.enqueue(ticket("1")).unwrap();
    assert!(desk.recommend(None).unwrap().is_none());
}

#[test]
fn recommend_unknown_ticket_is_an_error() {
    assert!(matches!(desk().recommend(Some("9")), Err(DeskError::UnknownTicket(_))));
}

#[test]
fn recommend_prefers_expertise_over_idleness() {
    let desk = desk();
    desk.set_expertise("MagaluPay", KnowledgeLevel::Advanced, &[AgentId(2)]).unwrap();
    desk.enqueue(magalu_ticket()).unwrap();

    let best = desk.recommend(None).unwrap().unwrap();

    // Bruno: 30 * (1 - 4/8) + 40 + 5 = 60; Ana: 30
    assert_eq!(best.agent.id, AgentId(2));
    assert_eq!(best.rounded_score(), 60);
    let all = desk.candidates(Some("459203")).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].rounded_score(), 30);
}

#[test]
fn recommend_does_not_mutate() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();
    let before = desk.with_state(|s| s.clone());

    desk.recommend(None).unwrap();
    desk.candidates(None).unwrap();

    assert_eq!(desk.with_state(|s| s.clone()), before);
}

#[test]
fn confirm_applies_recommendation() {
    let desk = desk();
    desk.set_expertise("MagaluPay", KnowledgeLevel::Advanced, &[AgentId(2)]).unwrap();
    desk.enqueue(magalu_ticket()).unwrap();
    desk.clock().set_epoch_ms(77);
    let best = desk.recommend(None).unwrap().unwrap();

    let assignment = desk.confirm(&best, &TicketId::new("459203")).unwrap();

    assert_eq!(assignment.agent.current_workload, 5);
    assert_eq!(assignment.entry.reason, "field (MagaluPay), content (MagaluPay)");
    assert_eq!(assignment.entry.kind, AssignmentKind::Manual);
    assert_eq!(assignment.entry.timestamp_ms, 77);
    assert_eq!(assignment.memory.len(), 2);
    assert!(desk.pending().is_empty());
    assert_eq!(desk.log(10), vec![assignment.entry.clone()]);
    assert_eq!(desk.memory().success_count("financeiro", AgentId(2)), 1);
}

#[test]
fn autopilot_setting_marks_log_entries() {
    let desk = desk_with(Settings::default().autopilot_enabled(true));
    desk.enqueue(ticket("1")).unwrap();

    let assignment = desk.assign(None).unwrap().unwrap();

    assert_eq!(assignment.entry.kind, AssignmentKind::Autopilot);
    assert_eq!(assignment.entry.reason, AVAILABILITY_REASON);
}

#[test]
fn untagged_ticket_credits_general() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();

    let assignment = desk.assign(None).unwrap().unwrap();

    assert_eq!(assignment.memory.len(), 1);
    assert_eq!(assignment.memory[0].tag, "general");
    assert_eq!(assignment.memory[0].agent_id, AgentId(1));
}

#[test]
fn confirm_twice_is_stale() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();
    let best = desk.recommend(None).unwrap().unwrap();
    desk.confirm(&best, &TicketId::new("1")).unwrap();

    let err = desk.confirm(&best, &TicketId::new("1")).unwrap_err();

    assert!(matches!(err, DeskError::Stale(StaleRecommendation::TicketNotPending(_))));
    assert_eq!(desk.agent(AgentId(1)).unwrap().current_workload, 1);
}

#[test]
fn explicit_ticket_already_assigned_is_stale() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();
    desk.assign(Some("1")).unwrap();

    let err = desk.assign(Some(" 1 ")).unwrap_err();
    assert!(matches!(err, DeskError::Stale(StaleRecommendation::TicketNotPending(_))));
    assert!(matches!(
        desk.recommend(Some("1")),
        Err(DeskError::Stale(StaleRecommendation::TicketNotPending(_)))
    ));
    assert!(matches!(desk.recommend(Some("2")), Err(DeskError::UnknownTicket(_))));
    assert_eq!(desk.agent(AgentId(1)).unwrap().current_workload, 1);
}

#[test]
fn confirm_for_departed_agent_is_stale() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();
    let best = desk.recommend(None).unwrap().unwrap();
    desk.sync_agents(vec![remote(2, "Bruno")]).unwrap();

    let err = desk.confirm(&best, &TicketId::new("1")).unwrap_err();

    assert!(matches!(err, DeskError::Stale(StaleRecommendation::AgentGone(AgentId(1)))));
    assert!(desk.with_state(|s| s.is_pending("1")));
}

#[test]
fn assign_follows_designated_ticket() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();
    desk.enqueue(ticket("2")).unwrap();
    desk.activate("2").unwrap();

    let assignment = desk.assign(None).unwrap().unwrap();

    assert_eq!(assignment.entry.ticket_id, TicketId::new("2"));
    assert_eq!(desk.active_ticket().unwrap().id, TicketId::new("1"));
}

#[test]
fn n_confirmations_add_exactly_n() {
    let desk = desk();
    let n = 12;
    for i in 0..n {
        desk.enqueue(ticket(&i.to_string())).unwrap();
    }
    let before = desk.agent(AgentId(1)).unwrap();
    for i in 0..n {
        let rec = triage_core::score_candidate(&ticket(&i.to_string()), &before, &desk.settings().scoring());
        desk.confirm(&rec, &TicketId::new(i.to_string())).unwrap();
    }

    assert_eq!(desk.agent(AgentId(1)).unwrap().current_workload, before.current_workload + n);
    assert_eq!(desk.log(100).len(), n as usize);
}

#[test]
fn concurrent_confirmations_serialize_workload_increments() {
    let desk = desk();
    let threads = 8u32;
    let per_thread = 10u32;
    for t in 0..threads {
        for i in 0..per_thread {
            desk.enqueue(ticket(&format!("{t}-{i}"))).unwrap();
        }
    }
    let ana = desk.agent(AgentId(1)).unwrap();
    let scoring = desk.settings().scoring();

    std::thread::scope(|scope| {
        for t in 0..threads {
            let (desk, ana, scoring) = (&desk, &ana, &scoring);
            scope.spawn(move || {
                for i in 0..per_thread {
                    let ticket = ticket(&format!("{t}-{i}"));
                    let rec = triage_core::score_candidate(&ticket, ana, scoring);
                    desk.confirm(&rec, &ticket.id).unwrap();
                }
            });
        }
    });

    assert_eq!(desk.agent(AgentId(1)).unwrap().current_workload, threads * per_thread);
    assert!(desk.pending().is_empty());
    assert_eq!(desk.memory().success_count("general", AgentId(1)), u64::from(threads * per_thread));
}

#[test]
fn racing_confirmations_for_one_ticket_apply_once() {
    let desk = desk();
    desk.enqueue(ticket("1")).unwrap();
    let best = desk.recommend(None).unwrap().unwrap();

    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> =
            (0..4).map(|_| scope.spawn(|| desk.confirm(&best, &TicketId::new("1")).is_ok())).collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(desk.agent(AgentId(1)).unwrap().current_workload, 1);
}
