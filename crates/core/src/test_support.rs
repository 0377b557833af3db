// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{
    Agent, AgentId, AssignmentId, AssignmentKind, AssignmentLogEntry, Event, Expertise,
    KnowledgeLevel, Ticket, TicketId,
};
use std::num::NonZeroU32;

/// Capacity for builders; zero is bumped to one.
pub fn capacity(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

/// Expertise from a numeric level (1..=3); out-of-range levels read as basic.
pub fn expertise(name: &str, level: u8) -> Expertise {
    Expertise::new(name, KnowledgeLevel::from_weight(level).unwrap_or(KnowledgeLevel::Basic))
}

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies over a small shared vocabulary so generated agents
/// and tickets actually match each other.
pub mod strategies {
    use super::capacity;
    use crate::{Agent, Expertise, KnowledgeLevel, Ticket, TicketPriority};
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    const SYSTEMS: &[&str] = &["MagaluPay", "pix", "boleto", "checkout", "Frete", "app"];

    pub fn arb_level() -> impl Strategy<Value = KnowledgeLevel> {
        prop_oneof![
            Just(KnowledgeLevel::Basic),
            Just(KnowledgeLevel::Intermediate),
            Just(KnowledgeLevel::Advanced),
        ]
    }

    pub fn arb_priority() -> impl Strategy<Value = TicketPriority> {
        prop_oneof![
            Just(TicketPriority::Low),
            Just(TicketPriority::Normal),
            Just(TicketPriority::High),
            Just(TicketPriority::Urgent),
        ]
    }

    fn arb_expertise() -> impl Strategy<Value = Vec<Expertise>> {
        subsequence(SYSTEMS.to_vec(), 0..=SYSTEMS.len()).prop_flat_map(|names| {
            let len = names.len();
            proptest::collection::vec(arb_level(), len).prop_map(move |levels| {
                names.iter().zip(levels).map(|(name, level)| Expertise::new(*name, level)).collect()
            })
        })
    }

    pub fn arb_agent() -> impl Strategy<Value = Agent> {
        (1u64..1_000, 1u32..20, 0u32..30, arb_expertise(), any::<bool>()).prop_map(
            |(id, max, workload, expertise, is_active)| {
                Agent::builder()
                    .id(id)
                    .name(format!("Agent {id}"))
                    .max_capacity(capacity(max))
                    .current_workload(workload)
                    .expertise(expertise)
                    .is_active(is_active)
                    .build()
            },
        )
    }

    /// Up to eight agents with distinct ids, in generation order.
    pub fn arb_roster() -> impl Strategy<Value = Vec<Agent>> {
        proptest::collection::vec(arb_agent(), 0..8).prop_map(|agents| {
            agents
                .into_iter()
                .enumerate()
                .map(|(index, mut agent)| {
                    agent.id = (index as u64 + 1).into();
                    agent
                })
                .collect()
        })
    }

    pub fn arb_ticket() -> impl Strategy<Value = Ticket> {
        let word = proptest::sample::select(SYSTEMS.to_vec());
        (
            proptest::collection::vec(word.clone(), 0..3),
            proptest::collection::vec(word.clone(), 0..3),
            proptest::option::of(word),
            arb_priority(),
        )
            .prop_map(|(subject, tags, field, priority)| {
                let mut builder = Ticket::builder()
                    .subject(subject.join(" "))
                    .tags(tags.into_iter().map(str::to_string).collect())
                    .priority(priority);
                if let Some(field) = field {
                    builder = builder.field("system_field", field);
                }
                builder.build()
            })
    }
}

// ── Event factory functions ─────────────────────────────────────────────────

pub fn roster_event(agents: Vec<Agent>) -> Event {
    Event::RosterSynced { agents }
}

pub fn queued_event(ticket: Ticket) -> Event {
    Event::TicketQueued { ticket }
}

pub fn activated_event(ticket_id: &str) -> Event {
    Event::TicketActivated { ticket_id: TicketId::new(ticket_id) }
}

/// A manual assignment scored 50 at a fixed timestamp.
pub fn assignment_event(id: &str, ticket_id: &str, agent_id: u64, tags: &[&str]) -> Event {
    Event::AssignmentConfirmed {
        entry: AssignmentLogEntry {
            id: AssignmentId::from_string(id),
            ticket_id: TicketId::new(ticket_id),
            agent_id: AgentId(agent_id),
            agent_name: format!("Agent {agent_id}"),
            timestamp_ms: 1_000_000,
            reason: "availability".to_string(),
            kind: AssignmentKind::Manual,
            score: 50,
        },
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
