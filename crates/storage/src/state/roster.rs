// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster event handlers.

use triage_core::Event;

use super::MaterializedState;

pub(crate) fn apply(state: &mut MaterializedState, event: &Event) {
    match event {
        Event::RosterSynced { agents } => {
            state.agents = agents.clone();
        }

        Event::ExpertiseUpdated { agent_id, expertise } => {
            if let Some(agent) = state.agents.iter_mut().find(|a| a.id == *agent_id) {
                agent.expertise = expertise.clone();
            }
        }

        _ => {}
    }
}
