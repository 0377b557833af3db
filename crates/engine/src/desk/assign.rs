// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recommendation, confirmation and the autopilot sweep.

use super::{Desk, DeskError};
use triage_core::{
    log_entry, outcome_tags, rank_all, Assignment, AssignmentId, Clock, Event, Recommendation,
    StaleRecommendation, Ticket, TicketId,
};
use triage_storage::MaterializedState;

impl<C: Clock> Desk<C> {
    /// Best agent for `ticket_id`, or for the active ticket when `None`.
    ///
    /// `Ok(None)` when there is no ticket to score or no active agent.
    pub fn recommend(&self, ticket_id: Option<&str>) -> Result<Option<Recommendation>, DeskError> {
        Ok(self.candidates(ticket_id)?.into_iter().next())
    }

    /// Every active agent scored for the ticket, best first.
    pub fn candidates(&self, ticket_id: Option<&str>) -> Result<Vec<Recommendation>, DeskError> {
        let state = self.state.lock();
        let ticket = resolve_ticket(&state, ticket_id)?;
        Ok(rank_all(ticket, &state.agents, &self.settings.scoring()))
    }

    /// Apply a recommendation the operator accepted.
    ///
    /// Fails with [`StaleRecommendation`] when the agent left the roster or
    /// the ticket is no longer pending; re-rank and retry in that case.
    pub fn confirm(
        &self,
        recommendation: &Recommendation,
        ticket_id: &TicketId,
    ) -> Result<Assignment, DeskError> {
        let mut state = self.state.lock();
        self.confirm_locked(&mut state, recommendation, ticket_id)
    }

    /// Rank and confirm under one lock, so no other mutation can slip between.
    pub fn assign(&self, ticket_id: Option<&str>) -> Result<Option<Assignment>, DeskError> {
        let mut state = self.state.lock();
        let Some(ticket) = resolve_ticket(&state, ticket_id)?.cloned() else {
            return Ok(None);
        };
        let best = rank_all(Some(&ticket), &state.agents, &self.settings.scoring()).into_iter().next();
        match best {
            Some(best) => self.confirm_locked(&mut state, &best, &ticket.id).map(Some),
            None => Ok(None),
        }
    }

    /// Assign every pending ticket, one at a time.
    ///
    /// Each ranking sees the workload added by the previous confirmations.
    /// Elevated tickets go first when `auto_assign_high_priority` is set.
    /// Stops early, leaving tickets pending, once no agent is active.
    pub fn autopilot_sweep(&self) -> Result<Vec<Assignment>, DeskError> {
        if !self.settings.autopilot_enabled {
            return Err(DeskError::AutopilotDisabled);
        }
        let mut state = self.state.lock();
        let mut queue: Vec<Ticket> = state.pending.values().cloned().collect();
        if self.settings.auto_assign_high_priority {
            // Stable: arrival order holds within each group
            queue.sort_by_key(|t| !t.priority.is_elevated());
        }

        let scoring = self.settings.scoring();
        let mut assignments = Vec::with_capacity(queue.len());
        for ticket in &queue {
            let Some(best) = rank_all(Some(ticket), &state.agents, &scoring).into_iter().next()
            else {
                tracing::warn!(remaining = queue.len() - assignments.len(), "no active agents");
                break;
            };
            assignments.push(self.confirm_locked(&mut state, &best, &ticket.id)?);
        }
        tracing::info!(assigned = assignments.len(), "autopilot sweep finished");
        Ok(assignments)
    }

    fn confirm_locked(
        &self,
        state: &mut MaterializedState,
        recommendation: &Recommendation,
        ticket_id: &TicketId,
    ) -> Result<Assignment, DeskError> {
        let agent_id = recommendation.agent.id;
        if state.agent(agent_id).is_none() {
            return Err(StaleRecommendation::AgentGone(agent_id).into());
        }
        let Some(ticket) = state.ticket(ticket_id.as_str()).cloned() else {
            return Err(StaleRecommendation::TicketNotPending(ticket_id.clone()).into());
        };

        let entry = log_entry(
            recommendation,
            &ticket,
            &self.settings.scoring(),
            AssignmentId::new(),
            self.clock.epoch_ms(),
        );
        let tags = outcome_tags(&ticket);
        self.commit(state, Event::AssignmentConfirmed { entry: entry.clone(), tags: tags.clone() })?;

        let agent = state.agent(agent_id).cloned().unwrap_or_else(|| recommendation.agent.clone());
        let memory =
            tags.iter().filter_map(|tag| state.memory.get(tag, agent_id)).cloned().collect();
        tracing::info!(
            ticket = %entry.ticket_id,
            agent = %entry.agent_name,
            score = entry.score,
            kind = %entry.kind,
            workload = agent.current_workload,
            "assignment confirmed"
        );
        Ok(Assignment { agent, entry, memory })
    }
}

fn resolve_ticket<'a>(
    state: &'a MaterializedState,
    ticket_id: Option<&str>,
) -> Result<Option<&'a Ticket>, DeskError> {
    let Some(id) = ticket_id.map(str::trim) else {
        return Ok(state.active_ticket());
    };
    if let Some(ticket) = state.ticket(id) {
        return Ok(Some(ticket));
    }
    if state.was_assigned(id) {
        return Err(StaleRecommendation::TicketNotPending(TicketId::new(id)).into());
    }
    Err(DeskError::UnknownTicket(TicketId::new(id)))
}
