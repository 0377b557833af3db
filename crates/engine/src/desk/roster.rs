// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Roster ingestion and expertise editing.

use super::{Desk, DeskError};
use triage_core::{
    merge_roster, team_insight, Agent, AgentId, Clock, Event, KnowledgeLevel, Occupancy,
    RemoteAgent, TeamInsight,
};

impl<C: Clock> Desk<C> {
    /// Replace the roster with a fetched one, keeping locally edited expertise.
    ///
    /// Agents outside `allowed_group_ids` are dropped, as are repeated ids.
    /// Returns the roster size after the sync.
    pub fn sync_agents(&self, remote: Vec<RemoteAgent>) -> Result<usize, DeskError> {
        let groups = &self.settings.allowed_group_ids;
        let mut fetched: Vec<Agent> = Vec::with_capacity(remote.len());
        for record in remote {
            let agent = record.into_agent(self.settings.default_max_capacity)?;
            if !groups.is_empty() && !agent.in_any_group(groups) {
                tracing::debug!(agent = %agent.id, "outside allowed groups, skipped");
                continue;
            }
            if fetched.iter().any(|a| a.id == agent.id) {
                tracing::warn!(agent = %agent.id, "duplicate agent in roster, keeping first");
                continue;
            }
            fetched.push(agent);
        }

        let mut state = self.state.lock();
        if fetched.is_empty() {
            tracing::warn!("fetched roster is empty, keeping local roster");
            return Ok(state.agents.len());
        }
        let agents = merge_roster(fetched, &state.agents);
        for agent in &agents {
            agent.validate()?;
        }
        let count = agents.len();
        self.commit(&mut state, Event::RosterSynced { agents })?;
        tracing::info!(agents = count, "roster synced");
        Ok(count)
    }

    /// Declare `system` at `level` for each agent in `agent_ids`.
    ///
    /// All-or-nothing: an unknown id or blank name rejects the whole batch.
    pub fn set_expertise(
        &self,
        system: &str,
        level: KnowledgeLevel,
        agent_ids: &[AgentId],
    ) -> Result<Vec<Agent>, DeskError> {
        let mut state = self.state.lock();
        let mut updated = Vec::with_capacity(agent_ids.len());
        for id in agent_ids {
            let mut agent = state.agent(*id).cloned().ok_or(DeskError::UnknownAgent(*id))?;
            agent.upsert_expertise(system, level)?;
            if !updated.iter().any(|a: &Agent| a.id == agent.id) {
                updated.push(agent);
            }
        }
        for agent in &updated {
            let event =
                Event::ExpertiseUpdated { agent_id: agent.id, expertise: agent.expertise.clone() };
            self.commit(&mut state, event)?;
        }
        tracing::info!(system, %level, agents = updated.len(), "expertise set");
        Ok(updated)
    }

    /// Remove `system` from one agent. Returns whether it was declared.
    pub fn remove_expertise(&self, agent_id: AgentId, system: &str) -> Result<bool, DeskError> {
        let mut state = self.state.lock();
        let mut agent = state.agent(agent_id).cloned().ok_or(DeskError::UnknownAgent(agent_id))?;
        if !agent.remove_expertise(system) {
            return Ok(false);
        }
        self.commit(&mut state, Event::ExpertiseUpdated { agent_id, expertise: agent.expertise })?;
        tracing::info!(agent = %agent_id, system, "expertise removed");
        Ok(true)
    }

    pub fn team_insight(&self, system: &str) -> Option<TeamInsight> {
        team_insight(&self.state.lock().agents, system)
    }

    /// Active agents above the overload threshold, in roster order.
    pub fn overloaded_agents(&self) -> Vec<Agent> {
        let threshold = self.settings.overload_threshold;
        self.state
            .lock()
            .agents
            .iter()
            .filter(|a| a.is_active && Occupancy::of(a).is_overloaded(threshold))
            .cloned()
            .collect()
    }
}
