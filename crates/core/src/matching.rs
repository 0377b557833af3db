// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Match evaluator: expertise-to-ticket evidence and the technical score.
//!
//! Evidence is collected in three passes, in fixed priority order:
//!
//! 1. declared field: the ticket's configured custom field names a system
//! 2. content: a system name occurs in the subject or description
//! 3. tag: a ticket tag equals a system name
//!
//! A system already credited by an earlier pass only earns a small duplicate
//! bonus from later passes. Each system appears at most once per pass.

use crate::agent::{fold, Agent, Expertise, KnowledgeLevel};
use crate::config::ScoringConfig;
use crate::ticket::Ticket;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Points per knowledge level for a declared-field match (level 3 = 40).
pub const FIELD_WEIGHT: f64 = 40.0 / 3.0;
/// Points per knowledge level for a content match (level 3 = 25).
pub const CONTENT_WEIGHT: f64 = 25.0 / 3.0;
/// Points per knowledge level for a tag match.
pub const TAG_WEIGHT: f64 = 5.0;
/// Content evidence for a system already matched by the declared field.
pub const CONTENT_DUPLICATE_BONUS: f64 = 5.0;
/// Tag evidence for a system already matched by an earlier source.
pub const TAG_DUPLICATE_BONUS: f64 = 2.0;
/// Upper bound of the technical score.
pub const TECH_SCORE_CEILING: f64 = 70.0;

/// Where a piece of evidence came from. Variant order is pass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    DeclaredField,
    Content,
    Tag,
}

crate::simple_display! {
    EvidenceSource {
        DeclaredField => "field",
        Content => "content",
        Tag => "tag",
    }
}

/// One attributable reason contributing to a candidate's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub source: EvidenceSource,
    /// System name as declared by the agent.
    pub system: String,
    pub level: KnowledgeLevel,
    pub points: f64,
    /// Set when an earlier source already credited this system.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub duplicate: bool,
}

impl Evidence {
    /// `"<source> (<system>)"`, the form used in assignment reasons.
    pub fn label(&self) -> String {
        format!("{} ({})", self.source, self.system)
    }
}

/// Result of evaluating one agent against one ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalMatch {
    /// Sum of evidence points, clamped to [`TECH_SCORE_CEILING`].
    pub score: f64,
    pub evidence: Vec<Evidence>,
}

impl TechnicalMatch {
    /// Unclamped sum of evidence points.
    pub fn raw_points(&self) -> f64 {
        self.evidence.iter().map(|e| e.points).sum()
    }
}

/// Systems credited so far, keyed by folded name, with the sources that credited them.
#[derive(Default)]
struct Credits {
    credited: HashMap<String, Vec<EvidenceSource>>,
    evidence: Vec<Evidence>,
}

impl Credits {
    fn credit(&mut self, source: EvidenceSource, exp: &Expertise, weight: f64, duplicate_bonus: f64) {
        let sources = self.credited.entry(exp.key()).or_default();
        if sources.contains(&source) {
            return;
        }
        let duplicate = !sources.is_empty();
        let points =
            if duplicate { duplicate_bonus } else { f64::from(exp.level.weight()) * weight };
        sources.push(source);
        self.evidence.push(Evidence {
            source,
            system: exp.system_name.clone(),
            level: exp.level,
            points,
            duplicate,
        });
    }

    fn finish(self) -> TechnicalMatch {
        let total: f64 = self.evidence.iter().map(|e| e.points).sum();
        TechnicalMatch { score: total.min(TECH_SCORE_CEILING), evidence: self.evidence }
    }
}

/// Evaluate how well `agent`'s expertise covers `ticket`.
///
/// Never fails: an agent without expertise yields an empty match.
pub fn evaluate(ticket: &Ticket, agent: &Agent, config: &ScoringConfig) -> TechnicalMatch {
    let mut credits = Credits::default();
    let declared: Vec<&Expertise> =
        agent.expertise.iter().filter(|e| !e.key().is_empty()).collect();

    let field_value = config.declared_field_key.as_deref().and_then(|key| ticket.text_field(key));
    if let Some(value) = field_value {
        for exp in declared.iter().filter(|e| e.is_for(value)) {
            credits.credit(EvidenceSource::DeclaredField, exp, FIELD_WEIGHT, FIELD_WEIGHT);
        }
    }

    let content = ticket.content();
    for exp in declared.iter().filter(|e| content.contains(&e.key())) {
        credits.credit(EvidenceSource::Content, exp, CONTENT_WEIGHT, CONTENT_DUPLICATE_BONUS);
    }

    let tags: Vec<String> = ticket.tags.iter().map(|t| fold(t)).collect();
    for exp in declared.iter().filter(|e| tags.contains(&e.key())) {
        credits.credit(EvidenceSource::Tag, exp, TAG_WEIGHT, TAG_DUPLICATE_BONUS);
    }

    credits.finish()
}

#[cfg(test)]
#[path = "matching_tests.rs"]
mod tests;
