// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Support tickets as received from the ticket source.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a ticket in the external ticketing system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(pub String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TicketId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::borrow::Borrow<str> for TicketId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl TicketPriority {
    /// High and Urgent tickets jump the autopilot sweep when configured to.
    pub fn is_elevated(self) -> bool {
        matches!(self, TicketPriority::High | TicketPriority::Urgent)
    }
}

crate::simple_display! {
    TicketPriority {
        Low => "low",
        Normal => "normal",
        High => "high",
        Urgent => "urgent",
    }
}

/// An incoming ticket. Immutable once handed to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: TicketPriority,
    /// Order is irrelevant for matching.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub custom_fields: HashMap<String, serde_json::Value>,
    /// When the ticket entered the queue, if the source reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at_ms: Option<u64>,
}

impl Ticket {
    /// Look up a custom field holding text.
    ///
    /// Only non-blank string values are returned; absent keys, nulls, numbers
    /// and other JSON shapes read as absent.
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.custom_fields
            .get(key)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    /// Lower-cased subject and description, the haystack for content matches.
    pub fn content(&self) -> String {
        format!("{} {}", self.subject, self.description).to_lowercase()
    }
}

crate::builder! {
    pub struct TicketBuilder => Ticket {
        into {
            id: TicketId = "1",
            subject: String = "",
            description: String = "",
            status: String = "open",
        }
        set {
            priority: TicketPriority = TicketPriority::Normal,
            tags: Vec<String> = Vec::new(),
            custom_fields: HashMap<String, serde_json::Value> = HashMap::new(),
            created_at_ms: Option<u64> = None,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
impl TicketBuilder {
    /// Set a single string custom field.
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.custom_fields.insert(key.to_string(), serde_json::Value::String(value.to_string()));
        self
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
