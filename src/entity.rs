use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A single to-do record owned by a user. The server only ever inspects the `completed`
/// flag for counting; every other field is carried through storage untouched.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, ToSchema)]
#[serde(transparent)]
pub struct TodoItem(#[schema(value_type = Object)] pub Value);

impl TodoItem {
    /// Whether this item counts as complete. An absent or non-boolean `completed` field
    /// counts as pending.
    pub fn is_completed(&self) -> bool {
        self.0
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// The entire persisted document: username mapped to that user's list. Keys iterate in
/// lexicographic order, which keeps reports and rewritten files deterministic.
pub type StoreDocument = BTreeMap<String, Vec<TodoItem>>;

/// Aggregate counts derived from a full store document.
#[derive(Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct StoreTotals {
    pub total_users: usize,
    pub total_todos: usize,
    pub total_completed: usize,
}

impl StoreTotals {
    /// Tallies user, item, and completed-item counts across every list in the document.
    pub fn from_document(document: &StoreDocument) -> Self {
        StoreTotals {
            total_users: document.len(),
            total_todos: document.values().map(Vec::len).sum(),
            total_completed: document
                .values()
                .flatten()
                .filter(|item| item.is_completed())
                .count(),
        }
    }
}
