use crate::entity::{StoreDocument, TodoItem};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// DTO carrying the replacement list for a user's todos
#[derive(Deserialize, Serialize, ToSchema)]
pub struct SaveTodos {
    pub todos: Vec<TodoItem>,
}

/// DTO acknowledging that a user's list was replaced
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct SaveAcknowledgement {
    pub success: bool,
    pub message: String,
}

/// DTO dumping the entire store document alongside aggregate counts
#[derive(Serialize, ToSchema)]
pub struct RawDataDump {
    pub success: bool,
    pub timestamp: String,
    pub total_users: usize,
    pub total_todos: usize,
    #[schema(value_type = Object)]
    pub data: StoreDocument,
}

/// DTO reporting service liveness plus store statistics
#[derive(Serialize, ToSchema)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub data_stats: DataStats,
    pub endpoints: EndpointDirectory,
}

/// Store statistics embedded in health responses
#[derive(Serialize, ToSchema)]
pub struct DataStats {
    pub total_users: usize,
    pub total_todos: usize,
}

/// Directory of the routes this service exposes, embedded in health responses
#[derive(Serialize, ToSchema)]
pub struct EndpointDirectory {
    pub todos: String,
    pub raw_data: String,
    pub api_data: String,
    pub health: String,
    pub api_docs: String,
}

impl Default for EndpointDirectory {
    fn default() -> Self {
        EndpointDirectory {
            todos: "/api/todos/{username}".to_owned(),
            raw_data: "/raw-data".to_owned(),
            api_data: "/api/raw-data".to_owned(),
            health: "/health".to_owned(),
            api_docs: "/swagger-ui".to_owned(),
        }
    }
}

/// Current time in the ISO-8601 UTC format every timestamp field in the API uses.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn save_body_parses_the_todos_key() {
        let body = json!({ "todos": [{ "text": "buy milk", "completed": false }] });
        let parsed: SaveTodos = serde_json::from_value(body).expect("body should parse");
        assert_eq!(parsed.todos.len(), 1);
        assert!(!parsed.todos[0].is_completed());
    }

    #[test]
    fn save_body_without_todos_key_is_rejected() {
        let body = json!({ "items": [] });
        assert!(serde_json::from_value::<SaveTodos>(body).is_err());
    }

    #[test]
    fn timestamps_are_utc_iso_8601() {
        let stamp = iso_timestamp();
        assert!(stamp.ends_with('Z'));
        DateTime::parse_from_rfc3339(&stamp).expect("timestamp should parse back");
    }
}
