use axum::http::StatusCode;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Body returned for every translated error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardError {
    /// Epoch milliseconds at construction.
    pub timestamp: i64,
    pub status: u16,
    pub message: String,
    pub path: String,
}

impl StandardError {
    pub fn new(status: StatusCode, message: &str, path: &str) -> StandardError {
        StandardError {
            timestamp: Utc::now().timestamp_millis(),
            status: status.as_u16(),
            message: message.to_string(),
            path: path.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_shape() {
        let err = StandardError {
            timestamp: 1_700_000_000_000,
            status: 404,
            message: String::from("Não Encontrado..."),
            path: String::from("/users/999"),
        };

        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({
                "timestamp": 1_700_000_000_000_i64,
                "status": 404,
                "message": "Não Encontrado...",
                "path": "/users/999"
            })
        );
    }

    #[test]
    fn timestamp_is_sampled_at_construction() {
        let before = Utc::now().timestamp_millis();
        let first = StandardError::new(StatusCode::NOT_FOUND, "x", "/a");
        let second = StandardError::new(StatusCode::NOT_FOUND, "x", "/b");
        let after = Utc::now().timestamp_millis();

        assert!(before <= first.timestamp);
        assert!(first.timestamp <= second.timestamp);
        assert!(second.timestamp <= after);
    }
}
