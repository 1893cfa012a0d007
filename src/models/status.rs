use chrono::Local;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Static description string returned on every successful status check.
pub const API_NAME: &str = "Forest Trekking System API";

/// Wall-clock format used in the `timestamp` field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// # Status Response
///
/// The single payload produced by the status endpoint. The two cases carry
/// different fields, so they are modelled as a tagged enum rather than a bag
/// of optional fields: serialization cannot emit a `database` or `timestamp`
/// key on the error branch.
///
/// ## Serialization
/// The variant name becomes the `status` field (`"success"` or `"error"`).
///
/// ## Example JSON
/// ```json
/// {
///   "status": "success",
///   "message": "Forest Trekking System API",
///   "database": "connected",
///   "timestamp": "2024-01-01 12:00:00"
/// }
/// ```
/// ```json
/// {
///   "status": "error",
///   "message": "connection refused"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum StatusResponse {
    Success {
        message: String,
        database: DatabaseStatus,
        timestamp: String,
    },
    Error {
        message: String,
    },
}

/// Connectivity of the backing database as seen by the status check.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

impl StatusResponse {
    /// Builds the success case with the current local time.
    pub fn success(connected: bool) -> Self {
        Self::Success {
            message: API_NAME.to_string(),
            database: if connected {
                DatabaseStatus::Connected
            } else {
                DatabaseStatus::Disconnected
            },
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Builds the error case from a failure description.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    #[test]
    fn test_success_connected_serialization() {
        let response = StatusResponse::success(true);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], API_NAME);
        assert_eq!(value["database"], "connected");
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_success_disconnected_serialization() {
        let response = StatusResponse::success(false);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["database"], "disconnected");
    }

    #[test]
    fn test_error_serialization_has_only_status_and_message() {
        let response = StatusResponse::error("DB down");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({ "status": "error", "message": "DB down" }));

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(!object.contains_key("database"));
        assert!(!object.contains_key("timestamp"));
    }

    #[test]
    fn test_timestamp_format() {
        let response = StatusResponse::success(true);
        let StatusResponse::Success { timestamp, .. } = response else {
            panic!("success constructor should build the success case");
        };

        let parsed = NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT);
        assert!(
            parsed.is_ok(),
            "timestamp should match YYYY-MM-DD HH:MM:SS, got {timestamp}"
        );
    }

    #[test]
    fn test_success_deserialization() {
        let json = r#"{"status":"success","message":"Forest Trekking System API","database":"connected","timestamp":"2024-01-01 12:00:00"}"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response,
            StatusResponse::Success {
                message: API_NAME.to_string(),
                database: DatabaseStatus::Connected,
                timestamp: "2024-01-01 12:00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_error_deserialization() {
        let json = r#"{"status":"error","message":"DB down"}"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response, StatusResponse::error("DB down"));
    }

    #[test]
    fn test_field_order_matches_documented_shape() {
        let response = StatusResponse::success(true);
        let body = serde_json::to_string(&response).unwrap();

        // Tag first, then fields in declaration order.
        assert!(body.starts_with(
            r#"{"status":"success","message":"Forest Trekking System API","database":"connected","timestamp":"#
        ));
    }
}
