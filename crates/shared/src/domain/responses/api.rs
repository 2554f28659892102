use core::fmt;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform success envelope: `{ success, message?, data? }`.
///
/// Error paths use [`crate::errors::ErrorResponse`] instead; the two shapes
/// agree on `success` and `message` so clients can branch on one field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiEnvelope<()> {
    /// Envelope carrying only a confirmation message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for ApiEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiEnvelope {{ success: {}, message: {:?}, data: {:?} }}",
            self.success, self.message, self.data
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_are_not_serialized() {
        let envelope = ApiEnvelope::message("Logged out");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Logged out");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn data_round_trips() {
        let envelope = ApiEnvelope::ok(vec![1, 2, 3], "ok");
        let json = serde_json::to_string(&envelope).unwrap();
        let back: ApiEnvelope<Vec<i32>> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.data, Some(vec![1, 2, 3]));
    }
}
