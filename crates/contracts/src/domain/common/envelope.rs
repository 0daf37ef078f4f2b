use serde::{Deserialize, Serialize};

/// Response envelope used by most endpoints: `{success, data, error}`.
///
/// Some endpoints answer with the bare payload instead; see
/// [`ApiEnvelope::unwrap_value`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

impl ApiEnvelope<serde_json::Value> {
    /// Server-reported failure message of an envelope, if it is one.
    pub fn failure_message(body: &serde_json::Value) -> Option<String> {
        let obj = body.as_object()?;
        let failed = matches!(obj.get("success"), Some(serde_json::Value::Bool(false)));
        if !failed {
            return None;
        }
        Some(error_message(body).unwrap_or_else(|| FALLBACK_ERROR.to_string()))
    }

    /// `data` of an enveloped body, or the body itself when not enveloped.
    pub fn unwrap_value(body: serde_json::Value) -> serde_json::Value {
        match body {
            serde_json::Value::Object(mut obj) if obj.contains_key("data") => {
                obj.remove("data").unwrap_or(serde_json::Value::Null)
            }
            other => other,
        }
    }
}

/// Message shown when the server gives no reason.
pub const FALLBACK_ERROR: &str = "API request failed";

/// `error` (or `message`) field of a JSON error body.
pub fn error_message(body: &serde_json::Value) -> Option<String> {
    ["error", "message"]
        .iter()
        .filter_map(|key| body.get(*key))
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unwrap_enveloped_and_bare() {
        let enveloped = json!({"success": true, "data": [1, 2]});
        assert_eq!(ApiEnvelope::unwrap_value(enveloped), json!([1, 2]));
        let bare = json!([{"id": 1}]);
        assert_eq!(ApiEnvelope::unwrap_value(bare.clone()), bare);
    }

    #[test]
    fn test_failure_message() {
        let failed = json!({"success": false, "error": "Equipment not found"});
        assert_eq!(
            ApiEnvelope::failure_message(&failed).as_deref(),
            Some("Equipment not found")
        );
        let silent = json!({"success": false});
        assert_eq!(
            ApiEnvelope::failure_message(&silent).as_deref(),
            Some(FALLBACK_ERROR)
        );
        assert_eq!(ApiEnvelope::failure_message(&json!({"success": true})), None);
        assert_eq!(ApiEnvelope::failure_message(&json!([])), None);
    }
}
