//! Planet model matching the server's planet aggregation record.

use serde::{Deserialize, Serialize};

/// A planet: a named aggregation of subscribed feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    #[serde(default)]
    pub handle: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields the list template may use that this client does not interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_fields_are_kept() {
        let planet: Planet = serde_json::from_value(json!({
            "id": "p1",
            "handle": "java",
            "title": "Planet Java",
            "lastUpdated": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(planet.title, "Planet Java");
        assert!(planet.description.is_none());
        assert_eq!(planet.extra["lastUpdated"], json!("2024-01-01T00:00:00Z"));

        let back = serde_json::to_value(&planet).unwrap();
        assert_eq!(back["lastUpdated"], json!("2024-01-01T00:00:00Z"));
    }
}
