use serde::{Deserialize, Serialize};

/// Success body of `POST /submit_selected_orders`. `to_delete` lists the
/// source orders superseded by the newly created consolidated order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    #[serde(rename = "toDelete", default)]
    pub to_delete: Vec<String>,
}

/// Body of `POST /delete_source_orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(rename = "orderIDs")]
    pub order_ids: Vec<String>,
}

/// Success body of `POST /delete_source_orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_submit_response() {
        let response: SubmitResponse =
            serde_json::from_str(r#"{"message":"ok","toDelete":["o1","o2"]}"#).unwrap();
        assert_eq!(response.message, "ok");
        assert_eq!(response.to_delete, vec!["o1", "o2"]);
    }

    #[test]
    fn missing_to_delete_means_nothing_to_delete() {
        let response: SubmitResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert!(response.to_delete.is_empty());
    }

    #[test]
    fn delete_request_uses_order_ids_key() {
        let request = DeleteRequest {
            order_ids: vec!["o1".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["orderIDs"][0], "o1");
    }
}
