//! Flow run response shape.
//!
//! The run endpoint nests its reply several levels deep:
//!
//! ```text
//! {"outputs": [{"outputs": [{"results": {"message": {"data": {"text": ...}}}}]}]}
//! ```
//!
//! The first entry of each nesting level drives the reply text. A response
//! without the `outputs` key carries no reply at all.

use serde::{Deserialize, Serialize};

/// Top-level response from a flow run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunFlowResponse {
    /// Flow outputs; absent when the run produced no result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<RunOutput>>,
}

/// One flow-level output entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunOutput {
    /// Component outputs within this flow output.
    #[serde(default)]
    pub outputs: Vec<ComponentOutput>,
}

/// One component-level output entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentOutput {
    /// Results produced by the component.
    #[serde(default)]
    pub results: ComponentResults,
}

/// Results mapping of a component output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentResults {
    /// The chat message result, when the component produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ResultMessage>,
}

/// A chat message result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultMessage {
    /// Message payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

/// Payload of a chat message result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageData {
    /// The reply text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RunFlowResponse {
    /// Extracts the reply text, taking the first entry at every level.
    pub fn message_text(&self) -> Option<&str> {
        self.outputs
            .as_deref()?
            .first()?
            .outputs
            .first()?
            .results
            .message
            .as_ref()?
            .data
            .as_ref()?
            .text
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_extracts_text_from_the_success_shape() {
        let body = json!({
            "outputs": [{
                "outputs": [{
                    "results": {
                        "message": {
                            "data": {"text": "Hello there!"}
                        }
                    }
                }]
            }]
        });

        let response: RunFlowResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.message_text(), Some("Hello there!"));
    }

    #[test]
    fn test_missing_outputs_yields_none() {
        let body = json!({"detail": "flow not built"});
        let response: RunFlowResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.message_text(), None);
    }

    #[test]
    fn test_empty_outputs_yields_none() {
        let body = json!({"outputs": []});
        let response: RunFlowResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.message_text(), None);
    }

    #[test]
    fn test_first_entry_wins() {
        let body = json!({
            "outputs": [
                {"outputs": [
                    {"results": {"message": {"data": {"text": "first"}}}},
                    {"results": {"message": {"data": {"text": "second"}}}},
                ]},
                {"outputs": [{"results": {"message": {"data": {"text": "third"}}}}]},
            ]
        });

        let response: RunFlowResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.message_text(), Some("first"));
    }
}
