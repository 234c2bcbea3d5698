//! Flow run request body.

use serde::{Deserialize, Serialize};

/// JSON body posted to the flow run endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFlowRequest {
    /// The user message handed to the flow.
    pub input_value: String,
    /// Requested output modality.
    pub output_type: String,
    /// Input modality of the message.
    pub input_type: String,
}

impl RunFlowRequest {
    /// Creates a chat-in, chat-out run request.
    pub fn chat(message: impl Into<String>) -> Self {
        Self {
            input_value: message.into(),
            output_type: "chat".to_owned(),
            input_type: "chat".to_owned(),
        }
    }

    /// Overrides the output modality.
    pub fn with_output_type(mut self, output_type: impl Into<String>) -> Self {
        self.output_type = output_type.into();
        self
    }
}
