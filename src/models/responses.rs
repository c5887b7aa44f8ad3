//! Bodies returned by the mutation endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Success body of `signup` / `unregister`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-success response.
///
/// `detail` is usually a string, but validation failures may carry a list of
/// problems instead; only a string is shown to the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rejection {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl Rejection {
    pub fn detail_text(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .map(str::to_string)
    }
}
