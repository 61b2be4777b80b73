use serde::{Deserialize, Serialize};

/// Query string of the signup and unregister routes.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SignupQuery {
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body. `detail` is optional on the reading side since not every
/// failing response carries one.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        ErrorResponse {
            detail: Some(detail.into()),
        }
    }
}
