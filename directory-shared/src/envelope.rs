/// Uniform response wrapper
///
/// Every API response, success or failure, is an `Envelope`:
///
/// ```json
/// {
///   "success": true,
///   "count": 1,
///   "data": [ { "id": "…", "name": "Ann Lee", … } ]
/// }
/// ```
///
/// ```json
/// {
///   "success": false,
///   "message": "Validation failed",
///   "errors": [ { "field": "email", "message": "Email is required" } ]
/// }
/// ```

use crate::validation::FieldError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
            errors: None,
        }
    }

    /// Attaches a human-readable message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Successful response with only a message (e.g. delete)
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
            errors: None,
        }
    }

    /// Failure response
    pub fn failure(message: impl Into<String>, errors: Option<Vec<FieldError>>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
            errors,
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Successful list response; `count` is the number of items
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            count: Some(count),
            ..Self::data(items)
        }
    }
}
