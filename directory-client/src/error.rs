/// Normalized gateway errors
///
/// Whatever went wrong on the wire, callers see one of three shapes: an API
/// failure carrying the envelope's status, message and field errors; a
/// transport failure; or a response that could not be decoded.

use directory_shared::validation::FieldError;

/// Gateway error types
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The API answered with a failure envelope
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        errors: Vec<FieldError>,
    },

    /// The request never got a response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response was not the expected envelope
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Gateway result type alias
pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// HTTP status of an API failure
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Field errors reported by the API, if any
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            GatewayError::Api { errors, .. } => errors,
            _ => &[],
        }
    }
}
