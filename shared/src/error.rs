use thiserror::Error;

/// Everything that can go wrong between picking a file and rendering a
/// prediction. All variants surface in the same dismissible inline region;
/// none are retried.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PredictError {
    /// Rejected before any network call was made.
    #[error("{0}")]
    Validation(String),
    /// The request could not be sent or its body could not be read/parsed.
    #[error("{0}")]
    Transport(String),
    /// The endpoint answered outside the 2xx range.
    #[error("Request failed ({status}): {body}")]
    Server { status: u16, body: String },
}

impl PredictError {
    pub fn no_file() -> Self {
        PredictError::Validation("Please select an image first.".into())
    }

    pub fn not_an_image() -> Self {
        PredictError::Validation("Please choose an image file (jpg, png, webp, etc.)".into())
    }

    pub fn transport(message: impl Into<String>) -> Self {
        PredictError::Transport(message.into())
    }

    pub fn server(status: u16, body: impl Into<String>) -> Self {
        PredictError::Server {
            status,
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_embeds_status_and_body() {
        let err = PredictError::server(500, "internal error");
        assert_eq!(err.to_string(), "Request failed (500): internal error");
    }

    #[test]
    fn transport_error_surfaces_underlying_message() {
        let err = PredictError::transport("dns lookup failed");
        assert_eq!(err.to_string(), "dns lookup failed");
    }

    #[test]
    fn validation_messages_match_the_ui_copy() {
        assert_eq!(
            PredictError::no_file().to_string(),
            "Please select an image first."
        );
        assert_eq!(
            PredictError::not_an_image().to_string(),
            "Please choose an image file (jpg, png, webp, etc.)"
        );
    }
}
