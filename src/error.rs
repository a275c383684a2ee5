use thiserror::Error;

/// Failures surfaced to the user as notifications.
#[derive(Debug, Error)]
pub enum CopilotError {
    /// No API token in the environment. The feature stays disabled.
    #[error("Hugging Face token not found. Please set {0}.")]
    MissingToken(&'static str),
    #[error("Invalid model selection")]
    InvalidModelSelection,
    #[error("No text selected")]
    EmptySelection,
    /// The inference call failed. History is left untouched.
    #[error("Error generating text: {0}")]
    Generation(anyhow::Error),
}

impl CopilotError {
    /// Whether the session keeps working after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CopilotError::MissingToken(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_message_includes_cause() {
        let err = CopilotError::Generation(anyhow::anyhow!("quota exceeded"));
        assert_eq!(err.to_string(), "Error generating text: quota exceeded");
        assert!(err.is_recoverable());
    }

    #[test]
    fn missing_token_is_fatal() {
        let err = CopilotError::MissingToken("HF_TOKEN");
        assert_eq!(
            err.to_string(),
            "Hugging Face token not found. Please set HF_TOKEN."
        );
        assert!(!err.is_recoverable());
    }
}
