use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised at the engine boundary.
///
/// The per-frame pipeline never fails; only malformed payloads handed to the
/// host interface are rejected.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {message}")]
    InputError { message: String },
}

impl EngineError {
    pub fn input_error(message: impl Into<String>) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_message() {
        let err = EngineError::input_error("Star buffer length must be a multiple of 4.");
        assert_eq!(
            err.to_string(),
            "Invalid input: Star buffer length must be a multiple of 4."
        );
    }
}
