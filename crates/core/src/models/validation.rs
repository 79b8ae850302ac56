//! Validation errors for submitted games

use crate::constants::{INVALID_GAME_MODE, INVALID_REQUEST_BODY};

/// Reason a game submission was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("unknown game mode '{0}'")]
    UnknownGameMode(String),
}

impl ValidationError {
    /// Message safe to send back to the client
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Empty { .. } | Self::NotPositive { .. } => INVALID_REQUEST_BODY,
            Self::UnknownGameMode(_) => INVALID_GAME_MODE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_message_hides_input() {
        let err = ValidationError::UnknownGameMode("<script>".into());
        assert_eq!(err.public_message(), "Invalid game mode");
        assert!(err.to_string().contains("<script>"));
    }

    #[test]
    fn field_errors_share_one_message() {
        assert_eq!(
            ValidationError::Empty { field: "username" }.public_message(),
            ValidationError::NotPositive { field: "time" }.public_message(),
        );
    }
}
