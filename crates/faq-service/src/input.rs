//! Service-owned input contracts.
//!
//! Validation lives at the service boundary so every caller — CLI,
//! future HTTP surface, tests — goes through the same checks.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Input for [`crate::FaqService::create`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFaq {
    pub question: String,
    pub answer: String,
}

impl CreateFaq {
    /// Enforce the input shape: both fields non-empty after trimming.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Validation` naming the offending field.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.question.trim().is_empty() {
            return Err(ServiceError::Validation("question must not be empty".into()));
        }
        if self.answer.trim().is_empty() {
            return Err(ServiceError::Validation("answer must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_passes() {
        let input = CreateFaq {
            question: "How do I log in?".into(),
            answer: "With your account.".into(),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_question_is_rejected() {
        let input = CreateFaq {
            question: "   ".into(),
            answer: "a".into(),
        };
        let err = input.validate().unwrap_err();
        assert_eq!(err.kind(), "validation");
        assert!(err.to_string().contains("question"));
    }

    #[test]
    fn empty_answer_is_rejected() {
        let input = CreateFaq {
            question: "q".into(),
            answer: "".into(),
        };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("answer"));
    }
}
