use thiserror::Error;

use crate::model::{Difficulty, QuestionKind};

/// The remote API rejects requests for more than this many questions.
pub const MAX_AMOUNT: u8 = 50;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    #[error("amount must be between 1 and {MAX_AMOUNT}, got {amount}")]
    InvalidAmount { amount: u8 },
}

/// Parameters for one question fetch.
///
/// A missing category or question kind means "unfiltered"; category id 0 is
/// normalized away so it is never sent to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    amount: u8,
    category: Option<u32>,
    difficulty: Difficulty,
    kind: Option<QuestionKind>,
}

impl QuestionRequest {
    /// Create an unfiltered request.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::InvalidAmount` when `amount` is outside
    /// `1..=MAX_AMOUNT`.
    pub fn new(amount: u8, difficulty: Difficulty) -> Result<Self, RequestError> {
        if amount == 0 || amount > MAX_AMOUNT {
            return Err(RequestError::InvalidAmount { amount });
        }
        Ok(Self {
            amount,
            category: None,
            difficulty,
            kind: None,
        })
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<u32>) -> Self {
        self.category = category.filter(|id| *id != 0);
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: Option<QuestionKind>) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn amount(&self) -> u8 {
        self.amount
    }

    #[must_use]
    pub fn category(&self) -> Option<u32> {
        self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn kind(&self) -> Option<QuestionKind> {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_oversized_amounts_are_rejected() {
        assert!(matches!(
            QuestionRequest::new(0, Difficulty::Easy),
            Err(RequestError::InvalidAmount { amount: 0 })
        ));
        assert!(matches!(
            QuestionRequest::new(51, Difficulty::Easy),
            Err(RequestError::InvalidAmount { amount: 51 })
        ));
        assert!(QuestionRequest::new(50, Difficulty::Easy).is_ok());
    }

    #[test]
    fn category_zero_is_normalized_to_unfiltered() {
        let request = QuestionRequest::new(10, Difficulty::Medium)
            .unwrap()
            .with_category(Some(0));
        assert_eq!(request.category(), None);

        let request = request.with_category(Some(17));
        assert_eq!(request.category(), Some(17));
    }
}
