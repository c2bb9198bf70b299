use async_trait::async_trait;

use trivia_core::{Category, QuestionRecord, QuestionRequest};

use crate::error::ApiError;

/// Anything that can serve category metadata and question sets.
///
/// Implemented by [`crate::OpenTriviaClient`]; tests substitute scripted
/// in-memory sources.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;

    async fn questions(&self, request: &QuestionRequest) -> Result<Vec<QuestionRecord>, ApiError>;
}
