use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use trivia_core::{Category, QuestionRecord, QuestionRequest};

use crate::error::ApiError;
use crate::source::QuestionSource;

const DEFAULT_BASE_URL: &str = "https://opentdb.com";

/// HTTP client for the Open Trivia Database.
///
/// One GET per call, no retries, no caching; timeouts are whatever the
/// underlying client defaults to.
#[derive(Debug, Clone)]
pub struct OpenTriviaClient {
    client: Client,
    base_url: String,
}

impl Default for OpenTriviaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenTriviaClient {
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host, mainly for tests.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the category list.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` on transport failure, `ApiError::HttpStatus`
    /// for a non-success HTTP response and `ApiError::Decode` when the body
    /// does not match the expected envelope.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = format!("{}/api_category.php", self.base_url);
        let body = self.get(&url, &[]).await?;
        decode_categories(&body)
    }

    /// Fetch one question set.
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_categories`], plus `ApiError::Api` when the service
    /// reports a non-zero `response_code`.
    pub async fn fetch_questions(
        &self,
        request: &QuestionRequest,
    ) -> Result<Vec<QuestionRecord>, ApiError> {
        let url = format!("{}/api.php", self.base_url);
        let body = self.get(&url, &query_pairs(request)).await?;
        decode_questions(&body)
    }

    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let response = self.client.get(url).query(query).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status()));
        }
        Ok(response.text().await?)
    }
}

#[async_trait]
impl QuestionSource for OpenTriviaClient {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch_categories().await
    }

    async fn questions(&self, request: &QuestionRequest) -> Result<Vec<QuestionRecord>, ApiError> {
        self.fetch_questions(request).await
    }
}

//
// ─── WIRE ENVELOPES ────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
struct CategoryEnvelope {
    trivia_categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct QuestionEnvelope {
    response_code: u8,
    results: Vec<QuestionRecord>,
}

/// Query parameters for a question fetch. The `category` pair is appended
/// only for a present, non-zero id, and `type` only when a kind is set.
fn query_pairs(request: &QuestionRequest) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("amount", request.amount().to_string()),
        ("difficulty", request.difficulty().as_str().to_string()),
    ];
    if let Some(kind) = request.kind() {
        pairs.push(("type", kind.as_str().to_string()));
    }
    if let Some(category) = request.category() {
        pairs.push(("category", category.to_string()));
    }
    pairs
}

fn decode_categories(body: &str) -> Result<Vec<Category>, ApiError> {
    let envelope: CategoryEnvelope = serde_json::from_str(body)?;
    Ok(envelope.trivia_categories)
}

fn decode_questions(body: &str) -> Result<Vec<QuestionRecord>, ApiError> {
    let envelope: QuestionEnvelope = serde_json::from_str(body)?;
    if envelope.response_code != 0 {
        return Err(ApiError::Api {
            code: envelope.response_code,
        });
    }
    Ok(envelope.results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::{CategoryIndex, Difficulty, QuestionKind};

    fn request_for(category_name: &str) -> QuestionRequest {
        let index = CategoryIndex::from_categories(vec![Category {
            id: 17,
            name: "Science".into(),
        }]);
        QuestionRequest::new(10, Difficulty::Medium)
            .unwrap()
            .with_category(index.resolve(category_name))
            .with_kind(Some(QuestionKind::Multiple))
    }

    #[test]
    fn any_category_appends_no_category_pair() {
        let pairs = query_pairs(&request_for("Any Category"));
        assert!(pairs.iter().all(|(name, _)| *name != "category"));
        assert!(pairs.contains(&("amount", "10".into())));
        assert!(pairs.contains(&("difficulty", "medium".into())));
        assert!(pairs.contains(&("type", "multiple".into())));
    }

    #[test]
    fn resolved_category_appends_its_id() {
        let pairs = query_pairs(&request_for("Science"));
        assert!(pairs.contains(&("category", "17".into())));
    }

    #[test]
    fn unfiltered_kind_appends_no_type_pair() {
        let request = QuestionRequest::new(5, Difficulty::Hard).unwrap();
        let pairs = query_pairs(&request);
        assert!(pairs.iter().all(|(name, _)| *name != "type"));
    }

    #[test]
    fn category_envelope_decodes() {
        let body = r#"{"trivia_categories":[{"id":9,"name":"General Knowledge"},{"id":17,"name":"Science"}]}"#;
        let categories = decode_categories(body).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].id, 17);
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_questions("<html>busy</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = decode_categories(r#"{"categories":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn non_zero_response_code_is_an_api_error() {
        let body = r#"{"response_code":1,"results":[]}"#;
        let err = decode_questions(body).unwrap_err();
        assert!(matches!(err, ApiError::Api { code: 1 }));
        assert!(err.to_string().contains("no results"));
    }

    #[test]
    fn question_envelope_decodes() {
        let body = r#"{
            "response_code": 0,
            "results": [{
                "category": "Science",
                "type": "multiple",
                "difficulty": "easy",
                "question": "What is H2O?",
                "correct_answer": "Water",
                "incorrect_answers": ["Salt", "Sugar", "Helium"]
            }]
        }"#;
        let records = decode_questions(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].correct_answer, "Water");
        assert_eq!(records[0].incorrect_answers.len(), 3);
    }
}
