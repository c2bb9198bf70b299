use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::warn;
use rand::rng;

use trivia_core::{CategoryIndex, Difficulty, Question, QuestionKind, QuestionRequest};

use crate::error::SessionError;
use crate::source::QuestionSource;

/// Read-only view of the controller's published state.
///
/// `questions` is replaced only by a successful fetch, `categories` only by a
/// successful category fetch; on failure both keep their prior value.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub questions: Vec<Question>,
    pub is_loading: bool,
    pub categories: CategoryIndex,
}

/// Owns the quiz session state and mediates access to the remote API.
///
/// Every question fetch carries a generation token, and a response is applied
/// only while its token is still the latest one issued. A superseded request
/// can therefore never overwrite state from a newer one: the latest-issued
/// call wins, regardless of arrival order.
///
/// Errors never escape unhandled. Failed fetches clear the loading flag,
/// keep the previous data, log a warning and hand the error back so a caller
/// can offer a retry.
pub struct SessionService {
    source: Arc<dyn QuestionSource>,
    state: Mutex<SessionState>,
    generation: AtomicU64,
}

impl SessionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            state: Mutex::new(SessionState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Current state, cloned. Presentation layers poll this between calls.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.lock().clone()
    }

    /// Refresh the category index from the remote service.
    ///
    /// On failure the previous index (initially just "Any Category") stays in
    /// place.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Api` when the fetch or decode fails.
    pub async fn load_categories(&self) -> Result<(), SessionError> {
        match self.source.categories().await {
            Ok(categories) => {
                self.lock().categories = CategoryIndex::from_categories(categories);
                Ok(())
            }
            Err(err) => {
                warn!("category fetch failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Fetch a fresh question set and replace the current one.
    ///
    /// `category_name` is resolved through the category index; unknown names
    /// and "Any Category" fall back to an unfiltered request. The loading
    /// flag is raised for the duration of the fetch and cleared exactly once
    /// when the outcome is applied. On failure the previous question set is
    /// kept. A call superseded by a newer `start_session` discards its
    /// response entirely and returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Request` for an out-of-range amount and
    /// `SessionError::Api` when the fetch or decode fails.
    pub async fn start_session(
        &self,
        amount: u8,
        category_name: &str,
        difficulty: Difficulty,
        kind: Option<QuestionKind>,
    ) -> Result<(), SessionError> {
        let (request, token) = {
            let mut state = self.lock();
            let request = QuestionRequest::new(amount, difficulty)?
                .with_category(state.categories.resolve(category_name))
                .with_kind(kind);
            state.is_loading = true;
            (request, self.generation.fetch_add(1, Ordering::SeqCst) + 1)
        };

        let outcome = self.source.questions(&request).await;

        let mut state = self.lock();
        if self.generation.load(Ordering::SeqCst) != token {
            // a newer request owns the state now
            return Ok(());
        }
        match outcome {
            Ok(records) => {
                let mut rng = rng();
                state.questions = records
                    .into_iter()
                    .map(|record| record.into_question(&mut rng))
                    .collect();
                state.is_loading = false;
                Ok(())
            }
            Err(err) => {
                state.is_loading = false;
                warn!("question fetch failed: {err}");
                Err(err.into())
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
