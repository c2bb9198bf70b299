#![forbid(unsafe_code)]

pub mod error;
pub mod open_trivia;
pub mod session;
pub mod source;

pub use error::{ApiError, SessionError};
pub use open_trivia::OpenTriviaClient;
pub use session::{SessionService, SessionState};
pub use source::QuestionSource;
