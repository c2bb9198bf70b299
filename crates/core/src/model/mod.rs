mod category;
mod question;
mod request;

pub use category::{Category, CategoryIndex, ANY_CATEGORY};
pub use question::{Difficulty, ParseFilterError, Question, QuestionKind, QuestionRecord};
pub use request::{QuestionRequest, RequestError, MAX_AMOUNT};
