#![forbid(unsafe_code)]

pub mod html;
pub mod model;
pub mod score;

pub use html::decode_entities;
pub use model::{
    Category, CategoryIndex, Difficulty, ParseFilterError, Question, QuestionKind, QuestionRecord,
    QuestionRequest, RequestError, ANY_CATEGORY,
};
pub use score::{score, AnswerSheet};
