use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

//
// ─── FILTER ENUMS ──────────────────────────────────────────────────────────────
//

/// Raised when a difficulty or question-type label cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {what}: {raw}")]
pub struct ParseFilterError {
    pub what: &'static str,
    pub raw: String,
}

/// Question selection difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Wire form, as the remote API expects it in a query string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseFilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseFilterError {
                what: "difficulty",
                raw: raw.to_string(),
            }),
        }
    }
}

/// `multiple` (four options) or `boolean` (true/false).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Multiple,
    Boolean,
}

impl QuestionKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Multiple => "multiple",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKind {
    type Err = ParseFilterError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "multiple" => Ok(Self::Multiple),
            "boolean" => Ok(Self::Boolean),
            _ => Err(ParseFilterError {
                what: "question type",
                raw: raw.to_string(),
            }),
        }
    }
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// One question exactly as the remote API returns it.
///
/// Text fields keep their HTML-entity encoding; decoding happens at render
/// time only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub difficulty: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

impl QuestionRecord {
    /// Promote the wire record to a domain question.
    ///
    /// The correct answer is shuffled in with the incorrect ones exactly once
    /// here; the stored order never changes afterwards, so the answer list a
    /// user sees is stable for the lifetime of the question set.
    #[must_use]
    pub fn into_question<R: Rng + ?Sized>(self, rng: &mut R) -> Question {
        let mut answers = Vec::with_capacity(1 + self.incorrect_answers.len());
        answers.push(self.correct_answer.clone());
        answers.extend(self.incorrect_answers.iter().cloned());
        answers.shuffle(rng);

        Question {
            category: self.category,
            kind: self.kind,
            difficulty: self.difficulty,
            prompt: self.prompt,
            correct_answer: self.correct_answer,
            incorrect_answers: self.incorrect_answers,
            answers,
        }
    }
}

/// A question with its presentation order fixed at load time.
///
/// The prompt text serves as the question's identity within a set; the remote
/// service does not repeat prompts inside one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub category: String,
    pub kind: QuestionKind,
    pub difficulty: String,
    pub prompt: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    answers: Vec<String>,
}

impl Question {
    /// All answer options in their fixed, shuffled order.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn capital_record() -> QuestionRecord {
        QuestionRecord {
            category: "Geography".into(),
            kind: QuestionKind::Multiple,
            difficulty: "easy".into(),
            prompt: "What is the capital of France?".into(),
            correct_answer: "Paris".into(),
            incorrect_answers: vec!["London".into(), "Berlin".into(), "Rome".into()],
        }
    }

    #[test]
    fn answers_are_a_permutation_with_the_correct_answer_once() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let question = capital_record().into_question(&mut rng);

            assert_eq!(question.answers().len(), 4);
            let correct = question
                .answers()
                .iter()
                .filter(|answer| *answer == "Paris")
                .count();
            assert_eq!(correct, 1);

            let mut sorted: Vec<&str> = question.answers().iter().map(String::as_str).collect();
            sorted.sort_unstable();
            assert_eq!(sorted, ["Berlin", "London", "Paris", "Rome"]);
        }
    }

    #[test]
    fn answer_order_is_fixed_after_load() {
        let mut rng = StdRng::seed_from_u64(3);
        let question = capital_record().into_question(&mut rng);
        let first: Vec<String> = question.answers().to_vec();
        let second: Vec<String> = question.answers().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn record_decodes_from_api_json() {
        let body = r#"{
            "category": "Science &amp; Nature",
            "type": "boolean",
            "difficulty": "hard",
            "question": "Is this encoded?",
            "correct_answer": "True",
            "incorrect_answers": ["False"]
        }"#;
        let record: QuestionRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.kind, QuestionKind::Boolean);
        assert_eq!(record.prompt, "Is this encoded?");
        // stays encoded in the model
        assert_eq!(record.category, "Science &amp; Nature");
    }

    #[test]
    fn filter_labels_parse_case_insensitively() {
        assert_eq!("Hard".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(
            "Boolean".parse::<QuestionKind>().unwrap(),
            QuestionKind::Boolean
        );
        assert!("impossible".parse::<Difficulty>().is_err());
        assert!("essay".parse::<QuestionKind>().is_err());
    }
}
