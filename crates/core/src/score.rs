use std::collections::HashMap;

use crate::model::Question;

/// The user's in-progress answers, keyed by question prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    choices: HashMap<String, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice, replacing any earlier one for the same question.
    pub fn select(&mut self, prompt: impl Into<String>, answer: impl Into<String>) {
        self.choices.insert(prompt.into(), answer.into());
    }

    #[must_use]
    pub fn chosen(&self, prompt: &str) -> Option<&str> {
        self.choices.get(prompt).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices
            .iter()
            .map(|(prompt, answer)| (prompt.as_str(), answer.as_str()))
    }
}

/// Count the correct answers on `sheet`.
///
/// Comparison is exact string equality on the raw, still-encoded answer text;
/// entity decoding is a display-only transform and never happens here.
/// Entries naming a prompt that is not in `questions` contribute zero rather
/// than erroring, and unanswered questions contribute zero.
#[must_use]
pub fn score(questions: &[Question], sheet: &AnswerSheet) -> usize {
    sheet
        .iter()
        .filter(|(prompt, answer)| {
            questions
                .iter()
                .any(|question| question.prompt == *prompt && question.correct_answer == *answer)
        })
        .count()
}
