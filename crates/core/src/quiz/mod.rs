//! Quiz questions, answers and results.

pub mod bank;
mod data;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::LessonId;

pub use bank::{QuestionBankSource, ResolvedQuiz, resolve_questions};

/// A score must be strictly above this share of questions to pass.
pub const PASS_THRESHOLD_PERCENT: u32 = 80;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz for lesson {0} has no questions")]
    NoQuestions(LessonId),
    #[error("option {selected} is out of range for a question with {options} options")]
    OptionOutOfRange { selected: usize, options: usize },
    #[error("no quiz is in progress")]
    NotInQuiz,
    #[error("no finished quiz to act on")]
    NotFinished,
}

/// Multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// Grade `selected` against this question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OptionOutOfRange` when `selected` does not name an option.
    pub fn grade(&self, selected: usize) -> Result<AnswerRecord, QuizError> {
        if selected >= self.options.len() {
            return Err(QuizError::OptionOutOfRange {
                selected,
                options: self.options.len(),
            });
        }
        Ok(AnswerRecord {
            selected_index: selected,
            correct_index: self.correct_answer,
            correct: selected == self.correct_answer,
        })
    }
}

/// What the learner picked for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub selected_index: usize,
    pub correct_index: usize,
    pub correct: bool,
}

/// Outcome of a finished quiz, kept for the review screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    pub lesson_id: LessonId,
    pub total: u32,
    pub score: u32,
    /// `score / total` as a whole percentage, rounded half up.
    pub percentage: u32,
    pub answers: Vec<AnswerRecord>,
    pub questions: Vec<QuizQuestion>,
}

impl QuizResult {
    #[must_use]
    pub fn new(
        lesson_id: LessonId,
        score: u32,
        answers: Vec<AnswerRecord>,
        questions: Vec<QuizQuestion>,
    ) -> Self {
        let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
        Self {
            lesson_id,
            total,
            score,
            percentage: rounded_percentage(score, total),
            answers,
            questions,
        }
    }

    #[must_use]
    pub fn is_passing(&self) -> bool {
        is_passing(self.score, self.total)
    }
}

/// `round(100 * score / total)`, half rounding up. Zero questions yields 0.
#[must_use]
pub fn rounded_percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = u64::from(score);
    let total = u64::from(total);
    let pct = (200 * score + total) / (2 * total);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

/// Strictly more than 80% correct, compared without rounding.
#[must_use]
pub fn is_passing(score: u32, total: u32) -> bool {
    total > 0 && 100 * u64::from(score) > u64::from(PASS_THRESHOLD_PERCENT) * u64::from(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> QuizQuestion {
        QuizQuestion {
            id: 1,
            question: "Pick one".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: correct,
            explanation: None,
        }
    }

    #[test]
    fn grading_marks_correct_and_wrong() {
        let q = question(1);
        assert!(q.grade(1).unwrap().correct);
        let wrong = q.grade(2).unwrap();
        assert!(!wrong.correct);
        assert_eq!(wrong.correct_index, 1);
        assert_eq!(wrong.selected_index, 2);
    }

    #[test]
    fn grading_rejects_out_of_range_option() {
        assert_eq!(
            question(0).grade(3).unwrap_err(),
            QuizError::OptionOutOfRange {
                selected: 3,
                options: 3
            }
        );
    }

    #[test]
    fn eighty_percent_is_not_a_pass() {
        assert!(!is_passing(4, 5));
        assert!(is_passing(5, 5));
        assert!(!is_passing(8, 10));
        assert!(is_passing(9, 10));
        assert!(!is_passing(0, 0));
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(rounded_percentage(4, 5), 80);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(1, 3), 33);
        assert_eq!(rounded_percentage(0, 0), 0);
    }

    #[test]
    fn result_derives_total_from_questions() {
        let questions = vec![question(0), question(0)];
        let result = QuizResult::new(LessonId::new(3), 2, Vec::new(), questions);
        assert_eq!(result.total, 2);
        assert_eq!(result.percentage, 100);
        assert!(result.is_passing());
    }
}
