//! Question-bank resolution.
//!
//! Lookup order: questions written for the lesson title, then the older
//! id-keyed sets, then a five-question quiz generated from lesson metadata.

use super::QuizQuestion;
use super::data::{BY_LESSON_ID, BY_TITLE};
use crate::curriculum::{Difficulty, FlattenedLessonItem};
use crate::model::LessonId;

/// Compile-time question record. Converted to `QuizQuestion` on resolution.
#[derive(Debug)]
pub struct StaticQuestion {
    pub id: u32,
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct_answer: usize,
    pub explanation: Option<&'static str>,
}

impl StaticQuestion {
    fn to_question(&self) -> QuizQuestion {
        QuizQuestion {
            id: self.id,
            question: self.question.to_string(),
            options: self.options.iter().map(|o| (*o).to_string()).collect(),
            correct_answer: self.correct_answer,
            explanation: self.explanation.map(str::to_string),
        }
    }
}

/// Which bank supplied a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionBankSource {
    Tailored,
    Legacy,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuiz {
    pub source: QuestionBankSource,
    pub questions: Vec<QuizQuestion>,
}

/// Options offered by the generated difficulty question, in display order.
pub const DIFFICULTY_OPTIONS: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "All levels"];

const FALLBACK_TITLE: &str = "This Lesson";
const FALLBACK_TRACK: &str = "Product Management Foundations";
const FALLBACK_MODULE: &str = "Core Concepts";

/// Questions for `lesson_id`, looked up in `lessons` for title and metadata.
///
/// Always returns a non-empty list. An id missing from `lessons` still gets a
/// generated quiz built from placeholder metadata.
#[must_use]
pub fn resolve_questions(lessons: &[FlattenedLessonItem], lesson_id: LessonId) -> ResolvedQuiz {
    let lesson = lessons.iter().find(|l| l.id == lesson_id);

    if let Some(questions) = lesson.and_then(|l| tailored_questions(&l.title)) {
        return ResolvedQuiz {
            source: QuestionBankSource::Tailored,
            questions,
        };
    }

    if let Some(questions) = legacy_questions(lesson_id) {
        return ResolvedQuiz {
            source: QuestionBankSource::Legacy,
            questions,
        };
    }

    ResolvedQuiz {
        source: QuestionBankSource::Generated,
        questions: generated_questions(lesson_id, lesson),
    }
}

#[must_use]
pub fn tailored_questions(title: &str) -> Option<Vec<QuizQuestion>> {
    BY_TITLE
        .iter()
        .find(|(key, qs)| *key == title && !qs.is_empty())
        .map(|(_, qs)| qs.iter().map(StaticQuestion::to_question).collect())
}

#[must_use]
pub fn legacy_questions(lesson_id: LessonId) -> Option<Vec<QuizQuestion>> {
    BY_LESSON_ID
        .iter()
        .find(|(id, qs)| *id == lesson_id.value() && !qs.is_empty())
        .map(|(_, qs)| qs.iter().map(StaticQuestion::to_question).collect())
}

fn generated_id(lesson_id: LessonId, n: u32) -> u32 {
    lesson_id.value().saturating_mul(100).saturating_add(n)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Five metadata questions. Correct answers sit at index 0 except the
/// difficulty question, whose answer is the lesson's difficulty.
#[must_use]
pub fn generated_questions(
    lesson_id: LessonId,
    lesson: Option<&FlattenedLessonItem>,
) -> Vec<QuizQuestion> {
    let title = lesson.map_or(FALLBACK_TITLE, |l| l.title.as_str());
    let track = lesson.map_or(FALLBACK_TRACK, |l| l.track_title.as_str());
    let module = lesson.map_or(FALLBACK_MODULE, |l| l.module_title.as_str());
    let difficulty = lesson.map_or(Difficulty::Beginner, |l| l.difficulty);
    let difficulty_index = DIFFICULTY_OPTIONS
        .iter()
        .position(|d| *d == difficulty.as_str())
        .unwrap_or(0);

    vec![
        QuizQuestion {
            id: generated_id(lesson_id, 1),
            question: "What is the primary focus of this lesson?".into(),
            options: strings(&[title, "Design Systems", "QA Testing", "Code Compilation"]),
            correct_answer: 0,
            explanation: Some(format!("The lesson focuses on {title}.")),
        },
        QuizQuestion {
            id: generated_id(lesson_id, 2),
            question: "Which track does this lesson belong to?".into(),
            options: strings(&[
                track,
                "Data for Product Managers",
                "Experimentation & A / B Testing",
                "Mastery Skills for PMs",
            ]),
            correct_answer: 0,
            explanation: Some(format!("This lesson is part of the {track} track.")),
        },
        QuizQuestion {
            id: generated_id(lesson_id, 3),
            question: "Which module contains this lesson?".into(),
            options: strings(&[module, "Feature Development", "Feature Design", "Leveraging Data"]),
            correct_answer: 0,
            explanation: Some(format!("This lesson is in the {module} module.")),
        },
        QuizQuestion {
            id: generated_id(lesson_id, 4),
            question: "What is the difficulty level of this lesson?".into(),
            options: strings(&DIFFICULTY_OPTIONS),
            correct_answer: difficulty_index,
            explanation: Some(format!("Difficulty level: {difficulty}.")),
        },
        QuizQuestion {
            id: generated_id(lesson_id, 5),
            question: "What should you do after completing the lesson?".into(),
            options: strings(&[
                "Apply it to a real scenario and take the quiz",
                "Ignore the content",
                "Delete your progress",
                "Skip to another track",
            ]),
            correct_answer: 0,
            explanation: Some(
                "Reinforce learning by applying concepts and completing the quiz.".into(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::flatten_curriculum;

    #[test]
    fn static_banks_are_well_formed() {
        let all = BY_TITLE
            .iter()
            .flat_map(|(_, qs)| qs.iter())
            .chain(BY_LESSON_ID.iter().flat_map(|(_, qs)| qs.iter()));
        for q in all {
            assert!(q.correct_answer < q.options.len(), "question {}", q.id);
            assert!(!q.question.is_empty());
        }
    }

    #[test]
    fn title_bank_wins_over_legacy_bank() {
        let lessons = flatten_curriculum();
        // Lesson 1 has both a tailored set and a legacy set.
        let quiz = resolve_questions(&lessons, LessonId::new(1));
        assert_eq!(quiz.source, QuestionBankSource::Tailored);
        assert_eq!(quiz.questions.len(), 5);
        assert_eq!(quiz.questions[0].id, 10101);
        assert_eq!(quiz.questions[1].correct_answer, 1);
    }

    #[test]
    fn legacy_bank_used_when_no_title_match() {
        let lessons = flatten_curriculum();
        let unrelated: Vec<_> = lessons
            .iter()
            .filter(|l| l.id != LessonId::new(2))
            .cloned()
            .collect();
        let quiz = resolve_questions(&unrelated, LessonId::new(2));
        assert_eq!(quiz.source, QuestionBankSource::Legacy);
        assert_eq!(quiz.questions.len(), 10);
        assert_eq!(quiz.questions[0].id, 11);
    }

    #[test]
    fn generated_quiz_uses_lesson_metadata() {
        let lessons = flatten_curriculum();
        let lesson = lessons
            .iter()
            .find(|l| l.difficulty == Difficulty::Intermediate && tailored_questions(&l.title).is_none())
            .expect("an intermediate lesson without a tailored quiz");

        let quiz = resolve_questions(&lessons, lesson.id);
        assert_eq!(quiz.source, QuestionBankSource::Generated);
        assert_eq!(quiz.questions.len(), 5);
        let ids: Vec<u32> = quiz.questions.iter().map(|q| q.id).collect();
        let base = lesson.id.value() * 100;
        assert_eq!(ids, vec![base + 1, base + 2, base + 3, base + 4, base + 5]);
        assert_eq!(quiz.questions[0].options[0], lesson.title);
        assert_eq!(quiz.questions[1].options[0], lesson.track_title);
        assert_eq!(quiz.questions[2].options[0], lesson.module_title);
        assert_eq!(quiz.questions[3].correct_answer, 1);
    }

    #[test]
    fn unknown_lesson_falls_back_to_placeholders() {
        let quiz = resolve_questions(&[], LessonId::new(999));
        assert_eq!(quiz.source, QuestionBankSource::Generated);
        assert_eq!(quiz.questions[0].options[0], "This Lesson");
        assert_eq!(quiz.questions[1].options[0], "Product Management Foundations");
        assert_eq!(quiz.questions[2].options[0], "Core Concepts");
        assert_eq!(quiz.questions[3].correct_answer, 0);
        assert_eq!(quiz.questions[0].id, 99_901);
    }
}
