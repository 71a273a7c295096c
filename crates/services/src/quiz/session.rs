use eagle_core::curriculum::FlattenedLessonItem;
use eagle_core::model::LessonId;
use eagle_core::quiz::{AnswerRecord, QuizError, QuizQuestion, QuizResult, resolve_questions};

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// A quiz being answered, one question at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuiz {
    pub lesson_id: LessonId,
    pub questions: Vec<QuizQuestion>,
    pub current_index: usize,
    pub score: u32,
    pub answers: Vec<AnswerRecord>,
}

impl ActiveQuiz {
    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// 1-based number of the question on screen.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

/// Idle → `InQuiz` → Finished → Idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    Idle,
    InQuiz(ActiveQuiz),
    Finished(QuizResult),
}

/// What one submitted answer did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Moved on to the question at `next_index`.
    Advanced {
        record: AnswerRecord,
        next_index: usize,
    },
    /// That was the last question.
    Finished {
        record: AnswerRecord,
        result: QuizResult,
    },
}

impl AnswerOutcome {
    #[must_use]
    pub fn record(&self) -> AnswerRecord {
        match self {
            AnswerOutcome::Advanced { record, .. } | AnswerOutcome::Finished { record, .. } => {
                *record
            }
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match self {
            AnswerOutcome::Finished { result, .. } => Some(result),
            AnswerOutcome::Advanced { .. } => None,
        }
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz state machine. Persists nothing; see `QuizLoopService`.
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    state: QuizState,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, QuizState::Idle)
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveQuiz> {
        match &self.state {
            QuizState::InQuiz(active) => Some(active),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            QuizState::Finished(result) => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.active().and_then(ActiveQuiz::current_question)
    }

    /// Resolve the question bank for `lesson_id` and start at question 1.
    ///
    /// Replaces whatever quiz or result was showing.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` if the resolved bank is empty.
    pub fn start_quiz(
        &mut self,
        lessons: &[FlattenedLessonItem],
        lesson_id: LessonId,
    ) -> Result<&ActiveQuiz, QuizError> {
        let resolved = resolve_questions(lessons, lesson_id);
        self.start_with(lesson_id, resolved.questions)
    }

    /// Start a quiz over an explicit question list.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` if `questions` is empty.
    pub fn start_with(
        &mut self,
        lesson_id: LessonId,
        questions: Vec<QuizQuestion>,
    ) -> Result<&ActiveQuiz, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions(lesson_id));
        }
        self.state = QuizState::InQuiz(ActiveQuiz {
            lesson_id,
            questions,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
        });
        self.active().ok_or(QuizError::NotInQuiz)
    }

    /// Grade `selected` for the current question, then advance or finish.
    ///
    /// An out-of-range option leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotInQuiz` outside a quiz, or
    /// `QuizError::OptionOutOfRange` for a bad option index.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, QuizError> {
        let QuizState::InQuiz(active) = &mut self.state else {
            return Err(QuizError::NotInQuiz);
        };
        let question = active.current_question().ok_or(QuizError::NotInQuiz)?;
        let record = question.grade(selected)?;

        active.answers.push(record);
        if record.correct {
            active.score += 1;
        }
        let next_index = active.current_index + 1;

        if next_index < active.questions.len() {
            active.current_index = next_index;
            return Ok(AnswerOutcome::Advanced { record, next_index });
        }

        let finished = std::mem::take(active);
        let result = QuizResult::new(
            finished.lesson_id,
            finished.score,
            finished.answers,
            finished.questions,
        );
        self.state = QuizState::Finished(result.clone());
        Ok(AnswerOutcome::Finished { record, result })
    }

    /// Leave the quiz or results screen without recording anything.
    pub fn go_back(&mut self) {
        self.state = QuizState::Idle;
    }

    /// Start over on the same questions after finishing.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFinished` unless a result is showing.
    pub fn retry(&mut self) -> Result<&ActiveQuiz, QuizError> {
        let QuizState::Finished(result) = &mut self.state else {
            return Err(QuizError::NotFinished);
        };
        let lesson_id = result.lesson_id;
        let questions = std::mem::take(&mut result.questions);
        self.start_with(lesson_id, questions)
    }
}

impl Default for ActiveQuiz {
    fn default() -> Self {
        Self {
            lesson_id: LessonId::new(0),
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            answers: Vec::new(),
        }
    }
}
