mod session;
mod workflow;

pub use session::{ActiveQuiz, AnswerOutcome, QuizSession, QuizState};
pub use workflow::{QuizLoopService, QuizStep};
