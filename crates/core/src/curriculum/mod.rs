//! Static curriculum and its flattening into a lesson list.
//!
//! Flattening is a pure function of the track data: ids are assigned 1..=N in
//! track → module → lesson order, so two passes over the same data produce
//! identical items, content included.

mod data;
mod tailored;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::{LessonId, ModuleId, TrackId};

pub use data::CURRICULUM;
pub use tailored::{tailored_content, tailored_count};

/// Fixed reading time shown for every micro-lesson.
pub const LESSON_DURATION: &str = "5 min";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CurriculumError {
    #[error("lesson {0} is not part of the curriculum")]
    UnknownLesson(LessonId),
}

//
// ─── STATIC SHAPE ─────────────────────────────────────────────────────────────
//

/// Top-level grouping of modules, authored once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumTrack {
    pub id: TrackId,
    pub title: &'static str,
    pub modules: &'static [CurriculumModule],
}

/// Ordered list of lesson titles within a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumModule {
    pub id: ModuleId,
    pub title: &'static str,
    pub lessons: &'static [&'static str],
}

//
// ─── DIFFICULTY ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Tracks 1–2 are Beginner, 3–4 Intermediate, the rest Advanced.
    #[must_use]
    pub fn for_track(track_id: TrackId) -> Self {
        match track_id.value() {
            0..=2 => Difficulty::Beginner,
            3..=4 => Difficulty::Intermediate,
            _ => Difficulty::Advanced,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── FLATTENED LESSON ─────────────────────────────────────────────────────────
//

/// One lesson as presented to the learner, with back-references to its
/// owning track and module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedLessonItem {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub completed: bool,
    pub content: String,
    pub track_id: TrackId,
    pub track_title: String,
    pub module_id: ModuleId,
    pub module_title: String,
    /// 1-based position within the owning module.
    pub lesson_number: u32,
}

/// Flatten the built-in curriculum.
#[must_use]
pub fn flatten_curriculum() -> Vec<FlattenedLessonItem> {
    flatten(CURRICULUM)
}

/// Flatten an arbitrary track list.
#[must_use]
pub fn flatten(tracks: &[CurriculumTrack]) -> Vec<FlattenedLessonItem> {
    let mut items = Vec::new();
    let mut next_id: u32 = 1;

    for track in tracks {
        let difficulty = Difficulty::for_track(track.id);
        for module in track.modules {
            for (index, title) in module.lessons.iter().enumerate() {
                let lesson_number = u32::try_from(index + 1).unwrap_or(u32::MAX);
                items.push(FlattenedLessonItem {
                    id: LessonId::new(next_id),
                    title: (*title).to_string(),
                    description: format!("{} • {}", module.title, track.title),
                    duration: LESSON_DURATION.to_string(),
                    difficulty,
                    completed: false,
                    content: lesson_content(
                        track.title,
                        module.title,
                        title,
                        difficulty,
                        lesson_number,
                    ),
                    track_id: track.id,
                    track_title: track.title.to_string(),
                    module_id: module.id,
                    module_title: module.title.to_string(),
                    lesson_number,
                });
                next_id += 1;
            }
        }
    }

    items
}

/// Find a lesson by id in a flattened list.
///
/// # Errors
///
/// Returns `CurriculumError::UnknownLesson` if no item carries `id`.
pub fn find_lesson(
    items: &[FlattenedLessonItem],
    id: LessonId,
) -> Result<&FlattenedLessonItem, CurriculumError> {
    items
        .iter()
        .find(|item| item.id == id)
        .ok_or(CurriculumError::UnknownLesson(id))
}

fn lesson_header(
    track_title: &str,
    module_title: &str,
    lesson_title: &str,
    difficulty: Difficulty,
    lesson_number: u32,
) -> String {
    format!(
        "Lesson {lesson_number}: {lesson_title}\nTrack: {track_title}\nModule: {module_title}\nDifficulty: {difficulty}\n\n"
    )
}

/// Body text for one lesson: header plus the tailored block, or a generated
/// template when no tailored block exists.
#[must_use]
pub fn lesson_content(
    track_title: &str,
    module_title: &str,
    lesson_title: &str,
    difficulty: Difficulty,
    lesson_number: u32,
) -> String {
    let mut out = lesson_header(
        track_title,
        module_title,
        lesson_title,
        difficulty,
        lesson_number,
    );

    if let Some(body) = tailored_content(lesson_title) {
        out.push_str(body);
        return out;
    }

    let lower = lesson_title.to_lowercase();
    out.push_str(&format!(
        "Overview:\n\
         - What you'll learn: how {lower} fits into {module_title} and why it matters for Product Managers.\n\
         - Outcome: be able to apply this concept in a real product scenario.\n\n\
         Key Concepts:\n\
         - Core idea: {lesson_title}.\n\
         - Practices: actionable techniques to apply this concept.\n\
         - Anti-patterns: common mistakes to avoid.\n\n\
         Framework (Step-by-step):\n\
         1) Understand context and constraints.\n\
         2) Choose the right approach or tool.\n\
         3) Collaborate with design/engineering/stakeholders.\n\
         4) Validate with users/data; instrument the metrics.\n\
         5) Communicate decisions and capture learnings.\n\n\
         Example:\n\
         - Imagine you're working on {lower} for a growth initiative.\n\
         - Apply the steps above and define success metrics (leading + lagging).\n\n\
         Checklist:\n\
         - Defined the problem clearly and aligned on success.\n\
         - Considered risks and trade-offs.\n\
         - Wrote crisp decision rationale.\n\n\
         Next Steps:\n\
         - Try a small real-world exercise in your product context.\n\
         - Share learnings with your team for feedback."
    ));
    out
}
