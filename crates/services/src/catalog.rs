//! Lesson lists the learner browses: today's lesson, the paged backlog,
//! completed lessons and the journey strip.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use eagle_core::curriculum::{CurriculumError, FlattenedLessonItem, find_lesson, flatten_curriculum};
use eagle_core::model::{LessonId, ModuleId};
use eagle_core::paging::{LESSONS_PER_PAGE, Page, paginate};

/// The canonical flattened curriculum, shared by every view.
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    lessons: Arc<[FlattenedLessonItem]>,
}

impl Default for LessonCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LessonCatalog {
    #[must_use]
    pub fn new(lessons: Vec<FlattenedLessonItem>) -> Self {
        Self {
            lessons: lessons.into(),
        }
    }

    /// Catalog over the built-in curriculum.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(flatten_curriculum())
    }

    #[must_use]
    pub fn lessons(&self) -> &[FlattenedLessonItem] {
        &self.lessons
    }

    /// Shared handle for services that resolve quizzes.
    #[must_use]
    pub fn shared(&self) -> Arc<[FlattenedLessonItem]> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// # Errors
    ///
    /// Returns `CurriculumError::UnknownLesson` when no lesson has `id`.
    pub fn find(&self, id: LessonId) -> Result<&FlattenedLessonItem, CurriculumError> {
        find_lesson(&self.lessons, id)
    }

    /// The canonical list with `completed` set for every id the backend
    /// reports or this session completed locally.
    #[must_use]
    pub fn effective(
        &self,
        backend_completed: &HashSet<LessonId>,
        local_completed: &HashSet<LessonId>,
    ) -> LessonView {
        let lessons = self
            .lessons
            .iter()
            .map(|lesson| {
                let mut lesson = lesson.clone();
                lesson.completed = backend_completed.contains(&lesson.id)
                    || local_completed.contains(&lesson.id);
                lesson
            })
            .collect();
        LessonView { lessons }
    }
}

/// The effective lesson list for one learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonView {
    lessons: Vec<FlattenedLessonItem>,
}

/// A backlog entry with the labels shown above the lesson card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonListEntry {
    pub lesson: FlattenedLessonItem,
    pub chapter_label: String,
    pub module_label: String,
}

impl LessonListEntry {
    fn new(lesson: &FlattenedLessonItem) -> Self {
        Self {
            chapter_label: format!("Chapter {}: {}", lesson.track_id, lesson.track_title),
            module_label: format!("Module {}: {}", lesson.module_id, lesson.module_title),
            lesson: lesson.clone(),
        }
    }
}

impl LessonView {
    #[must_use]
    pub fn lessons(&self) -> &[FlattenedLessonItem] {
        &self.lessons
    }

    /// "Today's lesson": the first lesson not yet completed.
    #[must_use]
    pub fn next_incomplete(&self) -> Option<&FlattenedLessonItem> {
        self.lessons.iter().find(|l| !l.completed)
    }

    #[must_use]
    pub fn completed(&self) -> Vec<&FlattenedLessonItem> {
        self.lessons.iter().filter(|l| l.completed).collect()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.lessons.iter().filter(|l| l.completed).count()
    }

    /// Where the journey strip points: the next incomplete lesson, or the
    /// last lesson once everything is done.
    #[must_use]
    pub fn journey_position(&self) -> Option<&FlattenedLessonItem> {
        self.next_incomplete().or_else(|| self.lessons.last())
    }

    /// Incomplete lessons grouped by module in curriculum order.
    #[must_use]
    pub fn incomplete_by_module(&self) -> Vec<LessonListEntry> {
        let mut module_order: HashMap<ModuleId, usize> = HashMap::new();
        for lesson in &self.lessons {
            let next = module_order.len();
            module_order.entry(lesson.module_id).or_insert(next);
        }

        let mut incomplete: Vec<&FlattenedLessonItem> =
            self.lessons.iter().filter(|l| !l.completed).collect();
        // Stable, so lessons keep their order inside a module.
        incomplete.sort_by_key(|l| module_order.get(&l.module_id).copied().unwrap_or(usize::MAX));
        incomplete.into_iter().map(LessonListEntry::new).collect()
    }

    /// Page `requested` (1-based, clamped) of the incomplete backlog.
    #[must_use]
    pub fn incomplete_page(&self, requested: usize) -> Page<LessonListEntry> {
        paginate(&self.incomplete_by_module(), requested, LESSONS_PER_PAGE)
    }
}

/// "Page 2 of 5".
#[must_use]
pub fn page_label<T>(page: &Page<T>) -> String {
    format!("Page {} of {}", page.page, page.total_pages)
}
