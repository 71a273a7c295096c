//! Main-screen navigation: tabs, the open lesson, and the backlog page.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use eagle_core::model::LessonId;
use eagle_core::paging::{clamp_page, next_page, previous_page};

use crate::quiz::QuizSession;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MainTab {
    #[default]
    Overview,
    Lessons,
    Completed,
    Progress,
}

impl MainTab {
    pub const ALL: [MainTab; 4] = [
        MainTab::Overview,
        MainTab::Lessons,
        MainTab::Completed,
        MainTab::Progress,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MainTab::Overview => "overview",
            MainTab::Lessons => "lessons",
            MainTab::Completed => "completed",
            MainTab::Progress => "progress",
        }
    }

    /// Tabs that show progress figures and reload them on entry.
    #[must_use]
    pub fn refreshes_progress(self) -> bool {
        matches!(self, MainTab::Overview | MainTab::Progress)
    }
}

impl fmt::Display for MainTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTab(pub String);

impl fmt::Display for UnknownTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab: {}", self.0)
    }
}

impl std::error::Error for UnknownTab {}

impl FromStr for MainTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainTab::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Where the learner landed after a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabChange {
    pub tab: MainTab,
    /// The caller should reload progress before rendering.
    pub refresh: bool,
}

/// What is on screen, in priority order: a running quiz, a result, an open
/// lesson, then the tab content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Quiz,
    Results,
    Lesson(LessonId),
    Tab(MainTab),
}

#[derive(Debug, Clone)]
pub struct MainScreen {
    tab: MainTab,
    selected_lesson: Option<LessonId>,
    lesson_page: usize,
    local_completed: HashSet<LessonId>,
}

impl Default for MainScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl MainScreen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab: MainTab::Overview,
            selected_lesson: None,
            lesson_page: 1,
            local_completed: HashSet::new(),
        }
    }

    #[must_use]
    pub fn tab(&self) -> MainTab {
        self.tab
    }

    #[must_use]
    pub fn selected_lesson(&self) -> Option<LessonId> {
        self.selected_lesson
    }

    #[must_use]
    pub fn lesson_page(&self) -> usize {
        self.lesson_page
    }

    /// Lessons passed during this session, before the backend confirms them.
    #[must_use]
    pub fn local_completed(&self) -> &HashSet<LessonId> {
        &self.local_completed
    }

    pub fn select_tab(&mut self, tab: MainTab) -> TabChange {
        self.tab = tab;
        TabChange {
            tab,
            refresh: tab.refreshes_progress(),
        }
    }

    /// Open a lesson; its reader lives under the Lessons tab.
    pub fn select_lesson(&mut self, lesson_id: LessonId) -> TabChange {
        self.selected_lesson = Some(lesson_id);
        self.select_tab(MainTab::Lessons)
    }

    pub fn close_lesson(&mut self) {
        self.selected_lesson = None;
    }

    /// Starting a quiz also lands on the Lessons tab for when it ends.
    pub fn quiz_started(&mut self) {
        self.tab = MainTab::Lessons;
    }

    pub fn mark_completed_locally(&mut self, lesson_id: LessonId) {
        self.local_completed.insert(lesson_id);
    }

    /// "Continue" on the results screen: passing attempts go to Progress,
    /// the rest back to Lessons. Progress is always reloaded.
    pub fn continue_from_results(&mut self, passing: bool) -> TabChange {
        self.selected_lesson = None;
        let tab = if passing {
            MainTab::Progress
        } else {
            MainTab::Lessons
        };
        self.tab = tab;
        TabChange { tab, refresh: true }
    }

    pub fn set_lesson_page(&mut self, requested: usize, total_pages: usize) -> usize {
        self.lesson_page = clamp_page(requested, total_pages);
        self.lesson_page
    }

    pub fn next_lesson_page(&mut self, total_pages: usize) -> usize {
        let current = clamp_page(self.lesson_page, total_pages);
        self.lesson_page = next_page(current, total_pages);
        self.lesson_page
    }

    pub fn previous_lesson_page(&mut self, total_pages: usize) -> usize {
        let current = clamp_page(self.lesson_page, total_pages);
        self.lesson_page = previous_page(current, total_pages);
        self.lesson_page
    }

    #[must_use]
    pub fn screen(&self, quiz: &QuizSession) -> Screen {
        if quiz.active().is_some() {
            Screen::Quiz
        } else if quiz.result().is_some() {
            Screen::Results
        } else if let Some(id) = self.selected_lesson {
            Screen::Lesson(id)
        } else {
            Screen::Tab(self.tab)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eagle_core::quiz::QuizQuestion;

    #[test]
    fn overview_and_progress_request_refresh() {
        let mut screen = MainScreen::new();
        assert!(!screen.select_tab(MainTab::Lessons).refresh);
        assert!(!screen.select_tab(MainTab::Completed).refresh);
        assert!(screen.select_tab(MainTab::Progress).refresh);
        assert!(screen.select_tab(MainTab::Overview).refresh);
    }

    #[test]
    fn selecting_a_lesson_switches_to_lessons() {
        let mut screen = MainScreen::new();
        let change = screen.select_lesson(LessonId::new(7));
        assert_eq!(change.tab, MainTab::Lessons);
        assert_eq!(screen.screen(&QuizSession::new()), Screen::Lesson(LessonId::new(7)));
        screen.close_lesson();
        assert_eq!(screen.screen(&QuizSession::new()), Screen::Tab(MainTab::Lessons));
    }

    #[test]
    fn continue_routes_by_outcome() {
        let mut screen = MainScreen::new();
        screen.select_lesson(LessonId::new(1));
        let passed = screen.continue_from_results(true);
        assert_eq!(passed, TabChange { tab: MainTab::Progress, refresh: true });
        assert_eq!(screen.selected_lesson(), None);

        let failed = screen.continue_from_results(false);
        assert_eq!(failed.tab, MainTab::Lessons);
    }

    #[test]
    fn quiz_screens_take_priority() {
        let mut screen = MainScreen::new();
        screen.select_lesson(LessonId::new(2));
        let mut quiz = QuizSession::new();
        let question = QuizQuestion {
            id: 1,
            question: "Q".into(),
            options: vec!["a".into(), "b".into()],
            correct_answer: 0,
            explanation: None,
        };
        quiz.start_with(LessonId::new(2), vec![question]).unwrap();
        assert_eq!(screen.screen(&quiz), Screen::Quiz);
        quiz.submit_answer(0).unwrap();
        assert_eq!(screen.screen(&quiz), Screen::Results);
    }

    #[test]
    fn pager_wraps_both_ways() {
        let mut screen = MainScreen::new();
        assert_eq!(screen.previous_lesson_page(3), 3);
        assert_eq!(screen.next_lesson_page(3), 1);
        assert_eq!(screen.set_lesson_page(10, 3), 3);
        // Backlog shrank underneath the pager.
        assert_eq!(screen.next_lesson_page(2), 1);
    }

    #[test]
    fn tabs_parse_from_names() {
        assert_eq!("Progress".parse::<MainTab>().unwrap(), MainTab::Progress);
        assert!("settings".parse::<MainTab>().is_err());
    }
}
