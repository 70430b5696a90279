//! Tutorial navigation state for the landing page browser and the
//! tutorials page.

use crate::content::{Category, Featured, Lesson, Status, FEATURED, LESSONS};

/// Category picker of the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TutorialBrowser {
    active: usize,
}

impl Default for TutorialBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl TutorialBrowser {
    /// Constructs a new [`TutorialBrowser`] showing HTML.
    pub const fn new() -> Self {
        Self { active: 0 }
    }

    /// Returns the active category.
    pub fn category(&self) -> Category {
        Category::ALL[self.active]
    }

    /// Selects the next category, wrapping around.
    pub fn next(&mut self) {
        self.active = (self.active + 1) % Category::ALL.len();
    }

    /// Selects the previous category, wrapping around.
    pub fn previous(&mut self) {
        self.active = (self.active + Category::ALL.len() - 1) % Category::ALL.len();
    }

    /// Returns the featured tutorials of the active category.
    pub fn tutorials(&self) -> impl Iterator<Item = &'static Featured> {
        let category = self.category();
        FEATURED.iter().filter(move |tutorial| tutorial.category == category)
    }
}

/// Lesson cursor of the tutorials page.
#[derive(Debug, Clone, Copy)]
pub struct LearningPath {
    lessons: &'static [Lesson],
    active: usize,
}

impl Default for LearningPath {
    fn default() -> Self {
        Self::new(LESSONS)
    }
}

impl LearningPath {
    /// Constructs a new [`LearningPath`] with the first lesson active.
    pub const fn new(lessons: &'static [Lesson]) -> Self {
        Self { lessons, active: 0 }
    }

    /// Returns every lesson.
    pub fn lessons(&self) -> &'static [Lesson] {
        self.lessons
    }

    /// Returns the lessons of `category`.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &'static Lesson> {
        self.lessons
            .iter()
            .filter(move |lesson| lesson.category == category)
    }

    /// Returns the active lesson.
    pub fn active(&self) -> Option<&'static Lesson> {
        self.lessons.get(self.active)
    }

    /// Moves to the next lesson, stopping at the last one.
    pub fn down(&mut self) {
        if self.active + 1 < self.lessons.len() {
            self.active += 1;
        }
    }

    /// Moves to the previous lesson, stopping at the first one.
    pub fn up(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Share of completed lessons in percent, rounded.
    pub fn progress(&self) -> u16 {
        if self.lessons.is_empty() {
            return 0;
        }
        let completed = self
            .lessons
            .iter()
            .filter(|lesson| lesson.status == Status::Completed)
            .count();
        ((completed * 100) as f64 / self.lessons.len() as f64).round() as u16
    }
}
