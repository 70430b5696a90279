//! ## Quiz
//!
//! A [`QuizSession`] walks through a list of questions. The first answer
//! given to a question is final.

use crate::content::{Question, QuizCategory};

/// Verdict shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Excellent,
    Good,
    KeepLearning,
}

impl Rating {
    /// Rates a score in percent.
    pub const fn from_percentage(percentage: u32) -> Self {
        if percentage >= 80 {
            Self::Excellent
        } else if percentage >= 60 {
            Self::Good
        } else {
            Self::KeepLearning
        }
    }

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::KeepLearning => "Keep Learning",
        }
    }

    /// Badge shown above the score.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Excellent => "🏆",
            Self::Good => "⭐",
            Self::KeepLearning => "📚",
        }
    }
}

/// Outcome of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub correct: usize,
    pub total: usize,
    /// Rounded score in percent.
    pub percentage: u32,
    pub rating: Rating,
}

/// A running quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    category: &'static QuizCategory,
    questions: &'static [Question],
    current: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl QuizSession {
    /// Starts a quiz of `category` over `questions`.
    pub fn start(category: &'static QuizCategory, questions: &'static [Question]) -> Self {
        tracing::debug!(quiz = category.id, "quiz started");
        Self {
            category,
            questions,
            current: 0,
            selected: None,
            score: 0,
            finished: questions.is_empty(),
        }
    }

    /// Restarts the same quiz from the first question.
    pub fn retry(&mut self) {
        *self = Self::start(self.category, self.questions);
    }

    pub fn category(&self) -> &'static QuizCategory {
        self.category
    }

    /// Returns the question being asked, `None` once finished.
    pub fn question(&self) -> Option<&'static Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Zero based index of the current question.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Answer given to the current question.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Progress through the quiz in percent, counting the current question.
    pub fn progress(&self) -> u16 {
        if self.questions.is_empty() {
            return 100;
        }
        ((self.current + 1) as f64 * 100.0 / self.questions.len() as f64).round() as u16
    }

    /// Answers the current question.
    ///
    /// Returns `false` if the question was already answered or `answer` is
    /// not one of its options.
    pub fn select(&mut self, answer: usize) -> bool {
        let Some(question) = self.question() else {
            return false;
        };
        if self.selected.is_some() || answer >= question.options.len() {
            return false;
        }
        self.selected = Some(answer);
        if answer == question.correct {
            self.score += 1;
        }
        true
    }

    /// Moves to the next question or finishes the quiz.
    ///
    /// Does nothing until the current question is answered.
    pub fn next(&mut self) {
        if self.selected.is_none() || self.finished {
            return;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
        } else {
            self.finished = true;
            let results = self.results();
            tracing::info!(
                quiz = self.category.id,
                correct = results.correct,
                total = results.total,
                "quiz completed"
            );
        }
    }

    /// Returns the score so far.
    pub fn results(&self) -> QuizResults {
        let total = self.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (self.score as f64 * 100.0 / total as f64).round() as u32
        };
        QuizResults {
            correct: self.score,
            total,
            percentage,
            rating: Rating::from_percentage(percentage),
        }
    }
}
