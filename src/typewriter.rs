//! ## Typewriter
//!
//! Types a phrase one character at a time, holds it, deletes it and moves
//! on to the next phrase, forever.

use std::time::Duration;

use crate::{config::TypewriterOptions, timer::Animation};

/// What the typewriter is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending characters.
    Typing,
    /// Showing the complete phrase.
    Holding,
    /// Removing characters.
    Deleting,
}

/// Cyclic typewriter over a fixed list of phrases.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    /// Active phrase.
    index: usize,
    /// Visible characters of the active phrase.
    chars: usize,
    phase: Phase,
    typing_delay: Duration,
    deleting_delay: Duration,
    pause: Duration,
}

impl Typewriter {
    /// Constructs a new [`Typewriter`] at the start of the first phrase.
    pub fn new(options: &TypewriterOptions) -> Self {
        Self {
            phrases: options.phrases.clone(),
            index: 0,
            chars: 0,
            phase: Phase::Typing,
            typing_delay: options.typing_delay,
            deleting_delay: options.deleting_delay,
            pause: options.pause,
        }
    }

    /// Returns the visible part of the active phrase.
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        match phrase.char_indices().nth(self.chars) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Returns the index of the active phrase.
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn phrase(&self) -> &str {
        self.phrases.get(self.index).map_or("", String::as_str)
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }
}

impl Animation for Typewriter {
    fn first_delay(&self) -> Duration {
        self.typing_delay
    }

    fn step(&mut self) -> Option<Duration> {
        if self.phrases.is_empty() {
            return None;
        }
        let delay = match self.phase {
            Phase::Typing if self.chars < self.phrase_len() => {
                self.chars += 1;
                self.typing_delay
            }
            Phase::Typing => {
                self.phase = Phase::Holding;
                self.pause
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.deleting_delay
            }
            Phase::Deleting if self.chars > 0 => {
                self.chars -= 1;
                self.deleting_delay
            }
            Phase::Deleting => {
                self.index = (self.index + 1) % self.phrases.len();
                self.phase = Phase::Typing;
                self.typing_delay
            }
        };
        Some(delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn typewriter(phrases: &[&str]) -> Typewriter {
        Typewriter::new(&TypewriterOptions::default().phrases(phrases.iter().copied()))
    }

    /// Runs steps up to and including the advance to the next phrase and
    /// returns their delays.
    fn run_phrase(typewriter: &mut Typewriter) -> Vec<Duration> {
        let mut delays = Vec::new();
        loop {
            let advancing = typewriter.phase() == Phase::Deleting && typewriter.text().is_empty();
            delays.push(typewriter.step().expect("typewriter never settles"));
            if advancing {
                return delays;
            }
        }
    }

    #[test]
    fn test_types_holds_and_deletes() {
        let mut typewriter = typewriter(&["Hey", "Yo"]);
        assert_eq!("", typewriter.text());
        let mut seen = Vec::new();
        for _ in 0..3 {
            assert_eq!(Some(Duration::from_millis(80)), typewriter.step());
            seen.push(typewriter.text().to_string());
        }
        assert_eq!(vec!["H", "He", "Hey"], seen);

        assert_eq!(Some(Duration::from_millis(2000)), typewriter.step());
        assert_eq!(Phase::Holding, typewriter.phase());
        assert_eq!("Hey", typewriter.text());

        assert_eq!(Some(Duration::from_millis(60)), typewriter.step());
        assert_eq!(Phase::Deleting, typewriter.phase());
        assert_eq!("Hey", typewriter.text());

        typewriter.step();
        assert_eq!("He", typewriter.text());
        typewriter.step();
        typewriter.step();
        assert_eq!("", typewriter.text());
        assert_eq!(0, typewriter.phrase_index());

        assert_eq!(Some(Duration::from_millis(80)), typewriter.step());
        assert_eq!(1, typewriter.phrase_index());
        assert_eq!(Phase::Typing, typewriter.phase());
    }

    #[test]
    fn test_phrase_cycle_takes_expected_time() {
        let mut typewriter = typewriter(&["Build Websites"]);
        let delays = run_phrase(&mut typewriter);
        // 14 characters typed, a hold, a switch, 14 deleted and an advance.
        assert_eq!(31, delays.len());
        let total: Duration = delays.iter().sum();
        assert_eq!(Duration::from_millis(14 * 80 + 2000 + 60 + 14 * 60 + 80), total);
    }

    #[test]
    fn test_index_returns_after_full_cycle() {
        let mut typewriter = Typewriter::new(&TypewriterOptions::default());
        let phrases = TypewriterOptions::default().phrases.len();
        let mut visited = Vec::new();
        for _ in 0..phrases {
            visited.push(typewriter.phrase_index());
            run_phrase(&mut typewriter);
        }
        assert_eq!((0..phrases).collect::<Vec<_>>(), visited);
        assert_eq!(0, typewriter.phrase_index());
        assert_eq!("", typewriter.text());
    }

    #[test]
    fn test_counts_unicode_scalars() {
        let mut typewriter = typewriter(&["नमस्ते"]);
        typewriter.step();
        assert_eq!("न", typewriter.text());
        typewriter.step();
        assert_eq!("नम", typewriter.text());
    }

    #[test]
    fn test_empty_phrase_list_settles() {
        let mut typewriter = typewriter(&[]);
        assert_eq!(None, typewriter.step());
        assert_eq!("", typewriter.text());
    }

    proptest! {
        #[test]
        fn test_full_cycle_returns_to_first_phrase(
            phrases in prop::collection::vec("[a-zA-Z नम]{0,12}", 1..6),
        ) {
            let mut typewriter = Typewriter::new(&TypewriterOptions::default().phrases(phrases.clone()));
            for expected in 0..phrases.len() {
                prop_assert_eq!(expected, typewriter.phrase_index());
                let delays = run_phrase(&mut typewriter);
                let chars = phrases[expected].chars().count();
                prop_assert_eq!(2 * chars + 3, delays.len());
            }
            prop_assert_eq!(0, typewriter.phrase_index());
            prop_assert_eq!("", typewriter.text());
        }
    }
}
