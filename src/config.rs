//! ## Configuration
//!
//! Every animated widget takes an options struct with builder-style
//! setters. [`Config`] bundles them and can be overridden from the page URL,
//! e.g. `index.html?reset=0.05&tick=50&log=debug`.
//!
//! | Key        | Option                                 | Default |
//! |------------|----------------------------------------|---------|
//! | `reset`    | [`MatrixOptions::reset_probability`]   | `0.025` |
//! | `tick`     | [`MatrixOptions::tick`] (ms)           | `35`    |
//! | `cell`     | [`MatrixOptions::cell_size`] (px)      | `14`    |
//! | `typing`   | [`TypewriterOptions::typing_delay`]    | `80`    |
//! | `deleting` | [`TypewriterOptions::deleting_delay`]  | `60`    |
//! | `pause`    | [`TypewriterOptions::pause`]           | `2000`  |
//! | `duration` | [`CounterOptions::duration`] (ms)      | `2000`  |
//! | `steps`    | [`CounterOptions::steps`]              | `60`    |
//! | `log`      | maximum log level                      | `info`  |

use std::{str::FromStr, time::Duration};

use tracing::Level;
use web_sys::Url;

use crate::error::Error;

/// Glyphs of the background rain: Latin letters, digits, code punctuation
/// and Devanagari letters.
pub const MATRIX_ALPHABET: &str = "01ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz</>{}[]();\
    अआइईउऊएऐओऔकखगघचछजझटठडढणतथदधनपफबभमयरलवशषसह";

/// Phrases cycled by the landing page typewriter.
pub const TYPEWRITER_PHRASES: &[&str] = &[
    "Build Websites",
    "Create Apps",
    "Master JavaScript",
    "Design Interfaces",
    "Deploy Projects",
];

/// Options for the background [`MatrixRain`](crate::matrix::MatrixRain).
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixOptions {
    /// Edge of a square character cell in pixels.
    pub(crate) cell_size: f64,
    /// Time between two ticks.
    pub(crate) tick: Duration,
    /// Chance per tick that a drop below the bottom edge restarts.
    pub(crate) reset_probability: f64,
    /// Glyphs to draw.
    pub(crate) alphabet: String,
    /// CSS color of the glyphs.
    pub(crate) glyph_color: String,
    /// CSS color of the overlay painted before each tick.
    pub(crate) trail_color: String,
    /// CSS opacity of the whole canvas.
    pub(crate) opacity: f64,
}

impl Default for MatrixOptions {
    fn default() -> Self {
        Self {
            cell_size: 14.0,
            tick: Duration::from_millis(35),
            reset_probability: 0.025,
            alphabet: MATRIX_ALPHABET.to_string(),
            glyph_color: "#00d4ff".to_string(),
            trail_color: "rgba(26, 26, 26, 0.04)".to_string(),
            opacity: 0.1,
        }
    }
}

impl MatrixOptions {
    /// Smallest cell size in pixels.
    pub const MIN_CELL_SIZE: f64 = 1.0;

    /// Constructs a new [`MatrixOptions`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cell size in pixels.
    ///
    /// Sizes below [`Self::MIN_CELL_SIZE`] and non-finite sizes are clamped
    /// to it.
    pub fn cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = if cell_size.is_finite() {
            cell_size.max(Self::MIN_CELL_SIZE)
        } else {
            Self::MIN_CELL_SIZE
        };
        self
    }

    /// Sets the time between two ticks.
    pub fn tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Sets the restart probability of drops below the bottom edge.
    pub fn reset_probability(mut self, reset_probability: f64) -> Self {
        self.reset_probability = reset_probability;
        self
    }

    /// Sets the glyphs to draw.
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Sets the CSS color of the glyphs.
    pub fn glyph_color(mut self, color: impl Into<String>) -> Self {
        self.glyph_color = color.into();
        self
    }

    /// Sets the CSS color of the trail overlay.
    pub fn trail_color(mut self, color: impl Into<String>) -> Self {
        self.trail_color = color.into();
        self
    }

    /// Sets the opacity of the canvas.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Options for the landing page [`Typewriter`](crate::typewriter::Typewriter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypewriterOptions {
    /// Phrases to cycle through.
    pub(crate) phrases: Vec<String>,
    /// Time between two typed characters.
    pub(crate) typing_delay: Duration,
    /// Time between two deleted characters.
    pub(crate) deleting_delay: Duration,
    /// Time a complete phrase stays on screen.
    pub(crate) pause: Duration,
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            phrases: TYPEWRITER_PHRASES.iter().map(ToString::to_string).collect(),
            typing_delay: Duration::from_millis(80),
            deleting_delay: Duration::from_millis(60),
            pause: Duration::from_millis(2000),
        }
    }
}

impl TypewriterOptions {
    /// Constructs a new [`TypewriterOptions`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the phrases.
    pub fn phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the typing delay.
    pub fn typing_delay(mut self, delay: Duration) -> Self {
        self.typing_delay = delay;
        self
    }

    /// Sets the deleting delay.
    pub fn deleting_delay(mut self, delay: Duration) -> Self {
        self.deleting_delay = delay;
        self
    }

    /// Sets the pause after a phrase is complete.
    pub fn pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

/// Options for the landing page [`StatsCounter`](crate::counter::StatsCounter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterOptions {
    /// Total time to reach the targets.
    pub(crate) duration: Duration,
    /// Number of updates over the duration.
    pub(crate) steps: u32,
    /// Target number of students.
    pub(crate) students: u64,
    /// Target number of tutorials.
    pub(crate) tutorials: u64,
    /// Target number of code examples.
    pub(crate) examples: u64,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(2000),
            steps: 60,
            students: 50_000,
            tutorials: 150,
            examples: 1_000,
        }
    }
}

impl CounterOptions {
    /// Constructs a new [`CounterOptions`] with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the total animation time.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the number of steps.
    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the three targets.
    pub fn targets(mut self, students: u64, tutorials: u64, examples: u64) -> Self {
        self.students = students;
        self.tutorials = tutorials;
        self.examples = examples;
        self
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Background rain.
    pub matrix: MatrixOptions,
    /// Landing page typewriter.
    pub typewriter: TypewriterOptions,
    /// Landing page counters.
    pub counter: CounterOptions,
    /// Maximum level of log events.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matrix: MatrixOptions::default(),
            typewriter: TypewriterOptions::default(),
            counter: CounterOptions::default(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Keys recognized in the query string.
    pub const KEYS: &'static [&'static str] = &[
        "reset", "tick", "cell", "typing", "deleting", "pause", "duration", "steps", "log",
    ];

    /// Reads the configuration from the query string of the current page.
    ///
    /// Falls back to the defaults when there is no window or the URL cannot
    /// be read. Only callable on `wasm32`: elsewhere the browser bindings
    /// panic, so host code goes through [`Config::from_params`].
    pub fn from_location() -> (Self, Vec<Error>) {
        let params = web_sys::window()
            .map(|window| window.location())
            .and_then(|location| location.href().ok())
            .and_then(|href| Url::new(&href).ok())
            .map(|url| url.search_params());
        Self::from_params(|key| params.as_ref().and_then(|params| params.get(key)))
    }

    /// Builds the configuration from a key lookup.
    ///
    /// Invalid values are returned as errors and leave the default in place.
    pub fn from_params<F>(lookup: F) -> (Self, Vec<Error>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let errors = Self::KEYS
            .iter()
            .filter_map(|key| lookup(key).map(|value| (*key, value)))
            .filter_map(|(key, value)| config.set(key, &value).err())
            .collect();
        (config, errors)
    }

    /// Sets a single option from its query string representation.
    pub fn set(&mut self, key: &'static str, value: &str) -> Result<(), Error> {
        let invalid = || Error::InvalidOption {
            key,
            value: value.to_string(),
        };
        match key {
            "reset" => {
                let probability: f64 = parse(value).ok_or_else(invalid)?;
                if !(0.0..=1.0).contains(&probability) {
                    return Err(invalid());
                }
                self.matrix.reset_probability = probability;
            }
            "cell" => {
                let size: f64 = parse(value).ok_or_else(invalid)?;
                if !size.is_finite() || size < MatrixOptions::MIN_CELL_SIZE {
                    return Err(invalid());
                }
                self.matrix.cell_size = size;
            }
            "tick" => self.matrix.tick = millis(value).ok_or_else(invalid)?,
            "typing" => self.typewriter.typing_delay = millis(value).ok_or_else(invalid)?,
            "deleting" => self.typewriter.deleting_delay = millis(value).ok_or_else(invalid)?,
            "pause" => self.typewriter.pause = millis(value).ok_or_else(invalid)?,
            "duration" => self.counter.duration = millis(value).ok_or_else(invalid)?,
            "steps" => {
                self.counter.steps = parse::<u32>(value)
                    .filter(|steps| *steps > 0)
                    .ok_or_else(invalid)?;
            }
            "log" => self.log_level = parse(value).ok_or_else(invalid)?,
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

fn parse<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

/// Parses a non-zero number of milliseconds.
fn millis(value: &str) -> Option<Duration> {
    parse::<u64>(value)
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
