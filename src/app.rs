//! ## Application
//!
//! The [`App`] owns the page on display. Every page is a value: switching
//! pages drops the previous one together with its timers and preview frame
//! and builds the next one from scratch.
//!
//! Browser resources are obtained through a [`Host`], so the whole shell
//! runs the same way on a virtual clock in tests.

use std::{cell::RefCell, rc::Rc};

use tui_textarea::{Input, Key};

use crate::{
    config::Config,
    content::{QUESTIONS, QUIZ_CATEGORIES},
    counter::StatsCounter,
    error::Error,
    playground::{Playground, RenderingSurface, SourceKind, PRESETS},
    quiz::QuizSession,
    timer::{Scheduler, Ticker},
    tutorials::{LearningPath, TutorialBrowser},
    typewriter::Typewriter,
};

/// Provides timers and preview frames.
pub trait Host {
    /// Timer source for page animations.
    type Scheduler: Scheduler;
    /// Preview of the playground.
    type Surface: RenderingSurface;

    /// Returns a scheduler.
    fn scheduler(&self) -> Self::Scheduler;

    /// Creates a new preview surface.
    fn create_surface(&self) -> Result<Self::Surface, Error>;
}

/// A top level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Tutorials,
    Playground,
    Quiz,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Tutorials, Self::Playground, Self::Quiz];

    /// Navigation bar title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tutorials => "Tutorials",
            Self::Playground => "Playground",
            Self::Quiz => "Quiz",
        }
    }

    /// Function key that opens the page.
    pub const fn shortcut(self) -> u8 {
        match self {
            Self::Home => 1,
            Self::Tutorials => 2,
            Self::Playground => 3,
            Self::Quiz => 4,
        }
    }

    fn from_shortcut(key: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.shortcut() == key)
    }
}

/// Landing page with its two animations.
pub struct HomePage<S: Scheduler> {
    pub typewriter: Rc<RefCell<Typewriter>>,
    pub counter: Rc<RefCell<StatsCounter>>,
    pub browser: TutorialBrowser,
    _tickers: Vec<Ticker<S>>,
}

impl<S: Scheduler> HomePage<S> {
    fn mount(scheduler: S, config: &Config) -> Self {
        let typewriter = Rc::new(RefCell::new(Typewriter::new(&config.typewriter)));
        let counter = Rc::new(RefCell::new(StatsCounter::new(&config.counter)));
        let tickers = [
            Ticker::start(scheduler.clone(), typewriter.clone()),
            Ticker::start(scheduler, counter.clone()),
        ]
        .into_iter()
        .filter_map(|ticker| {
            ticker
                .map_err(|e| tracing::warn!("unable to start an animation: {e}"))
                .ok()
        })
        .collect();
        Self {
            typewriter,
            counter,
            browser: TutorialBrowser::new(),
            _tickers: tickers,
        }
    }
}

/// Playground page with its preview.
pub struct PlaygroundPage<T> {
    pub playground: Playground<'static>,
    surface: Option<T>,
}

impl<T: RenderingSurface> PlaygroundPage<T> {
    fn run(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            tracing::warn!("no preview available");
            return;
        };
        if let Err(e) = self.playground.run(surface) {
            tracing::warn!("unable to show the preview: {e}");
        }
    }

    /// Returns the preview surface, if one could be created.
    pub fn surface(&self) -> Option<&T> {
        self.surface.as_ref()
    }
}

/// Quiz page: either the list of quizzes or a running session.
#[derive(Debug, Clone)]
pub enum QuizPage {
    Categories {
        selected: usize,
    },
    Session {
        session: QuizSession,
        /// Option under the cursor.
        highlighted: usize,
    },
}

impl Default for QuizPage {
    fn default() -> Self {
        Self::Categories { selected: 0 }
    }
}

impl QuizPage {
    fn handle_input(&mut self, input: &Input) -> bool {
        match self {
            Self::Categories { selected } => match input.key {
                Key::Up => *selected = selected.saturating_sub(1),
                Key::Down => *selected = (*selected + 1).min(QUIZ_CATEGORIES.len() - 1),
                Key::Enter => {
                    let category = &QUIZ_CATEGORIES[*selected];
                    *self = Self::Session {
                        session: QuizSession::start(category, QUESTIONS),
                        highlighted: 0,
                    };
                }
                _ => return false,
            },
            Self::Session { session, .. } if session.is_finished() => match input.key {
                Key::Char('r') => session.retry(),
                Key::Esc | Key::Enter => *self = Self::default(),
                _ => return false,
            },
            Self::Session {
                session,
                highlighted,
            } => match input.key {
                Key::Up => *highlighted = highlighted.saturating_sub(1),
                Key::Down => *highlighted = (*highlighted + 1).min(3),
                Key::Enter if session.selected().is_none() => {
                    session.select(*highlighted);
                }
                Key::Enter | Key::Char('n') => {
                    let position = session.position();
                    session.next();
                    if session.position() != position {
                        *highlighted = 0;
                    }
                }
                Key::Char(c @ '1'..='4') => {
                    let answer = c as usize - '1' as usize;
                    if session.select(answer) {
                        *highlighted = answer;
                    }
                }
                Key::Esc => *self = Self::default(),
                _ => return false,
            },
        }
        true
    }
}

/// State of the page on display.
pub enum View<H: Host> {
    Home(HomePage<H::Scheduler>),
    Tutorials(LearningPath),
    Playground(PlaygroundPage<H::Surface>),
    Quiz(QuizPage),
}

impl<H: Host> View<H> {
    fn page(&self) -> Page {
        match self {
            Self::Home(_) => Page::Home,
            Self::Tutorials(_) => Page::Tutorials,
            Self::Playground(_) => Page::Playground,
            Self::Quiz(_) => Page::Quiz,
        }
    }
}

/// The application shell.
pub struct App<H: Host> {
    host: H,
    config: Config,
    view: View<H>,
}

impl<H: Host> App<H> {
    /// Constructs a new [`App`] showing the landing page.
    pub fn new(host: H, config: Config) -> Self {
        let view = View::Home(HomePage::mount(host.scheduler(), &config));
        Self { host, config, view }
    }

    /// Returns the page on display.
    pub fn page(&self) -> Page {
        self.view.page()
    }

    /// Returns the state of the page on display.
    pub fn view(&self) -> &View<H> {
        &self.view
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shows `page`, replacing the current one.
    ///
    /// Selecting the page on display does nothing.
    pub fn navigate(&mut self, page: Page) {
        if page == self.page() {
            return;
        }
        tracing::info!(from = self.page().title(), to = page.title(), "navigating");
        // Release the old page first so its frame is gone before a new one appears.
        self.view = View::Tutorials(LearningPath::default());
        self.view = match page {
            Page::Home => View::Home(HomePage::mount(self.host.scheduler(), &self.config)),
            Page::Tutorials => View::Tutorials(LearningPath::default()),
            Page::Playground => View::Playground(PlaygroundPage {
                playground: Playground::new(),
                surface: self
                    .host
                    .create_surface()
                    .map_err(|e| tracing::warn!("unable to create the preview: {e}"))
                    .ok(),
            }),
            Page::Quiz => View::Quiz(QuizPage::default()),
        };
    }

    /// Handles a key press.
    ///
    /// Returns `true` if the key was used.
    pub fn handle_input(&mut self, input: Input) -> bool {
        if let Key::F(n) = input.key {
            if let Some(page) = Page::from_shortcut(n) {
                self.navigate(page);
                return true;
            }
        }
        match &mut self.view {
            View::Home(home) => match input.key {
                Key::Left => home.browser.previous(),
                Key::Right => home.browser.next(),
                _ => return false,
            },
            View::Tutorials(path) => match input.key {
                Key::Up => path.up(),
                Key::Down => path.down(),
                _ => return false,
            },
            View::Playground(page) => return handle_playground_input(page, input),
            View::Quiz(quiz) => return quiz.handle_input(&input),
        }
        true
    }
}

fn handle_playground_input<T: RenderingSurface>(page: &mut PlaygroundPage<T>, input: Input) -> bool {
    match input {
        Input {
            key: Key::Enter,
            ctrl: true,
            ..
        } => page.run(),
        Input {
            key: Key::Char(c @ '1'..='3'),
            alt: true,
            ..
        } => page
            .playground
            .select(SourceKind::ALL[c as usize - '1' as usize]),
        Input {
            key: Key::Left,
            alt: true,
            ..
        } => page.playground.previous_tab(),
        Input {
            key: Key::Right,
            alt: true,
            ..
        } => page.playground.next_tab(),
        Input {
            key: Key::F(n @ 6..=8),
            ..
        } => page.playground.load_preset(&PRESETS[usize::from(n - 6)]),
        input => return page.playground.input(input),
    }
    true
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, time::Duration};

    use super::*;
    use crate::{
        compositor::ComposedDocument,
        playground::DEFAULT_HTML,
        timer::manual::ManualScheduler,
    };
    use pretty_assertions::assert_eq;

    /// Surface that records its documents and counts live instances.
    struct TrackedSurface {
        documents: Rc<RefCell<Vec<String>>>,
        live: Rc<Cell<usize>>,
    }

    impl RenderingSurface for TrackedSurface {
        fn load(&mut self, document: &ComposedDocument) -> Result<(), Error> {
            self.documents.borrow_mut().push(document.to_string());
            Ok(())
        }
    }

    impl Drop for TrackedSurface {
        fn drop(&mut self) {
            self.live.set(self.live.get() - 1);
        }
    }

    #[derive(Default)]
    struct TestHost {
        scheduler: ManualScheduler,
        documents: Rc<RefCell<Vec<String>>>,
        live: Rc<Cell<usize>>,
    }

    impl Host for Rc<TestHost> {
        type Scheduler = ManualScheduler;
        type Surface = TrackedSurface;

        fn scheduler(&self) -> ManualScheduler {
            self.scheduler.clone()
        }

        fn create_surface(&self) -> Result<TrackedSurface, Error> {
            self.live.set(self.live.get() + 1);
            Ok(TrackedSurface {
                documents: self.documents.clone(),
                live: self.live.clone(),
            })
        }
    }

    fn app() -> (App<Rc<TestHost>>, Rc<TestHost>) {
        let host = Rc::new(TestHost::default());
        (App::new(host.clone(), Config::default()), host)
    }

    fn key(key: Key) -> Input {
        Input {
            key,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    fn ctrl(key: Key) -> Input {
        Input {
            ctrl: true,
            ..self::key(key)
        }
    }

    fn alt(key: Key) -> Input {
        Input {
            alt: true,
            ..self::key(key)
        }
    }

    fn home<H: Host>(app: &App<H>) -> &HomePage<H::Scheduler> {
        match app.view() {
            View::Home(home) => home,
            _ => panic!("not on the home page"),
        }
    }

    fn playground<H: Host>(app: &App<H>) -> &PlaygroundPage<H::Surface> {
        match app.view() {
            View::Playground(page) => page,
            _ => panic!("not on the playground page"),
        }
    }

    #[test]
    fn test_home_animations_run_while_mounted() {
        let (app, host) = app();
        assert_eq!(Page::Home, app.page());
        host.scheduler.advance(Duration::from_millis(80 * 6));
        assert_eq!("Build ", home(&app).typewriter.borrow().text());
        host.scheduler.advance(Duration::from_secs(3));
        assert_eq!([50_000, 150, 1_000], home(&app).counter.borrow().values());
    }

    #[test]
    fn test_leaving_home_stops_animations() {
        let (mut app, host) = app();
        host.scheduler.advance(Duration::from_millis(200));
        let typewriter = home(&app).typewriter.clone();
        let counter = home(&app).counter.clone();
        let typed = typewriter.borrow().text().to_string();
        let counted = counter.borrow().values();

        assert!(app.handle_input(key(Key::F(2))));
        assert_eq!(Page::Tutorials, app.page());
        assert_eq!(0, host.scheduler.pending());

        host.scheduler.advance(Duration::from_secs(10));
        assert_eq!(typed, typewriter.borrow().text());
        assert_eq!(counted, counter.borrow().values());
    }

    #[test]
    fn test_returning_home_restarts_from_zero() {
        let (mut app, host) = app();
        host.scheduler.advance(Duration::from_secs(3));
        app.navigate(Page::Quiz);
        app.navigate(Page::Home);
        assert_eq!([0, 0, 0], home(&app).counter.borrow().values());
        assert_eq!("", home(&app).typewriter.borrow().text());
    }

    #[test]
    fn test_same_page_is_kept() {
        let (mut app, host) = app();
        host.scheduler.advance(Duration::from_millis(160));
        app.navigate(Page::Home);
        assert_eq!("Bu", home(&app).typewriter.borrow().text());
    }

    #[test]
    fn test_playground_owns_its_preview() {
        let (mut app, host) = app();
        app.navigate(Page::Playground);
        assert_eq!(1, host.live.get());
        assert!(playground(&app).surface().is_some());

        assert!(app.handle_input(ctrl(Key::Enter)));
        assert_eq!(1, host.documents.borrow().len());
        assert!(host.documents.borrow()[0].contains("<h1>Hello, World!</h1>"));

        app.navigate(Page::Tutorials);
        assert_eq!(0, host.live.get());
    }

    #[test]
    fn test_playground_keys() {
        let (mut app, host) = app();
        app.navigate(Page::Playground);

        app.handle_input(alt(Key::Char('3')));
        assert_eq!(SourceKind::JavaScript, playground(&app).playground.active());
        app.handle_input(alt(Key::Right));
        assert_eq!(SourceKind::Html, playground(&app).playground.active());
        app.handle_input(alt(Key::Left));
        assert_eq!(SourceKind::JavaScript, playground(&app).playground.active());

        app.handle_input(key(Key::F(7)));
        assert_eq!(
            "<button id=\"btn\">Click Me!</button>\n<p id=\"text\">Click count: 0</p>",
            playground(&app).playground.source(SourceKind::Html)
        );

        // Plain keys edit without running.
        app.handle_input(alt(Key::Char('1')));
        assert!(app.handle_input(key(Key::Char('<'))));
        assert!(host.documents.borrow().is_empty());
        assert!(playground(&app)
            .playground
            .source(SourceKind::Html)
            .starts_with("<<button"));
    }

    #[test]
    fn test_playground_starts_fresh() {
        let (mut app, _host) = app();
        app.navigate(Page::Playground);
        app.handle_input(key(Key::F(6)));
        app.navigate(Page::Home);
        app.navigate(Page::Playground);
        assert_eq!(DEFAULT_HTML, playground(&app).playground.source(SourceKind::Html));
        assert_eq!(None, playground(&app).playground.last_run());
    }

    #[test]
    fn test_home_and_tutorials_keys() {
        let (mut app, _host) = app();
        app.handle_input(key(Key::Right));
        assert_eq!(crate::content::Category::Css, home(&app).browser.category());
        assert!(!app.handle_input(key(Key::Char('x'))));

        app.navigate(Page::Tutorials);
        app.handle_input(key(Key::Down));
        let View::Tutorials(path) = app.view() else {
            panic!("not on the tutorials page");
        };
        assert_eq!(Some("html-forms"), path.active().map(|lesson| lesson.id));
    }

    #[test]
    fn test_quiz_flow() {
        let (mut app, _host) = app();
        app.handle_input(key(Key::F(4)));
        app.handle_input(key(Key::Enter));

        // Right, by number.
        app.handle_input(key(Key::Char('1')));
        app.handle_input(key(Key::Char('n')));
        // Right, by cursor.
        app.handle_input(key(Key::Down));
        app.handle_input(key(Key::Down));
        app.handle_input(key(Key::Enter));
        app.handle_input(key(Key::Enter));
        // Wrong.
        app.handle_input(key(Key::Char('1')));
        // A second answer is ignored.
        app.handle_input(key(Key::Char('2')));
        app.handle_input(key(Key::Enter));

        let View::Quiz(QuizPage::Session { session, .. }) = app.view() else {
            panic!("no quiz session");
        };
        assert!(session.is_finished());
        assert_eq!(2, session.results().correct);
        assert_eq!(67, session.results().percentage);

        app.handle_input(key(Key::Char('r')));
        let View::Quiz(QuizPage::Session { session, .. }) = app.view() else {
            panic!("no quiz session");
        };
        assert_eq!(0, session.score());
        assert!(!session.is_finished());

        app.handle_input(key(Key::Esc));
        assert!(matches!(
            app.view(),
            View::Quiz(QuizPage::Categories { selected: 0 })
        ));
    }
}
