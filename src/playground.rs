//! ## Playground
//!
//! Three code editors (HTML, CSS and JavaScript) and a preview. Pressing
//! run composes the buffers into one document and loads it into a
//! [`RenderingSurface`]; editing alone never touches the preview.

use tui_textarea::{Input, TextArea};

use crate::{
    compositor::{compose, ComposedDocument},
    error::Error,
};

/// A place that can display a composed document in isolation from the
/// host page.
pub trait RenderingSurface {
    /// Replaces the displayed document.
    fn load(&mut self, document: &ComposedDocument) -> Result<(), Error>;
}

/// The three source buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Html,
    Css,
    JavaScript,
}

impl SourceKind {
    /// Every kind in tab order.
    pub const ALL: [Self; 3] = [Self::Html, Self::Css, Self::JavaScript];

    /// Tab title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::JavaScript => "JavaScript",
        }
    }

    /// Hint shown in an empty editor.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Html => "Write your HTML here...",
            Self::Css => "Write your CSS here...",
            Self::JavaScript => "Write your JavaScript here...",
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Html => 0,
            Self::Css => 1,
            Self::JavaScript => 2,
        }
    }
}

/// Starting point loaded with one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub summary: &'static str,
    pub html: &'static str,
    pub css: &'static str,
    pub javascript: &'static str,
}

pub const DEFAULT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>My Project</title>
</head>
<body>
    <h1>Hello, World!</h1>
    <p>Start coding here...</p>
</body>
</html>"#;

pub const DEFAULT_CSS: &str = "body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 20px;
  background: #f0f0f0;
}

h1 {
  color: #00d4ff;
}";

pub const DEFAULT_JAVASCRIPT: &str = "console.log('Welcome to CodeLearn Playground!');

// Your JavaScript code here";

pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "Beautiful Card",
        summary: "Gradient card with shadow",
        html: "<div class=\"container\">\n  <h1>Beautiful Card</h1>\n  <p>This is a styled card component</p>\n</div>",
        css: ".container {\n  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);\n  padding: 40px;\n  border-radius: 20px;\n  color: white;\n  text-align: center;\n  box-shadow: 0 10px 40px rgba(0,0,0,0.3);\n}",
        javascript: "",
    },
    Preset {
        name: "Interactive Button",
        summary: "Button with click counter",
        html: "<button id=\"btn\">Click Me!</button>\n<p id=\"text\">Click count: 0</p>",
        css: "button {\n  background: #00d4ff;\n  color: white;\n  border: none;\n  padding: 15px 30px;\n  font-size: 18px;\n  border-radius: 8px;\n  cursor: pointer;\n}\nbutton:hover {\n  background: #00a8cc;\n}",
        javascript: "let count = 0;\ndocument.getElementById(\"btn\").addEventListener(\"click\", () => {\n  count++;\n  document.getElementById(\"text\").innerText = `Click count: ${count}`;\n});",
    },
    Preset {
        name: "CSS Animation",
        summary: "Rotating box animation",
        html: "<div class=\"box\"></div>",
        css: ".box {\n  width: 100px;\n  height: 100px;\n  background: #4ade80;\n  animation: spin 2s linear infinite;\n}\n\n@keyframes spin {\n  from { transform: rotate(0deg); }\n  to { transform: rotate(360deg); }\n}",
        javascript: "",
    },
];

/// Editor state of the playground page.
#[derive(Debug)]
pub struct Playground<'a> {
    editors: [TextArea<'a>; 3],
    active: SourceKind,
    /// Size of the last document loaded into the preview.
    last_run: Option<usize>,
}

impl Default for Playground<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Playground<'a> {
    /// Constructs a new [`Playground`] holding the sample project.
    pub fn new() -> Self {
        Self {
            editors: [
                editor(SourceKind::Html, DEFAULT_HTML),
                editor(SourceKind::Css, DEFAULT_CSS),
                editor(SourceKind::JavaScript, DEFAULT_JAVASCRIPT),
            ],
            active: SourceKind::Html,
            last_run: None,
        }
    }

    /// Returns the active tab.
    pub fn active(&self) -> SourceKind {
        self.active
    }

    /// Switches to `kind`.
    pub fn select(&mut self, kind: SourceKind) {
        self.active = kind;
    }

    /// Switches to the tab on the right, wrapping around.
    pub fn next_tab(&mut self) {
        self.active = SourceKind::ALL[(self.active.index() + 1) % SourceKind::ALL.len()];
    }

    /// Switches to the tab on the left, wrapping around.
    pub fn previous_tab(&mut self) {
        let len = SourceKind::ALL.len();
        self.active = SourceKind::ALL[(self.active.index() + len - 1) % len];
    }

    /// Returns the editor of `kind`.
    pub fn editor(&self, kind: SourceKind) -> &TextArea<'a> {
        &self.editors[kind.index()]
    }

    /// Returns the content of `kind`.
    pub fn source(&self, kind: SourceKind) -> String {
        self.editor(kind).lines().join("\n")
    }

    /// Forwards a key press to the active editor.
    ///
    /// Returns `true` if the buffer changed.
    pub fn input(&mut self, input: impl Into<Input>) -> bool {
        self.editors[self.active.index()].input(input)
    }

    /// Replaces all three buffers with `preset`.
    pub fn load_preset(&mut self, preset: &Preset) {
        tracing::debug!(preset = preset.name, "loading preset");
        self.editors = [
            editor(SourceKind::Html, preset.html),
            editor(SourceKind::Css, preset.css),
            editor(SourceKind::JavaScript, preset.javascript),
        ];
    }

    /// Composes the buffers and shows the result on `surface`.
    pub fn run<S: RenderingSurface + ?Sized>(&mut self, surface: &mut S) -> Result<(), Error> {
        let document = compose(
            &self.source(SourceKind::Html),
            &self.source(SourceKind::Css),
            &self.source(SourceKind::JavaScript),
        );
        tracing::info!(bytes = document.len(), "running playground");
        surface.load(&document)?;
        self.last_run = Some(document.len());
        Ok(())
    }

    /// Returns the size of the document on display, `None` before the
    /// first run.
    pub fn last_run(&self) -> Option<usize> {
        self.last_run
    }
}

fn editor<'a>(kind: SourceKind, source: &str) -> TextArea<'a> {
    let mut textarea = TextArea::from(source.lines());
    textarea.set_placeholder_text(kind.placeholder());
    textarea
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use tui_textarea::Key;

    use super::*;
    use pretty_assertions::assert_eq;

    /// Surface that records every document it receives.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingSurface {
        pub(crate) documents: Rc<RefCell<Vec<String>>>,
    }

    impl RenderingSurface for RecordingSurface {
        fn load(&mut self, document: &ComposedDocument) -> Result<(), Error> {
            self.documents.borrow_mut().push(document.to_string());
            Ok(())
        }
    }

    fn key(key: Key) -> Input {
        Input {
            key,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    #[test]
    fn test_defaults() {
        let playground = Playground::new();
        assert_eq!(SourceKind::Html, playground.active());
        assert_eq!(DEFAULT_HTML, playground.source(SourceKind::Html));
        assert_eq!(DEFAULT_CSS, playground.source(SourceKind::Css));
        assert_eq!(DEFAULT_JAVASCRIPT, playground.source(SourceKind::JavaScript));
        assert_eq!(None, playground.last_run());
    }

    #[test]
    fn test_editing_does_not_compose() {
        let mut surface = RecordingSurface::default();
        let mut playground = Playground::new();
        playground.select(SourceKind::JavaScript);
        assert!(playground.input(key(Key::Char('x'))));
        assert!(surface.documents.borrow().is_empty());

        playground.run(&mut surface).unwrap();
        let documents = surface.documents.borrow();
        assert_eq!(1, documents.len());
        assert!(documents[0].contains("xconsole.log('Welcome to CodeLearn Playground!');"));
        assert!(documents[0].contains("<h1>Hello, World!</h1>"));
        assert!(!documents[0].contains("My Project"));
        assert_eq!(Some(documents[0].len()), playground.last_run());
    }

    #[test]
    fn test_tabs_wrap() {
        let mut playground = Playground::new();
        playground.previous_tab();
        assert_eq!(SourceKind::JavaScript, playground.active());
        playground.next_tab();
        playground.next_tab();
        assert_eq!(SourceKind::Css, playground.active());
    }

    #[test]
    fn test_preset_replaces_buffers() {
        let mut surface = RecordingSurface::default();
        let mut playground = Playground::new();
        playground.load_preset(&PRESETS[2]);
        assert_eq!("<div class=\"box\"></div>", playground.source(SourceKind::Html));
        assert_eq!("", playground.source(SourceKind::JavaScript));

        playground.run(&mut surface).unwrap();
        let documents = surface.documents.borrow();
        assert!(documents[0].contains("@keyframes spin"));
        assert!(documents[0].contains("<body>\n<div class=\"box\"></div>\n<script>"));
    }

    #[test]
    fn test_failed_load_keeps_placeholder() {
        struct Broken;
        impl RenderingSurface for Broken {
            fn load(&mut self, _: &ComposedDocument) -> Result<(), Error> {
                Err(Error::UnableToRetrieveBody)
            }
        }
        let mut playground = Playground::new();
        assert!(playground.run(&mut Broken).is_err());
        assert_eq!(None, playground.last_run());
    }
}
