//! Ratatui drawing of the pages.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::{
    app::{App, HomePage, Host, Page, PlaygroundPage, QuizPage, View},
    content::{
        Category, Status, COPYRIGHT, HERO_SNIPPET, LEARNING_PATH_CATEGORIES, OVERALL_PROGRESS,
        QUIZ_CATEGORIES,
    },
    playground::{SourceKind, PRESETS},
    quiz::QuizSession,
    timer::Scheduler,
    tutorials::LearningPath,
};

const ACCENT: Color = Color::Rgb(0, 212, 255);
const MUTED: Color = Color::Rgb(156, 163, 175);
const GREEN: Color = Color::Rgb(74, 222, 128);
const RED: Color = Color::Rgb(248, 113, 113);
const YELLOW: Color = Color::Rgb(250, 204, 21);

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(Color::DarkGray))
        .title(Span::styled(format!(" {title} "), Style::new().bold()))
}

fn brand() -> Line<'static> {
    Line::from(vec!["Code".fg(ACCENT).bold(), "Learn".white().bold()])
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Completed => GREEN,
        Status::InProgress(_) => YELLOW,
        Status::NotStarted => MUTED,
    }
}

fn status_span(status: Status) -> Span<'static> {
    Span::styled(
        format!("{} {}", status.marker(), status.label()),
        Style::new().fg(status_color(status)),
    )
}

/// Draws the whole application.
pub fn draw<H: Host>(frame: &mut Frame, app: &App<H>) {
    let [nav, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_navigation(frame, nav, app.page());
    match app.view() {
        View::Home(home) => draw_home(frame, body, home),
        View::Tutorials(path) => draw_tutorials(frame, body, path),
        View::Playground(page) => draw_playground(frame, body, page),
        View::Quiz(quiz) => draw_quiz(frame, body, quiz),
    }
    frame.render_widget(
        Paragraph::new(COPYRIGHT).fg(MUTED).alignment(Alignment::Center),
        footer,
    );
}

fn draw_navigation(frame: &mut Frame, area: Rect, page: Page) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [brand_area, tabs_area, progress_area] = Layout::horizontal([
        Constraint::Length(11),
        Constraint::Min(0),
        Constraint::Length(30),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(brand()), brand_area);

    let titles: Vec<Line> = Page::ALL
        .iter()
        .map(|page| Line::from(format!("F{} {}", page.shortcut(), page.title())))
        .collect();
    let selected = Page::ALL.iter().position(|p| *p == page).unwrap_or_default();
    frame.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(Style::new().fg(MUTED))
            .highlight_style(Style::new().fg(Color::White).add_modifier(Modifier::BOLD))
            .divider(" "),
        tabs_area,
    );

    let [label, gauge] =
        Layout::horizontal([Constraint::Length(9), Constraint::Min(0)]).areas(progress_area);
    frame.render_widget(Paragraph::new("Progress").fg(MUTED), label);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::new().fg(ACCENT).bg(Color::DarkGray))
            .percent(OVERALL_PROGRESS),
        gauge,
    );
}

fn draw_home<S: Scheduler>(frame: &mut Frame, area: Rect, home: &HomePage<S>) {
    let [hero, stats, browser] = Layout::vertical([
        Constraint::Length(9),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(area);

    let [headline, snippet] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(hero);
    let typewriter = home.typewriter.borrow();
    let text = Text::from(vec![
        Line::from(vec!["Master ".bold(), "Coding".fg(ACCENT).bold()]),
        Line::from(vec![typewriter.text().bold(), "|".fg(ACCENT)]),
        Line::default(),
        Line::from(
            "Learn web development through interactive tutorials, live code editing, \
             and hands-on projects. From HTML basics to advanced React applications.",
        )
        .fg(MUTED),
        Line::default(),
        Line::from(vec![
            "F2".fg(ACCENT).bold(),
            " Start Learning   ".into(),
            "F3".fg(ACCENT).bold(),
            " Open Playground".into(),
        ]),
    ]);
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), headline);
    frame.render_widget(
        Paragraph::new(HERO_SNIPPET).fg(GREEN).block(panel("Live Preview")),
        snippet,
    );

    let counter = home.counter.borrow();
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(stats);
    for (metric, column) in counter.metrics().iter().zip(columns.iter()) {
        let text = Text::from(vec![
            Line::from(metric.display().fg(ACCENT).bold()),
            Line::from(metric.label.fg(MUTED)),
        ]);
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *column);
    }

    let [categories, tutorials] =
        Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).areas(browser);
    let active = home.browser.category();
    let items: Vec<ListItem> = Category::ALL
        .iter()
        .map(|category| ListItem::new(category.name()))
        .collect();
    let mut state =
        ListState::default().with_selected(Category::ALL.iter().position(|c| *c == active));
    frame.render_stateful_widget(
        List::new(items)
            .block(panel("Technologies ←/→"))
            .highlight_style(Style::new().fg(ACCENT).bold())
            .highlight_symbol("▶ "),
        categories,
        &mut state,
    );

    let mut lines = Vec::new();
    for tutorial in home.browser.tutorials() {
        lines.push(Line::from(tutorial.title.bold()));
        lines.push(Line::from(tutorial.description.fg(MUTED)));
        let mut status = vec![status_span(tutorial.status)];
        if let Status::InProgress(Some(percent)) = tutorial.status {
            status.push(format!(" {percent}%").fg(YELLOW));
        }
        status.push(format!("  {}", tutorial.duration).fg(MUTED));
        lines.push(Line::from(status));
        lines.push(Line::default());
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(panel("Interactive Learning Paths")),
        tutorials,
    );
}

fn draw_tutorials(frame: &mut Frame, area: Rect, path: &LearningPath) {
    let [header, main] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [title, progress] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(30)]).areas(header);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Interactive Tutorials".bold()),
            Line::from(
                "Learn web development through hands-on coding exercises and real-world projects"
                    .fg(MUTED),
            ),
        ]),
        title,
    );
    frame.render_widget(
        Gauge::default()
            .block(panel("Your Progress"))
            .gauge_style(Style::new().fg(ACCENT).bg(Color::DarkGray))
            .percent(path.progress()),
        progress,
    );

    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(36), Constraint::Min(0)]).areas(main);
    let active = path.active();
    let mut items = Vec::new();
    let mut selected = None;
    for category in LEARNING_PATH_CATEGORIES {
        items.push(ListItem::new(Line::from(category.name().fg(ACCENT).bold())));
        for lesson in path.in_category(category) {
            if active.is_some_and(|active| active.id == lesson.id) {
                selected = Some(items.len());
            }
            items.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    lesson.status.marker().to_string(),
                    Style::new().fg(status_color(lesson.status)),
                ),
                Span::raw(format!(" {}", lesson.title)),
            ])));
        }
    }
    frame.render_stateful_widget(
        List::new(items)
            .block(panel("Learning Path ↑/↓"))
            .highlight_style(Style::new().bg(Color::Rgb(30, 58, 80))),
        sidebar,
        &mut ListState::default().with_selected(selected),
    );

    let text = match active {
        Some(lesson) => Text::from(vec![
            Line::from(lesson.title.bold()),
            Line::from(vec![
                lesson.difficulty.label().fg(ACCENT),
                format!("  {}  ", lesson.duration).fg(MUTED),
                status_span(lesson.status),
            ]),
            Line::default(),
            Line::from(
                "Welcome to this interactive tutorial. You'll learn the fundamentals \
                 through hands-on examples and exercises.",
            ),
            Line::default(),
            Line::from("Practice exercise".bold()),
            Line::from("Create a simple web page with:"),
            Line::from("  1. A main heading with your name"),
            Line::from("  2. A paragraph about yourself"),
            Line::from("  3. A list of your hobbies"),
            Line::from("  4. A link to your favorite website"),
            Line::default(),
            Line::from(vec!["F3".fg(ACCENT).bold(), " Try it in the playground".into()]),
        ]),
        None => Text::from("No tutorials yet."),
    };
    frame.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: false }).block(panel("Tutorial")),
        content,
    );
}

fn draw_playground<T>(frame: &mut Frame, area: Rect, page: &PlaygroundPage<T>) {
    let [main, presets, help] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);
    let [editor, preview] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(main);

    let block = panel("Code Editor");
    let inner = block.inner(editor);
    frame.render_widget(block, editor);
    let [tabs, textarea] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner);
    let active = page.playground.active();
    let titles: Vec<Line> = SourceKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| Line::from(format!("Alt+{} {}", i + 1, kind.title())))
        .collect();
    frame.render_widget(
        Tabs::new(titles)
            .select(SourceKind::ALL.iter().position(|k| *k == active).unwrap_or_default())
            .highlight_style(Style::new().fg(ACCENT).bold())
            .block(Block::default().borders(Borders::BOTTOM)),
        tabs,
    );
    frame.render_widget(page.playground.editor(active), textarea);

    let placeholder = match page.playground.last_run() {
        // The frame is laid over this panel once a document is loaded.
        Some(bytes) => Text::from(format!("Running ({bytes} bytes)")).fg(MUTED),
        None => Text::from(vec![
            Line::from("💻"),
            Line::default(),
            Line::from("Press Ctrl+Enter to see your output"),
        ])
        .fg(MUTED),
    };
    frame.render_widget(
        Paragraph::new(placeholder)
            .alignment(Alignment::Center)
            .block(panel("Live Preview")),
        preview,
    );

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(presets);
    for (i, (preset, column)) in PRESETS.iter().zip(columns.iter()).enumerate() {
        let text = Line::from(vec![
            format!("F{} ", i + 6).fg(ACCENT).bold(),
            preset.name.bold(),
            format!("  {}", preset.summary).fg(MUTED),
        ]);
        frame.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
            *column,
        );
    }

    frame.render_widget(
        Paragraph::new("Ctrl+Enter run · Alt+←/→ switch editor · F6-F8 quick start examples")
            .fg(MUTED),
        help,
    );
}

fn draw_quiz(frame: &mut Frame, area: Rect, quiz: &QuizPage) {
    match quiz {
        QuizPage::Categories { selected } => draw_quiz_categories(frame, area, *selected),
        QuizPage::Session { session, .. } if session.is_finished() => {
            draw_quiz_results(frame, area, session)
        }
        QuizPage::Session {
            session,
            highlighted,
        } => draw_quiz_question(frame, area, session, *highlighted),
    }
}

fn draw_quiz_categories(frame: &mut Frame, area: Rect, selected: usize) {
    let [header, list] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from("Test Your Knowledge".bold()),
            Line::from("Challenge yourself with interactive quizzes and track your progress".fg(MUTED)),
        ]),
        header,
    );
    let items: Vec<ListItem> = QUIZ_CATEGORIES
        .iter()
        .map(|quiz| {
            let best = if quiz.best_score > 0 {
                format!("Best: {}%", quiz.best_score)
            } else {
                "Not attempted".to_string()
            };
            ListItem::new(vec![
                Line::from(quiz.name.bold()),
                Line::from(format!(
                    "  {} questions · {} · {best}",
                    quiz.questions,
                    quiz.difficulty.label()
                ))
                .fg(MUTED),
            ])
        })
        .collect();
    frame.render_stateful_widget(
        List::new(items)
            .block(panel("Quizzes ↑/↓ Enter to start"))
            .highlight_style(Style::new().fg(ACCENT))
            .highlight_symbol("▶ "),
        list,
        &mut ListState::default().with_selected(Some(selected)),
    );
}

fn draw_quiz_question(frame: &mut Frame, area: Rect, session: &QuizSession, highlighted: usize) {
    let Some(question) = session.question() else {
        return;
    };
    let [header, progress, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            session.category().name.bold(),
            format!("  Question {} of {}", session.position() + 1, session.len()).fg(MUTED),
            "  Esc back".fg(MUTED),
        ])),
        header,
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::new().fg(ACCENT).bg(Color::DarkGray))
            .percent(session.progress()),
        progress,
    );

    let selected = session.selected();
    let mut lines = vec![Line::from(question.prompt.bold()), Line::default()];
    for (i, option) in question.options.iter().enumerate() {
        let (style, mark) = match selected {
            None => (Style::new(), ""),
            Some(_) if i == question.correct => (Style::new().fg(GREEN), " ✓"),
            Some(answer) if answer == i => (Style::new().fg(RED), " ✗"),
            Some(_) => (Style::new().fg(Color::DarkGray), ""),
        };
        let cursor = if selected.is_none() && i == highlighted { "▶" } else { " " };
        lines.push(Line::from(vec![
            Span::styled(format!("{cursor} {}. ", i + 1), Style::new().fg(ACCENT)),
            Span::styled(*option, style),
            Span::styled(mark, style),
        ]));
    }
    if selected.is_some() {
        let next = if session.position() + 1 < session.len() {
            "Next Question"
        } else {
            "View Results"
        };
        lines.push(Line::default());
        lines.push(Line::from(vec!["Enter".fg(ACCENT).bold(), format!(" {next}").into()]));
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(panel("Question")),
        body,
    );
}

fn draw_quiz_results(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let results = session.results();
    let text = Text::from(vec![
        Line::from(results.rating.emoji()),
        Line::default(),
        Line::from("Quiz Completed!".bold()),
        Line::default(),
        Line::from(vec![
            format!("{}/{}", results.correct, results.total).fg(ACCENT).bold(),
            "  Correct Answers".fg(MUTED),
        ]),
        Line::from(vec![
            format!("{}%", results.percentage).fg(GREEN).bold(),
            "  Score".fg(MUTED),
        ]),
        Line::from(results.rating.label().fg(YELLOW).bold()),
        Line::default(),
        Line::from(vec![
            "Esc".fg(ACCENT).bold(),
            " Back to Quizzes   ".into(),
            "r".fg(ACCENT).bold(),
            " Retry Quiz".into(),
        ]),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(panel(session.category().name)),
        area,
    );
}
