//! Static catalog data shown by the pages.

/// How far a learner got through a tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Finished.
    Completed,
    /// Started, with an optional completion percentage.
    InProgress(Option<u8>),
    /// Not opened yet.
    NotStarted,
}

impl Status {
    /// Short label for badges.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress(_) => "In Progress",
            Self::NotStarted => "Not Started",
        }
    }

    /// Single character marker used in lists.
    pub const fn marker(self) -> char {
        match self {
            Self::Completed => '✓',
            Self::InProgress(_) => '◐',
            Self::NotStarted => '○',
        }
    }
}

/// Difficulty of a tutorial or a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

/// A technology the catalog is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Html,
    Css,
    JavaScript,
    React,
    NodeJs,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Html,
        Self::Css,
        Self::JavaScript,
        Self::React,
        Self::NodeJs,
    ];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Html => "HTML",
            Self::Css => "CSS",
            Self::JavaScript => "JavaScript",
            Self::React => "React",
            Self::NodeJs => "Node.js",
        }
    }
}

/// A tutorial card of the landing page browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Featured {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub status: Status,
    pub duration: &'static str,
}

/// Tutorials featured on the landing page.
pub const FEATURED: &[Featured] = &[
    Featured {
        category: Category::Html,
        title: "HTML Fundamentals",
        description: "Learn the building blocks of web pages with semantic HTML elements.",
        status: Status::Completed,
        duration: "15 min",
    },
    Featured {
        category: Category::Css,
        title: "CSS Flexbox Mastery",
        description: "Master flexible layouts with CSS Flexbox for responsive designs.",
        status: Status::InProgress(Some(75)),
        duration: "25 min",
    },
    Featured {
        category: Category::JavaScript,
        title: "JavaScript ES6+",
        description: "Modern JavaScript features including arrow functions and destructuring.",
        status: Status::NotStarted,
        duration: "45 min",
    },
    Featured {
        category: Category::React,
        title: "React Hooks",
        description: "Build modern React applications with functional components and hooks.",
        status: Status::NotStarted,
        duration: "60 min",
    },
    Featured {
        category: Category::NodeJs,
        title: "Node.js Backend",
        description: "Build server-side applications with Node.js and Express.",
        status: Status::NotStarted,
        duration: "90 min",
    },
];

/// One lesson of the learning path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson {
    pub id: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub status: Status,
    pub duration: &'static str,
    pub difficulty: Difficulty,
}

/// Categories of the learning path, in display order.
pub const LEARNING_PATH_CATEGORIES: [Category; 4] = [
    Category::Html,
    Category::Css,
    Category::JavaScript,
    Category::React,
];

/// The learning path of the tutorials page.
pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: "html-basics",
        category: Category::Html,
        title: "HTML Basics",
        status: Status::Completed,
        duration: "15 min",
        difficulty: Difficulty::Beginner,
    },
    Lesson {
        id: "html-forms",
        category: Category::Html,
        title: "Forms & Input",
        status: Status::InProgress(None),
        duration: "20 min",
        difficulty: Difficulty::Beginner,
    },
    Lesson {
        id: "html-semantic",
        category: Category::Html,
        title: "Semantic HTML",
        status: Status::NotStarted,
        duration: "18 min",
        difficulty: Difficulty::Beginner,
    },
    Lesson {
        id: "css-basics",
        category: Category::Css,
        title: "CSS Fundamentals",
        status: Status::Completed,
        duration: "25 min",
        difficulty: Difficulty::Beginner,
    },
    Lesson {
        id: "css-flexbox",
        category: Category::Css,
        title: "Flexbox Layout",
        status: Status::InProgress(None),
        duration: "30 min",
        difficulty: Difficulty::Intermediate,
    },
    Lesson {
        id: "css-grid",
        category: Category::Css,
        title: "CSS Grid",
        status: Status::NotStarted,
        duration: "30 min",
        difficulty: Difficulty::Intermediate,
    },
    Lesson {
        id: "js-basics",
        category: Category::JavaScript,
        title: "JavaScript Fundamentals",
        status: Status::NotStarted,
        duration: "45 min",
        difficulty: Difficulty::Beginner,
    },
    Lesson {
        id: "js-es6",
        category: Category::JavaScript,
        title: "ES6+ Features",
        status: Status::NotStarted,
        duration: "40 min",
        difficulty: Difficulty::Intermediate,
    },
    Lesson {
        id: "react-basics",
        category: Category::React,
        title: "React Fundamentals",
        status: Status::NotStarted,
        duration: "60 min",
        difficulty: Difficulty::Intermediate,
    },
];

/// A quiz that can be started from the quiz page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizCategory {
    pub id: &'static str,
    pub name: &'static str,
    /// Advertised number of questions.
    pub questions: u32,
    pub difficulty: Difficulty,
    /// Best score in percent, `0` if never taken.
    pub best_score: u8,
}

pub const QUIZ_CATEGORIES: &[QuizCategory] = &[
    QuizCategory {
        id: "html",
        name: "HTML Fundamentals",
        questions: 15,
        difficulty: Difficulty::Beginner,
        best_score: 95,
    },
    QuizCategory {
        id: "css",
        name: "CSS Mastery",
        questions: 20,
        difficulty: Difficulty::Intermediate,
        best_score: 72,
    },
    QuizCategory {
        id: "javascript",
        name: "JavaScript Essentials",
        questions: 25,
        difficulty: Difficulty::Intermediate,
        best_score: 90,
    },
    QuizCategory {
        id: "react",
        name: "React Fundamentals",
        questions: 18,
        difficulty: Difficulty::Advanced,
        best_score: 0,
    },
];

/// A multiple choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index of the correct option.
    pub correct: usize,
}

/// Questions asked by every quiz.
pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "What does HTML stand for?",
        options: [
            "Hyper Text Markup Language",
            "High Tech Modern Language",
            "Home Tool Markup Language",
            "Hyperlinks and Text Markup Language",
        ],
        correct: 0,
    },
    Question {
        prompt: "Which HTML element is used for the largest heading?",
        options: ["<heading>", "<h6>", "<h1>", "<head>"],
        correct: 2,
    },
    Question {
        prompt: "How do you create a hyperlink in HTML?",
        options: [
            "<a url=\"http://example.com\">Link</a>",
            "<a href=\"http://example.com\">Link</a>",
            "<link>http://example.com</link>",
            "<hyperlink>http://example.com</hyperlink>",
        ],
        correct: 1,
    },
];

/// Overall progress shown in the navigation bar, in percent.
pub const OVERALL_PROGRESS: u16 = 75;

/// Footer line.
pub const COPYRIGHT: &str = "© 2025 CodeLearn. Empowering the next generation of developers.";

/// Snippet shown next to the landing page headline.
pub const HERO_SNIPPET: &str = "function createWebsite() {
  const element = document.createElement('div');
  element.innerHTML = 'Hello, World!';
  return element;
}

// Initialize the app
document.body.appendChild(createWebsite());";
