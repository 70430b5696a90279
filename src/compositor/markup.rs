//! A forgiving HTML tokenizer and the body extraction built on top of it.
//!
//! The tokenizer never fails: anything that does not look like a tag is
//! text. Every token borrows its exact source slice so that re-serializing
//! the retained tokens reproduces the user's markup byte for byte.

/// Elements whose content is raw text and never scanned for tags.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Elements that may appear inside `<head>` without implicitly closing it.
const HEAD_ELEMENTS: &[&str] = &[
    "meta", "link", "base", "title", "style", "script", "noscript",
];

/// Kind of a markup token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'a> {
    /// Character data between tags.
    Text,
    /// `<!-- ... -->`.
    Comment,
    /// `<!DOCTYPE ...>` and other `<!...>` declarations.
    Declaration,
    /// An opening tag.
    StartTag {
        /// Tag name as written.
        name: &'a str,
    },
    /// A closing tag.
    EndTag {
        /// Tag name as written.
        name: &'a str,
    },
    /// Content of a raw-text element such as `<script>`.
    RawText,
}

/// A token with the source slice it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// Token kind.
    pub kind: TokenKind<'a>,
    /// Source text of the token.
    pub source: &'a str,
}

impl Token<'_> {
    /// Returns `true` if this is a start tag named `name`.
    fn is_start(&self, name: &str) -> bool {
        matches!(self.kind, TokenKind::StartTag { name: n } if n.eq_ignore_ascii_case(name))
    }

    /// Returns `true` if this is a start or end tag named `name`.
    fn is_tag(&self, name: &str) -> bool {
        match self.kind {
            TokenKind::StartTag { name: n } | TokenKind::EndTag { name: n } => {
                n.eq_ignore_ascii_case(name)
            }
            _ => false,
        }
    }

    /// Returns `true` if this is text made of whitespace only.
    fn is_blank_text(&self) -> bool {
        self.kind == TokenKind::Text && self.source.trim().is_empty()
    }
}

/// Splits markup into [`Token`]s.
#[derive(Debug)]
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// Set after a raw-text start tag, holds its name.
    raw_text: Option<&'a str>,
    /// Offset of the last `>` in the input. No tag starts after it.
    last_gt: Option<usize>,
    /// Offset of a tag left open until the end of the input. A tag starting
    /// after it would scan the same tail, so it is text too.
    unclosed: Option<usize>,
}

impl<'a> Tokenizer<'a> {
    /// Constructs a new [`Tokenizer`].
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            raw_text: None,
            last_gt: input.rfind('>'),
            unclosed: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn emit(&mut self, kind: TokenKind<'a>, len: usize) -> Token<'a> {
        let source = &self.input[self.pos..self.pos + len];
        self.pos += len;
        Token { kind, source }
    }

    /// Reads the content of a raw-text element up to its closing tag.
    fn raw_text(&mut self, element: &str) -> Option<Token<'a>> {
        let rest = self.rest();
        let len = find_end_tag(rest, element).unwrap_or(rest.len());
        (len > 0).then(|| self.emit(TokenKind::RawText, len))
    }

    /// Tries to read a tag, comment or declaration at the current position.
    fn markup(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        if rest.starts_with("<!--") {
            let len = rest[4..].find("-->").map_or(rest.len(), |end| end + 7);
            return Some(self.emit(TokenKind::Comment, len));
        }
        match bytes.get(1) {
            Some(b'!') | Some(b'?') => {
                let len = rest.find('>').map_or(rest.len(), |end| end + 1);
                Some(self.emit(TokenKind::Declaration, len))
            }
            Some(b'/') => {
                let (name, len) = self.tag(self.pos, 2)?;
                Some(self.emit(TokenKind::EndTag { name }, len))
            }
            Some(_) => {
                let (name, len) = self.tag(self.pos, 1)?;
                let self_closing = rest[..len - 1].ends_with('/');
                if !self_closing
                    && RAW_TEXT_ELEMENTS
                        .iter()
                        .any(|element| element.eq_ignore_ascii_case(name))
                {
                    self.raw_text = Some(name);
                }
                Some(self.emit(TokenKind::StartTag { name }, len))
            }
            None => None,
        }
    }

    /// Reads the name and length of the tag at `at`, whose name starts
    /// `skip` bytes in.
    fn tag(&mut self, at: usize, skip: usize) -> Option<(&'a str, usize)> {
        let candidate = &self.input[at..];
        let name = tag_name(&candidate[skip..])?;
        if self.last_gt.map_or(true, |gt| at > gt) || self.unclosed.is_some_and(|u| at > u) {
            return None;
        }
        match tag_end(candidate, skip + name.len()) {
            Some(len) => Some((name, len)),
            None => {
                self.unclosed = Some(at);
                None
            }
        }
    }

    /// Returns `true` if a tag, comment or declaration starts at `at`.
    fn starts_markup(&mut self, at: usize) -> bool {
        match self.input.as_bytes().get(at + 1) {
            Some(b'!') | Some(b'?') => true,
            Some(b'/') => self.tag(at, 2).is_some(),
            Some(_) => self.tag(at, 1).is_some(),
            None => false,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(element) = self.raw_text.take() {
            if let Some(token) = self.raw_text(element) {
                return Some(token);
            }
        }
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }
        if rest.starts_with('<') {
            if let Some(token) = self.markup() {
                return Some(token);
            }
        }
        // Text runs until the next `<` that starts a real token.
        let mut len = rest.chars().next().map_or(1, char::len_utf8);
        while let Some(offset) = rest[len..].find('<') {
            len += offset;
            if self.starts_markup(self.pos + len) {
                break;
            }
            len += 1;
        }
        if !rest[len..].starts_with('<') {
            len = rest.len();
        }
        Some(self.emit(TokenKind::Text, len))
    }
}

/// Returns the tag name at the start of `input`, if there is one.
fn tag_name(input: &str) -> Option<&str> {
    if !input.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let len = input
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(input.len());
    Some(&input[..len])
}

/// Returns the length of the tag that starts `input`, skipping quoted
/// attribute values. `None` if the tag is never closed.
fn tag_end(input: &str, from: usize) -> Option<usize> {
    let mut quote = None;
    for (index, c) in input[from..].char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(from + index + 1),
            (None, _) => {}
        }
    }
    None
}

/// Finds the offset of `</element` (case-insensitive) in `input`.
fn find_end_tag(input: &str, element: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut from = 0;
    while let Some(offset) = input[from..].find("</") {
        let start = from + offset;
        let name_end = start + 2 + element.len();
        if bytes.len() >= name_end
            && input.is_char_boundary(name_end)
            && input[start + 2..name_end].eq_ignore_ascii_case(element)
            && bytes
                .get(name_end)
                .map_or(true, |b| b.is_ascii_whitespace() || *b == b'>' || *b == b'/')
        {
            return Some(start);
        }
        from = start + 2;
    }
    None
}

/// Where the extractor is in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Nothing but wrappers, whitespace and comments seen so far.
    BeforeHead,
    /// Inside an explicit `<head>`.
    InHead,
    /// Inside a head element (`<title>`, `<script>` ...) that lives in `<head>`.
    InHeadElement,
    /// After `</head>`, before any body content.
    AfterHead,
    /// Body content has started.
    InBody,
}

/// Extracts the body content of a markup buffer.
///
/// Document wrappers (doctype, `html`, `head` with its content, `body`)
/// are removed; everything else is kept verbatim, including comments and
/// the content of raw-text elements.
pub(crate) fn body_content(markup: &str) -> String {
    let mut mode = Mode::BeforeHead;
    let mut head_element: Option<&str> = None;
    let mut body = String::with_capacity(markup.len());

    for token in Tokenizer::new(markup) {
        if token.kind == TokenKind::Declaration || token.is_tag("html") {
            continue;
        }
        match mode {
            Mode::InHeadElement => {
                let closes = matches!(
                    (token.kind, head_element),
                    (TokenKind::EndTag { name }, Some(open)) if name.eq_ignore_ascii_case(open)
                );
                if closes {
                    head_element = None;
                    mode = Mode::InHead;
                }
                continue;
            }
            Mode::InHead => {
                if token.is_tag("head") && matches!(token.kind, TokenKind::EndTag { .. }) {
                    mode = Mode::AfterHead;
                    continue;
                }
                if token.is_start("body") {
                    mode = Mode::InBody;
                    continue;
                }
                match token.kind {
                    TokenKind::StartTag { name }
                        if HEAD_ELEMENTS.iter().any(|e| e.eq_ignore_ascii_case(name)) =>
                    {
                        if !token.source.ends_with("/>") && has_content(name) {
                            head_element = Some(name);
                            mode = Mode::InHeadElement;
                        }
                        continue;
                    }
                    TokenKind::StartTag { .. } => mode = Mode::InBody,
                    TokenKind::Text if !token.is_blank_text() => mode = Mode::InBody,
                    _ => continue,
                }
            }
            Mode::BeforeHead | Mode::AfterHead => {
                if token.is_start("head") && mode == Mode::BeforeHead {
                    mode = Mode::InHead;
                    continue;
                }
                if token.is_start("body") {
                    mode = Mode::InBody;
                    continue;
                }
                if token.is_tag("head") || token.is_tag("body") {
                    continue;
                }
                if !(token.is_blank_text() || token.kind == TokenKind::Comment) {
                    mode = Mode::InBody;
                }
            }
            Mode::InBody => {
                if token.is_tag("head") || token.is_tag("body") {
                    continue;
                }
            }
        }
        body.push_str(token.source);
    }

    body.trim().to_string()
}

/// Returns `true` if the head element `name` has content and an end tag.
fn has_content(name: &str) -> bool {
    !["meta", "link", "base"]
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}
