use super::result::{Diagnostic, ScanResult};

/// Whether a comment runs to the end of the line or to the next `*/`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommentStyle {
    Line,
    Block,
}

/// Current scanning mode. Strings and comments can only be entered from
/// `Code`, so they never nest into each other.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Mode {
    Code,
    InString { delimiter: char },
    InComment { style: CommentStyle },
}

pub struct Scanner {
    source: Vec<char>,
    pos: usize,
    mode: Mode,
    braces: i32,
    parens: i32,
    brackets: i32,
    open_tags: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    pub fn new(source: &str) -> Scanner {
        Scanner {
            source: source.chars().collect(),
            pos: 0,
            mode: Mode::Code,
            braces: 0,
            parens: 0,
            brackets: 0,
            open_tags: vec![],
            diagnostics: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.source.get(self.pos + offset).copied()
    }

    pub fn prev(&self) -> Option<char> {
        if self.pos == 0 {
            None
        } else {
            self.source.get(self.pos - 1).copied()
        }
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn step(&mut self) {
        match self.mode {
            Mode::InComment { style } => self.step_comment(style),
            Mode::InString { delimiter } => self.step_string(delimiter),
            Mode::Code => self.step_code(),
        }

        self.advance_n(1);
    }

    fn step_comment(&mut self, style: CommentStyle) {
        match style {
            CommentStyle::Block => {
                if self.at() == '*' && self.peek(1) == Some('/') {
                    self.mode = Mode::Code;
                    self.advance_n(1);
                }
            }
            CommentStyle::Line => {
                if self.at() == '\n' {
                    self.mode = Mode::Code;
                }
            }
        }
    }

    fn step_string(&mut self, delimiter: char) {
        // Naive escape check: only the single raw character before the
        // delimiter is inspected, so `\\"` keeps the string open.
        if self.at() == delimiter && self.prev() != Some('\\') {
            self.mode = Mode::Code;
        }
    }

    fn step_code(&mut self) {
        let c = self.at();

        match c {
            '"' | '\'' => self.mode = Mode::InString { delimiter: c },
            '/' if self.peek(1) == Some('*') => {
                self.mode = Mode::InComment {
                    style: CommentStyle::Block,
                };
                self.advance_n(1);
            }
            '/' if self.peek(1) == Some('/') => {
                self.mode = Mode::InComment {
                    style: CommentStyle::Line,
                };
                self.advance_n(1);
            }
            '{' => self.braces += 1,
            '}' => self.braces -= 1,
            '(' => self.parens += 1,
            ')' => self.parens -= 1,
            '[' => self.brackets += 1,
            ']' => self.brackets -= 1,
            '<' if self.peek(1).is_some_and(|next| next.is_alphabetic()) => self.opening_tag(),
            '<' if self.peek(1) == Some('/')
                && self.peek(2).is_some_and(|next| next.is_alphabetic()) =>
            {
                self.closing_tag()
            }
            _ => {}
        }
    }

    /// Handles a `<` followed by a letter. The tag name and the search for a
    /// self-closing `/>` only peek ahead; the main index is not moved, so the
    /// tag body is rescanned normally (attribute strings still toggle string
    /// mode, expression braces are still counted).
    fn opening_tag(&mut self) {
        let mut j = self.pos + 1;
        while j < self.source.len() && is_tag_name_char(self.source[j]) {
            j += 1;
        }
        let tag: String = self.source[self.pos + 1..j].iter().collect();

        let mut self_closing = false;
        let mut k = j;
        while k < self.source.len() && self.source[k] != '>' {
            if self.source[k] == '/' && self.source.get(k + 1) == Some(&'>') {
                self_closing = true;
                break;
            }
            k += 1;
        }

        // A self-closing tag has no closer to wait for.
        if !self_closing {
            self.open_tags.push(tag);
        }
    }

    /// Handles a `</` followed by a letter. On a name mismatch the stack is
    /// left untouched: the unmatched open tag stays and shows up in the
    /// final report.
    fn closing_tag(&mut self) {
        let mut j = self.pos + 2;
        while j < self.source.len() && is_tag_name_char(self.source[j]) {
            j += 1;
        }
        let tag: String = self.source[self.pos + 2..j].iter().collect();

        if self.open_tags.last() == Some(&tag) {
            self.open_tags.pop();
        } else {
            self.diagnostics.push(Diagnostic::Mismatch {
                expected: self.open_tags.last().cloned(),
                found: tag,
            });
        }
    }

    fn into_result(self) -> ScanResult {
        ScanResult {
            braces: self.braces,
            parens: self.parens,
            brackets: self.brackets,
            open_tags: self.open_tags,
            diagnostics: self.diagnostics,
        }
    }
}

fn is_tag_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '.'
}

/// Scans the full source text and returns the balance snapshot. Never fails:
/// malformed input degrades to imbalanced counts and mismatch diagnostics.
/// End of input terminates the pass in any mode, including an unterminated
/// string or comment.
pub fn scan(source: &str) -> ScanResult {
    let mut scanner = Scanner::new(source);

    while !scanner.at_eof() {
        scanner.step();
    }

    scanner.into_result()
}
