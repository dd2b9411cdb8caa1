use crate::position::Position;
use ariadne::{CharSet, Config, Label, Report, ReportKind, Source};
use std::error::Error as StdError;
use std::fmt;

/// A parse failure, carrying the position it occurred at and whether it is
/// fatal. Recoverable failures (literal mismatches) are caught by ordered
/// choice and repetition to drive backtracking; fatal failures propagate
/// through every combinator and abort the parse.
#[derive(Debug)]
pub struct Error {
    position: Position,
    fatal: bool,
    kind: ErrorKind,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// A literal did not match at the cursor. Recoverable.
    Expected { expected: String, found: String },
    /// A regex terminal did not match at the cursor.
    UnexpectedToken,
    /// A rule reference named a production absent from the grammar.
    UndefinedRule(String),
    /// A regex terminal's pattern failed to compile.
    InvalidPattern { pattern: String, message: String },
    /// The production recursion ceiling was hit.
    DepthExceeded(usize),
    /// The grammar has no productions, so there is no start rule.
    EmptyGrammar,
}

impl Error {
    pub(crate) fn expected(position: Position, expected: &str, found: &str) -> Self {
        Self {
            position,
            fatal: false,
            kind: ErrorKind::Expected { expected: expected.to_owned(), found: found.to_owned() },
        }
    }

    pub(crate) fn unexpected_token(position: Position) -> Self {
        Self { position, fatal: true, kind: ErrorKind::UnexpectedToken }
    }

    pub(crate) fn undefined_rule(position: Position, name: &str) -> Self {
        Self { position, fatal: true, kind: ErrorKind::UndefinedRule(name.to_owned()) }
    }

    pub(crate) fn invalid_pattern(position: Position, pattern: &str, error: &regex::Error) -> Self {
        Self {
            position,
            fatal: true,
            kind: ErrorKind::InvalidPattern {
                pattern: pattern.to_owned(),
                message: error.to_string(),
            },
        }
    }

    pub(crate) fn depth_exceeded(position: Position, limit: usize) -> Self {
        Self { position, fatal: true, kind: ErrorKind::DepthExceeded(limit) }
    }

    pub(crate) fn empty_grammar() -> Self {
        Self { position: Position::start(), fatal: true, kind: ErrorKind::EmptyGrammar }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Render the failure as an ASCII report with source context.
    pub fn render(&self, source: &str) -> String {
        let at = self.position.offset.min(source.len());
        let range = at..at;

        let mut buffer = Vec::new();
        Report::build(ReportKind::Error, range.clone())
            .with_message("Parse Error")
            .with_label(Label::new(range).with_message(self.kind.to_string()))
            .with_config(Config::default().with_color(false).with_char_set(CharSet::Ascii))
            .finish()
            .write(Source::from(source), &mut buffer)
            .unwrap();

        String::from_utf8(buffer).unwrap()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.kind)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Expected { expected, found } => {
                write!(f, "expected {:?} but found {:?}", expected, found)
            }
            ErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            ErrorKind::UndefinedRule(name) => write!(f, "undefined rule {:?}", name),
            ErrorKind::InvalidPattern { pattern, message } => {
                write!(f, "invalid pattern {:?}: {}", pattern, message)
            }
            ErrorKind::DepthExceeded(limit) => {
                write!(f, "recursion depth limit of {} exceeded", limit)
            }
            ErrorKind::EmptyGrammar => write!(f, "grammar has no productions"),
        }
    }
}

impl StdError for Error {}
