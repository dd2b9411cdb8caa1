use serde::Serialize;
use std::fmt;

/// A cursor position within the input. `line` counts line breaks consumed so
/// far, `column` counts characters since the last line break, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub(crate) fn start() -> Self {
        Self { offset: 0, line: 0, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
