use crate::{
    error::Error,
    grammar::{Expr, Grammar, Pattern},
    state::State,
    value::Value,
    ParseResult,
};
use tracing::{debug, trace};

/// Engine options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Ceiling on nested production activations. The engine does not detect
    /// left recursion; this converts runaway recursion into a fatal error
    /// instead of exhausting the stack.
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Parse `input` starting at the grammar's start rule, with default
/// [`Options`]. Trailing unconsumed input is ignored; grammars that must
/// match to the end append [`crate::combinator::eoi`].
pub fn parse(grammar: &Grammar, input: &str) -> ParseResult {
    parse_with(grammar, input, Options::default())
}

pub fn parse_with(grammar: &Grammar, input: &str, options: Options) -> ParseResult {
    let start = match grammar.start() {
        Some(start) => start,
        None => return Err(Error::empty_grammar()),
    };

    let mut parser = Parser { grammar, state: State::new(input), options, depth: 0 };
    let result = parser.production(start);

    match &result {
        Ok(_) => debug!(
            rule = start,
            consumed = parser.state.position().offset,
            "parse succeeded"
        ),
        Err(error) => debug!(rule = start, %error, "parse failed"),
    }

    result
}

struct Parser<'g, 's> {
    grammar: &'g Grammar,
    state: State<'s>,
    options: Options,
    depth: usize,
}

impl Parser<'_, '_> {
    fn production(&mut self, name: &str) -> ParseResult {
        if self.depth >= self.options.max_depth {
            return Err(Error::depth_exceeded(self.state.position(), self.options.max_depth));
        }

        let grammar = self.grammar;
        let production = match grammar.get(name) {
            Some(production) => production,
            None => return Err(Error::undefined_rule(self.state.position(), name)),
        };

        trace!(rule = name, offset = self.state.position().offset, "enter production");

        self.depth += 1;
        let raw = self.expr(production.pattern());
        self.depth -= 1;

        Ok(production.apply(raw?))
    }

    fn expr(&mut self, expr: &Expr) -> ParseResult {
        match expr {
            Expr::Seq(parts) => {
                let mut output = Vec::with_capacity(parts.len());
                for part in parts {
                    output.push(self.expr(part)?);
                }
                Ok(Value::List(output))
            }
            Expr::Alt { left, right } => self.alt(left, right),
            Expr::Many0(part) => self.many0(part),
            Expr::Literal(text) => self.literal(text),
            Expr::Regex(pattern) => self.regex(pattern),
            Expr::Rule(name) => self.production(name),
        }
    }

    fn alt(&mut self, left: &Expr, right: &Expr) -> ParseResult {
        self.state.save();
        match self.expr(left) {
            Ok(value) => {
                self.state.commit();
                Ok(value)
            }
            Err(error) if error.is_fatal() => {
                // No rollback, but the save entry must still come off.
                self.state.commit();
                Err(error)
            }
            Err(_) => {
                self.state.backtrack();
                trace!(offset = self.state.position().offset, "backtracked to next alternative");
                self.expr(right)
            }
        }
    }

    fn many0(&mut self, part: &Expr) -> ParseResult {
        let mut output = Vec::new();
        loop {
            self.state.save();
            match self.expr(part) {
                Ok(value) => {
                    self.state.commit();
                    output.push(value);
                }
                Err(error) if error.is_fatal() => {
                    self.state.commit();
                    return Err(error);
                }
                Err(_) => {
                    self.state.backtrack();
                    break;
                }
            }
        }
        Ok(Value::List(output))
    }

    fn literal(&mut self, text: &str) -> ParseResult {
        let start = self.state.position();
        for expected in text.chars() {
            match self.state.peek() {
                Some(c) if c == expected => {
                    self.state.bump();
                }
                // Partial consumption stays applied; the enclosing save
                // point is responsible for rollback.
                _ => {
                    let found = self.state.lookahead(start.offset, text.chars().count());
                    return Err(Error::expected(self.state.position(), text, found));
                }
            }
        }
        Ok(Value::Str(text.to_owned()))
    }

    fn regex(&mut self, pattern: &Pattern) -> ParseResult {
        let regex = match pattern.compiled() {
            Ok(regex) => regex,
            Err(error) => {
                return Err(Error::invalid_pattern(self.state.position(), pattern.source(), &error))
            }
        };

        let matched = match regex.find(self.state.rest()) {
            Some(m) => m.as_str(),
            None => return Err(Error::unexpected_token(self.state.position())),
        };

        for _ in matched.chars() {
            self.state.bump();
        }

        Ok(Value::Str(matched.to_owned()))
    }
}
