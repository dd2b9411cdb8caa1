use crate::value::Value;
use regex::Regex;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// A production's transform, applied to the raw matched output each time the
/// production is referenced.
pub type Action = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// A node of the grammar expression tree. Built with the constructors in
/// [`crate::combinator`]; none of the variants is self-referential at the
/// data level — recursion only enters through `Rule` lookups at parse time.
#[derive(Debug)]
pub enum Expr {
    Seq(Vec<Expr>),
    Alt { left: Box<Expr>, right: Box<Expr> },
    Many0(Box<Expr>),
    Literal(String),
    Regex(Pattern),
    Rule(String),
}

/// A regex terminal's pattern. Compiled on first use, anchored to match only
/// at the start of the remaining input.
#[derive(Debug)]
pub struct Pattern {
    source: String,
    compiled: OnceLock<Regex>,
}

impl Pattern {
    pub(crate) fn new(source: String) -> Self {
        Self { source, compiled: OnceLock::new() }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn compiled(&self) -> Result<&Regex, regex::Error> {
        if let Some(regex) = self.compiled.get() {
            return Ok(regex);
        }

        let regex = Regex::new(&format!("^(?:{})", self.source))?;
        Ok(self.compiled.get_or_init(|| regex))
    }
}

pub struct Production {
    name: String,
    pattern: Expr,
    action: Option<Action>,
}

impl Production {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &Expr {
        &self.pattern
    }

    pub(crate) fn apply(&self, raw: Value) -> Value {
        match &self.action {
            Some(action) => action(raw),
            None => raw,
        }
    }
}

/// An immutable set of named productions in declaration order. The first
/// declared production is the start rule; lookup by name is otherwise
/// order-independent. Rule references are resolved lazily at parse time, so
/// a grammar is never pre-validated — an undefined reference only surfaces
/// when it is actually evaluated.
///
/// Redefining a name replaces the earlier pattern in place, keeping its
/// declaration position.
#[derive(Default)]
pub struct Grammar {
    productions: Vec<Production>,
    index: FxHashMap<String, usize>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a production with the default (identity) action.
    pub fn rule(self, name: impl Into<String>, pattern: Expr) -> Self {
        self.insert(name.into(), pattern, None)
    }

    /// Add a production with an action applied to its raw output.
    pub fn rule_with(
        self,
        name: impl Into<String>,
        pattern: Expr,
        action: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.insert(name.into(), pattern, Some(Box::new(action)))
    }

    fn insert(mut self, name: String, pattern: Expr, action: Option<Action>) -> Self {
        match self.index.get(&name) {
            Some(&at) => self.productions[at] = Production { name, pattern, action },
            None => {
                self.index.insert(name.clone(), self.productions.len());
                self.productions.push(Production { name, pattern, action });
            }
        }
        self
    }

    /// Name of the start rule: the first declared production.
    pub fn start(&self) -> Option<&str> {
        self.productions.first().map(|p| p.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&Production> {
        self.index.get(name).map(|&at| &self.productions[at])
    }

    pub fn len(&self) -> usize {
        self.productions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}
