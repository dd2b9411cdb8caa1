//! Constructors for the grammar expression tree.

use crate::grammar::{Expr, Pattern};

/// Matches `parts` in order; the output is the list of each part's result.
/// A failing part fails the whole sequence immediately — input consumed by
/// earlier parts is not rolled back by the sequence itself, only by an
/// enclosing [`alt`] or [`many0`] save point.
pub fn seq(parts: impl IntoIterator<Item = Expr>) -> Expr {
    Expr::Seq(parts.into_iter().collect())
}

/// Ordered choice: tries `alternatives` in declared order and commits to the
/// first that succeeds. Three or more alternatives are encoded as a
/// right-leaning chain of two-way choices.
///
/// Panics if `alternatives` is empty.
pub fn alt(alternatives: impl IntoIterator<Item = Expr>) -> Expr {
    let mut nodes: Vec<Expr> = alternatives.into_iter().collect();
    let Some(mut expr) = nodes.pop() else {
        panic!("alt requires at least one alternative");
    };
    while let Some(node) = nodes.pop() {
        expr = Expr::Alt { left: Box::new(node), right: Box::new(expr) };
    }
    expr
}

/// Zero-or-more repetition of `part`; the output is the (possibly empty)
/// list of successful matches. Greedy: stops at the first recoverable
/// failure, rolling back that attempt's partial consumption. A `part` that
/// succeeds without consuming input repeats forever.
pub fn many0(part: Expr) -> Expr {
    Expr::Many0(Box::new(part))
}

/// Matches `text` exactly at the cursor. A mismatch is recoverable.
pub fn literal(text: impl Into<String>) -> Expr {
    Expr::Literal(text.into())
}

/// A regex terminal, anchored to match only at the start of the remaining
/// input. A mismatch is fatal: it aborts the whole parse even inside an
/// [`alt`] or [`many0`], unlike a literal mismatch.
pub fn regex(pattern: impl Into<String>) -> Expr {
    Expr::Regex(Pattern::new(pattern.into()))
}

/// Recurse into the named production. The production's action is applied to
/// its raw output before the referencing node sees the value. Resolution is
/// lazy: naming an absent production is a fatal error at evaluation time.
pub fn rule(name: impl Into<String>) -> Expr {
    Expr::Rule(name.into())
}

/// An end-of-input terminal, for grammars that must consume all input.
/// Fails fatally when any input remains.
pub fn eoi() -> Expr {
    Expr::Regex(Pattern::new("$".to_owned()))
}
