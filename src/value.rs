use serde::Serialize;

/// A parse result. The engine itself only produces `Str` (matched terminal
/// text) and `List` (sequence and repetition output); `Int` and `Node` exist
/// for production actions that reshape raw output into something more
/// structured.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Str(String),
    Int(i64),
    List(Vec<Value>),
    Node {
        #[serde(rename = "type")]
        kind: String,
        value: Box<Value>,
    },
}

impl Value {
    /// A tagged node, the usual output shape of an action.
    pub fn node(kind: impl Into<String>, value: Value) -> Self {
        Self::Node { kind: kind.into(), value: Box::new(value) }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::List(v)
    }
}
