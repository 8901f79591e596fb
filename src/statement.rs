//! Line-level model of the Ground statement format.
//!
//! The stream is UTF-8 text, one construct per line:
//!
//! ```text
//! line      ::= assignment | bareGround | comment | blank
//! assignment::= SYMBOL "=" "Ground(" EXPR ")"
//! bareGround::= "Ground(" EXPR ")"
//! EXPR      ::= STRING | SYMBOL | EXPR ":" EXPR | "DataNode(" SYMBOL ";" STRING ")"
//! comment   ::= "#" freeText
//! ```
//!
//! Rendering goes one way only; nothing in this crate parses statements
//! back.

use std::fmt;

/// A ground expression, the payload of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroundExpr {
    /// Quoted string literal
    Literal(String),
    /// Bare `$`-prefixed symbol reference
    Symbol(String),
    /// `context : value` scoping form
    Scoped(Box<GroundExpr>, Box<GroundExpr>),
    /// `DataNode($sym; "text")` provenance form
    DataNode(String, String),
}

impl GroundExpr {
    pub fn literal(text: impl Into<String>) -> Self {
        GroundExpr::Literal(text.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        GroundExpr::Symbol(name.into())
    }

    pub fn scoped(context: GroundExpr, value: GroundExpr) -> Self {
        GroundExpr::Scoped(Box::new(context), Box::new(value))
    }

    pub fn data_node(context: impl Into<String>, text: impl Into<String>) -> Self {
        GroundExpr::DataNode(context.into(), text.into())
    }
}

impl fmt::Display for GroundExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroundExpr::Literal(text) => write!(f, "\"{}\"", text),
            GroundExpr::Symbol(name) => write!(f, "{}", name),
            GroundExpr::Scoped(context, value) => write!(f, "{} : {}", context, value),
            GroundExpr::DataNode(context, text) => write!(f, "DataNode({}; \"{}\")", context, text),
        }
    }
}

/// One line of the output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `symbol = Ground(expr)`
    Assignment { symbol: String, expr: GroundExpr },
    /// `Ground(expr)` with no binding
    Bare(GroundExpr),
    /// `# text`
    Comment(String),
    Blank,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Assignment { symbol, expr } => write!(f, "{} = Ground({})", symbol, expr),
            Line::Bare(expr) => write!(f, "Ground({})", expr),
            Line::Comment(text) => write!(f, "# {}", text),
            Line::Blank => Ok(()),
        }
    }
}
