//! The operator table: the fixed set of binary connectives and their
//! pointwise boolean semantics.
//!
//! Negation is not listed here: it is unary and gets its own node variant.
//! Its symbol is `!` and its semantics is plain complement.

use std::fmt;

/// A binary connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    /// `&`: conjunction.
    And,
    /// `|`: disjunction.
    Or,
    /// `>`: implication, `¬a ∨ b`.
    Imply,
    /// `~`: equivalence, `a = b`.
    Equiv,
}

/// The symbol of unary negation.
pub const NOT_SYMBOL: char = '!';

impl Op {
    /// Map an input symbol to a connective, if it is one.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '&' => Some(Op::And),
            '|' => Some(Op::Or),
            '>' => Some(Op::Imply),
            '~' => Some(Op::Equiv),
            _ => None,
        }
    }

    /// The input/output symbol of the connective.
    pub fn symbol(self) -> char {
        match self {
            Op::And => '&',
            Op::Or => '|',
            Op::Imply => '>',
            Op::Equiv => '~',
        }
    }

    /// Apply the connective to a pair of truth values.
    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a && b,
            Op::Or => a || b,
            Op::Imply => !a || b,
            Op::Equiv => a == b,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
