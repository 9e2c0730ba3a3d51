use std::fmt::{Display, Formatter};

use crate::op::Op;

/// A handle to a node in a formula's arena.
///
/// Handles are plain indices, so two occurrences of the same variable in a
/// formula compare equal exactly when they resolve to the shared leaf node.
/// This is what the truth table is keyed by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the index of the handle.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A node of a built formula.
///
/// Unary NOT has a right operand only; every binary connective has both.
/// Children are arena handles, so a repeated variable is a shared leaf and
/// the structure is a DAG rather than a tree.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Node {
    /// A single-character variable.
    Var(char),
    /// Negation of the operand.
    Not(NodeId),
    /// A binary connective applied to two operands.
    Binary(Op, NodeId, NodeId),
}

impl Node {
    pub fn is_var(&self) -> bool {
        matches!(self, Node::Var(_))
    }

    /// The variable symbol, for variable nodes.
    pub fn symbol(&self) -> Option<char> {
        match self {
            Node::Var(c) => Some(*c),
            _ => None,
        }
    }
}
