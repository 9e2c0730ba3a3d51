//! The [`Formula`] manager.
//!
//! A `Formula` owns the arena of nodes for one built expression plus an
//! optional root. All structural queries go through the manager; nodes are
//! addressed by [`NodeId`] handles, and repeated variables resolve to one
//! shared leaf, so identity-keyed lookups (notably the truth table) see
//! identical occurrences as the same node.

use std::cell::RefCell;
use std::fmt;

use log::debug;

use crate::node::{Node, NodeId};
use crate::op::NOT_SYMBOL;
use crate::parse::{self, ParseError};
use crate::table::TruthTable;

/// Default ceiling on distinct variables per formula.
///
/// The truth table has `2^k` rows, so the ceiling bounds evaluation cost.
pub const DEFAULT_VAR_LIMIT: usize = 16;

pub struct Formula {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    var_limit: usize,
    pub(crate) table: RefCell<Option<TruthTable>>,
}

impl Formula {
    pub fn new() -> Self {
        Self::with_var_limit(DEFAULT_VAR_LIMIT)
    }

    /// Create a manager that rejects formulas with more than `var_limit`
    /// distinct variables at build time.
    pub fn with_var_limit(var_limit: usize) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            var_limit,
            table: RefCell::new(None),
        }
    }

    /// Parse `expression` and make it the formula of this manager.
    ///
    /// Replaces any previously built formula and invalidates the cached
    /// truth table. On failure the manager is left unbuilt; no partial tree
    /// survives.
    pub fn build(&mut self, expression: &str) -> Result<NodeId, ParseError> {
        debug!("build({:?})", expression);

        self.root = None;
        self.nodes.clear();
        self.table.replace(None);

        let (nodes, root) = parse::parse(expression)?;
        let count = nodes.iter().filter(|n| n.is_var()).count();
        if count > self.var_limit {
            return Err(ParseError::TooManyVariables {
                count,
                limit: self.var_limit,
            });
        }

        self.nodes = nodes;
        self.root = Some(root);
        Ok(root)
    }

    /// The root of the built formula, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn root_id(&self) -> NodeId {
        self.root.expect("formula is not built")
    }

    /// Number of nodes in the arena.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this formula's arena.
    pub fn node(&self, id: NodeId) -> Node {
        self.nodes[id.index()]
    }

    /// The distinct variable nodes in first-appearance (pre-order) order.
    ///
    /// This order defines the bit positions used by the truth table, the
    /// numeric forms and the index form.
    pub fn arguments(&self) -> Vec<NodeId> {
        let mut result = Vec::new();
        self.collect_arguments(self.root_id(), &mut result);
        result
    }

    fn collect_arguments(&self, id: NodeId, result: &mut Vec<NodeId>) {
        match self.node(id) {
            Node::Var(_) => {
                if !result.contains(&id) {
                    result.push(id);
                }
            }
            Node::Not(right) => self.collect_arguments(right, result),
            Node::Binary(_, left, right) => {
                self.collect_arguments(left, result);
                self.collect_arguments(right, result);
            }
        }
    }

    /// Render the subtree at `id` in fully parenthesized infix notation.
    pub fn to_infix(&self, id: NodeId) -> String {
        match self.node(id) {
            Node::Var(c) => c.to_string(),
            Node::Not(right) => format!("({}{})", NOT_SYMBOL, self.to_infix(right)),
            Node::Binary(op, left, right) => {
                format!("({}{}{})", self.to_infix(left), op, self.to_infix(right))
            }
        }
    }

    /// Render the subtree at `id` in prefix (Polish) notation.
    pub fn to_prefix(&self, id: NodeId) -> String {
        match self.node(id) {
            Node::Var(c) => c.to_string(),
            Node::Not(right) => format!("{}{}", NOT_SYMBOL, self.to_prefix(right)),
            Node::Binary(op, left, right) => {
                format!("{}{}{}", op, self.to_prefix(left), self.to_prefix(right))
            }
        }
    }

    /// Render the subtree at `id` in postfix (reverse Polish) notation.
    pub fn to_postfix(&self, id: NodeId) -> String {
        match self.node(id) {
            Node::Var(c) => c.to_string(),
            Node::Not(right) => format!("{}{}", self.to_postfix(right), NOT_SYMBOL),
            Node::Binary(op, left, right) => {
                format!("{}{}{}", self.to_postfix(left), self.to_postfix(right), op)
            }
        }
    }
}

impl Default for Formula {
    fn default() -> Self {
        Formula::new()
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formula")
            .field("size", &self.nodes.len())
            .field("built", &self.root.is_some())
            .field("var_limit", &self.var_limit)
            .finish()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write!(f, "{}", self.to_infix(root)),
            None => write!(f, "<empty>"),
        }
    }
}
