//! The expression builder.
//!
//! Input is a fully parenthesized formula over single-character variables
//! and the operator symbols `& | > ~ !`. The builder performs a single
//! left-to-right scan with no lookahead, keeping an explicit stack of
//! pending parent slots; every input character is one state transition.
//!
//! The scan works on transient *slots* (value and children filled in as the
//! scan proceeds). Once the scan balances, [`Builder::finish`] compacts the
//! reachable slot graph into the final arena of well-formed [`Node`]s,
//! memoizing the slot-to-id mapping so that a variable occurring several
//! times stays one shared leaf.

use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::node::{Node, NodeId};
use crate::op::{Op, NOT_SYMBOL};

#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// Stack underflow during the scan, or nonzero depth at end of input.
    #[error("invalid brackets")]
    UnbalancedBrackets,
    /// A character outside the grammar.
    #[error("unknown character `{0}`")]
    UnknownCharacter(char),
    /// The scan balanced, but some reachable slot never got a value or an
    /// operand (e.g. `"()"` or `"(a&)"`).
    #[error("incomplete expression")]
    IncompleteExpression,
    /// The formula has more distinct variables than the manager allows.
    #[error("formula has {count} variables, the limit is {limit}")]
    TooManyVariables { count: usize, limit: usize },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Token {
    Var(char),
    Not,
    Op(Op),
}

/// A node under construction.
#[derive(Debug, Default, Clone)]
struct Slot {
    value: Option<Token>,
    left: Option<usize>,
    right: Option<usize>,
}

pub(crate) struct Builder {
    slots: Vec<Slot>,
    stack: Vec<usize>,
    current: usize,
    seen: HashMap<char, usize>,
    depth: i32,
}

impl Builder {
    pub(crate) fn new() -> Self {
        // Slot 0 is the root; it starts out on the stack, awaiting a value.
        Self {
            slots: vec![Slot::default()],
            stack: vec![0],
            current: 0,
            seen: HashMap::new(),
            depth: 0,
        }
    }

    fn alloc(&mut self) -> usize {
        self.slots.push(Slot::default());
        self.slots.len() - 1
    }

    fn pop(&mut self) -> Result<usize, ParseError> {
        self.stack.pop().ok_or(ParseError::UnbalancedBrackets)
    }

    /// Consume one input character.
    pub(crate) fn step(&mut self, c: char) -> Result<(), ParseError> {
        if c == '(' {
            self.depth += 1;
            let child = self.alloc();
            self.slots[self.current].left = Some(child);
            self.stack.push(self.current);
            self.current = child;
        } else if c == NOT_SYMBOL {
            // Negation takes over the pending parent slot: the left child
            // tentatively allocated by `(` is dropped, the operand goes right.
            let parent = self.pop()?;
            let right = self.alloc();
            let slot = &mut self.slots[parent];
            slot.left = None;
            slot.value = Some(Token::Not);
            slot.right = Some(right);
            self.stack.push(parent);
            self.current = right;
        } else if let Some(op) = Op::from_symbol(c) {
            let right = self.alloc();
            let slot = &mut self.slots[self.current];
            slot.value = Some(Token::Op(op));
            slot.right = Some(right);
            self.stack.push(self.current);
            self.current = right;
        } else if c.is_alphabetic() {
            if let Some(&leaf) = self.seen.get(&c) {
                // The symbol already has a leaf: rewire whichever child slot
                // of the parent we just left to the shared one.
                let old = self.current;
                let parent = self.pop()?;
                let slot = &mut self.slots[parent];
                if slot.left == Some(old) {
                    slot.left = Some(leaf);
                } else {
                    slot.right = Some(leaf);
                }
                self.current = parent;
            } else {
                self.slots[self.current].value = Some(Token::Var(c));
                self.seen.insert(c, self.current);
                self.current = self.pop()?;
            }
        } else if c == ')' {
            self.depth -= 1;
            self.current = self.pop()?;
        } else {
            return Err(ParseError::UnknownCharacter(c));
        }
        Ok(())
    }

    /// Finish the scan: brackets must balance, then the slot graph reachable
    /// from the root is compacted into the final arena.
    pub(crate) fn finish(self) -> Result<(Vec<Node>, NodeId), ParseError> {
        if self.depth != 0 {
            return Err(ParseError::UnbalancedBrackets);
        }
        let mut nodes = Vec::new();
        let mut mapping = HashMap::new();
        let root = self.freeze(0, &mut nodes, &mut mapping)?;
        debug!("parsed {} node(s), root = {}", nodes.len(), root);
        Ok((nodes, root))
    }

    fn freeze(
        &self,
        slot: usize,
        nodes: &mut Vec<Node>,
        mapping: &mut HashMap<usize, NodeId>,
    ) -> Result<NodeId, ParseError> {
        if let Some(&id) = mapping.get(&slot) {
            return Ok(id);
        }
        let s = &self.slots[slot];
        let node = match s.value {
            None => return Err(ParseError::IncompleteExpression),
            Some(Token::Var(c)) => Node::Var(c),
            Some(Token::Not) => {
                let right = s.right.ok_or(ParseError::IncompleteExpression)?;
                Node::Not(self.freeze(right, nodes, mapping)?)
            }
            Some(Token::Op(op)) => {
                let left = s.left.ok_or(ParseError::IncompleteExpression)?;
                let right = s.right.ok_or(ParseError::IncompleteExpression)?;
                let left = self.freeze(left, nodes, mapping)?;
                let right = self.freeze(right, nodes, mapping)?;
                Node::Binary(op, left, right)
            }
        };
        let id = NodeId::new(nodes.len() as u32);
        nodes.push(node);
        mapping.insert(slot, id);
        Ok(id)
    }
}

/// Parse a formula into an arena of nodes and its root.
pub(crate) fn parse(expression: &str) -> Result<(Vec<Node>, NodeId), ParseError> {
    debug!("parse({:?})", expression);
    let mut builder = Builder::new();
    for c in expression.chars() {
        builder.step(c)?;
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_step_by_step() {
        let mut builder = Builder::new();
        assert_eq!(builder.stack, vec![0]);
        assert_eq!(builder.current, 0);

        builder.step('(').unwrap();
        assert_eq!(builder.depth, 1);
        assert_eq!(builder.stack, vec![0, 0]);
        assert_eq!(builder.current, 1);
        assert_eq!(builder.slots[0].left, Some(1));

        builder.step('a').unwrap();
        assert_eq!(builder.current, 0);
        assert_eq!(builder.stack, vec![0]);
        assert_eq!(builder.slots[1].value, Some(Token::Var('a')));

        builder.step('&').unwrap();
        assert_eq!(builder.slots[0].value, Some(Token::Op(Op::And)));
        assert_eq!(builder.slots[0].right, Some(2));
        assert_eq!(builder.current, 2);

        builder.step('b').unwrap();
        builder.step(')').unwrap();
        assert_eq!(builder.depth, 0);

        let (nodes, root) = builder.finish().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(
            nodes[root.index()],
            Node::Binary(Op::And, NodeId::new(0), NodeId::new(1))
        );
        assert_eq!(nodes[0], Node::Var('a'));
        assert_eq!(nodes[1], Node::Var('b'));
    }

    #[test]
    fn test_negation_drops_left_child() {
        let (nodes, root) = parse("(!(A&B))").unwrap();
        match nodes[root.index()] {
            Node::Not(right) => match nodes[right.index()] {
                Node::Binary(Op::And, left, right) => {
                    assert_eq!(nodes[left.index()], Node::Var('A'));
                    assert_eq!(nodes[right.index()], Node::Var('B'));
                }
                ref other => panic!("unexpected operand {:?}", other),
            },
            ref other => panic!("unexpected root {:?}", other),
        }
    }

    #[test]
    fn test_repeated_variable_shares_leaf() {
        let (nodes, root) = parse("(A|(!A))").unwrap();
        match nodes[root.index()] {
            Node::Binary(Op::Or, left, right) => {
                assert_eq!(nodes[left.index()], Node::Var('A'));
                assert_eq!(nodes[right.index()], Node::Not(left));
            }
            ref other => panic!("unexpected root {:?}", other),
        }
        // The shared leaf is stored once.
        assert_eq!(nodes.iter().filter(|n| n.is_var()).count(), 1);
    }

    #[test]
    fn test_excess_closing_brackets() {
        assert_eq!(parse("(A)))))"), Err(ParseError::UnbalancedBrackets));
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(parse("((a&b)"), Err(ParseError::UnbalancedBrackets));
    }

    #[test]
    fn test_negation_with_empty_stack() {
        assert_eq!(parse("a!b"), Err(ParseError::UnbalancedBrackets));
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(parse("(a+b)"), Err(ParseError::UnknownCharacter('+')));
        assert_eq!(parse("(a &b)"), Err(ParseError::UnknownCharacter(' ')));
    }

    #[test]
    fn test_incomplete_expressions() {
        assert_eq!(parse(""), Err(ParseError::IncompleteExpression));
        assert_eq!(parse("()"), Err(ParseError::IncompleteExpression));
        assert_eq!(parse("(a&)"), Err(ParseError::IncompleteExpression));
        // Without brackets the left operand of `&` is never attached.
        assert_eq!(parse("a&b"), Err(ParseError::IncompleteExpression));
    }

    #[test]
    fn test_single_variable() {
        let (nodes, root) = parse("a").unwrap();
        assert_eq!(nodes[root.index()], Node::Var('a'));
        assert_eq!(nodes.len(), 1);
    }
}
