//! Truth-table evaluation.
//!
//! Row `i` (0-based, `2^k` rows for `k` variables) corresponds to the binary
//! expansion of `i` over the variables in first-appearance order, with the
//! first variable as the most significant bit. Equivalently, the column of
//! the variable at position `level` (1-indexed) is a square wave of
//! false/true blocks of size `2^k / 2^level`.

use std::collections::HashMap;

use log::debug;

use crate::formula::Formula;
use crate::node::{Node, NodeId};

/// The complete truth table of a built formula.
///
/// Holds one boolean column per node reachable from the root, keyed by node
/// identity; shared leaves have a single column. The root's column is the
/// formula's overall truth column.
#[derive(Debug, Clone)]
pub struct TruthTable {
    columns: HashMap<NodeId, Vec<bool>>,
    root: NodeId,
    num_vars: usize,
}

impl TruthTable {
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_rows(&self) -> usize {
        1 << self.num_vars
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The column of a node, if the node is reachable from the root.
    pub fn column(&self, id: NodeId) -> Option<&[bool]> {
        self.columns.get(&id).map(|c| c.as_slice())
    }

    /// The root's column: the formula's truth value per assignment row.
    pub fn answers(&self) -> &[bool] {
        self.columns[&self.root].as_slice()
    }

    /// Big-endian bits of a row index over the table's variables; the
    /// inverse of the assignment enumeration.
    pub fn row_bits(&self, row: usize) -> Vec<bool> {
        row_bits(row, self.num_vars)
    }
}

/// The assignment column for the variable at `level` (1-indexed in
/// first-appearance order) in a table of `rows = 2^k` rows.
fn assignment_column(rows: usize, level: usize) -> Vec<bool> {
    let period = rows >> level;
    let mut column = Vec::with_capacity(rows);
    let mut value = false;
    for i in 0..rows {
        column.push(value);
        if (i + 1) % period == 0 {
            value = !value;
        }
    }
    column
}

pub(crate) fn row_bits(row: usize, k: usize) -> Vec<bool> {
    (0..k).map(|j| (row >> (k - 1 - j)) & 1 == 1).collect()
}

impl Formula {
    /// The truth table of the built formula.
    ///
    /// Computed once and cached in the manager; [`Formula::build`]
    /// invalidates the cache.
    ///
    /// # Panics
    ///
    /// Panics if the formula has not been built.
    pub fn truth_table(&self) -> TruthTable {
        if let Some(table) = self.table.borrow().as_ref() {
            return table.clone();
        }
        let table = self.compute_table();
        self.table.replace(Some(table.clone()));
        table
    }

    fn compute_table(&self) -> TruthTable {
        let root = self.root_id();
        let args = self.arguments();
        let rows = 1usize << args.len();
        debug!("truth_table: {} variable(s), {} rows", args.len(), rows);

        let mut columns = HashMap::new();
        for (i, &arg) in args.iter().enumerate() {
            columns.insert(arg, assignment_column(rows, i + 1));
        }
        self.eval_column(root, &mut columns);

        TruthTable {
            columns,
            root,
            num_vars: args.len(),
        }
    }

    /// Evaluate the column of an operator node bottom-up, memoized by node
    /// identity. Variable columns are seeded by the caller.
    fn eval_column(&self, id: NodeId, columns: &mut HashMap<NodeId, Vec<bool>>) {
        if columns.contains_key(&id) {
            return;
        }
        let column = match self.node(id) {
            Node::Var(c) => unreachable!("column for variable `{}` is seeded", c),
            Node::Not(right) => {
                self.eval_column(right, columns);
                columns[&right].iter().map(|&b| !b).collect()
            }
            Node::Binary(op, left, right) => {
                self.eval_column(left, columns);
                self.eval_column(right, columns);
                let left = &columns[&left];
                let right = &columns[&right];
                left.iter()
                    .zip(right.iter())
                    .map(|(&a, &b)| op.apply(a, b))
                    .collect()
            }
        };
        columns.insert(id, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_assignment_columns() {
        assert_eq!(assignment_column(2, 1), vec![false, true]);
        assert_eq!(assignment_column(4, 1), vec![false, false, true, true]);
        assert_eq!(assignment_column(4, 2), vec![false, true, false, true]);
        assert_eq!(
            assignment_column(8, 1),
            vec![false, false, false, false, true, true, true, true]
        );
        assert_eq!(
            assignment_column(8, 3),
            vec![false, true, false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_row_bits() {
        assert_eq!(row_bits(0, 2), vec![false, false]);
        assert_eq!(row_bits(1, 2), vec![false, true]);
        assert_eq!(row_bits(2, 2), vec![true, false]);
        assert_eq!(row_bits(3, 2), vec![true, true]);
        assert_eq!(row_bits(5, 3), vec![true, false, true]);
    }

    #[test]
    fn test_table_and() {
        let mut formula = Formula::new();
        let root = formula.build("(a&b)").unwrap();
        let table = formula.truth_table();
        let args = formula.arguments();

        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.column(args[0]).unwrap(), &[false, false, true, true]);
        assert_eq!(table.column(args[1]).unwrap(), &[false, true, false, true]);
        assert_eq!(table.column(root).unwrap(), &[false, false, false, true]);
        assert_eq!(table.answers(), &[false, false, false, true]);
    }

    #[test]
    fn test_row_count_is_power_of_two() {
        let mut formula = Formula::new();
        formula.build("((a|b)>(c~a))").unwrap();
        let table = formula.truth_table();
        assert_eq!(table.num_vars(), 3);
        assert_eq!(table.num_rows(), 8);
        assert_eq!(table.answers().len(), 8);
        for &arg in &formula.arguments() {
            assert_eq!(table.column(arg).unwrap().len(), 8);
        }
    }

    #[test]
    fn test_shared_variable_tautology() {
        let mut formula = Formula::new();
        let root = formula.build("(A|(!A))").unwrap();
        let table = formula.truth_table();
        // Both occurrences of A share one column.
        assert_eq!(table.num_vars(), 1);
        assert_eq!(table.column(root).unwrap(), &[true, true]);
    }

    #[test]
    fn test_implication_column() {
        let mut formula = Formula::new();
        let root = formula.build("(A>B)").unwrap();
        let table = formula.truth_table();
        assert_eq!(table.column(root).unwrap(), &[true, true, false, true]);
    }

    #[test]
    fn test_cache_invalidated_by_build() {
        let mut formula = Formula::new();
        formula.build("(a&b)").unwrap();
        assert_eq!(formula.truth_table().answers(), &[false, false, false, true]);
        formula.build("(a|b)").unwrap();
        assert_eq!(formula.truth_table().answers(), &[false, true, true, true]);
    }

    #[test]
    #[should_panic(expected = "formula is not built")]
    fn test_unbuilt_panics() {
        let formula = Formula::new();
        formula.truth_table();
    }
}
