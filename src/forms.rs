//! Canonical forms derived from the truth table.
//!
//! Everything here post-processes one cached [`Formula::truth_table`] call
//! together with the [`Formula::arguments`] order; nothing re-traverses the
//! expression itself.

use num_bigint::BigUint;

use crate::formula::Formula;
use crate::table::row_bits;

impl Formula {
    fn answers(&self) -> Vec<bool> {
        self.truth_table().answers().to_vec()
    }

    /// Row indices where the formula is false (the maxterm set).
    ///
    /// Returns `None` for a tautology.
    pub fn full_conjunctive_numeric_form(&self) -> Option<Vec<usize>> {
        let answers = self.answers();
        if answers.iter().all(|&b| b) {
            return None;
        }
        Some((0..answers.len()).filter(|&i| !answers[i]).collect())
    }

    /// Row indices where the formula is true (the minterm set).
    ///
    /// Returns `None` for an unsatisfiable formula.
    pub fn full_disjunctive_numeric_form(&self) -> Option<Vec<usize>> {
        let answers = self.answers();
        if !answers.iter().any(|&b| b) {
            return None;
        }
        Some((0..answers.len()).filter(|&i| answers[i]).collect())
    }

    /// The function index of the truth column: the column reversed, read as
    /// a bit vector weighted by `2^i`.
    ///
    /// The index fits in `[0, 2^(2^k) - 1]`, hence [`BigUint`].
    pub fn index_form(&self) -> BigUint {
        let mut result = BigUint::ZERO;
        for (i, &b) in self.answers().iter().rev().enumerate() {
            if b {
                result |= BigUint::from(1u8) << i;
            }
        }
        result
    }

    /// The full conjunctive normal form: one OR-clause per false row, joined
    /// with `&`.
    ///
    /// In each clause a `true` bit of the row index negates its variable.
    /// Returns `None` when [`Formula::full_conjunctive_numeric_form`] does.
    pub fn full_conjunctive_normal_form(&self) -> Option<String> {
        let numeric = self.full_conjunctive_numeric_form()?;
        Some(self.join_clauses(&numeric, '|', '&', true))
    }

    /// The full disjunctive normal form: one AND-clause per true row, joined
    /// with `|`.
    ///
    /// In each clause a `false` bit of the row index negates its variable.
    /// Returns `None` when [`Formula::full_disjunctive_numeric_form`] does.
    pub fn full_disjunctive_normal_form(&self) -> Option<String> {
        let numeric = self.full_disjunctive_numeric_form()?;
        Some(self.join_clauses(&numeric, '&', '|', false))
    }

    /// One clause per row index; a literal is negated when its bit equals
    /// `negated_bit`.
    fn join_clauses(&self, rows: &[usize], inner: char, outer: char, negated_bit: bool) -> String {
        let symbols: Vec<char> = self
            .arguments()
            .iter()
            .map(|&id| {
                self.node(id)
                    .symbol()
                    .unwrap_or_else(|| unreachable!("arguments are variable nodes"))
            })
            .collect();

        let clauses: Vec<String> = rows
            .iter()
            .map(|&row| {
                let literals: Vec<String> = symbols
                    .iter()
                    .zip(row_bits(row, symbols.len()))
                    .map(|(&c, bit)| {
                        if bit == negated_bit {
                            format!("!{}", c)
                        } else {
                            c.to_string()
                        }
                    })
                    .collect();
                format!("({})", literals.join(&inner.to_string()))
            })
            .collect();

        clauses.join(&outer.to_string())
    }
}
