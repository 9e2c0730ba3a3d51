//! # formula-rs: truth tables and canonical forms for propositional formulas
//!
//! **`formula-rs`** parses a fully parenthesized propositional formula, builds a
//! binary expression DAG, and derives its canonical representations: the full truth
//! table, the full conjunctive and disjunctive normal forms (symbolic and numeric),
//! and the single-integer index form of the truth column.
//!
//! ## The grammar
//!
//! Formulas are written over single-character variables and the fixed operator set
//! `& | > ~ !` (AND, OR, IMPLIES, EQUIVALENCE, NOT), with every subexpression
//! explicitly parenthesized --- there is no precedence. For example: `(A>B)`,
//! `(!(A&B))`, `((a|b)~c)`.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All operations go through the
//!   [`Formula`][crate::formula::Formula] manager, which owns an arena of nodes
//!   addressed by lightweight [`NodeId`][crate::node::NodeId] handles.
//! - **Shared Leaves**: Every occurrence of a variable resolves to one node, so the
//!   truth table (keyed by node identity) evaluates each variable exactly once and
//!   tautologies like `(A|(!A))` come out right by construction.
//! - **One Evaluation, Many Forms**: The truth table is computed once and cached;
//!   the numeric forms, the normal forms, and the index form only post-process it.
//!
//! ## Basic Usage
//!
//! ```rust
//! use formula_rs::formula::Formula;
//!
//! // 1. Build a formula
//! let mut formula = Formula::new();
//! formula.build("(A>B)").unwrap();
//! assert_eq!(formula.to_string(), "(A>B)");
//!
//! // 2. The truth table: 2^k rows, first variable is the most significant bit
//! let table = formula.truth_table();
//! assert_eq!(table.num_rows(), 4);
//! assert_eq!(table.answers(), &[true, true, false, true]);
//!
//! // 3. Canonical forms
//! assert_eq!(formula.full_conjunctive_numeric_form(), Some(vec![2]));
//! assert_eq!(formula.full_disjunctive_numeric_form(), Some(vec![0, 1, 3]));
//! assert_eq!(formula.full_conjunctive_normal_form().unwrap(), "(!A|B)");
//! assert_eq!(formula.full_disjunctive_normal_form().unwrap(), "(!A&!B)|(!A&B)|(A&B)");
//! assert_eq!(formula.index_form(), 13u32.into());
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: The [`Formula`][crate::formula::Formula] manager: building,
//!   structural queries, infix/prefix/postfix rendering.
//! - **[`table`]**: Truth-table evaluation, memoized by node identity.
//! - **[`forms`]**: The derived canonical forms.
//! - **[`op`]**: The operator table.

pub mod forms;
pub mod formula;
pub mod node;
pub mod op;
pub mod parse;
pub mod table;
