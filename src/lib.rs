//! A library for compiling multiplier circuits to formulas in conjunctive normal form.
//!
//! dadda_cnf compiles a 9×9 unsigned [Dadda multiplier](https://en.wikipedia.org/wiki/Dadda_multiplier) to clauses, via a Tseitin encoding of each gate, and writes the clauses in DIMACS form for use by any SAT solver.
//!
//! Two multipliers over the same operands may be linked, either by requiring their products to be equal (a consistency check, satisfiable when the multipliers agree) or by requiring their products to differ (a miter, unsatisfiable when the multipliers are equivalent).
//!
//! # Orientation
//!
//! Everything happens within a [context].
//!
//! A context owns a configuration and two databases:
//! - Atoms are issued from an [atom database](crate::db::atom), in strictly increasing order from 1.
//! - Clauses are appended to a [clause database](crate::db::clause), in order of emission.
//!
//! Everything else is a method on a context which issues atoms and/or appends clauses:
//! - [Gates](crate::encoding::gates), as clause templates.
//! - [Multipliers](crate::encoding::multiplier), built from gates in four stages.
//! - [Links](crate::encoding::equivalence) between the products of multipliers.
//! - [Export](crate::io::dimacs) of the formula.
//!
//! Places to start reading:
//! - The [multiplier module](crate::encoding::multiplier) for the stages of compilation.
//! - The [structures] to familiarise yourself with the representation of atoms, literals, and clauses.
//! - The [configuration](crate::config) to see what options are supported.
//!
//! # Examples
//!
//! + Compile two multipliers over shared operands, link their products, and write the formula.
//!
//! ```rust
//! # use dadda_lib::context::Context;
//! let mut the_context = Context::default();
//!
//! let lhs = the_context.fresh_operand().unwrap();
//! let rhs = the_context.fresh_operand().unwrap();
//!
//! let r1 = the_context.compile_multiplier(&lhs, &rhs).unwrap();
//! let r2 = the_context.compile_multiplier(&lhs, &rhs).unwrap();
//! the_context.link_equivalence(&r1, &r2).unwrap();
//!
//! assert_eq!(the_context.atom_count(), 468);
//! assert_eq!(the_context.clause_count(), 2 * 1188 + 2 * 18);
//!
//! let mut dimacs = vec![];
//! the_context.write_dimacs(&mut dimacs).unwrap();
//! let dimacs = String::from_utf8(dimacs).unwrap();
//! assert_eq!(dimacs.lines().next(), Some("p cnf 468 2412"));
//! ```
//!
//! + Fix the operands, for a formula whose only model is the product of 37 and 91.
//!
//! ```rust
//! # use dadda_lib::context::Context;
//! let mut the_context = Context::default();
//!
//! let lhs = the_context.fresh_operand().unwrap();
//! let rhs = the_context.fresh_operand().unwrap();
//! the_context.fix_operand(&lhs, 37).unwrap();
//! the_context.fix_operand(&rhs, 91).unwrap();
//!
//! let product = the_context.compile_multiplier(&lhs, &rhs).unwrap();
//! assert_eq!(product.len(), 18);
//! assert_eq!(the_context.counters.unit_clauses, 18);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - The heights of columns after each round of reduction can be found with `RUST_LOG=reduction=debug …` or,
//! - Every gate built can be found with `RUST_LOG=gates=trace …`

pub mod config;
pub mod context;
pub mod db;
pub mod encoding;
pub mod io;
pub mod misc;
pub mod structures;
pub mod types;
