//! The representation of atoms, literals, clauses, and valuations.
//!
//! Each is a type alias for its canonical representation (a `u32`, an `i32`, a vector of literals, and a vector of optional booleans), and where useful a trait of methods over that representation.
//!
//! A formula is the conjunction of the clauses in the [clause database](crate::db::clause), and has no structure of its own.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
