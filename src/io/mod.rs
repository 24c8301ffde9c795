//! Input and output of formulas.
//!
//! At present only the [DIMACS](dimacs) form of a formula is supported, for output.

pub mod dimacs;
