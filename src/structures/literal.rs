//! Literals, each an atom with a polarity.
//!
//! A literal is written as a non-zero integer: the atom is the absolute value, and the literal is positive exactly when the integer is.
//! This matches DIMACS, and so a literal needs no translation when a formula is written.
//!
//! ```rust
//! # use dadda_lib::structures::literal::{CLiteral, Literal};
//! let carry = CLiteral::new(212, false);
//!
//! assert_eq!(carry, -212);
//! assert_eq!(carry.atom(), 212);
//! assert!(!carry.polarity());
//! assert_eq!(carry.negate(), 212);
//! ```

use crate::structures::atom::Atom;

/// Methods common to any representation of a literal.
pub trait Literal {
    /// The literal over `atom` with the given polarity.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The literal over the same atom with the opposite polarity.
    fn negate(&self) -> Self;

    fn atom(&self) -> Atom;

    /// True for a positive literal, false for a negative literal.
    fn polarity(&self) -> bool;
}

/// The canonical representation of a literal, as a signed integer.
pub type CLiteral = i32;

impl Literal for CLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        let literal = atom as CLiteral;
        if polarity {
            literal
        } else {
            -literal
        }
    }

    fn negate(&self) -> Self {
        -*self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        *self > 0
    }
}
