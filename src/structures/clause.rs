//! Clauses, read as the disjunction of their literals.
//!
//! A clause is written as a vector of literals, in the order the literals were given.
//! Duplicate literals, and complementary pairs of literals, are kept as given.
//!
//! ```rust
//! # use dadda_lib::structures::clause::Clause;
//! // the carry of a full adder is false if two inputs are false
//! let clause = vec![-214, 19, 29];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "-214 19 29 0");
//! assert_eq!(clause.atoms().collect::<Vec<_>>(), vec![214, 19, 29]);
//!
//! let mut valuation = vec![Some(false); 215];
//! assert_eq!(clause.satisfied_on(&valuation), Some(true));
//!
//! valuation[214] = Some(true);
//! assert_eq!(clause.satisfied_on(&valuation), Some(false));
//!
//! valuation[29] = None;
//! assert_eq!(clause.satisfied_on(&valuation), None);
//! ```
//!
//! The empty clause is false on every valuation, and so is refused by the [clause database](crate::db::clause).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

pub trait Clause {
    /// The literals of the clause separated by single spaces, followed by ` 0` if `zero` is set.
    fn as_dimacs(&self, zero: bool) -> String;

    fn size(&self) -> usize;

    /// The atoms of the clause, in the order of their literals.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The value of the clause on a (partial) valuation:
    /// - `Some(true)` if some literal is true,
    /// - `Some(false)` if every literal is false,
    /// - `None` otherwise.
    ///
    /// Atoms outside of the valuation have no value.
    fn satisfied_on(&self, valuation: &impl Valuation) -> Option<bool>;
}

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

impl Clause for [CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut literals = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>();
        if zero {
            literals.push("0".to_string());
        }
        literals.join(" ")
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> Option<bool> {
        let mut value = Some(false);
        for literal in self {
            match valuation.value_of(literal.atom()).flatten() {
                Some(atom_value) if atom_value == literal.polarity() => return Some(true),
                Some(_) => {}
                None => value = None,
            }
        }
        value
    }
}
