/*!
The clause database, an append-only sequence of clauses.

Clauses are stored in the order they are emitted.
The order has no bearing on the formula, though keeping it makes the DIMACS form of a compilation reproducible byte for byte.

No clause is ever removed or revised, and no simplification takes place --- duplicate literals, tautologies, and repeated clauses are stored as given.
*/

use crate::{
    structures::clause::{CClause, Clause},
    types::err::{self},
};

/// The clause database.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    clauses: Vec<CClause>,
}

impl ClauseDB {
    /// Appends a clause to the database.
    ///
    /// Fails only if the clause is empty.
    pub fn store(&mut self, clause: CClause) -> Result<(), err::ClauseDBError> {
        if clause.is_empty() {
            return Err(err::ClauseDBError::EmptyClause);
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// A count of clauses stored.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// An iterator over the stored clauses, in order of storage.
    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }

    /// The most recently stored clauses, up to `count` of them, in order of storage.
    pub fn tail(&self, count: usize) -> &[CClause] {
        &self.clauses[self.clauses.len().saturating_sub(count)..]
    }

    /// The number of literals across all stored clauses.
    pub fn literal_count(&self) -> usize {
        self.clauses.iter().map(|clause| clause.size()).sum()
    }
}
