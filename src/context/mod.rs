/*!
The context --- within which multipliers are compiled, linked, and exported.

A context owns all state of a compilation:
- An [atom database](crate::db::atom), from which every atom of the formula is issued.
- A [clause database](crate::db::clause), to which every clause of the formula is appended.
- [Counters] of the gates built.

Nothing is shared between contexts, and so independent compilations never contaminate one another.
Multipliers compiled within the same context share the atom database, and so their atoms never collide.

# Example
```rust
# use dadda_lib::context::Context;
# use dadda_lib::config::Config;
let mut the_context = Context::from_config(Config::default());

let lhs = the_context.fresh_operand().unwrap();
let rhs = the_context.fresh_operand().unwrap();

let product_a = the_context.compile_multiplier(&lhs, &rhs).unwrap();
let product_b = the_context.compile_multiplier(&lhs, &rhs).unwrap();
assert_eq!(product_a.len(), 18);

assert!(the_context.link_equivalence(&product_a, &product_b).is_ok());

let mut dimacs = vec![];
assert!(the_context.write_dimacs(&mut dimacs).is_ok());
assert!(dimacs.starts_with(b"p cnf "));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    config::{defaults::OPERAND_WIDTH, Config},
    db::{atom::AtomDB, clause::ClauseDB},
    structures::{atom::Atom, clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// A compilation context.
pub struct Context {
    /// Fixed when the context is built.
    pub config: Config,

    /// Counters related to a compilation.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

impl Context {
    /// A fresh context, with no atoms or clauses.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            clause_db: ClauseDB::default(),
        }
    }

    /// A fresh atom.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        self.atom_db.fresh_atom()
    }

    /// A fresh atom, as a positive literal.
    pub fn fresh_literal(&mut self) -> Result<CLiteral, err::AtomDBError> {
        self.atom_db.fresh_literal(true)
    }

    /// A collection of `count` fresh literals, ordered by atom.
    pub fn fresh_literals(&mut self, count: usize) -> Result<Vec<CLiteral>, err::AtomDBError> {
        (0..count).map(|_| self.fresh_literal()).collect()
    }

    /// The bits of an operand, as fresh literals, least significant bit first.
    ///
    /// ```rust
    /// # use dadda_lib::context::Context;
    /// let mut the_context = Context::default();
    /// let operand = the_context.fresh_operand().unwrap();
    /// assert_eq!(operand, (1..=9).collect::<Vec<_>>());
    /// ```
    pub fn fresh_operand(&mut self) -> Result<Vec<CLiteral>, err::AtomDBError> {
        self.fresh_literals(OPERAND_WIDTH)
    }

    /// Appends a clause to the formula of the context.
    ///
    /// Every literal of the clause must be over some atom issued by the context.
    pub fn add_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        self.atom_db.check_literals(&clause)?;
        self.clause_db.store(clause)?;
        Ok(())
    }

    /// Appends a clause to the formula of the context, without checking the atoms of the clause.
    ///
    /// Used by gate templates, whose literals are either checked inputs or fresh outputs.
    pub(crate) fn store_clause(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        self.clause_db.store(clause)?;
        Ok(())
    }

    /// A count of atoms in the formula.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count()
    }

    /// A count of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clause_db.clause_count()
    }
}
