/*!
The atom database, which issues fresh [Atom]s.

Atoms are issued in strictly increasing order, beginning at 1, and the database records only how many atoms have been issued.
So, every atom in `1..=count` has been issued, no atom outside of that range has, and no atom is issued twice.

```rust
# use dadda_lib::db::atom::AtomDB;
let mut atom_db = AtomDB::default();
assert_eq!(atom_db.fresh_atom(), Ok(1));
assert_eq!(atom_db.fresh_atom(), Ok(2));
assert_eq!(atom_db.count(), 2);
assert!(atom_db.contains(2));
assert!(!atom_db.contains(3));
```
*/

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The atom database.
#[derive(Clone, Debug, Default)]
pub struct AtomDB {
    /// The most recently issued atom, or 0 if no atom has been issued.
    last: Atom,
}

impl AtomDB {
    /// A fresh atom, strictly greater than every atom previously issued.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        if self.last >= ATOM_MAX {
            log::warn!(target: targets::ALLOCATION, "Atoms exhausted at {}", self.last);
            return Err(err::AtomDBError::AtomsExhausted);
        }
        self.last += 1;
        log::trace!(target: targets::ALLOCATION, "Fresh atom: {}", self.last);
        Ok(self.last)
    }

    /// A fresh atom, as a literal of the given polarity.
    pub fn fresh_literal(&mut self, polarity: bool) -> Result<CLiteral, err::AtomDBError> {
        let atom = self.fresh_atom()?;
        Ok(CLiteral::new(atom, polarity))
    }

    /// A count of atoms issued.
    /// As atoms are issued from 1, this is also the greatest atom issued.
    pub fn count(&self) -> usize {
        self.last as usize
    }

    /// Whether the atom has been issued.
    pub fn contains(&self, atom: Atom) -> bool {
        0 < atom && atom <= self.last
    }

    /// Checks each literal is over some issued atom.
    pub fn check_literals(&self, literals: &[CLiteral]) -> Result<(), err::BuildError> {
        match literals.iter().find(|literal| !self.contains(literal.atom())) {
            Some(literal) => Err(err::BuildError::UnknownAtom(literal.atom())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strictly_increasing() {
        let mut atom_db = AtomDB::default();
        let mut previous = 0;
        for _ in 0..1024 {
            let fresh = atom_db.fresh_atom().expect("fresh atom");
            assert!(fresh > previous);
            previous = fresh;
        }
        assert_eq!(atom_db.count(), 1024);
    }

    #[test]
    fn zero_is_never_contained() {
        let mut atom_db = AtomDB::default();
        assert!(!atom_db.contains(0));
        assert!(atom_db.fresh_atom().is_ok());
        assert!(!atom_db.contains(0));
        assert!(atom_db.contains(1));
    }

    #[test]
    fn exhaustion() {
        let mut atom_db = AtomDB {
            last: ATOM_MAX - 1,
        };
        assert_eq!(atom_db.fresh_atom(), Ok(ATOM_MAX));
        assert_eq!(atom_db.fresh_atom(), Err(err::AtomDBError::AtomsExhausted));
        assert_eq!(atom_db.count(), ATOM_MAX as usize);
    }

    #[test]
    fn unknown_literals() {
        let mut atom_db = AtomDB::default();
        let p = atom_db.fresh_literal(true).expect("fresh literal");
        let q = atom_db.fresh_literal(false).expect("fresh literal");

        assert_eq!(q, -2);
        assert!(atom_db.check_literals(&[p, q, -p]).is_ok());
        assert_eq!(
            atom_db.check_literals(&[p, 3]),
            Err(err::BuildError::UnknownAtom(3))
        );
        assert_eq!(
            atom_db.check_literals(&[0]),
            Err(err::BuildError::UnknownAtom(0))
        );
    }
}
