/*!
Links between the results of two multipliers.

A link is a set of clauses relating two equally long vectors of bits, typically the products of two multipliers over the same operands.

- [Equal](Link::Equal) constrains the vectors to be equal, bit for bit, with clauses `(¬r1 ∨ r2)` and `(r1 ∨ ¬r2)` for each pair of bits.
  With shared operands the formula is satisfiable exactly when the multipliers agree on those operands, and so the formula is a consistency check.

- [Miter](Link::Miter) constrains the vectors to differ somewhere, with a fresh difference bit `d ⇔ (r1 ⊕ r2)` for each pair of bits and a single clause requiring some difference.
  With shared operands the formula is unsatisfiable exactly when the multipliers agree on every pair of operands, and so the formula is an equivalence check.

- [None](Link::None) adds nothing.

```rust
# use dadda_lib::context::Context;
let mut the_context = Context::default();
let r1 = the_context.fresh_literals(3).unwrap();
let r2 = the_context.fresh_literals(3).unwrap();

assert!(the_context.link_equivalence(&r1, &r2).is_ok());
assert_eq!(the_context.clause_count(), 6);

let differences = the_context.link_miter(&r1, &r2).unwrap();
assert_eq!(differences, vec![7, 8, 9]);
assert_eq!(the_context.clause_count(), 6 + 3 * 4 + 1);
```
*/

use crate::{
    context::Context,
    encoding::gates::xor_clauses,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

/// Ways to link the results of two multipliers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    /// Bitwise equality.
    Equal,

    /// Some bitwise difference.
    Miter,

    /// No link.
    None,
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Miter => write!(f, "miter"),
            Self::None => write!(f, "none"),
        }
    }
}

impl std::str::FromStr for Link {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equal" => Ok(Self::Equal),
            "miter" => Ok(Self::Miter),
            "none" => Ok(Self::None),
            _ => Err(format!("Unknown link: {s}")),
        }
    }
}

impl Context {
    /// Checks two vectors of bits may be linked: equal in length, non-empty, and over issued atoms.
    fn check_link(&self, r1: &[CLiteral], r2: &[CLiteral]) -> Result<(), ErrorKind> {
        if r1.len() != r2.len() {
            return Err(err::LinkError::LengthMismatch(r1.len(), r2.len()).into());
        }
        if r1.is_empty() {
            return Err(err::LinkError::Empty.into());
        }
        self.atom_db.check_literals(r1)?;
        self.atom_db.check_literals(r2)?;
        Ok(())
    }

    /// Constrains `r1` and `r2` to be equal, bit for bit.
    pub fn link_equivalence(&mut self, r1: &[CLiteral], r2: &[CLiteral]) -> Result<(), ErrorKind> {
        self.check_link(r1, r2)?;

        for (a, b) in r1.iter().zip(r2) {
            self.store_clause(vec![-a, *b])?;
            self.store_clause(vec![*a, -b])?;
        }

        self.counters.linked_bits += r1.len();
        log::info!(target: targets::LINK, "Equality over {} bits", r1.len());
        Ok(())
    }

    /// Constrains `r1` and `r2` to differ in some bit, and returns the difference bits.
    pub fn link_miter(
        &mut self,
        r1: &[CLiteral],
        r2: &[CLiteral],
    ) -> Result<Vec<CLiteral>, ErrorKind> {
        self.check_link(r1, r2)?;

        let mut differences = Vec::with_capacity(r1.len());
        for (a, b) in r1.iter().zip(r2) {
            let difference = self.fresh_literal()?;
            for clause in xor_clauses(difference, *a, *b) {
                self.store_clause(clause)?;
            }
            differences.push(difference);
        }
        self.store_clause(differences.clone())?;

        self.counters.linked_bits += r1.len();
        log::info!(target: targets::LINK, "Miter over {} bits", r1.len());
        Ok(differences)
    }

    /// Links `r1` and `r2` as requested.
    pub fn link(&mut self, link: Link, r1: &[CLiteral], r2: &[CLiteral]) -> Result<(), ErrorKind> {
        match link {
            Link::Equal => self.link_equivalence(r1, r2),
            Link::Miter => self.link_miter(r1, r2).map(|_| ()),
            Link::None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_clauses() {
        let mut the_context = Context::default();
        let r1 = the_context.fresh_literals(2).expect("fresh literals");
        let r2 = the_context.fresh_literals(2).expect("fresh literals");

        assert!(the_context.link_equivalence(&r1, &r2).is_ok());
        let clauses = the_context.clause_db.clauses().cloned().collect::<Vec<_>>();
        assert_eq!(
            clauses,
            vec![vec![-1, 3], vec![1, -3], vec![-2, 4], vec![2, -4]]
        );
        assert_eq!(the_context.counters.linked_bits, 2);
    }

    #[test]
    fn miter_requires_difference() {
        let mut the_context = Context::default();
        let r1 = the_context.fresh_literals(2).expect("fresh literals");
        let r2 = the_context.fresh_literals(2).expect("fresh literals");

        let differences = the_context.link_miter(&r1, &r2).expect("miter");
        assert_eq!(differences, vec![5, 6]);
        assert_eq!(the_context.clause_db.tail(1), &[vec![5, 6]]);
        assert_eq!(the_context.atom_count(), 6);
    }

    #[test]
    fn mismatch() {
        let mut the_context = Context::default();
        let r1 = the_context.fresh_literals(18).expect("fresh literals");
        let r2 = the_context.fresh_literals(17).expect("fresh literals");

        assert_eq!(
            the_context.link_equivalence(&r1, &r2),
            Err(ErrorKind::Link(err::LinkError::LengthMismatch(18, 17)))
        );
        assert_eq!(
            the_context.link_miter(&r2, &r1),
            Err(ErrorKind::Link(err::LinkError::LengthMismatch(17, 18)))
        );
        assert_eq!(
            the_context.link(Link::Equal, &[], &[]),
            Err(ErrorKind::Link(err::LinkError::Empty))
        );
        assert_eq!(the_context.clause_count(), 0);
    }

    #[test]
    fn unlinked() {
        let mut the_context = Context::default();
        let r1 = the_context.fresh_literals(2).expect("fresh literals");

        assert!(the_context.link(Link::None, &r1, &[]).is_ok());
        assert_eq!(the_context.clause_count(), 0);
    }

    #[test]
    fn link_names() {
        for link in [Link::Equal, Link::Miter, Link::None] {
            assert_eq!(link.to_string().parse::<Link>(), Ok(link));
        }
        assert!("xor".parse::<Link>().is_err());
    }
}
