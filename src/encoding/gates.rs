/*!
Clause templates for the gates of a multiplier.

Each gate is given as a [Tseitin encoding](https://en.wikipedia.org/wiki/Tseytin_transformation): the output of the gate is a fresh atom, and the clauses of the template hold exactly when the output takes the value of the gate on its inputs.
So, for any value of the inputs there is exactly one extension of the value to the outputs which satisfies the clauses.

Templates are pure functions from literals to a fixed array of clauses, and are also available as methods on a [Context], which issue the outputs and store the clauses.

| Gate | Outputs | Clauses |
|------|---------|---------|
| [and](and_clauses) | 1 | 3 |
| [xor](xor_clauses) | 1 | 4 |
| [half adder](half_adder_clauses) | 2 | 7 |
| [full adder](full_adder_clauses) | 2 | 14 |

```rust
# use dadda_lib::context::Context;
let mut the_context = Context::default();
let [p, q] = *the_context.fresh_literals(2).unwrap().as_slice() else {
    panic!("Insufficient literals");
};

let adder = the_context.half_adder(p, q).unwrap();
assert_eq!((adder.sum, adder.carry), (3, 4));
assert_eq!(the_context.clause_count(), 7);
```
*/

use crate::{
    context::Context,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// The outputs of an adder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Adder {
    /// The bit of the sum with the same weight as the inputs.
    pub sum: CLiteral,

    /// The bit of the sum with twice the weight of the inputs.
    pub carry: CLiteral,
}

impl Adder {
    /// Fresh outputs for an adder, with the sum issued before the carry.
    pub fn fresh(atom_db: &mut AtomDB) -> Result<Self, err::AtomDBError> {
        let sum = atom_db.fresh_literal(true)?;
        let carry = atom_db.fresh_literal(true)?;
        Ok(Adder { sum, carry })
    }
}

/// Clauses for `out ⇔ (a ∧ b)`.
// (out → a ∧ b) ∧ (a ∧ b → out)
// (¬out ∨ a) ∧ (¬out ∨ b) ∧ (out ∨ ¬a ∨ ¬b)
pub fn and_clauses(out: CLiteral, a: CLiteral, b: CLiteral) -> [CClause; 3] {
    [vec![-out, a], vec![-out, b], vec![out, -a, -b]]
}

/// Clauses for `out ⇔ (a ⊕ b)`, one clause forbidding each assignment to (a, b) with the wrong parity.
pub fn xor_clauses(out: CLiteral, a: CLiteral, b: CLiteral) -> [CClause; 4] {
    [
        vec![-out, a, b],
        vec![-out, -a, -b],
        vec![out, -a, b],
        vec![out, a, -b],
    ]
}

/// Clauses for `sum ⇔ (a ⊕ b)` followed by clauses for `carry ⇔ (a ∧ b)`.
pub fn half_adder_clauses(adder: Adder, a: CLiteral, b: CLiteral) -> [CClause; 7] {
    let [s0, s1, s2, s3] = xor_clauses(adder.sum, a, b);
    let [c0, c1, c2] = and_clauses(adder.carry, a, b);
    [s0, s1, s2, s3, c0, c1, c2]
}

/// Clauses for `sum ⇔ (a ⊕ b ⊕ c)` followed by clauses for `carry ⇔ majority(a, b, c)`.
pub fn full_adder_clauses(adder: Adder, a: CLiteral, b: CLiteral, c: CLiteral) -> [CClause; 14] {
    let Adder { sum, carry } = adder;
    [
        // sum, one clause forbidding each of the eight assignments to (a, b, c) with the wrong parity
        vec![sum, -a, -b, -c],
        vec![sum, a, b, -c],
        vec![sum, a, -b, c],
        vec![sum, -a, b, c],
        vec![-sum, a, b, c],
        vec![-sum, -a, -b, c],
        vec![-sum, -a, b, -c],
        vec![-sum, a, -b, -c],
        // carry, true if any two inputs are true, false if any two inputs are false
        vec![-carry, a, b],
        vec![-carry, a, c],
        vec![-carry, b, c],
        vec![carry, -a, -b],
        vec![carry, -a, -c],
        vec![carry, -b, -c],
    ]
}

impl Context {
    /// The output of an AND gate over `a` and `b`.
    pub fn and_gate(&mut self, a: CLiteral, b: CLiteral) -> Result<CLiteral, ErrorKind> {
        self.atom_db.check_literals(&[a, b])?;
        let out = self.atom_db.fresh_literal(true)?;
        for clause in and_clauses(out, a, b) {
            self.store_clause(clause)?;
        }
        self.counters.and_gates += 1;
        log::trace!(target: targets::GATES, "{out} = {a} ∧ {b}");
        Ok(out)
    }

    /// The outputs of a half adder over `a` and `b`.
    pub fn half_adder(&mut self, a: CLiteral, b: CLiteral) -> Result<Adder, ErrorKind> {
        self.atom_db.check_literals(&[a, b])?;
        let adder = Adder::fresh(&mut self.atom_db)?;
        for clause in half_adder_clauses(adder, a, b) {
            self.store_clause(clause)?;
        }
        self.counters.half_adders += 1;
        log::trace!(target: targets::GATES, "({}, {}) = {a} + {b}", adder.sum, adder.carry);
        Ok(adder)
    }

    /// The outputs of a full adder over `a`, `b`, and `c`.
    pub fn full_adder(
        &mut self,
        a: CLiteral,
        b: CLiteral,
        c: CLiteral,
    ) -> Result<Adder, ErrorKind> {
        self.atom_db.check_literals(&[a, b, c])?;
        let adder = Adder::fresh(&mut self.atom_db)?;
        for clause in full_adder_clauses(adder, a, b, c) {
            self.store_clause(clause)?;
        }
        self.counters.full_adders += 1;
        log::trace!(target: targets::GATES, "({}, {}) = {a} + {b} + {c}", adder.sum, adder.carry);
        Ok(adder)
    }
}
