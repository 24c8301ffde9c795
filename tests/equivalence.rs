mod common;

use common::{operand_assumptions, operand_pairs, propagate, Propagation};

use dadda_lib::{
    context::Context,
    encoding::equivalence::Link,
    structures::literal::CLiteral,
    types::err::{self},
};

/// A context with two multipliers over shared operands, returning the operands and both products.
fn two_multipliers(the_context: &mut Context) -> [Vec<CLiteral>; 4] {
    let lhs = the_context.fresh_operand().unwrap();
    let rhs = the_context.fresh_operand().unwrap();
    let r1 = the_context.compile_multiplier(&lhs, &rhs).unwrap();
    let r2 = the_context.compile_multiplier(&lhs, &rhs).unwrap();
    [lhs, rhs, r1, r2]
}

mod equal {
    use super::*;

    #[test]
    fn consistent() {
        let mut the_context = Context::default();
        let [lhs, rhs, r1, r2] = two_multipliers(&mut the_context);
        the_context.link_equivalence(&r1, &r2).unwrap();

        assert_eq!(the_context.atom_count(), 468);
        assert_eq!(the_context.clause_count(), 2 * 1188 + 36);
        assert_eq!(the_context.counters.linked_bits, 18);

        for (x, y) in operand_pairs(64) {
            let assumptions = operand_assumptions(&lhs, x, &rhs, y);
            match propagate(&the_context, &assumptions) {
                Propagation::Fixpoint(valuation) => {
                    assert!(common::is_model(&the_context, &valuation), "{x} × {y}")
                }
                Propagation::Conflict => panic!("Conflict on {x} × {y}"),
            }
        }
    }

    #[test]
    fn flipped_bit() {
        for index in [0, 7, 17] {
            let mut the_context = Context::default();
            let [lhs, rhs, r1, mut r2] = two_multipliers(&mut the_context);
            r2[index] = -r2[index];
            the_context.link_equivalence(&r1, &r2).unwrap();

            for (x, y) in operand_pairs(16) {
                let assumptions = operand_assumptions(&lhs, x, &rhs, y);
                assert!(
                    matches!(propagate(&the_context, &assumptions), Propagation::Conflict),
                    "No conflict on {x} × {y} with bit {index} flipped"
                );
            }
        }
    }

    #[test]
    fn link_clauses() {
        let mut the_context = Context::default();
        let [_, _, r1, r2] = two_multipliers(&mut the_context);
        the_context.link_equivalence(&r1, &r2).unwrap();

        let tail = the_context.clause_db.tail(36);
        for (index, (a, b)) in r1.iter().zip(&r2).enumerate() {
            assert_eq!(tail[2 * index], vec![-a, *b]);
            assert_eq!(tail[2 * index + 1], vec![*a, -b]);
        }
    }
}

mod miter {
    use super::*;

    #[test]
    fn equivalent_multipliers() {
        let mut the_context = Context::default();
        let [lhs, rhs, r1, r2] = two_multipliers(&mut the_context);
        let differences = the_context.link_miter(&r1, &r2).unwrap();

        assert_eq!(differences.len(), 18);
        assert_eq!(the_context.atom_count(), 468 + 18);
        assert_eq!(the_context.clause_count(), 2 * 1188 + 18 * 4 + 1);
        assert_eq!(the_context.clause_db.tail(1), &[differences]);

        for (x, y) in operand_pairs(64) {
            let assumptions = operand_assumptions(&lhs, x, &rhs, y);
            assert!(
                matches!(propagate(&the_context, &assumptions), Propagation::Conflict),
                "No conflict on {x} × {y}"
            );
        }
    }

    #[test]
    fn differing_multipliers() {
        let mut the_context = Context::default();
        let [lhs, rhs, r1, r2] = two_multipliers(&mut the_context);

        // the second product is taken with its least significant bit flipped, which always differs
        let mut flipped = r2.clone();
        flipped[0] = -flipped[0];
        the_context.link_miter(&r1, &flipped).unwrap();

        for (x, y) in operand_pairs(16) {
            let assumptions = operand_assumptions(&lhs, x, &rhs, y);
            match propagate(&the_context, &assumptions) {
                Propagation::Fixpoint(valuation) => {
                    assert!(common::is_model(&the_context, &valuation))
                }
                Propagation::Conflict => panic!("Conflict on {x} × {y}"),
            }
        }
    }
}

mod link {
    use super::*;

    #[test]
    fn mismatch() {
        let mut the_context = Context::default();
        let [_, _, r1, r2] = two_multipliers(&mut the_context);
        let clauses = the_context.clause_count();

        for link in [Link::Equal, Link::Miter] {
            assert_eq!(
                the_context.link(link, &r1, &r2[..17]),
                Err(err::ErrorKind::Link(err::LinkError::LengthMismatch(18, 17)))
            );
        }
        assert_eq!(the_context.clause_count(), clauses);
        assert_eq!(the_context.counters.linked_bits, 0);
    }

    #[test]
    fn unknown_atoms() {
        let mut the_context = Context::default();
        let [_, _, r1, mut r2] = two_multipliers(&mut the_context);
        r2[3] = 1000;

        assert_eq!(
            the_context.link_equivalence(&r1, &r2),
            Err(err::ErrorKind::Build(err::BuildError::UnknownAtom(1000)))
        );
    }
}
