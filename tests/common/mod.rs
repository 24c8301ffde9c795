//! A checker for compiled formulas.
//!
//! Not a solver: from a set of assumptions clauses are propagated to a fixpoint, and nothing is ever guessed.
//! As each gate is a Tseitin encoding, fixing the inputs of a circuit is enough for propagation to fix every output.
#![allow(dead_code)]

use dadda_lib::{
    context::Context,
    encoding::operand::value_of_bits,
    structures::{
        clause::Clause,
        literal::{CLiteral, Literal},
        valuation::CValuation,
    },
};
use rand::Rng;

/// The result of propagation.
#[derive(Debug)]
pub enum Propagation {
    /// A fixpoint was reached without falsifying any clause.
    Fixpoint(CValuation),

    /// Some clause was falsified.
    Conflict,
}

/// Propagates the assumptions through the formula of the context, until no clause has a single unvalued literal.
pub fn propagate(the_context: &Context, assumptions: &[CLiteral]) -> Propagation {
    let mut valuation: CValuation = vec![None; the_context.atom_count() + 1];

    for literal in assumptions {
        let index = literal.atom() as usize;
        match valuation[index] {
            Some(value) if value != literal.polarity() => return Propagation::Conflict,
            _ => valuation[index] = Some(literal.polarity()),
        }
    }

    loop {
        let mut fresh_value = false;

        for clause in the_context.clause_db.clauses() {
            let mut satisfied = false;
            let mut unvalued = Vec::new();

            for literal in clause {
                match valuation[literal.atom() as usize] {
                    None => unvalued.push(*literal),
                    Some(value) if value == literal.polarity() => {
                        satisfied = true;
                        break;
                    }
                    Some(_) => {}
                }
            }

            if satisfied {
                continue;
            }

            match unvalued.as_slice() {
                [] => return Propagation::Conflict,
                [literal] => {
                    valuation[literal.atom() as usize] = Some(literal.polarity());
                    fresh_value = true;
                }
                _ => {}
            }
        }

        if !fresh_value {
            break;
        }
    }

    Propagation::Fixpoint(valuation)
}

/// Whether every atom has a value and every clause is satisfied, on the valuation.
pub fn is_model(the_context: &Context, valuation: &CValuation) -> bool {
    valuation.iter().skip(1).all(|value| value.is_some())
        && the_context
            .clause_db
            .clauses()
            .all(|clause| clause.satisfied_on(valuation) == Some(true))
}

/// Assumptions fixing the bits to the value.
pub fn bit_assumptions(bits: &[CLiteral], value: u64) -> Vec<CLiteral> {
    bits.iter()
        .enumerate()
        .map(|(index, bit)| match (value >> index) & 1 {
            1 => *bit,
            _ => -bit,
        })
        .collect()
}

/// Assumptions fixing each operand to its value.
pub fn operand_assumptions(lhs: &[CLiteral], x: u64, rhs: &[CLiteral], y: u64) -> Vec<CLiteral> {
    let mut assumptions = bit_assumptions(lhs, x);
    assumptions.extend(bit_assumptions(rhs, y));
    assumptions
}

/// The value of the product under the assumptions, provided propagation gives a model.
pub fn product_under(
    the_context: &Context,
    product: &[CLiteral],
    assumptions: &[CLiteral],
) -> Option<u64> {
    match propagate(the_context, assumptions) {
        Propagation::Fixpoint(valuation) if is_model(the_context, &valuation) => {
            value_of_bits(product, &valuation)
        }
        _ => None,
    }
}

/// Pairs of operand values, the corners followed by a random sample.
pub fn operand_pairs(sample: usize) -> Vec<(u64, u64)> {
    let mut pairs = vec![(0, 0), (1, 1), (511, 511), (255, 2), (37, 91), (0, 511), (511, 1)];
    let mut rng = rand::thread_rng();
    for _ in 0..sample {
        pairs.push((rng.gen_range(0..512), rng.gen_range(0..512)));
    }
    pairs
}
