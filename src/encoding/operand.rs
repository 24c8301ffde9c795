/*!
Operands, and other vectors of bits.

A vector of bits is a slice of literals, least significant bit first.
An operand is a vector of exactly [OPERAND_WIDTH] bits, each over some atom issued by the context.

Operands are typically made of fresh atoms, though any literal over an issued atom may be used --- e.g. the negation of some other bit, or a bit of a product.

```rust
# use dadda_lib::context::Context;
# use dadda_lib::encoding::operand::value_of_bits;
let mut the_context = Context::default();
let operand = the_context.fresh_operand().unwrap();
assert!(the_context.fix_operand(&operand, 37).is_ok());
assert_eq!(the_context.clause_count(), 9);

// bits 0, 2, and 5
let valuation = vec![None, Some(true), Some(false), Some(true), Some(false), Some(false), Some(true), Some(false), Some(false), Some(false)];
assert_eq!(value_of_bits(&operand, &valuation), Some(37));
```
*/

use crate::{
    config::defaults::OPERAND_WIDTH,
    context::Context,
    structures::{
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// Checks the literals are an operand: exactly [OPERAND_WIDTH] literals, each over an issued atom.
    pub fn check_operand(&self, operand: &[CLiteral]) -> Result<(), err::BuildError> {
        if operand.len() != OPERAND_WIDTH {
            return Err(err::BuildError::OperandWidth(operand.len()));
        }
        self.atom_db.check_literals(operand)
    }

    /// Fixes the bits to the binary representation of `value`, with one unit clause per bit.
    ///
    /// Bits beyond the width of `value` are fixed to false.
    /// Fails if `value` does not fit in the bits, without adding any clause.
    pub fn fix_operand(&mut self, bits: &[CLiteral], value: u64) -> Result<(), ErrorKind> {
        self.atom_db.check_literals(bits)?;
        if bits.len() < u64::BITS as usize && value >> bits.len() != 0 {
            return Err(err::BuildError::ValueTooWide(value).into());
        }

        for (index, bit) in bits.iter().enumerate() {
            let set = index < u64::BITS as usize && (value >> index) & 1 == 1;
            let unit = match set {
                true => *bit,
                false => bit.negate(),
            };
            self.store_clause(vec![unit])?;
            self.counters.unit_clauses += 1;
        }
        Ok(())
    }
}

/// The unsigned value of the bits on the valuation, if every bit has a value.
///
/// Bits beyond the width of a u64 are read only if false.
pub fn value_of_bits(bits: &[CLiteral], valuation: &impl Valuation) -> Option<u64> {
    let mut value: u64 = 0;
    for (index, bit) in bits.iter().enumerate() {
        let atom_value = valuation.value_of(bit.atom()).flatten()?;
        if atom_value == bit.polarity() {
            if index >= u64::BITS as usize {
                return None;
            }
            value |= 1 << index;
        }
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_width() {
        let mut the_context = Context::default();
        let short = the_context.fresh_literals(8).expect("fresh literals");
        assert_eq!(
            the_context.check_operand(&short),
            Err(err::BuildError::OperandWidth(8))
        );

        let mut long = short.clone();
        long.extend(the_context.fresh_literals(2).expect("fresh literals"));
        assert_eq!(
            the_context.check_operand(&long),
            Err(err::BuildError::OperandWidth(10))
        );

        assert!(the_context.check_operand(&long[1..]).is_ok());
    }

    #[test]
    fn fix_too_wide() {
        let mut the_context = Context::default();
        let operand = the_context.fresh_operand().expect("fresh operand");

        assert_eq!(
            the_context.fix_operand(&operand, 512),
            Err(ErrorKind::Build(err::BuildError::ValueTooWide(512)))
        );
        assert_eq!(the_context.clause_count(), 0);

        assert!(the_context.fix_operand(&operand, 511).is_ok());
        assert!(the_context.clause_db.clauses().all(|clause| clause[0] > 0));
    }

    #[test]
    fn fix_negated_bits() {
        let mut the_context = Context::default();
        let operand = the_context.fresh_operand().expect("fresh operand");
        let negated = operand.iter().map(|bit| -bit).collect::<Vec<_>>();

        assert!(the_context.fix_operand(&negated, 1).is_ok());
        let units = the_context
            .clause_db
            .clauses()
            .map(|clause| clause[0])
            .collect::<Vec<_>>();
        assert_eq!(units, vec![-1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn partial_values() {
        let bits = vec![1, -2];
        assert_eq!(value_of_bits(&bits, &vec![None, Some(true), Some(false)]), Some(3));
        assert_eq!(value_of_bits(&bits, &vec![None, Some(false), Some(true)]), Some(0));
        assert_eq!(value_of_bits(&bits, &vec![None, Some(true), None]), None);
        assert_eq!(value_of_bits(&bits, &vec![None, Some(true)]), None);
    }
}
