/*!
Valuations, assigning (some) atoms a truth value.

A valuation is written as a vector of optional booleans indexed by atom.
Index 0 is never read, as no literal is over the atom 0.

```rust
# use dadda_lib::structures::valuation::{CValuation, Valuation};
let valuation: CValuation = vec![None, Some(true), None, Some(false)];

assert_eq!(valuation.value_of(1), Some(Some(true)));
assert_eq!(valuation.value_of(2), Some(None));
assert_eq!(valuation.value_of(4), None);
```

The compiler never builds a valuation.
Valuations are used to read the bits of an operand or product, and to check clauses.
*/

use crate::structures::atom::Atom;

/// A vector of optional values, indexed by atom.
pub type CValuation = Vec<Option<bool>>;

pub trait Valuation {
    /// `None` if the atom is outside of the valuation, and otherwise the (optional) value of the atom.
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }
}
