/*!
A Dadda multiplier over two operands.

Compilation of a multiplier follows four stages, each in a module of its own:

1. [Partial products](partial), one AND gate for each pair of operand bits.
2. [Arrangement](columns) of the partial products into columns of equal weight.
3. [Dadda reduction](dadda) of the columns, until each column holds at most two literals (plus any carry passed on from the final adder).
4. The [final adder](final_adder), resolving each column to a single bit of the product.

Each stage emits its clauses in order, and issues atoms in order, so the formula of a compilation depends only on the operands and the configuration.

For the default configuration, a multiplier over operands of fresh atoms uses 81 AND gates, 63 full adders, and 9 half adders.

```rust
# use dadda_lib::context::Context;
let mut the_context = Context::default();
let lhs = the_context.fresh_operand().unwrap();
let rhs = the_context.fresh_operand().unwrap();

let product = the_context.compile_multiplier(&lhs, &rhs).unwrap();
assert_eq!(product.len(), 18);
assert_eq!(product[0], 19);

assert_eq!(the_context.atom_count(), 243);
assert_eq!(the_context.clause_count(), 1188);
```
*/

pub mod columns;
pub mod dadda;
pub mod final_adder;
pub mod partial;

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::ErrorKind,
};

impl Context {
    /// Compiles a multiplier over the operands, and returns the bits of the product, least significant bit first.
    ///
    /// Operands are checked before any clause is emitted.
    /// Should compilation fail after that point the clauses emitted remain in the context.
    pub fn compile_multiplier(
        &mut self,
        lhs: &[CLiteral],
        rhs: &[CLiteral],
    ) -> Result<Vec<CLiteral>, ErrorKind> {
        let first_atom = self.atom_count() + 1;
        let first_clause = self.clause_count();

        let products = self.partial_products(lhs, rhs)?;
        let columns = columns::arrange_columns(&products);
        let columns = self.dadda_reduce(columns)?;
        let product = self.final_addition(columns)?;

        self.counters.multipliers += 1;
        log::info!(target: targets::MULTIPLIER,
            "Multiplier {} over atoms {first_atom}..={} with {} clauses",
            self.counters.multipliers,
            self.atom_count(),
            self.clause_count() - first_clause
        );

        Ok(product)
    }
}
