/*!
Encodings of circuits as clauses.

- [gates] gives the clause templates of AND gates, XOR gates, and adders.
- [operand] fixes and reads vectors of bits.
- [multiplier] compiles a Dadda multiplier from gates.
- [equivalence] links the products of two multipliers.

Every encoding is a method on a [Context](crate::context::Context), and so issues atoms from, and appends clauses to, the context.
*/

pub mod equivalence;
pub mod gates;
pub mod multiplier;
pub mod operand;
