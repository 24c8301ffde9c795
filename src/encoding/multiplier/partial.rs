//! The partial products of two operands.
//!
//! Bit `i` of the left operand and bit `j` of the right operand give the partial product `pp[i][j] ⇔ lhs[i] ∧ rhs[j]`, which has weight `2^(i + j)`.
//!
//! Partial products are built row by row, and so the output atoms of the AND gates are issued in row-major order.

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::ErrorKind,
};

/// The grid of partial products, indexed by the bit of the left operand then the bit of the right operand.
pub type PartialProducts = Vec<Vec<CLiteral>>;

impl Context {
    /// One AND gate for each pair of bits from the operands.
    ///
    /// Both operands are checked before any gate is built.
    pub fn partial_products(
        &mut self,
        lhs: &[CLiteral],
        rhs: &[CLiteral],
    ) -> Result<PartialProducts, ErrorKind> {
        self.check_operand(lhs)?;
        self.check_operand(rhs)?;

        let mut grid = Vec::with_capacity(lhs.len());
        for a in lhs {
            let mut row = Vec::with_capacity(rhs.len());
            for b in rhs {
                row.push(self.and_gate(*a, *b)?);
            }
            grid.push(row);
        }

        log::debug!(target: targets::PARTIAL_PRODUCTS, "{} partial products", lhs.len() * rhs.len());
        Ok(grid)
    }
}
