/*!
The final (ripple-carry) adder.

After reduction each column holds at most three literals, and the final adder resolves the columns to a single bit of the product each, from least to most significant weight:

| Height | Bit of the product |
|--------|--------------------|
| 0 | A fresh atom, as set by the [EmptyColumn] policy of the configuration |
| 1 | The literal of the column |
| 2 | The sum of a half adder over the column, in column order |
| 3 | The sum of a full adder over the column, in column order |

The carry of an adder is appended to the next column, and if there is no next column a column is added for it.

The product is exactly [PRODUCT_WIDTH] bits.
Should the columns resolve to fewer bits the product is padded with bits set by the empty column policy, and should they resolve to more the build fails.
*/

use crate::{
    config::{defaults::PRODUCT_WIDTH, EmptyColumn},
    context::Context,
    encoding::multiplier::columns::{Column, Columns},
    misc::log::targets::{self},
    structures::literal::CLiteral,
    types::err::{self, ErrorKind},
};

impl Context {
    /// Resolves reduced columns to the bits of a product, least significant bit first.
    pub fn final_addition(&mut self, mut columns: Columns) -> Result<Vec<CLiteral>, ErrorKind> {
        let mut product = Vec::with_capacity(PRODUCT_WIDTH);

        let mut weight = 0;
        while weight < columns.len() {
            let column = std::mem::take(&mut columns[weight]);

            let (bit, carry) = match column.as_slice() {
                [] => (self.empty_column_bit(weight)?, None),

                [bit] => (*bit, None),

                [a, b] => {
                    let adder = self.half_adder(*a, *b)?;
                    (adder.sum, Some(adder.carry))
                }

                [a, b, c] => {
                    let adder = self.full_adder(*a, *b, *c)?;
                    (adder.sum, Some(adder.carry))
                }

                _ => {
                    log::error!(target: targets::FINAL_ADDITION, "Column {weight} has height {}", column.len());
                    return Err(err::BuildError::ColumnHeight(weight, column.len()).into());
                }
            };

            product.push(bit);

            if let Some(carry) = carry {
                if weight + 1 == columns.len() {
                    columns.push(Column::default());
                }
                columns[weight + 1].push(carry);
            }

            weight += 1;
        }

        if product.len() > PRODUCT_WIDTH {
            log::error!(target: targets::FINAL_ADDITION, "Product of {} bits", product.len());
            return Err(err::BuildError::ProductOverflow(product.len()).into());
        }

        while product.len() < PRODUCT_WIDTH {
            let bit = self.empty_column_bit(product.len())?;
            product.push(bit);
        }

        Ok(product)
    }

    /// A fresh bit for a weight with no literal, constrained by the empty column policy.
    fn empty_column_bit(&mut self, weight: usize) -> Result<CLiteral, ErrorKind> {
        let bit = self.fresh_literal()?;
        match self.config.empty_column {
            EmptyColumn::Fixed => {
                self.store_clause(vec![-bit])?;
                self.counters.unit_clauses += 1;
                log::debug!(target: targets::FINAL_ADDITION, "Bit {weight} of the product fixed false by {bit}");
            }

            EmptyColumn::Free => {
                log::warn!(target: targets::FINAL_ADDITION, "Bit {weight} of the product is free, as {bit}");
            }
        }
        Ok(bit)
    }
}
