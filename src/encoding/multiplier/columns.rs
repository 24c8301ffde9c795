/*!
Columns of equal weight.

A column is a multiset of literals whose values are summed with the same weight.
The column at index `w` has weight `2^w`, and so the partial product `pp[i][j]` belongs to column `i + j`.

Within a column literals are kept in a fixed order, as the reducer takes literals from the end of a column.
Arranged columns hold partial products in row-major order of the grid, and so column `w` is `pp[0][w], pp[1][w - 1], …`, skipping indices outside of the grid.

```rust
# use dadda_lib::encoding::multiplier::columns::arrange_columns;
let grid = vec![vec![1, 2], vec![3, 4]];
assert_eq!(arrange_columns(&grid), vec![vec![1], vec![2, 3], vec![4]]);
```
*/

use crate::{encoding::multiplier::partial::PartialProducts, structures::literal::CLiteral};

/// A column of literals with equal weight.
pub type Column = Vec<CLiteral>;

/// Columns, indexed by weight.
pub type Columns = Vec<Column>;

/// Arranges a grid of partial products into columns of equal weight.
///
/// A grid with `r` rows of `c` products is arranged into `r + c - 1` columns.
pub fn arrange_columns(products: &PartialProducts) -> Columns {
    let rows = products.len();
    let row_width = products.first().map_or(0, |row| row.len());
    let mut columns: Columns = vec![Column::default(); (rows + row_width).saturating_sub(1)];

    for (i, row) in products.iter().enumerate() {
        for (j, product) in row.iter().enumerate() {
            columns[i + j].push(*product);
        }
    }
    columns
}

/// The height of each column.
pub fn heights(columns: &[Column]) -> Vec<usize> {
    columns.iter().map(|column| column.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{COLUMN_COUNT, OPERAND_WIDTH};

    fn square_grid(width: usize) -> PartialProducts {
        (0..width)
            .map(|i| {
                (0..width)
                    .map(|j| (i * width + j + 1) as CLiteral)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn triangular_profile() {
        let columns = arrange_columns(&square_grid(OPERAND_WIDTH));
        assert_eq!(columns.len(), COLUMN_COUNT);
        assert_eq!(
            heights(&columns),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 8, 7, 6, 5, 4, 3, 2, 1]
        );
        assert_eq!(columns.iter().map(|column| column.len()).sum::<usize>(), 81);
    }

    #[test]
    fn row_major_within_column() {
        let columns = arrange_columns(&square_grid(OPERAND_WIDTH));
        // pp[i][j] is (9i + j + 1)
        assert_eq!(columns[0], vec![1]);
        assert_eq!(columns[2], vec![3, 11, 19]);
        assert_eq!(columns[10], vec![27, 35, 43, 51, 59, 67, 75]);
        assert_eq!(columns[16], vec![81]);
    }

    #[test]
    fn empty_grid() {
        assert!(arrange_columns(&vec![]).is_empty());
    }
}
