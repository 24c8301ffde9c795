/*!
Dadda reduction of columns.

Reduction applies a sequence of height bounds, by default `6, 4, 3, 2`.
For each bound, columns are visited from least to most significant weight, and while a column is taller than the bound literals are taken from the end of the column and replaced by the sum of an adder, with the carry of the adder passed to the next column.

- If the column holds at least three literals the last three `a`, `b`, `c` (taken in that order) are replaced by the sum of a full adder, and so the column shrinks by two.
- Otherwise, the last two literals are replaced by the sum of a half adder, and so the column shrinks by one.

Carries from a column are appended to the next column only once the column is within the bound, in the order the adders were built.
If the most significant column passes on a carry a new column is added for it.

As the sum of an adder is pushed to the column it was taken from, the sum of a full adder may be one of the inputs to the next full adder of the column.

Reduction of a single column is a pure function of the column, the bound, and an [AtomDB], see [reduce_column].

```rust
# use dadda_lib::db::atom::AtomDB;
# use dadda_lib::encoding::multiplier::dadda::reduce_column;
let mut atom_db = AtomDB::default();
let column = (0..5).map(|_| atom_db.fresh_literal(true).unwrap()).collect::<Vec<_>>();

let reduction = reduce_column(column, 2, &mut atom_db).unwrap();

// full adders over (5, 4, 3) then (6, 2, 1)
assert_eq!(reduction.column, vec![8]);
assert_eq!(reduction.carries, vec![7, 9]);
assert_eq!(reduction.clauses.len(), 28);
```
*/

use crate::{
    context::Context,
    db::atom::AtomDB,
    encoding::{
        gates::{full_adder_clauses, half_adder_clauses, Adder},
        multiplier::columns::{heights, Column, Columns},
    },
    misc::log::targets::{self},
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ErrorKind},
};

/// The result of reducing a column to some bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnReduction {
    /// The reduced column.
    pub column: Column,

    /// Clauses of the adders built, in order of construction.
    pub clauses: Vec<CClause>,

    /// Carries of the adders built, for the next column, in order of construction.
    pub carries: Vec<CLiteral>,

    /// A count of the full adders built.
    pub full_adders: usize,

    /// A count of the half adders built.
    pub half_adders: usize,
}

/// Reduces `column` to at most `bound` literals, issuing the outputs of any adder from `atom_db`.
///
/// A bound of zero is read as a bound of one, as a column of a single literal cannot be reduced.
pub fn reduce_column(
    mut column: Column,
    bound: usize,
    atom_db: &mut AtomDB,
) -> Result<ColumnReduction, err::AtomDBError> {
    let bound = bound.max(1);
    let mut reduction = ColumnReduction::default();

    while column.len() > bound {
        let excess = column.len() - bound;

        if column.len() >= 3 && excess >= 1 {
            let taken = column.split_off(column.len() - 3);
            let (a, b, c) = (taken[2], taken[1], taken[0]);

            let adder = Adder::fresh(atom_db)?;
            reduction.clauses.extend(full_adder_clauses(adder, a, b, c));
            reduction.full_adders += 1;

            column.push(adder.sum);
            reduction.carries.push(adder.carry);
        } else {
            let taken = column.split_off(column.len() - 2);
            let (a, b) = (taken[1], taken[0]);

            let adder = Adder::fresh(atom_db)?;
            reduction.clauses.extend(half_adder_clauses(adder, a, b));
            reduction.half_adders += 1;

            column.push(adder.sum);
            reduction.carries.push(adder.carry);
        }
    }

    reduction.column = column;
    Ok(reduction)
}

impl Context {
    /// Reduces the columns by each height bound of the configuration, in order.
    ///
    /// The bounds are checked before any column is reduced.
    pub fn dadda_reduce(&mut self, mut columns: Columns) -> Result<Columns, ErrorKind> {
        let bounds = self.config.dadda_heights.clone();
        if let Some(position) = bounds.iter().position(|bound| *bound == 0) {
            return Err(err::BuildError::HeightBound(position).into());
        }

        for bound in bounds {
            let mut weight = 0;
            while weight < columns.len() {
                let column = std::mem::take(&mut columns[weight]);
                let reduction = reduce_column(column, bound, &mut self.atom_db)?;

                for clause in reduction.clauses {
                    self.store_clause(clause)?;
                }
                self.counters.full_adders += reduction.full_adders;
                self.counters.half_adders += reduction.half_adders;
                columns[weight] = reduction.column;

                if !reduction.carries.is_empty() {
                    if weight + 1 == columns.len() {
                        log::debug!(target: targets::REDUCTION, "Carry from column {weight} widens the columns");
                        columns.push(Column::default());
                    }
                    columns[weight + 1].extend(reduction.carries);
                }

                weight += 1;
            }

            log::debug!(target: targets::REDUCTION, "Heights at bound {bound}: {:?}", heights(&columns));
        }

        Ok(columns)
    }
}
