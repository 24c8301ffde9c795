use crate::config::{self};

/// The number of bits in each operand.
pub const OPERAND_WIDTH: usize = 9;

/// The number of bits in a product of two operands.
pub const PRODUCT_WIDTH: usize = 2 * OPERAND_WIDTH;

/// The number of columns holding partial products.
pub const COLUMN_COUNT: usize = 2 * OPERAND_WIDTH - 1;

/// The classical Dadda bounds for a tree over nine rows.
pub const DADDA_HEIGHTS: [usize; 4] = [6, 4, 3, 2];

pub const EMPTY_COLUMN: config::EmptyColumn = config::EmptyColumn::Fixed;

/// Default path for an exported formula.
pub const OUTPUT_PATH: &str = "problem_D5.cnf";
