/*!
Configuration of a context.

All configuration of a compilation is contained within a [Config], fixed when the [context](crate::context) is built.

The operand and product widths are not configurable, and are found in [defaults] alongside the default value of each option.
*/

pub mod defaults;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The height bounds applied, in order, by Dadda reduction.
    ///
    /// Bounds should be non-increasing and end at 2, as the final adder resolves columns of at most three literals.
    pub dadda_heights: Vec<usize>,

    /// How to fill a bit of the product whose column is empty after reduction.
    pub empty_column: EmptyColumn,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            dadda_heights: DADDA_HEIGHTS.to_vec(),
            empty_column: EMPTY_COLUMN,
        }
    }
}

/// Policies for a product bit with no literal to take its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyColumn {
    /// A fresh atom, fixed to false by a unit clause.
    Fixed,

    /// A fresh atom, free of any clause.
    ///
    /// As the atom is unconstrained a solver may assign it either value.
    Free,
}

impl std::fmt::Display for EmptyColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Free => write!(f, "free"),
        }
    }
}

impl std::str::FromStr for EmptyColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(Self::Fixed),
            "free" => Ok(Self::Free),
            _ => Err(format!("Unknown empty column policy: {s}")),
        }
    }
}
