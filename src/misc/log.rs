/*!
Targets for [logging](log).

Each stage of a compilation logs under a target of its own, with a summary at `info` or `debug` and details (every atom issued, every gate built) at `trace`.

Note, no log implementation is provided by the library.
The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, and so logs may be narrowed to a target with, e.g., `RUST_LOG=reduction=debug`.
*/

/// Targets for the `target:` argument of a [log]! macro.
pub mod targets {
    /// Logs related to the [atom database](crate::db::atom)
    pub const ALLOCATION: &str = "allocation";

    /// Logs related to [gates](crate::encoding::gates)
    pub const GATES: &str = "gates";

    /// Logs related to [multipliers](crate::encoding::multiplier) as a whole
    pub const MULTIPLIER: &str = "multiplier";

    /// Logs related to [partial products](crate::encoding::multiplier::partial)
    pub const PARTIAL_PRODUCTS: &str = "partial_products";

    /// Logs related to [Dadda reduction](crate::encoding::multiplier::dadda)
    pub const REDUCTION: &str = "reduction";

    /// Logs related to the [final adder](crate::encoding::multiplier::final_adder)
    pub const FINAL_ADDITION: &str = "final_addition";

    /// Logs related to [linking](crate::encoding::equivalence) results
    pub const LINK: &str = "link";

    /// Logs related to [export](crate::io::dimacs)
    pub const EXPORT: &str = "export";
}
