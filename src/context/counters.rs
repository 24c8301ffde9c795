/// Counts for various things which count, roughly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of AND gates, including those of partial products.
    pub and_gates: usize,

    /// A count of half adders.
    pub half_adders: usize,

    /// A count of full adders.
    pub full_adders: usize,

    /// A count of unit clauses, fixing operands or empty columns.
    pub unit_clauses: usize,

    /// A count of compiled multipliers.
    pub multipliers: usize,

    /// A count of linked bits, by equivalence or miter.
    pub linked_bits: usize,
}
