//! Errors, grouped by the part of the library they arise in.
//!
//! - Most errors are external, and follow from a request which cannot be honoured --- e.g. an operand of the wrong width, or an unwritable path.
//! - A few are internal, and highlight a structure which should be impossible to build with the fixed operand width --- e.g. a product wider than [PRODUCT_WIDTH](crate::config::defaults::PRODUCT_WIDTH).
//!
//! Any error is fatal to the compilation it occurs in, though the context remains usable for inspection.
//!
//! Error enums are named after the database or stage they belong to, and so are used with an `err::` prefix.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Export(ExportError),
    Link(LinkError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(e) => write!(f, "atom database: {e:?}"),
            Self::Build(e) => write!(f, "build: {e:?}"),
            Self::ClauseDB(e) => write!(f, "clause database: {e:?}"),
            Self::Export(e) => write!(f, "export: {e:?}"),
            Self::Link(e) => write!(f, "link: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors when building (part of) a multiplier.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An operand did not have the required number of bits.
    /// Contains the number of bits found.
    OperandWidth(usize),

    /// A literal refers to an atom which has not been issued (or is the reserved atom 0).
    UnknownAtom(Atom),

    /// A value does not fit in the bits it was to be fixed to.
    ValueTooWide(u64),

    /// A height bound for reduction was zero, though no column can be reduced below a single literal.
    /// Contains the position of the bound in the configured sequence.
    HeightBound(usize),

    /// After reduction some column held more literals than the final adder can resolve.
    /// Contains the weight of the column and its height.
    ColumnHeight(usize, usize),

    /// The product required more bits than a product of two operands may have.
    /// Contains the number of bits found.
    ProductOverflow(usize),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// Some attempt was made to store an empty clause.
    EmptyClause,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when writing a formula.
///
/// The kind of the underlying [std::io::Error] is kept, as the error itself is neither [Clone] nor [Eq].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportError {
    /// The (temporary) file could not be created.
    Create(std::io::ErrorKind),

    /// Writing to the (temporary) file failed part way.
    Write(std::io::ErrorKind),

    /// The completed file could not be moved to the requested path.
    Rename(std::io::ErrorKind),
}

impl From<ExportError> for ErrorKind {
    fn from(e: ExportError) -> Self {
        ErrorKind::Export(e)
    }
}

/// Errors when linking the results of two multipliers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LinkError {
    /// The two results differ in length.
    /// Contains the two lengths found.
    LengthMismatch(usize, usize),

    /// There was nothing to link.
    Empty,
}

impl From<LinkError> for ErrorKind {
    fn from(e: LinkError) -> Self {
        ErrorKind::Link(e)
    }
}
