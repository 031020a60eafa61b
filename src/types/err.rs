//! Error types used in the library.
//!
//! - Some of these are external --- e.g. a parse error reports an issue with a formula string given to the builder.
//! - Some of these are expected on request --- e.g. entailment within a configured pass limit may report the limit was hit.
//! - Some of these are very unlikely to occur during use, and signal a broken invariant --- e.g. a selection error over a missing weight.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs or modules.
//! As such, throughout the library `err::{self}` is often used to prefix use of the types with `err::`.

/// The general error enum, wrapping specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Entailment(EntailmentError),
    Parse(ParseError),
    Remainder(RemainderError),
    Selection(SelectionError),
}

/// Noted errors in the atom database.
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

/// Noted errors during an entailment query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntailmentError {
    /// Resolution did not reach a fixpoint within the configured pass limit.
    ///
    /// No answer is implied --- in particular, this is never reported as 'not entailed'.
    PassLimitExceeded,
}

impl From<EntailmentError> for ErrorKind {
    fn from(e: EntailmentError) -> Self {
        ErrorKind::Entailment(e)
    }
}

/// Noted errors during parsing of a formula string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some non-empty string was required.
    Empty,

    /// A character with no role in any formula, at the given byte offset.
    UnexpectedCharacter(usize),

    /// A token which cannot begin or continue a formula at its position, at the given byte offset.
    UnexpectedToken(usize),

    /// The string ended while a subformula was still required.
    UnexpectedEnd,

    /// A complete formula was read, with further tokens remaining from the given byte offset.
    TrailingInput(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Noted errors during remainder generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemainderError {
    /// An entailment query over a candidate subset failed.
    Entailment(EntailmentError),

    /// Exact generation would examine more candidate subsets than the configured limit.
    SubsetLimitExceeded,
}

impl From<EntailmentError> for RemainderError {
    fn from(e: EntailmentError) -> Self {
        RemainderError::Entailment(e)
    }
}

impl From<RemainderError> for ErrorKind {
    fn from(e: RemainderError) -> Self {
        ErrorKind::Remainder(e)
    }
}

/// Noted errors during selection over remainders.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionError {
    /// A remainder member has no recorded weight.
    ///
    /// The weight map of a belief database covers its formula set, so this signals a broken invariant.
    /// Defaulting the weight instead would silently corrupt the entrenchment order, so the error is fatal to the operation.
    MissingWeight,
}

impl From<SelectionError> for ErrorKind {
    fn from(e: SelectionError) -> Self {
        ErrorKind::Selection(e)
    }
}
