use std::str::FromStr;

/// Variant rules for combining remainders tied for the best weight during contraction.
///
/// Selection keeps every remainder achieving the maximal weight sum, and the tie rule determines the single formula set the base is replaced with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TieRule {
    /// Replace the base with the union of the tied remainders.
    ///
    /// Retains the most beliefs, at the cost that the union of two remainders may re-entail the contracted formula.
    Union,

    /// Replace the base with the intersection of the tied remainders.
    ///
    /// The classical (full meet over the selection) choice: never re-entails, but may discard more than necessary.
    Intersection,
}

impl std::fmt::Display for TieRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Union => write!(f, "union"),
            Self::Intersection => write!(f, "intersection"),
        }
    }
}

impl FromStr for TieRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(Self::Union),

            "intersection" => Ok(Self::Intersection),

            _unknown_string => Err(()),
        }
    }
}
