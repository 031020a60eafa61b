use std::str::FromStr;

/// Variant strategies for generating the remainders of a belief base with respect to a formula.
///
/// The strategies trade precision against cost, and which is in force is always an explicit configuration choice --- the library never mixes them, and never falls back from one to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RemainderStrategy {
    /// Candidates are the base minus a single belief, kept when non-empty and not entailing the formula.
    ///
    /// Linear in the size of the base, but only approximates maximality when avoiding the formula requires dropping more than one belief.
    SingleDrop,

    /// Candidates are every subset of the base, with the survivors filtered to the maximal ones.
    ///
    /// Matches the classical remainder-set definition exactly, at a cost exponential in the size of the base.
    Exact,
}

impl std::fmt::Display for RemainderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleDrop => write!(f, "single-drop"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for RemainderStrategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single-drop" | "single_drop" => Ok(Self::SingleDrop),

            "exact" => Ok(Self::Exact),

            _unknown_string => Err(()),
        }
    }
}
