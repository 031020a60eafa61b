/*!
Reports for the context.
*/

/// High-level reports regarding an entailment query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The query is entailed by the belief base.
    Entailed,

    /// The query is not entailed by the belief base.
    NotEntailed,

    /// Whether the query is entailed is unknown, for some reason --- e.g. a computation limit was hit.
    Unknown,
}

impl From<bool> for Report {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Entailed,
            false => Self::NotEntailed,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entailed => write!(f, "Entailed"),
            Self::NotEntailed => write!(f, "Not entailed"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
