/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [entailment](crate::procedures::entailment).
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [remainder generation](crate::procedures::remainders).
    pub const REMAINDER: &str = "remainder";

    /// Logs related to [selection](crate::procedures::selection).
    pub const SELECTION: &str = "selection";

    /// Logs related to the [belief database](crate::db::belief).
    pub const BELIEF_DB: &str = "belief_db";
}
