/// Counters over the procedures applied to a context.
///
/// Procedure-level counts: a revision bumps the revision counter *and* the counters of the contraction and expansion it decomposes into.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// A count of expansions made.
    pub expansions: usize,

    /// A count of contractions made, vacuous or otherwise.
    pub contractions: usize,

    /// A count of contractions which left the base untouched.
    pub vacuous_contractions: usize,

    /// A count of revisions made.
    pub revisions: usize,
}
