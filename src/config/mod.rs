/*!
Configuration of a context.

All configuration for a context is contained within the context, set up via [Context::from_config](crate::context::Context::from_config).
The procedures read whichever parts of the configuration concern them, and no configuration is revised mid-operation.

The two limits are *externally imposed* bounds on otherwise-complete computations.
When a limit is hit the operation reports a limit error and the belief base is left untouched --- an answer within a limit is never approximated.
*/

mod remainders;
pub use remainders::RemainderStrategy;

mod ties;
pub use ties::TieRule;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Strategy for generating remainders during contraction.
    pub remainder_strategy: RemainderStrategy,

    /// Rule for combining remainders tied for the best weight during contraction.
    pub tie_rule: TieRule,

    /// An upper bound on the number of merge passes made during a single resolution refutation, if given.
    ///
    /// A pass resolves every clause pair and merges any fresh resolvents; refutations which neither close nor reach a fixpoint within the bound report [PassLimitExceeded](crate::types::err::EntailmentError::PassLimitExceeded).
    pub resolution_pass_limit: Option<usize>,

    /// An upper bound on the number of candidate subsets examined by exact remainder generation, if given.
    ///
    /// A base of *n* beliefs has 2ⁿ candidate subsets; bases too large for the bound report [SubsetLimitExceeded](crate::types::err::RemainderError::SubsetLimitExceeded).
    pub remainder_subset_limit: Option<usize>,
}

impl Default for Config {
    /// The default configuration mirrors the reference behavior of the library: single-drop remainders, union on ties, and no limits.
    fn default() -> Self {
        Config {
            remainder_strategy: RemainderStrategy::SingleDrop,
            tie_rule: TieRule::Union,
            resolution_pass_limit: None,
            remainder_subset_limit: None,
        }
    }
}
