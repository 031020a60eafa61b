/*!
Expands a belief base with a formula.

Expansion is the one belief-change procedure with no logic to it: the formula is recorded with its weight, unconditionally, with no entailment check and no regard for the coherence of the result.
A formula already believed keeps a single occurrence and takes the new weight.

For the variant which first makes room for the formula, see [revision](crate::procedures::revision).
*/

use crate::{
    context::Context,
    structures::{formula::Formula, weight::Weight},
};

impl Context {
    /// Unconditionally add `formula` to the belief base with weight `weight`.
    ///
    /// Always succeeds, and afterwards the base contains exactly one occurrence of `formula`, at `weight`.
    pub fn expand(&mut self, formula: Formula, weight: Weight) {
        self.belief_db.insert(formula, weight);
        self.counters.expansions += 1;
    }
}
