/*!
Revises a belief base with a formula.

# Overview

Revision accommodates a formula which may contradict the base, by the Levi identity:

1. [Contract](crate::procedures::contraction) the *negation* of the formula, clearing whatever support the base had for rejecting it.
2. [Expand](crate::procedures::expansion) with the formula at the given weight.

As expansion is unconditional, the formula is always believed afterwards, even when step 1 was vacuous because the negation is a tautology --- in which case the base gains a belief it cannot coherently hold, deliberately.
No post-hoc coherence check is run.

# Atomicity

A failed contraction step propagates before the expansion step, leaving the base exactly as it was.
*/

use crate::{
    context::Context,
    procedures::contraction::ContractionOk,
    structures::{formula::Formula, weight::Weight},
    types::err::ErrorKind,
};

impl Context {
    /// Accommodate `formula` at `weight`, contracting its negation first.
    ///
    /// The result of the contraction step is returned, a successful revision always leaves `formula` believed.
    pub fn revise(&mut self, formula: Formula, weight: Weight) -> Result<ContractionOk, ErrorKind> {
        let negation = formula.negated();
        let contraction = self.contract(&negation)?;

        self.expand(formula, weight);
        self.counters.revisions += 1;

        Ok(contraction)
    }
}
