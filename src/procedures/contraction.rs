/*!
Contracts a formula from a belief base.

# Overview

Contraction removes enough beliefs that the given formula is no longer entailed:

1. Generate the [remainders](crate::procedures::remainders) of the base with respect to the formula.
2. With no remainders, the contraction is vacuous --- the base either never entailed the formula, or the formula is a tautology no subset avoids --- and the base is untouched.
3. Otherwise, [select](crate::procedures::selection) the remainders of best weight, combine the selected remainders under the configured [tie rule](crate::config::TieRule), and retain exactly the combination.

Weights of removed beliefs are dropped with them, and weights of retained beliefs are untouched.

# Atomicity

The belief database is mutated only once remainder generation and selection have both succeeded.
An error from either --- a computation limit, or a broken weight invariant --- propagates with the base exactly as it was.
*/

use crate::{
    config::TieRule,
    context::Context,
    procedures::{remainders::remainders, selection::select},
    structures::formula::{Formula, FormulaSet},
    types::err::ErrorKind,
};

/// Ok results of a contraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractionOk {
    /// No remainders exist, so nothing was removed.
    ///
    /// Covers both a formula the base never entailed and a tautology, for which contraction is impossible.
    Vacuous,

    /// The base was replaced with the combination of the best remainders.
    Contracted,
}

impl Context {
    /// Remove enough beliefs that `formula` is no longer entailed, keeping the best remainders.
    pub fn contract(&mut self, formula: &Formula) -> Result<ContractionOk, ErrorKind> {
        let found = remainders(self.belief_db.formulas(), formula, &self.config)?;

        if found.is_empty() {
            self.counters.contractions += 1;
            self.counters.vacuous_contractions += 1;
            return Ok(ContractionOk::Vacuous);
        }

        let selected = select(found, self.belief_db.weights())?;

        let keep: FormulaSet = match self.config.tie_rule {
            TieRule::Union => selected.iter().flatten().cloned().collect(),

            TieRule::Intersection => {
                let mut keep = selected.first().cloned().unwrap_or_default();
                for remainder in selected.iter().skip(1) {
                    keep.retain(|belief| remainder.contains(belief));
                }
                keep
            }
        };

        self.belief_db.retain_only(&keep);
        self.counters.contractions += 1;

        Ok(ContractionOk::Contracted)
    }
}
