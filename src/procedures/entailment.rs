/*!
Determines whether a set of formulas entails a formula, by resolution refutation.

# Overview

A set of formulas *B* entails a formula *f* exactly when *B* together with the negation of *f* is unsatisfiable.
So, [entails] collects the clausal form of every formula in *B* and of the negation of *f*, and searches for the empty clause under resolution:

1. For every unordered pair of clauses collected so far, attempt a resolution step (see [resolve](crate::structures::clause::Clause::resolve)).
   A step applies only when the pair has exactly one complementary literal pair, and the resolvent is the union of the pair minus those two literals.
2. If a resolvent is the empty clause, the clause set is refuted --- *B* entails *f*.
3. Otherwise, if every resolvent of the pass is already known, a fixpoint has been reached with nothing refuted --- *B* does not entail *f*.
4. Otherwise, merge the fresh resolvents and pass again.

# Termination

The clauses over a finite collection of atoms are finite, and each merge strictly grows the clause set, so a fixpoint (or the empty clause) is always reached.
Still, the number of passes may be exponential in the number of atoms --- an accepted cost.
Callers needing bounded latency may impose a pass limit through [the configuration](crate::config::Config::resolution_pass_limit), and hitting the limit is reported as an error rather than as an answer.

# Edge cases

- An empty *B* entails exactly the tautologies, as the negated query refutes (or fails to refute) itself.
- *f* a member of *B* is entailed with no special casing, as the clauses of *f* and of its negation refute each other.
*/

use crate::{
    config::Config,
    context::Context,
    misc::log::targets::{self},
    structures::{
        clause::ClauseSet,
        formula::{Formula, FormulaSet},
    },
    types::err::{self, ErrorKind},
};

/// Whether `beliefs` entails `query`, by resolution refutation.
///
/// Limited to `config.resolution_pass_limit` merge passes, when set.
pub fn entails(
    beliefs: &FormulaSet,
    query: &Formula,
    config: &Config,
) -> Result<bool, err::EntailmentError> {
    let mut clauses = ClauseSet::new();
    for belief in beliefs {
        clauses.extend(belief.clauses());
    }
    clauses.extend(query.negated().clauses());

    log::trace!(target: targets::RESOLUTION, "Refutation base of {} clauses", clauses.len());

    let mut passes: usize = 0;

    loop {
        let mut fresh = ClauseSet::new();

        for (index, left) in clauses.iter().enumerate() {
            for right in clauses.iter().skip(index + 1) {
                if let Some(resolvent) = left.resolve(right) {
                    if resolvent.is_empty() {
                        log::trace!(target: targets::RESOLUTION, "Empty clause after {passes} merges");
                        return Ok(true);
                    }

                    fresh.insert(resolvent);
                }
            }
        }

        if fresh.is_subset(&clauses) {
            log::trace!(target: targets::RESOLUTION, "Fixpoint of {} clauses after {passes} merges", clauses.len());
            return Ok(false);
        }

        passes += 1;
        if config.resolution_pass_limit.is_some_and(|limit| passes > limit) {
            log::info!(target: targets::RESOLUTION, "Pass limit of {passes} hit");
            return Err(err::EntailmentError::PassLimitExceeded);
        }

        clauses.extend(fresh);
    }
}

impl Context {
    /// Whether the formulas of the belief base entail `query`.
    pub fn entails(&self, query: &Formula) -> Result<bool, ErrorKind> {
        Ok(entails(self.belief_db.formulas(), query, &self.config)?)
    }
}
