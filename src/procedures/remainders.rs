/*!
Generates the remainders of a belief base with respect to a formula.

# Overview

A remainder of a base *B* with respect to a formula *f* is a maximal subset of *B* which does not entail *f*.
The remainders are the candidates a [contraction](crate::procedures::contraction) may retain, and [selection](crate::procedures::selection) orders them by weight.

Two strategies are implemented, dispatched on the [explicit configuration tag](crate::config::RemainderStrategy) --- never mixed, and never fallen back between:
- [SingleDrop](crate::config::RemainderStrategy::SingleDrop) examines the linear family of candidates missing one belief each.
- [Exact](crate::config::RemainderStrategy::Exact) examines every subset of the base and filters the survivors to the maximal ones, matching the classical definition at exponential cost.

# Vacuity

No remainders are generated when the base is empty, or when the base does not entail *f* --- contracting a formula the base never supported is a no-op for the caller.
Likewise no candidate survives when *f* is a tautology, as every subset entails it.
*/

use crate::{
    config::{Config, RemainderStrategy},
    misc::log::targets::{self},
    procedures::entailment,
    structures::formula::{Formula, FormulaSet},
    types::err::{self},
};

/// Every maximal subset of `beliefs` not entailing `formula`, to the precision of the configured strategy.
///
/// Empty when `beliefs` is empty, does not entail `formula`, or has no subset avoiding `formula`.
pub fn remainders(
    beliefs: &FormulaSet,
    formula: &Formula,
    config: &Config,
) -> Result<Vec<FormulaSet>, err::RemainderError> {
    if beliefs.is_empty() {
        return Ok(Vec::new());
    }

    if !entailment::entails(beliefs, formula, config)? {
        log::trace!(target: targets::REMAINDER, "{formula} is not entailed, no remainders");
        return Ok(Vec::new());
    }

    let found = match config.remainder_strategy {
        RemainderStrategy::SingleDrop => single_drop(beliefs, formula, config)?,
        RemainderStrategy::Exact => exact(beliefs, formula, config)?,
    };

    log::trace!(target: targets::REMAINDER, "{} remainders of a base of {}", found.len(), beliefs.len());
    Ok(found)
}

/// The candidates `beliefs − {b}` for each belief `b`, kept when non-empty and not entailing `formula`.
fn single_drop(
    beliefs: &FormulaSet,
    formula: &Formula,
    config: &Config,
) -> Result<Vec<FormulaSet>, err::RemainderError> {
    let mut found = Vec::new();

    for belief in beliefs {
        let mut candidate = beliefs.clone();
        candidate.remove(belief);

        if candidate.is_empty() {
            continue;
        }

        if !entailment::entails(&candidate, formula, config)? {
            found.push(candidate);
        }
    }

    Ok(found)
}

/// Every subset of `beliefs` not entailing `formula`, filtered to the maximal survivors.
///
/// Limited to `config.remainder_subset_limit` candidate subsets, when set.
fn exact(
    beliefs: &FormulaSet,
    formula: &Formula,
    config: &Config,
) -> Result<Vec<FormulaSet>, err::RemainderError> {
    let members: Vec<&Formula> = beliefs.iter().collect();

    // Subsets are enumerated by u128 masks, which bounds the representable base.
    if members.len() >= 128 {
        return Err(err::RemainderError::SubsetLimitExceeded);
    }
    let subsets: u128 = 1 << members.len();

    if config
        .remainder_subset_limit
        .is_some_and(|limit| subsets > limit as u128)
    {
        log::info!(target: targets::REMAINDER, "Subset limit hit by a base of {}", members.len());
        return Err(err::RemainderError::SubsetLimitExceeded);
    }

    let mut survivors: Vec<FormulaSet> = Vec::new();

    for mask in 0..subsets {
        let subset: FormulaSet = members
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, member)| (*member).clone())
            .collect();

        if !entailment::entails(&subset, formula, config)? {
            survivors.push(subset);
        }
    }

    let maximal: Vec<FormulaSet> = survivors
        .iter()
        .filter(|survivor| {
            !survivors
                .iter()
                .any(|other| survivor.len() < other.len() && survivor.is_subset(other))
        })
        .cloned()
        .collect();

    Ok(maximal)
}
