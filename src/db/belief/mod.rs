/*!
A database of the beliefs of a context, accessed via methods on a [BeliefDB] struct.

A belief is a formula paired with a [weight](crate::structures::weight).
The database stores:
- The set of unique formulas making up the belief base.
- A map from each formula to its weight.

# Invariant

The key set of the weight map always equals the formula set --- every belief has exactly one weight, and no orphaned weight persists after a belief is removed.
Every method upholds this, and [coherent](BeliefDB::coherent) checks it directly.
The [selection](crate::procedures::selection) procedure treats a violation as fatal rather than defaulting a weight.
*/

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        formula::{Formula, FormulaSet},
        weight::Weight,
    },
};

/// The belief database.
#[derive(Debug, Default)]
pub struct BeliefDB {
    /// The formulas of the belief base.
    formulas: FormulaSet,

    /// The weight of each formula of the belief base.
    weights: BTreeMap<Formula, Weight>,
}

impl BeliefDB {
    /// A fresh, empty belief database.
    pub fn new() -> Self {
        BeliefDB::default()
    }

    /// A count of beliefs in the database.
    pub fn count(&self) -> usize {
        self.formulas.len()
    }

    /// Whether the database holds no beliefs.
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Whether `formula` is a belief of the database.
    pub fn contains(&self, formula: &Formula) -> bool {
        self.formulas.contains(formula)
    }

    /// Record `formula` as a belief with weight `weight`.
    ///
    /// A formula already present keeps a single occurrence, with its weight overwritten.
    pub fn insert(&mut self, formula: Formula, weight: Weight) {
        log::trace!(target: targets::BELIEF_DB, "Insert {formula} with weight {weight}");

        self.formulas.insert(formula.clone());
        self.weights.insert(formula, weight);
    }

    /// Remove `formula` and its weight, returning whether `formula` was a belief of the database.
    pub fn remove(&mut self, formula: &Formula) -> bool {
        log::trace!(target: targets::BELIEF_DB, "Remove {formula}");

        self.weights.remove(formula);
        self.formulas.remove(formula)
    }

    /// The recorded weight of `formula`, if any.
    pub fn weight_of(&self, formula: &Formula) -> Option<Weight> {
        self.weights.get(formula).copied()
    }

    /// The formulas of the belief base.
    pub fn formulas(&self) -> &FormulaSet {
        &self.formulas
    }

    /// The weight map of the belief base.
    pub fn weights(&self) -> &BTreeMap<Formula, Weight> {
        &self.weights
    }

    /// An iterator over the beliefs of the database, as formula and weight pairs, in formula order.
    pub fn beliefs(&self) -> impl Iterator<Item = (&Formula, Weight)> {
        self.weights.iter().map(|(formula, weight)| (formula, *weight))
    }

    /// Retain exactly the beliefs in `keep`, dropping every other formula together with its weight.
    ///
    /// Weights of retained beliefs are untouched.
    pub fn retain_only(&mut self, keep: &FormulaSet) {
        for formula in self.formulas.difference(keep) {
            log::info!(target: targets::BELIEF_DB, "Contraction removes {formula}");
        }

        self.formulas.retain(|formula| keep.contains(formula));
        self.weights.retain(|formula, _| keep.contains(formula));
    }

    /// Whether the weight map covers exactly the formula set.
    pub fn coherent(&self) -> bool {
        self.weights.len() == self.formulas.len()
            && self.formulas.iter().all(|formula| self.weights.contains_key(formula))
    }
}
