//! Conversion of a formula to conjunctive normal form.
//!
//! The conversion is distributive rather than equisatisfiable: no fresh atoms are introduced, and the result is logically *equivalent* to the input.
//! Distribution is exponential in the worst case, which is accepted --- the clause sets a belief base gives rise to are small.
//!
//! [clauses](Formula::clauses) is the operative entry point, producing the set-of-sets clausal form consumed by [entailment](crate::procedures::entailment).
//! [cnf](Formula::cnf) rebuilds a formula tree from the clausal form, for display and for callers wanting a formula-shaped normal form.
//!
//! The clausal form is computed by a single polarity-tracking recursion, so every connective (negation included) is handled without an intermediate negation-normal-form pass.

use crate::structures::{
    clause::{Clause, ClauseSet},
    formula::Formula,
    literal::Literal,
};

impl Formula {
    /// The clausal form of the formula: a set of clauses whose conjunction is equivalent to the formula.
    ///
    /// A conjunct with one disjunct becomes a singleton clause, and a bare (possibly negated) atom becomes a unit clause.
    pub fn clauses(&self) -> ClauseSet {
        clauses_of(self, false)
    }

    /// The formula in conjunctive normal form, as a formula.
    ///
    /// The tree returned is built only from conjunction, disjunction, negation, and atom nodes, with negation applied to atoms alone.
    pub fn cnf(&self) -> Formula {
        let clause_formulas = self.clauses().into_iter().filter_map(|clause| {
            clause
                .literals()
                .map(literal_formula)
                .reduce(Formula::or)
        });

        // clauses_of yields no empty clause, so the reductions cover every clause and the fallback is never taken.
        clause_formulas
            .reduce(Formula::and)
            .unwrap_or_else(|| self.clone())
    }
}

/// The formula asserting `literal`.
fn literal_formula(literal: &Literal) -> Formula {
    match literal.polarity() {
        true => Formula::Atom(literal.atom()),
        false => Formula::not(Formula::Atom(literal.atom())),
    }
}

/// The clausal form of `formula`, or of the negation of `formula` when `negated` holds.
///
/// Polarity tracking keeps the recursion total: negation flips `negated` rather than requiring the subformula to have some particular shape.
fn clauses_of(formula: &Formula, negated: bool) -> ClauseSet {
    match (formula, negated) {
        (Formula::Atom(atom), polarity) => {
            ClauseSet::from([Clause::unit(Literal::new(*atom, !polarity))])
        }

        (Formula::Not(inner), _) => clauses_of(inner, !negated),

        // A conjunction contributes the clauses of both conjuncts.
        (Formula::And(left, right), false) => {
            let mut clauses = clauses_of(left, false);
            clauses.extend(clauses_of(right, false));
            clauses
        }

        // ~(a & b) ≡ ~a | ~b, and a disjunction distributes over the clauses of its disjuncts.
        (Formula::And(left, right), true) => {
            cross(&clauses_of(left, true), &clauses_of(right, true))
        }

        (Formula::Or(left, right), false) => {
            cross(&clauses_of(left, false), &clauses_of(right, false))
        }

        // ~(a | b) ≡ ~a & ~b.
        (Formula::Or(left, right), true) => {
            let mut clauses = clauses_of(left, true);
            clauses.extend(clauses_of(right, true));
            clauses
        }

        // a >> b ≡ ~a | b.
        (Formula::Imp(antecedent, consequent), false) => {
            cross(&clauses_of(antecedent, true), &clauses_of(consequent, false))
        }

        // ~(a >> b) ≡ a & ~b.
        (Formula::Imp(antecedent, consequent), true) => {
            let mut clauses = clauses_of(antecedent, false);
            clauses.extend(clauses_of(consequent, true));
            clauses
        }

        // a <> b ≡ (~a | b) & (~b | a).
        (Formula::Iff(left, right), false) => {
            let mut clauses = cross(&clauses_of(left, true), &clauses_of(right, false));
            clauses.extend(cross(&clauses_of(right, true), &clauses_of(left, false)));
            clauses
        }

        // ~(a <> b) ≡ (a | b) & (~a | ~b).
        (Formula::Iff(left, right), true) => {
            let mut clauses = cross(&clauses_of(left, false), &clauses_of(right, false));
            clauses.extend(cross(&clauses_of(left, true), &clauses_of(right, true)));
            clauses
        }
    }
}

/// The pairwise unions of the clauses of `left` and the clauses of `right`.
///
/// Interpreted, the clausal form of the disjunction of the conjunctions `left` and `right` represent.
fn cross(left: &ClauseSet, right: &ClauseSet) -> ClauseSet {
    let mut clauses = ClauseSet::new();
    for left_clause in left {
        for right_clause in right {
            clauses.insert(left_clause.union(right_clause));
        }
    }
    clauses
}
