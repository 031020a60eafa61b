/*!
Formulas of propositional logic, built from atoms, negation, conjunction, disjunction, implication, and equivalence.

A formula is an immutable tree.
Formulas support structural equality, a total order, and a stable hash, so formulas may be used as elements of sets and as the keys of maps --- and the [belief database](crate::db::belief) uses them as both.

The operations a formula provides to the rest of the library are deliberately few:
- [negated](Formula::negated), for the refutation step of [entailment](crate::procedures::entailment) and the Levi identity of [revision](crate::procedures::revision).
- [clauses](Formula::clauses) (and [cnf](Formula::cnf)), for the clausal form consumed by resolution.
- [conjuncts](Formula::conjuncts) and [disjuncts](Formula::disjuncts), for walking normal forms.

# Example

```rust
# use credence::structures::formula::Formula;
let p = Formula::atom(0);
let q = Formula::atom(1);

let p_imp_q = Formula::imp(p.clone(), q.clone());

assert_eq!(p_imp_q.negated(), Formula::not(p_imp_q.clone()));
assert_eq!(p_imp_q.atoms().len(), 2);
```

# Notes

Atoms are internal atoms.
To build a formula from a string of external atoms and connectives, see [the builder](crate::builder).
*/

mod cnf;

use std::collections::BTreeSet;

use crate::structures::atom::Atom;

/// A formula of propositional logic.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    /// An atom.
    Atom(Atom),

    /// The negation of a formula.
    Not(Box<Formula>),

    /// The conjunction of two formulas.
    And(Box<Formula>, Box<Formula>),

    /// The disjunction of two formulas.
    Or(Box<Formula>, Box<Formula>),

    /// A material implication between two formulas.
    Imp(Box<Formula>, Box<Formula>),

    /// A material equivalence between two formulas.
    Iff(Box<Formula>, Box<Formula>),
}

/// A set of unique formulas, e.g. the formulas of a belief base, or a remainder.
pub type FormulaSet = BTreeSet<Formula>;

impl Formula {
    /// The formula asserting `atom`.
    pub fn atom(atom: Atom) -> Self {
        Formula::Atom(atom)
    }

    /// The negation of `formula`.
    #[allow(clippy::should_implement_trait)]
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    /// The conjunction of `left` and `right`.
    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    /// The disjunction of `left` and `right`.
    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    /// The implication from `antecedent` to `consequent`.
    pub fn imp(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Imp(Box::new(antecedent), Box::new(consequent))
    }

    /// The equivalence of `left` and `right`.
    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    /// The negation of the formula, as a fresh formula.
    pub fn negated(&self) -> Formula {
        Formula::Not(Box::new(self.clone()))
    }

    /// The conjuncts of the formula --- the maximal non-conjunction subformulas of a tree of conjunctions.
    ///
    /// A formula which is not a conjunction is its only conjunct.
    pub fn conjuncts(&self) -> Vec<&Formula> {
        match self {
            Formula::And(left, right) => {
                let mut conjuncts = left.conjuncts();
                conjuncts.append(&mut right.conjuncts());
                conjuncts
            }
            _ => vec![self],
        }
    }

    /// The disjuncts of the formula --- the maximal non-disjunction subformulas of a tree of disjunctions.
    ///
    /// A formula which is not a disjunction is its only disjunct.
    pub fn disjuncts(&self) -> Vec<&Formula> {
        match self {
            Formula::Or(left, right) => {
                let mut disjuncts = left.disjuncts();
                disjuncts.append(&mut right.disjuncts());
                disjuncts
            }
            _ => vec![self],
        }
    }

    /// The atoms appearing in the formula.
    pub fn atoms(&self) -> BTreeSet<Atom> {
        match self {
            Formula::Atom(atom) => BTreeSet::from([*atom]),

            Formula::Not(inner) => inner.atoms(),

            Formula::And(left, right)
            | Formula::Or(left, right)
            | Formula::Imp(left, right)
            | Formula::Iff(left, right) => {
                let mut atoms = left.atoms();
                atoms.append(&mut right.atoms());
                atoms
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Atom(atom) => write!(f, "{atom}"),
            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(atom) => write!(f, "~{atom}"),
                _ => write!(f, "~({})", inner),
            },
            Formula::And(left, right) => write!(f, "({left} & {right})"),
            Formula::Or(left, right) => write!(f, "({left} | {right})"),
            Formula::Imp(left, right) => write!(f, "({left} >> {right})"),
            Formula::Iff(left, right) => write!(f, "({left} <> {right})"),
        }
    }
}
