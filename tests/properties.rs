//! Resolution refutation checked against brute-force truth tables, over a small random vocabulary.

use quickcheck::{Arbitrary, Gen, QuickCheck};

use credence::{
    config::Config,
    procedures::entailment::entails,
    structures::formula::{Formula, FormulaSet},
};

/// The vocabulary of the random formulas: atoms [0..ATOMS).
const ATOMS: u32 = 4;

/// A random formula of bounded depth over a bounded vocabulary.
#[derive(Clone, Debug)]
struct SmallFormula(Formula);

impl Arbitrary for SmallFormula {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallFormula(arbitrary_formula(g, 3))
    }
}

fn arbitrary_atom(g: &mut Gen) -> Formula {
    Formula::atom(*g.choose(&[0, 1, 2, 3]).unwrap())
}

fn arbitrary_formula(g: &mut Gen, depth: usize) -> Formula {
    if depth == 0 {
        return arbitrary_atom(g);
    }

    match *g.choose(&[0, 1, 2, 3, 4, 5]).unwrap() {
        0 => arbitrary_atom(g),
        1 => Formula::not(arbitrary_formula(g, depth - 1)),
        2 => Formula::and(
            arbitrary_formula(g, depth - 1),
            arbitrary_formula(g, depth - 1),
        ),
        3 => Formula::or(
            arbitrary_formula(g, depth - 1),
            arbitrary_formula(g, depth - 1),
        ),
        4 => Formula::imp(
            arbitrary_formula(g, depth - 1),
            arbitrary_formula(g, depth - 1),
        ),
        _ => Formula::iff(
            arbitrary_formula(g, depth - 1),
            arbitrary_formula(g, depth - 1),
        ),
    }
}

/// The truth value of `formula` on `valuation`, indexed by atom.
fn eval(formula: &Formula, valuation: &[bool]) -> bool {
    match formula {
        Formula::Atom(atom) => valuation[*atom as usize],
        Formula::Not(inner) => !eval(inner, valuation),
        Formula::And(left, right) => eval(left, valuation) && eval(right, valuation),
        Formula::Or(left, right) => eval(left, valuation) || eval(right, valuation),
        Formula::Imp(antecedent, consequent) => {
            !eval(antecedent, valuation) || eval(consequent, valuation)
        }
        Formula::Iff(left, right) => eval(left, valuation) == eval(right, valuation),
    }
}

/// Whether every valuation satisfying all of `beliefs` satisfies `query`, by exhaustion.
fn truth_table_entails(beliefs: &FormulaSet, query: &Formula) -> bool {
    for mask in 0..(1_u32 << ATOMS) {
        let valuation: Vec<bool> = (0..ATOMS).map(|atom| mask & (1 << atom) != 0).collect();

        if beliefs.iter().all(|belief| eval(belief, &valuation)) && !eval(query, &valuation) {
            return false;
        }
    }

    true
}

fn resolution_agrees(beliefs: Vec<SmallFormula>, query: SmallFormula) -> bool {
    let beliefs: FormulaSet = beliefs
        .into_iter()
        .take(3)
        .map(|formula| formula.0)
        .collect();

    match entails(&beliefs, &query.0, &Config::default()) {
        Ok(answer) => answer == truth_table_entails(&beliefs, &query.0),
        Err(_) => false,
    }
}

#[test]
fn resolution_agrees_with_truth_tables() {
    QuickCheck::new()
        .tests(100)
        .quickcheck(resolution_agrees as fn(Vec<SmallFormula>, SmallFormula) -> bool);
}
