/*!
Clauses, aka. a set of literals, interpreted as the disjunction of those literals.

A clause is represented as an immutable, hashable *set* of literals, so a clause is order-irrelevant and duplicate-irrelevant.
In particular, structurally identical resolvents obtained along different derivation paths compare (and hash) equal, and so collapse when collected into a [ClauseSet].
The fixpoint test of [entailment](crate::procedures::entailment) relies on this.

- The empty clause is always false, and deriving it refutes the clause set it was derived from.
- Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

```rust
# use credence::structures::clause::Clause;
# use credence::structures::literal::Literal;
let p = Literal::new(0, true);
let q = Literal::new(1, true);

let p_or_q = Clause::from_iter([p, q]);
let not_q = Clause::unit(-q);

let resolvent = p_or_q.resolve(&not_q);
assert_eq!(resolvent, Some(Clause::unit(p)));
```
*/

use std::collections::BTreeSet;

use crate::structures::{atom::Atom, literal::Literal};

/// A set of literals, interpreted as the disjunction of those literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    /// The literals of the clause.
    literals: BTreeSet<Literal>,
}

/// A set of clauses, interpreted as the conjunction of those clauses.
pub type ClauseSet = BTreeSet<Clause>;

impl Clause {
    /// The clause containing exactly `literal`.
    pub fn unit(literal: Literal) -> Self {
        Clause {
            literals: BTreeSet::from([literal]),
        }
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether `literal` is a literal of the clause.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// An iterator over the literals of the clause, in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// An iterator over the atoms of the clause, in order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.literals.iter().map(|literal| literal.atom())
    }

    /// The union of the clause with `other`.
    pub fn union(&self, other: &Clause) -> Clause {
        Clause {
            literals: self.literals.union(&other.literals).copied().collect(),
        }
    }

    /// The binary resolvent of the clause with `other`, if the pair admits exactly one resolution step.
    ///
    /// The resolvent is the union of both clauses minus the complementary literal pair resolved on.
    /// A pair with *more than one* complementary literal pair admits no sound single resolution step, and the pair is not resolved.
    /// Likewise, a pair with no complementary literal pair is not resolved.
    pub fn resolve(&self, other: &Clause) -> Option<Clause> {
        let mut pivot: Option<Literal> = None;

        for literal in &self.literals {
            if other.literals.contains(&literal.negate()) {
                match pivot {
                    None => pivot = Some(*literal),
                    Some(_) => return None,
                }
            }
        }

        let pivot = pivot?;

        let mut literals: BTreeSet<Literal> = self
            .literals
            .union(&other.literals)
            .copied()
            .collect();
        literals.remove(&pivot);
        literals.remove(&pivot.negate());

        Some(Clause { literals })
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut literals = self.literals.iter();
        if let Some(literal) = literals.next() {
            write!(f, "{literal}")?;
            for literal in literals {
                write!(f, " {literal}")?;
            }
        } else {
            write!(f, "⊥")?;
        }
        Ok(())
    }
}
