/*!
Literals are atoms paired with a (boolean) polarity.

A literal with polarity `true` asserts its atom, and a literal with polarity `false` asserts the negation of its atom.
Two literals are *complementary* when they share an atom and differ in polarity, and the resolution rule (see [Clause::resolve](crate::structures::clause::Clause::resolve)) applies only to clause pairs with exactly one complementary literal pair.

Literals are ordered by atom and then polarity, with the (Rust default) ordering of `false` being (strictly) less than `true`.
Literals are hashable in order to allow for straightforward use as elements of sets, and, in particular, as the elements of [clause](crate::structures::clause)s.

```rust
# use credence::structures::literal::Literal;
let literal = Literal::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.atom(), 79);
assert!(!literal.negate().polarity());
assert_eq!(-literal, literal.negate());
assert!(literal.complements(&literal.negate()));
```
*/

use crate::structures::atom::Atom;

/// An atom paired with a (boolean) polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// Whether `other` is the negation of the literal.
    pub fn complements(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}
