/*!
(The internal representation of) an atom (aka. a propositional variable).

Atoms are the things a belief is ultimately about, and each formula of a belief base bottoms out in atoms.
- 'Internal' atoms are used internal to a context.
- 'External' atoms are used during external interaction with a context, e.g. when a formula is given as a string. \
  External atoms are a string beginning with an ascii letter or underscore, followed by any mix of ascii letters, digits, and underscores. \
  Examples: `p`, `rain`, `atom_21`.

Each (internal) atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

In other words, the atoms of a context are [0..*m*) for some *m*.
This representation allows atoms to be used as the indicies of a structure, e.g. `names[a]`, without taking too much space.

# Notes
- The external representation of an atom is stored in the atom database.
*/

/// An atom, aka. a propositional variable.
pub type Atom = u32;

/// The maximum instance of an atom.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
