/*!
A database of 'atom related' things, accessed via methods on an [AtomDB] struct.

Things include:
- Internal and external name maps, for reading and writing [Atom](crate::structures::atom::Atom)s.
- Rendering of formulas with external names, for interaction.

Internally a formula is built over plain numeric atoms, and nothing in the [procedures](crate::procedures) touches a name.
The atom database is the single place the two representations meet.
*/

use std::collections::HashMap;

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        formula::Formula,
    },
    types::err::AtomDBError,
};

/// The atom database.
#[derive(Debug, Default)]
pub struct AtomDB {
    /// The external name of each atom, indexed by the atom.
    names: Vec<String>,

    /// The atom of each external name.
    indicies: HashMap<String, Atom>,
}

impl AtomDB {
    /// A fresh, empty atom database.
    pub fn new() -> Self {
        AtomDB::default()
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// A fresh atom named `name`, or an error if all atoms are in use.
    ///
    /// No check is made against existing names --- for the name-aware variant see [atom_or_fresh](AtomDB::atom_or_fresh).
    pub fn fresh_atom(&mut self, name: &str) -> Result<Atom, AtomDBError> {
        if self.names.len() > ATOM_MAX as usize {
            return Err(AtomDBError::AtomsExhausted);
        }

        let atom = self.names.len() as Atom;
        self.names.push(name.to_owned());
        self.indicies.insert(name.to_owned(), atom);
        Ok(atom)
    }

    /// The atom named `name`, if any.
    pub fn atom_representing(&self, name: &str) -> Option<Atom> {
        self.indicies.get(name).copied()
    }

    /// The atom named `name`, created fresh if the name is new to the database.
    pub fn atom_or_fresh(&mut self, name: &str) -> Result<Atom, AtomDBError> {
        match self.atom_representing(name) {
            Some(atom) => Ok(atom),
            None => self.fresh_atom(name),
        }
    }

    /// The external name of `atom`, if any.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }

    /// A string of `formula` with external atom names, parenthesised at each composite subformula.
    ///
    /// An atom missing from the database is written as `#a` for internal atom `a`.
    pub fn formula_string(&self, formula: &Formula) -> String {
        match formula {
            Formula::Atom(atom) => match self.name_of(*atom) {
                Some(name) => name.to_owned(),
                None => format!("#{atom}"),
            },

            Formula::Not(inner) => match inner.as_ref() {
                Formula::Atom(_) => format!("~{}", self.formula_string(inner)),
                _ => format!("~({})", self.formula_string(inner)),
            },

            Formula::And(left, right) => {
                format!("({} & {})", self.formula_string(left), self.formula_string(right))
            }

            Formula::Or(left, right) => {
                format!("({} | {})", self.formula_string(left), self.formula_string(right))
            }

            Formula::Imp(antecedent, consequent) => {
                format!(
                    "({} >> {})",
                    self.formula_string(antecedent),
                    self.formula_string(consequent)
                )
            }

            Formula::Iff(left, right) => {
                format!("({} <> {})", self.formula_string(left), self.formula_string(right))
            }
        }
    }
}
