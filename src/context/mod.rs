/*!
The context --- to which beliefs are added and within which belief change takes place, etc.

A context bundles:
- A [configuration](crate::config).
- A [belief database](crate::db::belief) holding the formulas and weights of the base.
- An [atom database](crate::db::atom) holding external atom names.
- [Counters](Counters) over the procedures applied.

Contexts are built with a configuration, and the belief-change procedures --- [expand](Context::expand), [contract](Context::contract), [revise](Context::revise), and the [entails](Context::entails) query --- are implemented on the context in [procedures](crate::procedures).
Each procedure runs to completion before another may start, and a procedure which fails leaves the belief base exactly as it was.

A context is passed explicitly wherever one is needed.
Nothing in the library keeps ambient belief state, so independent contexts may be used side by side.

# Example

```rust
# use credence::config::Config;
# use credence::context::Context;
let mut the_context = Context::from_config(Config::default());

let p = the_context.formula_from_string("p").unwrap();
let p_imp_q = the_context.formula_from_string("p >> q").unwrap();

the_context.expand(p, 0.8);
the_context.expand(p_imp_q, 0.6);

let q = the_context.formula_from_string("q").unwrap();
assert_eq!(the_context.entails(&q), Ok(true));
```
*/

mod counters;
pub use counters::Counters;

use crate::{
    builder,
    config::Config,
    db::{atom::AtomDB, belief::BeliefDB},
    structures::formula::Formula,
    types::err::ErrorKind,
};

/// The context: a belief base, its configuration, and its external atom names.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters over the procedures applied to the context.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The belief database.
    /// See [db::belief](crate::db::belief) for details.
    pub belief_db: BeliefDB,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,

            counters: Counters::default(),

            atom_db: AtomDB::new(),
            belief_db: BeliefDB::new(),
        }
    }

    /// A formula parsed from `string`, with fresh atoms interned in the atom database as needed.
    ///
    /// See [the builder](crate::builder) for the syntax read.
    pub fn formula_from_string(&mut self, string: &str) -> Result<Formula, ErrorKind> {
        builder::parse_formula(string, &mut self.atom_db)
    }

    /// A string of `formula` with external atom names.
    pub fn formula_string(&self, formula: &Formula) -> String {
        self.atom_db.formula_string(formula)
    }
}
