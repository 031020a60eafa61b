/*!
Tools for building the formulas of a context.

# Basic methods

A formula may be built programmatically from the [constructors](crate::structures::formula::Formula), over atoms interned in the [atom database](crate::db::atom):

```rust
# use credence::config::Config;
# use credence::context::Context;
# use credence::structures::formula::Formula;
let mut the_context = Context::from_config(Config::default());

let rain = the_context.atom_db.atom_or_fresh("rain").unwrap();
let wet = the_context.atom_db.atom_or_fresh("wet").unwrap();

let rain_imp_wet = Formula::imp(Formula::atom(rain), Formula::atom(wet));
the_context.expand(rain_imp_wet, 0.9);
```

# Strings

Alternatively, [formula_from_string](crate::context::Context::formula_from_string) reads the same formula from text:

```rust
# use credence::config::Config;
# use credence::context::Context;
let mut the_context = Context::from_config(Config::default());

let rain_imp_wet = the_context.formula_from_string("rain >> wet").unwrap();
the_context.expand(rain_imp_wet, 0.9);
```

The syntax read:

| Connective  | Written | Binding                  |
|-------------|---------|--------------------------|
| negation    | `~`     | tightest                 |
| conjunction | `&`     |                          |
| disjunction | `\|`    |                          |
| implication | `>>`    | right associative        |
| equivalence | `<>`    | loosest, right associative |

together with parentheses, and atoms written as an ascii letter or underscore followed by any mix of ascii letters, digits, and underscores.
Fresh atom names are interned on first sight.
*/

mod text;
pub use text::parse_formula;
