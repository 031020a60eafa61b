//! A library for revising bases of propositional beliefs in accordance with the AGM postulates.
//!
//! credence maintains a *belief base* --- a set of propositional formulas, each weighted by how deeply it is held --- and supports adding, removing, and revising beliefs while preserving logical coherence, in the style of the AGM (Alchourrón–Gärdenfors–Makinson) account of belief change.
//!
//! credence is developed to help researchers, developers, or anyone curious, to investigate belief change, whether as a novice or through implementing novel ideas.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a [configuration](config), and beliefs may be added [programmatically](crate::structures::formula::Formula) or through the [text representation](builder) of a formula.
//!
//! Internally, and at a high-level, belief change is viewed in terms of a handful of [procedures] over a pair of databases:
//! - The formulas and weights of the base are stored in a [belief database](db::belief).
//! - External atom names are stored in an [atom database](db::atom).
//!
//! The procedures:
//! - [entails](crate::context::Context::entails) decides whether the base entails a formula, by resolution refutation.
//! - [expand](crate::context::Context::expand) records a belief, unconditionally.
//! - [contract](crate::context::Context::contract) removes enough beliefs that a formula is no longer entailed, keeping the [remainders](procedures::remainders) of best weight.
//! - [revise](crate::context::Context::revise) accommodates a possibly-contradicting belief by the Levi identity: contract the negation, then expand.
//!
//! Useful starting points, then, may be:
//! - The [entailment procedure](procedures::entailment) to inspect the resolution engine.
//! - The [contraction procedure](procedures::contraction) to inspect the dynamics of belief change.
//! - The [structures] to familiarise yourself with the abstract elements of belief change and their representation (formulas, clauses, etc.)
//! - The [configuration](config) to see what features are supported.
//!
//! # Example
//!
//! ```rust
//! # use credence::config::Config;
//! # use credence::context::Context;
//! # use credence::procedures::contraction::ContractionOk;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.formula_from_string("p").unwrap();
//! let q = the_context.formula_from_string("q").unwrap();
//!
//! the_context.expand(p.clone(), 0.8);
//! the_context.expand(q.clone(), 0.2);
//!
//! // Revising with ~p removes p, as {p, q} entails p.
//! let not_p = the_context.formula_from_string("~p").unwrap();
//! assert_eq!(the_context.revise(not_p.clone(), 0.5), Ok(ContractionOk::Contracted));
//!
//! assert!(!the_context.belief_db.contains(&p));
//! assert!(the_context.belief_db.contains(&q));
//! assert!(the_context.belief_db.contains(&not_p));
//! ```
//!
//! # Guiding principles
//!
//! - Each belief-change operation is atomic: a failed operation leaves the base exactly as it was.
//! - Expensive searches are bounded only on request, and a hit bound is an error, never a silently approximate answer.
//! - The exact-vs-approximate trade in remainder generation is an explicit, selectable [strategy](config::RemainderStrategy), as is the [rule](config::TieRule) for combining tied remainders.
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to resolution can be filtered with `RUST_LOG=resolution …` or,
//! - Logs of belief removals without clause-level detail can be found with `RUST_LOG=belief_db=info …`

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;
pub mod reports;
