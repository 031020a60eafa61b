use credence::{
    config::{Config, RemainderStrategy, TieRule},
    context::Context,
    procedures::contraction::ContractionOk,
    structures::formula::FormulaSet,
    types::err::{self, ErrorKind},
};

fn exact_config() -> Config {
    Config {
        remainder_strategy: RemainderStrategy::Exact,
        ..Config::default()
    }
}

mod strategy_split {

    use super::*;

    // Giving up p | q requires dropping both p and q, which no single-drop candidate does.

    #[test]
    fn single_drop_cannot_contract_disjunction() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.formula_from_string("p").unwrap();
        let q = ctx.formula_from_string("q").unwrap();
        ctx.expand(p.clone(), 0.8);
        ctx.expand(q.clone(), 0.2);

        let p_or_q = ctx.formula_from_string("p | q").unwrap();
        assert_eq!(ctx.contract(&p_or_q), Ok(ContractionOk::Vacuous));

        assert_eq!(ctx.belief_db.formulas(), &FormulaSet::from([p, q]));
    }

    #[test]
    fn exact_contracts_disjunction() {
        let mut ctx = Context::from_config(exact_config());

        let p = ctx.formula_from_string("p").unwrap();
        let q = ctx.formula_from_string("q").unwrap();
        ctx.expand(p, 0.8);
        ctx.expand(q, 0.2);

        let p_or_q = ctx.formula_from_string("p | q").unwrap();
        assert_eq!(ctx.contract(&p_or_q), Ok(ContractionOk::Contracted));

        assert!(ctx.belief_db.is_empty());
        assert!(ctx.belief_db.coherent());
    }

    #[test]
    fn single_drop_cannot_empty_a_singleton() {
        let mut ctx = Context::from_config(Config::default());

        let p_and_q = ctx.formula_from_string("p & q").unwrap();
        ctx.expand(p_and_q.clone(), 0.9);

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Vacuous));

        assert!(ctx.belief_db.contains(&p_and_q));
    }

    #[test]
    fn exact_empties_a_singleton() {
        let mut ctx = Context::from_config(exact_config());

        let p_and_q = ctx.formula_from_string("p & q").unwrap();
        ctx.expand(p_and_q, 0.9);

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Contracted));

        assert!(ctx.belief_db.is_empty());
    }

    #[test]
    fn strategies_agree_on_weighted_choice() {
        for config in [Config::default(), exact_config()] {
            let mut ctx = Context::from_config(config);

            let p = ctx.formula_from_string("p").unwrap();
            let p_imp_q = ctx.formula_from_string("p >> q").unwrap();
            let r = ctx.formula_from_string("r").unwrap();

            ctx.expand(p.clone(), 0.9);
            ctx.expand(p_imp_q, 0.1);
            ctx.expand(r.clone(), 0.5);

            // q is supported only through p with p >> q, and p outweighs the implication.
            let q = ctx.formula_from_string("q").unwrap();
            assert_eq!(ctx.contract(&q), Ok(ContractionOk::Contracted));

            assert_eq!(ctx.belief_db.formulas(), &FormulaSet::from([p, r]));
            assert!(ctx.belief_db.coherent());
        }
    }
}

mod tie_rules {

    use super::*;

    #[test]
    fn union_keeps_tied_remainders() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.formula_from_string("p").unwrap();
        let q = ctx.formula_from_string("q").unwrap();
        ctx.expand(p.clone(), 0.5);
        ctx.expand(q.clone(), 0.5);

        // The remainders {p} and {q} tie, and their union restores the whole base.
        let p_and_q = ctx.formula_from_string("p & q").unwrap();
        assert_eq!(ctx.contract(&p_and_q), Ok(ContractionOk::Contracted));

        assert_eq!(ctx.belief_db.formulas(), &FormulaSet::from([p, q]));
    }

    #[test]
    fn intersection_discards_tied_remainders() {
        let config = Config {
            tie_rule: TieRule::Intersection,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        let p = ctx.formula_from_string("p").unwrap();
        let q = ctx.formula_from_string("q").unwrap();
        ctx.expand(p, 0.5);
        ctx.expand(q, 0.5);

        let p_and_q = ctx.formula_from_string("p & q").unwrap();
        assert_eq!(ctx.contract(&p_and_q), Ok(ContractionOk::Contracted));

        assert!(ctx.belief_db.is_empty());
        assert!(ctx.belief_db.coherent());
    }

    #[test]
    fn unbalanced_weights_break_the_tie() {
        for tie_rule in [TieRule::Union, TieRule::Intersection] {
            let config = Config {
                tie_rule,
                ..Config::default()
            };
            let mut ctx = Context::from_config(config);

            let p = ctx.formula_from_string("p").unwrap();
            let q = ctx.formula_from_string("q").unwrap();
            ctx.expand(p.clone(), 0.8);
            ctx.expand(q, 0.2);

            // With a single best remainder the tie rule is irrelevant.
            let p_and_q = ctx.formula_from_string("p & q").unwrap();
            assert_eq!(ctx.contract(&p_and_q), Ok(ContractionOk::Contracted));

            assert_eq!(ctx.belief_db.formulas(), &FormulaSet::from([p.clone()]));
        }
    }
}

mod limits {

    use super::*;

    #[test]
    fn subset_limit_reported() {
        let config = Config {
            remainder_strategy: RemainderStrategy::Exact,
            remainder_subset_limit: Some(4),
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        for belief in ["p", "q", "r"] {
            let formula = ctx.formula_from_string(belief).unwrap();
            ctx.expand(formula, 0.5);
        }

        let before = ctx.belief_db.formulas().clone();

        // A base of three beliefs has eight candidate subsets.
        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(
            ctx.contract(&p),
            Err(ErrorKind::Remainder(err::RemainderError::SubsetLimitExceeded))
        );

        assert_eq!(ctx.belief_db.formulas(), &before);
    }

    #[test]
    fn subset_limit_permits_small_bases() {
        let config = Config {
            remainder_strategy: RemainderStrategy::Exact,
            remainder_subset_limit: Some(8),
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        for belief in ["p", "q", "r"] {
            let formula = ctx.formula_from_string(belief).unwrap();
            ctx.expand(formula, 0.5);
        }

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Contracted));
        assert!(!ctx.belief_db.contains(&p));
    }
}
