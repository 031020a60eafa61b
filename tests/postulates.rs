use credence::{
    config::Config,
    context::Context,
    procedures::contraction::ContractionOk,
    structures::formula::FormulaSet,
    types::err::ErrorKind,
};

/// A context over the base {p, q} with weights {p: 0.8, q: 0.2}.
fn p_q_context() -> Context {
    let mut ctx = Context::from_config(Config::default());

    let p = ctx.formula_from_string("p").unwrap();
    let q = ctx.formula_from_string("q").unwrap();

    ctx.expand(p, 0.8);
    ctx.expand(q, 0.2);

    ctx
}

mod expansion {

    use super::*;

    #[test]
    fn idempotent_with_updated_weight() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.formula_from_string("p").unwrap();

        ctx.expand(p.clone(), 0.3);
        ctx.expand(p.clone(), 0.9);

        assert_eq!(ctx.belief_db.count(), 1);
        assert_eq!(ctx.belief_db.weight_of(&p), Some(0.9));
        assert!(ctx.belief_db.coherent());
    }
}

mod contraction {

    use super::*;

    #[test]
    fn vacuous_when_not_entailed() {
        let mut ctx = p_q_context();

        let r = ctx.formula_from_string("r").unwrap();
        let before = ctx.belief_db.formulas().clone();

        assert_eq!(ctx.contract(&r), Ok(ContractionOk::Vacuous));
        assert_eq!(ctx.belief_db.formulas(), &before);
        assert!(ctx.belief_db.coherent());
    }

    #[test]
    fn vacuous_on_tautology() {
        let mut ctx = p_q_context();

        let excluded_middle = ctx.formula_from_string("p | ~p").unwrap();
        let before = ctx.belief_db.formulas().clone();

        assert_eq!(ctx.contract(&excluded_middle), Ok(ContractionOk::Vacuous));
        assert_eq!(ctx.belief_db.formulas(), &before);
    }

    #[test]
    fn inclusion() {
        let mut ctx = p_q_context();

        let before = ctx.belief_db.formulas().clone();

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Contracted));

        assert!(ctx.belief_db.formulas().is_subset(&before));
        assert!(ctx.belief_db.coherent());
    }

    #[test]
    fn contracted_formula_no_longer_entailed() {
        let mut ctx = p_q_context();

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Contracted));

        assert_eq!(ctx.entails(&p), Ok(false));
    }

    #[test]
    fn weights_of_removed_beliefs_dropped() {
        let mut ctx = p_q_context();

        let p = ctx.formula_from_string("p").unwrap();
        let q = ctx.formula_from_string("q").unwrap();

        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Contracted));

        assert_eq!(ctx.belief_db.weight_of(&p), None);
        assert_eq!(ctx.belief_db.weight_of(&q), Some(0.2));
        assert!(ctx.belief_db.coherent());
    }

    #[test]
    fn recovery_by_expansion() {
        let mut ctx = p_q_context();

        let before = ctx.belief_db.formulas().clone();

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Contracted));
        ctx.expand(p, 0.8);

        assert!(ctx.belief_db.formulas().is_superset(&before));
    }

    #[test]
    fn empty_base_noop() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.contract(&p), Ok(ContractionOk::Vacuous));
        assert!(ctx.belief_db.is_empty());
    }
}

mod revision {

    use super::*;

    #[test]
    fn success() {
        let mut ctx = p_q_context();

        let not_p = ctx.formula_from_string("~p").unwrap();
        assert!(ctx.revise(not_p.clone(), 0.5).is_ok());

        assert_eq!(ctx.entails(&not_p), Ok(true));
    }

    #[test]
    fn independent_formula_retains_base() {
        let mut ctx = p_q_context();

        // {p, q} does not entail ~r, so the contraction step is vacuous.
        let r = ctx.formula_from_string("r").unwrap();
        assert_eq!(ctx.revise(r.clone(), 0.5), Ok(ContractionOk::Vacuous));

        let p = ctx.formula_from_string("p").unwrap();
        let q = ctx.formula_from_string("q").unwrap();

        let expected = FormulaSet::from([p, q, r.clone()]);
        assert_eq!(ctx.belief_db.formulas(), &expected);
        assert_eq!(ctx.belief_db.weight_of(&r), Some(0.5));
    }

    #[test]
    fn contradicting_formula_displaces_support() {
        let mut ctx = p_q_context();

        let not_p = ctx.formula_from_string("~p").unwrap();
        assert_eq!(ctx.revise(not_p.clone(), 0.5), Ok(ContractionOk::Contracted));

        let p = ctx.formula_from_string("p").unwrap();
        let q = ctx.formula_from_string("q").unwrap();

        let expected = FormulaSet::from([q, not_p]);
        assert_eq!(ctx.belief_db.formulas(), &expected);
        assert!(!ctx.belief_db.contains(&p));
        assert!(ctx.belief_db.coherent());
    }

    #[test]
    fn first_belief_plainly_added() {
        let mut ctx = Context::from_config(Config::default());

        let p = ctx.formula_from_string("p").unwrap();
        assert_eq!(ctx.revise(p.clone(), 0.9), Ok(ContractionOk::Vacuous));

        assert!(ctx.belief_db.contains(&p));
        assert_eq!(ctx.belief_db.count(), 1);
    }

    #[test]
    fn failed_contraction_step_leaves_base() {
        let config = Config {
            resolution_pass_limit: Some(0),
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

        for belief in ["p >> q", "q >> r", "r >> s", "p"] {
            let formula = ctx.formula_from_string(belief).unwrap();
            ctx.expand(formula, 0.5);
        }

        let before = ctx.belief_db.formulas().clone();

        // Contracting ~~s requires refuting s, which the pass limit cuts short.
        let not_s = ctx.formula_from_string("~s").unwrap();
        let outcome = ctx.revise(not_s.clone(), 0.5);

        assert!(matches!(outcome, Err(ErrorKind::Remainder(_))));
        assert_eq!(ctx.belief_db.formulas(), &before);
        assert!(!ctx.belief_db.contains(&not_s));
        assert!(ctx.belief_db.coherent());
    }
}
