use figscore::config::ScoringRules;
use figscore::elements::BASIC_ELEMENTS;
use figscore::{score_routine, score_symbol, Scorer};
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_basic() -> impl Strategy<Value = String> {
    proptest::sample::select(BASIC_ELEMENTS.iter().map(|b| b.symbol.to_string()).collect::<Vec<_>>())
}

fn arb_complex() -> impl Strategy<Value = String> {
    "\\.?[-0-9]{1,4}[o</]?"
}

fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![arb_basic(), arb_complex()]
}

prop_compose! {
    fn arb_routine_pair()(
        symbols in proptest::collection::vec(arb_symbol(), 0..10)
    )(
        shuffled in Just(symbols.clone()).prop_shuffle(),
        symbols in Just(symbols)
    ) -> (Vec<String>, Vec<String>) {
        (symbols, shuffled)
    }
}

fn is_one_decimal(value: f64) -> bool {
    let scaled = value * 10.0;
    (scaled - scaled.round()).abs() < 1e-9
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_symbol_scoring_is_deterministic(symbol in ".{0,8}") {
        prop_assert_eq!(score_symbol(&symbol), score_symbol(&symbol));
    }

    #[test]
    fn test_any_input_scores_finite(symbol in ".{0,12}") {
        let score = score_symbol(&symbol);
        prop_assert!(score.is_finite() && score >= 0.0, "Bad score {} for {:?}", score, symbol);
        prop_assert!(is_one_decimal(score));
    }

    #[test]
    fn test_results_have_one_decimal(symbol in arb_symbol()) {
        prop_assert!(is_one_decimal(score_symbol(&symbol)));
    }

    #[test]
    fn test_basic_requires_exact_match(basic in arb_basic(), suffix in "[-0-9]{1,3}[o</]?") {
        let extended = format!("{}{}", basic, suffix);
        let expected = BASIC_ELEMENTS.iter().find(|b| b.symbol == basic).unwrap().points;
        prop_assert_eq!(score_symbol(&basic), expected);
        // Appended characters push the symbol through the complex formula,
        // where the basic character counts as a rotation.
        prop_assert!(score_symbol(&extended) >= 2.0);
    }

    #[test]
    fn test_breakdown_matches_score(symbol in arb_symbol()) {
        let scorer = Scorer::default();
        prop_assert_eq!(scorer.score_debug(&symbol).total, scorer.score(&symbol));
    }

    #[test]
    fn test_routine_order_invariant((symbols, shuffled) in arb_routine_pair()) {
        let a = score_routine(&symbols.join(" "));
        let b = score_routine(&shuffled.join(" "));
        prop_assert_eq!(a, b);
        prop_assert!(is_one_decimal(a));
    }

    #[test]
    fn test_routine_spacing_invariant(
        symbols in proptest::collection::vec(arb_symbol(), 0..10),
        pad in 1usize..4
    ) {
        let tight = symbols.join(" ");
        let gap = " ".repeat(pad);
        let loose = format!("{gap}{}{gap}", symbols.join(&gap));
        prop_assert_eq!(score_routine(&tight), score_routine(&loose));
    }
}

#[test]
fn test_default_rules_validate() {
    assert!(ScoringRules::default().validate().is_ok());
}
