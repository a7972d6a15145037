use crate::error::FigResult;
use crate::scorer::{Scorer, SymbolBreakdown};
use std::sync::LazyLock;

/// Scorer with the standard FIG rules, built once and never mutated.
pub static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// FIG points for a single element symbol.
pub fn score_symbol(symbol: &str) -> f64 {
    DEFAULT_SCORER.score(symbol)
}

/// FIG points for a space-delimited routine.
pub fn score_routine(routine: &str) -> f64 {
    DEFAULT_SCORER.score_routine(routine)
}

pub fn score_symbol_strict(symbol: &str) -> FigResult<f64> {
    DEFAULT_SCORER.score_strict(symbol)
}

pub fn score_routine_strict(routine: &str) -> FigResult<f64> {
    DEFAULT_SCORER.score_routine_strict(routine)
}

pub fn breakdown(symbol: &str) -> SymbolBreakdown {
    DEFAULT_SCORER.score_debug(symbol)
}
