pub mod notation;
pub mod points;
pub mod types;

pub use self::types::{ElementKind, SymbolBreakdown};
use crate::config::ScoringRules;
use crate::elements::find_basic;
use crate::error::FigResult;
use crate::util::round_to_one_decimal;

/// Maps element symbols to FIG points under a fixed set of rules.
///
/// Scoring is pure: no state is touched and nothing is logged, so a single
/// scorer can be shared freely across threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scorer {
    pub rules: ScoringRules,
}

impl Scorer {
    pub fn new(rules: ScoringRules) -> FigResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Points for one symbol. Accepts any input.
    pub fn score(&self, symbol: &str) -> f64 {
        self.score_debug(symbol).total
    }

    /// Itemized scoring for reports.
    pub fn score_debug(&self, symbol: &str) -> SymbolBreakdown {
        if let Some(basic) = find_basic(symbol) {
            return SymbolBreakdown::basic(basic.points);
        }

        let rules = &self.rules;
        let shape = notation::analyze_symbol(symbol);

        let base_points = points::rotation_points(shape.rotations, rules);
        let front_bonus = points::front_bonus(&shape, rules);
        let twist_points = points::twist_points(shape.half_twists, shape.rotations, rules);
        let position_bonus = points::position_bonus(&shape, rules);

        // The whole sum is scaled by the rotation count again.
        let total = round_to_one_decimal(
            (base_points + front_bonus + twist_points + position_bonus) * shape.rotations as f64,
        );

        SymbolBreakdown {
            kind: ElementKind::Complex,
            rotations: shape.rotations,
            half_twists: shape.half_twists,
            is_front: shape.is_front,
            trailing: shape.trailing,
            base_points,
            front_bonus,
            twist_points,
            position_bonus,
            total,
        }
    }

    pub fn score_strict(&self, symbol: &str) -> FigResult<f64> {
        notation::validate_symbol(symbol)?;
        Ok(self.score(symbol))
    }

    /// Total for a space-delimited routine, rounded to one decimal.
    pub fn score_routine(&self, routine: &str) -> f64 {
        let sum = notation::split_routine(routine).fold(0.0, |acc, symbol| acc + self.score(symbol));
        round_to_one_decimal(sum)
    }

    /// Fails on the first malformed symbol.
    pub fn score_routine_strict(&self, routine: &str) -> FigResult<f64> {
        let mut sum = 0.0;
        for symbol in notation::split_routine(routine) {
            sum += self.score_strict(symbol)?;
        }
        Ok(round_to_one_decimal(sum))
    }
}
