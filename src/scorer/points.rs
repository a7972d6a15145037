use super::notation::SymbolShape;
use crate::config::ScoringRules;
use crate::elements::Position;
use crate::util::round_to_one_decimal;

pub fn rotation_points(rotations: usize, rules: &ScoringRules) -> f64 {
    round_to_one_decimal(rotations as f64 * rules.rotation_rate)
}

pub fn front_bonus(shape: &SymbolShape, rules: &ScoringRules) -> f64 {
    if !shape.is_front {
        return 0.0;
    }
    round_to_one_decimal(rules.front_bonus_rate * shape.rotations as f64)
}

/// Sums the marginal rate of every half-twist. Rotation counts without a
/// schedule earn nothing, whatever the twist.
pub fn twist_points(half_twists: u32, rotations: usize, rules: &ScoringRules) -> f64 {
    let Some(schedule) = rules.schedule_for(rotations) else {
        return 0.0;
    };
    let points = (1..=half_twists).fold(0.0, |acc, index| acc + schedule.rate_for(index));
    round_to_one_decimal(points)
}

/// Only the raw symbol's last character matters here.
pub fn position_bonus(shape: &SymbolShape, rules: &ScoringRules) -> f64 {
    match shape.trailing {
        Some(Position::Pike) => rules.pike_bonus.for_rotations(shape.rotations),
        Some(Position::Straight) => rules.straight_bonus.for_rotations(shape.rotations),
        Some(Position::Tuck) | None => 0.0,
    }
}
