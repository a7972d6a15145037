use crate::error::{FigError, FigResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Rates read by the complex-element formula.
///
/// The defaults are the FIG values; a rules file only needs to list the
/// fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    /// Points per rotation before the rotation multiplier.
    pub rotation_rate: f64,
    /// Extra points per rotation for a front salto.
    pub front_bonus_rate: f64,
    pub twist_schedules: Vec<TwistSchedule>,
    pub pike_bonus: PositionBonus,
    pub straight_bonus: PositionBonus,
}

/// Marginal rate per half-twist for one rotation count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwistSchedule {
    pub rotations: u32,
    pub bands: Vec<TwistBand>,
    /// Rate for every half-twist past the last band.
    pub tail_rate: f64,
}

/// Half-twists with index `<= up_to` (and above the previous band) earn `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwistBand {
    pub up_to: u32,
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionBonus {
    /// Index 0 is a single rotation.
    pub by_rotations: Vec<f64>,
    /// Applies when the rotation count is past `by_rotations`.
    pub beyond: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            rotation_rate: 0.5,
            front_bonus_rate: 0.1,
            twist_schedules: vec![
                TwistSchedule {
                    rotations: 1,
                    bands: vec![
                        TwistBand { up_to: 4, rate: 0.2 },
                        TwistBand { up_to: 6, rate: 0.3 },
                    ],
                    tail_rate: 0.4,
                },
                TwistSchedule {
                    rotations: 2,
                    bands: vec![
                        TwistBand { up_to: 2, rate: 0.1 },
                        TwistBand { up_to: 4, rate: 0.2 },
                        TwistBand { up_to: 6, rate: 0.3 },
                    ],
                    tail_rate: 0.4,
                },
                TwistSchedule {
                    rotations: 3,
                    bands: vec![TwistBand { up_to: 2, rate: 0.3 }],
                    tail_rate: 0.4,
                },
            ],
            pike_bonus: PositionBonus {
                by_rotations: vec![0.1, 0.1, 0.2],
                beyond: 0.3,
            },
            straight_bonus: PositionBonus {
                by_rotations: vec![0.1, 0.2, 0.3],
                beyond: 0.0,
            },
        }
    }
}

impl TwistSchedule {
    /// Rate earned by the half-twist at 1-based `index`.
    pub fn rate_for(&self, index: u32) -> f64 {
        self.bands
            .iter()
            .find(|band| index <= band.up_to)
            .map_or(self.tail_rate, |band| band.rate)
    }
}

impl PositionBonus {
    pub fn for_rotations(&self, rotations: usize) -> f64 {
        if rotations == 0 {
            return 0.0;
        }
        self.by_rotations
            .get(rotations - 1)
            .copied()
            .unwrap_or(self.beyond)
    }
}

impl ScoringRules {
    pub fn schedule_for(&self, rotations: usize) -> Option<&TwistSchedule> {
        self.twist_schedules
            .iter()
            .find(|s| s.rotations as usize == rotations)
    }

    pub fn from_json_str(json: &str) -> FigResult<Self> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> FigResult<Self> {
        let path = path.as_ref();
        info!("Loading scoring rules from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content).inspect_err(|e| {
            warn!("Rejected scoring rules in {}: {}", path.display(), e);
        })
    }

    pub fn validate(&self) -> FigResult<()> {
        check_rate("rotation_rate", self.rotation_rate)?;
        check_rate("front_bonus_rate", self.front_bonus_rate)?;

        let mut seen = HashSet::new();
        for schedule in &self.twist_schedules {
            if schedule.rotations == 0 {
                return Err(FigError::Config(
                    "twist schedule for 0 rotations is meaningless".to_string(),
                ));
            }
            if !seen.insert(schedule.rotations) {
                return Err(FigError::Config(format!(
                    "duplicate twist schedule for {} rotations",
                    schedule.rotations
                )));
            }

            let mut last_limit = 0;
            for band in &schedule.bands {
                if band.up_to <= last_limit {
                    return Err(FigError::Config(format!(
                        "twist bands for {} rotations must have increasing up_to (got {} after {})",
                        schedule.rotations, band.up_to, last_limit
                    )));
                }
                last_limit = band.up_to;
                check_rate("twist band rate", band.rate)?;
            }
            check_rate("twist tail_rate", schedule.tail_rate)?;
        }

        for (name, bonus) in [
            ("pike_bonus", &self.pike_bonus),
            ("straight_bonus", &self.straight_bonus),
        ] {
            for &rate in &bonus.by_rotations {
                check_rate(name, rate)?;
            }
            check_rate(name, bonus.beyond)?;
        }

        Ok(())
    }
}

fn check_rate(name: &str, value: f64) -> FigResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(FigError::Config(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}
