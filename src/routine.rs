use crate::api::DEFAULT_SCORER;
use crate::elements::find_basic;
use crate::error::FigResult;
use crate::scorer::notation::split_routine;
use crate::scorer::Scorer;
use crate::util::round_to_one_decimal;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ROUTINE_NAME: &str = "Unnamed Routine";

/// A scored element. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    symbol: String,
    points: f64,
}

impl Element {
    /// Scores `symbol` with the standard rules.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self::scored(symbol, &DEFAULT_SCORER)
    }

    pub fn scored(symbol: impl Into<String>, scorer: &Scorer) -> Self {
        let symbol = symbol.into();
        let points = scorer.score(&symbol);
        Self { symbol, points }
    }

    /// Trusts `points`, except for basic symbols which always carry their
    /// table value.
    pub fn with_points(symbol: impl Into<String>, points: f64) -> Self {
        let symbol = symbol.into();
        let points = find_basic(&symbol).map_or(points, |b| b.points);
        Self { symbol, points }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn is(&self, symbol: &str) -> bool {
        self.symbol == symbol
    }

    pub fn is_basic(&self) -> bool {
        find_basic(&self.symbol).is_some()
    }
}

/// An ordered sequence of elements, as performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RoutineRecord", from = "RoutineRecord")]
pub struct Routine {
    name: String,
    elements: Vec<Element>,
}

impl Default for Routine {
    fn default() -> Self {
        Self::new(DEFAULT_ROUTINE_NAME, Vec::new())
    }
}

impl Routine {
    pub fn new(name: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    pub fn parse(routine: &str) -> Self {
        Self::parse_with(routine, &DEFAULT_SCORER)
    }

    pub fn parse_with(routine: &str, scorer: &Scorer) -> Self {
        let elements = split_routine(routine)
            .map(|symbol| Element::scored(symbol, scorer))
            .collect();
        Self::new(DEFAULT_ROUTINE_NAME, elements)
    }

    /// Like [`Routine::parse`] but rejects malformed symbols.
    pub fn parse_strict(routine: &str) -> FigResult<Self> {
        let elements = split_routine(routine)
            .map(|symbol| {
                let points = DEFAULT_SCORER.score_strict(symbol)?;
                Ok(Element::with_points(symbol, points))
            })
            .collect::<FigResult<Vec<_>>>()?;
        Ok(Self::new(DEFAULT_ROUTINE_NAME, elements))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn total_points(&self) -> f64 {
        let sum = self.elements.iter().fold(0.0, |acc, e| acc + e.points);
        round_to_one_decimal(sum)
    }

    pub fn to_json(&self) -> FigResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> FigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> FigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FromStr for Routine {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&element.symbol)?;
        }
        Ok(())
    }
}

// === JSON interchange shape ===

/// Stored form of a routine: `{name, totalPoint, routine: {elements: [...]}}`.
///
/// `totalPoint` is written for display but recomputed on import.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineRecord {
    #[serde(default = "default_routine_name")]
    pub name: String,
    #[serde(default)]
    pub total_point: f64,
    #[serde(default)]
    pub routine: ElementList,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementList {
    pub elements: Vec<ElementRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementRecord {
    pub symbol: String,
    pub points: f64,
}

fn default_routine_name() -> String {
    DEFAULT_ROUTINE_NAME.to_string()
}

impl From<Routine> for RoutineRecord {
    fn from(routine: Routine) -> Self {
        let total_point = routine.total_points();
        Self {
            name: routine.name,
            total_point,
            routine: ElementList {
                elements: routine
                    .elements
                    .into_iter()
                    .map(|e| ElementRecord {
                        symbol: e.symbol,
                        points: e.points,
                    })
                    .collect(),
            },
        }
    }
}

impl From<RoutineRecord> for Routine {
    fn from(record: RoutineRecord) -> Self {
        let elements = record
            .routine
            .elements
            .into_iter()
            .map(|e| Element::with_points(e.symbol, e.points))
            .collect();
        Self::new(record.name, elements)
    }
}
