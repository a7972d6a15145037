use crate::elements::Position;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Basic,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SymbolBreakdown {
    pub kind: ElementKind,

    // Notation
    pub rotations: usize,
    pub half_twists: u32,
    pub is_front: bool,
    #[serde(serialize_with = "serialize_position")]
    pub trailing: Option<Position>,

    // Components (each already rounded)
    pub base_points: f64,
    pub front_bonus: f64,
    pub twist_points: f64,
    pub position_bonus: f64,

    pub total: f64,
}

impl SymbolBreakdown {
    pub(crate) fn basic(points: f64) -> Self {
        Self {
            kind: ElementKind::Basic,
            rotations: 0,
            half_twists: 0,
            is_front: false,
            trailing: None,
            base_points: 0.0,
            front_bonus: 0.0,
            twist_points: 0.0,
            position_bonus: 0.0,
            total: points,
        }
    }
}

fn serialize_position<S>(position: &Option<Position>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match position {
        Some(p) => serializer.serialize_some(&p.to_string()),
        None => serializer.serialize_none(),
    }
}
