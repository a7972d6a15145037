use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A reserved single-character element with a fixed FIG value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasicElement {
    pub symbol: &'static str,
    pub points: f64,
}

/// Basic elements never go through the complex-element formula.
pub const BASIC_ELEMENTS: [BasicElement; 6] = [
    BasicElement { symbol: "!", points: 0.0 },
    BasicElement { symbol: "X", points: 0.1 },
    BasicElement { symbol: "(", points: 0.1 },
    BasicElement { symbol: "f", points: 0.1 },
    BasicElement { symbol: "S", points: 0.1 },
    BasicElement { symbol: "^", points: 0.2 },
];

/// Exact-match lookup. Prefixes and substrings do not count.
pub fn find_basic(symbol: &str) -> Option<&'static BasicElement> {
    BASIC_ELEMENTS.iter().find(|b| b.symbol == symbol)
}

pub fn is_basic_symbol(symbol: &str) -> bool {
    find_basic(symbol).is_some()
}

/// Body position of a salto. Markers are stripped before rotations are counted.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum Position {
    #[strum(serialize = "o")]
    Tuck,
    #[strum(serialize = "<")]
    Pike,
    #[strum(serialize = "/")]
    Straight,
}

impl Position {
    pub fn marker(&self) -> char {
        match self {
            Self::Tuck => 'o',
            Self::Pike => '<',
            Self::Straight => '/',
        }
    }

    pub fn from_marker(c: char) -> Option<Self> {
        Self::iter().find(|p| p.marker() == c)
    }
}

pub fn is_position_marker(c: char) -> bool {
    Position::from_marker(c).is_some()
}
