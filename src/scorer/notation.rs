use crate::elements::{is_basic_symbol, is_position_marker, Position};
use crate::error::{FigError, FigResult};

pub const FRONT_MARKER: char = '.';
pub const ROTATION_MARKER: char = '-';

/// What the scorer needs to know about a complex symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolShape {
    pub is_front: bool,
    pub rotations: usize,
    pub half_twists: u32,
    /// Position marker in the last character of the raw symbol, if any.
    pub trailing: Option<Position>,
}

/// Decomposes a symbol. Never fails: characters the notation does not know
/// still count as a rotation and add no twist.
pub fn analyze_symbol(symbol: &str) -> SymbolShape {
    let is_front = symbol.starts_with(FRONT_MARKER);
    let body = symbol.strip_prefix(FRONT_MARKER).unwrap_or(symbol);

    let mut rotations = 0;
    let mut half_twists = 0u32;
    for c in body.chars().filter(|&c| !is_position_marker(c)) {
        rotations += 1;
        half_twists = half_twists.saturating_add(c.to_digit(10).unwrap_or(0));
    }

    SymbolShape {
        is_front,
        rotations,
        half_twists,
        trailing: symbol.chars().last().and_then(Position::from_marker),
    }
}

/// Strict check used by the `*_strict` scoring paths.
pub fn validate_symbol(symbol: &str) -> FigResult<()> {
    if is_basic_symbol(symbol) {
        return Ok(());
    }
    if symbol.is_empty() {
        return Err(malformed(symbol, "empty symbol"));
    }

    for (i, c) in symbol.chars().enumerate() {
        match c {
            FRONT_MARKER if i == 0 => {}
            FRONT_MARKER => {
                return Err(malformed(
                    symbol,
                    &format!("front indicator '{}' must lead the symbol", FRONT_MARKER),
                ));
            }
            ROTATION_MARKER => {}
            c if c.is_ascii_digit() || is_position_marker(c) => {}
            other => {
                return Err(malformed(symbol, &format!("unexpected character '{}'", other)));
            }
        }
    }

    if analyze_symbol(symbol).rotations == 0 {
        return Err(malformed(symbol, "no rotation"));
    }
    Ok(())
}

/// Splits a routine on single spaces, dropping blank tokens.
pub fn split_routine(routine: &str) -> impl Iterator<Item = &str> {
    routine.split(' ').filter(|token| !token.trim().is_empty())
}

fn malformed(symbol: &str, reason: &str) -> FigError {
    FigError::MalformedSymbol {
        symbol: symbol.to_string(),
        reason: reason.to_string(),
    }
}
