pub mod api;
pub mod config;
pub mod elements;
pub mod error;
pub mod routine;
pub mod scorer;
pub mod util;

pub use api::{score_routine, score_symbol};
pub use error::{FigError, FigResult};
pub use routine::{Element, Routine};
pub use scorer::{Scorer, SymbolBreakdown};
