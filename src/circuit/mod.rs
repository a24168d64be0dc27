//! Circuit model representation and validation.
//!
//! This module provides the description of a circuit before evaluation.
//! The [`CircuitModel`] struct holds the source, the elements and the
//! [`TimeGrid`]; [`CircuitKey`] selects which evaluator applies to it.

mod model;
mod time_grid;
mod types;
mod validate;

pub use model::CircuitModel;
pub use time_grid::{TimeGrid, GRID_POINTS, GRID_STOP, INTERACTIVE_GRID_START, MODEL_GRID_START};
pub use types::*;
pub use validate::validate_elements;
