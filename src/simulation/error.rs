//! Errors raised while configuring a simulation.
//!
//! The per-sub-step pipeline itself is total; everything that can go wrong is
//! caught when the solver is built or a body is added.

use thiserror::Error;

use super::states::BodyIndex;

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(f64),

    #[error("world dimensions must be positive, got {0} x {1}")]
    InvalidWorldSize(f64, f64),

    #[error("sub-step count must be positive")]
    InvalidSubSteps,

    #[error("restitution must lie in (0, 1], got {0}")]
    InvalidRestitution(f64),

    #[error("body radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("grid of {0} x {1} cells exceeds the cell budget")]
    GridTooLarge(f64, f64),

    #[error("border margin {0} leaves no room inside the world")]
    DegenerateBorder(f64),

    #[error("no body with index {}", .0.get())]
    UnknownBody(BodyIndex),

    #[error("invalid scenario: {0}")]
    Config(String),
}
