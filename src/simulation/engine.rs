//! Structural settings fixed when a solver is built
//!
//! World extent, broad-phase cell size, sub-step count and the wall inset
//! used by border enforcement

use super::border::Border;
use super::error::SimulationError;
use super::states::NVec2;

/// Upper bound on `columns * rows` a grid may allocate
pub const MAX_GRID_CELLS: usize = 1 << 26;

#[derive(Debug, Clone)]
pub struct Engine {
    pub world: NVec2, // world width and height
    pub cell_size: f64, // broad-phase cell edge, should be >= largest diameter
    pub sub_steps: u32, // physics steps per frame
    pub border_margin: f64, // inset of the walls from the world edge
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            world: NVec2::new(1200.0, 1200.0),
            cell_size: 10.0,
            sub_steps: 8,
            border_margin: 50.0,
        }
    }
}

impl Engine {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(SimulationError::InvalidCellSize(self.cell_size));
        }
        if !(self.world.x > 0.0 && self.world.y > 0.0) || !self.world.iter().all(|c| c.is_finite()) {
            return Err(SimulationError::InvalidWorldSize(self.world.x, self.world.y));
        }
        let (cols, rows) = self.grid_dimensions();
        if !(cols * rows <= MAX_GRID_CELLS as f64) {
            return Err(SimulationError::GridTooLarge(cols, rows));
        }
        if self.sub_steps == 0 {
            return Err(SimulationError::InvalidSubSteps);
        }
        let inner = self.world.x.min(self.world.y) - 2.0 * self.border_margin;
        if !(self.border_margin >= 0.0) || !(inner > 0.0) {
            return Err(SimulationError::DegenerateBorder(self.border_margin));
        }
        Ok(())
    }

    /// Column and row counts of the broad-phase grid, as floats so oversized
    /// ratios can be rejected before any allocation
    pub fn grid_dimensions(&self) -> (f64, f64) {
        ((self.world.x / self.cell_size).ceil(), (self.world.y / self.cell_size).ceil())
    }

    /// Wall rectangle inset by `border_margin` on every side
    pub fn border(&self) -> Border {
        let m = NVec2::new(self.border_margin, self.border_margin);
        Border {
            top_left: m,
            bottom_right: self.world - m,
        }
    }
}
