//! Numerical and physical tuning for the simulation
//!
//! `Parameters` replaces global constants so several solvers can run side by
//! side with different tuning:
//! - collision/bounce response (`restitution`, `friction`, `epsilon`),
//! - integrator drag (`damping`),
//! - unit conversion for launch speeds (`scale`),
//! - gravity and the frame time used to seed a new body's previous position

use super::error::SimulationError;
use super::states::NVec2;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub restitution: f64, // fraction of overlap corrected / bounce velocity kept
    pub friction: f64, // horizontal velocity lost on floor contact
    pub epsilon: f64, // squared distance below which a pair is treated as coincident
    pub damping: f64, // drag applied to the previous displacement
    pub scale: f64, // world units per metre
    pub gravity: NVec2, // acceleration given to every new body
    pub spawn_dt: f64, // time step used to derive x_prev from the launch velocity
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            restitution: 0.6,
            friction: 0.1,
            epsilon: 1.0e-4,
            damping: 20.0,
            scale: 100.0,
            gravity: NVec2::new(0.0, 150.0),
            spawn_dt: 1.0 / 120.0,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(SimulationError::InvalidRestitution(self.restitution));
        }
        Ok(())
    }
}
