//! Simulation stepper
//!
//! `PhysicsSolver` owns the body arena and the broad-phase grid and advances
//! them one frame at a time. A frame of length `dt` is split into
//! `sub_steps` equal sub-steps, each running, in this order:
//!
//! 1. Verlet integration of every body
//! 2. border enforcement against the wall rectangle
//! 3. grid rebuild from the updated positions
//! 4. collision resolution over the grid
//!
//! Every stage consumes the positions the previous stage produced.

use log::{debug, warn};

use super::border::{enforce_all, Border};
use super::collision::resolve_collisions;
use super::engine::Engine;
use super::error::SimulationError;
use super::grid::UniformGrid;
use super::integrator::integrate_all;
use super::params::Parameters;
use super::states::{Body, BodyColor, BodyIndex, BodyStore, NVec2};

#[derive(Debug, Clone)]
pub struct PhysicsSolver {
    engine: Engine,
    parameters: Parameters,
    border: Border,
    store: BodyStore,
    grid: UniformGrid,
}

impl PhysicsSolver {
    pub fn new(engine: Engine, parameters: Parameters) -> Result<Self, SimulationError> {
        engine.validate()?;
        parameters.validate()?;

        let grid = UniformGrid::new(engine.world, engine.cell_size)?;
        debug!(
            "solver: {}x{} grid of {} cells, {} sub-steps",
            grid.width(),
            grid.height(),
            grid.cells().len(),
            engine.sub_steps
        );

        Ok(Self {
            border: engine.border(),
            engine,
            parameters,
            store: BodyStore::new(),
            grid,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn border(&self) -> &Border {
        &self.border
    }

    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    pub fn sub_steps(&self) -> u32 {
        self.engine.sub_steps
    }

    pub fn set_sub_steps(&mut self, sub_steps: u32) -> Result<(), SimulationError> {
        if sub_steps == 0 {
            return Err(SimulationError::InvalidSubSteps);
        }
        self.engine.sub_steps = sub_steps;
        Ok(())
    }

    /// Pre-allocate room for `capacity` bodies in total
    pub fn reserve(&mut self, capacity: usize) {
        let additional = capacity.saturating_sub(self.store.len());
        self.store.reserve(additional);
    }

    /// Add a body at `position` launched at `speed` (metres per second) along
    /// `angle` (radians, measured from +x towards +y).
    pub fn add_object(&mut self, radius: f64, position: NVec2, speed: f64, angle: f64) -> Result<BodyIndex, SimulationError> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(SimulationError::InvalidRadius(radius));
        }
        if 2.0 * radius > self.engine.cell_size {
            warn!(
                "body of radius {radius} is wider than a grid cell ({}); some contacts will be missed",
                self.engine.cell_size
            );
        }

        let p = &self.parameters;
        let v = NVec2::new(angle.cos(), angle.sin()) * speed * p.scale;
        Ok(self.store.push(Body::new(radius, position, v, p.gravity, p.spawn_dt)))
    }

    pub fn set_color(&mut self, index: BodyIndex, color: BodyColor) -> Result<(), SimulationError> {
        if self.store.set_color(index, color) {
            Ok(())
        } else {
            Err(SimulationError::UnknownBody(index))
        }
    }

    pub fn object_count(&self) -> usize {
        self.store.len()
    }

    pub fn body(&self, index: BodyIndex) -> Option<&Body> {
        self.store.get(index)
    }

    /// Read-only view for renderers; only valid between steps
    pub fn bodies(&self) -> &[Body] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &BodyStore {
        &self.store
    }

    /// Simulated time so far
    pub fn time(&self) -> f64 {
        self.store.t
    }

    /// Advance the whole population by one frame of length `dt`.
    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0) || !dt.is_finite() {
            warn!("ignoring step with dt = {dt}");
            return;
        }

        let sub_dt = dt / self.engine.sub_steps as f64;
        for _ in 0..self.engine.sub_steps {
            self.sub_step(sub_dt);
        }
        self.store.t += dt;
    }

    fn sub_step(&mut self, dt: f64) {
        let Parameters { restitution, friction, epsilon, damping, .. } = self.parameters;
        let bodies = self.store.as_mut_slice();

        integrate_all(bodies, dt, damping);
        enforce_all(bodies, &self.border, restitution, friction);
        self.grid.rebuild(bodies);
        resolve_collisions(&self.grid, bodies, restitution, epsilon);
    }

    /// Deepest remaining interpenetration among bodies the grid can see.
    ///
    /// Diagnostic only. Every indexed body is checked against the full 3x3
    /// neighbourhood of its cell, so each pair is measured from both sides.
    pub fn max_overlap(&self) -> f64 {
        let bodies = self.store.as_slice();
        let mut worst: f64 = 0.0;

        for row in 0..self.grid.height() as i64 {
            for col in 0..self.grid.width() as i64 {
                let Some(cell) = self.grid.cell(col, row) else { continue };
                for &a in &cell.bodies {
                    for other in self.grid.neighbourhood(col, row) {
                        for &b in &other.bodies {
                            if a == b {
                                continue;
                            }
                            let (ba, bb) = (&bodies[a.get()], &bodies[b.get()]);
                            let overlap = ba.radius + bb.radius - (bb.x - ba.x).norm();
                            worst = worst.max(overlap);
                        }
                    }
                }
            }
        }
        worst
    }
}
