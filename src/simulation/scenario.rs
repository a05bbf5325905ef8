//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - the solver (`PhysicsSolver`) built from engine settings and parameters
//! - the spawner that keeps feeding bodies in while the scenario runs
//! - frame timing for the host loop
//!
//! With the `viewer` feature the scenario is inserted into Bevy as a
//! `Resource` and advanced by the visualization systems

use std::f64::consts::TAU;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{EngineConfig, ParametersConfig, ScenarioConfig, SpawnConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimulationError;
use crate::simulation::params::Parameters;
use crate::simulation::solver::PhysicsSolver;
use crate::simulation::states::{BodyColor, NVec2};

/// Source of new bodies while a scenario runs
#[derive(Debug, Clone)]
pub enum Spawner {
    /// Everything was placed up front
    Done,
    /// Stream of bodies launched from a fixed point
    Emitter {
        position: NVec2,
        radius: f64,
        speed: f64,
        angle: f64, // radians
        max: usize,
        per_frame: usize,
        color: BodyColor,
    },
}

#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
pub struct Scenario {
    pub solver: PhysicsSolver,
    pub spawner: Spawner,
    pub frame_dt: f64, // seconds per frame
    pub frames: u32, // frames to run headless
}

fn vec2(v: &[f64], what: &str) -> Result<NVec2, SimulationError> {
    match v {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimulationError::Config(format!("{what} needs exactly 2 components, got {}", v.len()))),
    }
}

fn engine_from(cfg: &EngineConfig) -> Result<Engine, SimulationError> {
    let d = Engine::default();
    Ok(Engine {
        world: cfg.world.as_deref().map(|w| vec2(w, "engine.world")).transpose()?.unwrap_or(d.world),
        cell_size: cfg.cell_size.unwrap_or(d.cell_size),
        sub_steps: cfg.sub_steps.unwrap_or(d.sub_steps),
        border_margin: cfg.border_margin.unwrap_or(d.border_margin),
    })
}

fn parameters_from(cfg: &ParametersConfig, frame_dt: f64) -> Result<Parameters, SimulationError> {
    let d = Parameters::default();
    Ok(Parameters {
        restitution: cfg.restitution.unwrap_or(d.restitution),
        friction: cfg.friction.unwrap_or(d.friction),
        epsilon: cfg.epsilon.unwrap_or(d.epsilon),
        damping: cfg.damping.unwrap_or(d.damping),
        scale: cfg.scale.unwrap_or(d.scale),
        gravity: cfg.gravity.as_deref().map(|g| vec2(g, "parameters.gravity")).transpose()?.unwrap_or(d.gravity),
        spawn_dt: frame_dt,
    })
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        if cfg.run.frame_rate == 0 {
            return Err(SimulationError::Config("run.frame_rate must be positive".into()));
        }
        let frame_dt = 1.0 / cfg.run.frame_rate as f64;

        let engine = engine_from(&cfg.engine)?;
        let parameters = parameters_from(&cfg.parameters, frame_dt)?;
        let mut solver = PhysicsSolver::new(engine, parameters)?;

        let spawner = match cfg.spawn {
            SpawnConfig::Scatter { count, radius, speed, seed, color } => {
                solver.reserve(count);
                let border = *solver.border();
                let inner = border.bottom_right - border.top_left;
                if !(radius > 0.0) || radius * 2.0 >= inner.x.min(inner.y) {
                    return Err(SimulationError::Config(format!("radius {radius} does not fit inside the walls")));
                }

                // seeded so repeated runs of one file are identical
                let mut rng = StdRng::seed_from_u64(seed);
                for _ in 0..count {
                    let x = rng.gen_range(border.top_left.x + radius..border.bottom_right.x - radius);
                    let y = rng.gen_range(border.top_left.y + radius..border.bottom_right.y - radius);
                    let angle = rng.gen_range(0.0..TAU);
                    let index = solver.add_object(radius, NVec2::new(x, y), speed, angle)?;
                    if let Some(c) = color {
                        solver.set_color(index, BodyColor(c))?;
                    }
                }
                info!("scattered {count} bodies of radius {radius}");
                Spawner::Done
            }
            SpawnConfig::Emitter { position, radius, speed, angle_deg, max, per_frame, color } => {
                if !(radius > 0.0) {
                    return Err(SimulationError::InvalidRadius(radius));
                }
                solver.reserve(max);
                Spawner::Emitter {
                    position: vec2(&position, "spawn.position")?,
                    radius,
                    speed,
                    angle: angle_deg.to_radians(),
                    max,
                    per_frame,
                    color: color.map(BodyColor).unwrap_or_default(),
                }
            }
        };

        Ok(Self {
            solver,
            spawner,
            frame_dt,
            frames: cfg.run.frames,
        })
    }

    /// Spawn this frame's bodies (if any) and step the solver one frame
    pub fn advance_frame(&mut self) -> Result<(), SimulationError> {
        if let Spawner::Emitter { position, radius, speed, angle, max, per_frame, color } = self.spawner {
            for _ in 0..per_frame {
                if self.solver.object_count() >= max {
                    break;
                }
                let index = self.solver.add_object(radius, position, speed, angle)?;
                self.solver.set_color(index, color)?;
            }
        }

        self.solver.step(self.frame_dt);
        Ok(())
    }
}
