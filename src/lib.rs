pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyColor, BodyIndex, BodyStore, NVec2};
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::error::SimulationError;
pub use simulation::border::{Border, enforce_border};
pub use simulation::grid::{Cell, UniformGrid};
pub use simulation::collision::{resolve_pair, resolve_pair_by_index, resolve_collisions};
pub use simulation::integrator::verlet_step;
pub use simulation::solver::PhysicsSolver;
pub use simulation::scenario::{Scenario, Spawner};

pub use configuration::config::{EngineConfig, ParametersConfig, SpawnConfig, RunConfig, ScenarioConfig};

#[cfg(feature = "viewer")]
pub use visualization::vgsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_broad_phase};
