pub mod states;
pub mod error;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod border;
pub mod grid;
pub mod collision;
pub mod solver;
pub mod scenario;
