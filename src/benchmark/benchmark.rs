use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::error::SimulationError;
use crate::simulation::grid::UniformGrid;
use crate::simulation::params::Parameters;
use crate::simulation::solver::PhysicsSolver;
use crate::simulation::states::{Body, NVec2};

/// Helper to build a solver holding `n` bodies on a jittered lattice
/// deterministic positions, no rand needed
fn make_solver(n: usize) -> Result<PhysicsSolver, SimulationError> {
    let mut solver = PhysicsSolver::new(Engine::default(), Parameters::default())?;
    solver.reserve(n);

    let side = (n as f64).sqrt().ceil() as usize;
    let border = *solver.border();
    let span = border.bottom_right - border.top_left;
    let spacing = (span.x.min(span.y) - 4.0) / side as f64;

    for i in 0..n {
        let i_f = i as f64;
        let p = border.top_left
            + NVec2::new(2.0, 2.0)
            + NVec2::new((i % side) as f64, (i / side) as f64) * spacing
            + NVec2::new((i_f * 0.37).sin(), (i_f * 0.13).cos()) * 0.25 * spacing;
        solver.add_object(1.0, p, 2.0, i_f * 0.07)?;
    }
    Ok(solver)
}

/// Time full frame steps (all sub-steps) for growing populations
pub fn bench_step() -> Result<(), SimulationError> {
    let ns = [1000, 5000, 10000, 20000, 40000, 75000];
    let steps = 10; // frames per population
    let dt = 1.0 / 120.0;

    println!("N,step_ms,indexed");
    for n in ns {
        let mut solver = make_solver(n)?;

        // Warm up
        solver.step(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            solver.step(dt);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.4},{}", n, ms, solver.grid().indexed_count());
    }
    Ok(())
}

/// Time the grid rebuild alone, the broad-phase share of a sub-step
pub fn bench_broad_phase() -> Result<(), SimulationError> {
    let ns = [1000, 10000, 50000, 100000];
    let rebuilds = 50;

    println!("N,rebuild_us");
    for n in ns {
        let solver = make_solver(n)?;
        let bodies: &[Body] = solver.bodies();
        let engine = solver.engine();
        let mut grid = UniformGrid::new(engine.world, engine.cell_size)?;

        grid.rebuild(bodies);
        let t0 = Instant::now();
        for _ in 0..rebuilds {
            grid.rebuild(bodies);
        }
        let us = t0.elapsed().as_secs_f64() * 1.0e6 / rebuilds as f64;

        println!("{},{:.2}", n, us);
    }
    Ok(())
}
