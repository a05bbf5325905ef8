//! Position-based Störmer–Verlet integration
//!
//! Velocity is never stored: it is the difference between the current and
//! previous positions. Drag is applied to that previous displacement.

use super::states::Body;

/// Advance one body by `dt` in place.
///
/// x_n+1 = 2 x_n - x_n-1 + (a - (x_n - x_n-1) * damping) * dt^2
pub fn verlet_step(body: &mut Body, dt: f64, damping: f64) {
    // displacement over the last step (velocity * dt)
    let displacement = body.x - body.x_prev;

    let x_new = 2.0 * body.x - body.x_prev + (body.a - displacement * damping) * (dt * dt);

    // shift the history window: x_n becomes x_n-1
    body.x_prev = body.x;
    body.x = x_new;
}

/// Advance every body by one sub-step. Bodies are independent at this stage
pub fn integrate_all(bodies: &mut [Body], dt: f64, damping: f64) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        bodies.par_iter_mut().for_each(|b| verlet_step(b, dt, damping));
    }

    #[cfg(not(feature = "parallel"))]
    for b in bodies.iter_mut() {
        verlet_step(b, dt, damping);
    }
}
