//! Narrow-phase collision response
//!
//! Overlapping circles are pushed apart along the line joining their centres.
//! This is a positional (penalty) correction, not an impulse: only a
//! `restitution` fraction of the overlap is removed per application, and the
//! rest decays over the following sub-steps. Each body moves by the other
//! body's share of the combined radius, so a larger body moves less.

use super::grid::{UniformGrid, FORWARD_NEIGHBOURS};
use super::states::{Body, BodyIndex};

/// Separate `a` and `b` if they interpenetrate.
///
/// Pairs closer than `sqrt(epsilon)` are left alone: their normal is undefined.
pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f64, epsilon: f64) {
    let delta = b.x - a.x;
    let dist2 = delta.norm_squared();
    let min_dist = a.radius + b.radius;

    if dist2 < min_dist * min_dist && dist2 > epsilon {
        let dist = dist2.sqrt();
        let overlap = min_dist - dist;
        let normal = delta / dist;

        let mass_ratio_a = a.radius / min_dist;
        let mass_ratio_b = b.radius / min_dist;

        let correction = normal * (restitution * overlap);
        a.x -= correction * mass_ratio_b;
        b.x += correction * mass_ratio_a;
    }
}

/// [`resolve_pair`] addressed by index. A body paired with itself is a no-op.
pub fn resolve_pair_by_index(
    bodies: &mut [Body],
    a: BodyIndex,
    b: BodyIndex,
    restitution: f64,
    epsilon: f64,
) {
    let (i, j) = (a.get(), b.get());
    if i == j {
        return;
    }

    // split the slice so both bodies can be borrowed mutably
    if i < j {
        let (lo, hi) = bodies.split_at_mut(j);
        resolve_pair(&mut lo[i], &mut hi[0], restitution, epsilon);
    } else {
        let (lo, hi) = bodies.split_at_mut(i);
        resolve_pair(&mut hi[0], &mut lo[j], restitution, epsilon);
    }
}

/// Resolve every candidate pair the grid reports.
///
/// Each cell is tested against itself (pairs `i < j`) and against its forward
/// half-neighbourhood, so every unordered pair in touching cells is handled
/// exactly once. Returns the number of pairs tested.
pub fn resolve_collisions(grid: &UniformGrid, bodies: &mut [Body], restitution: f64, epsilon: f64) -> usize {
    let mut tested = 0;

    for row in 0..grid.height() as i64 {
        for col in 0..grid.width() as i64 {
            let Some(current) = grid.cell(col, row) else { continue };
            if current.is_empty() {
                continue;
            }

            // within the cell
            let own = &current.bodies;
            for (k, &a) in own.iter().enumerate() {
                for &b in &own[k + 1..] {
                    resolve_pair_by_index(bodies, a, b, restitution, epsilon);
                    tested += 1;
                }
            }

            // against the forward neighbours, bounds-checked in (col, row) space
            for (dx, dy) in FORWARD_NEIGHBOURS {
                let Some(other) = grid.cell(col + dx, row + dy) else { continue };
                for &a in own {
                    for &b in &other.bodies {
                        resolve_pair_by_index(bodies, a, b, restitution, epsilon);
                        tested += 1;
                    }
                }
            }
        }
    }

    tested
}
