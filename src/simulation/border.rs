//! Rectangular wall constraint
//!
//! A body whose edge has crossed a wall is clamped back against it and its
//! previous position is rewritten so the implicit velocity along that axis is
//! reflected and scaled by the restitution. Floor contact also bleeds off part
//! of the horizontal velocity as sliding friction.

use super::states::{Body, NVec2};

/// Axis-aligned wall rectangle. y grows downward, so `bottom_right.y` is the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub top_left: NVec2,
    pub bottom_right: NVec2,
}

impl Border {
    /// True when the whole circle lies inside the walls
    pub fn contains(&self, body: &Body) -> bool {
        let r = body.radius;
        self.top_left.x <= body.x.x - r
            && body.x.x + r <= self.bottom_right.x
            && self.top_left.y <= body.x.y - r
            && body.x.y + r <= self.bottom_right.y
    }
}

pub fn enforce_border(body: &mut Body, border: &Border, restitution: f64, friction: f64) {
    let Border { top_left, bottom_right } = *border;
    let r = body.radius;
    let v = body.x - body.x_prev;

    // side walls
    if body.x.x + r > bottom_right.x {
        body.x.x = bottom_right.x - r;
        body.x_prev.x = body.x.x + restitution * v.x;
    } else if body.x.x - r < top_left.x {
        body.x.x = top_left.x + r;
        body.x_prev.x = body.x.x + restitution * v.x;
    }

    // floor, then ceiling
    if body.x.y + r > bottom_right.y {
        body.x.y = bottom_right.y - r;
        body.x_prev.y = body.x.y + restitution * v.y;
        body.x_prev.x += friction * v.x;
    } else if body.x.y - r < top_left.y {
        body.x.y = top_left.y + r;
        body.x_prev.y = body.x.y + restitution * v.y;
    }
}

pub fn enforce_all(bodies: &mut [Body], border: &Border, restitution: f64, friction: f64) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        bodies
            .par_iter_mut()
            .for_each(|b| enforce_border(b, border, restitution, friction));
    }

    #[cfg(not(feature = "parallel"))]
    for b in bodies.iter_mut() {
        enforce_border(b, border, restitution, friction);
    }
}
