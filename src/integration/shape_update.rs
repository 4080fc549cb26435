//! The per-tick shape update: apply the environment acceleration, integrate
//! the body, spin it, and bounce it off the window walls.

use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use rand::Rng;

/// Angular speed applied to every shape, in radians per second. A gameplay
/// constant, identical for all shapes regardless of mass or size.
pub const DEFAULT_ROT_SPEED: f64 = std::f64::consts::FRAC_PI_4;

/// Returns the constant rotation speed shapes spin at.
pub fn rot_speed() -> f64 {
    DEFAULT_ROT_SPEED
}

/// Advances `body` by `dt` seconds inside the window
/// `[lower_bounds, upper_bounds]`:
///
/// 1. `velocity += net_acceleration * dt` (acceleration before translation,
///    semi-implicit Euler).
/// 2. `body.tick(dt)` moves the polygon by `velocity * dt`.
/// 3. The rotation advances by [`DEFAULT_ROT_SPEED`]` * dt`.
/// 4. The vertices are scanned in storage order for boundary violations.
///    A violating axis reflects that velocity component, scaled by an
///    elasticity drawn uniformly from `[min_elasticity, max_elasticity]`
///    (one independent draw per axis). The x and y checks on a single
///    vertex are independent, so a corner can flip both components in one
///    hit.
///
/// The scan stops at the first vertex that registers a hit. Later
/// out-of-bounds vertices never contribute a bounce in the same tick; this
/// first-hit-wins rule is deliberate gameplay behavior (continuing could
/// reverse the velocity straight back out of the correction). Position is
/// never adjusted, only velocity, so a shape can stay out of bounds until
/// later ticks bring it back.
pub fn shape_update<R: Rng>(
    body: &mut Body,
    dt: f64,
    lower_bounds: Vec2,
    upper_bounds: Vec2,
    net_acceleration: Vec2,
    min_elasticity: f64,
    max_elasticity: f64,
    rng: &mut R,
) {
    let dv = net_acceleration * dt;
    body.set_velocity(body.velocity() + dv);

    body.tick(dt);

    body.set_rotation(body.rotation() + DEFAULT_ROT_SPEED * dt);

    let mut velocity = body.velocity();
    let vertex_count = body.polygon().vertices.len();
    for i in 0..vertex_count {
        let p = body.polygon().vertices[i];
        let mut hit_wall = false;

        // X-axis bounce
        if (p.x <= lower_bounds.x && velocity.x < 0.0)
            || (p.x >= upper_bounds.x && velocity.x > 0.0)
        {
            let elasticity = rng.gen_range(min_elasticity..=max_elasticity);
            velocity.x *= -elasticity;
            body.set_velocity(velocity);
            hit_wall = true;
        }
        // Y-axis bounce
        if (p.y <= lower_bounds.y && velocity.y < 0.0)
            || (p.y >= upper_bounds.y && velocity.y > 0.0)
        {
            let elasticity = rng.gen_range(min_elasticity..=max_elasticity);
            velocity.y *= -elasticity;
            body.set_velocity(velocity);
            hit_wall = true;
        }

        // First hit wins; scanning on could reverse the velocity again.
        if hit_wall {
            break;
        }
    }
}
