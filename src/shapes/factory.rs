//! Constructors for the bodies the game spawns: stars, circles, ovals,
//! rectangles, needles and the indicator triangles attached to cars.
//!
//! Mass is density times polygon area unless noted. Randomized factories
//! take the random source explicitly so callers (and tests) control seeding.

use crate::common::color::Color;
use crate::math::vec2::Vec2;
use crate::objects::body::Body;
use crate::shapes::polygon::Polygon;
use rand::Rng;
use std::any::Any;
use std::f64::consts::PI;

// Star proportions
const OUTER_RADIUS_BASE: f64 = 50.0;
const INNER_RADIUS_BASE: f64 = 20.0;
const SCALE_MIN: f64 = 0.6;
const SCALE_MAX: f64 = 2.0;

// A circle is approximated by a polygon with this many edges.
const CIRCLE_EDGES: usize = 30;

const DEFAULT_VELOCITY: Vec2 = Vec2 { x: 50.0, y: 50.0 };
const INDICATOR_HEIGHT: f64 = 20.0;

fn body_from(polygon: Polygon, mass: f64, color: Color, info: Option<Box<dyn Any>>) -> Body {
    match info {
        Some(info) => Body::with_info(polygon, mass, color, info),
        None => Body::new(polygon, mass, color),
    }
}

/// Builds a star with `n_points` points, alternating outer and inner
/// vertices around `center`.
pub fn star(
    n_points: usize,
    outer_radius: f64,
    inner_radius: f64,
    density: f64,
    velocity: Vec2,
    center: Vec2,
    color: Color,
) -> Body {
    let rot_per_point = -2.0 * PI / n_points as f64;

    // Top point of the star; the first inner vertex sits half a point
    // further around.
    let top = Vec2::new(0.0, outer_radius);
    let inner_start = Vec2::new(0.0, inner_radius).rotate(-PI / n_points as f64);

    let mut vertices = Vec::with_capacity(n_points * 2);
    for i in 0..n_points {
        let rotation = rot_per_point * i as f64;
        vertices.push(top.rotate(rotation) + center);
        vertices.push(inner_start.rotate(rotation) + center);
    }

    let polygon = Polygon::new(vertices);
    let mass = density * polygon.area();
    let mut body = Body::new(polygon, mass, color);
    body.set_velocity(velocity);
    body
}

/// Builds a star with randomized color (and optionally size) around
/// `center`. With `init_velocity` the star starts moving at the default
/// velocity, otherwise it is at rest.
pub fn random_star<R: Rng>(
    rng: &mut R,
    n_points: usize,
    density: f64,
    center: Vec2,
    rand_size: bool,
    init_velocity: bool,
) -> Body {
    let scale = if rand_size {
        rng.gen_range(SCALE_MIN..=SCALE_MAX)
    } else {
        1.0
    };
    let color = Color::new(rng.gen(), rng.gen(), rng.gen());
    let velocity = if init_velocity {
        DEFAULT_VELOCITY
    } else {
        Vec2::ZERO
    };

    star(
        n_points,
        OUTER_RADIUS_BASE * scale,
        INNER_RADIUS_BASE * scale,
        density,
        velocity,
        center,
        color,
    )
}

/// Builds a circle with a slice of `sector_angle` radians cut out, centered
/// on the origin. A zero angle yields a full circle.
pub fn circle_sector(
    radius: f64,
    sector_angle: f64,
    color: Color,
    density: f64,
    info: Option<Box<dyn Any>>,
) -> Body {
    let mut vertices = Vec::with_capacity(CIRCLE_EDGES + 1);

    // The cut-out slice pivots on the center vertex; a full circle skips it.
    if sector_angle != 0.0 {
        vertices.push(Vec2::ZERO);
    }

    let half_angle = sector_angle / 2.0;
    let mut pen = Vec2::new(radius * half_angle.cos(), radius * half_angle.sin());
    vertices.push(pen);

    let rot_angle = (2.0 * PI - sector_angle) / CIRCLE_EDGES as f64;
    for _ in 0..CIRCLE_EDGES - 1 {
        pen = pen.rotate(rot_angle);
        vertices.push(pen);
    }

    let polygon = Polygon::new(vertices);
    let mass = density * polygon.area();
    body_from(polygon, mass, color, info)
}

/// Builds a full circle centered on the origin.
pub fn circle(radius: f64, color: Color, density: f64, info: Option<Box<dyn Any>>) -> Body {
    circle_sector(radius, 0.0, color, density, info)
}

/// Builds an oval with semi-axes `a` (major, x) and `b` (minor, y) centered
/// on the origin, approximated with `num_edges` vertices by projecting
/// equally spaced angles onto the ellipse. Mass is `π·a·b·density`.
pub fn oval(
    a: f64,
    b: f64,
    num_edges: usize,
    color: Color,
    density: f64,
    info: Option<Box<dyn Any>>,
) -> Body {
    let d_theta = 2.0 * PI / num_edges as f64;
    let mut vertices = Vec::with_capacity(num_edges);
    for i in 0..num_edges {
        let theta = d_theta * i as f64;
        let (sin_t, cos_t) = theta.sin_cos();
        let k = a * b / (b * b * cos_t * cos_t + a * a * sin_t * sin_t).sqrt();
        vertices.push(Vec2::new(k * cos_t, k * sin_t));
    }

    let mass = PI * a * b * density;
    body_from(Polygon::new(vertices), mass, color, info)
}

/// Builds an axis-aligned rectangle of the given length and height centered
/// on the origin.
pub fn rectangle(
    length: f64,
    height: f64,
    color: Color,
    density: f64,
    info: Option<Box<dyn Any>>,
) -> Body {
    let half_l = length / 2.0;
    let half_h = height / 2.0;
    let polygon = Polygon::new(vec![
        Vec2::new(-half_l, -half_h),
        Vec2::new(-half_l, half_h),
        Vec2::new(half_l, half_h),
        Vec2::new(half_l, -half_h),
    ]);

    let mass = density * length * height;
    body_from(polygon, mass, color, info)
}

/// Builds a needle: a half-disc fan of radius `length` with constant unit
/// mass, independent of size.
pub fn needle(length: f64, color: Color, info: Option<Box<dyn Any>>) -> Body {
    let half_edges = CIRCLE_EDGES / 2;
    let mut vertices = Vec::with_capacity(half_edges + 1);

    let mut pen = Vec2::new(0.0, length);
    vertices.push(pen);

    let rot_angle = PI / half_edges as f64;
    for _ in 0..half_edges {
        pen = pen.rotate(rot_angle);
        vertices.push(pen);
    }

    body_from(Polygon::new(vertices), 1.0, color, info)
}

/// Builds an isoceles triangle with its base on the x-axis, centered on the
/// origin, and explicit mass.
pub fn triangle(
    width: f64,
    height: f64,
    color: Color,
    mass: f64,
    info: Option<Box<dyn Any>>,
) -> Body {
    let polygon = Polygon::new(vec![
        Vec2::new(-width / 2.0, 0.0),
        Vec2::new(width / 2.0, 0.0),
        Vec2::new(0.0, height),
    ]);
    body_from(polygon, mass, color, info)
}

/// Builds the collider triangle that shields an AI car, sized from the
/// car's bounding box.
pub fn ai_collider(ai_car: &Body) -> Body {
    let dimensions = ai_car.dimensions();
    triangle(4.0 * dimensions.x, INDICATOR_HEIGHT, Color::BLACK, 0.1, None)
}

/// Builds the triangle drawn above the player's car.
pub fn player_indicator(player_car: &Body) -> Body {
    let dimensions = player_car.dimensions();
    triangle(
        0.5 * dimensions.x,
        INDICATOR_HEIGHT,
        Color::new(0.0, 0.0, 0.8),
        0.1,
        None,
    )
}
