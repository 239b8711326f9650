//! 2D simplex noise for terrain classification.
//!
//! Output is roughly in `[-1, 1]` and is clamped to that range. The function
//! is pure: the same `(x, y, seed)` always gives the same value.

const F2: f32 = 0.366_025_42; // (sqrt(3) - 1) / 2
const G2: f32 = 0.211_324_87; // (3 - sqrt(3)) / 6

/// Seed used by the terrain generator.
pub const DEFAULT_SEED: u64 = 1337;

const GRADIENTS: [(f32, f32); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Hash function for lattice corners
fn hash(x: i32, y: i32, seed: u64) -> u32 {
    let mut h = seed as u32;
    h = h.wrapping_mul(374761393);
    h = h.wrapping_add((x as u32).wrapping_mul(668265263));
    h = h.wrapping_add((y as u32).wrapping_mul(2654435761));
    h ^= h >> 13;
    h = h.wrapping_mul(1274126177);
    h ^= h >> 16;
    h
}

fn corner(i: i32, j: i32, x: f32, y: f32, seed: u64) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t <= 0.0 {
        return 0.0;
    }
    let (gx, gy) = GRADIENTS[(hash(i, j, seed) % 12) as usize];
    let t = t * t;
    t * t * (gx * x + gy * y)
}

/// 2D simplex noise in `[-1, 1]`.
pub fn simplex_2d(x: f32, y: f32, seed: u64) -> f32 {
    // skew into the simplex grid
    let s = (x + y) * F2;
    let i = (x + s).floor() as i32;
    let j = (y + s).floor() as i32;

    let t = (i.wrapping_add(j)) as f32 * G2;
    let x0 = x - (i as f32 - t);
    let y0 = y - (j as f32 - t);

    let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

    let x1 = x0 - i1 as f32 + G2;
    let y1 = y0 - j1 as f32 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let n0 = corner(i, j, x0, y0, seed);
    let n1 = corner(i.wrapping_add(i1), j.wrapping_add(j1), x1, y1, seed);
    let n2 = corner(i.wrapping_add(1), j.wrapping_add(1), x2, y2, seed);

    (70.0 * (n0 + n1 + n2)).clamp(-1.0, 1.0)
}

/// Remap a noise sample from `[-1, 1]` to `[0, 1]`.
pub fn to_unit(value: f32) -> f32 {
    value * 0.5 + 0.5
}
