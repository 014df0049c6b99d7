//! Small stateless helpers.

/// Uniform random integer in `[min, max]`, both ends inclusive.
///
/// The bounds may be given in either order.
pub fn random_int(min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    fastrand::i32(lo..=hi)
}

/// Same as [`random_int`] but draws from a caller-owned (seedable) generator.
pub fn random_int_with(rng: &mut fastrand::Rng, min: i32, max: i32) -> i32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.i32(lo..=hi)
}
