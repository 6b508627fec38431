//! Scoring module - points awarded for one burned group
//!
//! Flat rate per tile plus a small bonus for every tile past the minimum
//! pair, so bigger groups pull ahead of repeated pairs.

/// Points for burning a group of `burned` tiles:
/// `n * 10 + max(0, n - 2) * 5`.
pub fn burn_points(burned: usize) -> u32 {
    let n = burned as u32;
    n * 10 + n.saturating_sub(2) * 5
}
