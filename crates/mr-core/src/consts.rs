//! Shared maze constants.

/// Smallest legal dimension for any maze, generated or loaded.
pub const MIN_DIM: usize = 3;

/// Smallest height the generator accepts. The entrance-row draw
/// `1 + 2 * rn2((height - 3) / 2)` needs a positive denominator, so
/// heights 3 and 4 leave no interior row to punch the entrance through.
pub const MIN_GEN_HEIGHT: usize = 5;
