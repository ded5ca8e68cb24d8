//! Board limits, coordinate alphabet and classification thresholds.
//!
//! Board size is chosen at runtime; these bound what the text coordinate
//! format can express.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when none is given.
pub const DEFAULT_SIZE: usize = 19;

/// Smallest board the command line accepts.
pub const MIN_SIZE: usize = 2;

/// Largest board expressible with single-letter column names.
pub const MAX_SIZE: usize = 25;

// =============================================================================
// Coordinates
// =============================================================================

/// Column letters for text coordinates. 'I' is skipped (Go convention to
/// avoid confusion with 'J').
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Move Classification
// =============================================================================

/// Squared distance from the previous move above which a move counts as tenuki.
pub const TENUKI_DISTANCE_SQ: usize = 25;

// =============================================================================
// Neighbor Offsets
// =============================================================================

/// Orthogonal offsets as (row, col). Order: North, East, South, West.
pub const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
