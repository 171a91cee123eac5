//! Board geometry limits and driver defaults.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size used when the host does not ask for one.
pub const DEFAULT_SIZE: usize = 9;

/// Smallest board a session accepts.
pub const MIN_SIZE: usize = 1;

/// Largest board a session accepts.
///
/// Bounded by the protocol column alphabet: A-Z without 'I' gives 25 letters.
pub const MAX_SIZE: usize = 25;

/// Column letters used by the text protocol. 'I' is skipped by convention.
pub const COLUMN_LETTERS: &[u8; MAX_SIZE] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Random Play
// =============================================================================

/// Default number of actions (placements or passes) in a demo playout.
pub const DEFAULT_PLAYOUT_MOVES: usize = 120;
