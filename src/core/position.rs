//! Grid coordinates and entity identifiers.
//!
//! ## Position
//!
//! Cells are addressed as `(row, col)`. Coordinates are signed so that a
//! hostile can step past the left edge (column `-1`), which is how the board
//! detects a breach.
//!
//! ## EntityId
//!
//! Every entity placed on the board gets an `EntityId`. IDs are allocated
//! monotonically by the board, so ordering by ID is ordering by insertion,
//! which gives the cycle a stable iteration order.
//!
//! ```
//! use vampire_siege::core::Position;
//!
//! let pos = Position::new(2, 3);
//! assert_eq!(pos.left(), Position::new(2, 2));
//! assert_eq!(pos.neighbours().len(), 8);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A cell on the board, `(row, col)`.
///
/// Ordering is row-major, which is the order used by board serialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, `0..rows`.
    pub row: i32,
    /// Column index, `0..cols`.
    pub col: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one column to the left (towards the defenders).
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    /// The cell one column to the right (towards the spawn lane).
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// The 8 surrounding cells. May include off-board positions.
    #[must_use]
    pub fn neighbours(self) -> SmallVec<[Position; 8]> {
        let mut out = SmallVec::new();
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr != 0 || dc != 0 {
                    out.push(Self::new(self.row + dr, self.col + dc));
                }
            }
        }
        out
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unique identifier for an entity on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}
