//! The board: every live entity, indexed by cell.
//!
//! ## Key Types
//!
//! - `Board`: ownership container, occupancy queries, per-cycle update,
//!   area effects, serialization
//! - `HostileCounts`: board-scoped alive/dead/boss counters
//! - `CycleReport`: coins, kills and escapes from one update

pub mod grid;
pub mod report;

pub use grid::Board;
pub use report::{CycleReport, HostileCounts};
