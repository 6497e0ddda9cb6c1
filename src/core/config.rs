//! Level configuration.
//!
//! A `Level` fixes the board dimensions, how many hostiles the level
//! spawns in total and how often a spawn gate opens. Three presets exist;
//! custom levels are built with the `with_*` methods and checked with
//! [`Level::validate`].
//!
//! The engine never loads levels itself. `Level` derives serde so callers can
//! produce one from whatever source they like.
//!
//! ```
//! use vampire_siege::core::Level;
//!
//! let level: Level = "hard".parse().unwrap();
//! assert_eq!(level.rows, 3);
//! assert_eq!(level.cols, 7);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SiegeError, SiegeResult};

/// Immutable level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Human-readable name. Uppercased in save output.
    pub name: String,

    /// Total hostiles the level spawns. Killing this many wins the game.
    pub hostile_cap: u32,

    /// Probability in `[0, 1]` that a spawn gate opens.
    pub spawn_frequency: f64,

    /// Number of board rows.
    pub rows: i32,

    /// Number of board columns. The last column is the spawn lane.
    pub cols: i32,
}

impl Level {
    /// Easy preset: 3 hostiles on a 4x8 board.
    #[must_use]
    pub fn easy() -> Self {
        Self::new("easy", 3, 0.1, 4, 8)
    }

    /// Hard preset: 5 hostiles on a 3x7 board.
    #[must_use]
    pub fn hard() -> Self {
        Self::new("hard", 5, 0.2, 3, 7)
    }

    /// Insane preset: 10 hostiles on a 6x5 board.
    #[must_use]
    pub fn insane() -> Self {
        Self::new("insane", 10, 0.3, 6, 5)
    }

    /// Create a level. Call [`Level::validate`] before using custom values.
    pub fn new(
        name: impl Into<String>,
        hostile_cap: u32,
        spawn_frequency: f64,
        rows: i32,
        cols: i32,
    ) -> Self {
        Self {
            name: name.into(),
            hostile_cap,
            spawn_frequency,
            rows,
            cols,
        }
    }

    /// Names of the preset levels.
    #[must_use]
    pub const fn preset_names() -> [&'static str; 3] {
        ["easy", "hard", "insane"]
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the hostile cap.
    #[must_use]
    pub fn with_hostile_cap(mut self, cap: u32) -> Self {
        self.hostile_cap = cap;
        self
    }

    /// Set the spawn frequency.
    #[must_use]
    pub fn with_spawn_frequency(mut self, frequency: f64) -> Self {
        self.spawn_frequency = frequency;
        self
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> SiegeResult<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(SiegeError::InvalidLevel(format!(
                "board must be at least 1x1, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_frequency) {
            return Err(SiegeError::InvalidLevel(format!(
                "spawn frequency must be in [0, 1], got {}",
                self.spawn_frequency
            )));
        }
        Ok(())
    }

    /// Index of the spawn lane.
    #[must_use]
    pub const fn last_col(&self) -> i32 {
        self.cols - 1
    }
}

impl std::str::FromStr for Level {
    type Err = SiegeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::easy()),
            "hard" => Ok(Self::hard()),
            "insane" => Ok(Self::insane()),
            _ => Err(SiegeError::UnknownLevel(s.to_string())),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let easy = Level::easy();
        assert_eq!((easy.rows, easy.cols), (4, 8));
        assert_eq!(easy.hostile_cap, 3);

        let insane = Level::insane();
        assert_eq!((insane.rows, insane.cols), (6, 5));
        assert_eq!(insane.hostile_cap, 10);

        for name in Level::preset_names() {
            let level: Level = name.parse().unwrap();
            assert!(level.validate().is_ok());
            assert_eq!(level.name, name);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        let level: Level = "InSaNe".parse().unwrap();
        assert_eq!(level, Level::insane());
    }

    #[test]
    fn test_parse_unknown() {
        let err = "nightmare".parse::<Level>().unwrap_err();
        assert!(matches!(err, SiegeError::UnknownLevel(name) if name == "nightmare"));
    }

    #[test]
    fn test_builder() {
        let level = Level::easy()
            .with_dimensions(2, 3)
            .with_hostile_cap(1)
            .with_spawn_frequency(1.0);

        assert_eq!(level.rows, 2);
        assert_eq!(level.cols, 3);
        assert_eq!(level.last_col(), 2);
        assert_eq!(level.hostile_cap, 1);
        assert!(level.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Level::easy().with_dimensions(0, 4).validate().is_err());
        assert!(Level::easy().with_dimensions(4, 0).validate().is_err());
        assert!(Level::easy().with_spawn_frequency(1.5).validate().is_err());
        assert!(Level::easy().with_spawn_frequency(-0.1).validate().is_err());
        assert!(Level::easy().with_spawn_frequency(f64::NAN).validate().is_err());
        assert!(Level::easy().with_hostile_cap(0).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let level = Level::hard();
        let json = serde_json::to_string(&level).unwrap();
        let deserialized: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(level, deserialized);
    }
}
