//! Player commands.
//!
//! A `Command` is the value form of one call on [`crate::engine::Game`].
//! Executing commands through [`crate::engine::Game::execute`] records them,
//! so a game can be replayed from its seed, level and command history.

use serde::{Deserialize, Serialize};

use crate::entities::HostileKind;

/// A player command.
///
/// ## Example
///
/// ```
/// use vampire_siege::core::Command;
/// use vampire_siege::entities::HostileKind;
///
/// let place = Command::AddSlayer { row: 0, col: 2 };
/// let debug = Command::AddVampire { kind: HostileKind::Dracula, row: 1, col: 3 };
/// assert_eq!(place.name(), "Slayer");
/// assert!(debug.runs_cycle());
/// assert!(!Command::Exit.runs_cycle());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Place a Slayer.
    AddSlayer {
        /// Target row.
        row: i32,
        /// Target column.
        col: i32,
    },
    /// Place a Blood Bank that costs `cost` coins.
    AddBloodBank {
        /// Target row.
        row: i32,
        /// Target column.
        col: i32,
        /// Coins invested.
        cost: u32,
    },
    /// Push every hostile one column back.
    GarlicPush,
    /// Kill every hostile that is not immune.
    LightFlash,
    /// Place a hostile directly (debug).
    AddVampire {
        /// Which hostile.
        kind: HostileKind,
        /// Target row.
        row: i32,
        /// Target column.
        col: i32,
    },
    /// Let one cycle pass.
    None,
    /// Start the level over.
    Reset,
    /// Stop the simulation.
    Exit,
}

impl Command {
    /// Name used in user-facing messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Command::AddSlayer { .. } => "Slayer",
            Command::AddBloodBank { .. } => "Blood Bank",
            Command::GarlicPush => "Garlic Push",
            Command::LightFlash => "Light Flash",
            Command::AddVampire { .. } => "Vampire",
            Command::None => "None",
            Command::Reset => "Reset",
            Command::Exit => "Exit",
        }
    }

    /// Whether a successful execution advances the simulation one cycle.
    #[must_use]
    pub const fn runs_cycle(&self) -> bool {
        !matches!(self, Command::Reset | Command::Exit)
    }
}

/// A recorded command with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command executed.
    pub command: Command,

    /// Cycle counter when the command was issued.
    pub cycle: u32,

    /// Position in the history (0-based).
    pub sequence: u32,
}

impl CommandRecord {
    /// Create a new command record.
    #[must_use]
    pub fn new(command: Command, cycle: u32, sequence: u32) -> Self {
        Self {
            command,
            cycle,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Command::GarlicPush.name(), "Garlic Push");
        assert_eq!(Command::LightFlash.name(), "Light Flash");
        assert_eq!(
            Command::AddBloodBank { row: 0, col: 0, cost: 20 }.name(),
            "Blood Bank"
        );
    }

    #[test]
    fn test_runs_cycle() {
        assert!(Command::None.runs_cycle());
        assert!(Command::LightFlash.runs_cycle());
        assert!(!Command::Reset.runs_cycle());
        assert!(!Command::Exit.runs_cycle());
    }

    #[test]
    fn test_command_record() {
        let cmd = Command::AddSlayer { row: 1, col: 2 };
        let record = CommandRecord::new(cmd, 3, 5);

        assert_eq!(record.command, cmd);
        assert_eq!(record.cycle, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_command_serialization() {
        let cmd = Command::AddVampire {
            kind: HostileKind::Explosive,
            row: 2,
            col: 4,
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: Command = serde_json::from_str(&json).unwrap();

        assert_eq!(cmd, deserialized);
    }
}
