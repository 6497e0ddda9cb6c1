//! The simulation engine.
//!
//! `Game` owns the level, the player's wallet, the board and the RNG. Every
//! command follows the same shape: validate, mutate, then run exactly one
//! cycle. A command that fails validation returns an error and leaves the
//! game untouched, and no cycle runs.
//!
//! ## Example
//!
//! ```
//! use vampire_siege::core::Level;
//! use vampire_siege::engine::{Game, GameStatus};
//! use vampire_siege::SiegeError;
//!
//! let mut game = Game::new(42, Level::easy()).unwrap();
//!
//! // The spawn lane is off limits
//! let err = game.add_slayer(0, 7).unwrap_err();
//! assert!(matches!(err, SiegeError::InvalidPosition { .. }));
//!
//! game.add_slayer(0, 0).unwrap();
//! assert_eq!(game.cycles(), 1);
//! assert_eq!(game.status(), GameStatus::Running);
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::status::GameStatus;
use crate::board::Board;
use crate::core::{Command, CommandRecord, GameRng, Level, Player, Position};
use crate::entities::defender::SLAYER_COST;
use crate::entities::{Entity, HostileKind};
use crate::error::{SiegeError, SiegeResult};

/// Coins granted by a successful economy tick.
pub const NUM_COINS_PER_CYCLE: u32 = 10;

/// Probability threshold of the economy tick (a draw above it pays).
pub const COIN_BONUS_THRESHOLD: f32 = 0.5;

/// Coins a Light Flash costs.
pub const COST_LIGHT_FLASH: u32 = 50;

/// Coins a Garlic Push costs.
pub const COST_GARLIC_PUSH: u32 = 10;

/// First line of a save file.
pub const SAVE_HEADER: &str = "Buffy the Vampire Slayer v3.0";

/// A running simulation.
#[derive(Clone, Debug)]
pub struct Game {
    pub(super) level: Level,
    pub(super) player: Player,
    pub(super) board: Board,
    pub(super) rng: GameRng,
    pub(super) cycles: u32,
    pub(super) status: GameStatus,
    pub(super) history: Vec<CommandRecord>,
}

impl Game {
    /// Start a new game on `level`, seeding the RNG with `seed`.
    pub fn new(seed: u64, level: Level) -> SiegeResult<Self> {
        level.validate()?;
        info!(
            "New game on level {} ({}x{}, {} hostiles) with seed {}",
            level.name, level.rows, level.cols, level.hostile_cap, seed
        );

        Ok(Self {
            board: Board::new(level.rows, level.cols),
            level,
            player: Player::new(),
            rng: GameRng::new(seed),
            cycles: 0,
            status: GameStatus::Running,
            history: Vec::new(),
        })
    }

    // === Accessors ===

    /// Level configuration.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// Player wallet.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Current coin balance.
    #[must_use]
    pub fn coins(&self) -> u32 {
        self.player.coins()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed cycles.
    #[must_use]
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game reached a terminal state.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// Message for the end of the game.
    #[must_use]
    pub fn winner_message(&self) -> &'static str {
        self.status.winner_message()
    }

    /// Commands executed through [`Game::execute`], in order.
    #[must_use]
    pub fn history(&self) -> &[CommandRecord] {
        &self.history
    }

    /// Hostiles the level will still spawn.
    #[must_use]
    pub fn remaining_vampires(&self) -> u32 {
        self.level
            .hostile_cap
            .saturating_sub(self.board.counts().accounted())
    }

    /// Hostiles on the board.
    #[must_use]
    pub fn vampires_on_board(&self) -> u32 {
        self.board.hostiles_alive()
    }

    /// Check if `(row, col)` is on the board.
    #[must_use]
    pub fn in_plane(&self, row: i32, col: i32) -> bool {
        self.board.in_bounds(Position::new(row, col))
    }

    /// Check if `col` is the spawn lane.
    #[must_use]
    pub fn is_in_last_col(&self, col: i32) -> bool {
        col == self.level.last_col()
    }

    /// Check if a live entity occupies `(row, col)`.
    #[must_use]
    pub fn something_in_position(&self, row: i32, col: i32) -> bool {
        self.board.something_in_position(Position::new(row, col))
    }

    // === Cycle ===

    /// Run one simulation cycle. Does nothing once the game is finished.
    pub fn update(&mut self) {
        if self.is_finished() {
            return;
        }

        if self.rng.gen_f32() > COIN_BONUS_THRESHOLD {
            self.player.add_coins(NUM_COINS_PER_CYCLE);
        }

        let report = self.board.update();
        self.player.add_coins(report.coins_earned);
        if report.hostiles_killed > 0 || report.defenders_lost > 0 {
            debug!(
                "Cycle {}: {} hostiles killed, {} defenders lost",
                self.cycles, report.hostiles_killed, report.defenders_lost
            );
        }

        for kind in HostileKind::ALL {
            self.spawn_random(kind);
        }

        self.check_end();
        if !self.is_finished() {
            self.cycles += 1;
        }
    }

    fn spawn_random(&mut self, kind: HostileKind) {
        if kind.is_boss() && self.board.boss_alive() {
            return;
        }
        if !self.can_spawn() || self.rng.gen_f64() >= self.level.spawn_frequency {
            return;
        }

        let row = self.rng.gen_range_usize(0..self.level.rows as usize) as i32;
        let pos = Position::new(row, self.level.last_col());
        if self.board.something_in_position(pos) {
            return;
        }

        match self.board.add_object(Entity::hostile(kind, pos)) {
            Ok(_) => debug!("{} spawned at {}", kind, pos),
            Err(err) => debug!("{} spawn at {} skipped: {}", kind, pos, err),
        }
    }

    fn can_spawn(&self) -> bool {
        self.board.counts().accounted() < self.level.hostile_cap
    }

    fn check_end(&mut self) {
        if self.board.is_breached() {
            self.finish(GameStatus::VampiresWin);
        } else if self.board.hostiles_dead() == self.level.hostile_cap {
            self.finish(GameStatus::PlayerWins);
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        info!("Game over after {} cycles: {}", self.cycles, status.winner_message());
    }

    // === Commands ===

    /// Execute a command value and record it in the history.
    pub fn execute(&mut self, command: &Command) -> SiegeResult<()> {
        let cycle = self.cycles;
        let result = match *command {
            Command::AddSlayer { row, col } => self.add_slayer(row, col),
            Command::AddBloodBank { row, col, cost } => self.add_blood_bank(row, col, cost),
            Command::GarlicPush => self.garlic_push(),
            Command::LightFlash => self.light_flash(),
            Command::AddVampire { kind, row, col } => self.add_vampire(kind, row, col),
            Command::None => self.none(),
            Command::Reset => {
                self.reset();
                Ok(())
            }
            Command::Exit => {
                self.exit();
                Ok(())
            }
        };

        match &result {
            Ok(()) => {
                if command.runs_cycle() {
                    debug!("{} executed, cycle {} -> {}", command.name(), cycle, self.cycles);
                } else {
                    debug!("{} executed", command.name());
                }
                let sequence = self.history.len() as u32;
                self.history.push(CommandRecord::new(*command, cycle, sequence));
            }
            Err(err) => debug!("{} rejected: {}", command.name(), err),
        }
        result
    }

    /// Place a Slayer at `(row, col)` for [`SLAYER_COST`] coins.
    pub fn add_slayer(&mut self, row: i32, col: i32) -> SiegeResult<()> {
        self.ensure_running()?;
        let pos = self.check_placement(row, col)?;
        self.ensure_funds("Slayer", SLAYER_COST)?;

        self.board.add_object(Entity::slayer(pos))?;
        self.player.spend(SLAYER_COST);
        self.update();
        Ok(())
    }

    /// Place a Blood Bank worth `cost` coins at `(row, col)`.
    pub fn add_blood_bank(&mut self, row: i32, col: i32, cost: u32) -> SiegeResult<()> {
        self.ensure_running()?;
        let pos = self.check_placement(row, col)?;
        self.ensure_funds("Blood Bank", cost)?;

        self.board.add_object(Entity::blood_bank(pos, cost))?;
        self.player.spend(cost);
        self.update();
        Ok(())
    }

    /// Push every hostile one column back for [`COST_GARLIC_PUSH`] coins.
    pub fn garlic_push(&mut self) -> SiegeResult<()> {
        self.ensure_running()?;
        self.ensure_funds("Garlic Push", COST_GARLIC_PUSH)?;

        let killed = self.board.push_vampires();
        debug!("Garlic Push drove {} hostiles off the board", killed);
        self.player.spend(COST_GARLIC_PUSH);
        self.update();
        Ok(())
    }

    /// Kill every hostile except Dracula for [`COST_LIGHT_FLASH`] coins.
    pub fn light_flash(&mut self) -> SiegeResult<()> {
        self.ensure_running()?;
        self.ensure_funds("Light Flash", COST_LIGHT_FLASH)?;

        let killed = self.board.kill_all_vampires();
        debug!("Light Flash killed {} hostiles", killed);
        self.player.spend(COST_LIGHT_FLASH);
        self.update();
        Ok(())
    }

    /// Place a hostile directly. Counts towards the level's cap.
    pub fn add_vampire(&mut self, kind: HostileKind, row: i32, col: i32) -> SiegeResult<()> {
        self.ensure_running()?;
        if !self.in_plane(row, col) || self.something_in_position(row, col) {
            return Err(SiegeError::InvalidPosition { row, col });
        }
        if !self.can_spawn() {
            return Err(SiegeError::PopulationCapReached);
        }
        if kind.is_boss() && self.board.boss_alive() {
            return Err(SiegeError::BossAlreadyPresent);
        }

        self.board.add_object(Entity::hostile(kind, Position::new(row, col)))?;
        self.update();
        Ok(())
    }

    /// Let one cycle pass.
    pub fn none(&mut self) -> SiegeResult<()> {
        self.ensure_running()?;
        self.update();
        Ok(())
    }

    /// Start the level over. The RNG keeps its stream.
    pub fn reset(&mut self) {
        self.player = Player::new();
        self.board = Board::new(self.level.rows, self.level.cols);
        self.cycles = 0;
        self.status = GameStatus::Running;
        info!("Game reset on level {}", self.level.name);
    }

    /// Stop the simulation.
    pub fn exit(&mut self) {
        if !self.is_finished() {
            self.finish(GameStatus::ExitRequested);
        }
    }

    fn ensure_running(&self) -> SiegeResult<()> {
        if self.is_finished() {
            Err(SiegeError::GameOver)
        } else {
            Ok(())
        }
    }

    fn ensure_funds(&self, command: &'static str, cost: u32) -> SiegeResult<()> {
        if self.player.can_afford(cost) {
            Ok(())
        } else {
            Err(SiegeError::InsufficientFunds { command, cost })
        }
    }

    /// Placement rules for player units: on the board, free, and not in
    /// the spawn lane.
    fn check_placement(&self, row: i32, col: i32) -> SiegeResult<Position> {
        if !self.in_plane(row, col) || self.is_in_last_col(col) || self.something_in_position(row, col) {
            return Err(SiegeError::InvalidPosition { row, col });
        }
        Ok(Position::new(row, col))
    }

    // === Output ===

    /// Status summary.
    #[must_use]
    pub fn info(&self) -> String {
        let mut message = format!(
            "Number of cycles: {}\nCoins: {}\nRemaining vampires: {}\nVampires on the board: {}\n",
            self.cycles,
            self.player.coins(),
            self.remaining_vampires(),
            self.vampires_on_board()
        );
        if self.board.boss_alive() {
            message.push_str("Dracula is alive\n");
        }
        message
    }

    /// Save block: header fields then the board dump.
    #[must_use]
    pub fn serialize(&self) -> String {
        format!(
            "Cycles: {}\nCoins: {}\nLevel: {}\nRemaining Vampires: {}\nVampires on Board: {}\n\n{}\n",
            self.cycles,
            self.player.coins(),
            self.level.name.to_uppercase(),
            self.remaining_vampires(),
            self.vampires_on_board(),
            self.board.serialize()
        )
    }

    /// Write the save block to `{path}.dat`. Returns the written path.
    pub fn save(&self, path: impl AsRef<Path>) -> SiegeResult<PathBuf> {
        let path = path.as_ref().with_extension("dat");
        std::fs::write(&path, format!("{}\n\n{}", SAVE_HEADER, self.serialize()))?;
        info!("Game saved to {}", path.display());
        Ok(path)
    }
}
