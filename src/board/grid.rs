//! Board storage and the per-cycle update.
//!
//! Entities are stored in an `im::OrdMap` keyed by `EntityId`. IDs are
//! allocated in insertion order, so iterating the map gives the stable
//! order the update uses. A separate cell index answers occupancy queries.
//! Both are persistent `im` maps, so cloning the board for a checkpoint is
//! O(1) and later mutations copy only the touched nodes.
//!
//! ## Update order
//!
//! 1. Every live entity advances once (hostiles walk, banks pay out).
//! 2. Every live entity strikes once; strikes are resolved immediately,
//!    including explosion chains.
//! 3. Dead entities are purged and counted.
//!
//! ```
//! use vampire_siege::board::Board;
//! use vampire_siege::core::Position;
//! use vampire_siege::entities::{Entity, HostileKind};
//!
//! let mut board = Board::new(3, 6);
//! board.add_object(Entity::slayer(Position::new(0, 0))).unwrap();
//! board.add_object(Entity::hostile(HostileKind::Vampire, Position::new(0, 5))).unwrap();
//!
//! let report = board.update();
//! assert_eq!(report.hostiles_killed, 0);
//! assert_eq!(board.position_to_string(Position::new(0, 5)), "V [4]");
//! ```

use std::hash::BuildHasherDefault;

use im::{HashMap, OrdMap};
use log::{debug, info};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::report::{CycleReport, HostileCounts};
use crate::core::{EntityId, Position};
use crate::entities::{Advance, Entity, FlashTarget, GarlicTarget, SlayerTarget, Strike, StrikeKind, VampireTarget};
use crate::error::{SiegeError, SiegeResult};

/// Position -> occupying entity, hashed with `FxHasher`.
type CellIndex = HashMap<Position, EntityId, BuildHasherDefault<FxHasher>>;

/// Ownership container for every entity in a simulation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    cols: i32,

    /// Entities by ID (insertion order).
    entities: OrdMap<EntityId, Entity>,

    /// Cell index: position -> entity occupying it.
    cells: CellIndex,

    /// Next entity ID to allocate.
    next_id: u32,

    counts: HostileCounts,

    /// Latched once a hostile walks past the left edge.
    breached: bool,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            entities: OrdMap::new(),
            cells: CellIndex::default(),
            next_id: 0,
            counts: HostileCounts::default(),
            breached: false,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Check if `pos` is on the board.
    #[must_use]
    pub fn in_bounds(&self, pos: Position) -> bool {
        (0..self.rows).contains(&pos.row) && (0..self.cols).contains(&pos.col)
    }

    // === Counters ===

    /// Hostile counters.
    #[must_use]
    pub fn counts(&self) -> HostileCounts {
        self.counts
    }

    /// Hostiles currently on the board.
    #[must_use]
    pub fn hostiles_alive(&self) -> u32 {
        self.counts.alive
    }

    /// Hostiles killed so far.
    #[must_use]
    pub fn hostiles_dead(&self) -> u32 {
        self.counts.dead
    }

    /// Whether a Dracula is on the board.
    #[must_use]
    pub fn boss_alive(&self) -> bool {
        self.counts.boss_alive
    }

    /// Whether a hostile has crossed the board.
    #[must_use]
    pub fn is_breached(&self) -> bool {
        self.breached
    }

    // === Queries ===

    /// Number of entities on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Check if the board holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterate entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.values()
    }

    /// Check if a live entity occupies `pos`.
    #[must_use]
    pub fn something_in_position(&self, pos: Position) -> bool {
        self.attackable_in_position(pos).is_some()
    }

    /// The live entity at `pos`, if any.
    #[must_use]
    pub fn attackable_in_position(&self, pos: Position) -> Option<&Entity> {
        let id = self.cells.get(&pos)?;
        self.entities.get(id).filter(|e| e.is_alive())
    }

    /// The live entity at `pos`, mutably.
    pub fn attackable_in_position_mut(&mut self, pos: Position) -> Option<&mut Entity> {
        let id = self.cells.get(&pos)?;
        self.entities.get_mut(id).filter(|e| e.is_alive())
    }

    /// Nearest cell to the right of `pos`, in the same row, holding a live
    /// hostile.
    #[must_use]
    pub fn first_hostile_right_of(&self, pos: Position) -> Option<Position> {
        ((pos.col + 1)..self.cols)
            .map(|col| Position::new(pos.row, col))
            .find(|&cell| self.attackable_in_position(cell).is_some_and(Entity::is_hostile))
    }

    /// Cell text for the printer, or an empty string.
    #[must_use]
    pub fn position_to_string(&self, pos: Position) -> String {
        self.attackable_in_position(pos)
            .map(Entity::cell_text)
            .unwrap_or_default()
    }

    // === Mutation ===

    /// Insert an entity.
    ///
    /// Callers check placement legality first. The board only refuses a
    /// second Dracula and a cell that is already taken, either of which
    /// would break its own bookkeeping.
    pub fn add_object(&mut self, entity: Entity) -> SiegeResult<EntityId> {
        let pos = entity.position();
        if entity.is_boss() && self.counts.boss_alive {
            return Err(SiegeError::BossAlreadyPresent);
        }
        if self.something_in_position(pos) {
            return Err(SiegeError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }

        let id = EntityId(self.next_id);
        self.next_id += 1;

        if entity.is_hostile() {
            self.counts.alive += 1;
        }
        if entity.is_boss() {
            self.counts.boss_alive = true;
        }

        debug!("{} placed {} at {}", id, entity.symbol(), pos);
        self.cells.insert(pos, id);
        self.entities.insert(id, entity);
        Ok(id)
    }

    /// Run one cycle over every entity.
    pub fn update(&mut self) -> CycleReport {
        let mut report = CycleReport::default();
        let ids: Vec<EntityId> = self.entities.keys().copied().collect();

        for &id in &ids {
            self.advance_entity(id, &mut report);
        }

        for &id in &ids {
            let strike = self
                .entities
                .get(&id)
                .filter(|e| e.is_alive())
                .and_then(|e| e.strike(self));
            if let Some(strike) = strike {
                self.resolve(strike);
            }
        }

        self.purge(&mut report);
        report
    }

    /// Garlic Push: every hostile steps one column back.
    ///
    /// Hostiles are pushed from the right edge inwards so that a column of
    /// hostiles moves together. A push into an occupied cell is blocked; a
    /// push past the right edge kills. Returns the number of hostiles killed.
    pub fn push_vampires(&mut self) -> u32 {
        let mut hostiles: Vec<(EntityId, Position)> = self
            .entities
            .iter()
            .filter(|(_, e)| e.is_alive() && e.is_hostile())
            .map(|(&id, e)| (id, e.position()))
            .collect();
        hostiles.sort_by_key(|&(id, pos)| (std::cmp::Reverse(pos.col), id));

        for (id, from) in hostiles {
            let to = from.right();
            let off_board = to.col >= self.cols;
            if !off_board && self.something_in_position(to) {
                continue;
            }

            let Some(entity) = self.entities.get_mut(&id) else {
                continue;
            };
            if !entity.receive_garlic_push() {
                continue;
            }

            if off_board {
                entity.expire();
                self.unindex(from, id);
                debug!("{} pushed off the board from {}", id, from);
            } else {
                self.relocate(id, from, to);
            }
        }

        let mut report = CycleReport::default();
        self.purge(&mut report);
        report.hostiles_killed
    }

    /// Light Flash: every hostile not immune dies. Returns the number
    /// killed.
    pub fn kill_all_vampires(&mut self) -> u32 {
        let hostiles: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|(_, e)| e.is_hostile())
            .map(|(&id, _)| id)
            .collect();

        for id in hostiles {
            if let Some(entity) = self.entities.get_mut(&id) {
                entity.receive_light_flash();
            }
        }

        let mut report = CycleReport::default();
        self.purge(&mut report);
        report.hostiles_killed
    }

    /// One line per entity, row-major.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut live: Vec<&Entity> = self.entities.values().filter(|e| e.is_alive()).collect();
        live.sort_by_key(|e| e.position());
        live.into_iter()
            .map(Entity::serialize)
            .collect::<Vec<_>>()
            .join("\n")
    }

    // === Internals ===

    fn advance_entity(&mut self, id: EntityId, report: &mut CycleReport) {
        let Some(entity) = self.entities.get(&id).filter(|e| e.is_alive()) else {
            return;
        };
        let blocked = self.something_in_position(entity.position().left());

        let Some(entity) = self.entities.get_mut(&id) else {
            return;
        };
        let outcome = entity.advance(blocked);
        let pos = entity.position();

        match outcome {
            Advance::Idle => {}
            Advance::Moved { from } => self.relocate(id, from, pos),
            Advance::Escaped { from } => {
                self.unindex(from, id);
                if let Some(escaped) = self.entities.remove(&id) {
                    self.counts.alive = self.counts.alive.saturating_sub(1);
                    if escaped.is_boss() {
                        self.counts.boss_alive = false;
                    }
                    info!("{} escaped from row {}", escaped.symbol(), from.row);
                }
                self.breached = true;
                report.hostiles_escaped += 1;
            }
            Advance::Income(coins) => report.coins_earned += coins,
        }
    }

    fn resolve(&mut self, strike: Strike) {
        let mut pending: SmallVec<[Strike; 8]> = smallvec![strike];

        while let Some(strike) = pending.pop() {
            let Some(target) = self.attackable_in_position_mut(strike.target) else {
                continue;
            };
            match strike.kind {
                StrikeKind::Slayer(damage) => {
                    if target.receive_slayer_attack(damage) {
                        debug!("{} killed at {}", target.symbol(), strike.target);
                        pending.extend(target.death_strikes());
                    }
                }
                StrikeKind::Vampire(damage) => {
                    if target.receive_vampire_attack(damage) {
                        debug!("{} fell at {}", target.symbol(), strike.target);
                    }
                }
            }
        }
    }

    fn purge(&mut self, report: &mut CycleReport) {
        let dead: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|(_, e)| !e.is_alive())
            .map(|(&id, _)| id)
            .collect();

        for id in dead {
            let Some(entity) = self.entities.remove(&id) else {
                continue;
            };
            self.unindex(entity.position(), id);

            if entity.is_hostile() {
                self.counts.alive = self.counts.alive.saturating_sub(1);
                self.counts.dead += 1;
                report.hostiles_killed += 1;
                if entity.is_boss() {
                    self.counts.boss_alive = false;
                }
            } else {
                report.defenders_lost += 1;
            }
        }
    }

    fn relocate(&mut self, id: EntityId, from: Position, to: Position) {
        self.unindex(from, id);
        self.cells.insert(to, id);
    }

    /// Drop the index entry for `pos` only if it still points at `id`.
    fn unindex(&mut self, pos: Position, id: EntityId) {
        if self.cells.get(&pos) == Some(&id) {
            self.cells.remove(&pos);
        }
    }
}
