//! End-to-end scenarios for the simulation engine.
//!
//! These tests drive `Game` through its public command surface only and
//! check win/lose conditions, the economy, placement rules and output.

use vampire_siege::engine::{COST_GARLIC_PUSH, NUM_COINS_PER_CYCLE, SAVE_HEADER};
use vampire_siege::{Command, Game, GameRng, GameStatus, HostileKind, Level, SiegeError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A level where nothing spawns on its own.
fn quiet(cap: u32) -> Level {
    Level::easy().with_spawn_frequency(0.0).with_hostile_cap(cap)
}

/// First seed whose opening economy draw pays nothing.
fn seed_without_bonus() -> u64 {
    (0..1000)
        .find(|&seed| GameRng::new(seed).gen_f32() <= 0.5)
        .unwrap()
}

// =============================================================================
// Win / Lose
// =============================================================================

/// A spawned vampire wiped by Light Flash ends a one-hostile level.
#[test]
fn test_light_flash_wins_single_hostile_level() {
    init_logging();
    let level = Level::new("duel", 1, 1.0, 3, 5);
    let mut game = Game::new(42, level).unwrap();

    game.none().unwrap();
    assert_eq!(game.vampires_on_board(), 1);
    assert_eq!(game.remaining_vampires(), 0);

    game.light_flash().unwrap();

    assert_eq!(game.board().hostiles_dead(), 1);
    assert_eq!(game.vampires_on_board(), 0);
    assert_eq!(game.remaining_vampires(), 0);
    assert_eq!(game.status(), GameStatus::PlayerWins);
    assert_eq!(game.winner_message(), "Player wins");
}

/// A hostile walking off the left edge ends the game for the player.
#[test]
fn test_breach_means_vampires_win() {
    let level = Level::new("corridor", 1, 0.0, 1, 2);
    let mut game = Game::new(7, level).unwrap();

    game.add_vampire(HostileKind::Vampire, 0, 0).unwrap();
    assert_eq!(game.status(), GameStatus::Running);

    game.none().unwrap();

    assert_eq!(game.status(), GameStatus::VampiresWin);
    assert_eq!(game.winner_message(), "Vampires win!");
    assert_eq!(game.board().hostiles_dead(), 0);
    assert_eq!(game.cycles(), 1);
    assert!(matches!(game.none(), Err(SiegeError::GameOver)));
}

/// A lone Slayer shoots down a vampire walking towards it.
#[test]
fn test_slayer_defends_row() {
    let mut game = Game::new(3, quiet(1)).unwrap();
    game.add_slayer(0, 0).unwrap();
    game.add_vampire(HostileKind::Vampire, 0, 6).unwrap();

    for _ in 0..20 {
        if game.is_finished() {
            break;
        }
        game.none().unwrap();
    }

    assert_eq!(game.status(), GameStatus::PlayerWins);
    assert!(game.something_in_position(0, 0));
}

/// Garlic Push drives a hostile in the spawn lane off the board.
#[test]
fn test_garlic_push_off_the_edge_kills() {
    let mut game = Game::new(3, quiet(1)).unwrap();
    game.add_vampire(HostileKind::Vampire, 2, 7).unwrap();
    let coins = game.coins();

    game.garlic_push().unwrap();

    assert_eq!(game.board().hostiles_dead(), 1);
    assert_eq!(game.status(), GameStatus::PlayerWins);
    let spent = coins + NUM_COINS_PER_CYCLE - game.coins();
    assert!(spent == COST_GARLIC_PUSH || spent == COST_GARLIC_PUSH + NUM_COINS_PER_CYCLE);
}

/// Exit stops the simulation without a winner.
#[test]
fn test_exit() {
    let mut game = Game::new(3, Level::hard()).unwrap();
    game.execute(&Command::Exit).unwrap();

    assert_eq!(game.status(), GameStatus::ExitRequested);
    assert_eq!(game.winner_message(), "Nobody wins...");
    assert!(matches!(game.execute(&Command::None), Err(SiegeError::GameOver)));
}

// =============================================================================
// Dracula
// =============================================================================

/// Light Flash leaves Dracula standing.
#[test]
fn test_dracula_survives_light_flash() {
    let mut game = Game::new(9, quiet(2)).unwrap();
    game.add_vampire(HostileKind::Dracula, 0, 7).unwrap();
    game.add_vampire(HostileKind::Vampire, 1, 7).unwrap();

    game.light_flash().unwrap();

    assert!(game.board().boss_alive());
    assert_eq!(game.vampires_on_board(), 1);
    assert_eq!(game.board().hostiles_dead(), 1);
    assert_eq!(game.status(), GameStatus::Running);
}

/// Only one Dracula may be alive at a time.
#[test]
fn test_single_dracula() {
    let mut game = Game::new(9, quiet(3)).unwrap();
    game.add_vampire(HostileKind::Dracula, 0, 7).unwrap();

    assert!(matches!(
        game.add_vampire(HostileKind::Dracula, 1, 7),
        Err(SiegeError::BossAlreadyPresent)
    ));
    assert_eq!(game.vampires_on_board(), 1);
}

// =============================================================================
// Economy and placement
// =============================================================================

/// Spending the whole opening balance leaves nothing for a second Slayer.
#[test]
fn test_defender_spends_whole_balance() {
    let mut game = Game::new(seed_without_bonus(), quiet(3)).unwrap();
    assert_eq!(game.coins(), 50);

    game.add_slayer(1, 1).unwrap();
    assert_eq!(game.coins(), 0);

    let err = game.add_slayer(2, 1).unwrap_err();
    assert!(matches!(err, SiegeError::InsufficientFunds { cost: 50, .. }));
    assert_eq!(err.to_string(), "Slayer cost is 50: Not enough coins");
    assert!(!game.something_in_position(2, 1));
    assert_eq!(game.cycles(), 1);
}

/// The spawn lane is reserved for hostiles.
#[test]
fn test_rightmost_column_rejected() {
    let mut game = Game::new(1, Level::easy()).unwrap();

    let err = game.add_slayer(0, 7).unwrap_err();
    assert!(matches!(err, SiegeError::InvalidPosition { row: 0, col: 7 }));
    assert_eq!(err.to_string(), "Invalid position (0, 7)");

    assert!(game.add_blood_bank(3, 7, 10).is_err());
    assert!(game.add_slayer(4, 0).is_err());
    assert_eq!(game.coins(), 50);
    assert_eq!(game.cycles(), 0);
}

/// A Blood Bank pays a tenth of its cost every cycle.
#[test]
fn test_blood_bank_income() {
    let mut game = Game::new(21, quiet(3)).unwrap();
    game.add_blood_bank(0, 0, 40).unwrap();

    for _ in 0..10 {
        let before = game.coins();
        game.none().unwrap();
        let gained = game.coins() - before;
        assert!(gained == 4 || gained == 4 + NUM_COINS_PER_CYCLE);
    }
}

/// A bank more expensive than the balance is refused.
#[test]
fn test_blood_bank_too_expensive() {
    let mut game = Game::new(21, quiet(3)).unwrap();

    let err = game.add_blood_bank(0, 0, 51).unwrap_err();
    assert!(matches!(
        err,
        SiegeError::InsufficientFunds { command: "Blood Bank", cost: 51 }
    ));
    assert!(game.board().is_empty());
}

// =============================================================================
// Reset, independence, determinism
// =============================================================================

/// Reset restores the opening state of the level.
#[test]
fn test_reset_restores_opening_state() {
    let mut game = Game::new(4, Level::insane()).unwrap();
    game.add_slayer(0, 0).unwrap();
    game.none().unwrap();

    game.execute(&Command::Reset).unwrap();

    assert_eq!(game.cycles(), 0);
    assert_eq!(game.coins(), 50);
    assert_eq!(game.remaining_vampires(), 10);
    assert!(game.board().is_empty());
}

/// Exactly the commands that declare a cycle advance the counter.
#[test]
fn test_runs_cycle_matches_execution() {
    init_logging();
    let commands = [
        Command::None,
        Command::AddSlayer { row: 0, col: 0 },
        Command::AddBloodBank { row: 1, col: 0, cost: 0 },
        Command::AddVampire { kind: HostileKind::Vampire, row: 2, col: 7 },
        Command::Reset,
        Command::None,
        Command::Exit,
    ];
    let mut game = Game::new(13, quiet(3)).unwrap();

    for command in &commands {
        let before = game.cycles();
        game.execute(command).unwrap();

        if command.runs_cycle() {
            assert_eq!(game.cycles(), before + 1, "{}", command.name());
        } else {
            assert!(game.cycles() <= before, "{}", command.name());
        }
    }
    assert_eq!(game.history().len(), commands.len());
}

/// Two games never share hostile counters.
#[test]
fn test_games_are_independent() {
    let mut first = Game::new(5, quiet(1)).unwrap();
    let mut second = Game::new(5, quiet(1)).unwrap();

    first.add_vampire(HostileKind::Vampire, 0, 7).unwrap();
    first.light_flash().unwrap();
    second.none().unwrap();

    assert_eq!(first.board().hostiles_dead(), 1);
    assert_eq!(second.board().hostiles_dead(), 0);
    assert_eq!(second.remaining_vampires(), 1);
    assert_eq!(second.status(), GameStatus::Running);
}

/// Same seed plus same commands gives the same game.
#[test]
fn test_same_seed_same_game() {
    let commands = [
        Command::None,
        Command::AddSlayer { row: 0, col: 0 },
        Command::None,
        Command::AddBloodBank { row: 1, col: 0, cost: 10 },
        Command::GarlicPush,
        Command::None,
        Command::None,
        Command::LightFlash,
        Command::None,
    ];

    let play = || {
        let mut game = Game::new(2024, Level::hard()).unwrap();
        let outcomes: Vec<bool> = commands.iter().map(|c| game.execute(c).is_ok()).collect();
        (outcomes, game.serialize(), game.to_string())
    };

    assert_eq!(play(), play());
}

// =============================================================================
// Output
// =============================================================================

/// The save block lists the header fields, then one line per entity.
#[test]
fn test_serialize_layout() {
    let mut game = Game::new(seed_without_bonus(), quiet(3)).unwrap();
    game.add_slayer(1, 2).unwrap();

    assert_eq!(
        game.serialize(),
        "Cycles: 1\nCoins: 0\nLevel: EASY\nRemaining Vampires: 3\nVampires on Board: 0\n\nS;1;2;3\n"
    );
}

/// Saving writes the header and the save block to a `.dat` file.
#[test]
fn test_save_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = Game::new(8, Level::hard()).unwrap();
    game.add_slayer(0, 0).unwrap();

    let path = game.save(dir.path().join("siege")).unwrap();

    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("dat"));
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, format!("{}\n\n{}", SAVE_HEADER, game.serialize()));
    assert!(contents.contains("Level: HARD\n"));
}

/// Saving into a missing directory surfaces the I/O error.
#[test]
fn test_save_into_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let game = Game::new(8, Level::hard()).unwrap();

    let err = game.save(dir.path().join("missing").join("siege")).unwrap_err();
    assert!(matches!(err, SiegeError::Io(_)));
}
