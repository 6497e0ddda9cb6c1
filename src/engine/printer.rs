//! Text rendering of a game: status summary above a boxed grid.

use std::fmt;

use super::game::Game;
use crate::core::Position;

const CELL_WIDTH: usize = 7;

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board();
        let cols = usize::try_from(board.cols()).unwrap_or(0);
        let rule = format!(" {}", "-".repeat((CELL_WIDTH + 1) * cols - 1));

        f.write_str(&self.info())?;
        for row in 0..board.rows() {
            writeln!(f, "{}", rule)?;
            f.write_str("|")?;
            for col in 0..board.cols() {
                let cell = board.position_to_string(Position::new(row, col));
                write!(f, "{:^width$}|", cell, width = CELL_WIDTH)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", rule)
    }
}
