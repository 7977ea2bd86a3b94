use std::fmt::Write;

use termion::{clear, cursor};

use crate::game::engine::Engine;
use crate::game::state::GameStatus;
use crate::rules::winning_window;

pub struct GameDisplay {
    buffer: String,
    clear_screen: bool,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
            clear_screen: true,
        }
    }

    /// A display that never emits terminal control sequences.
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            ..Self::new()
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        if self.clear_screen {
            self.buffer
                .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
        }
    }

    /// Builds the frame for the engine's current position.
    pub fn compose(&mut self, engine: &Engine, show_stats: bool) -> &str {
        self.clear();

        let board = engine.board();
        let side = engine.side_to_move();
        let phase = board.phase_of(side);

        // Writing into a String cannot fail.
        let _ = writeln!(self.buffer, "{}\n", board);
        let _ = writeln!(
            self.buffer,
            "Ply {} | {} to move ({}, {})",
            engine.ply(),
            side,
            engine.policy(side),
            phase
        );

        if let Some((mover, teeko_move)) = engine.last_move() {
            let _ = write!(self.buffer, "Last move: {} by {}", teeko_move, mover);
            if let Some(decision) = engine.last_decision().filter(|d| d.teeko_move == teeko_move) {
                let _ = write!(self.buffer, " [{}]", decision.kind);
            }
            self.buffer.push('\n');
        }

        if show_stats {
            let stats = engine.search_stats();
            let _ = writeln!(
                self.buffer,
                "\n* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
                stats.last_score.map_or("-".to_string(), |s| s.to_string()),
                stats.positions_searched,
                stats.depth,
                stats.cutoffs,
                stats
                    .last_search_duration
                    .map_or("-".to_string(), |d| format!("{:?}", d))
            );
        }

        match engine.status() {
            GameStatus::InProgress => {}
            GameStatus::Won(winner) => {
                let _ = write!(self.buffer, "\n{} wins", winner);
                if let Some(ending) = engine.ending() {
                    let _ = write!(self.buffer, ": {}", ending);
                }
                if let Some(window) = winning_window(board, winner) {
                    let cells: Vec<String> = window.iter().map(|c| c.to_string()).collect();
                    let _ = write!(self.buffer, " ({})", cells.join(" "));
                }
                self.buffer.push('\n');
            }
            GameStatus::Draw => {
                let _ = write!(self.buffer, "\nDraw");
                if let Some(ending) = engine.ending() {
                    let _ = write!(self.buffer, ": {}", ending);
                }
                self.buffer.push('\n');
            }
        }

        &self.buffer
    }

    pub fn render(&mut self, engine: &Engine, show_stats: bool) {
        let frame = self.compose(engine, show_stats);
        print!("{}", frame);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
