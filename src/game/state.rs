use std::fmt;

use log::debug;

use crate::board::side::Side;
use crate::board::Board;
use crate::move_generator::{has_legal_move, validate_move, MoveError};
use crate::rules::{has_win, DrawDetector, DrawReason};
use crate::teeko_move::Move;

use super::config::Rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
    Draw,
}

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnding {
    /// Four in a line or a 2x2 square.
    Alignment,
    /// The side to move had no legal move and lost.
    Blockade,
    MoveLimit,
    Repetition,
}

impl From<DrawReason> for GameEnding {
    fn from(reason: DrawReason) -> Self {
        match reason {
            DrawReason::MoveLimit => GameEnding::MoveLimit,
            DrawReason::Repetition => GameEnding::Repetition,
        }
    }
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameEnding::Alignment => "four pieces aligned",
            GameEnding::Blockade => "opponent has no legal move",
            GameEnding::MoveLimit => "move limit reached",
            GameEnding::Repetition => "position repeated three times",
        };
        write!(f, "{}", text)
    }
}

/// The authoritative state of one match.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    ply: usize,
    draws: DrawDetector,
    status: GameStatus,
    ending: Option<GameEnding>,
    move_history: Vec<(Side, Move)>,
}

impl GameState {
    pub fn new(rules: &Rules) -> Self {
        Self {
            board: Board::new(),
            side_to_move: Side::A,
            ply: 0,
            draws: DrawDetector::new(
                rules.max_plies,
                rules.repetition_window,
                rules.repetition_limit,
            ),
            status: GameStatus::InProgress,
            ending: None,
            move_history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn ending(&self) -> Option<GameEnding> {
        self.ending
    }

    pub fn move_history(&self) -> &[(Side, Move)] {
        &self.move_history
    }

    pub fn last_move(&self) -> Option<(Side, Move)> {
        self.move_history.last().copied()
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Plays `teeko_move` for the side to move and settles the outcome.
    /// Nothing changes if the move is rejected.
    pub fn play(&mut self, teeko_move: Move) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyTerminal);
        }

        let mover = self.side_to_move;
        validate_move(&self.board, mover, &teeko_move)?;
        let next = self.board.with_move_applied(teeko_move, mover)?;

        self.board = next;
        self.ply += 1;
        self.move_history.push((mover, teeko_move));
        debug!("ply {}: {} plays {}", self.ply, mover, teeko_move);

        if has_win(&self.board, mover) {
            self.finish(GameStatus::Won(mover), GameEnding::Alignment);
            return Ok(());
        }

        if let Some(reason) = self.draws.record(self.ply, self.board.signature()) {
            self.finish(GameStatus::Draw, reason.into());
            return Ok(());
        }

        self.side_to_move = mover.opposite();
        if !has_legal_move(&self.board, self.side_to_move) {
            self.finish(GameStatus::Won(mover), GameEnding::Blockade);
        }
        Ok(())
    }

    fn finish(&mut self, status: GameStatus, ending: GameEnding) {
        self.status = status;
        self.ending = Some(ending);
    }
}
