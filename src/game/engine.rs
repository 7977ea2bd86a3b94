use std::collections::BTreeSet;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ai::{choose_move_with_context, AiDecision, Difficulty};
use crate::alpha_beta_searcher::SearchContext;
use crate::board::coord::Coord;
use crate::board::side::Side;
use crate::board::Board;
use crate::input_handler::MoveInput;
use crate::move_generator::{self, MoveError};
use crate::teeko_move::Move;

use super::config::{EngineConfig, MoverPolicy};
use super::state::{GameEnding, GameState, GameStatus};

/// Runs one match: owns the authoritative state, alternates turns and asks
/// the computer for moves when a computer side is to move.
pub struct Engine {
    config: EngineConfig,
    state: GameState,
    rng: StdRng,
    search_context: SearchContext,
    last_decision: Option<AiDecision>,
}

impl Engine {
    /// Starts a fresh match. If side A is a computer, its opening move has
    /// already been played when this returns.
    pub fn with_config(config: EngineConfig) -> Result<Self, MoveError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let search_context = SearchContext::with_parallel(0, config.parallel_search);

        let mut engine = Self {
            state: GameState::new(&config.rules),
            config,
            rng,
            search_context,
            last_decision: None,
        };
        engine.advance()?;
        Ok(engine)
    }

    pub fn new_game(
        a_policy: MoverPolicy,
        b_policy: MoverPolicy,
        seed: Option<u64>,
    ) -> Result<Self, MoveError> {
        let config = EngineConfig::default()
            .with_players(a_policy, b_policy)
            .with_seed(seed);
        Self::with_config(config)
    }

    pub fn human_vs_computer(human_side: Side, difficulty: Difficulty) -> Result<Self, MoveError> {
        let computer = MoverPolicy::Computer(difficulty);
        let (a_policy, b_policy) = match human_side {
            Side::A => (MoverPolicy::Human, computer),
            Side::B => (computer, MoverPolicy::Human),
        };
        Self::new_game(a_policy, b_policy, None)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn ending(&self) -> Option<GameEnding> {
        self.state.ending()
    }

    pub fn ply(&self) -> usize {
        self.state.ply()
    }

    pub fn move_history(&self) -> &[(Side, Move)] {
        self.state.move_history()
    }

    pub fn last_move(&self) -> Option<(Side, Move)> {
        self.state.last_move()
    }

    pub fn last_decision(&self) -> Option<&AiDecision> {
        self.last_decision.as_ref()
    }

    pub fn last_score(&self) -> Option<i32> {
        self.last_decision.and_then(|decision| decision.score)
    }

    pub fn policy(&self, side: Side) -> MoverPolicy {
        self.config.policy(side)
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cutoffs: self.search_context.cutoff_count(),
            depth: self.search_context.search_depth(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }

    pub fn legal_destinations(&self, side: Side) -> BTreeSet<Coord> {
        move_generator::legal_destinations(self.board(), side)
    }

    pub fn legal_destinations_for_source(&self, source: Coord) -> BTreeSet<Coord> {
        move_generator::legal_destinations_for_source(self.board(), source)
    }

    /// Plays an externally chosen move for the side to move, which must be
    /// a human side.
    pub fn apply_human_move(&mut self, teeko_move: Move) -> Result<(), MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameAlreadyTerminal);
        }

        let side = self.side_to_move();
        if self.policy(side).is_computer() {
            return Err(MoveError::NotHumanTurn { side });
        }
        self.play(teeko_move)
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<Move, MoveError> {
        let teeko_move = Move::from(input);
        self.apply_human_move(teeko_move)?;
        Ok(teeko_move)
    }

    /// Asks the computer for a move for the side to move without playing it.
    pub fn request_ai_move(&mut self) -> Result<AiDecision, MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameAlreadyTerminal);
        }

        let side = self.side_to_move();
        let difficulty = match self.policy(side) {
            MoverPolicy::Computer(difficulty) => difficulty,
            MoverPolicy::Human => return Err(MoveError::NotComputerTurn { side }),
        };
        let settings = self.config.difficulties.get(difficulty);

        let decision = choose_move_with_context(
            &mut self.search_context,
            self.state.board(),
            side,
            &settings,
            &mut self.rng,
        )?;
        debug!("{} ({}) chose {} by {}", side, difficulty, decision.teeko_move, decision.kind);

        self.last_decision = Some(decision);
        Ok(decision)
    }

    pub fn apply_ai_move(&mut self, teeko_move: Move) -> Result<(), MoveError> {
        self.play(teeko_move)
    }

    pub fn play_ai_turn(&mut self) -> Result<AiDecision, MoveError> {
        let decision = self.request_ai_move()?;
        self.apply_ai_move(decision.teeko_move)?;
        Ok(decision)
    }

    /// Plays one computer turn if the side to move is a computer and the game
    /// is still going. Returns the decision that was played, if any.
    pub fn advance(&mut self) -> Result<Option<AiDecision>, MoveError> {
        if self.state.is_over() || !self.policy(self.side_to_move()).is_computer() {
            return Ok(None);
        }
        self.play_ai_turn().map(Some)
    }

    fn play(&mut self, teeko_move: Move) -> Result<(), MoveError> {
        self.state.play(teeko_move)?;

        if let (Some(ending), status) = (self.ending(), self.status()) {
            match status {
                GameStatus::Won(side) => info!("{} wins after {} plies: {}", side, self.ply(), ending),
                _ => info!("draw after {} plies: {}", self.ply(), ending),
            }
        }
        Ok(())
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cutoffs: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}
