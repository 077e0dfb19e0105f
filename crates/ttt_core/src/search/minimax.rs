//! Depth-limited minimax with optional alpha-beta pruning.

use super::cache::{MemoCache, NodeKind, StateKey};
use super::config::{Difficulty, EXHAUSTIVE_DEPTH, SearchConfig};
use super::score::{heuristic, terminal_score};
use crate::error::GameError;
use crate::rules;
use crate::types::{Board, CENTER, GameOutcome, Mark, Move};
use tracing::{debug, instrument, trace};

/// Minimax engine scoring positions for one side.
///
/// Owns a private memo table that lives as long as the engine. The table is
/// tied to this engine's side and depth, so engines are not shared between
/// configurations; build one per search.
#[derive(Debug, Clone)]
pub struct Minimax {
    config: SearchConfig,
    cache: MemoCache,
}

impl Minimax {
    /// Creates an engine with an empty memo table.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            cache: MemoCache::default(),
        }
    }

    /// Depth 2. Shallow enough to miss forks.
    #[track_caller]
    pub fn easy(ai_mark: Mark) -> Result<Self, GameError> {
        Self::with_difficulty(Difficulty::Easy, ai_mark)
    }

    /// Depth 4.
    #[track_caller]
    pub fn medium(ai_mark: Mark) -> Result<Self, GameError> {
        Self::with_difficulty(Difficulty::Medium, ai_mark)
    }

    /// Depth 9, which covers the whole game tree.
    #[track_caller]
    pub fn hard(ai_mark: Mark) -> Result<Self, GameError> {
        Self::with_difficulty(Difficulty::Hard, ai_mark)
    }

    /// Engine for a difficulty preset.
    #[track_caller]
    pub fn with_difficulty(difficulty: Difficulty, ai_mark: Mark) -> Result<Self, GameError> {
        Ok(Self::new(SearchConfig::for_difficulty(difficulty, ai_mark)?))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of memoized positions.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Forgets every memoized position.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Picks the best cell for the engine's side.
    ///
    /// Candidates are always scored as placements of the engine's own mark.
    /// When the board has the other side to move, the engine plays in its
    /// place and the search continues with the opponent to reply. Ties go to
    /// the lowest cell index.
    ///
    /// # Errors
    ///
    /// `IllegalState` when the board has no legal moves.
    #[instrument(skip(self, board), fields(ai_mark = %self.config.ai_mark(), board = %board))]
    pub fn choose_move(&mut self, board: &Board) -> Result<Move, GameError> {
        let legal = board.legal_moves();
        let Some(&first) = legal.first() else {
            return Err(GameError::illegal_state("no legal moves"));
        };

        if *self.config.max_depth() >= EXHAUSTIVE_DEPTH
            && board.is_legal(CENTER)
            && board.occupied_count() <= 1
        {
            debug!("Opening position, taking center");
            return Ok(Move::CENTER);
        }

        let mut best_move = first;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;

        let ai_mark = *self.config.ai_mark();
        for mv in legal {
            let score = self.min_value(&board.with_mark(mv, ai_mark), 1, alpha, beta)?;
            trace!(mv, score, "Scored root move");
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            if *self.config.use_pruning() {
                alpha = alpha.max(best_score);
            }
        }

        debug!(
            best_move,
            best_score,
            cached = self.cache.len(),
            "Search complete"
        );
        Move::new(best_move)
    }

    /// Scores `board` for the engine's side, searching from depth 0.
    ///
    /// Unlike [`Minimax::choose_move`], the board is taken as it stands:
    /// terminal boards get their terminal score, otherwise the MAX step runs
    /// when the engine's side is to move and the MIN step when it is not.
    #[instrument(skip(self, board), fields(ai_mark = %self.config.ai_mark(), board = %board))]
    pub fn evaluate(&mut self, board: &Board) -> Result<i32, GameError> {
        let outcome = rules::result(board);
        if outcome.is_terminal() {
            return terminal_score(outcome, *self.config.ai_mark());
        }
        if board.to_move() == *self.config.ai_mark() {
            self.max_value(board, 0, i32::MIN, i32::MAX)
        } else {
            self.min_value(board, 0, i32::MIN, i32::MAX)
        }
    }

    /// Terminal score, heuristic at the depth limit, or `None` to keep searching.
    fn leaf_score(&self, board: &Board, depth: u32) -> Result<Option<i32>, GameError> {
        let outcome = rules::result(board);
        if outcome != GameOutcome::InProgress {
            return terminal_score(outcome, *self.config.ai_mark()).map(Some);
        }
        if depth >= *self.config.max_depth() {
            return Ok(Some(heuristic(board, *self.config.ai_mark())));
        }
        Ok(None)
    }

    /// Stores `value` unless it came from a cutoff outside the entry window.
    fn remember(&mut self, key: StateKey, value: i32, alpha: i32, beta: i32) {
        if !*self.config.use_pruning() || (alpha < value && value < beta) {
            self.cache.put(key, value);
        }
    }

    // MAX layer: engine side to move
    fn max_value(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, GameError> {
        if let Some(score) = self.leaf_score(board, depth)? {
            return Ok(score);
        }

        let key = StateKey::new(board, depth, NodeKind::Max);
        if let Some(cached) = self.cache.get(key) {
            return Ok(cached);
        }

        let entry_alpha = alpha;
        let mut value = i32::MIN;
        for mv in board.legal_moves() {
            let score = self.min_value(&board.with_move(mv), depth + 1, alpha, beta)?;
            value = value.max(score);
            if *self.config.use_pruning() {
                if value >= beta {
                    break;
                }
                alpha = alpha.max(value);
            }
        }

        self.remember(key, value, entry_alpha, beta);
        Ok(value)
    }

    // MIN layer: opponent to move
    fn min_value(
        &mut self,
        board: &Board,
        depth: u32,
        alpha: i32,
        mut beta: i32,
    ) -> Result<i32, GameError> {
        if let Some(score) = self.leaf_score(board, depth)? {
            return Ok(score);
        }

        let key = StateKey::new(board, depth, NodeKind::Min);
        if let Some(cached) = self.cache.get(key) {
            return Ok(cached);
        }

        let entry_beta = beta;
        let mut value = i32::MAX;
        for mv in board.legal_moves() {
            let score = self.max_value(&board.with_move(mv), depth + 1, alpha, beta)?;
            value = value.min(score);
            if *self.config.use_pruning() {
                if value <= alpha {
                    break;
                }
                beta = beta.min(value);
            }
        }

        self.remember(key, value, alpha, entry_beta);
        Ok(value)
    }
}
