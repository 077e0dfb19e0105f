//! Search configuration and difficulty presets.

use crate::error::GameError;
use crate::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Depth at which the search sees every line of play on a 3x3 board.
pub const EXHAUSTIVE_DEPTH: u32 = 9;

/// Difficulty preset chosen when a session is created.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Depth 2; blunders regularly.
    Easy,
    /// Depth 4.
    Medium,
    /// Depth 9; exhaustive.
    #[default]
    Hard,
}

impl Difficulty {
    /// Search depth used by this preset.
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => EXHAUSTIVE_DEPTH,
        }
    }
}

/// Parameters of a minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchConfig {
    /// Side the engine optimizes for.
    ai_mark: Mark,
    /// Whether alpha-beta cutoffs are taken.
    use_pruning: bool,
    /// Maximum ply before falling back to the heuristic.
    max_depth: u32,
}

impl SearchConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `ai_mark` is `Empty` or `max_depth` is zero.
    #[track_caller]
    pub fn new(ai_mark: Mark, use_pruning: bool, max_depth: u32) -> Result<Self, GameError> {
        if !ai_mark.is_side() {
            return Err(GameError::invalid_argument("ai_mark must be X or O"));
        }
        if max_depth < 1 {
            return Err(GameError::invalid_argument("max_depth >= 1 required"));
        }
        Ok(Self {
            ai_mark,
            use_pruning,
            max_depth,
        })
    }

    /// Pruned search at the preset's depth.
    #[track_caller]
    pub fn for_difficulty(difficulty: Difficulty, ai_mark: Mark) -> Result<Self, GameError> {
        Self::new(ai_mark, true, difficulty.depth())
    }
}
