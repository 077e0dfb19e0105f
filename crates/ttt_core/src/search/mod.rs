//! Adversarial search: minimax engine, difficulty presets and agents.

mod agent;
mod cache;
mod config;
mod minimax;
mod score;

pub use agent::{Agent, FirstLegalAgent, play_match};
pub use cache::{MemoCache, NodeKind, StateKey};
pub use config::{Difficulty, EXHAUSTIVE_DEPTH, SearchConfig};
pub use minimax::Minimax;
pub use score::{
    CENTER_WEIGHT, CORNER_WEIGHT, DRAW_SCORE, LOSS_SCORE, TWO_IN_ROW_OPEN, WIN_SCORE, heuristic,
    terminal_score,
};
