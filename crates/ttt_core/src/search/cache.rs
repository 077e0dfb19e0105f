//! Memo table for the minimax search.
//!
//! Keys pack the nine cells (two bits each), the node kind and the parity of
//! the depth. Depth is reduced to parity on purpose: positions reached at
//! different depths in the same role share an entry.

use crate::types::{Board, Mark};
use std::collections::HashMap;

const MAX_NODE_BIT: u32 = 1 << 20;
const ODD_DEPTH_BIT: u32 = 1 << 21;

/// Which side of the minimax recursion a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Engine side to move.
    Max,
    /// Opponent to move.
    Min,
}

/// Packed memo key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey(u32);

impl StateKey {
    /// Builds the key for `board` at `depth` in a node of kind `kind`.
    pub fn new(board: &Board, depth: u32, kind: NodeKind) -> Self {
        let mut packed = board
            .cells()
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, mark)| {
                let bits: u32 = match mark {
                    Mark::Empty => 0,
                    Mark::X => 1,
                    Mark::O => 2,
                };
                acc | (bits << (i * 2))
            });
        if kind == NodeKind::Max {
            packed |= MAX_NODE_BIT;
        }
        if depth & 1 == 1 {
            packed |= ODD_DEPTH_BIT;
        }
        Self(packed)
    }
}

/// Unbounded per-engine memo table.
#[derive(Debug, Clone, Default)]
pub struct MemoCache {
    entries: HashMap<StateKey, i32>,
}

impl MemoCache {
    /// Looks up a stored score.
    pub fn get(&self, key: StateKey) -> Option<i32> {
        self.entries.get(&key).copied()
    }

    /// Stores a score.
    pub fn put(&mut self, key: StateKey, score: i32) {
        self.entries.insert(key, score);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_collapses_depth_to_parity() {
        let board = Board::new().apply(4).unwrap();
        assert_eq!(
            StateKey::new(&board, 1, NodeKind::Min),
            StateKey::new(&board, 3, NodeKind::Min)
        );
        assert_ne!(
            StateKey::new(&board, 1, NodeKind::Min),
            StateKey::new(&board, 2, NodeKind::Min)
        );
    }

    #[test]
    fn test_key_distinguishes_node_kind_and_cells() {
        let a = Board::new().apply(0).unwrap();
        let b = Board::new().apply(8).unwrap();
        assert_ne!(
            StateKey::new(&a, 1, NodeKind::Min),
            StateKey::new(&a, 1, NodeKind::Max)
        );
        assert_ne!(
            StateKey::new(&a, 1, NodeKind::Min),
            StateKey::new(&b, 1, NodeKind::Min)
        );
    }
}
