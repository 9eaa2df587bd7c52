use std::collections::HashSet;

use log::{debug, trace};

use crate::board::{Board, Position};
use crate::lexicon::Lexicon;
use crate::BOARD_SIZE;

/// Set of board cells, one bit per cell of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CellSet(u16);

impl CellSet {
    fn contains(self, pos: Position) -> bool {
        self.0 & (1u16 << pos.index()) != 0
    }

    fn with(self, pos: Position) -> Self {
        Self(self.0 | (1u16 << pos.index()))
    }
}

/// One frame of the traversal: where the path currently is, the word
/// spelled so far, and the cells the path has already left behind.
#[derive(Debug, Clone)]
struct SearchState {
    current: Position,
    word: String,
    visited: CellSet,
}

/// Enumerates every lexicon word spellable as a simple path of king-move
/// adjacent cells on the board.
pub struct Solver {
    board: Board,
    lexicon: Lexicon,
}

impl Solver {
    pub fn new(board: Board, lexicon: Lexicon) -> Self {
        Self { board, lexicon }
    }

    /// Runs the full search and returns the set of words found. A fresh set
    /// is built per call, so repeated calls return identical results. The
    /// search itself cannot fail; malformed boards and lexicons are rejected
    /// at construction, never here.
    pub fn solve(&self) -> HashSet<String> {
        let mut found = HashSet::new();
        for start in self.board.all_locations() {
            self.search_from(start, &mut found);
        }
        debug!("search complete, {} distinct words", found.len());
        found
    }

    /// Explicit-stack depth-first search from one start cell. The stack
    /// keeps the traversal depth-limit-free and the memory cost visible;
    /// termination is guaranteed because every extension grows the visited
    /// set and the grid only has BOARD_SIZE² cells.
    fn search_from(&self, start: Position, found: &mut HashSet<String>) {
        let mut stack = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        stack.push(SearchState {
            current: start,
            word: self.board.tile(start).to_string(),
            visited: CellSet::default(),
        });

        while let Some(state) = stack.pop() {
            if self.lexicon.contains(&state.word) && found.insert(state.word.clone()) {
                trace!("found {}", state.word);
            }

            if !self.lexicon.is_prefix(&state.word) {
                continue;
            }

            // The departed cell is what gets marked: the start cell only
            // becomes visited once the path extends off it.
            let visited = state.visited.with(state.current);
            for next in self.board.neighbors(state.current) {
                if state.visited.contains(next) {
                    continue;
                }
                let mut word = String::with_capacity(state.word.len() + 2);
                word.push_str(&state.word);
                word.push_str(self.board.tile(next));
                stack.push(SearchState {
                    current: next,
                    word,
                    visited,
                });
            }
        }
    }
}
