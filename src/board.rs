use std::fs::File;
use std::io::Read;
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use crate::{Error, Result, BOARD_SIZE};

/// A cell coordinate on the board. `x` counts rows downward, `y` counts
/// columns rightward, both zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Row-major cell index; also the bit index in the solver's visited set.
    pub fn index(&self) -> usize {
        self.x * BOARD_SIZE + self.y
    }
}

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// The letter grid. Each cell holds one tile, and a tile may be more than
/// one character ("qu" dice and the like).
#[derive(Debug, Clone)]
pub struct Board {
    tiles: Vec<String>,
}

impl Board {
    /// Builds a board from exactly BOARD_SIZE² tiles in row-major order
    /// (left to right, top to bottom).
    pub fn new(tiles: Vec<String>) -> Result<Self> {
        let expected = BOARD_SIZE * BOARD_SIZE;
        if tiles.len() != expected {
            return Err(Error::InvalidBoard {
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self { tiles })
    }

    /// Loads a board stored as a JSON array of tile strings.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut data = String::new();
        File::open(path.as_ref())?.read_to_string(&mut data)?;
        let tiles: Vec<String> = serde_json::from_str(&data)?;
        Self::new(tiles)
    }

    /// The tile at `pos`. Panics on an out-of-range position; the solver
    /// only ever asks about positions the board itself handed out.
    pub fn tile(&self, pos: Position) -> &str {
        &self.tiles[pos.index()]
    }

    /// Replaces the tile at `pos` in place.
    pub fn set_tile(&mut self, pos: Position, tile: String) {
        self.tiles[pos.index()] = tile;
    }

    /// All BOARD_SIZE² positions, row-major. The search treats these as
    /// independent start points, so the order carries no meaning.
    pub fn all_locations(&self) -> Vec<Position> {
        (0..BOARD_SIZE)
            .flat_map(|x| (0..BOARD_SIZE).map(move |y| Position::new(x, y)))
            .collect()
    }

    /// In-bounds king-move neighbors of `pos`: 3 for a corner cell, 5 for a
    /// non-corner edge cell, 8 for an interior cell. Never includes `pos`.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(8);
        for (dx, dy) in DIRECTIONS {
            let x = pos.x as i8 + dx;
            let y = pos.y as i8 + dy;
            if (0..BOARD_SIZE as i8).contains(&x) && (0..BOARD_SIZE as i8).contains(&y) {
                out.push(Position::new(x as usize, y as usize));
            }
        }
        out
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses whitespace-separated tile tokens, row-major.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.split_whitespace().map(str::to_string).collect())
    }
}

impl Index<Position> for Board {
    type Output = str;

    fn index(&self, pos: Position) -> &str {
        &self.tiles[pos.index()]
    }
}
