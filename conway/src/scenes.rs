// scenes.rs - Named seed patterns for the 16x25 grid

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::UnknownScene;
use crate::grid::{Cell, DEFAULT_COLS, DEFAULT_ROWS, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneId {
    First,
    Second,
    Third,
}

impl SceneId {
    pub const ALL: [SceneId; 3] = [SceneId::First, SceneId::Second, SceneId::Third];

    pub fn name(self) -> &'static str {
        match self {
            SceneId::First => "first",
            SceneId::Second => "second",
            SceneId::Third => "third",
        }
    }

    /// Button caption.
    pub fn label(self) -> &'static str {
        match self {
            SceneId::First => "Scene 1",
            SceneId::Second => "Scene 2",
            SceneId::Third => "Scene 3",
        }
    }

    pub fn scene(self) -> &'static Scene {
        match self {
            SceneId::First => &SCENES[0],
            SceneId::Second => &SCENES[1],
            SceneId::Third => &SCENES[2],
        }
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneId {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}

/// Immutable seed pattern: the live cells of a `rows` x `cols` grid.
pub struct Scene {
    pub id: SceneId,
    pub rows: usize,
    pub cols: usize,
    pub cells: &'static [(usize, usize)],
}

impl Scene {
    /// Fresh grid copy of the pattern.
    pub fn grid(&self) -> Grid {
        let mut grid = Grid::dead(self.rows, self.cols);
        for &(row, col) in self.cells {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }
}

pub static SCENES: [Scene; 3] = [
    // Glider, blinker and block
    Scene {
        id: SceneId::First,
        rows: DEFAULT_ROWS,
        cols: DEFAULT_COLS,
        cells: &[
            (1, 2), (2, 3), (3, 1), (3, 2), (3, 3),
            (8, 12), (8, 13), (8, 14),
            (12, 20), (12, 21), (13, 20), (13, 21),
        ],
    },
    // Pulsar
    Scene {
        id: SceneId::Second,
        rows: DEFAULT_ROWS,
        cols: DEFAULT_COLS,
        cells: &[
            (1, 8), (1, 9), (1, 10), (1, 14), (1, 15), (1, 16),
            (3, 6), (3, 11), (3, 13), (3, 18),
            (4, 6), (4, 11), (4, 13), (4, 18),
            (5, 6), (5, 11), (5, 13), (5, 18),
            (6, 8), (6, 9), (6, 10), (6, 14), (6, 15), (6, 16),
            (8, 8), (8, 9), (8, 10), (8, 14), (8, 15), (8, 16),
            (9, 6), (9, 11), (9, 13), (9, 18),
            (10, 6), (10, 11), (10, 13), (10, 18),
            (11, 6), (11, 11), (11, 13), (11, 18),
            (13, 8), (13, 9), (13, 10), (13, 14), (13, 15), (13, 16),
        ],
    },
    // Beacon, R-pentomino and toad
    Scene {
        id: SceneId::Third,
        rows: DEFAULT_ROWS,
        cols: DEFAULT_COLS,
        cells: &[
            (1, 1), (1, 2), (2, 1), (2, 2), (3, 3), (3, 4), (4, 3), (4, 4),
            (7, 12), (7, 13), (8, 11), (8, 12), (9, 12),
            (12, 18), (12, 19), (12, 20), (13, 17), (13, 18), (13, 19),
        ],
    },
];
