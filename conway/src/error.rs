// error.rs - Errors from building grids and scene names out of data

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scene `{0}`, expected one of: first, second, third")]
pub struct UnknownScene(pub String);
