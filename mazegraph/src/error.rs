use thiserror::Error;

use crate::dims::Pos;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown marker {marker:?} at {pos}")]
    InvalidMarker { pos: Pos, marker: char },
    #[error("maze has no start cell ('S')")]
    MissingStart,
    #[error("maze has no end cell ('E')")]
    MissingEnd,
    #[error("maze has more than one start cell, at {first} and {second}")]
    DuplicateStart { first: Pos, second: Pos },
    #[error("maze has more than one end cell, at {first} and {second}")]
    DuplicateEnd { first: Pos, second: Pos },
}
