pub mod adjacency;
pub mod array;
mod collections;
pub mod dims;
pub mod error;
pub mod grid;
pub mod maze;
pub mod render;
pub mod search;

pub use adjacency::Adjacency;
pub use dims::{Direction, Pos, Size};
pub use error::MazeError;
pub use grid::{Cell, Grid};
pub use maze::MazeGraph;
pub use search::{Algorithm, SearchOutcome, SearchStats};
