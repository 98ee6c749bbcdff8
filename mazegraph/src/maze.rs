use crate::{
    adjacency::Adjacency,
    dims::{Pos, Size},
    error::MazeError,
    grid::{Cell, Grid},
    render,
    search::{self, Algorithm, SearchOutcome},
};

/// A parsed maze ready to be searched.
///
/// The grid and its adjacency are built together and never change afterwards,
/// so a new maze means a new `MazeGraph`.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    grid: Grid,
    adjacency: Adjacency,
}

impl MazeGraph {
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, MazeError> {
        let grid = Grid::parse(rows)?;
        Ok(Self::from_grid(grid))
    }

    pub fn from_grid(grid: Grid) -> Self {
        let adjacency = Adjacency::build(&grid);
        MazeGraph { grid, adjacency }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    pub fn size(&self) -> Size {
        self.grid.size()
    }

    pub fn start(&self) -> Pos {
        self.grid.start()
    }

    pub fn end(&self) -> Pos {
        self.grid.end()
    }

    pub fn depth_first_search(&self) -> SearchOutcome {
        self.solve(Algorithm::DepthFirst)
    }

    pub fn breadth_first_search(&self) -> SearchOutcome {
        self.solve(Algorithm::BreadthFirst)
    }

    pub fn solve(&self, algorithm: Algorithm) -> SearchOutcome {
        search::run(algorithm, &self.adjacency, self.start(), self.end())
    }

    pub fn render_original(&self) -> Vec<Vec<Cell>> {
        render::original(&self.grid)
    }

    pub fn render_with_path(&self, path: &[Pos]) -> Vec<Vec<Cell>> {
        render::with_path(&self.grid, path)
    }
}
