use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    array::Array2D,
    dims::{Pos, Size},
    error::MazeError,
};

/// Single grid marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Start,
    End,
    Open,
    Wall,
    /// Only produced when rendering a found path.
    Path,
}

impl Cell {
    pub const START_CHAR: char = 'S';
    pub const END_CHAR: char = 'E';
    pub const OPEN_CHAR: char = '.';
    pub const WALL_CHAR: char = '#';
    pub const ALT_WALL_CHAR: char = '1';
    pub const PATH_CHAR: char = '*';

    /// Parses an input marker. `*` is output-only and isn't accepted here.
    pub fn from_char(ch: char) -> Option<Cell> {
        match ch {
            Self::START_CHAR => Some(Cell::Start),
            Self::END_CHAR => Some(Cell::End),
            Self::OPEN_CHAR => Some(Cell::Open),
            Self::WALL_CHAR | Self::ALT_WALL_CHAR => Some(Cell::Wall),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Start => Self::START_CHAR,
            Cell::End => Self::END_CHAR,
            Cell::Open => Self::OPEN_CHAR,
            Cell::Wall => Self::WALL_CHAR,
            Cell::Path => Self::PATH_CHAR,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Cell::Wall
    }

    pub fn is_endpoint(self) -> bool {
        matches!(self, Cell::Start | Cell::End)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Immutable maze grid with its start and end located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Cell>,
    start: Pos,
    end: Pos,
}

impl Grid {
    /// Parses text rows into a grid.
    ///
    /// Every row must have the same length and the grid must contain exactly one
    /// start and exactly one end.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Grid, MazeError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if expected == 0 {
            return Err(MazeError::Empty);
        }

        let mut parsed = Vec::with_capacity(rows.len());
        let mut start: Option<Pos> = None;
        let mut end: Option<Pos> = None;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(MazeError::RaggedRow {
                    row: r,
                    expected,
                    found,
                });
            }

            let mut cells = Vec::with_capacity(expected);
            for (c, ch) in row.chars().enumerate() {
                let pos = Pos(r, c);
                let cell = Cell::from_char(ch)
                    .ok_or(MazeError::InvalidMarker { pos, marker: ch })?;

                match cell {
                    Cell::Start => match start {
                        Some(first) => {
                            return Err(MazeError::DuplicateStart { first, second: pos })
                        }
                        None => start = Some(pos),
                    },
                    Cell::End => match end {
                        Some(first) => {
                            return Err(MazeError::DuplicateEnd { first, second: pos })
                        }
                        None => end = Some(pos),
                    },
                    _ => {}
                }

                cells.push(cell);
            }
            parsed.push(cells);
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let end = end.ok_or(MazeError::MissingEnd)?;
        let cells = Array2D::from_rows(parsed).ok_or(MazeError::Empty)?;

        log::debug!("parsed {} grid, start {}, end {}", cells.size(), start, end);

        Ok(Grid { cells, start, end })
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// True iff `(row, col)` lies inside the grid and isn't a wall.
    pub fn is_navigable(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }

        self.get(Pos(row as usize, col as usize))
            .is_some_and(|cell| !cell.is_wall())
    }

    pub fn is_navigable_pos(&self, pos: Pos) -> bool {
        self.get(pos).is_some_and(|cell| !cell.is_wall())
    }

    pub fn navigable_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_wall()).count()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells.iter_pos()
    }

    pub fn cells(&self) -> &Array2D<Cell> {
        &self.cells
    }
}
