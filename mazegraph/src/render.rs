use crate::{
    dims::Pos,
    grid::{Cell, Grid},
};

/// Copy of the grid markers, nothing overlaid.
pub fn original(grid: &Grid) -> Vec<Vec<Cell>> {
    grid.cells().to_nested()
}

/// Copy of the grid markers with `path` overlaid as [`Cell::Path`].
///
/// Start and end keep their own markers. Positions outside the grid are ignored.
pub fn with_path(grid: &Grid, path: &[Pos]) -> Vec<Vec<Cell>> {
    let mut out = original(grid);

    for &Pos(r, c) in path {
        if let Some(cell) = out.get_mut(r).and_then(|row| row.get_mut(c)) {
            if !cell.is_endpoint() {
                *cell = Cell::Path;
            }
        }
    }

    out
}

/// Console format, markers separated by a single space.
pub fn to_lines(cells: &[Vec<Cell>]) -> Vec<String> {
    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_char().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
