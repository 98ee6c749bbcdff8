use std::{fs, path::Path};

use crate::{error::Error, helpers::normalize_row};

/// Turns maze file contents into rows. Blank lines are skipped, whitespace inside
/// rows is ignored, so both `S.#` and the printed `S . #` form load.
pub fn parse_maze_text(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize_row)
        .filter(|row| !row.is_empty())
        .collect()
}

pub fn read_maze_file(path: &Path) -> Result<Vec<String>, Error> {
    let text = fs::read_to_string(path)?;
    let rows = parse_maze_text(&text);
    log::debug!("read {} rows from {:?}", rows.len(), path);
    Ok(rows)
}
