use std::io::{BufRead, Write};

use mazegraph::{Cell, Size};
use thiserror::Error;

use crate::{error::Error, helpers::normalize_row};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("Row given has column size greater than the required size!")]
    TooLong,
    #[error("Row given has length smaller than the required size!")]
    TooShort,
    #[error("Row contains {0:?}, which is not a maze marker!")]
    InvalidMarker(char),
}

/// Reads one line without its line ending. End of input is [`Error::InputClosed`].
pub fn read_line(input: &mut impl BufRead) -> Result<String, Error> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    msg: &str,
) -> Result<String, Error> {
    write!(output, "{}", msg)?;
    output.flush()?;
    read_line(input)
}

/// Parses `rows cols`, `rows x cols` or `rowsxcols` into a size with both sides positive.
pub fn parse_dimensions(text: &str) -> Option<Size> {
    let mut parts = text
        .split(|c: char| c.is_whitespace() || c == 'x' || c == 'X' || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>);

    let rows = parts.next()?.ok()?;
    let cols = parts.next()?.ok()?;
    if parts.next().is_some() || rows == 0 || cols == 0 {
        return None;
    }

    Some(Size(rows, cols))
}

pub fn validate_row(row: &str, cols: usize) -> Result<(), RowError> {
    if let Some(bad) = row.chars().find(|&ch| Cell::from_char(ch).is_none()) {
        return Err(RowError::InvalidMarker(bad));
    }

    let len = row.chars().count();
    if len > cols {
        Err(RowError::TooLong)
    } else if len < cols {
        Err(RowError::TooShort)
    } else {
        Ok(())
    }
}

pub fn read_dimensions(input: &mut impl BufRead, output: &mut impl Write) -> Result<Size, Error> {
    loop {
        let line = prompt(input, output, "Enter the dimension of the matrix (row x column): ")?;
        match parse_dimensions(&line) {
            Some(size) => return Ok(size),
            None => writeln!(output, "Please enter two positive numbers, e.g. 5 5")?,
        }
    }
}

/// Reads `size.rows()` rows, asking again for any row that doesn't fit.
pub fn read_rows(
    input: &mut impl BufRead,
    output: &mut impl Write,
    size: Size,
) -> Result<Vec<String>, Error> {
    let mut rows = Vec::with_capacity(size.rows());

    while rows.len() < size.rows() {
        let msg = format!("Enter row {} for the maze: ", rows.len() + 1);
        let row = normalize_row(&prompt(input, output, &msg)?);

        match validate_row(&row, size.cols()) {
            Ok(()) => rows.push(row),
            Err(err) => {
                log::debug!("rejected row {:?}: {}", row, err);
                writeln!(output, "{}", err)?;
            }
        }
    }

    Ok(rows)
}

/// Reads a menu choice in `1..=max`, asking again until one is given.
pub fn read_choice(
    input: &mut impl BufRead,
    output: &mut impl Write,
    max: usize,
) -> Result<usize, Error> {
    let mut line = prompt(input, output, "Enter your choice: ")?;
    loop {
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
            _ => {
                writeln!(output)?;
                writeln!(output, "Entered choice is out of range!")?;
                line = prompt(input, output, "Enter your choice: ")?;
            }
        }
    }
}
