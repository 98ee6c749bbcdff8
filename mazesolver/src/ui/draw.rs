use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use mazegraph::{render, Cell, SearchOutcome};

pub fn paint(cell: Cell) -> ColoredString {
    let text = cell.to_char().to_string();
    match cell {
        Cell::Start => text.green().bold(),
        Cell::End => text.red().bold(),
        Cell::Path => text.yellow().bold(),
        Cell::Wall => text.bright_black(),
        Cell::Open => text.normal(),
    }
}

/// Grid rows as printed, markers separated by a single space.
pub fn grid_lines(cells: &[Vec<Cell>], color: bool) -> Vec<String> {
    if !color {
        return render::to_lines(cells);
    }

    cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|&cell| paint(cell).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn print_grid(out: &mut impl Write, cells: &[Vec<Cell>], color: bool) -> io::Result<()> {
    for line in grid_lines(cells, color) {
        writeln!(out, "{}", line)?;
    }
    writeln!(out)
}

pub fn print_legend(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{} - Starting Cell", Cell::START_CHAR)?;
    writeln!(out, "{} - Ending Cell", Cell::END_CHAR)?;
    writeln!(out, "{} - Movable Cell", Cell::OPEN_CHAR)?;
    writeln!(out, "{} or {} - Wall", Cell::WALL_CHAR, Cell::ALT_WALL_CHAR)?;
    writeln!(out)
}

/// Prints the statistics of a search, or that nothing was found.
pub fn print_stats(out: &mut impl Write, outcome: &SearchOutcome) -> io::Result<()> {
    let name = outcome.algorithm.short_name();
    if outcome.found() {
        writeln!(out, "{} Stats:", name)?;
        writeln!(out, "Path length: {}", outcome.stats.path_len)?;
        writeln!(out, "Nodes explored: {}", outcome.stats.nodes_explored)
    } else {
        writeln!(out, "{}: No path found!", name)
    }
}

pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

#[cfg(test)]
mod tests {
    use mazegraph::{Algorithm, MazeGraph, SearchStats};

    use super::*;

    fn printed(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_grid() {
        let maze = MazeGraph::new(&["S.1", "..E"]).unwrap();
        let text = printed(|o| print_grid(o, &maze.render_original(), false));
        assert_eq!(text, "S . #\n. . E\n\n");
    }

    #[test]
    fn colored_grid_keeps_markers() {
        colored::control::set_override(true);
        let maze = MazeGraph::new(&["SE"]).unwrap();
        let lines = grid_lines(&maze.render_original(), true);
        assert!(lines[0].contains('S'));
        assert!(lines[0].contains('E'));
        assert!(lines[0].contains('\u{1b}'));
    }

    #[test]
    fn stats_found_and_missing() {
        let maze = MazeGraph::new(&["SE"]).unwrap();
        let found = printed(|o| print_stats(o, &maze.breadth_first_search()));
        assert_eq!(found, "BFS Stats:\nPath length: 2\nNodes explored: 2\n");

        let missing = SearchOutcome {
            algorithm: Algorithm::DepthFirst,
            path: vec![],
            stats: SearchStats::default(),
        };
        assert_eq!(
            printed(|o| print_stats(o, &missing)),
            "DFS: No path found!\n"
        );
    }
}
