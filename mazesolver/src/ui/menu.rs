use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    InputMaze,
    ViewMaze,
    DepthFirst,
    BreadthFirst,
    LoadPreset,
    ClearScreen,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::InputMaze,
        MenuChoice::ViewMaze,
        MenuChoice::DepthFirst,
        MenuChoice::BreadthFirst,
        MenuChoice::LoadPreset,
        MenuChoice::ClearScreen,
        MenuChoice::Exit,
    ];

    /// Menu entries are numbered from one.
    pub fn from_number(n: usize) -> Option<MenuChoice> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::InputMaze => "INPUT THE MAZE",
            MenuChoice::ViewMaze => "VIEW THE MAZE",
            MenuChoice::DepthFirst => "PERFORM DFS FOR THE MAZE",
            MenuChoice::BreadthFirst => "PERFORM BFS FOR THE MAZE",
            MenuChoice::LoadPreset => "LOAD A PRESET MAZE",
            MenuChoice::ClearScreen => "CLEAR THE SCREEN",
            MenuChoice::Exit => "EXIT",
        }
    }
}

pub fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "OPERATIONS FOR THE MAZE:")?;
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        writeln!(out, "{}.{}", i + 1, choice.label())?;
    }
    writeln!(out)
}

/// Numbered list of titles, used for picking presets.
pub fn print_list(out: &mut impl Write, title: &str, items: &[&str]) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item)?;
    }
    writeln!(out)
}
