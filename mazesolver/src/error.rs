use mazegraph::MazeError;
use thiserror::Error;

use crate::settings::SettingsError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze error; {0}")]
    Maze(#[from] MazeError),
    #[error("Settings error; {0}")]
    Settings(#[from] SettingsError),
    #[error("Input closed")]
    InputClosed,
}
