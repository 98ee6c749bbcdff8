use std::io::{BufRead, Write};

use mazegraph::{Algorithm, MazeError, MazeGraph, SearchOutcome};

use crate::{
    error::Error,
    helpers::constants::{ABOUT, GOODBYE, WELCOME},
    settings::{MazePreset, Settings},
    ui::{self, MenuChoice},
};

/// One interactive run: the terminal streams plus the maze currently loaded, if any.
pub struct Session<R, W> {
    input: R,
    output: W,
    maze: Option<MazeGraph>,
    presets: Vec<MazePreset>,
    color: bool,
    clear_on_start: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: &Settings) -> Self {
        Self {
            input,
            output,
            maze: None,
            presets: settings.get_mazes(),
            color: settings.get_color(),
            clear_on_start: settings.get_clear_on_start(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn maze(&self) -> Option<&MazeGraph> {
        self.maze.as_ref()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Replaces the current maze. The old one is dropped even if `rows` turn out invalid.
    pub fn load<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<&MazeGraph, MazeError> {
        self.maze = None;
        let maze = MazeGraph::new(rows)?;
        log::info!("loaded {} maze", maze.size());
        Ok(self.maze.insert(maze))
    }

    /// Runs the menu loop until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), Error> {
        if self.clear_on_start {
            ui::clear_screen(&mut self.output)?;
        }

        writeln!(self.output, "\t\t{}", WELCOME)?;
        writeln!(self.output, "\t{}", ABOUT)?;
        writeln!(self.output)?;

        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(Error::InputClosed) => {
                    log::debug!("input closed, leaving the menu");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Shows the menu once and handles the choice. Returns `false` on exit.
    fn step(&mut self) -> Result<bool, Error> {
        ui::print_menu(&mut self.output)?;
        let number = ui::read_choice(&mut self.input, &mut self.output, MenuChoice::ALL.len())?;
        let Some(choice) = MenuChoice::from_number(number) else {
            return Ok(true);
        };

        match choice {
            MenuChoice::InputMaze => self.input_maze()?,
            MenuChoice::ViewMaze => self.view_maze()?,
            MenuChoice::DepthFirst => {
                self.solve_and_show(Algorithm::DepthFirst)?;
            }
            MenuChoice::BreadthFirst => {
                self.solve_and_show(Algorithm::BreadthFirst)?;
            }
            MenuChoice::LoadPreset => self.load_preset()?,
            MenuChoice::ClearScreen => ui::clear_screen(&mut self.output)?,
            MenuChoice::Exit => {
                writeln!(self.output)?;
                writeln!(self.output, "{}", GOODBYE)?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn input_maze(&mut self) -> Result<(), Error> {
        let size = ui::read_dimensions(&mut self.input, &mut self.output)?;
        ui::print_legend(&mut self.output)?;
        let rows = ui::read_rows(&mut self.input, &mut self.output, size)?;
        self.install(&rows)
    }

    fn install<S: AsRef<str>>(&mut self, rows: &[S]) -> Result<(), Error> {
        match self.load(rows) {
            Ok(_) => {
                writeln!(self.output, "MAZE CREATED SUCCESSFULLY!!!")?;
                writeln!(self.output)?;
            }
            Err(err) => {
                log::warn!("maze rejected: {}", err);
                writeln!(self.output, "Maze was not created: {}", err)?;
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    fn view_maze(&mut self) -> Result<(), Error> {
        let Some(maze) = &self.maze else {
            writeln!(self.output)?;
            writeln!(self.output, "Please fill the maze and try to view the maze")?;
            writeln!(self.output)?;
            return Ok(());
        };

        writeln!(self.output, "Original Maze:")?;
        ui::print_grid(&mut self.output, &maze.render_original(), self.color)?;
        Ok(())
    }

    /// Runs `algorithm` on the current maze, printing statistics and the path.
    ///
    /// Without a maze this prints a hint and returns `None`.
    pub fn solve_and_show(
        &mut self,
        algorithm: Algorithm,
    ) -> Result<Option<SearchOutcome>, Error> {
        let Some(maze) = &self.maze else {
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Please fill the maze and try to perform {} for the maze",
                algorithm.short_name()
            )?;
            writeln!(self.output)?;
            return Ok(None);
        };

        writeln!(self.output)?;
        writeln!(self.output, "Solving maze using {}:", algorithm.short_name())?;

        let outcome = maze.solve(algorithm);
        ui::print_stats(&mut self.output, &outcome)?;
        if outcome.found() {
            ui::print_grid(
                &mut self.output,
                &maze.render_with_path(&outcome.path),
                self.color,
            )?;
        }

        Ok(Some(outcome))
    }

    fn load_preset(&mut self) -> Result<(), Error> {
        if self.presets.is_empty() {
            writeln!(self.output, "No preset mazes are configured")?;
            return Ok(());
        }

        let titles: Vec<&str> = self.presets.iter().map(|p| p.title.as_str()).collect();
        ui::print_list(&mut self.output, "PRESET MAZES:", &titles)?;
        let number = ui::read_choice(&mut self.input, &mut self.output, titles.len())?;

        let preset = self.presets[number - 1].clone();
        log::debug!("loading preset {:?}", preset.title);
        self.install(&preset.rows)
    }
}
