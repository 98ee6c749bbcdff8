use std::{io, path::PathBuf};

use clap::{Parser, ValueEnum};
use mazegraph::Algorithm;
use mazesolver::{loader, logging, settings::Settings, Error, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SolveMode {
    Dfs,
    Bfs,
    Both,
    /// Algorithm set as `default_algorithm` in the settings
    Default,
}

impl SolveMode {
    /// Searches to run, in order. `default` stands in for [`SolveMode::Default`].
    fn algorithms(self, default: Algorithm) -> Vec<Algorithm> {
        match self {
            SolveMode::Dfs => vec![Algorithm::DepthFirst],
            SolveMode::Bfs => vec![Algorithm::BreadthFirst],
            SolveMode::Both => Algorithm::all().to_vec(),
            SolveMode::Default => vec![default],
        }
    }
}

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazesolver")]
struct Args {
    #[clap(short, long, help = "Load the maze from a text file, one row per line")]
    maze: Option<PathBuf>,
    #[clap(
        short,
        long,
        value_enum,
        requires = "maze",
        help = "Solve the loaded maze and quit instead of showing the menu"
    )]
    solve: Option<SolveMode>,
    #[clap(long, action, help = "Print mazes without colors")]
    no_color: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "Log more, repeat for even more")]
    verbose: u8,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = run(args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    if args.reset_config {
        Settings::reset_config(Settings::default_path())?;
        return Ok(());
    }

    if args.show_config_path {
        let settings_path = Settings::default_path();
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    if args.debug_config {
        println!("{:#?}", Settings::load(Settings::default_path()));
        return Ok(());
    }

    better_panic::install();

    // warnings from loading the settings go through the default level
    logging::init(log::LevelFilter::Warn);
    let settings = Settings::load_or_default(Settings::default_path());
    logging::init(logging::verbosity_level(
        settings.get_log_level(),
        args.verbose,
    ));

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), &settings)
        .with_color(settings.get_color() && !args.no_color);

    if let Some(path) = &args.maze {
        let rows = loader::read_maze_file(path)?;
        session.load(&rows)?;
    }

    if let Some(mode) = args.solve {
        for algorithm in mode.algorithms(settings.get_default_algorithm()) {
            session.solve_and_show(algorithm)?;
        }
        return Ok(());
    }

    session.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_modes() {
        let default = Algorithm::BreadthFirst;
        assert_eq!(SolveMode::Dfs.algorithms(default), vec![Algorithm::DepthFirst]);
        assert_eq!(SolveMode::Bfs.algorithms(default), vec![Algorithm::BreadthFirst]);
        assert_eq!(
            SolveMode::Both.algorithms(default),
            vec![Algorithm::DepthFirst, Algorithm::BreadthFirst]
        );
        assert_eq!(
            SolveMode::Default.algorithms(Algorithm::DepthFirst),
            vec![Algorithm::DepthFirst]
        );
    }

    #[test]
    fn solve_needs_a_maze() {
        assert!(Args::try_parse_from(["mazesolver", "--solve", "bfs"]).is_err());

        let args =
            Args::try_parse_from(["mazesolver", "-m", "maze.txt", "-s", "both", "-vv"]).unwrap();
        assert_eq!(args.solve, Some(SolveMode::Both));
        assert_eq!(args.maze, Some(PathBuf::from("maze.txt")));
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn bad_maze_file_reports_the_maze_error() {
        let path = std::env::temp_dir().join(format!("mazesolver-bad-{}.txt", std::process::id()));
        std::fs::write(&path, "S..\n...\n").unwrap();

        let rows = loader::read_maze_file(&path).unwrap();
        let settings = Settings::builtin();
        let mut session = Session::new(io::empty(), Vec::new(), &settings);
        let err = Error::from(session.load(&rows).unwrap_err());
        assert_eq!(err.to_string(), "Maze error; maze has no end cell ('E')");

        let _ = std::fs::remove_file(&path);
    }
}
