pub mod paths {
    use std::path::PathBuf;

    use dirs::preference_dir;

    #[cfg(not(feature = "local_paths"))]
    pub fn base_path() -> PathBuf {
        preference_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mazesolver")
    }

    #[cfg(feature = "local_paths")]
    pub fn base_path() -> PathBuf {
        PathBuf::from("./mazesolver")
    }

    pub fn settings_path() -> PathBuf {
        base_path().join("settings.ron")
    }
}

pub const WELCOME: &str = "WELCOME TO THE MAZE SOLVER!";
pub const ABOUT: &str =
    "Here you can solve a maze using DFS (Depth First Search) and BFS (Breadth First Search)";
pub const GOODBYE: &str = "THANK YOU FOR PLAYING THE MAZE SOLVER!!!";
