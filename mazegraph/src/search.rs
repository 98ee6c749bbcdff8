//! Uninformed path searches over an [`Adjacency`].
//!
//! Both searches share [`traverse`], they only differ in which [`Frontier`]
//! they hand to it.

use std::{collections::VecDeque, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    adjacency::Adjacency,
    collections::{HashMap, HashSet},
    dims::Pos,
};

/// Working set of discovered but not yet expanded cells.
pub trait Frontier {
    fn with_capacity(capacity: usize) -> Self;
    fn push(&mut self, pos: Pos);
    fn pop(&mut self) -> Option<Pos>;
}

/// Last in, first out. Gives depth-first order.
#[derive(Debug, Default)]
pub struct Stack(Vec<Pos>);

/// First in, first out. Gives breadth-first order.
#[derive(Debug, Default)]
pub struct Queue(VecDeque<Pos>);

impl Frontier for Stack {
    fn with_capacity(capacity: usize) -> Self {
        Stack(Vec::with_capacity(capacity))
    }

    fn push(&mut self, pos: Pos) {
        self.0.push(pos);
    }

    fn pop(&mut self) -> Option<Pos> {
        self.0.pop()
    }
}

impl Frontier for Queue {
    fn with_capacity(capacity: usize) -> Self {
        Queue(VecDeque::with_capacity(capacity))
    }

    fn push(&mut self, pos: Pos) {
        self.0.push_back(pos);
    }

    fn pop(&mut self) -> Option<Pos> {
        self.0.pop_front()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl Algorithm {
    pub fn short_name(self) -> &'static str {
        match self {
            Algorithm::DepthFirst => "DFS",
            Algorithm::BreadthFirst => "BFS",
        }
    }

    pub fn all() -> [Algorithm; 2] {
        [Algorithm::DepthFirst, Algorithm::BreadthFirst]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "depth-first search"),
            Algorithm::BreadthFirst => write!(f, "breadth-first search"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search algorithm {0:?}, expected dfs or bfs")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth" | "depth-first" => Ok(Algorithm::DepthFirst),
            "bfs" | "breadth" | "breadth-first" => Ok(Algorithm::BreadthFirst),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Number of cells in the path, both ends included. Zero when nothing was found.
    pub path_len: usize,
    /// Number of cells taken out of the frontier, the goal included.
    pub nodes_explored: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub path: Vec<Pos>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Runs one search from `start` to `end` using frontier `F`.
///
/// Every reachable cell enters the frontier at most once, so this always
/// terminates. An empty path means `end` isn't reachable.
pub fn traverse<F: Frontier>(
    adjacency: &Adjacency,
    start: Pos,
    end: Pos,
) -> (Vec<Pos>, SearchStats) {
    let mut frontier = F::with_capacity(adjacency.len());
    let mut visited: HashSet<Pos> = HashSet::with_capacity(adjacency.len());
    let mut parent: HashMap<Pos, Pos> = HashMap::with_capacity(adjacency.len());
    let mut nodes_explored = 0;

    frontier.push(start);
    visited.insert(start);
    parent.insert(start, start);

    while let Some(current) = frontier.pop() {
        nodes_explored += 1;

        if current == end {
            let path = reconstruct(&parent, start, end);
            let stats = SearchStats {
                path_len: path.len(),
                nodes_explored,
            };
            return (path, stats);
        }

        for &neighbor in adjacency.neighbors(current) {
            if visited.insert(neighbor) {
                parent.insert(neighbor, current);
                frontier.push(neighbor);
            }
        }
    }

    (
        Vec::new(),
        SearchStats {
            path_len: 0,
            nodes_explored,
        },
    )
}

/// Walks predecessor links back from `end`, then flips the result.
fn reconstruct(parent: &HashMap<Pos, Pos>, start: Pos, end: Pos) -> Vec<Pos> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        match parent.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            // every cell in the frontier got a parent before being pushed
            None => unreachable!("cell {current} was reached without a predecessor"),
        }
    }

    path.reverse();
    path
}

pub fn depth_first(adjacency: &Adjacency, start: Pos, end: Pos) -> SearchOutcome {
    run(Algorithm::DepthFirst, adjacency, start, end)
}

pub fn breadth_first(adjacency: &Adjacency, start: Pos, end: Pos) -> SearchOutcome {
    run(Algorithm::BreadthFirst, adjacency, start, end)
}

pub fn run(algorithm: Algorithm, adjacency: &Adjacency, start: Pos, end: Pos) -> SearchOutcome {
    let (path, stats) = match algorithm {
        Algorithm::DepthFirst => traverse::<Stack>(adjacency, start, end),
        Algorithm::BreadthFirst => traverse::<Queue>(adjacency, start, end),
    };

    if path.is_empty() {
        log::info!(
            "{}: no path found after exploring {} cells",
            algorithm.short_name(),
            stats.nodes_explored
        );
    } else {
        log::info!(
            "{}: path of {} cells, {} explored",
            algorithm.short_name(),
            stats.path_len,
            stats.nodes_explored
        );
    }

    SearchOutcome {
        algorithm,
        path,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    fn adjacency(rows: &[&str]) -> (Grid, Adjacency) {
        let grid = Grid::parse(rows).unwrap();
        let adj = Adjacency::build(&grid);
        (grid, adj)
    }

    #[test]
    fn frontiers_pop_order() {
        let mut stack = Stack::with_capacity(2);
        let mut queue = Queue::with_capacity(2);
        for pos in [Pos(0, 0), Pos(0, 1)] {
            stack.push(pos);
            queue.push(pos);
        }

        assert_eq!(stack.pop(), Some(Pos(0, 1)));
        assert_eq!(queue.pop(), Some(Pos(0, 0)));
        assert_eq!(stack.pop(), Some(Pos(0, 0)));
        assert_eq!(queue.pop(), Some(Pos(0, 1)));
        assert_eq!(stack.pop(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn depth_first_follows_last_pushed_neighbor() {
        // From the start, east is pushed before south, so south is expanded first.
        let (grid, adj) = adjacency(&["S.", ".E"]);
        let out = depth_first(&adj, grid.start(), grid.end());

        assert_eq!(out.path, vec![Pos(0, 0), Pos(1, 0), Pos(1, 1)]);
        assert_eq!(out.stats.nodes_explored, 3);
    }

    #[test]
    fn breadth_first_explores_by_layers() {
        let (grid, adj) = adjacency(&["S..", "...", "..E"]);
        let out = breadth_first(&adj, grid.start(), grid.end());

        assert_eq!(out.stats.path_len, 5);
        // every cell is closer than or as close as the goal, so all nine are popped
        assert_eq!(out.stats.nodes_explored, 9);
    }

    #[test]
    fn unreachable_goal_explores_whole_component() {
        let (grid, adj) = adjacency(&["S.#", "..#", "##E"]);
        for algorithm in Algorithm::all() {
            let out = run(algorithm, &adj, grid.start(), grid.end());
            assert!(!out.found());
            assert_eq!(out.stats.path_len, 0);
            assert_eq!(out.stats.nodes_explored, 4);
        }
    }

    #[test]
    fn start_equal_to_end_is_a_single_cell_path() {
        let (_, adj) = adjacency(&["S.E"]);
        let (path, stats) = traverse::<Queue>(&adj, Pos(0, 1), Pos(0, 1));
        assert_eq!(path, vec![Pos(0, 1)]);
        assert_eq!(stats.nodes_explored, 1);
    }

    #[test]
    fn parse_algorithm() {
        assert_eq!("dfs".parse::<Algorithm>(), Ok(Algorithm::DepthFirst));
        assert_eq!("BFS".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert_eq!("breadth-first".parse::<Algorithm>(), Ok(Algorithm::BreadthFirst));
        assert!("astar".parse::<Algorithm>().is_err());
    }
}
