use crate::{
    collections::HashMap,
    dims::{Direction, Pos},
    grid::Grid,
};

/// Precomputed neighbor lists for every navigable cell.
///
/// Walls and out of range positions have no entry. Neighbor lists keep the
/// [`Direction::in_order`] order, which is what makes the searches deterministic.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    neighbors: HashMap<Pos, Vec<Pos>>,
}

impl Adjacency {
    pub fn build(grid: &Grid) -> Self {
        let mut neighbors = HashMap::with_capacity(grid.navigable_count());

        for pos in grid.iter_pos() {
            if !grid.is_navigable_pos(pos) {
                continue;
            }

            let list: Vec<Pos> = Direction::in_order()
                .into_iter()
                .map(|dir| dir.offset())
                .filter(|off| grid.is_navigable(pos.0 as isize + off.0, pos.1 as isize + off.1))
                .filter_map(|off| pos.checked_add(off))
                .collect();

            neighbors.insert(pos, list);
        }

        log::debug!("built adjacency for {} cells", neighbors.len());

        Adjacency { neighbors }
    }

    /// Neighbors of `pos`, empty for walls and positions outside the grid.
    pub fn neighbors(&self, pos: Pos) -> &[Pos] {
        self.neighbors.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.neighbors.contains_key(&pos)
    }

    pub fn are_adjacent(&self, a: Pos, b: Pos) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_order_is_north_east_south_west() {
        let grid = Grid::parse(&["...", ".S.", "..E"]).unwrap();
        let adj = Adjacency::build(&grid);

        assert_eq!(
            adj.neighbors(Pos(1, 1)),
            &[Pos(0, 1), Pos(1, 2), Pos(2, 1), Pos(1, 0)]
        );
        assert_eq!(adj.neighbors(Pos(0, 0)), &[Pos(0, 1), Pos(1, 0)]);
        assert_eq!(adj.neighbors(Pos(2, 2)), &[Pos(1, 2), Pos(2, 1)]);
    }

    #[test]
    fn walls_have_no_entry() {
        let grid = Grid::parse(&["S#", "1E"]).unwrap();
        let adj = Adjacency::build(&grid);

        assert_eq!(adj.len(), 2);
        assert!(!adj.contains(Pos(0, 1)));
        assert!(!adj.contains(Pos(1, 0)));
        assert!(adj.neighbors(Pos(0, 1)).is_empty());
        assert!(adj.neighbors(Pos(0, 0)).is_empty());
        assert!(adj.neighbors(Pos(7, 7)).is_empty());
    }

    #[test]
    fn adjacency_is_symmetric() {
        let grid = Grid::parse(&["S....", "#.#..", "..#.#", "#.#E.", "#...#"]).unwrap();
        let adj = Adjacency::build(&grid);

        assert_eq!(adj.len(), grid.navigable_count());
        for pos in grid.iter_pos().filter(|&p| adj.contains(p)) {
            for &other in adj.neighbors(pos) {
                assert_eq!(pos.0.abs_diff(other.0) + pos.1.abs_diff(other.1), 1);
                assert!(adj.are_adjacent(other, pos));
            }
        }
    }
}
