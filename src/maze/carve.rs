//! Randomized depth-first carving

use crate::error::PageError;
use crate::grid::MazeGrid;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Turn `grid` into a perfect maze: every pair of cells joined by exactly one path.
///
/// All walls are raised, then a backtracking depth-first walk from a random cell knocks
/// down one wall per newly visited cell. The cell being extended stays on the stack
/// under its new neighbor, which gives long winding corridors rather than a uniform
/// spanning tree.
///
/// Randomness is drawn in a fixed order: the start cell, then one choice per carved
/// passage.
///
/// # Examples
///
/// ```
/// use printable_pages::grid::MazeGrid;
/// use printable_pages::maze::carve::carve;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut grid = MazeGrid::new(10, 8).unwrap();
/// carve(&mut grid, &mut StdRng::seed_from_u64(7)).unwrap();
///
/// assert_eq!(grid.passage_count(), 10 * 8 - 1);
/// ```
pub fn carve<R: Rng + ?Sized>(grid: &mut MazeGrid, rng: &mut R) -> Result<(), PageError> {
    grid.set_all_walls(true);

    let start = rng.gen_range(0..grid.cell_count());
    let mut visited = vec![false; grid.cell_count()];
    visited[start] = true;
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let unvisited: Vec<usize> = grid
            .neighbors(cell)
            .into_iter()
            .filter(|&n| !visited[n])
            .collect();

        let Some(&next) = unvisited.choose(rng) else {
            // dead end, backtrack
            stack.pop();
            continue;
        };

        visited[next] = true;
        grid.set_wall(cell, next, false)?;
        stack.push(next);
    }

    debug!(
        "Carved {}x{} maze from cell {start}",
        grid.width(),
        grid.height()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::VecDeque;

    fn carved(width: usize, height: usize, seed: u64) -> MazeGrid {
        let mut grid = MazeGrid::new(width, height).unwrap();
        carve(&mut grid, &mut StdRng::seed_from_u64(seed)).unwrap();
        grid
    }

    /// Cells reachable from cell 0 through open passages
    fn reachable(grid: &MazeGrid) -> usize {
        let mut visited = vec![false; grid.cell_count()];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for n in grid.neighbors(cell) {
                if !visited[n] && !grid.is_wall(cell, n).unwrap() {
                    visited[n] = true;
                    queue.push_back(n);
                }
            }
        }
        count
    }

    /// Whether the open passages contain a cycle, by union-find
    fn has_cycle(grid: &MazeGrid) -> bool {
        fn find(parent: &mut [usize], mut i: usize) -> usize {
            while parent[i] != i {
                parent[i] = parent[parent[i]];
                i = parent[i];
            }
            i
        }

        let mut parent: Vec<usize> = (0..grid.cell_count()).collect();
        for (a, b) in grid.boundaries() {
            if grid.is_wall(a, b).unwrap() {
                continue;
            }
            let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
            if ra == rb {
                return true;
            }
            parent[ra] = rb;
        }
        false
    }

    #[test]
    fn single_cell() {
        let mut grid = MazeGrid::new(1, 1).unwrap();
        carve(&mut grid, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.edges().iter().all(|e| *e));
    }

    #[test]
    fn first_choice_golden() {
        // always start at cell 0 and take the first unvisited neighbor
        let mut grid = MazeGrid::new(3, 2).unwrap();
        carve(&mut grid, &mut StepRng::new(0, 0)).unwrap();

        let t = true;
        let f = false;
        assert_eq!(grid.edges(), &[t, f, t, f, f, t, t, f, t, f, t, t]);
        assert_eq!(grid.walls().collect::<Vec<_>>(), vec![(0, 3), (1, 4)]);
    }

    #[test]
    fn first_choice_corridor() {
        // with first-choice picks a single row becomes one straight corridor
        let mut grid = MazeGrid::new(6, 1).unwrap();
        carve(&mut grid, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(grid.walls().count(), 0);
    }

    #[test]
    fn single_column() {
        let grid = carved(1, 7, 3);
        assert_eq!(grid.passage_count(), 6);
        assert_eq!(reachable(&grid), 7);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = carved(12, 9, 1234);
        let b = carved(12, 9, 1234);
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn carving_resets_previous_state() {
        let mut grid = MazeGrid::new(5, 5).unwrap();
        grid.set_all_walls(false);
        carve(&mut grid, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(grid.passage_count(), 24);
    }

    proptest! {
        #[test]
        fn carving_makes_a_spanning_tree(width in 1usize..16, height in 1usize..16, seed: u64) {
            let grid = carved(width, height, seed);
            prop_assert_eq!(grid.passage_count(), width * height - 1);
            prop_assert_eq!(reachable(&grid), width * height);
            prop_assert!(!has_cycle(&grid));
        }

        #[test]
        fn wall_state_stays_symmetric(width in 1usize..10, height in 1usize..10, seed: u64) {
            let grid = carved(width, height, seed);
            for (a, b) in grid.boundaries() {
                prop_assert_eq!(grid.is_wall(a, b), grid.is_wall(b, a));
            }
        }
    }
}
