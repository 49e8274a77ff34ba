use rand::Rng;

use super::disjoint_set::DisjointSet;
use crate::maze::{Carving, Edge, Maze};

/// Selects a spanning tree over the maze's grid edges with Kruskal's algorithm.
///
/// Edges get random weights and are taken cheapest first; ties keep their
/// emission order, so a seeded `rng` always yields the same carving. The loop
/// stops as soon as every cell is in one set. Edges never taken become walls.
pub fn randomized_kruskal<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> Carving {
    let mut edges = maze.build_edges(rng);
    // Stable sort, so equal weights stay in emission order
    edges.sort_by_key(|e| e.weight);

    let mut sets = DisjointSet::new(maze.len());
    let mut passages: Vec<Edge> = Vec::with_capacity(maze.len().saturating_sub(1));
    let mut walls: Vec<Edge> = Vec::with_capacity(edges.len());

    let mut remaining = edges.into_iter();
    while !sets.all_connected() {
        let Some(edge) = remaining.next() else {
            // Unreachable for a grid: its edges always connect every cell
            break;
        };
        let root_from = sets.find(maze.index_of(edge.from));
        let root_to = sets.find(maze.index_of(edge.to));

        if root_from != root_to {
            sets.union(root_from, root_to);
            passages.push(edge);
        } else {
            walls.push(edge);
        }
    }
    // Edges never considered are walls as well
    walls.extend(remaining);

    tracing::debug!(
        "[kruskal] {}x{} maze: {} passages, {} walls",
        maze.width(),
        maze.height(),
        passages.len(),
        walls.len()
    );

    Carving { passages, walls }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::tests::ScriptedRng;

    #[test]
    fn test_single_cell() {
        let maze = Maze::new(1, 1);
        let carving = randomized_kruskal(&maze, &mut ScriptedRng::new(&[1]));
        assert!(carving.passages.is_empty());
        assert!(carving.walls.is_empty());
    }

    #[test]
    fn test_ties_keep_emission_order() {
        // 2x2 grid, edges in emission order:
        // (0,0)-(1,0), (0,0)-(0,1), (1,0)-(1,1), (0,1)-(1,1)
        let maze = Maze::new(2, 2);
        let carving = randomized_kruskal(&maze, &mut ScriptedRng::new(&[5, 5, 5, 5]));
        let pairs = carving
            .passages
            .iter()
            .map(|e| (e.from, e.to))
            .collect::<Vec<_>>();
        assert_eq!(pairs, vec![((0, 0), (1, 0)), ((0, 0), (0, 1)), ((1, 0), (1, 1))]);
        assert_eq!(carving.walls, vec![Edge::new((0, 1), (1, 1), 5)]);
    }
}
