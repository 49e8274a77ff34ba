use std::fmt;

use super::{Maze, cell::Tile};

/// Read-only text rendering of a maze.
/// Cells sit on odd coordinates of a `(2w + 1) x (2h + 1)` tile grid, with the
/// tile between two cells open when they are linked.
pub struct MazeView<'a> {
    maze: &'a Maze,
    show_visited: bool,
}

impl<'a> MazeView<'a> {
    pub fn new(maze: &'a Maze, show_visited: bool) -> Self {
        MazeView { maze, show_visited }
    }

    /// Tile at a position of the tile grid.
    ///
    /// Panics if the position lies outside the `(2w + 1) x (2h + 1)` tile grid.
    pub fn tile_at(&self, tx: u16, ty: u16) -> Tile {
        let maze = self.maze;
        assert!(
            tx <= maze.width() as u16 * 2 && ty <= maze.height() as u16 * 2,
            "Tile position ({tx}, {ty}) is outside the tile grid"
        );
        match (tx % 2 == 1, ty % 2 == 1) {
            // Cell
            (true, true) => self.cell_tile(((tx / 2) as u8, (ty / 2) as u8)),
            // Between two horizontally adjacent cells
            (false, true) if tx > 0 && tx < maze.width() as u16 * 2 => {
                let left = ((tx / 2 - 1) as u8, (ty / 2) as u8);
                let right = ((tx / 2) as u8, left.1);
                self.between_tile(left, right)
            }
            // Between two vertically adjacent cells
            (true, false) if ty > 0 && ty < maze.height() as u16 * 2 => {
                let up = ((tx / 2) as u8, (ty / 2 - 1) as u8);
                let down = (up.0, (ty / 2) as u8);
                self.between_tile(up, down)
            }
            // Corners and the outer boundary
            _ => Tile::Wall,
        }
    }

    fn cell_tile(&self, coord: (u8, u8)) -> Tile {
        let cell = &self.maze[coord];
        if cell.on_path {
            Tile::Route
        } else if coord == self.maze.start() {
            Tile::Start
        } else if coord == self.maze.goal() {
            Tile::Goal
        } else if self.show_visited && cell.visited {
            Tile::Visited
        } else {
            Tile::Open
        }
    }

    fn between_tile(&self, a: (u8, u8), b: (u8, u8)) -> Tile {
        if !self.maze.is_linked(a, b) {
            Tile::Wall
        } else if self.maze[a].on_path && self.maze[b].on_path {
            Tile::Route
        } else {
            Tile::Open
        }
    }
}

impl fmt::Display for MazeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tile_width = self.maze.width() as u16 * 2 + 1;
        let tile_height = self.maze.height() as u16 * 2 + 1;
        for ty in 0..tile_height {
            for tx in 0..tile_width {
                write!(f, "{}", self.tile_at(tx, ty))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Carving, Edge};

    fn two_cell_maze(open: bool) -> Maze {
        let mut maze = Maze::new(2, 1);
        maze.connect_all_neighbors();
        let edge = Edge::new((0, 0), (1, 0), 0);
        let carving = if open {
            Carving {
                passages: vec![edge],
                walls: vec![],
            }
        } else {
            Carving {
                passages: vec![],
                walls: vec![edge],
            }
        };
        maze.carve(carving);
        maze
    }

    #[test]
    fn test_tiles_between_cells() {
        let maze = two_cell_maze(true);
        let view = maze.view(true);
        assert_eq!(view.tile_at(0, 0), Tile::Wall);
        assert_eq!(view.tile_at(1, 1), Tile::Start);
        assert_eq!(view.tile_at(2, 1), Tile::Open);
        assert_eq!(view.tile_at(3, 1), Tile::Goal);
        assert_eq!(view.tile_at(4, 1), Tile::Wall);

        let maze = two_cell_maze(false);
        assert_eq!(maze.view(true).tile_at(2, 1), Tile::Wall);
    }

    #[test]
    fn test_hidden_visited_and_route() {
        let mut maze = Maze::new(3, 1);
        maze.connect_all_neighbors();
        maze.carve(Carving {
            passages: vec![
                Edge::new((0, 0), (1, 0), 0),
                Edge::new((1, 0), (2, 0), 0),
            ],
            walls: vec![],
        });
        maze[(1, 0)].visited = true;
        assert_eq!(maze.view(true).tile_at(3, 1), Tile::Visited);
        assert_eq!(maze.view(false).tile_at(3, 1), Tile::Open);

        maze[(0, 0)].on_path = true;
        maze[(1, 0)].on_path = true;
        let view = maze.view(true);
        assert_eq!(view.tile_at(2, 1), Tile::Route);
        assert_eq!(view.tile_at(3, 1), Tile::Route);
        assert_eq!(view.tile_at(4, 1), Tile::Open);
    }

    #[test]
    #[should_panic(expected = "outside the tile grid")]
    fn test_tile_outside_grid() {
        // 2x1 maze has a 5x3 tile grid; (5, 1) would be a cell column past the edge
        two_cell_maze(true).view(true).tile_at(5, 1);
    }

    #[test]
    #[should_panic(expected = "outside the tile grid")]
    fn test_boundary_tile_outside_grid() {
        two_cell_maze(true).view(true).tile_at(0, 3);
    }

    #[test]
    fn test_display_dimensions() {
        let maze = two_cell_maze(true);
        let text = maze.to_string();
        assert_eq!(text.lines().count(), 3);
    }
}
