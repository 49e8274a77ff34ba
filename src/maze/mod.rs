pub mod cell;
pub mod edge;
mod view;

use rand::Rng;

pub use cell::{Cell, Neighbors, Tile};
pub use edge::Edge;
pub use view::MazeView;

/// Result of a spanning-tree selection over a maze's edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carving {
    /// Edges in the spanning tree. Their walls are removed.
    pub passages: Vec<Edge>,
    /// Every other edge. Their walls stay up.
    pub walls: Vec<Edge>,
}

/// Grid graph of cells. Before carving every cell is linked to all of its grid
/// neighbors; after carving the links are exactly the open passages.
pub struct Maze {
    cells: Box<[Cell]>,
    width: u8,
    height: u8,
    passages: Vec<Edge>,
    walls: Vec<Edge>,
    carved: bool,
}

impl Maze {
    /// Creates a grid of `width x height` cells with cleared flags and no links.
    ///
    /// Panics if either width or height is 0.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(
            width > 0 && height > 0,
            "Maze dimensions must be at least 1x1, got {width}x{height}"
        );
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new((x, y))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Maze {
            cells,
            width,
            height,
            passages: Vec::new(),
            walls: Vec::new(),
            carved: false,
        }
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false, since a maze has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Top left cell, where searches begin.
    pub fn start(&self) -> (u8, u8) {
        (0, 0)
    }

    /// Bottom right cell, where searches end.
    pub fn goal(&self) -> (u8, u8) {
        (self.width - 1, self.height - 1)
    }

    /// Whether walls have been carved, i.e. adjacency reflects a finished maze.
    pub fn is_carved(&self) -> bool {
        self.carved
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// Flat index of a coordinate.
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn index_of(&self, coord: (u8, u8)) -> usize {
        assert!(
            self.is_in_bounds(coord),
            "The given coordinate {coord:?} is out of bounds"
        );
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    /// Coordinate of a flat index.
    pub fn coord_of(&self, index: usize) -> (u8, u8) {
        let width = self.width as usize;
        ((index % width) as u8, (index / width) as u8)
    }

    /// All cells in row-major order, so cell `(x, y)` is at index `y * width + x`.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Edges whose walls were removed. Empty until carved.
    pub fn passages(&self) -> &[Edge] {
        &self.passages
    }

    /// Edges whose walls are still standing. Empty until carved.
    pub fn walls(&self) -> &[Edge] {
        &self.walls
    }

    /// Checks whether `a` links to `b`.
    pub fn is_linked(&self, a: (u8, u8), b: (u8, u8)) -> bool {
        self[a].neighbors().contains(b)
    }

    /// Emits one edge per grid adjacency with a random weight, row by row.
    /// Within a cell, the edge to the cell above comes before the edge to the cell on the left.
    pub fn build_edges<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Edge> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for y in 0..self.height {
            for x in 0..self.width {
                if y > 0 {
                    edges.push(Edge::new((x, y - 1), (x, y), rng.random::<u32>()));
                }
                if x > 0 {
                    edges.push(Edge::new((x - 1, y), (x, y), rng.random::<u32>()));
                }
            }
        }
        edges
    }

    /// Number of interior adjacencies: `2wh - w - h`.
    pub fn edge_count(&self) -> usize {
        let (w, h) = (self.width as usize, self.height as usize);
        2 * w * h - w - h
    }

    /// Links every cell to all in-bounds grid neighbors.
    /// Links are added in the order right, left, up, down.
    pub fn connect_all_neighbors(&mut self) {
        for index in 0..self.cells.len() {
            let coord = self.coord_of(index);
            let neighbors = get_neighbors(coord, self).collect::<Vec<_>>();
            let cell = &mut self.cells[index];
            neighbors.into_iter().for_each(|n| {
                cell.neighbors_mut().insert(n);
            });
        }
    }

    /// Removes the mutual link for every wall of the carving, leaving only
    /// the passages connected, and keeps both edge sets for drawing.
    pub fn carve(&mut self, carving: Carving) {
        debug_assert_eq!(
            carving.passages.len() + carving.walls.len(),
            self.edge_count(),
            "A carving must partition every edge of the grid"
        );
        for wall in &carving.walls {
            self.unlink(wall.from, wall.to);
        }
        self.passages = carving.passages;
        self.walls = carving.walls;
        self.carved = true;
    }

    fn unlink(&mut self, a: (u8, u8), b: (u8, u8)) {
        self[a].neighbors_mut().remove(b);
        self[b].neighbors_mut().remove(a);
    }

    /// Clears `visited` and `on_path` on every cell. Topology is unchanged.
    pub fn reset_flags(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset_flags);
    }

    /// Text view of the maze.
    pub fn view(&self, show_visited: bool) -> MazeView<'_> {
        MazeView::new(self, show_visited)
    }
}

impl std::fmt::Display for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.view(true))
    }
}

impl std::ops::Index<(u8, u8)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl std::ops::IndexMut<(u8, u8)> for Maze {
    fn index_mut(&mut self, index: (u8, u8)) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.cells[index]
    }
}

impl std::ops::Index<usize> for Maze {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl std::ops::IndexMut<usize> for Maze {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.cells[index]
    }
}

/// Get grid neighbors of a cell, whether linked or not.
/// A neighbor is a cell one step away, yielded in the order right, left, up, down.
pub fn get_neighbors(coord: (u8, u8), maze: &Maze) -> impl Iterator<Item = (u8, u8)> {
    let neighbors: Vec<(u8, u8)> = if maze.is_in_bounds(coord) {
        let (x, y) = coord;
        vec![
            // NOTE: This way of handling underflow/overflow is overflow-safe.
            // When x < 1 or y < 1, wrap x - 1 or y - 1 to u8::MAX to avoid underflow,
            // and automatically filter it out in the comparison.
            // When x + 1 or y + 1 exceeds u8::MAX, set it to u8::MAX, which is never a valid index.
            (x.saturating_add(1), y),
            (x.wrapping_sub(1), y),
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
        ]
    } else {
        // No neighbors if the coordinate is out of bounds
        vec![]
    };

    neighbors.into_iter().filter(move |&c| maze.is_in_bounds(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_maze_indexing() {
        let mut maze = Maze::new(5, 4);
        maze[(2, 3)].visited = true;
        assert!(maze[(2, 3)].visited);
        assert_eq!(maze.index_of((2, 3)), 17);
        assert_eq!(maze.coord_of(17), (2, 3));
        assert_eq!(maze[17].coord(), (2, 3));
        assert_eq!(maze.cells()[3 * 5 + 2].coord(), (2, 3));
        assert_eq!(maze.goal(), (4, 3));
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5);
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn test_zero_dimension() {
        Maze::new(0, 3);
    }

    #[test]
    fn test_get_neighbors() {
        let maze = Maze::new(7, 7);
        let neighbors = get_neighbors((3, 3), &maze).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(4, 3), (2, 3), (3, 2), (3, 4)]);
        let corner = get_neighbors((0, 0), &maze).collect::<Vec<_>>();
        assert_eq!(corner, vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_get_neighbors_at_max_size() {
        let maze = Maze::new(u8::MAX, u8::MAX);
        let neighbors = get_neighbors((254, 254), &maze).collect::<Vec<_>>();
        assert_eq!(neighbors, vec![(253, 254), (254, 253)]);
    }

    #[test]
    fn test_build_edges_order_and_count() {
        let maze = Maze::new(3, 2);
        let mut rng = StdRng::seed_from_u64(7);
        let edges = maze.build_edges(&mut rng);
        assert_eq!(edges.len(), maze.edge_count());
        assert_eq!(edges.len(), 7);
        let pairs = edges.iter().map(|e| (e.from, e.to)).collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ((0, 0), (1, 0)),
                ((1, 0), (2, 0)),
                ((0, 0), (0, 1)),
                ((1, 0), (1, 1)),
                ((0, 1), (1, 1)),
                ((2, 0), (2, 1)),
                ((1, 1), (2, 1)),
            ]
        );
    }

    #[test]
    fn test_single_cell_has_no_edges() {
        let maze = Maze::new(1, 1);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(maze.build_edges(&mut rng).is_empty());
        assert_eq!(maze.edge_count(), 0);
    }

    #[test]
    fn test_connect_all_neighbors_is_symmetric() {
        let mut maze = Maze::new(4, 3);
        maze.connect_all_neighbors();
        for cell in maze.cells() {
            for n in cell.neighbors().iter() {
                assert!(maze.is_linked(n, cell.coord()));
            }
        }
        assert_eq!(maze[(1, 1)].neighbors().len(), 4);
        assert_eq!(maze[(0, 0)].neighbors().as_slice(), &[(1, 0), (0, 1)]);
        let links = maze
            .cells()
            .iter()
            .map(|c| c.neighbors().len())
            .sum::<usize>();
        assert_eq!(links, 2 * maze.edge_count());
    }

    #[test]
    fn test_carve_removes_wall_links() {
        let mut maze = Maze::new(2, 1);
        maze.connect_all_neighbors();
        let wall = Edge::new((0, 0), (1, 0), 3);
        maze.carve(Carving {
            passages: vec![],
            walls: vec![wall],
        });
        assert!(maze.is_carved());
        assert!(!maze.is_linked((0, 0), (1, 0)));
        assert!(!maze.is_linked((1, 0), (0, 0)));
        assert_eq!(maze.walls(), &[wall]);
    }

    #[test]
    fn test_reset_flags() {
        let mut maze = Maze::new(3, 3);
        maze.connect_all_neighbors();
        maze[(1, 1)].visited = true;
        maze[(2, 2)].on_path = true;
        maze.reset_flags();
        assert!(maze.cells().iter().all(|c| !c.visited && !c.on_path));
        assert_eq!(maze[(1, 1)].neighbors().len(), 4);
    }
}
