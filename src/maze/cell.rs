use crossterm::style::{Color, Stylize};

use std::fmt;

/// Maximum number of grid neighbors a cell can have.
pub const MAX_NEIGHBORS: usize = 4;

/// Fixed-capacity set of neighbor coordinates.
/// Insertion order is preserved, including across removals.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neighbors {
    slots: [(u8, u8); MAX_NEIGHBORS],
    len: u8,
}

impl Neighbors {
    /// Adds a neighbor. Returns `false` if it is already present.
    ///
    /// Panics if the set is already full.
    pub fn insert(&mut self, coord: (u8, u8)) -> bool {
        if self.contains(coord) {
            return false;
        }
        assert!(
            (self.len as usize) < MAX_NEIGHBORS,
            "A grid cell cannot have more than {MAX_NEIGHBORS} neighbors"
        );
        self.slots[self.len as usize] = coord;
        self.len += 1;
        true
    }

    /// Removes a neighbor, shifting the later ones down to keep their order.
    /// Returns `false` if it was not present.
    pub fn remove(&mut self, coord: (u8, u8)) -> bool {
        let len = self.len as usize;
        match self.slots[..len].iter().position(|&c| c == coord) {
            Some(i) => {
                self.slots.copy_within(i + 1..len, i);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, coord: (u8, u8)) -> bool {
        self.as_slice().contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[(u8, u8)] {
        &self.slots[..self.len as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.as_slice().iter().copied()
    }
}

// Slots past `len` may hold stale coordinates from removals
impl PartialEq for Neighbors {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Neighbors {}

/// A single maze cell, identified by its coordinate.
/// The maze stores cells in row-major order, so the coordinate is also its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Coordinates of the cell in the maze
    coord: (u8, u8),
    /// Set when a search has discovered this cell
    pub visited: bool,
    /// Set when this cell lies on a reconstructed solution path
    pub on_path: bool,
    /// Cells reachable in one move from this one
    neighbors: Neighbors,
}

impl Cell {
    pub fn new(coord: (u8, u8)) -> Self {
        Cell {
            coord,
            visited: false,
            on_path: false,
            neighbors: Neighbors::default(),
        }
    }

    pub fn coord(&self) -> (u8, u8) {
        self.coord
    }

    pub fn x(&self) -> u8 {
        self.coord.0
    }

    pub fn y(&self) -> u8 {
        self.coord.1
    }

    pub fn neighbors(&self) -> &Neighbors {
        &self.neighbors
    }

    pub(crate) fn neighbors_mut(&mut self) -> &mut Neighbors {
        &mut self.neighbors
    }

    /// Clears the search flags, leaving adjacency untouched.
    pub fn reset_flags(&mut self) {
        self.visited = false;
        self.on_path = false;
    }
}

/// A glyph of the text view. The view is laid out on a `(2w + 1) x (2h + 1)`
/// grid where odd coordinates hold cells and the rest hold walls or openings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
    Visited,
    Route,
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const TILE_WIDTH: usize = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "██".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Visited => "* ".with(Color::Blue),
            Tile::Route => "██".with(Color::Yellow),
            Tile::Start => "██".with(Color::Green),
            Tile::Goal => "██".with(Color::Magenta),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let mut neighbors = Neighbors::default();
        assert!(neighbors.insert((1, 0)));
        assert!(neighbors.insert((0, 1)));
        assert!(neighbors.insert((2, 1)));
        assert!(!neighbors.insert((0, 1)));
        assert_eq!(neighbors.len(), 3);

        assert!(neighbors.remove((0, 1)));
        assert!(!neighbors.remove((0, 1)));
        assert_eq!(neighbors.as_slice(), &[(1, 0), (2, 1)]);

        let mut fresh = Neighbors::default();
        fresh.insert((1, 0));
        fresh.insert((2, 1));
        assert_eq!(neighbors, fresh);
    }

    #[test]
    #[should_panic(expected = "more than 4 neighbors")]
    fn test_neighbors_capacity() {
        let mut neighbors = Neighbors::default();
        for x in 0..5 {
            neighbors.insert((x, 0));
        }
    }

    #[test]
    fn test_reset_flags_keeps_neighbors() {
        let mut cell = Cell::new((3, 4));
        cell.visited = true;
        cell.on_path = true;
        cell.neighbors_mut().insert((3, 5));
        cell.reset_flags();
        assert!(!cell.visited && !cell.on_path);
        assert!(cell.neighbors().contains((3, 5)));
        assert_eq!((cell.x(), cell.y()), (3, 4));
    }

    #[test]
    fn test_tile_width() {
        for tile in [
            Tile::Wall,
            Tile::Open,
            Tile::Visited,
            Tile::Route,
            Tile::Start,
            Tile::Goal,
        ] {
            // Display asserts the width in debug builds
            assert!(!tile.to_string().is_empty());
        }
    }
}
