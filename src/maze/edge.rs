/// Potential wall between two grid-adjacent cells.
/// `from` is always the upper or left cell of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: (u8, u8),
    pub to: (u8, u8),
    /// Random weight used to order edges for Kruskal's algorithm
    pub weight: u32,
}

impl Edge {
    pub fn new(from: (u8, u8), to: (u8, u8), weight: u32) -> Self {
        Edge { from, to, weight }
    }
}
