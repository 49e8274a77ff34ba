use std::collections::VecDeque;

mod path;

pub use path::reconstruct_path;

use crate::config::ConfigError;
use crate::maze::Maze;

/// Frontier discipline of a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    /// Takes the most recently discovered cell first
    Dfs,
    /// Takes the earliest discovered cell first
    Bfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "b" => Ok(Solver::Bfs),
            "dfs" | "d" => Ok(Solver::Dfs),
            _ => Err(ConfigError::UnknownSolver(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Succeeded,
}

/// Resumable graph search from the maze's start to its goal.
///
/// Nothing happens on construction beyond seeding the worklist; each call to
/// [`Search::step`] expands exactly one cell, so a driver can render between steps.
/// Search progress is recorded in the maze's `visited` and `on_path` flags.
pub struct Search {
    solver: Solver,
    /// Discovered cells waiting to be expanded, as flat indices
    worklist: VecDeque<usize>,
    /// For each cell, the cell it was discovered from
    came_from: Vec<Option<usize>>,
    status: SearchStatus,
    start: usize,
    target: usize,
    /// Number of cells expanded so far
    steps: usize,
    /// Most recently expanded cell
    current: Option<(u8, u8)>,
    /// Solution path from start to target, filled on success
    path: Vec<(u8, u8)>,
}

impl Search {
    /// Begins a search on a generated maze. The start cell is marked visited.
    ///
    /// Panics if the maze has not been carved yet.
    pub fn new(maze: &mut Maze, solver: Solver) -> Self {
        assert!(
            maze.is_carved(),
            "A search can only begin once the maze has been generated"
        );
        let start = maze.index_of(maze.start());
        let target = maze.index_of(maze.goal());
        maze[start].visited = true;

        Search {
            solver,
            worklist: VecDeque::from([start]),
            came_from: vec![None; maze.len()],
            status: SearchStatus::Running,
            start,
            target,
            steps: 0,
            current: None,
            path: Vec::new(),
        }
    }

    pub fn solver(&self) -> Solver {
        self.solver
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == SearchStatus::Succeeded
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn current(&self) -> Option<(u8, u8)> {
        self.current
    }

    /// Solution path from start to goal. Empty until the search succeeds.
    pub fn path(&self) -> &[(u8, u8)] {
        &self.path
    }

    /// Number of discovered cells not yet expanded.
    pub fn frontier_len(&self) -> usize {
        self.worklist.len()
    }

    fn pop(&mut self) -> Option<usize> {
        match self.solver {
            Solver::Bfs => self.worklist.pop_front(),
            Solver::Dfs => self.worklist.pop_back(),
        }
    }

    /// Expands one cell from the frontier. Returns whether the goal has been reached.
    ///
    /// Does nothing once the search has succeeded or when the frontier is empty.
    /// `maze` must be the maze this search was started on.
    pub fn step(&mut self, maze: &mut Maze) -> bool {
        if self.is_finished() {
            return true;
        }
        debug_assert_eq!(
            self.came_from.len(),
            maze.len(),
            "Search stepped on a different maze than it was started on"
        );
        let Some(current) = self.pop() else {
            return false;
        };

        self.steps += 1;
        self.current = Some(maze.coord_of(current));
        maze[current].visited = true;

        if current == self.target {
            self.status = SearchStatus::Succeeded;
            self.path = reconstruct_path(maze, &self.came_from, self.start, current);
            tracing::debug!(
                "[search] {} reached the goal in {} steps, path of {} cells",
                self.solver,
                self.steps,
                self.path.len()
            );
            return true;
        }

        // Neighbors is Copy, so the maze can be mutated while iterating
        let neighbors = *maze[current].neighbors();
        for neighbor in neighbors.iter() {
            let index = maze.index_of(neighbor);
            if !maze[index].visited {
                maze[index].visited = true;
                self.came_from[index] = Some(current);
                self.worklist.push_back(index);
            }
        }
        false
    }
}
