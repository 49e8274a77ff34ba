use rand::rngs::StdRng;

use crate::{
    config::{ConfigError, MazeConfig},
    generators::{generate_maze, get_rng},
    maze::{Maze, MazeView},
    solvers::{Search, Solver},
};

/// A maze together with the search being played on it.
///
/// The session is driven from outside: a caller selects a search mode and
/// then calls [`Session::tick`] at whatever cadence it renders at.
pub struct Session {
    config: MazeConfig,
    /// Source of randomness for this and every regenerated maze
    rng: StdRng,
    maze: Maze,
    /// The active search, if a mode has been selected
    search: Option<Search>,
    /// Step counts of the last BFS and DFS searches on this maze
    bfs_steps: usize,
    dfs_steps: usize,
    /// Whether views should show visited cells
    show_visited: bool,
}

impl Session {
    /// Validates the config and generates the first maze. No search is active yet.
    pub fn new(config: MazeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = get_rng(config.seed);
        let maze = generate_maze(config.width, config.height, &mut rng);
        tracing::info!(
            "[session] Generated {}x{} maze (seed: {:?})",
            config.width,
            config.height,
            config.seed
        );
        Ok(Session {
            config,
            rng,
            maze,
            search: None,
            bfs_steps: 0,
            dfs_steps: 0,
            show_visited: true,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    pub fn active_solver(&self) -> Option<Solver> {
        self.search.as_ref().map(Search::solver)
    }

    /// Steps taken by the active search, 0 when there is none.
    pub fn steps(&self) -> usize {
        self.search.as_ref().map_or(0, Search::steps)
    }

    /// Steps taken by the latest search of `solver` on this maze.
    /// A search left by switching modes keeps its count until the next refresh or regeneration.
    pub fn steps_for(&self, solver: Solver) -> usize {
        match self.search.as_ref() {
            Some(search) if search.solver() == solver => search.steps(),
            _ => *self.recorded_steps(solver),
        }
    }

    fn recorded_steps(&self, solver: Solver) -> &usize {
        match solver {
            Solver::Bfs => &self.bfs_steps,
            Solver::Dfs => &self.dfs_steps,
        }
    }

    fn recorded_steps_mut(&mut self, solver: Solver) -> &mut usize {
        match solver {
            Solver::Bfs => &mut self.bfs_steps,
            Solver::Dfs => &mut self.dfs_steps,
        }
    }

    fn clear_step_counts(&mut self) {
        self.bfs_steps = 0;
        self.dfs_steps = 0;
    }

    pub fn is_solved(&self) -> bool {
        self.search.as_ref().is_some_and(Search::is_finished)
    }

    /// Begins searching with `solver`.
    ///
    /// Selecting the mode that is already active keeps its progress. Switching
    /// to the other mode clears the flags left by the previous search and starts over,
    /// keeping the previous search's step count in [`Session::steps_for`].
    pub fn select(&mut self, solver: Solver) {
        if self.active_solver() == Some(solver) {
            return;
        }
        if let Some(previous) = self.search.take() {
            *self.recorded_steps_mut(previous.solver()) = previous.steps();
            self.maze.reset_flags();
        }
        *self.recorded_steps_mut(solver) = 0;
        tracing::info!("[session] Starting {}", solver);
        self.search = Some(Search::new(&mut self.maze, solver));
    }

    /// Advances the active search by exactly one step.
    /// Returns whether the goal has been reached; `false` when no mode is selected.
    pub fn tick(&mut self) -> bool {
        let Some(search) = self.search.as_mut() else {
            return false;
        };
        let was_finished = search.is_finished();
        let goal_reached = search.step(&mut self.maze);
        if goal_reached && !was_finished {
            tracing::info!(
                "[session] Goal reached by {} after {} steps",
                search.solver(),
                search.steps()
            );
        }
        goal_reached
    }

    /// Ticks until the goal is reached or the search stops making progress.
    /// Returns whether the goal was reached.
    pub fn run_to_end(&mut self) -> bool {
        loop {
            let steps = self.steps();
            if self.tick() {
                return true;
            }
            if self.steps() == steps {
                return false;
            }
        }
    }

    /// Clears all search progress and step counters, keeping the same maze.
    pub fn refresh(&mut self) {
        self.maze.reset_flags();
        self.search = None;
        self.clear_step_counts();
        self.show_visited = true;
        tracing::debug!("[session] Refreshed maze");
    }

    /// Replaces the maze with a new one of the same size.
    /// All search progress and step counters are discarded.
    pub fn regenerate(&mut self) {
        self.maze = generate_maze(self.config.width, self.config.height, &mut self.rng);
        self.search = None;
        self.clear_step_counts();
        self.show_visited = true;
        tracing::info!(
            "[session] Regenerated {}x{} maze",
            self.config.width,
            self.config.height
        );
    }

    /// Hides visited cells from [`Session::view`]. Search progress is unaffected.
    pub fn hide_visited(&mut self) {
        self.show_visited = false;
    }

    /// Shows visited cells in [`Session::view`] again.
    pub fn show_visited(&mut self) {
        self.show_visited = true;
    }

    pub fn is_visited_shown(&self) -> bool {
        self.show_visited
    }

    /// Text view of the maze honoring the visited-cell toggle.
    pub fn view(&self) -> MazeView<'_> {
        self.maze.view(self.show_visited)
    }
}
