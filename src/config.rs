use thiserror::Error;

use crate::solvers::Solver;

/// Invalid user-supplied maze settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("width and height must be at least 1, got {width}x{height}")]
    EmptyDimensions { width: u8, height: u8 },
    #[error("invalid {name} '{value}': expected a number between {min} and {max}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        min: u64,
        max: u64,
    },
    #[error("unknown solver '{0}': expected 'bfs' or 'dfs'")]
    UnknownSolver(String),
}

/// Settings for a maze session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    /// Width of the maze in cells
    pub width: u8,
    /// Height of the maze in cells
    pub height: u8,
    /// Search mode to start solving with
    pub solver: Solver,
    /// Seed for maze generation. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            solver: Solver::Bfs,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Checks that the maze has at least one cell.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Parses positional arguments `[width height [solver [seed]]]`.
    /// Missing arguments keep their default values.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = MazeConfig::default();
        let mut args = args.into_iter();

        if let Some(width) = args.next() {
            config.width = parse_number("width", width.as_ref())?;
        }
        if let Some(height) = args.next() {
            config.height = parse_number("height", height.as_ref())?;
        }
        if let Some(solver) = args.next() {
            config.solver = solver.as_ref().parse()?;
        }
        if let Some(seed) = args.next() {
            config.seed = Some(parse_number("seed", seed.as_ref())?);
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_number<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Bounded,
{
    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: value.to_string(),
        min: T::MIN,
        max: T::MAX,
    })
}

/// Range of accepted values, for error messages.
trait Bounded {
    const MIN: u64;
    const MAX: u64;
}

impl Bounded for u8 {
    const MIN: u64 = u8::MIN as u64;
    const MAX: u64 = u8::MAX as u64;
}

impl Bounded for u64 {
    const MIN: u64 = u64::MIN;
    const MAX: u64 = u64::MAX;
}
