use mazewalk::{config::MazeConfig, logging, session::Session, solvers::Solver};

fn main() -> std::io::Result<()> {
    let _guard = logging::init_tracing();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(10);

    let config = MazeConfig {
        width: u8::MAX,
        height: u8::MAX,
        solver: Solver::Bfs,
        seed: Some(0),
    };
    let mut session = Session::new(config).map_err(std::io::Error::other)?;

    let start = std::time::Instant::now();
    for _ in 0..num_iters {
        session.regenerate();
        for solver in [Solver::Bfs, Solver::Dfs] {
            session.select(solver);
            session.run_to_end();
        }
    }
    let elapsed = start.elapsed();
    println!(
        "{} iterations of generate + BFS + DFS at {}x{}: {:?} total, {:?} per iteration",
        num_iters,
        u8::MAX,
        u8::MAX,
        elapsed,
        elapsed / num_iters.max(1) as u32
    );
    Ok(())
}
