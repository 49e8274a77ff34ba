use mazewalk::{config::MazeConfig, logging, session::Session};

fn main() -> std::io::Result<()> {
    let _guard = logging::init_tracing();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let config = match MazeConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: mazewalk [width height [bfs|dfs [seed]]]. Maximum size is 255x255.");
            std::process::exit(2);
        }
    };
    let solver = config.solver;

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    println!("{}", session.view());
    session.select(solver);
    let goal_reached = session.run_to_end();
    println!("{}", session.view());

    if goal_reached {
        let path_len = session.search().map_or(0, |s| s.path().len());
        println!(
            "{} reached the goal in {} steps. Path length: {} cells.",
            solver,
            session.steps(),
            path_len
        );
    } else {
        println!("No path found to the goal.");
    }
    Ok(())
}
