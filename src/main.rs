use std::{io::Write, path::PathBuf, time::Duration};

use clap::Parser;
use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};
use mazeweaver::{Generator, Solver, app::App};

/// Animated maze generation and solving in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Grid height in cells, border included (odd values give perfect mazes)
    #[arg(long, default_value_t = 21)]
    rows: usize,

    /// Grid width in cells, border included (odd values give perfect mazes)
    #[arg(long, default_value_t = 41)]
    cols: usize,

    /// recursive, kruskal, prim, wilson, eller, binarytree, sidewinder, aldousbroder or huntandkill
    #[arg(short, long, default_value = "recursive")]
    generator: Generator,

    /// dfs, bfs, dijkstra, astar, greedy, bidirectional or bestfirst
    #[arg(short, long, default_value = "astar")]
    solver: Solver,

    /// Pause after each frame in milliseconds, 0 skips the generation animation
    #[arg(short, long, default_value_t = 10)]
    interval_ms: u64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Only count the path length instead of drawing the path
    #[arg(long)]
    fast: bool,

    /// Run every solver on the same maze and print a comparison table
    #[arg(long)]
    compare: bool,

    /// File the logs are written to
    #[arg(long, default_value = "mazeweaver.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the renderer, so logs go to a file
    let file_appender = tracing_appender::rolling::never(".", &cli.log_file);
    let (log_writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(log_writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    if cli.rows < 3 || cli.cols < 3 {
        eprintln!("Rows and cols must be at least 3.");
        return Ok(());
    }

    let app = App {
        rows: cli.rows,
        cols: cli.cols,
        generator: cli.generator,
        solver: cli.solver,
        interval: Duration::from_millis(cli.interval_ms),
        seed: cli.seed,
        find_optimal: !cli.fast,
    };
    tracing::info!("Starting with {:?}", app);

    let mut stdout = std::io::stdout();
    if cli.compare {
        return app.compare(&mut stdout);
    }

    let Some(summary) = app.run(&mut stdout)? else {
        return Ok(());
    };

    let msg = if summary.result.is_found() {
        format!(
            "\r\nPath found! Length: {}, visited: {} cells, {:.2?}\r\n",
            summary.result.path_length, summary.result.visited, summary.solve_time
        )
        .with(Color::Green)
    } else {
        format!(
            "\r\nNo path found. Visited: {} cells\r\n",
            summary.result.visited
        )
        .with(Color::Red)
    };
    queue!(
        stdout,
        style::PrintStyledContent(msg.attribute(Attribute::Bold))
    )?;
    stdout.flush()
}
