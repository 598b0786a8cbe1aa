mod renderer;

use std::{
    io::{Stdout, Write},
    sync::mpsc::SyncSender,
    time::{Duration, Instant},
};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
};

use crate::{
    app::renderer::{Frame, Renderer},
    generators::{Generator, generate_maze},
    maze::Grid,
    solvers::{SolveResult, Solver, compare_solvers, solve_maze},
    step::{NoSteps, StepEmitter},
};

/// Maximum number of frames to buffer in the channel between compute and render threads
const MAX_FRAMES_IN_CHANNEL_BUFFER: usize = 1000;

/// Terminal front end: generates a maze, solves it and animates both.
#[derive(Debug, Clone)]
pub struct App {
    /// Grid height in cells, border included
    pub rows: usize,
    /// Grid width in cells, border included
    pub cols: usize,
    pub generator: Generator,
    pub solver: Solver,
    /// Pause after each frame; zero disables generation frames
    pub interval: Duration,
    /// Seed for reproducible mazes
    pub seed: Option<u64>,
    /// Draw the found path, or only count its length
    pub find_optimal: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            rows: 21,
            cols: 41,
            generator: Generator::RecurBacktrack,
            solver: Solver::AStar,
            interval: Duration::from_millis(10),
            seed: None,
            find_optimal: true,
        }
    }
}

/// Outcome of one animated run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub result: SolveResult,
    pub solve_time: Duration,
    pub frames: usize,
}

impl App {
    /// Set a panic hook to restore the cursor on panic, even if the panic occurs
    /// in a different thread
    fn set_panic_hook() {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = queue!(std::io::stdout(), cursor::Show); // ignore any errors as we are already failing
            let _ = std::io::stdout().flush();
            hook(panic_info);
        }));
    }

    /// Runs generation then solving, animating both. Returns `None` if the
    /// terminal is too small for the grid.
    pub fn run(&self, stdout: &mut Stdout) -> std::io::Result<Option<RunSummary>> {
        if !Renderer::fits(self.rows, self.cols)? {
            queue!(
                stdout,
                style::PrintStyledContent(
                    format!(
                        "Terminal size is too small for a {}x{} maze. Please resize the terminal.\r\n",
                        self.rows, self.cols
                    )
                    .with(Color::Yellow)
                    .attribute(Attribute::Bold)
                )
            )?;
            stdout.flush()?;
            return Ok(None);
        }
        App::set_panic_hook();

        let (frame_tx, frame_rx) =
            std::sync::mpsc::sync_channel::<Frame>(MAX_FRAMES_IN_CHANNEL_BUFFER);

        // Spawn a thread to listen for frames and render the maze
        let render_thread_handle = std::thread::spawn(move || Renderer::new().render(frame_rx));

        // Spawn a thread to generate the maze and solve it
        let app = self.clone();
        let compute_thread_handle = std::thread::spawn(move || app.compute(frame_tx));

        let (result, solve_time) = compute_thread_handle
            .join()
            .expect("Compute thread panicked");
        let frames = render_thread_handle
            .join()
            .expect("Render thread panicked")?;

        tracing::info!(
            "[app] {} + {}: visited {}, path length {}, {:?}, {} frames",
            self.generator,
            self.solver,
            result.visited,
            result.path_length,
            solve_time,
            frames
        );
        Ok(Some(RunSummary {
            result,
            solve_time,
            frames,
        }))
    }

    /// Generates and solves, sending every frame to the render thread. Dropping
    /// `frame_tx` on return tells the renderer we are done.
    fn compute(&self, frame_tx: SyncSender<Frame>) -> (SolveResult, Duration) {
        let mut grid = Grid::new(self.rows, self.cols);

        let status = format!("Generating: {}", self.generator);
        let mut sink = |g: &Grid| {
            // A closed channel only means nobody watches anymore
            let _ = frame_tx.send(Frame {
                status: status.clone(),
                grid: g.clone(),
            });
        };
        let mut steps = StepEmitter::new(&mut sink, self.interval);
        generate_maze(&mut grid, self.generator, &mut steps, self.seed);

        let status = format!("Solving: {}", self.solver);
        let mut sink = |g: &Grid| {
            let _ = frame_tx.send(Frame {
                status: status.clone(),
                grid: g.clone(),
            });
        };
        let mut steps = StepEmitter::new(&mut sink, self.interval);
        let started = Instant::now();
        let result = solve_maze(&mut grid, self.solver, &mut steps, self.find_optimal);
        (result, started.elapsed())
    }

    /// Generates one maze and races every solver on it, printing a table.
    pub fn compare(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        let mut grid = Grid::new(self.rows, self.cols);
        let mut sink = NoSteps;
        let mut steps = StepEmitter::new(&mut sink, Duration::ZERO);
        generate_maze(&mut grid, self.generator, &mut steps, self.seed);

        queue!(
            stdout,
            style::PrintStyledContent(
                format!(
                    "{}x{} maze by {} ({} open cells)\r\n",
                    self.rows,
                    self.cols,
                    self.generator,
                    grid.open_cell_count()
                )
                .with(Color::Yellow)
                .attribute(Attribute::Bold)
            ),
            style::PrintStyledContent(
                format!(
                    "{:<28}{:>10}{:>10}{:>14}\r\n",
                    "Solver", "Visited", "Length", "Time"
                )
                .with(Color::Cyan)
            ),
        )?;

        for comparison in compare_solvers(&grid, &Solver::ALL, self.find_optimal) {
            let color = if comparison.result.is_found() {
                Color::Green
            } else {
                Color::Red
            };
            queue!(
                stdout,
                style::PrintStyledContent(
                    format!(
                        "{:<28}{:>10}{:>10}{:>14}\r\n",
                        comparison.solver.to_string(),
                        comparison.result.visited,
                        comparison.result.path_length,
                        format!("{:.2?}", comparison.elapsed)
                    )
                    .with(color)
                )
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Times every generator and solver combination without animation.
    pub fn profile(&self, num_iters: Option<usize>) -> std::io::Result<()> {
        let num_iters = num_iters.unwrap_or(1);
        let mut stdout = std::io::stdout();

        for generator in Generator::ALL {
            for solver in Solver::ALL {
                let mut generate_time = Duration::ZERO;
                let mut solve_time = Duration::ZERO;
                let mut visited = 0;

                for iter in 0..num_iters {
                    let mut grid = Grid::new(self.rows, self.cols);
                    let mut sink = NoSteps;
                    let mut steps = StepEmitter::new(&mut sink, Duration::ZERO);

                    let started = Instant::now();
                    let seed = self.seed.map(|s| s.wrapping_add(iter as u64));
                    generate_maze(&mut grid, generator, &mut steps, seed);
                    generate_time += started.elapsed();

                    let started = Instant::now();
                    visited += solve_maze(&mut grid, solver, &mut steps, false).visited;
                    solve_time += started.elapsed();
                }

                let divisor = num_iters.max(1) as u32;
                tracing::info!(
                    "[profile] {} + {}: {} iterations, generate {:?}, solve {:?}",
                    generator,
                    solver,
                    num_iters,
                    generate_time,
                    solve_time
                );
                writeln!(
                    stdout,
                    "{:<24} {:<28} generate {:>10.2?}  solve {:>10.2?}  visited {:>8}",
                    generator.to_string(),
                    solver.to_string(),
                    generate_time / divisor,
                    solve_time / divisor,
                    visited / num_iters.max(1)
                )?;
            }
        }
        stdout.flush()
    }
}
