use clap::Parser;
use heat1d_core::{FunctionRegistry, SimulationParameters, Solver};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Diffusion coefficient alpha
    #[arg(long, default_value_t = 0.01)]
    alpha: f64,

    /// Domain length L
    #[arg(long, default_value_t = 1.0)]
    length: f64,

    /// Number of spatial points spanning [0, L]
    #[arg(long, default_value_t = 50)]
    nx: usize,

    /// Number of time steps
    #[arg(long, default_value_t = 500)]
    nt: usize,

    /// Final time T
    #[arg(long, default_value_t = 0.5)]
    final_time: f64,

    /// Initial condition name (see --list-functions)
    #[arg(long, default_value = "sin(pi*x)")]
    ic: String,

    /// Dirichlet value at x = 0 (default: the initial function's value)
    #[arg(long)]
    left: Option<f64>,

    /// Dirichlet value at x = L (default: the initial function's value)
    #[arg(long)]
    right: Option<f64>,

    /// Emit every k-th recorded state (the final state is always emitted)
    #[arg(long, default_value_t = 1)]
    every: usize,

    /// Write JSONL here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// List the registered initial-condition functions and exit
    #[arg(long)]
    list_functions: bool,
}

/// Header row: discretization the display layer needs to plot states.
#[derive(Serialize)]
struct GridRow<'a> {
    grid: &'a [f64],
    dx: f64,
    dt: f64,
    r: f64,
}

/// One recorded state u(x, t) at time step `step`.
#[derive(Serialize)]
struct StateRow<'a> {
    step: usize,
    time: f64,
    u: &'a [f64],
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let registry = FunctionRegistry::default();

    if args.list_functions {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    if args.every < 1 {
        return Err("every must be >= 1".into());
    }

    let params = SimulationParameters {
        alpha: args.alpha,
        length: args.length,
        nx: args.nx,
        final_time: args.final_time,
        nt: args.nt,
        left_boundary: args.left,
        right_boundary: args.right,
        initial_function: args.ic.clone(),
    };

    let mut solver = Solver::new(&params, &registry)?;
    let (dx, dt, r) = (solver.dx(), solver.dt(), solver.r());
    let (grid, history) = solver.solve();

    let mut writer: BufWriter<Box<dyn Write>> = match &args.out {
        Some(path) => BufWriter::new(Box::new(File::create(path)?)),
        None => BufWriter::new(Box::new(io::stdout())),
    };

    serde_json::to_writer(&mut writer, &GridRow { grid, dx, dt, r })?;
    writer.write_all(b"\n")?;

    let last = history.len() - 1;
    let mut emitted = 0usize;
    for (step, u) in history.iter().enumerate() {
        if step % args.every != 0 && step != last {
            continue;
        }
        let row = StateRow {
            step,
            time: step as f64 * dt,
            u,
        };
        serde_json::to_writer(&mut writer, &row)?;
        writer.write_all(b"\n")?;
        emitted += 1;
    }
    writer.flush()?;

    eprintln!(
        "r = {r:.6}, states recorded: {}, emitted: {emitted}",
        history.len()
    );

    Ok(())
}
