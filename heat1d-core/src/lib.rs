//! Explicit finite-difference solver for the one-dimensional heat equation
//!
//! ```text
//! du/dt = alpha * d2u/dx2,   x in [0, L],   Dirichlet ends
//! ```
//!
//! The domain is discretized into `nx` evenly spaced points spanning
//! `[0, L]` inclusive (`dx = L/(nx-1)`), and the solution is advanced with
//! the explicit stencil
//!
//! ```text
//! u_new[i] = u[i] + r * (u[i+1] - 2*u[i] + u[i-1]),   r = alpha*dt/dx^2
//! ```
//!
//! which is stable only for `r <= 0.5`; construction rejects anything
//! above that.
//!
//! Every intermediate state is retained so a display layer can step back
//! and forward through time. Memory therefore grows as O(nt * nx); that is
//! the resource contract of this crate, not an accident.

mod error;
mod ic;

pub use error::SolverError;
pub use ic::FunctionRegistry;

/// Largest stability factor the explicit scheme tolerates.
pub const STABILITY_LIMIT: f64 = 0.5;

/// Simulation parameters as supplied by the display layer.
#[derive(Debug, Clone)]
pub struct SimulationParameters {
    /// Diffusion coefficient, > 0.
    pub alpha: f64,
    /// Domain length L, > 0.
    pub length: f64,
    /// Number of spatial points spanning [0, L], >= 3.
    pub nx: usize,
    /// Final time T, > 0.
    pub final_time: f64,
    /// Number of time steps, >= 1.
    pub nt: usize,
    /// Dirichlet value at x = 0; `None` keeps the initial function's value.
    pub left_boundary: Option<f64>,
    /// Dirichlet value at x = L; `None` keeps the initial function's value.
    pub right_boundary: Option<f64>,
    /// Name of the registered initial-condition function.
    pub initial_function: String,
}

/// One solve request: owns the grid, the stability factor and the growing
/// time history. Parameters are validated once, here; stepping cannot fail.
#[derive(Debug)]
pub struct Solver {
    nt: usize,
    dx: f64,
    dt: f64,
    r: f64,
    x: Vec<f64>,
    history: Vec<Vec<f64>>,
}

impl Solver {
    /// Validates parameters, checks the stability factor, builds the grid
    /// and the t = 0 state.
    pub fn new(
        params: &SimulationParameters,
        registry: &FunctionRegistry,
    ) -> Result<Solver, SolverError> {
        validate(params)?;

        let nx = params.nx;
        let dx = params.length / ((nx - 1) as f64);
        let dt = params.final_time / (params.nt as f64);
        let r = params.alpha * dt / (dx * dx);
        if r > STABILITY_LIMIT {
            return Err(SolverError::UnstableScheme {
                r,
                limit: STABILITY_LIMIT,
            });
        }

        // nx evenly spaced points, both endpoints included
        let x: Vec<f64> = (0..nx)
            .map(|i| params.length * (i as f64) / ((nx - 1) as f64))
            .collect();

        let u0 = registry.initial_profile(
            &params.initial_function,
            &x,
            params.left_boundary,
            params.right_boundary,
        )?;

        Ok(Solver {
            nt: params.nt,
            dx,
            dt,
            r,
            x,
            history: vec![u0],
        })
    }

    // ---- Derived quantities ----

    pub fn dx(&self) -> f64 {
        self.dx
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Stability factor alpha*dt/dx^2, <= 0.5 by construction.
    pub fn r(&self) -> f64 {
        self.r
    }

    // ---- Accessors ----

    /// Spatial grid, fixed for the lifetime of the solver.
    pub fn grid(&self) -> &[f64] {
        &self.x
    }

    /// Recorded states so far; index 0 is the initial condition.
    pub fn history(&self) -> &[Vec<f64>] {
        &self.history
    }

    // ---- Core: advance through all nt steps ----

    /// Runs the full time loop and returns the grid together with the
    /// complete history (`nt + 1` states).
    ///
    /// Interior points follow the explicit stencil; indices 0 and nx-1 are
    /// never written after t = 0, so the Dirichlet values persist across
    /// all steps. The loop is synchronous and deterministic, and calling
    /// `solve` again recomputes the same history from the retained initial
    /// state.
    pub fn solve(&mut self) -> (&[f64], &[Vec<f64>]) {
        self.history.truncate(1);
        self.history.reserve(self.nt);

        let nx = self.x.len();
        for _ in 0..self.nt {
            let u = &self.history[self.history.len() - 1];
            let mut next = u.clone();
            for i in 1..nx - 1 {
                next[i] = u[i] + self.r * (u[i + 1] - 2.0 * u[i] + u[i - 1]);
            }
            self.history.push(next);
        }

        (&self.x, &self.history)
    }
}

fn validate(params: &SimulationParameters) -> Result<(), SolverError> {
    let invalid = |field: &'static str, constraint: &'static str| SolverError::InvalidParameter {
        field,
        constraint,
    };
    // `!(v > 0.0)` also rejects NaN
    if !(params.alpha > 0.0) {
        return Err(invalid("alpha", "must be > 0"));
    }
    if !(params.length > 0.0) {
        return Err(invalid("length", "must be > 0"));
    }
    if params.nx < 3 {
        return Err(invalid("nx", "must be >= 3"));
    }
    if !(params.final_time > 0.0) {
        return Err(invalid("final_time", "must be > 0"));
    }
    if params.nt < 1 {
        return Err(invalid("nt", "must be >= 1"));
    }
    Ok(())
}
