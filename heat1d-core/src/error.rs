/// Errors reported while constructing a [`Solver`](crate::Solver).
///
/// Every variant is raised at construction time, before any stepping.
/// Once a solver exists, `solve()` cannot fail: all data dependencies are
/// fixed-size and pre-validated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    /// A parameter failed basic validation.
    #[error("invalid parameter {field}: {constraint}")]
    InvalidParameter {
        field: &'static str,
        constraint: &'static str,
    },

    /// The requested initial-condition name is not in the registry.
    #[error("unknown initial condition \"{name}\", available: {known:?}")]
    UnknownFunction { name: String, known: Vec<String> },

    /// The explicit scheme would diverge for this discretization.
    #[error("explicit scheme is unstable: r = alpha*dt/dx^2 = {r:.6} exceeds {limit}")]
    UnstableScheme { r: f64, limit: f64 },
}
