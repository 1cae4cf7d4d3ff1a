//! Named initial-condition functions.
//!
//! The display layer refers to initial conditions by name. Each entry is a
//! pointwise function u0(x) evaluated over every grid coordinate to build
//! the t = 0 profile. The registry is an ordinary value owned by the
//! caller, not module-level state, so tests can inject their own functions.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::error::SolverError;

type PointwiseFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Registry mapping names to pointwise initial-condition functions.
pub struct FunctionRegistry {
    functions: BTreeMap<String, PointwiseFn>,
}

impl FunctionRegistry {
    /// Registry with no functions.
    pub fn empty() -> Self {
        FunctionRegistry {
            functions: BTreeMap::new(),
        }
    }

    /// Adds or replaces a named function.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
    ) {
        self.functions.insert(name.into(), Box::new(f));
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.functions.keys().cloned().collect()
    }

    /// Evaluates the named function over `x`, then overwrites the end
    /// points with the Dirichlet overrides when supplied.
    ///
    /// Presence is carried by `Option`: `Some(0.0)` is a real boundary
    /// value and is applied, unlike a truthiness check would.
    pub fn initial_profile(
        &self,
        name: &str,
        x: &[f64],
        left: Option<f64>,
        right: Option<f64>,
    ) -> Result<Vec<f64>, SolverError> {
        let f = self
            .functions
            .get(name)
            .ok_or_else(|| SolverError::UnknownFunction {
                name: name.to_string(),
                known: self.names(),
            })?;

        let mut u: Vec<f64> = x.iter().map(|&xi| f(xi)).collect();
        let n = u.len();
        if n > 0 {
            if let Some(value) = left {
                u[0] = value;
            }
            if let Some(value) = right {
                u[n - 1] = value;
            }
        }
        Ok(u)
    }
}

impl Default for FunctionRegistry {
    /// The built-in set: `sin(pi*x)`, `x*(1 - x)` and `x`.
    fn default() -> Self {
        let mut reg = FunctionRegistry::empty();
        reg.register("sin(pi*x)", |x| (PI * x).sin());
        reg.register("x*(1 - x)", |x| x * (1.0 - x));
        reg.register("x", |x| x);
        reg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_builtin_functions() {
        let reg = FunctionRegistry::default();
        assert_eq!(reg.names(), vec!["sin(pi*x)", "x", "x*(1 - x)"]);
        assert!(reg.contains("sin(pi*x)"));
        assert!(!reg.contains("sinh(x)"));
    }

    #[test]
    fn profile_evaluates_pointwise() {
        let reg = FunctionRegistry::default();
        let x = [0.0, 0.5, 1.0];
        let u = reg.initial_profile("x*(1 - x)", &x, None, None).unwrap();
        assert_eq!(u, vec![0.0, 0.25, 0.0]);
    }

    #[test]
    fn sin_profile_vanishes_at_endpoints() {
        let reg = FunctionRegistry::default();
        let x = [0.0, 0.25, 0.5, 0.75, 1.0];
        let u = reg.initial_profile("sin(pi*x)", &x, None, None).unwrap();
        assert!(u[0].abs() < 1e-12, "u(0) should be ~0, got {}", u[0]);
        assert!(u[4].abs() < 1e-12, "u(1) should be ~0, got {}", u[4]);
        assert!((u[2] - 1.0).abs() < 1e-12, "u(0.5) should be 1, got {}", u[2]);
    }

    #[test]
    fn unknown_function_lists_registry_keys() {
        let reg = FunctionRegistry::default();
        let err = reg
            .initial_profile("nonexistent", &[0.0, 0.5, 1.0], None, None)
            .unwrap_err();
        match err {
            SolverError::UnknownFunction { name, known } => {
                assert_eq!(name, "nonexistent");
                assert_eq!(known, vec!["sin(pi*x)", "x", "x*(1 - x)"]);
            }
            other => panic!("expected UnknownFunction, got {other:?}"),
        }
    }

    #[test]
    fn zero_override_is_applied() {
        // The function value at both ends is 1.0; an override of exactly
        // 0.0 must still win over it.
        let mut reg = FunctionRegistry::empty();
        reg.register("one", |_| 1.0);
        let x = [0.0, 0.5, 1.0];

        let u = reg.initial_profile("one", &x, Some(0.0), None).unwrap();
        assert_eq!(u, vec![0.0, 1.0, 1.0]);

        let u = reg.initial_profile("one", &x, None, Some(0.0)).unwrap();
        assert_eq!(u, vec![1.0, 1.0, 0.0]);

        let u = reg.initial_profile("one", &x, None, None).unwrap();
        assert_eq!(u, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut reg = FunctionRegistry::default();
        reg.register("x", |_| 7.0);
        let u = reg.initial_profile("x", &[0.0, 1.0], None, None).unwrap();
        assert_eq!(u, vec![7.0, 7.0]);
    }
}
