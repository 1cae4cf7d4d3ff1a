use heat1d_core::{FunctionRegistry, SimulationParameters, Solver};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct HeatSolver {
    inner: Solver,
}

#[wasm_bindgen]
impl HeatSolver {
    /// Builds a solver; throws on invalid parameters, an unknown initial
    /// condition, or an unstable discretization.
    #[wasm_bindgen(constructor)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        alpha: f64,
        length: f64,
        nx: usize,
        final_time: f64,
        nt: usize,
        initial_function: String,
        left_boundary: Option<f64>,
        right_boundary: Option<f64>,
    ) -> Result<HeatSolver, JsValue> {
        let registry = FunctionRegistry::default();
        let params = SimulationParameters {
            alpha,
            length,
            nx,
            final_time,
            nt,
            left_boundary,
            right_boundary,
            initial_function,
        };
        let inner =
            Solver::new(&params, &registry).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(HeatSolver { inner })
    }

    // Discretization
    pub fn dx(&self) -> f64 { self.inner.dx() }
    pub fn dt(&self) -> f64 { self.inner.dt() }
    pub fn r(&self) -> f64 { self.inner.r() }

    // Run + timing (WASM-only)
    pub fn solve(&mut self) -> SolveInfo {
        let t0 = now_ms();
        self.inner.solve();
        let t1 = now_ms();
        SolveInfo {
            states: self.inner.history().len(),
            compute_ms: t1 - t0,
        }
    }

    // Copy-based JS access (reliable)
    pub fn grid(&self) -> Vec<f64> {
        self.inner.grid().to_vec()
    }

    pub fn num_states(&self) -> usize {
        self.inner.history().len()
    }

    /// State at time step `step`, or undefined when out of range.
    pub fn state(&self, step: usize) -> Option<Vec<f64>> {
        self.inner.history().get(step).cloned()
    }
}

#[wasm_bindgen]
pub struct SolveInfo {
    states: usize,
    compute_ms: f64,
}

#[wasm_bindgen]
impl SolveInfo {
    pub fn states(&self) -> usize { self.states }
    pub fn compute_ms(&self) -> f64 { self.compute_ms }
}

/// Registered initial-condition names for populating a picker.
#[wasm_bindgen]
pub fn function_names() -> Vec<String> {
    FunctionRegistry::default().names()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
