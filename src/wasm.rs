use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::jugs::{JugPuzzle, Jugs};
use crate::multigraph::Multigraph;

/// Find an Eulerian circuit of the graph described by `edges` (e.g. `"ab ag bc"`) beginning at `start`.
/// Returns the vertices of the circuit as one-character strings.
#[wasm_bindgen(js_name = eulerCircuit)]
pub fn euler_circuit(edges: &str, start: char) -> Result<Array, JsError> {
    let mut graph: Multigraph<char> = edges.parse()?;
    let circuit = graph.euler_circuit(start)?;

    Ok(circuit.into_iter()
        .map(|v| JsValue::from(v.to_string()))
        .collect())
}

/// Solve a jug puzzle, returning each state along the shortest path formatted as `(a, b)`.
#[wasm_bindgen(js_name = solveJugs)]
pub fn solve_jugs(capacity_a: u32, capacity_b: u32, goal_a: u32, goal_b: u32) -> Result<Array, JsError> {
    let solution = JugPuzzle::new(capacity_a, capacity_b)
        .solve(Jugs::default(), Jugs::new(goal_a, goal_b))?;

    Ok(solution.states().iter()
        .map(|state| JsValue::from(state.to_string()))
        .collect())
}
