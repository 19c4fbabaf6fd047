#![warn(missing_docs)]

//! # `eulerjug`
//!
//! Two small search problems on graphs.
//!
//! ## Eulerian circuits
//! Build a [`Multigraph`], either from an edge list with [`Multigraph::from_edges`] or by parsing a string such as `"ab ag bc"`,
//! then call [`euler_circuit`](Multigraph::euler_circuit) to get a closed walk using every edge exactly once.
//! Finding the circuit consumes the graph's edges; [`circuit_from`](Multigraph::circuit_from) works on a copy instead.
//!
//! The walk is found with Hierholzer's algorithm in its simplest form: leave each vertex along any unused edge,
//! and emit vertices as they run out of edges.
//! The emitted order splices every detour back into the circuit at the point it left from.
//! Preconditions (even degrees, all edges reachable) are checked first and reported as [`CircuitError`]s.
//!
//! ## Water jugs
//! A [`JugPuzzle`] has two jugs of fixed capacity which may be filled, emptied, or poured into one another (see [`Pour`]).
//! [`JugPuzzle::solve`] runs a breadth-first search over the `(a, b)` states and returns a shortest [`Solution`].
//! [`JugPuzzle::explore`] instead records distances to every reachable state in a [`SearchRecord`].
//!
//! ```
//! use eulerjug::{JugPuzzle, Jugs};
//!
//! let solution = JugPuzzle::new(3, 5).solve(Jugs::new(0, 0), Jugs::new(0, 4)).unwrap();
//! assert_eq!(solution.len(), 7);
//! ```

pub use circuit::CircuitError;
pub use jugs::{Amount, JugPuzzle, Jugs, Pour};
pub use multigraph::{Multigraph, Multiplicity};
pub use search::{JugError, SearchRecord, Solution, Visit};

pub mod circuit;
pub mod jugs;
pub mod multigraph;
pub mod search;
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;
