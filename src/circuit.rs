use std::fmt::Debug;

use petgraph::graphmap::NodeTrait;
use thiserror::Error;
use tracing::{debug, trace};

use crate::multigraph::Multigraph;

/// Reasons an Eulerian circuit cannot be produced.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CircuitError {
    /// An edge token in a textual edge list was not exactly two vertex labels.
    #[error("malformed edge {0:?}, expected exactly two vertex labels")]
    MalformedEdge(String),
    /// The requested start vertex is not part of the graph.
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(String),
    /// Some vertex has odd degree, so no closed walk can use all of its edges.
    #[error("vertex {vertex} has odd degree {degree}")]
    InvalidGraph {
        /// The first vertex found with odd degree.
        vertex: String,
        /// Its degree.
        degree: usize,
    },
    /// Some edges cannot be reached from the start vertex.
    #[error("edges at vertex {vertex} are unreachable from the start vertex")]
    Disconnected {
        /// A vertex whose edges the circuit could not reach.
        vertex: String,
    },
}

impl<V> Multigraph<V>
where
    V: NodeTrait + Debug,
{
    /// Find an Eulerian circuit starting and ending at `start`, consuming every edge of `self` in the process.
    ///
    /// The graph is validated first with [`Multigraph::check_eulerian`]; if that fails, `self` is left untouched.
    /// On success `self` has no edges left, though its vertices remain.
    /// Use [`Self::circuit_from`] to keep the graph intact.
    ///
    /// Neighbors are picked in adjacency order, so which circuit is returned depends on how the graph was built.
    pub fn euler_circuit(&mut self, start: V) -> Result<Vec<V>, CircuitError> {
        self.check_eulerian(start)?;
        Ok(self.euler_circuit_unchecked(start))
    }

    /// Like [`Self::euler_circuit`], but works on a private copy of the graph.
    pub fn circuit_from(&self, start: V) -> Result<Vec<V>, CircuitError> {
        self.clone().euler_circuit(start)
    }

    /// Run the edge-consuming traversal from `start` without checking that the graph is Eulerian.
    ///
    /// On an Eulerian graph this is an Eulerian circuit.
    /// Otherwise the result is some walk that is not guaranteed to be closed or to use every edge,
    /// and edges not reachable from `start` are left in the graph.
    ///
    /// # Traversal
    /// While the vertex `w` on top of the stack still has an edge, one multiplicity of some edge `(w, u)` is removed and `u` is pushed.
    /// Once `w` has no edges left it is popped onto the output.
    /// Vertices are therefore emitted as the walk unwinds: the sub-circuit hanging off `u` first, then `w` itself,
    /// which splices every detour into the circuit at the point it was entered from.
    pub fn euler_circuit_unchecked(&mut self, start: V) -> Vec<V> {
        let edges = self.edge_count();
        let mut circuit = Vec::with_capacity(edges + 1);
        let mut stack = vec![start];

        while let Some(&top) = stack.last() {
            match self.any_neighbor(top) {
                Some(next) => {
                    trace!(from = ?top, to = ?next, "consuming edge");
                    self.remove_edge(top, next);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                    circuit.push(top);
                }
            }
        }

        debug!(start = ?start, edges, consumed = circuit.len().saturating_sub(1), "walk finished");
        circuit
    }
}
