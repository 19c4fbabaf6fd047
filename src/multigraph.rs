use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::str::FromStr;

use itertools::Itertools;
use petgraph::graphmap::{NodeTrait, UnGraphMap};
use petgraph::visit::Dfs;
use unordered_pair::UnorderedPair;

use crate::circuit::CircuitError;

/// Number of parallel edges joining the same pair of vertices.
pub type Multiplicity = usize;

/// An undirected multigraph over vertex labels `V`.
///
/// Parallel edges are folded into a single [`UnGraphMap`] edge whose weight is its [`Multiplicity`].
/// Self-loops are allowed and count twice towards the degree of their vertex.
///
/// Vertices keep the order in which they were first seen, which is also the order [`Self::check_eulerian`] reports problems in.
#[derive(Clone, Debug)]
pub struct Multigraph<V>
where
    V: NodeTrait,
{
    pub(crate) graph: UnGraphMap<V, Multiplicity>,
}

impl<V: NodeTrait> Default for Multigraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Multigraph<V>
where
    V: NodeTrait,
{
    /// An empty graph.
    pub fn new() -> Self {
        Self { graph: UnGraphMap::new() }
    }

    /// Build a graph out of `edges`, adding one multiplicity per pair.
    pub fn from_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut ret = Self::new();
        edges.into_iter().for_each(|(u, v)| ret.add_edge(u, v));
        ret
    }

    /// Add a vertex with no incident edges. Does nothing if `v` is already present.
    pub fn add_vertex(&mut self, v: V) {
        self.graph.add_node(v);
    }

    /// Add one edge between `u` and `v`, creating either vertex as needed.
    pub fn add_edge(&mut self, u: V, v: V) {
        match self.graph.edge_weight_mut(u, v) {
            Some(multiplicity) => *multiplicity += 1,
            None => {
                self.graph.add_edge(u, v, 1);
            }
        }
    }

    /// Remove a single multiplicity of the edge `(u, v)`.
    /// Vertices are never removed, even once they become isolated.
    ///
    /// Returns `false` if there was no such edge.
    pub fn remove_edge(&mut self, u: V, v: V) -> bool {
        match self.graph.edge_weight_mut(u, v) {
            None => false,
            Some(multiplicity) if *multiplicity > 1 => {
                *multiplicity -= 1;
                true
            }
            Some(_) => {
                self.graph.remove_edge(u, v);
                true
            }
        }
    }

    /// `true` if `v` is a vertex of this graph, with or without edges.
    #[inline]
    pub fn contains_vertex(&self, v: V) -> bool {
        self.graph.contains_node(v)
    }

    /// Number of parallel edges between `u` and `v`, 0 if they are not adjacent.
    pub fn multiplicity(&self, u: V, v: V) -> Multiplicity {
        self.graph.edge_weight(u, v).copied().unwrap_or(0)
    }

    /// Degree of `v`, counting each parallel edge and counting self-loops twice.
    pub fn degree(&self, v: V) -> usize {
        if !self.graph.contains_node(v) {
            return 0;
        }

        self.graph.edges(v)
            .map(|(_, other, multiplicity)| if other == v { 2 * multiplicity } else { *multiplicity })
            .sum()
    }

    /// Any vertex still joined to `v` by at least one edge.
    pub(crate) fn any_neighbor(&self, v: V) -> Option<V> {
        if !self.graph.contains_node(v) {
            return None;
        }

        self.graph.neighbors(v).next()
    }

    /// Total number of edges, counting every multiplicity.
    pub fn edge_count(&self) -> usize {
        self.graph.all_edges().map(|(_, _, multiplicity)| *multiplicity).sum()
    }

    /// Number of vertices, isolated ones included.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.graph.nodes()
    }

    /// `true` once every edge has been removed. Isolated vertices may remain.
    pub fn is_empty(&self) -> bool {
        self.graph.edge_count() == 0
    }

    /// The edge multiset of this graph.
    pub(crate) fn edge_multiset(&self) -> HashMap<UnorderedPair<V>, Multiplicity> {
        self.graph.all_edges()
            .map(|(u, v, multiplicity)| (UnorderedPair::from((u, v)), *multiplicity))
            .collect()
    }

    /// Check that an Eulerian circuit from `start` exists, i.e. that `start` is in the graph, every vertex has even degree,
    /// and every vertex with an edge is reachable from `start`.
    pub fn check_eulerian(&self, start: V) -> Result<(), CircuitError>
    where
        V: Debug,
    {
        if !self.contains_vertex(start) {
            return Err(CircuitError::UnknownVertex(format!("{start:?}")));
        }

        if let Some((vertex, degree)) = self.vertices()
            .map(|v| (v, self.degree(v)))
            .find(|(_, degree)| degree % 2 != 0) {
            return Err(CircuitError::InvalidGraph { vertex: format!("{vertex:?}"), degree });
        }

        let mut reached = Vec::with_capacity(self.vertex_count());
        let mut dfs = Dfs::new(&self.graph, start);
        while let Some(v) = dfs.next(&self.graph) {
            reached.push(v);
        }

        if reached.len() < self.vertex_count() {
            let reached = reached.into_iter().collect::<HashSet<_>>();
            // isolated vertices don't need visiting, only stranded edges matter
            if let Some(stranded) = self.vertices().find(|v| !reached.contains(v) && self.degree(*v) > 0) {
                return Err(CircuitError::Disconnected { vertex: format!("{stranded:?}") });
            }
        }

        Ok(())
    }

    /// Check whether `walk` is an Eulerian circuit of this graph beginning and ending at `start`.
    ///
    /// `start` must be a vertex of this graph. The walk must have exactly [`Self::edge_count`] + 1 vertices, each consecutive pair must be joined by an edge of this graph,
    /// and across the whole walk each edge must be used exactly as many times as its multiplicity.
    pub fn is_euler_circuit(&self, walk: &[V], start: V) -> bool {
        if !self.contains_vertex(start) || walk.len() != self.edge_count() + 1 || walk.first() != Some(&start) || walk.last() != Some(&start) {
            return false;
        }

        let mut remaining = self.edge_multiset();
        for (u, v) in walk.iter().tuple_windows() {
            match remaining.get_mut(&UnorderedPair::from((*u, *v))) {
                Some(left) if *left > 0 => *left -= 1,
                _ => return false,
            }
        }

        remaining.values().all(|left| *left == 0)
    }
}

/// Parses whitespace separated two-character edges such as `"ab ag bc"`.
impl FromStr for Multigraph<char> {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let edges = s.split_whitespace()
            .map(|token| match token.chars().collect_tuple() {
                Some((u, v)) => Ok((u, v)),
                None => Err(CircuitError::MalformedEdge(token.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_edges(edges))
    }
}
