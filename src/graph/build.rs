//! Bulk construction of chain graphs from edge lists.
//!
//! Edge lists address nodes by plain integer, and endpoints that do not
//! exist yet are materialized on the fly with default node values. This is
//! the quickest way to stand up a fixture graph:
//!
//! ```rust
//! use weft::{ChainGraph, Direction, NodeIx};
//!
//! let graph: ChainGraph<u32, u32> =
//!     ChainGraph::from_edges([(0, 1, 10), (0, 2, 20), (2, 1, 30)]);
//! assert_eq!(graph.len(), 3);
//! let out: Vec<_> = graph
//!     .neighbors(NodeIx::new(0), Direction::Outgoing)
//!     .collect();
//! assert_eq!(out, vec![NodeIx::new(2), NodeIx::new(1)]);
//! ```

use super::chain_graph::ChainGraph;
use super::index::NodeIx;

/// Conversion of one edge-list entry into `(source, target, value)`.
///
/// Implemented for triples addressed by raw integer or by [`NodeIx`], and
/// for bare endpoint pairs when the edge value type has a default. This is
/// the capability bound of [`ChainGraph::extend_with_edges`]; it is not
/// meant to be implemented outside the crate, though nothing prevents it.
pub trait IntoEdgeTriple<E> {
    /// Splits the entry into raw source, raw target, and edge value.
    fn into_edge_triple(self) -> (usize, usize, E);
}

impl<E> IntoEdgeTriple<E> for (usize, usize, E) {
    fn into_edge_triple(self) -> (usize, usize, E) {
        (self.0, self.1, self.2)
    }
}

impl<E> IntoEdgeTriple<E> for (NodeIx, NodeIx, E) {
    fn into_edge_triple(self) -> (usize, usize, E) {
        (self.0.index(), self.1.index(), self.2)
    }
}

impl<E: Default> IntoEdgeTriple<E> for (usize, usize) {
    fn into_edge_triple(self) -> (usize, usize, E) {
        (self.0, self.1, E::default())
    }
}

impl<E: Default> IntoEdgeTriple<E> for (NodeIx, NodeIx) {
    fn into_edge_triple(self) -> (usize, usize, E) {
        (self.0.index(), self.1.index(), E::default())
    }
}

impl<N, E> ChainGraph<N, E>
where
    N: Default,
{
    /// Adds every edge in `iterable`, materializing missing endpoints as
    /// default-valued nodes first.
    ///
    /// For each entry, the node count grows until it exceeds the larger
    /// endpoint integer, then the edge is added as by
    /// [`add_edge`](Self::add_edge). Existing nodes and edges are never
    /// touched, so the method composes with hand-built graphs.
    pub fn extend_with_edges<I>(&mut self, iterable: I)
    where
        I: IntoIterator,
        I::Item: IntoEdgeTriple<E>,
    {
        for entry in iterable {
            let (a, b, value) = entry.into_edge_triple();
            let needed = a.max(b);
            while self.len() <= needed {
                self.add_node(N::default());
            }
            self.add_edge(NodeIx::new(a), NodeIx::new(b), value);
        }
    }

    /// Builds a graph from an edge list: an empty graph plus
    /// [`extend_with_edges`](Self::extend_with_edges).
    pub fn from_edges<I>(iterable: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoEdgeTriple<E>,
    {
        let mut graph = Self::new();
        graph.extend_with_edges(iterable);
        graph
    }
}

impl<N, E, T> Extend<T> for ChainGraph<N, E>
where
    N: Default,
    T: IntoEdgeTriple<E>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        self.extend_with_edges(iterable);
    }
}

impl<N, E, T> FromIterator<T> for ChainGraph<N, E>
where
    N: Default,
    T: IntoEdgeTriple<E>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        Self::from_edges(iterable)
    }
}
