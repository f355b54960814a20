//! `ChainGraph` — a directed multigraph on two append-only arenas.
//!
//! Adjacency is stored intrusively: every node record carries a chain head
//! per [`Direction`], every edge record carries a chain link per direction,
//! and enumerating a node's edges is a walk along those links. There are no
//! per-node `Vec`s of neighbors and no index maps; one node arena and one
//! edge arena encode the whole structure.
//!
//! # Performance
//! - `add_node`: O(1) amortized
//! - `add_edge`: O(1) amortized, independent of degree (prepend splice)
//! - `find_edge` / `update_edge`: O(out-degree of the source)
//! - `neighbors` / `edges`: O(1) to get the iterator, O(degree) to drain
//!
//! Parallel edges are permitted; insertion order is the only identity the
//! structure tracks for them. Removal of nodes or edges is not supported,
//! which is what keeps indices dense and permanently valid.

use core::fmt;
use core::ops::{Index, IndexMut};

use super::index::{Direction, EdgeIx, NodeIx};

/// Internal node record: the caller's value plus one chain head per
/// direction. Fresh nodes have both heads set to [`EdgeIx::INVALID`].
#[derive(Debug, Clone)]
pub struct Node<N> {
    /// The user-provided value.
    pub value: N,
    /// Head of the outgoing / incoming edge chain, by direction slot.
    pub(crate) chain_head: [EdgeIx; 2],
}

impl<N> Node<N> {
    /// Returns the first edge of this node's chain in `dir`, or
    /// [`EdgeIx::INVALID`] if the chain is empty.
    #[inline]
    pub fn chain_head(&self, dir: Direction) -> EdgeIx {
        self.chain_head[dir.index()]
    }
}

/// Internal edge record: the caller's value, the endpoint pair, and one
/// chain link per direction.
///
/// `chain_next[Outgoing]` continues the *source* node's outgoing chain;
/// `chain_next[Incoming]` continues the *target* node's incoming chain.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    /// The user-provided value.
    pub value: E,
    /// `[source, target]` node indices.
    pub(crate) endpoints: [NodeIx; 2],
    /// Next edge in the source's outgoing / target's incoming chain.
    pub(crate) chain_next: [EdgeIx; 2],
}

impl<E> Edge<E> {
    /// Returns the source node index (`endpoints[0]`).
    #[inline]
    pub fn source(&self) -> NodeIx {
        self.endpoints[0]
    }

    /// Returns the target node index (`endpoints[1]`).
    #[inline]
    pub fn target(&self) -> NodeIx {
        self.endpoints[1]
    }

    /// Returns the next edge in this edge's chain for `dir`, or
    /// [`EdgeIx::INVALID`] at the end of the chain.
    #[inline]
    pub fn chain_next(&self, dir: Direction) -> EdgeIx {
        self.chain_next[dir.index()]
    }
}

const OUT: usize = Direction::Outgoing as usize;
const IN: usize = Direction::Incoming as usize;

/// A directed multigraph with node values `N` and edge values `E`.
///
/// Both arenas are append-only, so node and edge indices are dense
/// integers in `[0, count)` and stay valid for the life of the graph.
/// Indices from one graph mean nothing to another; feeding a stale or
/// foreign index to an operation is a caller error that panics when out
/// of bounds and silently answers for the wrong record otherwise.
#[derive(Debug, Clone)]
pub struct ChainGraph<N, E> {
    nodes: Vec<Node<N>>,
    edges: Vec<Edge<E>>,
}

impl<N, E> ChainGraph<N, E> {
    /// Creates an empty graph.
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph with preallocated arena capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends a node with both chain heads empty and returns its index.
    ///
    /// Indices are assigned consecutively from zero.
    pub fn add_node(&mut self, value: N) -> NodeIx {
        let ix = NodeIx::new(self.nodes.len());
        self.nodes.push(Node {
            value,
            chain_head: [EdgeIx::INVALID; 2],
        });
        ix
    }

    /// Adds an edge `a -> b` and returns its index.
    ///
    /// The new edge is prepended to `a`'s outgoing chain and `b`'s incoming
    /// chain, so enumeration order is reverse insertion order. Parallel
    /// edges are allowed and kept distinct.
    ///
    /// A self-loop (`a == b`) unifies the node's two chains: both of the
    /// edge's links take the node's prior outgoing head, and both of the
    /// node's heads move to the new edge, so the loop is reached exactly
    /// once from either direction.
    ///
    /// # Panics
    /// Panics if `a` or `b` is not a valid node index. The check runs
    /// before any mutation; a failed call leaves the graph untouched.
    pub fn add_edge(&mut self, a: NodeIx, b: NodeIx, value: E) -> EdgeIx {
        assert!(
            a.index() < self.nodes.len() && b.index() < self.nodes.len(),
            "edge {a:?} -> {b:?} out of bounds for {} nodes",
            self.nodes.len()
        );
        let ix = EdgeIx::new(self.edges.len());
        let mut chain_next = [EdgeIx::INVALID; 2];
        if a == b {
            let node = &mut self.nodes[a.index()];
            let prior = node.chain_head[OUT];
            chain_next = [prior, prior];
            node.chain_head = [ix, ix];
        } else {
            let source = &mut self.nodes[a.index()];
            chain_next[OUT] = source.chain_head[OUT];
            source.chain_head[OUT] = ix;
            let target = &mut self.nodes[b.index()];
            chain_next[IN] = target.chain_head[IN];
            target.chain_head[IN] = ix;
        }
        self.edges.push(Edge {
            value,
            endpoints: [a, b],
            chain_next,
        });
        ix
    }

    /// Returns the most recently inserted edge `a -> b`, or
    /// [`EdgeIx::INVALID`] if none exists.
    ///
    /// Walks `a`'s outgoing chain, O(out-degree of `a`).
    ///
    /// # Panics
    /// Panics if `a` or `b` is not a valid node index.
    pub fn find_edge(&self, a: NodeIx, b: NodeIx) -> EdgeIx {
        assert!(
            a.index() < self.nodes.len() && b.index() < self.nodes.len(),
            "edge lookup {a:?} -> {b:?} out of bounds for {} nodes",
            self.nodes.len()
        );
        let mut cursor = self.nodes[a.index()].chain_head[OUT];
        while !cursor.is_invalid() {
            let edge = &self.edges[cursor.index()];
            if edge.endpoints[1] == b {
                return cursor;
            }
            cursor = edge.chain_next[OUT];
        }
        EdgeIx::INVALID
    }

    /// Upserts an edge `a -> b`: overwrites the value of the most recently
    /// inserted matching edge, or adds a new edge if none exists. Returns
    /// the affected edge's index.
    ///
    /// On a multigraph only the first match is touched; older parallel
    /// `a -> b` edges keep their values.
    ///
    /// # Panics
    /// Panics if `a` or `b` is not a valid node index.
    pub fn update_edge(&mut self, a: NodeIx, b: NodeIx, value: E) -> EdgeIx {
        let found = self.find_edge(a, b);
        if found.is_invalid() {
            return self.add_edge(a, b, value);
        }
        self.edges[found.index()].value = value;
        found
    }

    /// Returns an iterator over the neighbor indices of `a` in `dir`,
    /// in reverse insertion order.
    ///
    /// `Outgoing` yields the targets of edges whose source is `a`;
    /// `Incoming` yields the sources of edges whose target is `a`. Each
    /// call starts an independent walk from the live chain head; there is
    /// no snapshot isolation against mutation between calls.
    ///
    /// # Panics
    /// Panics if `a` is not a valid node index.
    pub fn neighbors(&self, a: NodeIx, dir: Direction) -> Neighbors<'_, E> {
        Neighbors {
            edges: &self.edges,
            cursor: self.chain_head_of(a, dir),
            dir,
        }
    }

    /// Returns an iterator over `(neighbor, &edge_value)` pairs for `a` in
    /// `dir`, in reverse insertion order.
    ///
    /// Same walk as [`neighbors`](Self::neighbors), with the edge value
    /// alongside each neighbor.
    ///
    /// # Panics
    /// Panics if `a` is not a valid node index.
    pub fn edges(&self, a: NodeIx, dir: Direction) -> Edges<'_, E> {
        Edges {
            edges: &self.edges,
            cursor: self.chain_head_of(a, dir),
            dir,
        }
    }

    fn chain_head_of(&self, a: NodeIx, dir: Direction) -> EdgeIx {
        assert!(
            a.index() < self.nodes.len(),
            "node {a:?} out of bounds for {} nodes",
            self.nodes.len()
        );
        self.nodes[a.index()].chain_head[dir.index()]
    }

    /// Returns a reference to the value of node `a`.
    ///
    /// # Panics
    /// Panics if `a` is not a valid node index.
    pub fn node_value(&self, a: NodeIx) -> &N {
        &self.nodes[a.index()].value
    }

    /// Returns a mutable reference to the value of node `a`.
    ///
    /// # Panics
    /// Panics if `a` is not a valid node index.
    pub fn node_value_mut(&mut self, a: NodeIx) -> &mut N {
        &mut self.nodes[a.index()].value
    }

    /// Returns a reference to the value of edge `e`.
    ///
    /// # Panics
    /// Panics if `e` is not a valid edge index.
    pub fn edge_value(&self, e: EdgeIx) -> &E {
        &self.edges[e.index()].value
    }

    /// Returns a mutable reference to the value of edge `e`.
    ///
    /// # Panics
    /// Panics if `e` is not a valid edge index.
    pub fn edge_value_mut(&mut self, e: EdgeIx) -> &mut E {
        &mut self.edges[e.index()].value
    }

    /// Returns the `(source, target)` endpoints of edge `e`.
    ///
    /// # Panics
    /// Panics if `e` is not a valid edge index.
    pub fn edge_endpoints(&self, e: EdgeIx) -> (NodeIx, NodeIx) {
        let edge = &self.edges[e.index()];
        (edge.endpoints[0], edge.endpoints[1])
    }

    /// Returns an iterator over all node values in index order.
    pub fn node_values(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter().map(|node| &node.value)
    }

    /// Returns the node arena as a slice, indexed by `NodeIx` position.
    pub fn raw_nodes(&self) -> &[Node<N>] {
        &self.nodes
    }

    /// Returns the edge arena as a slice, indexed by `EdgeIx` position.
    pub fn raw_edges(&self) -> &[Edge<E>] {
        &self.edges
    }
}

impl<N, E> Default for ChainGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> Index<NodeIx> for ChainGraph<N, E> {
    type Output = N;

    fn index(&self, ix: NodeIx) -> &N {
        self.node_value(ix)
    }
}

impl<N, E> IndexMut<NodeIx> for ChainGraph<N, E> {
    fn index_mut(&mut self, ix: NodeIx) -> &mut N {
        self.node_value_mut(ix)
    }
}

impl<N, E> Index<EdgeIx> for ChainGraph<N, E> {
    type Output = E;

    fn index(&self, ix: EdgeIx) -> &E {
        self.edge_value(ix)
    }
}

impl<N, E> IndexMut<EdgeIx> for ChainGraph<N, E> {
    fn index_mut(&mut self, ix: EdgeIx) -> &mut E {
        self.edge_value_mut(ix)
    }
}

/// Renders each node on one line as `value -> [neighbor: edge, ...]`,
/// nodes in index order, outgoing edges in enumeration (reverse insertion)
/// order.
impl<N: fmt::Display, E: fmt::Display> fmt::Display for ChainGraph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, node) in self.nodes.iter().enumerate() {
            write!(f, "{} -> [", node.value)?;
            for (i, (nbr, value)) in self.edges(NodeIx::new(ix), Direction::Outgoing).enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {value}", self.nodes[nbr.index()].value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Iterator over the neighbor indices of one node in one direction.
///
/// Yields the far endpoint of each edge in the chain, most recently
/// inserted edge first. See [`ChainGraph::neighbors`].
pub struct Neighbors<'a, E> {
    edges: &'a [Edge<E>],
    cursor: EdgeIx,
    dir: Direction,
}

impl<E> Iterator for Neighbors<'_, E> {
    type Item = NodeIx;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_invalid() {
            return None;
        }
        let edge = &self.edges[self.cursor.index()];
        self.cursor = edge.chain_next[self.dir.index()];
        Some(edge.endpoints[self.dir.opposite().index()])
    }
}

/// Iterator over `(neighbor, &edge_value)` pairs of one node in one
/// direction. See [`ChainGraph::edges`].
pub struct Edges<'a, E> {
    edges: &'a [Edge<E>],
    cursor: EdgeIx,
    dir: Direction,
}

impl<'a, E> Iterator for Edges<'a, E> {
    type Item = (NodeIx, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_invalid() {
            return None;
        }
        let edge = &self.edges[self.cursor.index()];
        self.cursor = edge.chain_next[self.dir.index()];
        Some((edge.endpoints[self.dir.opposite().index()], &edge.value))
    }
}
