//! End-to-end tests for `ChainGraph` driven through the public API only.

use weft::{ChainGraph, Direction, EdgeIx, NodeIx};

/// Builds the 8-node fixture used across these tests:
///
/// ```text
/// a -> b, a -> c, b -> d, b -> e, c -> f, c -> g,
/// e -> f, e -> h, f -> g
/// ```
///
/// with edge values counting up by 0.25 in insertion order.
fn letter_graph() -> (ChainGraph<char, f32>, Vec<NodeIx>) {
    let mut graph = ChainGraph::with_capacity(8, 9);
    let nodes: Vec<_> = ('a'..='h').map(|ch| graph.add_node(ch)).collect();
    let (a, b, c, e, f) = (nodes[0], nodes[1], nodes[2], nodes[4], nodes[5]);
    let (d, g_, h) = (nodes[3], nodes[6], nodes[7]);

    graph.add_edge(a, b, 0.0);
    graph.add_edge(a, c, 0.25);
    graph.add_edge(b, d, 0.5);
    graph.add_edge(b, e, 0.75);
    graph.add_edge(c, f, 1.0);
    graph.add_edge(c, g_, 1.25);
    graph.add_edge(e, f, 1.5);
    graph.add_edge(e, h, 1.75);
    graph.add_edge(f, g_, 2.0);

    (graph, nodes)
}

#[test]
fn letter_graph_neighbor_sequences() {
    let (graph, n) = letter_graph();
    assert_eq!(graph.len(), 8);
    assert_eq!(graph.edge_count(), 9);

    let out_a: Vec<_> = graph.neighbors(n[0], Direction::Outgoing).collect();
    assert_eq!(out_a, vec![n[2], n[1]], "a -> [c, b]");

    let out_c: Vec<_> = graph.neighbors(n[2], Direction::Outgoing).collect();
    assert_eq!(out_c, vec![n[6], n[5]], "c -> [g, f]");
}

#[test]
fn letter_graph_edge_sequences() {
    let (graph, n) = letter_graph();

    let out_e: Vec<(NodeIx, f32)> = graph
        .edges(n[4], Direction::Outgoing)
        .map(|(nbr, &w)| (nbr, w))
        .collect();
    assert_eq!(out_e, vec![(n[7], 1.75), (n[5], 1.5)], "e -> [(h, 1.75), (f, 1.5)]");

    let in_f: Vec<(NodeIx, f32)> = graph
        .edges(n[5], Direction::Incoming)
        .map(|(nbr, &w)| (nbr, w))
        .collect();
    assert_eq!(in_f, vec![(n[4], 1.5), (n[2], 1.0)], "f <- [(e, 1.5), (c, 1.0)]");
}

#[test]
fn letter_graph_lookups() {
    let (mut graph, n) = letter_graph();

    let found = graph.find_edge(n[2], n[5]);
    assert_ne!(found, EdgeIx::INVALID);
    assert_eq!(graph[found], 1.0);
    assert_eq!(graph.edge_endpoints(found), (n[2], n[5]));

    // No edge d -> anything.
    assert_eq!(graph.find_edge(n[3], n[0]), EdgeIx::INVALID);

    // Upsert the existing c -> f edge in place.
    let touched = graph.update_edge(n[2], n[5], 9.0);
    assert_eq!(touched, found);
    assert_eq!(graph.edge_count(), 9);
    assert_eq!(graph[found], 9.0);
}

#[test]
fn letter_graph_rendering() {
    let (graph, _) = letter_graph();
    let rendered = graph.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "a -> [c: 0.25, b: 0]");
    assert_eq!(lines[4], "e -> [h: 1.75, f: 1.5]");
    assert_eq!(lines[7], "h -> []");
}

#[test]
fn letter_graph_from_edge_list_matches_hand_built() {
    let (hand_built, n) = letter_graph();
    let from_list: ChainGraph<char, f32> = {
        let mut g = ChainGraph::from_edges([
            (0, 1, 0.0),
            (0, 2, 0.25),
            (1, 3, 0.5),
            (1, 4, 0.75),
            (2, 5, 1.0),
            (2, 6, 1.25),
            (4, 5, 1.5),
            (4, 7, 1.75),
            (5, 6, 2.0),
        ]);
        for (ix, ch) in ('a'..='h').enumerate() {
            g[NodeIx::new(ix)] = ch;
        }
        g
    };

    assert_eq!(from_list.len(), hand_built.len());
    assert_eq!(from_list.edge_count(), hand_built.edge_count());
    for &node in &n {
        for dir in weft::DIRECTIONS {
            let lhs: Vec<_> = hand_built.neighbors(node, dir).collect();
            let rhs: Vec<_> = from_list.neighbors(node, dir).collect();
            assert_eq!(lhs, rhs, "node {node:?} direction {dir:?}");
        }
    }
    assert_eq!(from_list.to_string(), hand_built.to_string());
}

#[test]
fn char_default_requires_no_special_handling() {
    // Endpoint 3 forces materialization of nodes 0..=3 with char::default().
    let g: ChainGraph<char, f32> = ChainGraph::from_edges([(0usize, 3usize, 1.0)]);
    assert_eq!(g.len(), 4);
    assert_eq!(g[NodeIx::new(2)], char::default());
}
