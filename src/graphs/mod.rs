pub mod edge;
pub mod graph_factory;
pub mod weighted_graph;

pub use weighted_graph::WeightedGraph;

pub type Weight = u64;
/// Twice as wide as [`Weight`]: a path over any number of edges with weights up
/// to `i64::MAX` stays below [`UNREACHABLE`].
pub type Distance = u128;

/// Distance of a vertex that has no path from the source.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Builds the six vertex graph used by the command line tools when no graph
/// file is given.
///
/// Shortest distances from `A` are `{A: 0, B: 3, C: 2, D: 8, E: 10, F: 13}`.
pub fn example_graph() -> WeightedGraph<String> {
    let edges = [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
        ("D", "F", 6),
        ("E", "F", 3),
    ];

    let mut graph = WeightedGraph::new();
    for (tail, head, weight) in edges {
        graph.insert_edge(tail.to_string(), head.to_string(), weight);
    }
    graph
}
