use shortest_paths::{
    graphs::{example_graph, WeightedGraph, UNREACHABLE},
    search::{
        dijkstra::{compute, ShortestPathEngine},
        path::{reconstruct_path, validate_path, Path},
    },
};

fn label(vertex: &str) -> String {
    vertex.to_string()
}

#[test]
fn example_graph_distances() {
    let graph = example_graph();
    let (distances, predecessors) = compute(&graph, &label("A")).unwrap();

    let expected = [("A", 0), ("B", 3), ("C", 2), ("D", 8), ("E", 10), ("F", 13)];
    assert_eq!(distances.len(), expected.len());
    for (vertex, distance) in expected {
        assert_eq!(distances[vertex], distance, "vertex {}", vertex);
    }

    assert_eq!(predecessors["A"], None);
    assert_eq!(predecessors["B"], Some(label("C")));
    assert_eq!(predecessors["F"], Some(label("E")));
}

#[test]
fn example_graph_paths() {
    let graph = example_graph();
    let source = label("A");
    let (distances, predecessors) = compute(&graph, &source).unwrap();

    assert_eq!(
        reconstruct_path(&predecessors, &source, &label("F")).unwrap(),
        vec!["A", "C", "B", "D", "E", "F"]
    );

    for target in graph.vertices() {
        let vertices = reconstruct_path(&predecessors, &source, target).unwrap();
        assert_eq!(vertices.first(), Some(&source));
        assert_eq!(vertices.last(), Some(target));

        let path = Path {
            vertices,
            distance: distances[target],
        };
        assert_eq!(validate_path(&graph, &path), Ok(()));
    }
}

#[test]
fn single_vertex() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(label("only"));

    let (distances, predecessors) = compute(&graph, &label("only")).unwrap();
    assert_eq!(distances.len(), 1);
    assert_eq!(distances["only"], 0);
    assert_eq!(predecessors["only"], None);
    assert_eq!(
        reconstruct_path(&predecessors, &label("only"), &label("only")).unwrap(),
        vec!["only"]
    );
}

#[test]
fn disconnected_vertex_is_unreachable() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex(label("X"));
    graph.add_vertex(label("Y"));

    let (distances, predecessors) = compute(&graph, &label("X")).unwrap();
    assert_eq!(distances["X"], 0);
    assert_eq!(distances["Y"], UNREACHABLE);
    assert_eq!(predecessors["Y"], None);
    assert!(reconstruct_path(&predecessors, &label("X"), &label("Y"))
        .unwrap()
        .is_empty());
}

#[test]
fn compute_is_idempotent() {
    let graph = example_graph();
    let engine = ShortestPathEngine::new(&graph);

    for source in graph.vertices() {
        assert_eq!(engine.compute(source), engine.compute(source));
    }
}

#[test]
fn self_loops_and_parallel_edges() {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 1, 0).unwrap();
    graph.add_edge(1, 2, 8).unwrap();
    graph.add_edge(2, 1, 3).unwrap();
    graph.add_edge(2, 2, 1).unwrap();

    let (distances, predecessors) = compute(&graph, &1).unwrap();
    assert_eq!(distances[&1], 0);
    assert_eq!(distances[&2], 3);
    assert_eq!(predecessors[&1], None);
    assert_eq!(predecessors[&2], Some(1));
}
