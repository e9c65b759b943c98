use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};
use shortest_paths::{
    graphs::{Distance, WeightedGraph, UNREACHABLE},
    search::{
        dijkstra::{compute, ShortestPathEngine},
        observer::{SearchObserver, SearchStep, StepRecorder},
        path::{reconstruct_path, validate_path, Path},
        PathFinding,
    },
};

fn random_graph(number_of_vertices: u32, number_of_edges: usize, seed: u64) -> WeightedGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = WeightedGraph::new();
    for vertex in 0..number_of_vertices {
        graph.add_vertex(vertex);
    }
    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        graph.add_edge(tail, head, rng.gen_range(0..20)).unwrap();
    }
    graph
}

/// Minimum weight over all simple paths from `source`, by exhaustive search.
fn brute_force(graph: &WeightedGraph<u32>, source: u32) -> Vec<Distance> {
    fn visit(
        graph: &WeightedGraph<u32>,
        vertex: u32,
        distance: Distance,
        on_path: &mut HashSet<u32>,
        best: &mut Vec<Distance>,
    ) {
        best[vertex as usize] = best[vertex as usize].min(distance);
        for (&neighbor, weight) in graph.neighbors(&vertex) {
            if on_path.insert(neighbor) {
                visit(graph, neighbor, distance + Distance::from(weight), on_path, best);
                on_path.remove(&neighbor);
            }
        }
    }

    let mut best = vec![UNREACHABLE; graph.number_of_vertices()];
    let mut on_path = HashSet::from([source]);
    visit(graph, source, 0, &mut on_path, &mut best);
    best
}

#[test]
fn matches_brute_force_on_random_graphs() {
    for seed in 0..40 {
        let graph = random_graph(7, 9, 0xD1A1_0000 + seed);
        let source = (seed % 7) as u32;

        let (distances, _) = compute(&graph, &source).unwrap();
        let expected = brute_force(&graph, source);
        for vertex in graph.vertices() {
            assert_eq!(
                distances[vertex], expected[*vertex as usize],
                "seed={} vertex={}",
                seed, vertex
            );
        }
    }
}

#[test]
fn reconstructed_paths_are_shortest() {
    for seed in 0..20 {
        let graph = random_graph(30, 60, 0x5EED_0000 + seed);
        let source = 0;
        let (distances, predecessors) = compute(&graph, &source).unwrap();
        let engine = ShortestPathEngine::new(&graph);

        for target in graph.vertices() {
            let vertices = reconstruct_path(&predecessors, &source, target).unwrap();
            if distances[target] == UNREACHABLE {
                assert!(vertices.is_empty(), "seed={} target={}", seed, target);
                assert_eq!(predecessors[target], None);
                assert_eq!(engine.shortest_path(&source, target), Ok(None));
                continue;
            }

            let path = Path {
                vertices,
                distance: distances[target],
            };
            assert_eq!(validate_path(&graph, &path), Ok(()), "seed={}", seed);

            let single_pair = engine.shortest_path(&source, target).unwrap().unwrap();
            assert_eq!(single_pair.distance, path.distance);
            assert_eq!(validate_path(&graph, &single_pair), Ok(()));
        }
    }
}

#[test]
fn settled_distances_never_change() {
    struct Monotonicity {
        settled: HashSet<u32>,
        violations: usize,
    }

    impl SearchObserver<u32> for Monotonicity {
        fn on_settle(&mut self, vertex: &u32, _distance: Distance) {
            if !self.settled.insert(*vertex) {
                self.violations += 1;
            }
        }

        fn on_relax(&mut self, _tail: &u32, head: &u32, _: Option<Distance>, _: Distance) {
            if self.settled.contains(head) {
                self.violations += 1;
            }
        }
    }

    for seed in 0..20 {
        let graph = random_graph(40, 120, 0xC0DE_0000 + seed);
        let mut observer = Monotonicity {
            settled: HashSet::new(),
            violations: 0,
        };
        ShortestPathEngine::new(&graph)
            .compute_with_observer(&0, &mut observer)
            .unwrap();

        assert_eq!(observer.violations, 0, "seed={}", seed);
    }
}

#[test]
fn settle_distances_are_non_decreasing() {
    let graph = random_graph(50, 150, 0xB0A5_0000);
    let mut recorder = StepRecorder::<u32>::new();
    let (distances, _) = ShortestPathEngine::new(&graph)
        .compute_with_observer(&3, &mut recorder)
        .unwrap();

    let settled: Vec<Distance> = recorder
        .steps
        .iter()
        .filter_map(|step| match step {
            SearchStep::Settled { vertex, distance } => {
                assert_eq!(distances[vertex], *distance);
                Some(*distance)
            }
            _ => None,
        })
        .collect();

    assert!(settled.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(
        settled.len(),
        distances.values().filter(|&&d| d != UNREACHABLE).count()
    );
}

#[test]
fn searches_share_graph_across_threads() {
    let graph = random_graph(25, 60, 0xFACE);
    let engine = ShortestPathEngine::new(&graph);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|source| scope.spawn(move || engine.compute(&source).unwrap()))
            .collect();

        for (source, handle) in handles.into_iter().enumerate() {
            let parallel = handle.join().unwrap();
            assert_eq!(parallel, compute(&graph, &(source as u32)).unwrap());
        }
    });
}
