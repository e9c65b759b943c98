//! Single-source shortest paths over undirected, non-negatively weighted
//! graphs.
//!
//! ```
//! use shortest_paths::{graphs::example_graph, search::dijkstra::compute};
//!
//! let graph = example_graph();
//! let (distances, _predecessors) = compute(&graph, &"A".to_string()).unwrap();
//! assert_eq!(distances["F"], 13);
//! ```

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;
