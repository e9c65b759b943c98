use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use serde::Deserialize;
use tracing::debug;

use super::WeightedGraph;
use crate::error::GraphError;

#[derive(Deserialize)]
struct GraphDescription {
    #[serde(default)]
    vertices: Vec<String>,
    #[serde(default)]
    edges: Vec<EdgeDescription>,
}

#[derive(Deserialize)]
struct EdgeDescription {
    tail: String,
    head: String,
    weight: i64,
}

/// Loads graphs with string labels from edge list or JSON files.
#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads `path` as JSON if it has a `.json` extension and as an edge list
    /// otherwise.
    pub fn from_file(path: &Path) -> Result<WeightedGraph<String>, GraphError> {
        let reader = BufReader::new(File::open(path)?);
        let graph = match path.extension().and_then(|extension| extension.to_str()) {
            Some("json") => Self::from_json(reader)?,
            _ => Self::from_edge_list(reader)?,
        };

        debug!(
            path = %path.display(),
            vertices = graph.number_of_vertices(),
            edges = graph.number_of_edges(),
            "loaded graph"
        );
        Ok(graph)
    }

    /// Parses one edge per line as `tail head weight`. A line holding a single
    /// label adds an isolated vertex. Empty lines and lines starting with `#`
    /// are skipped.
    pub fn from_edge_list<R: BufRead>(reader: R) -> Result<WeightedGraph<String>, GraphError> {
        let mut graph = WeightedGraph::new();

        for (line_index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let values: Vec<&str> = line.split_whitespace().collect();
            match values.as_slice() {
                [vertex] => graph.add_vertex(vertex.to_string()),
                [tail, head, weight] => {
                    let weight: i64 = weight.parse().map_err(|_| GraphError::Parse {
                        line: line_number,
                        message: format!("weight '{}' is not an integer", weight),
                    })?;
                    graph.add_edge(tail.to_string(), head.to_string(), weight)?;
                }
                _ => {
                    return Err(GraphError::Parse {
                        line: line_number,
                        message: format!("expected 1 or 3 values, found {}", values.len()),
                    })
                }
            }
        }

        Ok(graph)
    }

    /// Parses `{"vertices": [..], "edges": [{"tail", "head", "weight"}, ..]}`.
    /// Both fields are optional.
    pub fn from_json<R: Read>(reader: R) -> Result<WeightedGraph<String>, GraphError> {
        let description: GraphDescription = serde_json::from_reader(reader)?;

        let mut graph = WeightedGraph::new();
        for vertex in description.vertices {
            graph.add_vertex(vertex);
        }
        for edge in description.edges {
            graph.add_edge(edge.tail, edge.head, edge.weight)?;
        }

        Ok(graph)
    }
}
