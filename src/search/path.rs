use std::hash::Hash;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::PredecessorMap;
use crate::{
    error::{PathValidationError, SearchError},
    graphs::{Distance, WeightedGraph},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub distance: Distance,
}

/// Rebuilds the vertices of the shortest path from `source` to `target`.
///
/// A missing predecessor means "no path" unless `target` is `source` itself,
/// which yields `[source]`. An empty vector is returned if there is no path.
///
/// The walk is bounded by the number of entries in `predecessors`; a chain
/// that loops or ends anywhere but at `source` is reported as
/// [`SearchError::CorruptPredecessorChain`].
pub fn reconstruct_path<V>(
    predecessors: &PredecessorMap<V>,
    source: &V,
    target: &V,
) -> Result<Vec<V>, SearchError>
where
    V: Clone + Eq + Hash,
{
    if target == source {
        return Ok(vec![source.clone()]);
    }

    let Some(Some(predecessor)) = predecessors.get(target) else {
        return Ok(Vec::new());
    };

    let max_steps = predecessors.len();
    let mut vertices = vec![target.clone()];
    let mut current = predecessor;
    for _ in 0..max_steps {
        vertices.push(current.clone());
        if current == source {
            vertices.reverse();
            return Ok(vertices);
        }

        match predecessors.get(current) {
            Some(Some(predecessor)) => current = predecessor,
            _ => break,
        }
    }

    Err(SearchError::CorruptPredecessorChain { steps: max_steps })
}

/// Checks that consecutive vertices of `path` are joined by edges of `graph`
/// and that the cheapest of those edges add up to `path.distance`.
pub fn validate_path<V>(
    graph: &WeightedGraph<V>,
    path: &Path<V>,
) -> Result<(), PathValidationError>
where
    V: Clone + Eq + Hash,
{
    if path.vertices.is_empty() {
        return Err(PathValidationError::Empty);
    }

    let mut actual: Distance = 0;
    for (index, (tail, head)) in path.vertices.iter().tuple_windows().enumerate() {
        let weight = graph
            .edge_weight(tail, head)
            .ok_or(PathValidationError::MissingEdge { index })?;
        actual = actual.saturating_add(Distance::from(weight));
    }

    if actual != path.distance {
        return Err(PathValidationError::WrongDistance {
            claimed: path.distance,
            actual,
        });
    }

    Ok(())
}
