use ahash::HashMap;

use crate::{error::SearchError, graphs::Distance};
use path::Path;

pub mod collections;
pub mod dijkstra;
pub mod observer;
pub mod path;

/// Distance from the source for every vertex of the graph,
/// [`crate::graphs::UNREACHABLE`] if there is no path.
pub type DistanceMap<V> = HashMap<V, Distance>;

/// Vertex preceding each vertex on its shortest path. `None` for the source
/// and for unreachable vertices.
pub type PredecessorMap<V> = HashMap<V, Option<V>>;

pub trait PathFinding<V> {
    /// Shortest path from `source` to `target`, `None` if `target` cannot be
    /// reached or is not part of the graph.
    fn shortest_path(&self, source: &V, target: &V) -> Result<Option<Path<V>>, SearchError>;

    fn shortest_path_distance(
        &self,
        source: &V,
        target: &V,
    ) -> Result<Option<Distance>, SearchError> {
        Ok(self
            .shortest_path(source, target)?
            .map(|path| path.distance))
    }
}
