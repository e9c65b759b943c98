use std::hash::Hash;

use ahash::HashMapExt;
use tracing::{debug, trace};

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
    },
    observer::{NoopObserver, SearchObserver},
    path::Path,
    DistanceMap, PathFinding, PredecessorMap,
};
use crate::{
    error::SearchError,
    graphs::{Distance, WeightedGraph, UNREACHABLE},
};

#[derive(Debug, Default)]
struct SearchStatistics {
    settled: usize,
    stale: usize,
    relaxed: usize,
}

/// Dijkstra's algorithm over a [`WeightedGraph`] with a binary heap frontier.
///
/// Improved distances are pushed as new heap entries instead of decreasing a
/// key; entries for vertices that were settled in the meantime are dropped
/// when popped. Entries with equal distance are popped in vertex insertion
/// order, so repeated searches on the same graph give identical results.
///
/// The engine only borrows the graph, so any number of engines may search the
/// same graph concurrently.
#[derive(Clone, Copy)]
pub struct ShortestPathEngine<'a, V> {
    graph: &'a WeightedGraph<V>,
}

impl<'a, V> ShortestPathEngine<'a, V>
where
    V: Clone + Eq + Hash,
{
    pub fn new(graph: &'a WeightedGraph<V>) -> Self {
        ShortestPathEngine { graph }
    }

    /// Shortest distances and predecessors from `source` to every vertex.
    pub fn compute(
        &self,
        source: &V,
    ) -> Result<(DistanceMap<V>, PredecessorMap<V>), SearchError> {
        self.compute_with_observer(source, &mut NoopObserver)
    }

    /// Like [`Self::compute`], reporting every settle, stale pop and
    /// relaxation to `observer`.
    pub fn compute_with_observer(
        &self,
        source: &V,
        observer: &mut dyn SearchObserver<V>,
    ) -> Result<(DistanceMap<V>, PredecessorMap<V>), SearchError> {
        let source = self
            .graph
            .index_of(source)
            .ok_or(SearchError::UnknownSourceVertex)?;

        let data = self.search(source, None, observer);
        Ok(self.to_maps(&data))
    }

    /// Shortest path from `source` to `target`, reporting every step to
    /// `observer`. Stops as soon as `target` is settled.
    pub fn shortest_path_with_observer(
        &self,
        source: &V,
        target: &V,
        observer: &mut dyn SearchObserver<V>,
    ) -> Result<Option<Path<V>>, SearchError> {
        let source = self
            .graph
            .index_of(source)
            .ok_or(SearchError::UnknownSourceVertex)?;
        let Some(target) = self.graph.index_of(target) else {
            return Ok(None);
        };

        let data = self.search(source, Some(target), observer);
        let path = data.get_path(target).map(|path| Path {
            vertices: path
                .vertices
                .into_iter()
                .map(|vertex| self.graph.vertex(vertex).clone())
                .collect(),
            distance: path.distance,
        });

        Ok(path)
    }

    fn search(
        &self,
        source: usize,
        target: Option<usize>,
        observer: &mut dyn SearchObserver<V>,
    ) -> DijkstraDataVec {
        let number_of_vertices = self.graph.number_of_vertices();
        let mut data = DijkstraDataVec::new(number_of_vertices);
        let mut expanded = VertexExpandedDataVec::new(number_of_vertices);
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        let statistics = dijkstra(
            self.graph,
            &mut data,
            &mut expanded,
            &mut queue,
            observer,
            source,
            target,
        );
        debug!(
            source,
            ?target,
            number_of_vertices,
            settled = statistics.settled,
            stale = statistics.stale,
            relaxed = statistics.relaxed,
            "dijkstra finished"
        );

        data
    }

    fn to_maps(&self, data: &DijkstraDataVec) -> (DistanceMap<V>, PredecessorMap<V>) {
        let number_of_vertices = self.graph.number_of_vertices();
        let mut distances = DistanceMap::with_capacity(number_of_vertices);
        let mut predecessors = PredecessorMap::with_capacity(number_of_vertices);

        for (index, vertex) in self.graph.vertices().iter().enumerate() {
            distances.insert(vertex.clone(), data.get_distance(index));
            let predecessor = data
                .get_predecessor(index)
                .map(|predecessor| self.graph.vertex(predecessor).clone());
            predecessors.insert(vertex.clone(), predecessor);
        }

        (distances, predecessors)
    }
}

impl<V> PathFinding<V> for ShortestPathEngine<'_, V>
where
    V: Clone + Eq + Hash,
{
    /// Stops as soon as `target` is settled.
    fn shortest_path(&self, source: &V, target: &V) -> Result<Option<Path<V>>, SearchError> {
        self.shortest_path_with_observer(source, target, &mut NoopObserver)
    }
}

/// Shortest distances and predecessors from `source` in `graph`.
pub fn compute<V>(
    graph: &WeightedGraph<V>,
    source: &V,
) -> Result<(DistanceMap<V>, PredecessorMap<V>), SearchError>
where
    V: Clone + Eq + Hash,
{
    ShortestPathEngine::new(graph).compute(source)
}

/// Relaxation loop. Settles vertices until the queue runs empty or `target`
/// is settled.
fn dijkstra<V>(
    graph: &WeightedGraph<V>,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    observer: &mut dyn SearchObserver<V>,
    source: usize,
    target: Option<usize>,
) -> SearchStatistics
where
    V: Clone + Eq + Hash,
{
    let mut statistics = SearchStatistics::default();

    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some((distance_tail, tail)) = queue.pop() {
        if expanded.expand(tail) {
            statistics.stale += 1;
            observer.on_stale(graph.vertex(tail), distance_tail);
            continue;
        }

        // Cannot trigger while the expanded check runs first: the entry with
        // the current distance always pops before older, larger ones.
        if distance_tail > data.get_distance(tail) {
            statistics.stale += 1;
            observer.on_stale(graph.vertex(tail), distance_tail);
            continue;
        }

        statistics.settled += 1;
        trace!(vertex = tail, distance = distance_tail, "settled");
        observer.on_settle(graph.vertex(tail), distance_tail);

        if target == Some(tail) {
            break;
        }

        for edge in graph.out_edges(tail) {
            let current_distance_head = data.get_distance(edge.head);
            let alternative_distance_head =
                distance_tail.saturating_add(Distance::from(edge.weight));
            if alternative_distance_head < current_distance_head {
                data.set_distance(edge.head, alternative_distance_head);
                data.set_predecessor(edge.head, tail);
                queue.insert(edge.head, alternative_distance_head);

                statistics.relaxed += 1;
                let previous =
                    (current_distance_head != UNREACHABLE).then_some(current_distance_head);
                observer.on_relax(
                    graph.vertex(tail),
                    graph.vertex(edge.head),
                    previous,
                    alternative_distance_head,
                );
            }
        }
    }

    statistics
}
