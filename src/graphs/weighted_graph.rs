use std::hash::Hash;

use ahash::{HashMap, HashMapExt};

use super::{
    edge::{TaillessEdge, WeightedEdge},
    Weight,
};
use crate::error::GraphError;

/// Undirected graph with non-negative integer weights, stored as adjacency
/// lists.
///
/// Every vertex gets an index in insertion order. The index never changes
/// and is what the search uses internally, which keeps searches on the same
/// graph reproducible.
///
/// Self-loops and parallel edges are stored as given. A self-loop shows up
/// twice in the adjacency list of its vertex.
#[derive(Clone, Debug)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    indices: HashMap<V, usize>,
    out_edges: Vec<Vec<TaillessEdge>>,
    number_of_edges: usize,
}

impl<V> Default for WeightedGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> WeightedGraph<V>
where
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        WeightedGraph {
            vertices: Vec::new(),
            indices: HashMap::new(),
            out_edges: Vec::new(),
            number_of_edges: 0,
        }
    }

    pub fn from_edges(edges: &[WeightedEdge<V>]) -> Self {
        let mut graph = WeightedGraph::new();
        edges.iter().for_each(|edge| {
            graph.insert_edge(edge.tail.clone(), edge.head.clone(), edge.weight);
        });
        graph
    }

    /// Inserts `vertex` without any edges. Does nothing if it is already known.
    pub fn add_vertex(&mut self, vertex: V) {
        self.index_or_insert(vertex);
    }

    /// Adds the undirected edge `tail`-`head`, creating missing endpoints.
    ///
    /// Negative weights break the greedy settling order of Dijkstra's
    /// algorithm and are rejected before the graph is touched.
    pub fn add_edge(&mut self, tail: V, head: V, weight: i64) -> Result<(), GraphError> {
        let weight =
            Weight::try_from(weight).map_err(|_| GraphError::NegativeWeightEdge { weight })?;
        self.insert_edge(tail, head, weight);
        Ok(())
    }

    pub(crate) fn insert_edge(&mut self, tail: V, head: V, weight: Weight) {
        let tail = self.index_or_insert(tail);
        let head = self.index_or_insert(head);

        self.out_edges[tail].push(TaillessEdge::new(head, weight));
        self.out_edges[head].push(TaillessEdge::new(tail, weight));
        self.number_of_edges += 1;
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Neighbors of `vertex` with the weight of the connecting edge. Empty if
    /// `vertex` is unknown.
    pub fn neighbors(&self, vertex: &V) -> Neighbors<'_, V> {
        let edges: &[TaillessEdge] = match self.indices.get(vertex) {
            Some(&index) => &self.out_edges[index],
            None => &[],
        };

        Neighbors {
            vertices: &self.vertices,
            edges: edges.iter(),
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.indices.contains_key(vertex)
    }

    pub fn number_of_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of `add_edge` calls, i.e. undirected edges including duplicates.
    pub fn number_of_edges(&self) -> usize {
        self.number_of_edges
    }

    /// Smallest weight among the edges joining `tail` and `head`.
    pub fn edge_weight(&self, tail: &V, head: &V) -> Option<Weight> {
        let tail = self.index_of(tail)?;
        let head = self.index_of(head)?;

        self.out_edges[tail]
            .iter()
            .filter(|edge| edge.head == head)
            .map(|edge| edge.weight)
            .min()
    }

    pub(crate) fn index_of(&self, vertex: &V) -> Option<usize> {
        self.indices.get(vertex).copied()
    }

    pub(crate) fn vertex(&self, index: usize) -> &V {
        &self.vertices[index]
    }

    pub(crate) fn out_edges(&self, index: usize) -> &[TaillessEdge] {
        &self.out_edges[index]
    }

    fn index_or_insert(&mut self, vertex: V) -> usize {
        if let Some(&index) = self.indices.get(&vertex) {
            return index;
        }

        let index = self.vertices.len();
        self.indices.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        self.out_edges.push(Vec::new());
        index
    }
}

/// Iterator over the neighbors of a vertex, see [`WeightedGraph::neighbors`].
pub struct Neighbors<'a, V> {
    vertices: &'a [V],
    edges: std::slice::Iter<'a, TaillessEdge>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = (&'a V, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.next()?;
        Some((&self.vertices[edge.head], edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}
