use super::Weight;

/// An undirected edge between two vertex values.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WeightedEdge<V> {
    pub tail: V,
    pub head: V,
    pub weight: Weight,
}

impl<V> WeightedEdge<V> {
    pub fn new(tail: V, head: V, weight: Weight) -> WeightedEdge<V> {
        WeightedEdge { tail, head, weight }
    }
}

/// Adjacency list entry. `head` is the index the graph assigned to the
/// neighbor when it was first inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaillessEdge {
    pub head: usize,
    pub weight: Weight,
}

impl TaillessEdge {
    pub fn new(head: usize, weight: Weight) -> TaillessEdge {
        TaillessEdge { head, weight }
    }
}
