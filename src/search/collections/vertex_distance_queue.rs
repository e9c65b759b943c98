use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::Distance;

/// A trait for a priority queue that manages vertices and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the vertex with the smallest distance (such as Dijkstra's algorithm).
///
/// The implementing structs might or might not use a decrease key operation.
pub trait VertexDistanceQueue {
    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: usize, distance: Distance);

    /// Removes and returns the entry with the smallest distance from the
    /// priority queue or none if the queue is empty.
    fn pop(&mut self) -> Option<(Distance, usize)>;
}

/// A priority queue implementation using a Binary Heap without decrease key.
///
/// Superseded entries stay in the heap until they are popped. Entries with
/// equal distance come out smallest vertex index first, so the pop order only
/// depends on the sequence of inserts.
#[derive(Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, usize)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn insert(&mut self, vertex: usize, distance: Distance) {
        self.heap.push(Reverse((distance, vertex)));
    }

    fn pop(&mut self) -> Option<(Distance, usize)> {
        let Reverse(entry) = self.heap.pop()?;
        Some(entry)
    }
}
