use crate::{
    graphs::{Distance, UNREACHABLE},
    search::path::Path,
};

/// Trait for handling data access in Dijkstra's algorithm. Vertices are the
/// indices a [`crate::graphs::WeightedGraph`] assigned to them.
pub trait DijkstraData {
    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: usize) -> Option<usize>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: usize, predecessor: usize);

    /// Retrieves the tentative distance to a given vertex, [`UNREACHABLE`]
    /// if none is known.
    fn get_distance(&self, vertex: usize) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: usize, distance: Distance);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: usize) -> Option<Path<usize>> {
        let distance = self.get_distance(target);
        if distance == UNREACHABLE {
            return None;
        }

        let mut vertices = vec![target];
        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Distances and predecessors stored in one slot per graph vertex.
pub struct DijkstraDataVec {
    pub predecessors: Vec<Option<usize>>,
    pub distances: Vec<Distance>,
}

impl DijkstraDataVec {
    pub fn new(number_of_vertices: usize) -> Self {
        DijkstraDataVec {
            predecessors: vec![None; number_of_vertices],
            distances: vec![UNREACHABLE; number_of_vertices],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn get_predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors[vertex]
    }

    fn set_predecessor(&mut self, vertex: usize, predecessor: usize) {
        self.predecessors[vertex] = Some(predecessor);
    }

    fn get_distance(&self, vertex: usize) -> Distance {
        self.distances[vertex]
    }

    fn set_distance(&mut self, vertex: usize, distance: Distance) {
        self.distances[vertex] = distance
    }
}
