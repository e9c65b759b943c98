/// Set of settled vertices. Vertices are only ever added during a search.
pub trait VertexExpandedData {
    /// Marks `vertex` as expanded and returns whether it already was.
    fn expand(&mut self, vertex: usize) -> bool;
}

pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(number_of_vertices: usize) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; number_of_vertices],
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: usize) -> bool {
        let is_expanded = self.expanded[vertex];
        self.expanded[vertex] = true;
        is_expanded
    }
}

#[cfg(test)]
mod tests {
    use super::{VertexExpandedData, VertexExpandedDataVec};

    #[test]
    fn expand_reports_previous_state() {
        let mut expanded = VertexExpandedDataVec::new(3);

        assert!(!expanded.expand(1));
        assert!(expanded.expand(1));
        assert!(!expanded.expand(2));
        assert!(expanded.expand(2));
    }
}
