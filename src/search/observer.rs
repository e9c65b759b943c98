use serde::{Deserialize, Serialize};

use crate::graphs::Distance;

/// Hooks into the relaxation loop of [`super::dijkstra`]. All methods default
/// to doing nothing.
pub trait SearchObserver<V> {
    /// `vertex` was popped for the first time; `distance` is final.
    fn on_settle(&mut self, _vertex: &V, _distance: Distance) {}

    /// A popped frontier entry was discarded, either because `vertex` was
    /// settled before or because a shorter distance was found since the entry
    /// was pushed.
    fn on_stale(&mut self, _vertex: &V, _distance: Distance) {}

    /// The tentative distance of `head` improved to `distance` via `tail`.
    /// `previous` is `None` if `head` had no tentative distance yet.
    fn on_relax(
        &mut self,
        _tail: &V,
        _head: &V,
        _previous: Option<Distance>,
        _distance: Distance,
    ) {
    }
}

pub struct NoopObserver;

impl<V> SearchObserver<V> for NoopObserver {}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchStep<V> {
    Settled {
        vertex: V,
        distance: Distance,
    },
    Stale {
        vertex: V,
        distance: Distance,
    },
    Relaxed {
        tail: V,
        head: V,
        previous: Option<Distance>,
        distance: Distance,
    },
}

/// Records every event of a search in order.
pub struct StepRecorder<V> {
    pub steps: Vec<SearchStep<V>>,
}

impl<V> Default for StepRecorder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> StepRecorder<V> {
    pub fn new() -> Self {
        StepRecorder { steps: Vec::new() }
    }

    /// Vertices in the order they were settled.
    pub fn settle_order(&self) -> impl Iterator<Item = &V> {
        self.steps.iter().filter_map(|step| match step {
            SearchStep::Settled { vertex, .. } => Some(vertex),
            _ => None,
        })
    }
}

impl<V: Clone> SearchObserver<V> for StepRecorder<V> {
    fn on_settle(&mut self, vertex: &V, distance: Distance) {
        self.steps.push(SearchStep::Settled {
            vertex: vertex.clone(),
            distance,
        });
    }

    fn on_stale(&mut self, vertex: &V, distance: Distance) {
        self.steps.push(SearchStep::Stale {
            vertex: vertex.clone(),
            distance,
        });
    }

    fn on_relax(&mut self, tail: &V, head: &V, previous: Option<Distance>, distance: Distance) {
        self.steps.push(SearchStep::Relaxed {
            tail: tail.clone(),
            head: head.clone(),
            previous,
            distance,
        });
    }
}
