//! Heap-backed ranking of scored candidates.
//!
//! [`MaxHeap`] is a plain array-backed binary max-heap; [`RankingHeap`] puts
//! a job-ranking face on it: push scores as they are computed, then drain
//! the full ranking in one shot.

use crate::types::ScoredCandidate;
use std::cmp::Ordering;

/// Array-backed binary max-heap.
///
/// `push` sifts the new element up, `pop` swaps the root with the last
/// element and sifts it down; both are O(log n).
#[derive(Debug, Clone)]
pub struct MaxHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Insert an element and restore the heap property.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the maximum element, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let max = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        max
    }

    /// Maximum element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.data[i] > self.data[parent] {
                self.data.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.data.len();
        loop {
            let mut largest = i;
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            if left < n && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < n && self.data[right] > self.data[largest] {
                largest = right;
            }
            if largest == i {
                break;
            }
            self.data.swap(i, largest);
            i = largest;
        }
    }
}

/// Heap entry ordering: score descending, ties broken by ascending id.
///
/// The id tie-break makes drain order fully deterministic regardless of
/// push order, which the tests rely on.
#[derive(Debug, Clone)]
struct RankedEntry(ScoredCandidate);

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .score
            .total_cmp(&other.0.score)
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for RankedEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RankedEntry {}

/// Accumulates scored candidates and yields them highest-score first.
///
/// Request-scoped: construct a fresh `RankingHeap` per ranking call and
/// never share one across concurrent rankings.
#[derive(Debug, Clone, Default)]
pub struct RankingHeap {
    heap: MaxHeap<RankedEntry>,
}

impl RankingHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one scored candidate to the working set.
    pub fn push(&mut self, candidate: ScoredCandidate) {
        self.heap.push(RankedEntry(candidate));
    }

    /// Remove and return all held candidates in descending-score order,
    /// leaving the heap empty.
    ///
    /// A destructive, one-shot read: the returned sequence is the final
    /// ranking, rank 1 first.
    pub fn drain_ranked(&mut self) -> Vec<ScoredCandidate> {
        let mut ranked = Vec::with_capacity(self.heap.len());
        while let Some(RankedEntry(candidate)) = self.heap.pop() {
            ranked.push(candidate);
        }
        ranked
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
