use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::entry::FileEntry;

/// Bounded set holding the `capacity` largest entries offered so far.
///
/// Backed by a min-heap so the smallest candidate can be evicted in
/// O(log K) when a larger one arrives. Memory stays O(K) no matter how many
/// entries are offered.
#[derive(Debug, Clone)]
pub struct TopKSet {
    capacity: usize,
    heap: BinaryHeap<Reverse<FileEntry>>,
}

impl TopKSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest retained entry.
    pub fn min(&self) -> Option<&FileEntry> {
        self.heap.peek().map(|Reverse(e)| e)
    }

    /// Offer an entry. Returns `true` if it was retained.
    ///
    /// Once full, an entry only gets in if it is strictly larger than the
    /// current minimum; ties keep the entry that arrived first.
    pub fn offer(&mut self, entry: FileEntry) -> bool {
        if self.capacity == 0 {
            return false;
        }

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(entry));
            return true;
        }

        match self.heap.peek_mut() {
            Some(mut min) if entry.size > min.0.size => {
                *min = Reverse(entry);
                true
            }
            _ => false,
        }
    }

    /// Retained entries, largest first. Equal sizes are ordered by path.
    pub fn into_sorted_vec(self) -> Vec<FileEntry> {
        let mut entries: Vec<FileEntry> = self.heap.into_iter().map(|Reverse(e)| e).collect();
        entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        entries
    }

    /// Snapshot of the retained entries, largest first.
    pub fn to_sorted_vec(&self) -> Vec<FileEntry> {
        self.clone().into_sorted_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(size: u64, name: &str) -> FileEntry {
        FileEntry::new(size, PathBuf::from(name), None)
    }

    #[test]
    fn test_fills_up_to_capacity() {
        let mut set = TopKSet::new(3);
        assert!(set.offer(entry(1, "a")));
        assert!(set.offer(entry(2, "b")));
        assert_eq!(set.len(), 2);
        assert!(set.offer(entry(0, "c")));
        assert_eq!(set.len(), 3);
        assert_eq!(set.min().unwrap().size, 0);
    }

    #[test]
    fn test_evicts_smallest_when_full() {
        let mut set = TopKSet::new(2);
        set.offer(entry(10, "a"));
        set.offer(entry(20, "b"));

        assert!(set.offer(entry(15, "c")));
        assert!(!set.offer(entry(5, "d")));

        let sizes: Vec<u64> = set.into_sorted_vec().iter().map(|e| e.size).collect();
        assert_eq!(sizes, vec![20, 15]);
    }

    #[test]
    fn test_equal_to_minimum_is_discarded() {
        let mut set = TopKSet::new(1);
        set.offer(entry(10, "first"));
        assert!(!set.offer(entry(10, "second")));

        let result = set.into_sorted_vec();
        assert_eq!(result[0].path, PathBuf::from("first"));
    }

    #[test]
    fn test_keeps_k_largest_of_stream() {
        let mut set = TopKSet::new(5);
        // Pseudo-shuffled sizes 0..1000
        for i in 0..1000u64 {
            let size = (i * 7919) % 1000;
            set.offer(entry(size, &format!("f{}", i)));
        }

        let sizes: Vec<u64> = set.into_sorted_vec().iter().map(|e| e.size).collect();
        assert_eq!(sizes, vec![999, 998, 997, 996, 995]);
    }

    #[test]
    fn test_sorted_output_orders_ties_by_path() {
        let mut set = TopKSet::new(3);
        set.offer(entry(5, "b"));
        set.offer(entry(5, "a"));
        set.offer(entry(9, "c"));

        let paths: Vec<PathBuf> = set.into_sorted_vec().into_iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("c"), PathBuf::from("a"), PathBuf::from("b")]
        );
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut set = TopKSet::new(0);
        assert!(!set.offer(entry(1, "a")));
        assert!(set.is_empty());
    }

    #[test]
    fn test_snapshot_leaves_set_intact() {
        let mut set = TopKSet::new(2);
        set.offer(entry(1, "a"));
        let snapshot = set.to_sorted_vec();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(set.len(), 1);
    }
}
