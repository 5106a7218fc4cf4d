use ordered_float::{FloatIsNan, NotNan};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

// Min-heap on (key, insertion sequence)
struct HeapEntry<T> {
    key: NotNan<f64>,
    seq: u64,
    value: T
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &HeapEntry<T>) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &HeapEntry<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &HeapEntry<T>) -> Ordering {
        other.key.cmp(&self.key).then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Binary heap popping the smallest float key first; equal keys come out in
/// insertion order.
pub struct FloatBinaryHeap<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    next_seq: u64,
}

impl<T> Default for FloatBinaryHeap<T> {
    fn default () -> Self {
        FloatBinaryHeap::new()
    }
}

impl<T> FloatBinaryHeap<T> {
    pub fn new () -> FloatBinaryHeap<T> {
        FloatBinaryHeap {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity (capacity: usize) -> FloatBinaryHeap<T> {
        FloatBinaryHeap {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn push (&mut self, key: f64, value: T) -> Result<(), FloatIsNan> {
        let key = NotNan::new(key)?;
        self.heap.push(HeapEntry { key, seq: self.next_seq, value });
        self.next_seq += 1;
        Ok(())
    }

    pub fn peek (&self) -> Option<(f64, &T)> {
        self.heap.peek().map(|e| (e.key.into_inner(), &e.value))
    }

    pub fn pop (&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.key.into_inner(), e.value))
    }

    pub fn len (&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty (&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_key_first() {
        let mut heap = FloatBinaryHeap::new();
        for (k, v) in &[(3., 'c'), (1., 'a'), (2., 'b')] {
            heap.push(*k, *v).unwrap();
        }
        assert_eq!(heap.peek(), Some((1., &'a')));
        let order: Vec<char> = std::iter::from_fn(|| heap.pop().map(|(_, v)| v)).collect();
        assert_eq!(order, vec!['a', 'b', 'c']);
        assert!(heap.is_empty());
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut heap = FloatBinaryHeap::with_capacity(4);
        for v in 0..4 {
            heap.push(1.5, v).unwrap();
        }
        let order: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|(_, v)| v)).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn nan_key_is_rejected() {
        let mut heap = FloatBinaryHeap::new();
        assert!(heap.push(std::f64::NAN, ()).is_err());
        assert_eq!(heap.len(), 0);
    }
}
