use linked_hash_set::LinkedHashSet;
use std::collections::HashMap;
use std::rc::Rc;

/// Default TLB capacity.
pub const TLB_CAPACITY: usize = 16;

#[derive(Debug, Clone)]
pub struct TlbEntry {
    pub frame_number: usize,
    pub bytes: Rc<[u8]>,
}

/// Fixed-capacity, FIFO-evicted cache of recent page-to-frame mappings.
/// Eviction order is independent of whatever replacement policy the
/// page table uses underneath: admission order is tracked with a
/// `linked_hash_set::LinkedHashSet`, paired with a map for the cached
/// frame/byte payload.
pub struct Tlb {
    capacity: usize,
    order: LinkedHashSet<u8>,
    entries: HashMap<u8, TlbEntry>,
}

impl Tlb {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: LinkedHashSet::new(),
            entries: HashMap::new(),
        }
    }

    /// A hit does not reorder the FIFO queue.
    pub fn lookup(&self, page: u8) -> Option<&TlbEntry> {
        self.entries.get(&page)
    }

    /// Refreshes `page` to the tail if already present, otherwise
    /// appends it; evicts the head once capacity is exceeded.
    pub fn insert(&mut self, page: u8, frame_number: usize, bytes: Rc<[u8]>) {
        if self.order.contains(&page) {
            self.order.remove(&page);
        }
        self.order.insert(page);
        self.entries.insert(page, TlbEntry { frame_number, bytes });

        if self.order.len() > self.capacity {
            if let Some(victim) = self.order.pop_front() {
                self.entries.remove(&victim);
            }
        }
    }

    /// Removes `page`'s entry if present; called when the page table
    /// evicts the corresponding resident page.
    pub fn invalidate(&mut self, page: u8) {
        self.order.remove(&page);
        self.entries.remove(&page);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes() -> Rc<[u8]> {
        Rc::from(vec![0u8; 4].into_boxed_slice())
    }

    #[test]
    fn evicts_head_over_capacity() {
        let mut tlb = Tlb::new(2);
        tlb.insert(1, 0, bytes());
        tlb.insert(2, 1, bytes());
        tlb.insert(3, 2, bytes());
        assert!(tlb.lookup(1).is_none());
        assert!(tlb.lookup(2).is_some());
        assert!(tlb.lookup(3).is_some());
    }

    #[test]
    fn reinsertion_refreshes_without_reordering_lookup() {
        let mut tlb = Tlb::new(2);
        tlb.insert(1, 0, bytes());
        tlb.insert(2, 1, bytes());
        // refresh 1 -> order becomes [2, 1]
        tlb.insert(1, 0, bytes());
        tlb.insert(3, 2, bytes());
        // 2 was the head after refresh, so it's evicted, not 1
        assert!(tlb.lookup(2).is_none());
        assert!(tlb.lookup(1).is_some());
        assert!(tlb.lookup(3).is_some());
    }

    #[test]
    fn invalidate_removes_entry() {
        let mut tlb = Tlb::new(4);
        tlb.insert(1, 0, bytes());
        tlb.invalidate(1);
        assert!(tlb.lookup(1).is_none());
        assert_eq!(tlb.len(), 0);
    }
}
