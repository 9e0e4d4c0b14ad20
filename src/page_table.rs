use crate::policy::{ReplacementPolicy, Time};
use std::collections::HashMap;
use std::rc::Rc;

/// A single resident entry: the frame a page currently occupies and the
/// bytes of that frame.
#[derive(Debug, Clone)]
pub struct ResidentEntry {
    pub frame_number: usize,
    pub bytes: Rc<[u8]>,
}

/// The resident set: currently-paged-in pages, indexed by page number,
/// with eviction delegated to a `ReplacementPolicy`.
pub struct PageTable {
    capacity: usize,
    entries: HashMap<u8, ResidentEntry>,
    policy: ReplacementPolicy,
}

impl PageTable {
    pub fn new(capacity: usize, policy: ReplacementPolicy) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            policy,
        }
    }

    pub fn lookup(&self, page: u8) -> Option<&ResidentEntry> {
        self.entries.get(&page)
    }

    /// Informs the policy that `page` was referenced via a page-table
    /// hit. Never called on a TLB hit.
    pub fn record_hit(&mut self, page: u8, t: Time) {
        self.policy.on_hit(page, t);
    }

    /// Admits `page` at `frame_number` with the given bytes. If the
    /// resident set is already at capacity, selects and removes a
    /// victim first, returning its page number so the caller can
    /// invalidate any TLB entry pointing at it.
    pub fn install(
        &mut self,
        page: u8,
        frame_number: usize,
        bytes: Rc<[u8]>,
        t: Time,
    ) -> Option<u8> {
        let evicted = if self.entries.len() >= self.capacity {
            let candidates: Vec<u8> = self.entries.keys().copied().collect();
            let victim = self.policy.select_victim(&candidates, t);
            self.entries.remove(&victim);
            Some(victim)
        } else {
            None
        };

        self.entries.insert(page, ResidentEntry { frame_number, bytes });
        self.policy.on_install(page, t);
        evicted
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
        Rc::from(vec![0u8; 256].into_boxed_slice())
    }

    #[test]
    fn installs_without_eviction_under_capacity() {
        let mut table = PageTable::new(2, ReplacementPolicy::fifo());
        assert_eq!(table.install(1, 0, bytes(), 0), None);
        assert_eq!(table.install(2, 1, bytes(), 1), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn evicts_once_at_capacity() {
        let mut table = PageTable::new(1, ReplacementPolicy::fifo());
        assert_eq!(table.install(1, 0, bytes(), 0), None);
        assert_eq!(table.install(2, 1, bytes(), 1), Some(1));
        assert!(table.lookup(1).is_none());
        assert!(table.lookup(2).is_some());
    }

    #[test]
    fn lookup_returns_installed_entry() {
        let mut table = PageTable::new(4, ReplacementPolicy::fifo());
        table.install(7, 3, bytes(), 0);
        let entry = table.lookup(7).unwrap();
        assert_eq!(entry.frame_number, 3);
    }
}
