use std::collections::{HashMap, VecDeque};

/// Logical time, one tick per translation.
pub type Time = usize;

/// FIFO eviction over resident-page admission order. Re-admission after
/// eviction counts as a fresh installation.
#[derive(Debug, Default)]
pub struct FifoPolicy {
    order: VecDeque<u8>,
}

impl FifoPolicy {
    fn on_install(&mut self, page: u8) {
        self.order.push_back(page);
    }

    fn select_victim(&mut self) -> u8 {
        self.order
            .pop_front()
            .expect("select_victim called on an empty resident set")
    }
}

/// LRU eviction over a recency-ordered list: `on_hit` and `on_install`
/// both move the page to the most-recently-used end.
#[derive(Debug, Default)]
pub struct LruPolicy {
    order: VecDeque<u8>,
}

impl LruPolicy {
    fn touch(&mut self, page: u8) {
        if let Some(pos) = self.order.iter().position(|&p| p == page) {
            self.order.remove(pos);
        }
        self.order.push_back(page);
    }

    fn select_victim(&mut self) -> u8 {
        self.order
            .pop_front()
            .expect("select_victim called on an empty resident set")
    }
}

/// Bélády's optimal policy: evicts the resident page with the farthest
/// next reference, choosing pages that are never referenced again
/// first. Requires the complete future reference stream at construction.
///
/// The next-use index for `(page, t)` is a pure function of the input
/// trace, so rather than keep a mutable "next use" cache updated on
/// every `on_hit`/`on_install` (as the reference design sketches it),
/// each resident page's occurrence positions are precomputed once and
/// binary-searched at selection time. Observably identical, and avoids
/// a class of staleness bugs a running cache would invite.
#[derive(Debug, Default)]
pub struct OptPolicy {
    occurrences: HashMap<u8, Vec<Time>>,
}

impl OptPolicy {
    fn new(future_pages: &[u8]) -> Self {
        let mut occurrences: HashMap<u8, Vec<Time>> = HashMap::new();
        for (t, &page) in future_pages.iter().enumerate() {
            occurrences.entry(page).or_default().push(t);
        }
        Self { occurrences }
    }

    /// Index of the first occurrence of `page` strictly after `t`, or
    /// `None` if `page` is never referenced again.
    fn next_use_after(&self, page: u8, t: Time) -> Option<Time> {
        let positions = self.occurrences.get(&page)?;
        let idx = positions.partition_point(|&p| p <= t);
        positions.get(idx).copied()
    }

    fn distance_key(&self, page: u8, t: Time) -> u64 {
        match self.next_use_after(page, t) {
            Some(idx) => idx as u64,
            None => u64::MAX,
        }
    }

    fn select_victim(&mut self, candidates: &[u8], t: Time) -> u8 {
        let mut sorted: Vec<u8> = candidates.to_vec();
        sorted.sort_unstable();
        let mut best = sorted[0];
        let mut best_key = self.distance_key(best, t);
        for &page in &sorted[1..] {
            let key = self.distance_key(page, t);
            if key > best_key {
                best_key = key;
                best = page;
            }
        }
        best
    }
}

/// The three pluggable page-replacement algorithms, modeled as a tagged
/// sum sharing one small interface.
#[derive(Debug)]
pub enum ReplacementPolicy {
    Fifo(FifoPolicy),
    Lru(LruPolicy),
    Opt(OptPolicy),
}

impl ReplacementPolicy {
    pub fn fifo() -> Self {
        Self::Fifo(FifoPolicy::default())
    }

    pub fn lru() -> Self {
        Self::Lru(LruPolicy::default())
    }

    /// `future_pages` is the complete sequence of page numbers referenced
    /// over the whole trace, in order.
    pub fn opt(future_pages: &[u8]) -> Self {
        Self::Opt(OptPolicy::new(future_pages))
    }

    /// A TLB hit never reaches this far; a page-table hit does. No-op
    /// for FIFO and OPT.
    pub fn on_hit(&mut self, page: u8, _t: Time) {
        if let Self::Lru(p) = self {
            p.touch(page);
        }
    }

    pub fn on_install(&mut self, page: u8, _t: Time) {
        match self {
            Self::Fifo(p) => p.on_install(page),
            Self::Lru(p) => p.touch(page),
            Self::Opt(_) => {}
        }
    }

    /// Only called when the resident set is full and a new page must be
    /// admitted. `candidates` is the current resident-page set.
    pub fn select_victim(&mut self, candidates: &[u8], t: Time) -> u8 {
        match self {
            Self::Fifo(p) => p.select_victim(),
            Self::Lru(p) => p.select_victim(),
            Self::Opt(p) => p.select_victim(candidates, t),
        }
    }
}
