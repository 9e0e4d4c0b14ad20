use crate::address::{signed_byte, LogicalAddress};
use crate::backing_store::PageSource;
use crate::error::Result;
use crate::page_table::PageTable;
use crate::policy::ReplacementPolicy;
use crate::stats::Stats;
use crate::tlb::Tlb;
use std::rc::Rc;

/// The outcome of translating a single logical address: the value read,
/// the frame it lives in, and that frame's full contents.
#[derive(Debug, Clone)]
pub struct Record {
    pub addr: u16,
    pub value: i8,
    pub frame_number: usize,
    pub frame_bytes: Rc<[u8]>,
}

/// Orchestrates one translation: TLB lookup, page-table lookup, fault
/// servicing, frame allocation, and statistics.
///
/// `next_frame_number` is a monotonically increasing counter private to
/// the translator; frame numbers are never reused, even though only
/// `frames` of them are ever resident at once.
pub struct Translator<S: PageSource> {
    tlb: Tlb,
    page_table: PageTable,
    source: S,
    next_frame_number: usize,
    stats: Stats,
}

impl<S: PageSource> Translator<S> {
    pub fn new(tlb_capacity: usize, frames: usize, policy: ReplacementPolicy, source: S) -> Self {
        Self {
            tlb: Tlb::new(tlb_capacity),
            page_table: PageTable::new(frames, policy),
            source,
            next_frame_number: 0,
            stats: Stats::default(),
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_stats(self) -> Stats {
        self.stats
    }

    pub fn translate(&mut self, addr: u16) -> Result<Record> {
        let logical = LogicalAddress::from(addr);
        let t = self.stats.translations as usize;
        self.stats.translations += 1;

        let (frame_number, bytes) = match self.tlb.lookup(logical.page) {
            Some(entry) => {
                self.stats.tlb_hits += 1;
                (entry.frame_number, entry.bytes.clone())
            }
            None => {
                self.stats.tlb_misses += 1;
                self.stats.page_table_lookups += 1;
                self.service_tlb_miss(logical.page, t)?
            }
        };

        let value = signed_byte(bytes[logical.offset as usize]);
        Ok(Record {
            addr,
            value,
            frame_number,
            frame_bytes: bytes,
        })
    }

    fn service_tlb_miss(&mut self, page: u8, t: usize) -> Result<(usize, Rc<[u8]>)> {
        if let Some(entry) = self.page_table.lookup(page) {
            let result = (entry.frame_number, entry.bytes.clone());
            self.page_table.record_hit(page, t);
            self.tlb.insert(page, result.0, result.1.clone());
            return Ok(result);
        }

        self.stats.page_faults += 1;
        log::debug!("page fault on page {page} at t={t}");

        let bytes = self.source.read_page(page)?;
        let frame_number = self.next_frame_number;
        self.next_frame_number += 1;

        if let Some(evicted) = self.page_table.install(page, frame_number, bytes.clone(), t) {
            log::debug!("evicting page {evicted} to admit page {page}");
            self.tlb.invalidate(evicted);
        }
        self.tlb.insert(page, frame_number, bytes.clone());

        Ok((frame_number, bytes))
    }
}
