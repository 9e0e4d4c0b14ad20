use std::fmt;

/// Running translation counters.
///
/// `page_table_lookups` is incremented once per TLB miss, which is the
/// denominator used for the page-fault rate -- it is *not* incremented
/// on every translation, unlike some reference implementations that
/// count every call to the page-table lookup routine even when a TLB
/// hit would have short-circuited it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub translations: u64,
    pub page_faults: u64,
    pub page_table_lookups: u64,
    pub tlb_hits: u64,
    pub tlb_misses: u64,
}

/// Rounds `numerator / denominator` to three decimal places,
/// half-away-from-zero, printing `0.000` when `denominator` is zero.
fn rate(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        let value = numerator as f64 / denominator as f64;
        (value * 1000.0).round() / 1000.0
    }
}

impl Stats {
    pub fn page_fault_rate(&self) -> f64 {
        rate(self.page_faults, self.page_table_lookups)
    }

    pub fn tlb_hit_rate(&self) -> f64 {
        rate(self.tlb_hits, self.translations)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Translated Addresses = {}", self.translations)?;
        writeln!(f, "Page Faults = {}", self.page_faults)?;
        writeln!(f, "Page Fault Rate = {:.3}", self.page_fault_rate())?;
        writeln!(f, "TLB Hits = {}", self.tlb_hits)?;
        writeln!(f, "TLB Misses = {}", self.tlb_misses)?;
        write!(f, "TLB Hit Rate = {:.3}", self.tlb_hit_rate())
    }
}
