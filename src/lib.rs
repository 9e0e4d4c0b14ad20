pub mod address;
pub mod backing_store;
pub mod cli;
pub mod error;
pub mod output;
pub mod page_table;
pub mod policy;
pub mod stats;
pub mod tlb;
pub mod trace;
pub mod translator;

use backing_store::FileBackingStore;
use cli::{Cli, PageReplacementAlgorithm};
use error::Result;
use policy::ReplacementPolicy;
use stats::Stats;
use std::io::Write;
use std::path::Path;
use tlb::TLB_CAPACITY;
use translator::Translator;

/// The backing store's default filename, resolved relative to the
/// current directory when no other path is given.
pub const BACKING_STORE_FILE: &str = "BACKING_STORE.bin";

/// Runs a full simulation against `cli`'s configuration, writing one
/// formatted line per reference followed by the terminal summary to
/// `out`, and returning the final statistics. Reads the backing store
/// from `BACKING_STORE_FILE` in the current directory.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<Stats> {
    run_with_store(cli, BACKING_STORE_FILE, out)
}

/// Same as [`run`], but reads the backing store from `store_path`
/// instead of the default filename -- lets callers (tests, chiefly)
/// point at a store without mutating the process's current directory.
pub fn run_with_store(cli: &Cli, store_path: impl AsRef<Path>, out: &mut impl Write) -> Result<Stats> {
    let addresses = trace::read_addresses(&cli.file)?;
    let page_sequence = trace::page_numbers(&addresses);

    let policy = match cli.pra {
        PageReplacementAlgorithm::Fifo => ReplacementPolicy::fifo(),
        PageReplacementAlgorithm::Lru => ReplacementPolicy::lru(),
        PageReplacementAlgorithm::Opt => ReplacementPolicy::opt(&page_sequence),
    };

    let source = FileBackingStore::open(store_path)?;
    let mut translator = Translator::new(TLB_CAPACITY, cli.frames(), policy, source);

    for addr in addresses {
        let record = translator.translate(addr)?;
        writeln!(out, "{}", output::format_record(&record)).expect("writing to stdout failed");
    }

    let stats = translator.into_stats();
    writeln!(out, "{}", stats).expect("writing to stdout failed");
    Ok(stats)
}
