use std::path::PathBuf;

/// Crate-wide error type for every fallible boundary of the simulator:
/// opening the reference file and the backing store, tokenizing the
/// trace, and servicing a page fault.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: line {line}: expected an integer address, found {token:?}")]
    MalformedToken {
        path: PathBuf,
        line: usize,
        token: String,
    },

    #[error("{path}: line {line}: address {value} is out of range for a 16-bit address space")]
    AddressOutOfRange {
        path: PathBuf,
        line: usize,
        value: u32,
    },

    #[error("backing store read for page {page} returned {got} of {expected} bytes")]
    BackingStoreShort {
        page: u8,
        got: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
