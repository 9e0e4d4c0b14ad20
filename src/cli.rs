use clap::{builder::PossibleValue, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Command-line surface: a required reference-sequence file, an
/// optional frame count, and an optional replacement algorithm.
#[derive(Parser, Debug)]
#[command(name = "memsim", author, version, about = "Demand-paged virtual memory address translator", long_about = None)]
pub struct Cli {
    /// Reference-sequence file of whitespace-separated 16-bit logical addresses.
    pub file: PathBuf,

    /// Number of physical frames available, in [1, 256]. Signed so that
    /// a negative value parses instead of being rejected by clap before
    /// it ever reaches the clamp below; any out-of-range value --
    /// negative or too large -- silently clamps to 256.
    #[arg(short = 'f', long = "frames", default_value_t = 256)]
    pub frames: i64,

    /// Page-replacement algorithm to use on a page-table miss.
    #[arg(short = 'p', long = "PRA", default_value_t = PageReplacementAlgorithm::Fifo)]
    pub pra: PageReplacementAlgorithm,
}

impl Cli {
    /// Frame count clamped into `[1, 256]`.
    pub fn frames(&self) -> usize {
        if self.frames < 1 || self.frames > 256 {
            256
        } else {
            self.frames as usize
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageReplacementAlgorithm {
    Fifo,
    Lru,
    Opt,
}

impl fmt::Display for PageReplacementAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PageReplacementAlgorithm::Fifo => "FIFO",
            PageReplacementAlgorithm::Lru => "LRU",
            PageReplacementAlgorithm::Opt => "OPT",
        };
        write!(f, "{}", s)
    }
}

// Boilerplate to accept only the strict upper-case algorithm names on
// the command line; an unrecognized `--PRA` value is rejected by clap
// itself rather than silently defaulting to OPT.
impl ValueEnum for PageReplacementAlgorithm {
    fn value_variants<'a>() -> &'a [Self] {
        static VARIANTS: [PageReplacementAlgorithm; 3] = [
            PageReplacementAlgorithm::Fifo,
            PageReplacementAlgorithm::Lru,
            PageReplacementAlgorithm::Opt,
        ];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            PageReplacementAlgorithm::Fifo => PossibleValue::new("FIFO"),
            PageReplacementAlgorithm::Lru => PossibleValue::new("LRU"),
            PageReplacementAlgorithm::Opt => PossibleValue::new("OPT"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_clamp_to_256() {
        let mut cli = Cli {
            file: PathBuf::from("addresses.txt"),
            frames: 0,
            pra: PageReplacementAlgorithm::Fifo,
        };
        assert_eq!(cli.frames(), 256);
        cli.frames = 9000;
        assert_eq!(cli.frames(), 256);
        cli.frames = 4;
        assert_eq!(cli.frames(), 4);
    }

    #[test]
    fn negative_frames_clamp_to_256() {
        let mut cli = Cli {
            file: PathBuf::from("addresses.txt"),
            frames: -5,
            pra: PageReplacementAlgorithm::Fifo,
        };
        assert_eq!(cli.frames(), 256);
        cli.frames = -1;
        assert_eq!(cli.frames(), 256);
    }
}
