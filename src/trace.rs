use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a reference-sequence file into the full list of logical
/// addresses it names. Whitespace-separated; trailing newlines and
/// empty tokens are ignored; a non-integer or out-of-range token is a
/// fatal `MalformedToken`/`AddressOutOfRange` error.
///
/// The whole trace is read up front (not streamed) because the OPT
/// replacement policy needs the complete future reference sequence
/// before the first translation.
pub fn read_addresses(path: impl AsRef<Path>) -> Result<Vec<u16>> {
    let path = path.as_ref().to_path_buf();
    let file = File::open(&path).map_err(|source| Error::FileNotFound {
        path: path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut addresses = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| Error::FileNotFound {
            path: path.clone(),
            source,
        })?;
        for token in line.split_whitespace() {
            let value: u32 = token.parse().map_err(|_| Error::MalformedToken {
                path: path.clone(),
                line: line_idx + 1,
                token: token.to_string(),
            })?;
            if value > u16::MAX as u32 {
                return Err(Error::AddressOutOfRange {
                    path: path.clone(),
                    line: line_idx + 1,
                    value,
                });
            }
            addresses.push(value as u16);
        }
    }
    Ok(addresses)
}

/// The page-number sequence a trace of addresses implies, in order --
/// what `ReplacementPolicy::opt` needs to build its occurrence index.
pub fn page_numbers(addresses: &[u16]) -> Vec<u8> {
    addresses.iter().map(|&addr| (addr >> 8) as u8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_trace(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addresses.txt");
        File::create(&path).unwrap().write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn parses_whitespace_separated_addresses() {
        let (_dir, path) = write_trace("16916\n16916 12107\n\n");
        let addresses = read_addresses(&path).unwrap();
        assert_eq!(addresses, vec![16916, 16916, 12107]);
    }

    #[test]
    fn rejects_non_integer_tokens() {
        let (_dir, path) = write_trace("16916\nabc\n");
        let err = read_addresses(&path).unwrap_err();
        assert!(matches!(err, Error::MalformedToken { line: 2, .. }));
    }

    #[test]
    fn rejects_addresses_above_16_bits() {
        let (_dir, path) = write_trace("70000\n");
        let err = read_addresses(&path).unwrap_err();
        assert!(matches!(err, Error::AddressOutOfRange { .. }));
    }

    #[test]
    fn derives_page_numbers() {
        let pages = page_numbers(&[16916, 0, 255]);
        assert_eq!(pages, vec![66, 0, 0]);
    }
}
