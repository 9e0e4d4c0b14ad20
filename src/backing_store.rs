use crate::address::FRAME_SIZE;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A random-access source of 256-byte page frames, indexed by page
/// number. This is the contract the translation engine consumes;
/// `FileBackingStore` is the only production implementation, but tests
/// supply simpler ones.
pub trait PageSource {
    fn read_page(&mut self, page_number: u8) -> Result<Rc<[u8]>>;
}

/// Reads pages from `BACKING_STORE.bin` (or any file laid out as a
/// contiguous array of 256-byte pages).
pub struct FileBackingStore {
    path: PathBuf,
    file: File,
}

impl FileBackingStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| Error::FileNotFound {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, file })
    }
}

impl PageSource for FileBackingStore {
    fn read_page(&mut self, page_number: u8) -> Result<Rc<[u8]>> {
        let seek_pos = SeekFrom::Start(FRAME_SIZE as u64 * page_number as u64);
        self.file.seek(seek_pos).map_err(|source| Error::FileNotFound {
            path: self.path.clone(),
            source,
        })?;

        let mut buffer = vec![0u8; FRAME_SIZE];
        let mut read_total = 0;
        loop {
            match self.file.read(&mut buffer[read_total..]) {
                Ok(0) => break,
                Ok(n) => read_total += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::FileNotFound {
                        path: self.path.clone(),
                        source,
                    })
                }
            }
        }

        if read_total < FRAME_SIZE {
            return Err(Error::BackingStoreShort {
                page: page_number,
                got: read_total,
                expected: FRAME_SIZE,
            });
        }

        Ok(Rc::from(buffer.into_boxed_slice()))
    }
}
