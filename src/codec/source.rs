//! Abstract byte source for the codec
//!
//! A single [`ByteSource`] trait covers both storage shapes a table can be
//! opened with: a seekable file handle or a fully loaded buffer. The codec
//! and record engine are written against it and the shape is chosen once at
//! open time.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Positioned byte access over a table's raw storage.
pub trait ByteSource {
    /// Total number of bytes available
    fn len(&self) -> u64;

    /// Returns true when the source holds no bytes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fills `buf` from `offset`; fails with `UnexpectedEof` on short reads
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()>;
}

/// Streaming source: an exclusively owned file handle (read + write).
pub struct FileSource {
    file: File,
    len: u64,
}

impl FileSource {
    /// Opens a file for reading and in-place writing, never truncating.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let len = file.metadata()?.len();
        Ok(Self { file, len })
    }

    /// Opens a file for reading only (cursors never write).
    pub fn open_read_only(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(Self { file, len })
    }

    /// Writes `buf` at `offset`, extending the tracked length if the write
    /// runs past the current end.
    pub fn write_all_at(&mut self, offset: u64, buf: &[u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(buf)?;
        let end = offset + buf.len() as u64;
        if end > self.len {
            self.len = end;
        }
        Ok(())
    }

    /// Flushes file content and metadata to disk.
    pub fn sync_all(&self) -> io::Result<()> {
        self.file.sync_all()
    }
}

impl ByteSource for FileSource {
    fn len(&self) -> u64 {
        self.len
    }

    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.read_exact(buf)
    }
}

/// Bulk source: the whole file loaded into memory. Read-only.
pub struct MemorySource {
    data: Vec<u8>,
}

impl MemorySource {
    /// Wraps an already-loaded file image.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Loads the entire file at `path` into memory.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self {
            data: std::fs::read(path)?,
        })
    }
}

impl ByteSource for MemorySource {
    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> io::Result<()> {
        let start = offset as usize;
        let end = start + buf.len();
        if end > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "read of {} bytes at offset {} past end of {}-byte buffer",
                    buf.len(),
                    offset,
                    self.data.len()
                ),
            ));
        }
        buf.copy_from_slice(&self.data[start..end]);
        Ok(())
    }
}
