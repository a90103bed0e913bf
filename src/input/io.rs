//! Bounded I/O for loading analysis inputs.
//!
//! Inputs are read fully into memory, so reads are capped and oversize files
//! are refused before any byte is read.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;
use tracing::{debug, warn};

/// Prefix length handed to content sniffers.
pub const MAX_SNIFF_SIZE: usize = 4096;

/// Resource limits for I/O operations.
#[derive(Debug, Clone, Copy)]
pub struct IOLimits {
    /// Largest file accepted; also caps every read.
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

impl IOLimits {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

/// A bounded reader that limits the amount of data read.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(reader: R, limit: u64) -> Self {
        Self {
            inner: reader,
            bytes_read: 0,
            limit,
        }
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes_read >= self.limit {
            debug!("BoundedReader reached limit of {} bytes", self.limit);
            return Ok(0); // EOF
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;

        if self.bytes_read >= self.limit {
            warn!(
                "BoundedReader limit reached after reading {} bytes",
                self.bytes_read
            );
        }

        Ok(n)
    }
}

/// Safe file reader with resource limits.
pub struct SafeFileReader {
    file: File,
    size: u64,
    limits: IOLimits,
}

impl SafeFileReader {
    /// Open a file, refusing it if it exceeds `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: IOLimits) -> io::Result<Self> {
        let path = path.as_ref();
        debug!("Opening input for reading: {:?}", path);

        let file = File::open(path)?;
        let metadata = file.metadata()?;
        if !metadata.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        let size = metadata.len();

        if size > limits.max_file_size {
            warn!(
                "File too large: {} bytes (limit: {})",
                size, limits.max_file_size
            );
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "File too large: {} bytes (limit: {})",
                    size, limits.max_file_size
                ),
            ));
        }

        debug!("Opened input {:?} ({} bytes)", path, size);
        Ok(Self { file, size, limits })
    }

    /// Read the entire file with bounds checking.
    pub fn read_all(&mut self) -> io::Result<Vec<u8>> {
        self.file.seek(SeekFrom::Start(0))?;
        let mut reader = BoundedReader::new(&mut self.file, self.limits.max_file_size);
        let mut data = Vec::with_capacity(self.size.min(self.limits.max_file_size) as usize);
        reader.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Read a prefix of the file, used for sniffing before the full read.
    pub fn read_prefix(&mut self, size: u64) -> io::Result<Vec<u8>> {
        let read_size = std::cmp::min(size, self.limits.max_file_size);
        self.file.seek(SeekFrom::Start(0))?;
        let mut reader = BoundedReader::new(&mut self.file, read_size);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(data)
    }
}
