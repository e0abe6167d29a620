//! Byte sources that class content can be read from.
//!
//! A [`ByteSource`] is either a window into a shared in-memory buffer or a
//! path on disk. Readers never care which: they ask for the whole content,
//! a sequential stream, a random-access read, or a mapped view.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use memmap2::Mmap;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub enum ByteSource {
    Memory {
        data: Arc<[u8]>,
        offset: usize,
        length: usize,
    },
    Path(PathBuf),
}

/// A borrowed or mapped view of a source's full content.
pub enum SourceBytes<'a> {
    Borrowed(&'a [u8]),
    Mapped(Mmap),
}

impl Deref for SourceBytes<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Self::Borrowed(b) => *b,
            Self::Mapped(m) => &m[..],
        }
    }
}

impl ByteSource {
    /// Wrap an entire buffer.
    pub fn wrap(data: impl Into<Arc<[u8]>>) -> Self {
        let data = data.into();
        let length = data.len();
        Self::Memory {
            data,
            offset: 0,
            length,
        }
    }

    /// Wrap `length` bytes of `data` starting at `offset`.
    pub fn wrap_range(data: impl Into<Arc<[u8]>>, offset: usize, length: usize) -> Result<Self> {
        let data = data.into();
        let end = offset
            .checked_add(length)
            .ok_or(Error::RangeOutOfBounds(offset, usize::MAX, data.len()))?;
        if end > data.len() {
            return Err(Error::RangeOutOfBounds(offset, end, data.len()));
        }
        Ok(Self::Memory {
            data,
            offset,
            length,
        })
    }

    pub fn for_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// The backing path, if this source reads from disk.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Path(p) => Some(p),
            Self::Memory { .. } => None,
        }
    }

    pub fn len(&self) -> Result<u64> {
        match self {
            Self::Memory { length, .. } => Ok(*length as u64),
            Self::Path(p) => Ok(std::fs::metadata(p)?.len()),
        }
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Read the full content into an owned buffer.
    pub fn read_all(&self) -> Result<Vec<u8>> {
        match self {
            Self::Memory { .. } => Ok(self.window().to_vec()),
            Self::Path(p) => Ok(std::fs::read(p)?),
        }
    }

    /// Open a sequential reader over the content.
    pub fn open_stream(&self) -> Result<Box<dyn Read + '_>> {
        match self {
            Self::Memory { .. } => Ok(Box::new(Cursor::new(self.window()))),
            Self::Path(p) => Ok(Box::new(BufReader::new(File::open(p)?))),
        }
    }

    /// Read up to `buf.len()` bytes starting at `pos`. Returns the number of
    /// bytes read, which is 0 at or past the end.
    pub fn read_at(&self, pos: u64, buf: &mut [u8]) -> Result<usize> {
        match self {
            Self::Memory { .. } => {
                let window = self.window();
                let Ok(start) = usize::try_from(pos) else {
                    return Ok(0);
                };
                if start >= window.len() {
                    return Ok(0);
                }
                let n = buf.len().min(window.len() - start);
                buf[..n].copy_from_slice(&window[start..start + n]);
                Ok(n)
            }
            Self::Path(p) => {
                let mut file = File::open(p)?;
                file.seek(SeekFrom::Start(pos))?;
                let mut total = 0;
                while total < buf.len() {
                    match file.read(&mut buf[total..]) {
                        Ok(0) => break,
                        Ok(n) => total += n,
                        Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                        Err(e) => return Err(e.into()),
                    }
                }
                Ok(total)
            }
        }
    }

    /// Zero-copy view of the content: borrowed for memory, mapped for paths.
    pub fn map(&self) -> Result<SourceBytes<'_>> {
        match self {
            Self::Memory { .. } => Ok(SourceBytes::Borrowed(self.window())),
            Self::Path(p) => {
                let file = File::open(p)?;
                if file.metadata()?.len() == 0 {
                    // Zero-length maps are rejected on some platforms.
                    return Ok(SourceBytes::Borrowed(&[]));
                }
                // SAFETY: the map is read-only; callers must not truncate the
                // file while the view is alive.
                let map = unsafe { Mmap::map(&file)? };
                Ok(SourceBytes::Mapped(map))
            }
        }
    }

    fn window(&self) -> &[u8] {
        match self {
            Self::Memory {
                data,
                offset,
                length,
            } => &data[*offset..*offset + *length],
            Self::Path(_) => &[],
        }
    }
}

impl From<Vec<u8>> for ByteSource {
    fn from(data: Vec<u8>) -> Self {
        Self::wrap(data)
    }
}

impl From<&Path> for ByteSource {
    fn from(path: &Path) -> Self {
        Self::for_path(path)
    }
}
