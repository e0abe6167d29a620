use thiserror::Error;

use crate::descriptor::DescriptorError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Class file too small: {0} bytes")]
    TooSmall(usize),

    #[error("Invalid magic: expected 0xCAFEBABE, found {0:#010x}")]
    InvalidMagic(u32),

    #[error("Unexpected end of data at offset {0:#x} (need {1} more bytes)")]
    Truncated(usize, usize),

    #[error("Constant pool index {0} is out of range or unusable")]
    BadConstantIndex(u16),

    #[error("Unknown constant pool tag {0} at offset {1:#x}")]
    BadConstantTag(u8, usize),

    #[error("Constant pool entry {0} is a {1}, expected {2}")]
    ConstantKind(u16, &'static str, &'static str),

    #[error("Invalid MUTF-8 encoding at offset {0:#x}")]
    InvalidMutf8(usize),

    #[error("Range {0}..{1} out of bounds (source size: {2})")]
    RangeOutOfBounds(usize, usize, usize),

    #[error("Invalid descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
