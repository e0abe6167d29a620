//! Minimal JVM class-file reader (JVMS §4).
//!
//! Only what the model needs is decoded: the constant pool, class header,
//! interfaces, and field/method `access`/`name`/`descriptor`. Attributes are
//! skipped by length.

use crate::descriptor::{DescriptorError, MethodDescriptor, Type};
use crate::error::{Error, Result};
use crate::model::{ClassModel, FieldModel, MethodModel};
use crate::mutf8;
use crate::source::ByteSource;

pub const MAGIC: u32 = 0xCAFE_BABE;

// Constant pool tags
const CONSTANT_UTF8: u8 = 1;
const CONSTANT_INTEGER: u8 = 3;
const CONSTANT_FLOAT: u8 = 4;
const CONSTANT_LONG: u8 = 5;
const CONSTANT_DOUBLE: u8 = 6;
const CONSTANT_CLASS: u8 = 7;
const CONSTANT_STRING: u8 = 8;
const CONSTANT_FIELDREF: u8 = 9;
const CONSTANT_METHODREF: u8 = 10;
const CONSTANT_INTERFACE_METHODREF: u8 = 11;
const CONSTANT_NAME_AND_TYPE: u8 = 12;
const CONSTANT_METHOD_HANDLE: u8 = 15;
const CONSTANT_METHOD_TYPE: u8 = 16;
const CONSTANT_DYNAMIC: u8 = 17;
const CONSTANT_INVOKE_DYNAMIC: u8 = 18;
const CONSTANT_MODULE: u8 = 19;
const CONSTANT_PACKAGE: u8 = 20;

/// Header fields up to the constant pool count.
const HEADER_SIZE: usize = 10;

#[derive(Debug, Clone)]
enum Constant {
    Utf8(String),
    Class(u16),
    Other(&'static str),
    /// Index 0, and the slot following a long or double.
    Unusable,
}

impl Constant {
    fn kind(&self) -> &'static str {
        match self {
            Self::Utf8(_) => "Utf8",
            Self::Class(_) => "Class",
            Self::Other(kind) => *kind,
            Self::Unusable => "unusable slot",
        }
    }
}

/// Class file version, `major.minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClassVersion {
    pub major: u16,
    pub minor: u16,
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let end = self.pos + n;
        if end > self.data.len() {
            return Err(Error::Truncated(self.pos, end - self.data.len()));
        }
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_be_bytes([b[0], b[1]]))
    }

    fn u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
    }

    fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }
}

struct ConstantPool(Vec<Constant>);

impl ConstantPool {
    fn parse(r: &mut Reader<'_>) -> Result<Self> {
        let count = r.u16()? as usize;
        let mut entries = Vec::with_capacity(count.max(1));
        entries.push(Constant::Unusable);

        while entries.len() < count {
            let at = r.pos;
            let tag = r.u8()?;
            let entry = match tag {
                CONSTANT_UTF8 => {
                    let len = r.u16()? as usize;
                    let base = r.pos;
                    Constant::Utf8(mutf8::decode(r.take(len)?, base)?)
                }
                CONSTANT_CLASS => Constant::Class(r.u16()?),
                CONSTANT_INTEGER | CONSTANT_FLOAT => {
                    r.skip(4)?;
                    Constant::Other("Integer/Float")
                }
                CONSTANT_LONG | CONSTANT_DOUBLE => {
                    r.skip(8)?;
                    entries.push(Constant::Other("Long/Double"));
                    Constant::Unusable
                }
                CONSTANT_STRING | CONSTANT_METHOD_TYPE | CONSTANT_MODULE | CONSTANT_PACKAGE => {
                    r.skip(2)?;
                    Constant::Other("index")
                }
                CONSTANT_FIELDREF
                | CONSTANT_METHODREF
                | CONSTANT_INTERFACE_METHODREF
                | CONSTANT_NAME_AND_TYPE
                | CONSTANT_DYNAMIC
                | CONSTANT_INVOKE_DYNAMIC => {
                    r.skip(4)?;
                    Constant::Other("reference")
                }
                CONSTANT_METHOD_HANDLE => {
                    r.skip(3)?;
                    Constant::Other("MethodHandle")
                }
                _ => {
                    log::warn!("Unknown constant pool tag {tag} at offset {at:#x}");
                    return Err(Error::BadConstantTag(tag, at));
                }
            };
            entries.push(entry);
        }

        // A trailing long/double may have pushed one slot past `count`.
        entries.truncate(count.max(1));
        Ok(Self(entries))
    }

    fn get(&self, idx: u16) -> Result<&Constant> {
        match self.0.get(idx as usize) {
            None | Some(Constant::Unusable) => Err(Error::BadConstantIndex(idx)),
            Some(c) => Ok(c),
        }
    }

    fn utf8(&self, idx: u16) -> Result<&str> {
        match self.get(idx)? {
            Constant::Utf8(s) => Ok(s.as_str()),
            other => Err(Error::ConstantKind(idx, other.kind(), "Utf8")),
        }
    }

    fn class_name(&self, idx: u16) -> Result<&str> {
        match self.get(idx)? {
            Constant::Class(name_idx) => self.utf8(*name_idx),
            other => Err(Error::ConstantKind(idx, other.kind(), "Class")),
        }
    }
}

/// Name, descriptor and access of one field or method.
struct Member {
    access: u16,
    name: String,
    desc: String,
}

fn parse_members(
    r: &mut Reader<'_>,
    pool: &ConstantPool,
    validate: fn(&str) -> std::result::Result<(), DescriptorError>,
) -> Result<Vec<Member>> {
    let count = r.u16()?;
    let mut members = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let access = r.u16()?;
        let name = pool.utf8(r.u16()?)?.to_string();
        let desc = pool.utf8(r.u16()?)?.to_string();
        validate(&desc)?;
        skip_attributes(r)?;
        members.push(Member { access, name, desc });
    }
    Ok(members)
}

fn validate_field(desc: &str) -> std::result::Result<(), DescriptorError> {
    Type::parse(desc).map(|_| ())
}

fn validate_method(desc: &str) -> std::result::Result<(), DescriptorError> {
    MethodDescriptor::parse(desc).map(|_| ())
}

fn skip_attributes(r: &mut Reader<'_>) -> Result<()> {
    let count = r.u16()?;
    for _ in 0..count {
        r.skip(2)?; // name index
        let len = r.u32()? as usize;
        r.skip(len)?;
    }
    Ok(())
}

/// Read the version from a class file header without parsing the rest.
pub fn read_version(data: &[u8]) -> Result<ClassVersion> {
    if data.len() < HEADER_SIZE {
        return Err(Error::TooSmall(data.len()));
    }
    let mut r = Reader { data, pos: 0 };
    let magic = r.u32()?;
    if magic != MAGIC {
        return Err(Error::InvalidMagic(magic));
    }
    let minor = r.u16()?;
    let major = r.u16()?;
    Ok(ClassVersion { major, minor })
}

/// Parse a class file into a [`ClassModel`].
///
/// Member descriptors are checked here, so models produced by this reader
/// always print.
pub fn read_class(data: &[u8]) -> Result<ClassModel> {
    let version = read_version(data)?;
    let mut r = Reader {
        data,
        pos: HEADER_SIZE - 2,
    };

    let pool = ConstantPool::parse(&mut r)?;
    let access = r.u16()?;
    let name = pool.class_name(r.u16()?)?.to_string();
    let super_idx = r.u16()?;
    let super_name = if super_idx == 0 {
        None
    } else {
        Some(pool.class_name(super_idx)?)
    };

    let mut class = ClassModel::new(name, access, super_name);

    let num_interfaces = r.u16()?;
    for _ in 0..num_interfaces {
        let iface = pool.class_name(r.u16()?)?;
        class.interfaces.push(iface.to_string());
    }

    for m in parse_members(&mut r, &pool, validate_field)? {
        log::trace!("{}: field {} {}", class.name, m.name, m.desc);
        class
            .fields
            .push(FieldModel::new(&class.name, &m.name, &m.desc, m.access));
    }
    for m in parse_members(&mut r, &pool, validate_method)? {
        log::trace!("{}: method {}{}", class.name, m.name, m.desc);
        class
            .methods
            .push(MethodModel::new(&class.name, &m.name, &m.desc, m.access));
    }
    skip_attributes(&mut r)?;

    if r.pos != data.len() {
        log::warn!(
            "{}: {} trailing bytes after class file",
            class.name,
            data.len() - r.pos
        );
    }

    log::debug!(
        "Read class {} (version {}.{}, {} fields, {} methods)",
        class.name,
        version.major,
        version.minor,
        class.fields.len(),
        class.methods.len()
    );
    Ok(class)
}

/// Read and parse a class from any [`ByteSource`].
pub fn read_class_from(source: &ByteSource) -> Result<ClassModel> {
    let bytes = source.map()?;
    read_class(&bytes)
}
