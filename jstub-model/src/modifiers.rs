//! `access_flags` bits as stored in class files (JVMS §4.1 table 4.1-B,
//! §4.5 table 4.5-A, §4.6 table 4.6-A).
//!
//! The tables overlap: 0x0020, 0x0040, 0x0080 and 0x8000 are reused with a
//! different meaning on classes, fields and methods, so each such bit has
//! one name per meaning.

pub const ACC_PUBLIC: u16 = 0x0001;
pub const ACC_PRIVATE: u16 = 0x0002;
pub const ACC_PROTECTED: u16 = 0x0004;
pub const ACC_STATIC: u16 = 0x0008;
pub const ACC_FINAL: u16 = 0x0010;

/// Set by every modern compiler on classes; the JVM ignores it since Java 8.
pub const ACC_SUPER: u16 = 0x0020;
pub const ACC_SYNCHRONIZED: u16 = 0x0020;

/// Compiler-generated bridge for a covariant or erased override.
pub const ACC_BRIDGE: u16 = 0x0040;
pub const ACC_VOLATILE: u16 = 0x0040;

pub const ACC_TRANSIENT: u16 = 0x0080;
/// The last parameter is a variable-arity array.
pub const ACC_VARARGS: u16 = 0x0080;

pub const ACC_NATIVE: u16 = 0x0100;
/// Always paired with `ACC_ABSTRACT` on class files.
pub const ACC_INTERFACE: u16 = 0x0200;
pub const ACC_ABSTRACT: u16 = 0x0400;
/// Meaningful only for class files before version 61.
pub const ACC_STRICT: u16 = 0x0800;
/// Not present in source code.
pub const ACC_SYNTHETIC: u16 = 0x1000;
/// Requires `ACC_INTERFACE`.
pub const ACC_ANNOTATION: u16 = 0x2000;
pub const ACC_ENUM: u16 = 0x4000;

/// Implicitly declared parameter (`MethodParameters` attribute).
pub const ACC_MANDATED: u16 = 0x8000;
/// `module-info` class.
pub const ACC_MODULE: u16 = 0x8000;
