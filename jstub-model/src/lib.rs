//! Structural model of compiled JVM classes.
//!
//! The printer crate only borrows [`ClassModel`]s; this crate is where they
//! come from, either built by hand or read from class-file bytes.

pub mod descriptor;
pub mod error;
pub mod model;
pub mod modifiers;
pub mod mutf8;
pub mod reader;
pub mod source;

pub use descriptor::{DescriptorError, MethodDescriptor, Primitive, Type};
pub use error::{Error, Result};
pub use model::{ClassModel, FieldModel, MethodModel};
pub use reader::{read_class, read_class_from};
pub use source::ByteSource;
