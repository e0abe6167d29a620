//! Fallback pseudo-source printer.
//!
//! Turns a [`ClassModel`] into Java-like text when real decompilation is
//! unavailable: declarations are reconstructed from access flags and
//! descriptors, and every method body is a stub.

pub mod access;
pub mod class;
pub mod error;
pub mod field;
pub mod method;
pub mod names;
pub mod printer;

pub use class::{ClassKind, ClassPrintStrategy};
pub use error::{Error, Result};
pub use field::FieldPrintStrategy;
pub use method::MethodPrintStrategy;
pub use printer::Printer;

use jstub_model::{ClassModel, MethodModel};

/// Print a whole class with the strategy matching its kind.
pub fn print_class(class: &ClassModel) -> Result<String> {
    ClassPrintStrategy::for_class(class).print(class)
}

/// Print a single method of `owner`.
pub fn print_method(owner: &ClassModel, method: &MethodModel) -> Result<String> {
    MethodPrintStrategy.print(owner, method)
}
