//! Class declarations and member bodies.
//!
//! All class shapes share one declaration builder. A [`ClassKind`] supplies
//! the pieces that differ: which catalog flags are dropped in favour of a
//! literal keyword, whether the super type is shown, and what the
//! interface list is introduced with.

use std::collections::BTreeSet;
use std::fmt;

use jstub_model::ClassModel;
use jstub_model::model::{ANNOTATION, ENUM};

use crate::access::{self, AccessFlag, Target};
use crate::error::Result;
use crate::field::FieldPrintStrategy;
use crate::method::MethodPrintStrategy;
use crate::names::shorten;
use crate::printer::Printer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
    Annotation,
    Enum,
}

impl ClassKind {
    /// Select the declaration shape from a class access value.
    pub fn of(access: u16) -> Self {
        if access::is_annotation(access) {
            Self::Annotation
        } else if access::is_interface(access) {
            Self::Interface
        } else if access::is_enum(access) {
            Self::Enum
        } else {
            Self::Class
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Annotation => "@interface",
            Self::Enum => "enum",
        }
    }

    /// Flags replaced by the literal keyword or implied by it.
    fn suppressed(self) -> &'static [AccessFlag] {
        match self {
            Self::Class => &[],
            Self::Interface => &[AccessFlag::Interface, AccessFlag::Abstract],
            Self::Annotation => &[
                AccessFlag::Annotation,
                AccessFlag::Interface,
                AccessFlag::Abstract,
            ],
            Self::Enum => &[AccessFlag::Enum, AccessFlag::Final],
        }
    }

    fn declaration_flags(self, access: u16) -> BTreeSet<AccessFlag> {
        let mut flags = access::applicable_flags(Target::CLASS, access);
        for flag in self.suppressed() {
            flags.remove(flag);
        }
        flags
    }

    fn super_clause(self, super_name: Option<&str>) -> Option<&str> {
        match self {
            Self::Class => super_name,
            // Bytecode may name another super as long as it reaches Enum at
            // runtime, so only the direct case is elided.
            Self::Enum => super_name.filter(|s| *s != ENUM),
            Self::Interface | Self::Annotation => None,
        }
    }

    fn interfaces_keyword(self) -> &'static str {
        match self {
            Self::Class | Self::Enum => "implements",
            Self::Interface | Self::Annotation => "extends",
        }
    }

    fn shows_interface(self, name: &str) -> bool {
        !(self == Self::Annotation && name == ANNOTATION)
    }
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Prints a whole class: declaration, then fields and methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassPrintStrategy {
    kind: ClassKind,
    fields: FieldPrintStrategy,
    methods: MethodPrintStrategy,
}

impl ClassPrintStrategy {
    pub fn new(kind: ClassKind) -> Self {
        Self {
            kind,
            fields: FieldPrintStrategy,
            methods: MethodPrintStrategy,
        }
    }

    /// Pick the strategy matching the shape of `class`.
    pub fn for_class(class: &ClassModel) -> Self {
        Self::new(ClassKind::of(class.access))
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn print(&self, class: &ClassModel) -> Result<String> {
        log::debug!("Printing {} as {}", class.name, self.kind);
        let mut out = Printer::new();
        out.append_line(&self.declaration(class));
        out.append_line("{");
        out.indent();
        self.append_body(&mut out, class)?;
        out.dedent();
        out.append_line("}");
        Ok(out.into_string())
    }

    /// The declaration line, without a trailing line break.
    pub fn declaration(&self, class: &ClassModel) -> String {
        let kind = self.kind;
        let mut sb = access::sort_and_render(Target::CLASS, kind.declaration_flags(class.access));
        if !sb.is_empty() {
            sb.push(' ');
        }
        sb.push_str(kind.keyword());
        sb.push(' ');
        sb.push_str(shorten(&class.name));

        if let Some(super_name) = kind.super_clause(class.super_name.as_deref()) {
            sb.push_str(" extends ");
            sb.push_str(shorten(super_name));
        }

        let interfaces: Vec<&str> = class
            .interfaces
            .iter()
            .map(String::as_str)
            .filter(|i| kind.shows_interface(i))
            .map(shorten)
            .collect();
        if !interfaces.is_empty() {
            sb.push(' ');
            sb.push_str(kind.interfaces_keyword());
            sb.push(' ');
            sb.push_str(&interfaces.join(", "));
        }
        sb
    }

    fn append_body(&self, out: &mut Printer, class: &ClassModel) -> Result<()> {
        for field in &class.fields {
            out.append_multi_line(&self.fields.print(class, field)?);
        }
        for (i, method) in class.methods.iter().enumerate() {
            if i > 0 || !class.fields.is_empty() {
                out.newline();
            }
            out.append_multi_line(&self.methods.print(class, method)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstub_model::modifiers::*;

    fn decl(class: &ClassModel) -> String {
        ClassPrintStrategy::for_class(class).declaration(class)
    }

    #[test]
    fn kind_selection() {
        assert_eq!(ClassKind::of(ACC_PUBLIC), ClassKind::Class);
        assert_eq!(ClassKind::of(ACC_ENUM | ACC_FINAL), ClassKind::Enum);
        assert_eq!(ClassKind::of(ACC_INTERFACE | ACC_ABSTRACT), ClassKind::Interface);
        assert_eq!(
            ClassKind::of(ACC_ANNOTATION | ACC_INTERFACE | ACC_ABSTRACT),
            ClassKind::Annotation
        );
    }

    #[test]
    fn class_declaration() {
        let access = ACC_PUBLIC | ACC_SUPER | ACC_ABSTRACT;
        let class = ClassModel::new("com/x/Foo", access, Some("com/x/Base"))
            .with_interface("java/lang/Runnable")
            .with_interface("java/io/Serializable");
        assert_eq!(
            decl(&class),
            "public abstract class Foo extends Base implements Runnable, Serializable"
        );
    }

    #[test]
    fn root_class_has_no_extends() {
        let class = ClassModel::new("java/lang/Object", ACC_PUBLIC, None);
        assert_eq!(decl(&class), "public class Object");
    }

    #[test]
    fn enum_drops_final_and_enum_super() {
        let class = ClassModel::new("a/Color", ACC_PUBLIC | ACC_FINAL | ACC_ENUM, Some(ENUM));
        assert_eq!(decl(&class), "public enum Color");
    }

    #[test]
    fn enum_keeps_unusual_super() {
        let class = ClassModel::new("a/Color", ACC_ENUM, Some("a/BaseEnum"));
        assert_eq!(decl(&class), "enum Color extends BaseEnum");
    }

    #[test]
    fn interface_declaration() {
        let class = ClassModel::new(
            "a/Shape",
            ACC_PUBLIC | ACC_INTERFACE | ACC_ABSTRACT,
            Some("java/lang/Object"),
        )
        .with_interface("java/lang/Comparable");
        assert_eq!(decl(&class), "public interface Shape extends Comparable");
    }

    #[test]
    fn annotation_declaration() {
        let class = ClassModel::new(
            "a/Marker",
            ACC_PUBLIC | ACC_INTERFACE | ACC_ABSTRACT | ACC_ANNOTATION,
            Some("java/lang/Object"),
        )
        .with_interface(ANNOTATION);
        assert_eq!(decl(&class), "public @interface Marker");
    }
}
