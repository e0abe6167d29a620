//! Access flag catalog.
//!
//! Every modifier that has a source keyword lives in [`CATALOG`], in the
//! order it is rendered. Bits without a keyword (`super`, `bridge`,
//! `varargs`, `synthetic`, `mandated`) and bits this catalog does not know
//! about are never rendered.

use std::collections::BTreeSet;
use std::fmt;

use bitflags::bitflags;
use jstub_model::modifiers::*;

bitflags! {
    /// Member kinds a flag may appear on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Target: u8 {
        const CLASS = 0b001;
        const METHOD = 0b010;
        const FIELD = 0b100;
    }
}

/// A renderable access flag. Variant order is the canonical render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessFlag {
    Public,
    Protected,
    Private,
    Static,
    Abstract,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strict,
    Interface,
    Annotation,
    Enum,
}

pub struct CatalogEntry {
    pub flag: AccessFlag,
    pub bit: u16,
    pub targets: Target,
    pub keyword: &'static str,
}

const ALL: Target = Target::all();
const CLASS_OR_METHOD: Target = Target::CLASS.union(Target::METHOD);

/// Indexed by `AccessFlag as usize`.
pub const CATALOG: &[CatalogEntry] = &[
    entry(AccessFlag::Public, ACC_PUBLIC, ALL, "public"),
    entry(AccessFlag::Protected, ACC_PROTECTED, ALL, "protected"),
    entry(AccessFlag::Private, ACC_PRIVATE, ALL, "private"),
    entry(AccessFlag::Static, ACC_STATIC, ALL, "static"),
    entry(AccessFlag::Abstract, ACC_ABSTRACT, CLASS_OR_METHOD, "abstract"),
    entry(AccessFlag::Final, ACC_FINAL, ALL, "final"),
    entry(AccessFlag::Transient, ACC_TRANSIENT, Target::FIELD, "transient"),
    entry(AccessFlag::Volatile, ACC_VOLATILE, Target::FIELD, "volatile"),
    entry(AccessFlag::Synchronized, ACC_SYNCHRONIZED, Target::METHOD, "synchronized"),
    entry(AccessFlag::Native, ACC_NATIVE, Target::METHOD, "native"),
    entry(AccessFlag::Strict, ACC_STRICT, Target::METHOD, "strictfp"),
    entry(AccessFlag::Interface, ACC_INTERFACE, Target::CLASS, "interface"),
    entry(AccessFlag::Annotation, ACC_ANNOTATION, Target::CLASS, "@interface"),
    entry(AccessFlag::Enum, ACC_ENUM, Target::CLASS, "enum"),
];

const fn entry(flag: AccessFlag, bit: u16, targets: Target, keyword: &'static str) -> CatalogEntry {
    CatalogEntry {
        flag,
        bit,
        targets,
        keyword,
    }
}

impl AccessFlag {
    fn entry(self) -> &'static CatalogEntry {
        &CATALOG[self as usize]
    }

    pub fn bit(self) -> u16 {
        self.entry().bit
    }

    pub fn targets(self) -> Target {
        self.entry().targets
    }

    pub fn keyword(self) -> &'static str {
        self.entry().keyword
    }

    pub fn applies_to(self, target: Target) -> bool {
        self.targets().intersects(target)
    }
}

impl fmt::Display for AccessFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Every catalog flag applicable to `target` whose bit is set in `access`.
pub fn applicable_flags(target: Target, access: u16) -> BTreeSet<AccessFlag> {
    CATALOG
        .iter()
        .filter(|e| e.targets.intersects(target) && access & e.bit != 0)
        .map(|e| e.flag)
        .collect()
}

/// Canonical order, dropping flags that don't apply to `target`.
pub fn sort(target: Target, flags: impl IntoIterator<Item = AccessFlag>) -> Vec<AccessFlag> {
    let mut sorted: Vec<_> = flags.into_iter().filter(|f| f.applies_to(target)).collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted
}

/// Keywords joined by single spaces, in the order given.
pub fn render(flags: &[AccessFlag]) -> String {
    flags
        .iter()
        .map(|f| f.keyword())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn sort_and_render(target: Target, flags: impl IntoIterator<Item = AccessFlag>) -> String {
    render(&sort(target, flags))
}

#[inline]
pub fn is_static(access: u16) -> bool {
    access & ACC_STATIC != 0
}

#[inline]
pub fn is_varargs(access: u16) -> bool {
    access & ACC_VARARGS != 0
}

#[inline]
pub fn is_abstract(access: u16) -> bool {
    access & ACC_ABSTRACT != 0
}

#[inline]
pub fn is_native(access: u16) -> bool {
    access & ACC_NATIVE != 0
}

#[inline]
pub fn is_final(access: u16) -> bool {
    access & ACC_FINAL != 0
}

#[inline]
pub fn is_interface(access: u16) -> bool {
    access & ACC_INTERFACE != 0
}

#[inline]
pub fn is_annotation(access: u16) -> bool {
    access & ACC_ANNOTATION != 0
}

#[inline]
pub fn is_enum(access: u16) -> bool {
    access & ACC_ENUM != 0
}

#[inline]
pub fn is_synthetic(access: u16) -> bool {
    access & ACC_SYNTHETIC != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_variant() {
        for (i, e) in CATALOG.iter().enumerate() {
            assert_eq!(e.flag as usize, i, "{} out of place", e.keyword);
        }
    }

    #[test]
    fn catalog_order_matches_ord() {
        assert!(CATALOG.windows(2).all(|w| w[0].flag < w[1].flag));
    }

    #[test]
    fn method_flags_in_canonical_order() {
        let access = ACC_FINAL | ACC_STATIC | ACC_PUBLIC | ACC_SYNCHRONIZED;
        let flags = sort(Target::METHOD, applicable_flags(Target::METHOD, access));
        assert_eq!(render(&flags), "public static final synchronized");
    }

    #[test]
    fn order_ignores_input_order() {
        let a = sort_and_render(
            Target::METHOD,
            [AccessFlag::Native, AccessFlag::Private, AccessFlag::Static],
        );
        let b = sort_and_render(
            Target::METHOD,
            [AccessFlag::Static, AccessFlag::Native, AccessFlag::Private],
        );
        assert_eq!(a, "private static native");
        assert_eq!(a, b);
    }

    #[test]
    fn shared_bits_resolve_by_target() {
        // 0x0020 is `super` on classes and `synchronized` on methods.
        assert!(applicable_flags(Target::CLASS, ACC_SUPER).is_empty());
        assert_eq!(
            applicable_flags(Target::METHOD, ACC_SYNCHRONIZED),
            BTreeSet::from([AccessFlag::Synchronized])
        );
        // 0x0080 is `transient` on fields and `varargs` on methods.
        assert!(applicable_flags(Target::METHOD, ACC_VARARGS).is_empty());
        assert_eq!(
            sort_and_render(Target::FIELD, applicable_flags(Target::FIELD, ACC_TRANSIENT)),
            "transient"
        );
    }

    #[test]
    fn unknown_and_keywordless_bits_ignored() {
        let access = ACC_PUBLIC | ACC_SYNTHETIC | ACC_BRIDGE | ACC_MANDATED;
        assert_eq!(
            applicable_flags(Target::METHOD, access),
            BTreeSet::from([AccessFlag::Public])
        );
        assert!(applicable_flags(Target::CLASS, 0).is_empty());
    }

    #[test]
    fn sort_drops_inapplicable() {
        let flags = sort(Target::FIELD, [AccessFlag::Abstract, AccessFlag::Volatile]);
        assert_eq!(flags, [AccessFlag::Volatile]);
    }

    #[test]
    fn render_empty() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn predicates() {
        let access = ACC_STATIC | ACC_VARARGS;
        assert!(is_static(access));
        assert!(is_varargs(access));
        assert!(!is_abstract(access));
        assert!(!is_native(access));
        assert!(is_enum(ACC_ENUM | ACC_FINAL));
        assert!(is_final(ACC_ENUM | ACC_FINAL));
        assert!(is_interface(ACC_INTERFACE));
        assert!(is_annotation(ACC_ANNOTATION));
        assert!(is_synthetic(ACC_SYNTHETIC));
    }
}
