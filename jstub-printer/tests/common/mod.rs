#![allow(dead_code)]

use jstub_model::ClassModel;
use jstub_model::modifiers::*;

pub const STUB: &str = "{\n    throw new RuntimeException(\"Stub method\");\n}\n";

/// Indent every non-empty line of `text` by one level.
pub fn indented(text: &str) -> String {
    text.lines()
        .map(|l| if l.is_empty() { "\n".to_string() } else { format!("    {l}\n") })
        .collect()
}

pub fn greeter() -> ClassModel {
    ClassModel::new("com/example/Greeter", ACC_PUBLIC | ACC_SUPER, Some("java/lang/Object"))
        .with_field("name", "Ljava/lang/String;", ACC_PRIVATE | ACC_FINAL)
        .with_method("<init>", "(Ljava/lang/String;)V", ACC_PUBLIC)
        .with_method(
            "greet",
            "([Ljava/lang/Object;)Ljava/lang/String;",
            ACC_PUBLIC | ACC_VARARGS,
        )
        .with_method("run", "()V", ACC_PUBLIC | ACC_ABSTRACT)
}

pub fn color_enum() -> ClassModel {
    ClassModel::new(
        "com/example/Color",
        ACC_PUBLIC | ACC_FINAL | ACC_SUPER | ACC_ENUM,
        Some("java/lang/Enum"),
    )
    .with_field(
        "RED",
        "Lcom/example/Color;",
        ACC_PUBLIC | ACC_STATIC | ACC_FINAL | ACC_ENUM,
    )
    .with_method("values", "()[Lcom/example/Color;", ACC_PUBLIC | ACC_STATIC)
}
