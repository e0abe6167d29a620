//! Read-only structural view of a compiled class.

use serde::Serialize;

use crate::descriptor::{DescriptorError, MethodDescriptor, Type};

/// Internal name of the implicit enum base type.
pub const ENUM: &str = "java/lang/Enum";
/// Internal name of the implicit annotation super-interface.
pub const ANNOTATION: &str = "java/lang/annotation/Annotation";

/// One compiled class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassModel {
    /// Internal name, e.g. `com/example/Outer$Inner`.
    pub name: String,
    pub access: u16,
    /// `None` only for `java/lang/Object` itself.
    pub super_name: Option<String>,
    pub interfaces: Vec<String>,
    pub fields: Vec<FieldModel>,
    pub methods: Vec<MethodModel>,
}

impl ClassModel {
    pub fn new(name: impl Into<String>, access: u16, super_name: Option<&str>) -> Self {
        Self {
            name: name.into(),
            access,
            super_name: super_name.map(str::to_string),
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_interface(mut self, name: impl Into<String>) -> Self {
        self.interfaces.push(name.into());
        self
    }

    /// Add a method owned by this class.
    pub fn with_method(mut self, name: &str, desc: &str, access: u16) -> Self {
        let method = MethodModel::new(&self.name, name, desc, access);
        self.methods.push(method);
        self
    }

    /// Add a field owned by this class.
    pub fn with_field(mut self, name: &str, desc: &str, access: u16) -> Self {
        let field = FieldModel::new(&self.name, name, desc, access);
        self.fields.push(field);
        self
    }

    pub fn method(&self, name: &str, desc: &str) -> Option<&MethodModel> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.desc == desc)
    }

    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One method of a class. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodModel {
    pub owner: String,
    pub name: String,
    pub access: u16,
    /// Raw descriptor, e.g. `(ILjava/lang/String;)V`.
    pub desc: String,
}

impl MethodModel {
    pub fn new(owner: &str, name: &str, desc: &str, access: u16) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            access,
            desc: desc.to_string(),
        }
    }

    /// Split the raw descriptor into argument and return types.
    pub fn descriptor(&self) -> Result<MethodDescriptor, DescriptorError> {
        MethodDescriptor::parse(&self.desc)
    }
}

/// One field of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldModel {
    pub owner: String,
    pub name: String,
    pub access: u16,
    /// Raw descriptor, e.g. `Ljava/util/List;`.
    pub desc: String,
}

impl FieldModel {
    pub fn new(owner: &str, name: &str, desc: &str, access: u16) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            access,
            desc: desc.to_string(),
        }
    }

    pub fn field_type(&self) -> Result<Type, DescriptorError> {
        Type::parse(&self.desc)
    }
}
