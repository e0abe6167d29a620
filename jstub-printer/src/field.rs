use jstub_model::{ClassModel, FieldModel};

use crate::access::{self, Target};
use crate::error::{Error, Result};
use crate::names::shorten;

/// Prints one field as `flags Type name;`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldPrintStrategy;

impl FieldPrintStrategy {
    pub fn print(&self, owner: &ClassModel, field: &FieldModel) -> Result<String> {
        log::trace!("Printing field {}.{} {}", owner.name, field.name, field.desc);
        let ty = field
            .field_type()
            .map_err(|e| Error::descriptor(&field.owner, &field.name, &field.desc, e))?;

        let mut sb = access::sort_and_render(
            Target::FIELD,
            access::applicable_flags(Target::FIELD, field.access),
        );
        if !sb.is_empty() {
            sb.push(' ');
        }
        sb.push_str(shorten(&ty.class_name()));
        sb.push(' ');
        sb.push_str(&field.name);
        sb.push_str(";\n");
        Ok(sb)
    }
}
