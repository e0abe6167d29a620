//! Method declarations with stub bodies.

use jstub_model::{ClassModel, MethodModel, Type};

use crate::access::{self, Target};
use crate::error::{Error, Result};
use crate::names::{replace_last, shorten};
use crate::printer::{FORCE_NEWLINE, Printer};

/// Body emitted for every method in place of decompiled code.
pub const STUB_BODY: &str = "{\n    throw new RuntimeException(\"Stub method\");\n}";

/// Prints one method as a declaration line plus [`STUB_BODY`].
///
/// Bodies are printed for abstract and native methods too, and parameter
/// names are synthesized from local variable slots (`p0`, `p1`, ...).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MethodPrintStrategy;

impl MethodPrintStrategy {
    pub fn print(&self, owner: &ClassModel, method: &MethodModel) -> Result<String> {
        log::trace!("Printing method {}.{}{}", owner.name, method.name, method.desc);
        let mut out = Printer::new();
        out.append_multi_line(&self.annotations(method));
        out.append_line(&self.declaration(method)?);
        out.append_multi_line(&format!("{STUB_BODY}{FORCE_NEWLINE}"));
        Ok(out.into_string())
    }

    /// `flags ReturnType name(Type p0, ...)`
    pub fn declaration(&self, method: &MethodModel) -> Result<String> {
        let desc = method
            .descriptor()
            .map_err(|e| Error::descriptor(&method.owner, &method.name, &method.desc, e))?;

        let mut sb = String::new();
        let flags = access::sort_and_render(
            Target::METHOD,
            access::applicable_flags(Target::METHOD, method.access),
        );
        if !flags.is_empty() {
            sb.push_str(&flags);
            sb.push(' ');
        }
        sb.push_str(shorten(&desc.ret.class_name()));
        sb.push(' ');
        sb.push_str(&method.name);
        sb.push('(');
        sb.push_str(&self.parameters(method.access, &desc.args).join(", "));
        sb.push(')');
        sb.push_str(&self.throws(method));
        Ok(sb)
    }

    /// `Type pN` for each argument. Slots start after the receiver for
    /// instance methods and advance by each argument's width.
    fn parameters(&self, access: u16, args: &[Type]) -> Vec<String> {
        let varargs = access::is_varargs(access);
        let first_slot = if access::is_static(access) { 0 } else { 1 };
        let last = args.len().saturating_sub(1);

        let (params, _) = args.iter().enumerate().fold(
            (Vec::with_capacity(args.len()), first_slot),
            |(mut params, slot), (i, arg)| {
                let full_name = arg.class_name();
                let mut type_name = shorten(&full_name).to_string();
                if varargs && i == last && arg.is_array() {
                    type_name = replace_last(&type_name, "[]", "...");
                }
                params.push(format!("{type_name} p{slot}"));
                (params, slot + arg.size())
            },
        );
        params
    }

    /// Annotations are not rendered.
    fn annotations(&self, method: &MethodModel) -> String {
        log::trace!("{}: annotations not rendered", method.name);
        String::new()
    }

    /// Throws clauses are not rendered.
    fn throws(&self, method: &MethodModel) -> String {
        log::trace!("{}: throws clause not rendered", method.name);
        String::new()
    }
}
