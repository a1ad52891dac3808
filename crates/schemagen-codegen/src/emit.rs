//! Rust source emission
//!
//! Produces two sections meant to be `include!`d into the same module:
//! the type section (record structs, accessors and the record manifest) and
//! the loader section (one `load` routine per record).

use crate::ident::{FieldNames, is_identifier, is_path};
use crate::naming::{NameTable, ROOT_STEM};
use schemagen_model::{Property, RecordType, TypeDescriptor};
use std::fmt::Write;

const HEADER: &str = "// @generated by schemagen from schema definitions. Do not edit.\n";
const INDENT: &str = "    ";

/// Errors that can occur during emission
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Writing to the output buffer failed
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// The type name prefix cannot start a Rust identifier
    #[error("invalid type prefix '{0}'")]
    InvalidPrefix(String),

    /// The runtime crate is not a valid Rust path
    #[error("invalid runtime crate path '{0}'")]
    InvalidRuntimePath(String),
}

/// Settings for emitted code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Prepended to every record type name
    pub prefix: String,
    /// Path of the crate providing `Element`, `Timestamp` and the parse functions
    pub runtime_crate: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            prefix: "Scenario".to_string(),
            runtime_crate: "schemagen_dom".to_string(),
        }
    }
}

impl CodegenOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_runtime_crate(mut self, runtime_crate: impl Into<String>) -> Self {
        self.runtime_crate = runtime_crate.into();
        self
    }

    /// Name of the implicit root record
    pub fn root_type(&self) -> String {
        format!("{}{ROOT_STEM}", self.prefix)
    }

    fn validate(&self) -> Result<(), CodegenError> {
        if !self.prefix.is_empty() && !is_identifier(&self.prefix) {
            return Err(CodegenError::InvalidPrefix(self.prefix.clone()));
        }
        if !is_path(&self.runtime_crate) {
            return Err(CodegenError::InvalidRuntimePath(self.runtime_crate.clone()));
        }
        Ok(())
    }
}

/// Emitted text of both sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSources {
    /// Type definitions
    pub defs: String,
    /// Loader routines
    pub loaders: String,
}

/// Emits Rust data-binding types and loaders for record types
#[derive(Debug, Clone, Default)]
pub struct RustEmitter {
    options: CodegenOptions,
}

impl RustEmitter {
    pub fn new(options: CodegenOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    /// Emit both sections for records in declaration order
    pub fn emit(&self, records: &[RecordType]) -> Result<GeneratedSources, CodegenError> {
        self.options.validate()?;
        log::debug!("Emitting {} record types", records.len());
        Ok(GeneratedSources {
            defs: self.emit_defs(records)?,
            loaders: self.emit_loaders(records)?,
        })
    }

    /// Emit the type section
    pub fn emit_defs(&self, records: &[RecordType]) -> Result<String, CodegenError> {
        let names = NameTable::new(records);
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');

        if !records.is_empty() {
            out.push_str("use std::ops::{Deref, DerefMut};\n");
            if records.iter().flat_map(|r| &r.properties).any(|p| p.ty.is_custom()) {
                out.push_str("use std::rc::Rc;\n");
            }
            out.push('\n');
        }

        writeln!(out, "/// Every generated record type, in declaration order")?;
        if records.is_empty() {
            writeln!(out, "pub const RECORD_TYPES: &[&str] = &[];")?;
        } else {
            writeln!(out, "pub const RECORD_TYPES: &[&str] = &[")?;
            for record in records {
                writeln!(out, "{INDENT}\"{}\",", self.type_name(&names, &record.name))?;
            }
            writeln!(out, "];")?;
        }
        out.push('\n');

        writeln!(out, "/// Root of every generated record type")?;
        writeln!(out, "#[derive(Debug, Clone, Default)]")?;
        writeln!(out, "pub struct {};", self.options.root_type())?;

        for record in records {
            out.push('\n');
            self.emit_struct(&mut out, &names, record)?;
        }
        Ok(out)
    }

    /// Emit the loader section
    pub fn emit_loaders(&self, records: &[RecordType]) -> Result<String, CodegenError> {
        let rt = &self.options.runtime_crate;
        let names = NameTable::new(records);
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');

        writeln!(out, "impl {} {{", self.options.root_type())?;
        writeln!(out, "{INDENT}pub fn load(&mut self, _e: &{rt}::Element) {{}}")?;
        writeln!(out, "}}")?;

        for record in records {
            out.push('\n');
            self.emit_loader(&mut out, &names, record)?;
        }
        Ok(out)
    }

    /// Rust type name of a record, as assigned by `names`
    fn type_name(&self, names: &NameTable, schema_name: &str) -> String {
        format!("{}{}", self.options.prefix, names.stem(schema_name))
    }

    fn base_type(&self, names: &NameTable, record: &RecordType) -> String {
        match &record.base {
            Some(base) => self.type_name(names, base),
            None => self.options.root_type(),
        }
    }

    fn emit_struct(&self, out: &mut String, names: &NameTable, record: &RecordType) -> Result<(), CodegenError> {
        let name = self.type_name(names, &record.name);
        let base = self.base_type(names, record);
        let fields = names.fields(record);

        writeln!(out, "#[derive(Debug, Clone, Default)]")?;
        writeln!(out, "pub struct {name} {{")?;
        writeln!(out, "{INDENT}base: {base},")?;
        for (property, field) in record.properties.iter().zip(&fields) {
            writeln!(out, "{INDENT}{}: {},", field.field, self.field_type(names, property))?;
        }
        writeln!(out, "}}")?;
        out.push('\n');

        writeln!(out, "impl {name} {{")?;
        writeln!(out, "{INDENT}pub fn new() -> Self {{")?;
        writeln!(out, "{INDENT}{INDENT}Self::default()")?;
        writeln!(out, "{INDENT}}}")?;
        for (property, field) in record.properties.iter().zip(&fields) {
            self.emit_accessors(out, names, property, field)?;
        }
        writeln!(out, "}}")?;
        out.push('\n');

        writeln!(out, "impl Deref for {name} {{")?;
        writeln!(out, "{INDENT}type Target = {base};")?;
        out.push('\n');
        writeln!(out, "{INDENT}fn deref(&self) -> &Self::Target {{")?;
        writeln!(out, "{INDENT}{INDENT}&self.base")?;
        writeln!(out, "{INDENT}}}")?;
        writeln!(out, "}}")?;
        out.push('\n');

        writeln!(out, "impl DerefMut for {name} {{")?;
        writeln!(out, "{INDENT}fn deref_mut(&mut self) -> &mut Self::Target {{")?;
        writeln!(out, "{INDENT}{INDENT}&mut self.base")?;
        writeln!(out, "{INDENT}}}")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    fn emit_accessors(
        &self,
        out: &mut String,
        names: &NameTable,
        property: &Property,
        members: &FieldNames,
    ) -> Result<(), CodegenError> {
        let field = &members.field;
        let ty = self.field_type(names, property);
        let multiple = property.multiple_occurrences_allowed();

        let (getter_ty, getter_body) = match &property.ty {
            _ if multiple || property.ty.is_list() => (format!("&{ty}"), format!("&self.{field}")),
            TypeDescriptor::String => ("&str".to_string(), format!("&self.{field}")),
            TypeDescriptor::Custom(_) => (
                format!("Option<&Rc<{}>>", self.element_type(names, &property.ty)),
                format!("self.{field}.as_ref()"),
            ),
            _ => (ty.clone(), format!("self.{field}")),
        };

        out.push('\n');
        writeln!(out, "{INDENT}pub fn {field}(&self) -> {getter_ty} {{")?;
        writeln!(out, "{INDENT}{INDENT}{getter_body}")?;
        writeln!(out, "{INDENT}}}")?;

        if multiple || property.ty.is_list() {
            out.push('\n');
            writeln!(out, "{INDENT}pub fn {}(&mut self) -> &mut {ty} {{", members.mutable)?;
            writeln!(out, "{INDENT}{INDENT}&mut self.{field}")?;
            writeln!(out, "{INDENT}}}")?;
        }

        out.push('\n');
        writeln!(out, "{INDENT}pub fn {}(&mut self, {field}: {ty}) {{", members.setter)?;
        writeln!(out, "{INDENT}{INDENT}self.{field} = {field};")?;
        writeln!(out, "{INDENT}}}")?;
        Ok(())
    }

    fn emit_loader(&self, out: &mut String, names: &NameTable, record: &RecordType) -> Result<(), CodegenError> {
        let rt = &self.options.runtime_crate;

        writeln!(out, "impl {} {{", self.type_name(names, &record.name))?;
        writeln!(out, "{INDENT}pub fn load(&mut self, e: &{rt}::Element) {{")?;
        writeln!(out, "{INDENT}{INDENT}self.base.load(e);")?;

        let body = INDENT.repeat(2);
        let inner = INDENT.repeat(3);
        for (property, members) in record.properties.iter().zip(names.fields(record)) {
            let field = members.field;
            let tag = escape(&property.name);

            let parse = parse_function(&property.ty).map(|f| format!("{rt}::{f}(&child.text())"));

            if property.multiple_occurrences_allowed() {
                writeln!(out, "{body}for child in e.same_tag_run(\"{tag}\") {{")?;
                match parse {
                    Some(call) => writeln!(out, "{inner}self.{field}.push({call});")?,
                    None => {
                        self.emit_custom_load(out, names, &inner, &property.ty)?;
                        writeln!(out, "{inner}self.{field}.push(Rc::new(value));")?;
                    }
                }
            } else {
                writeln!(out, "{body}if let Some(child) = e.first_child_named(\"{tag}\") {{")?;
                match parse {
                    Some(call) => writeln!(out, "{inner}self.{field} = {call};")?,
                    None => {
                        self.emit_custom_load(out, names, &inner, &property.ty)?;
                        writeln!(out, "{inner}self.{field} = Some(Rc::new(value));")?;
                    }
                }
            }
            writeln!(out, "{body}}}")?;
        }

        writeln!(out, "{INDENT}}}")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    fn emit_custom_load(
        &self,
        out: &mut String,
        names: &NameTable,
        indent: &str,
        ty: &TypeDescriptor,
    ) -> Result<(), CodegenError> {
        writeln!(out, "{indent}let mut value = {}::new();", self.element_type(names, ty))?;
        writeln!(out, "{indent}value.load(child);")?;
        Ok(())
    }

    /// Rust type of one value of a property
    fn element_type(&self, names: &NameTable, ty: &TypeDescriptor) -> String {
        let rt = &self.options.runtime_crate;
        match ty {
            TypeDescriptor::Boolean => "bool".to_string(),
            TypeDescriptor::Double => "f64".to_string(),
            TypeDescriptor::Integer => "i32".to_string(),
            TypeDescriptor::String => "String".to_string(),
            TypeDescriptor::Timestamp => format!("{rt}::Timestamp"),
            TypeDescriptor::DoubleList => "Vec<f64>".to_string(),
            TypeDescriptor::IntegerList => "Vec<i32>".to_string(),
            TypeDescriptor::StringList => "Vec<String>".to_string(),
            TypeDescriptor::Custom(name) => self.type_name(names, name),
        }
    }

    /// Rust type of the field holding a property
    fn field_type(&self, names: &NameTable, property: &Property) -> String {
        let element = self.element_type(names, &property.ty);
        match (&property.ty, property.multiple_occurrences_allowed()) {
            (TypeDescriptor::Custom(_), false) => format!("Option<Rc<{element}>>"),
            (TypeDescriptor::Custom(_), true) => format!("Vec<Rc<{element}>>"),
            (_, true) => format!("Vec<{element}>"),
            (_, false) => element,
        }
    }
}

/// Runtime parse function for a primitive type; custom types are loaded recursively
fn parse_function(ty: &TypeDescriptor) -> Option<&'static str> {
    let function = match ty {
        TypeDescriptor::Boolean => "parse_boolean",
        TypeDescriptor::Double => "parse_double",
        TypeDescriptor::Integer => "parse_int",
        TypeDescriptor::String => "parse_string",
        TypeDescriptor::Timestamp => "parse_date_time",
        TypeDescriptor::DoubleList => "parse_double_list",
        TypeDescriptor::IntegerList => "parse_int_list",
        TypeDescriptor::StringList => "parse_string_list",
        TypeDescriptor::Custom(_) => return None,
    };
    Some(function)
}

/// Escape a tag name for a Rust string literal
fn escape(tag: &str) -> String {
    tag.escape_default().to_string()
}
