//! Unique Rust names for record types and their members
//!
//! Schema names are case-sensitive and may contain punctuation, so two of
//! them can map to the same Rust name (`Name` and `name` both become the
//! field `name`). Names are assigned in declaration order and a later name
//! that is already taken gets a numeric suffix, reported as SG0108.

use crate::ident::{FieldNames, upper_camel_case};
use schemagen_diagnostics::{Diagnostic, SG0108};
use schemagen_model::RecordType;
use std::collections::{HashMap, HashSet};

/// Type name stem of the implicit root record
pub const ROOT_STEM: &str = "Object";

/// Stem used when a record name has no alphanumeric characters
const FALLBACK_STEM: &str = "Record";

/// Rust names assigned to a list of record types
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    stems: HashMap<String, String>,
    members: HashMap<String, Vec<FieldNames>>,
    diagnostics: Vec<Diagnostic>,
}

impl NameTable {
    pub fn new(records: &[RecordType]) -> Self {
        let mut table = Self::default();
        let mut taken: HashSet<String> = HashSet::from([ROOT_STEM.to_string()]);

        for record in records {
            let plain = plain_stem(&record.name);
            let mut stem = plain.clone();
            let mut n = 2;
            while taken.contains(&stem) {
                stem = format!("{plain}{n}");
                n += 1;
            }
            if stem != plain {
                table.diagnostics.push(
                    Diagnostic::warning(
                        SG0108,
                        format!("Record type {} renamed to {stem}: {plain} is already taken", record.name),
                    )
                    .with_help(SG0108.info().help.unwrap_or_default()),
                );
            }
            taken.insert(stem.clone());
            table.stems.insert(record.name.clone(), stem);

            let members = table.assign_members(record);
            table.members.insert(record.name.clone(), members);
        }
        table
    }

    fn assign_members(&mut self, record: &RecordType) -> Vec<FieldNames> {
        let mut taken: HashSet<String> = HashSet::new();
        let mut assigned = Vec::with_capacity(record.properties.len());

        for property in &record.properties {
            let plain = FieldNames::for_property(&property.name);
            let mut names = plain.clone();
            let mut n = 2;
            while names.members().iter().any(|m| taken.contains(*m)) {
                names = FieldNames::numbered(&property.name, n);
                n += 1;
            }
            if names != plain {
                self.diagnostics.push(
                    Diagnostic::warning(
                        SG0108,
                        format!(
                            "Property {}.{} renamed to {}: {} is already taken",
                            record.name,
                            property.name,
                            names.plain(),
                            plain.plain()
                        ),
                    )
                    .with_help(SG0108.info().help.unwrap_or_default()),
                );
            }
            taken.extend(names.members().iter().map(|m| m.to_string()));
            assigned.push(names);
        }
        assigned
    }

    /// Type name stem of a record, without the prefix
    ///
    /// Names of unknown records map the same way as if they were declared.
    pub fn stem(&self, schema_name: &str) -> String {
        self.stems
            .get(schema_name)
            .cloned()
            .unwrap_or_else(|| plain_stem(schema_name))
    }

    /// Member names of a record's properties, in declaration order
    pub fn fields(&self, record: &RecordType) -> Vec<FieldNames> {
        match self.members.get(&record.name) {
            Some(members) if members.len() == record.properties.len() => members.clone(),
            _ => record.properties.iter().map(|p| FieldNames::for_property(&p.name)).collect(),
        }
    }

    /// One SG0108 warning per renamed type or property
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

fn plain_stem(schema_name: &str) -> String {
    let stem = upper_camel_case(schema_name);
    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schemagen_model::{Property, TypeDescriptor};

    fn fields(table: &NameTable, record: &RecordType) -> Vec<String> {
        table.fields(record).into_iter().map(|f| f.field).collect()
    }

    #[test]
    fn test_distinct_names_are_kept() {
        let records = vec![
            RecordType::new("Foo", None)
                .with_property(Property::new("Name", TypeDescriptor::String))
                .with_property(Property::new("Type", TypeDescriptor::String)),
        ];
        let table = NameTable::new(&records);
        assert_eq!(table.stem("Foo"), "Foo");
        assert_eq!(fields(&table, &records[0]), vec!["name", "r#type"]);
        assert!(table.diagnostics().is_empty());
    }

    #[test]
    fn test_case_variant_properties_get_suffix() {
        let records = vec![
            RecordType::new("Foo", None)
                .with_property(Property::new("Name", TypeDescriptor::String))
                .with_property(Property::new("name", TypeDescriptor::String))
                .with_property(Property::new("NAME", TypeDescriptor::String)),
        ];
        let table = NameTable::new(&records);

        assert_eq!(fields(&table, &records[0]), vec!["name", "name_2", "name_3"]);
        let messages: Vec<&str> = table.diagnostics().iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Property Foo.name renamed to name_2: name is already taken",
                "Property Foo.NAME renamed to name_3: name is already taken",
            ]
        );
        assert!(table.diagnostics().iter().all(|d| d.code == SG0108 && !d.is_error()));
    }

    #[test]
    fn test_getter_colliding_with_setter() {
        let records = vec![
            RecordType::new("Foo", None)
                .with_property(Property::new("Name", TypeDescriptor::String))
                .with_property(Property::new("SetName", TypeDescriptor::String))
                .with_property(Property::new("NameMut", TypeDescriptor::String)),
        ];
        let table = NameTable::new(&records);
        assert_eq!(fields(&table, &records[0]), vec!["name", "set_name_2", "name_mut_2"]);
        assert_eq!(table.diagnostics().len(), 2);
    }

    #[test]
    fn test_case_variant_records_get_suffix() {
        let records = vec![
            RecordType::new("Foo", None),
            RecordType::new("foo", None),
            RecordType::new("Object", None),
        ];
        let table = NameTable::new(&records);

        assert_eq!(table.stem("Foo"), "Foo");
        assert_eq!(table.stem("foo"), "Foo2");
        assert_eq!(table.stem("Object"), "Object2");
        assert_eq!(
            table.diagnostics()[0].message,
            "Record type foo renamed to Foo2: Foo is already taken"
        );
        assert!(table.diagnostics()[0].help.is_some());
    }

    #[test]
    fn test_undeclared_names_map_plainly() {
        let table = NameTable::new(&[RecordType::new("foo", None)]);
        assert_eq!(table.stem("Timeline"), "Timeline");
        assert_eq!(table.stem("--"), "Record");
    }
}
