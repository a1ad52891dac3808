//! Reference and naming checks run before emission

use crate::naming::NameTable;
use schemagen_diagnostics::{Diagnostic, SG0106};
use schemagen_model::RecordType;
use std::collections::{HashMap, HashSet};

/// Report record and base names that no record type defines, inheritance
/// cycles, and schema names renamed to keep Rust names unique
///
/// Emission goes ahead regardless; the generated code will not compile until
/// the missing types are supplied.
pub fn check_references(records: &[RecordType]) -> Vec<Diagnostic> {
    let by_name: HashMap<&str, &RecordType> = records.iter().map(|r| (r.name.as_str(), r)).collect();
    let mut diagnostics = Vec::new();

    for record in records {
        if let Some(base) = record.base.as_deref() {
            if !by_name.contains_key(base) {
                diagnostics.push(
                    Diagnostic::warning(SG0106, format!("Base type {base} of {} is not defined", record.name))
                        .with_help("declare the base complexType or include the schema that defines it"),
                );
            }
        }

        for property in &record.properties {
            if let Some(name) = property.ty.custom_name() {
                if !by_name.contains_key(name) {
                    diagnostics.push(Diagnostic::warning(
                        SG0106,
                        format!("Type {name} of property {}.{} is not defined", record.name, property.name),
                    ));
                }
            }
        }
    }

    let mut reported = HashSet::new();
    for record in records {
        if let Some(cycle) = inheritance_cycle(record, &by_name) {
            if cycle.iter().any(|name| reported.contains(name)) {
                continue;
            }
            reported.extend(cycle.iter().cloned());
            diagnostics.push(Diagnostic::warning(
                SG0106,
                format!("Inheritance cycle: {}", cycle.join(" -> ")),
            ));
        }
    }

    diagnostics.extend(NameTable::new(records).into_diagnostics());
    diagnostics
}

/// Follow base links from `record`; returns the loop if one is reached
fn inheritance_cycle(record: &RecordType, by_name: &HashMap<&str, &RecordType>) -> Option<Vec<String>> {
    let mut chain: Vec<&str> = vec![record.name.as_str()];
    let mut current = record;
    while let Some(base) = current.base.as_deref() {
        if let Some(pos) = chain.iter().position(|n| *n == base) {
            let mut cycle: Vec<String> = chain[pos..].iter().map(|n| n.to_string()).collect();
            cycle.push(base.to_string());
            return (pos == 0).then_some(cycle);
        }
        chain.push(base);
        current = by_name.get(base)?;
    }
    None
}
