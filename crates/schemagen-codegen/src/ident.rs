//! Mapping schema names to Rust identifiers

/// Rust keywords usable as raw identifiers
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do", "dyn", "else", "enum",
    "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "macro", "match", "mod",
    "move", "mut", "override", "priv", "pub", "ref", "return", "static", "struct", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Names that cannot be raw identifiers, or that clash with generated members
const RESERVED: &[&str] = &["self", "Self", "super", "crate", "base", "new", "load", "default"];

/// Field and accessor names for one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Field and getter identifier, raw when it is a keyword
    pub field: String,
    pub setter: String,
    pub mutable: String,
}

impl FieldNames {
    pub fn for_property(name: &str) -> Self {
        Self::from_snake(snake_case(name))
    }

    /// Names with a numeric suffix, for a property whose plain names are taken
    pub fn numbered(name: &str, n: usize) -> Self {
        Self::from_snake(format!("{}_{n}", snake_case(name)))
    }

    fn from_snake(snake: String) -> Self {
        let field = if KEYWORDS.contains(&snake.as_str()) {
            format!("r#{snake}")
        } else {
            snake.clone()
        };
        Self {
            field,
            setter: format!("set_{snake}"),
            mutable: format!("{snake}_mut"),
        }
    }

    /// Field or getter name without the raw identifier marker
    pub fn plain(&self) -> &str {
        self.field.strip_prefix("r#").unwrap_or(&self.field)
    }

    /// Every name these occupy in the record's field list and impl block
    pub fn members(&self) -> [&str; 3] {
        [self.plain(), self.setter.as_str(), self.mutable.as_str()]
    }
}

/// Convert a schema name to `snake_case`
///
/// Word boundaries are lower-to-upper transitions, the end of an acronym
/// (`GPSEpoch` becomes `gps_epoch`) and any non-alphanumeric character.
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            push_separator(&mut out);
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() || (prev.is_ascii_uppercase() && next_is_lower) {
                push_separator(&mut out);
            }
        }
        out.push(c.to_ascii_lowercase());
    }

    let trimmed = out.trim_matches('_');
    let mut ident = if trimmed.is_empty() {
        "field".to_string()
    } else if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{trimmed}")
    } else {
        trimmed.to_string()
    };
    if RESERVED.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Convert a schema name to `UpperCamelCase`
pub fn upper_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split(|c: char| !c.is_ascii_alphanumeric()).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

/// Check that `s` is a plain (non-keyword) identifier
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && s != "_"
        && !KEYWORDS.contains(&s)
        && !RESERVED[..4].contains(&s)
}

/// Check that `s` is a usable path such as `schemagen_dom` or `crate::dom`
pub fn is_path(s: &str) -> bool {
    let mut segments = s.split("::");
    let first_ok = segments
        .next()
        .is_some_and(|first| matches!(first, "crate" | "self" | "super") || is_identifier(first));
    first_ok && segments.all(|seg| seg == "super" || is_identifier(seg))
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('_') {
        out.push('_');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Name", "name")]
    #[case("count", "count")]
    #[case("StartTime", "start_time")]
    #[case("GPSEpoch", "gps_epoch")]
    #[case("ListOfDouble", "list_of_double")]
    #[case("Vector3D", "vector3_d")]
    #[case("x-axis.value", "x_axis_value")]
    #[case("3rdBody", "_3rd_body")]
    #[case("__", "field")]
    #[case("Base", "base_")]
    #[case("self", "self_")]
    #[case("Default", "default_")]
    fn test_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(snake_case(input), expected);
    }

    #[rstest]
    #[case("Foo", "Foo")]
    #[case("trajectory", "Trajectory")]
    #[case("initial_state", "InitialState")]
    #[case("GPSEpoch", "GPSEpoch")]
    #[case("two-body.model", "TwoBodyModel")]
    fn test_upper_camel_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(upper_camel_case(input), expected);
    }

    #[test]
    fn test_keyword_fields_use_raw_identifiers() {
        let names = FieldNames::for_property("Type");
        assert_eq!(names.field, "r#type");
        assert_eq!(names.setter, "set_type");
        assert_eq!(names.mutable, "type_mut");
        assert_eq!(names.members(), ["type", "set_type", "type_mut"]);
    }

    #[test]
    fn test_numbered_names() {
        let names = FieldNames::numbered("Name", 2);
        assert_eq!(names.field, "name_2");
        assert_eq!(names.setter, "set_name_2");
        assert_eq!(names.mutable, "name_2_mut");
    }

    #[rstest]
    #[case("schemagen_dom", true)]
    #[case("crate::dom", true)]
    #[case("super::super::runtime", true)]
    #[case("my-crate", false)]
    #[case("a::", false)]
    #[case("", false)]
    #[case("dom::type", false)]
    fn test_is_path(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_path(input), expected);
    }

    proptest! {
        #[test]
        fn snake_case_yields_identifier(name in "[A-Za-z0-9_.-]{0,24}") {
            let names = FieldNames::for_property(&name);
            let plain = names.plain();
            prop_assert!(!plain.is_empty());
            prop_assert!(!plain.starts_with(|c: char| c.is_ascii_digit()));
            prop_assert!(plain.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
            prop_assert!(!RESERVED.contains(&plain));
        }

        #[test]
        fn snake_case_is_stable(name in "[A-Za-z][A-Za-z0-9]{0,16}") {
            let once = snake_case(&name);
            prop_assert_eq!(snake_case(&once), once.clone());
        }
    }
}
