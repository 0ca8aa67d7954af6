use std::{fmt, fmt::Write as _, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{NamingStyle, ScalarType, map_declared_type};
use crate::{
    error::{GenerateError, GenerateResult, UnmappedTypeWarning},
    schema::{ColumnDescriptor, TableGroup},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum TargetLanguage {
    #[default]
    #[serde(rename = "csharp")]
    CSharp,
    #[serde(rename = "rust")]
    Rust,
}

impl TargetLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "csharp",
            TargetLanguage::Rust => "rust",
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            TargetLanguage::CSharp => "cs",
            TargetLanguage::Rust => "rs",
        }
    }

    pub fn type_name(self, scalar: ScalarType) -> &'static str {
        match self {
            TargetLanguage::CSharp => match scalar {
                ScalarType::Int32 => "int",
                ScalarType::Int64 => "long",
                ScalarType::Int16 => "short",
                ScalarType::UInt8 => "byte",
                ScalarType::Boolean => "bool",
                ScalarType::Decimal => "decimal",
                ScalarType::Float64 => "double",
                ScalarType::Float32 => "float",
                ScalarType::DateTime => "DateTime",
                ScalarType::Text => "string",
                ScalarType::Guid => "Guid",
                ScalarType::Bytes => "byte[]",
                ScalarType::Object => "object",
            },
            TargetLanguage::Rust => match scalar {
                ScalarType::Int32 => "i32",
                ScalarType::Int64 => "i64",
                ScalarType::Int16 => "i16",
                ScalarType::UInt8 => "u8",
                ScalarType::Boolean => "bool",
                ScalarType::Decimal => "rust_decimal::Decimal",
                ScalarType::Float64 => "f64",
                ScalarType::Float32 => "f32",
                ScalarType::DateTime => "chrono::NaiveDateTime",
                ScalarType::Text => "String",
                ScalarType::Guid => "uuid::Uuid",
                ScalarType::Bytes => "Vec<u8>",
                ScalarType::Object => "serde_json::Value",
            },
        }
    }

    /// Resolves a field type, applying the nullable wrapper when the column
    /// allows null and the kind has no null of its own.
    pub fn field_type(self, scalar: ScalarType, nullable: bool) -> String {
        let name = self.type_name(scalar);
        if !(nullable && scalar.wraps_when_nullable()) {
            return name.to_string();
        }
        match self {
            TargetLanguage::CSharp => format!("{name}?"),
            TargetLanguage::Rust => format!("Option<{name}>"),
        }
    }

    fn field_line(self, name: &str, ty: &str) -> String {
        match self {
            TargetLanguage::CSharp => format!("\tpublic {ty} {name} {{ get; set; }}"),
            TargetLanguage::Rust => format!("    pub {}: {ty},", rust_ident(name)),
        }
    }

    fn render(
        self,
        namespace: &str,
        type_name: &str,
        fields: &[String],
    ) -> Result<String, fmt::Error> {
        let mut out = String::new();
        match self {
            TargetLanguage::CSharp => {
                writeln!(out)?;
                writeln!(out, "namespace {namespace};")?;
                writeln!(out, "public class {type_name}")?;
                writeln!(out, "{{")?;
                for field in fields {
                    writeln!(out, "{field}")?;
                }
                writeln!(out, "}}")?;
            }
            TargetLanguage::Rust => {
                writeln!(out, "// namespace: {namespace}")?;
                writeln!(out)?;
                writeln!(out, "#[allow(non_snake_case)]")?;
                writeln!(out, "#[derive(Debug, Clone)]")?;
                writeln!(out, "pub struct {} {{", rust_ident(type_name))?;
                for field in fields {
                    writeln!(out, "{field}")?;
                }
                writeln!(out, "}}")?;
            }
        }
        Ok(out)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csharp" | "c#" | "cs" => Ok(TargetLanguage::CSharp),
            "rust" | "rs" => Ok(TargetLanguage::Rust),
            other => Err(format!(
                "unknown target language '{other}'; expected csharp or rust"
            )),
        }
    }
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "gen", "macro", "override",
    "priv", "try", "typeof", "unsized", "virtual", "yield",
];

// `self`, `Self`, `super` and `crate` cannot be raw identifiers.
fn rust_ident(name: &str) -> String {
    match name {
        "self" | "Self" | "super" | "crate" => format!("{name}_"),
        _ if RUST_KEYWORDS.contains(&name) => format!("r#{name}"),
        _ => name.to_string(),
    }
}

/// One rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedType {
    pub type_name: String,
    pub file_name: String,
    /// Field declarations in column order.
    pub fields: Vec<String>,
    pub source: String,
    pub unmapped: Vec<UnmappedTypeWarning>,
}

#[derive(Debug, Clone)]
pub struct ClassEmitter {
    namespace: String,
    language: TargetLanguage,
    naming: NamingStyle,
}

impl ClassEmitter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            language: TargetLanguage::default(),
            naming: NamingStyle::default(),
        }
    }

    pub fn with_language(mut self, language: TargetLanguage) -> Self {
        self.language = language;
        self
    }

    pub fn with_naming(mut self, naming: NamingStyle) -> Self {
        self.naming = naming;
        self
    }

    pub fn language(&self) -> TargetLanguage {
        self.language
    }

    pub fn emit(&self, group: &TableGroup) -> GenerateResult<EmittedType> {
        let type_name = self.naming.apply(&group.table_name).into_owned();
        let mut fields = Vec::with_capacity(group.columns.len());
        let mut unmapped = Vec::new();

        for column in &group.columns {
            let (line, warning) = self.field(column);
            fields.push(line);
            unmapped.extend(warning);
        }

        let source = self
            .language
            .render(&self.namespace, &type_name, &fields)
            .map_err(|source| GenerateError::Render {
                table: group.table_name.clone(),
                source,
            })?;

        Ok(EmittedType {
            file_name: format!("{type_name}.{}", self.language.file_extension()),
            type_name,
            fields,
            source,
            unmapped,
        })
    }

    fn field(&self, column: &ColumnDescriptor) -> (String, Option<UnmappedTypeWarning>) {
        let scalar = map_declared_type(&column.declared_type);
        let ty = self.language.field_type(scalar, column.is_nullable);
        let name = self.naming.apply(&column.column_name);
        let warning = scalar.is_fallback().then(|| UnmappedTypeWarning {
            table: column.table_name.clone(),
            column: column.column_name.clone(),
            declared_type: column.declared_type.clone(),
        });
        (self.language.field_line(&name, &ty), warning)
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassEmitter, TargetLanguage};
    use crate::{
        codegen::{NamingStyle, ScalarType},
        schema::{ColumnDescriptor, TableGroup},
    };

    fn customer() -> TableGroup {
        TableGroup {
            table_name: "Customer".to_string(),
            columns: vec![
                ColumnDescriptor::new("Customer", "Id", "int", false),
                ColumnDescriptor::new("Customer", "Name", "nvarchar", true),
                ColumnDescriptor::new("Customer", "Balance", "decimal", true),
            ],
        }
    }

    #[test]
    fn renders_csharp_class_for_customer() {
        let emitted = ClassEmitter::new("DBClassGenerator")
            .emit(&customer())
            .expect("render should succeed");

        assert_eq!(emitted.type_name, "Customer");
        assert_eq!(emitted.file_name, "Customer.cs");
        assert_eq!(
            emitted.source,
            "\nnamespace DBClassGenerator;\npublic class Customer\n{\n\
             \tpublic int Id { get; set; }\n\
             \tpublic string Name { get; set; }\n\
             \tpublic decimal? Balance { get; set; }\n\
             }\n"
        );
        assert!(emitted.unmapped.is_empty());
    }

    #[test]
    fn non_nullable_columns_are_never_wrapped() {
        for scalar in [
            ScalarType::Int64,
            ScalarType::Bytes,
            ScalarType::Object,
            ScalarType::Text,
        ] {
            let ty = TargetLanguage::CSharp.field_type(scalar, false);
            assert!(!ty.ends_with('?'), "{ty}");
            let ty = TargetLanguage::Rust.field_type(scalar, false);
            assert!(!ty.starts_with("Option<"), "{ty}");
        }
    }

    #[test]
    fn nullable_text_stays_unwrapped_in_every_language() {
        assert_eq!(TargetLanguage::CSharp.field_type(ScalarType::Text, true), "string");
        assert_eq!(TargetLanguage::Rust.field_type(ScalarType::Text, true), "String");
    }

    #[test]
    fn nullable_binary_is_wrapped() {
        assert_eq!(TargetLanguage::CSharp.field_type(ScalarType::Bytes, true), "byte[]?");
        assert_eq!(
            TargetLanguage::Rust.field_type(ScalarType::Bytes, true),
            "Option<Vec<u8>>"
        );
    }

    #[test]
    fn unmapped_type_falls_back_and_records_one_warning() {
        let group = TableGroup {
            table_name: "Store".to_string(),
            columns: vec![
                ColumnDescriptor::new("Store", "Id", "int", false),
                ColumnDescriptor::new("Store", "Location", "geography", true),
            ],
        };

        let emitted = ClassEmitter::new("Ns").emit(&group).expect("render should succeed");

        assert_eq!(emitted.fields[1], "\tpublic object? Location { get; set; }");
        assert_eq!(emitted.unmapped.len(), 1);
        assert_eq!(emitted.unmapped[0].column, "Location");
        assert_eq!(emitted.unmapped[0].declared_type, "geography");
    }

    #[test]
    fn field_order_follows_the_group() {
        let group = TableGroup {
            table_name: "T".to_string(),
            columns: vec![
                ColumnDescriptor::new("T", "c", "int", false),
                ColumnDescriptor::new("T", "a", "int", false),
                ColumnDescriptor::new("T", "b", "int", false),
            ],
        };

        let emitted = ClassEmitter::new("Ns").emit(&group).expect("render should succeed");
        let names: Vec<&str> = emitted
            .fields
            .iter()
            .map(|line| line.split_whitespace().nth(2).unwrap_or_default())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn table_without_columns_renders_an_empty_body() {
        let emitted = ClassEmitter::new("Ns")
            .emit(&TableGroup::new("Empty"))
            .expect("render should succeed");

        assert!(emitted.fields.is_empty());
        assert!(emitted.source.ends_with("public class Empty\n{\n}\n"));
    }

    #[test]
    fn names_are_verbatim_by_default() {
        let group = TableGroup {
            table_name: "order_details".to_string(),
            columns: vec![ColumnDescriptor::new("order_details", "unit_price", "money", false)],
        };

        let emitted = ClassEmitter::new("Ns").emit(&group).expect("render should succeed");
        assert_eq!(emitted.type_name, "order_details");
        assert_eq!(emitted.fields[0], "\tpublic decimal unit_price { get; set; }");
    }

    #[test]
    fn pascal_case_naming_is_opt_in() {
        let group = TableGroup {
            table_name: "order_details".to_string(),
            columns: vec![ColumnDescriptor::new("order_details", "unit_price", "money", false)],
        };

        let emitted = ClassEmitter::new("Ns")
            .with_naming(NamingStyle::PascalCase)
            .emit(&group)
            .expect("render should succeed");
        assert_eq!(emitted.type_name, "OrderDetails");
        assert_eq!(emitted.file_name, "OrderDetails.cs");
        assert_eq!(emitted.fields[0], "\tpublic decimal UnitPrice { get; set; }");
    }

    #[test]
    fn renders_rust_struct() {
        let mut group = customer();
        group
            .columns
            .push(ColumnDescriptor::new("Customer", "type", "uniqueidentifier", true));

        let emitted = ClassEmitter::new("DBClassGenerator")
            .with_language(TargetLanguage::Rust)
            .emit(&group)
            .expect("render should succeed");

        assert_eq!(emitted.file_name, "Customer.rs");
        assert_eq!(
            emitted.source,
            "// namespace: DBClassGenerator\n\n\
             #[allow(non_snake_case)]\n\
             #[derive(Debug, Clone)]\n\
             pub struct Customer {\n    \
             pub Id: i32,\n    \
             pub Name: String,\n    \
             pub Balance: Option<rust_decimal::Decimal>,\n    \
             pub r#type: Option<uuid::Uuid>,\n\
             }\n"
        );
    }

    #[test]
    fn emission_is_byte_identical_across_runs() {
        let emitter = ClassEmitter::new("Ns");
        let first = emitter.emit(&customer()).expect("render should succeed");
        let second = emitter.emit(&customer()).expect("render should succeed");
        assert_eq!(first, second);
    }

    #[test]
    fn rust_keyword_table_name_is_escaped() {
        let group = TableGroup {
            table_name: "type".to_string(),
            columns: vec![ColumnDescriptor::new("type", "self", "int", false)],
        };

        let emitted = ClassEmitter::new("Ns")
            .with_language(TargetLanguage::Rust)
            .emit(&group)
            .expect("render should succeed");

        assert_eq!(emitted.type_name, "type");
        assert_eq!(emitted.file_name, "type.rs");
        assert!(emitted.source.contains("pub struct r#type {\n"));
        assert!(emitted.source.contains("    pub self_: i32,\n"));
    }

    #[test]
    fn parses_language_names() {
        assert_eq!("CSharp".parse::<TargetLanguage>(), Ok(TargetLanguage::CSharp));
        assert_eq!("rust".parse::<TargetLanguage>(), Ok(TargetLanguage::Rust));
        assert!("java".parse::<TargetLanguage>().is_err());
    }
}
