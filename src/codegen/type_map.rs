/// Language-neutral scalar kinds a declared column type resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int32,
    Int64,
    Int16,
    UInt8,
    Boolean,
    Decimal,
    Float64,
    Float32,
    DateTime,
    Text,
    Guid,
    Bytes,
    /// Fallback for declared types with no mapping.
    Object,
}

impl ScalarType {
    /// Whether a nullable column of this kind gets an explicit nullable
    /// wrapper. Text is the only kind left unwrapped.
    pub fn wraps_when_nullable(self) -> bool {
        !matches!(self, ScalarType::Text)
    }

    pub fn is_fallback(self) -> bool {
        matches!(self, ScalarType::Object)
    }
}

/// Maps a catalog type name to its scalar kind. Matching ignores case,
/// surrounding whitespace and a trailing parameter list such as `(50)`.
/// Unknown names resolve to [`ScalarType::Object`].
pub fn map_declared_type(declared: &str) -> ScalarType {
    let normalized = normalize_declared_type(declared);
    match normalized.as_str() {
        "int" => ScalarType::Int32,
        "bigint" => ScalarType::Int64,
        "smallint" => ScalarType::Int16,
        "tinyint" => ScalarType::UInt8,
        "bit" => ScalarType::Boolean,
        "decimal" | "numeric" | "money" => ScalarType::Decimal,
        "float" => ScalarType::Float64,
        "real" => ScalarType::Float32,
        "datetime" | "smalldatetime" | "date" | "time" => ScalarType::DateTime,
        "char" | "nchar" | "nvarchar" | "varchar" | "ntext" => ScalarType::Text,
        "uniqueidentifier" => ScalarType::Guid,
        "varbinary" | "binary" | "image" => ScalarType::Bytes,
        other => map_backend_alias(other).unwrap_or(ScalarType::Object),
    }
}

// Postgres, MySQL and SQLite spellings of the same kinds.
fn map_backend_alias(normalized: &str) -> Option<ScalarType> {
    let mapped = match normalized {
        "integer" | "int4" | "mediumint" | "serial" => ScalarType::Int32,
        "int8" | "bigserial" => ScalarType::Int64,
        "int2" | "smallserial" => ScalarType::Int16,
        "boolean" | "bool" => ScalarType::Boolean,
        "double precision" | "double" | "float8" => ScalarType::Float64,
        "float4" => ScalarType::Float32,
        "timestamp"
        | "timestamp without time zone"
        | "timestamp with time zone"
        | "timestamptz"
        | "time without time zone"
        | "time with time zone"
        | "datetime2"
        | "datetimeoffset" => ScalarType::DateTime,
        "text" | "character varying" | "character" | "bpchar" | "tinytext" | "mediumtext"
        | "longtext" | "citext" | "nvarchar2" => ScalarType::Text,
        "uuid" => ScalarType::Guid,
        "bytea" | "blob" | "tinyblob" | "mediumblob" | "longblob" => ScalarType::Bytes,
        _ => return None,
    };
    Some(mapped)
}

fn normalize_declared_type(declared: &str) -> String {
    let trimmed = declared.trim();
    let base = match trimmed.find('(') {
        Some(open) => trimmed[..open].trim_end(),
        None => trimmed,
    };
    base.to_ascii_lowercase()
}
