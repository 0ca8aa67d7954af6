/// One catalog row: a column together with the table that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub table_name: String,
    pub column_name: String,
    /// Storage type as the catalog reports it, e.g. `nvarchar`. Compared
    /// case-insensitively.
    pub declared_type: String,
    pub is_nullable: bool,
    /// Character length for text columns. Carried along but not used for
    /// type mapping.
    pub max_length: Option<i64>,
    pub ordinal_position: i64,
}

impl ColumnDescriptor {
    pub fn new(
        table_name: impl Into<String>,
        column_name: impl Into<String>,
        declared_type: impl Into<String>,
        is_nullable: bool,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            column_name: column_name.into(),
            declared_type: declared_type.into(),
            is_nullable,
            max_length: None,
            ordinal_position: 0,
        }
    }

    pub fn with_max_length(mut self, max_length: Option<i64>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_ordinal_position(mut self, ordinal_position: i64) -> Self {
        self.ordinal_position = ordinal_position;
        self
    }
}
