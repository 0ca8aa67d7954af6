use sea_orm::{DatabaseBackend, DatabaseConnection, FromQueryResult, Statement, Value};
use tracing::debug;

use super::ColumnDescriptor;
use crate::error::{GenerateError, GenerateResult};

const INFORMATION_SCHEMA_COLUMNS_POSTGRES: &str = r#"
SELECT
    CAST(t.table_name AS TEXT) AS table_name,
    CAST(c.column_name AS TEXT) AS column_name,
    CAST(c.data_type AS TEXT) AS data_type,
    CAST(c.is_nullable AS TEXT) AS is_nullable,
    CAST(c.character_maximum_length AS BIGINT) AS character_maximum_length,
    CAST(c.ordinal_position AS BIGINT) AS ordinal_position
FROM information_schema.tables t
INNER JOIN information_schema.columns c
    ON t.table_schema = c.table_schema
    AND t.table_name = c.table_name
WHERE t.table_type = 'BASE TABLE'
    AND t.table_schema NOT IN ('pg_catalog', 'information_schema')"#;

const INFORMATION_SCHEMA_COLUMNS_MYSQL: &str = r#"
SELECT
    CAST(t.TABLE_NAME AS CHAR) AS table_name,
    CAST(c.COLUMN_NAME AS CHAR) AS column_name,
    CAST(c.DATA_TYPE AS CHAR) AS data_type,
    CAST(c.IS_NULLABLE AS CHAR) AS is_nullable,
    CAST(c.CHARACTER_MAXIMUM_LENGTH AS SIGNED) AS character_maximum_length,
    CAST(c.ORDINAL_POSITION AS SIGNED) AS ordinal_position
FROM INFORMATION_SCHEMA.TABLES t
INNER JOIN INFORMATION_SCHEMA.COLUMNS c
    ON t.TABLE_SCHEMA = c.TABLE_SCHEMA
    AND t.TABLE_NAME = c.TABLE_NAME
WHERE t.TABLE_TYPE = 'BASE TABLE'
    AND t.TABLE_SCHEMA NOT IN ('mysql', 'information_schema', 'performance_schema', 'sys')"#;

const TABLE_INFO_SQLITE: &str = r#"
SELECT
    m.name AS table_name,
    p.name AS column_name,
    p.type AS data_type,
    CASE WHEN p."notnull" = 0 AND p.pk = 0 THEN 'YES' ELSE 'NO' END AS is_nullable,
    CAST(NULL AS INTEGER) AS character_maximum_length,
    p.cid + 1 AS ordinal_position
FROM sqlite_master m
INNER JOIN pragma_table_info(m.name) p
WHERE m.type = 'table'
    AND m.name NOT LIKE 'sqlite_%'
ORDER BY m.name, p.cid"#;

#[derive(Debug, FromQueryResult)]
struct CatalogRow {
    table_name: String,
    column_name: String,
    data_type: String,
    is_nullable: String,
    character_maximum_length: Option<i64>,
    ordinal_position: i64,
}

impl From<CatalogRow> for ColumnDescriptor {
    fn from(row: CatalogRow) -> Self {
        Self {
            table_name: row.table_name,
            column_name: row.column_name,
            declared_type: row.data_type,
            is_nullable: row.is_nullable.trim().eq_ignore_ascii_case("YES"),
            max_length: row.character_maximum_length,
            ordinal_position: row.ordinal_position,
        }
    }
}

/// Reads base-table columns from the catalog of an open connection.
pub struct SchemaReader<'a> {
    db: &'a DatabaseConnection,
    schema: Option<String>,
}

impl<'a> SchemaReader<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db, schema: None }
    }

    pub fn with_schema(mut self, schema: Option<String>) -> Self {
        self.schema = schema;
        self
    }

    /// Builds the single catalog query for the connection's backend. Rows come
    /// back ordered by table name, then by column ordinal position.
    pub fn catalog_statement(&self) -> Statement {
        let backend = self.db.get_database_backend();
        match backend {
            DatabaseBackend::Sqlite => Statement::from_string(backend, TABLE_INFO_SQLITE),
            DatabaseBackend::MySql => {
                let order = "\nORDER BY t.TABLE_NAME, c.ORDINAL_POSITION";
                match self.schema.as_deref() {
                    Some(schema) => Statement::from_sql_and_values(
                        backend,
                        format!("{INFORMATION_SCHEMA_COLUMNS_MYSQL}\n    AND t.TABLE_SCHEMA = ?{order}"),
                        [Value::from(schema)],
                    ),
                    None => Statement::from_string(
                        backend,
                        format!(
                            "{INFORMATION_SCHEMA_COLUMNS_MYSQL}\n    AND t.TABLE_SCHEMA = DATABASE(){order}"
                        ),
                    ),
                }
            }
            _ => {
                let order = "\nORDER BY t.table_name, t.table_schema, c.ordinal_position";
                match self.schema.as_deref() {
                    Some(schema) => Statement::from_sql_and_values(
                        backend,
                        format!("{INFORMATION_SCHEMA_COLUMNS_POSTGRES}\n    AND t.table_schema = $1{order}"),
                        [Value::from(schema)],
                    ),
                    None => Statement::from_string(
                        backend,
                        format!("{INFORMATION_SCHEMA_COLUMNS_POSTGRES}{order}"),
                    ),
                }
            }
        }
    }

    /// Runs the catalog query once. Failures are not retried.
    pub async fn read(&self) -> GenerateResult<Vec<ColumnDescriptor>> {
        let rows = CatalogRow::find_by_statement(self.catalog_statement())
            .all(self.db)
            .await
            .map_err(GenerateError::from_query)?;

        debug!(rows = rows.len(), "read catalog metadata");
        Ok(rows.into_iter().map(ColumnDescriptor::from).collect())
    }
}
