use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

/// Fatal failures. Each variant names the stage that stopped the run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(
        "unsupported database url '{0}'; expected scheme postgres://, postgresql://, mysql://, mariadb:// or sqlite:"
    )]
    UnsupportedDatabase(String),
    #[error("connection failed: {0}")]
    Connection(#[source] DbErr),
    #[error("catalog metadata query failed: {0}")]
    MetadataQuery(#[source] DbErr),
    #[error("failed to render type for table '{table}'")]
    Render {
        table: String,
        #[source]
        source: std::fmt::Error,
    },
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GenerateResult<T> = Result<T, GenerateError>;

impl GenerateError {
    /// Sorts a catalog query failure into the connection or query stage.
    pub fn from_query(err: DbErr) -> Self {
        match err {
            DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => Self::Connection(err),
            other => Self::MetadataQuery(other),
        }
    }
}

/// A declared type with no mapping. The column is emitted with the opaque
/// fallback type and generation continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedTypeWarning {
    pub table: String,
    pub column: String,
    pub declared_type: String,
}

impl std::fmt::Display for UnmappedTypeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} has unmapped type '{}'",
            self.table, self.column, self.declared_type
        )
    }
}
