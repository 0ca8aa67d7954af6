pub const DEFAULT_RUST_LOG: &str = "info";
pub const DEFAULT_DB_MAX_CONNECTIONS: i64 = 4;
pub const DEFAULT_DB_MIN_IDLE: i64 = 1;
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "Models";
pub const DEFAULT_NAMESPACE: &str = "DBClassGenerator";
