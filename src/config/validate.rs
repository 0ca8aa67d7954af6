use anyhow::{Result, bail};

use super::GeneratorConfig;

pub fn validate(cfg: &GeneratorConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    match cfg.database.as_ref() {
        Some(database) => {
            if database.url.trim().is_empty() {
                errors.push("database.url must not be empty".to_string());
            }

            if database.max_connections == 0 {
                errors.push("database.max_connections must be > 0".to_string());
            }

            if database.min_idle > database.max_connections {
                errors.push(format!(
                    "database.min_idle ({}) must be <= database.max_connections ({})",
                    database.min_idle, database.max_connections
                ));
            }

            if let Some(schema) = database.schema.as_deref() {
                if schema.trim().is_empty() {
                    errors.push("database.schema must not be blank when set".to_string());
                }
            }
        }
        None => errors.push(
            "database.url is required (set POCO_DATABASE__URL or pass --database-url)"
                .to_string(),
        ),
    }

    if cfg.output.directory.as_os_str().is_empty() {
        errors.push("output.directory must not be empty".to_string());
    }

    if cfg.output.namespace.trim().is_empty() {
        errors.push("output.namespace must not be empty".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid generator config:\n- {}", errors.join("\n- "))
}
