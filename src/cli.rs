use std::path::PathBuf;

use clap::Parser;

use crate::{
    codegen::{NamingStyle, TargetLanguage},
    config::{DatabaseConfig, GeneratorConfig},
};

/// Generate one data type per table from a live database schema.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Database URL (overrides POCO_DATABASE__URL)
    #[arg(long)]
    pub database_url: Option<String>,
    /// Only read tables from this schema
    #[arg(long)]
    pub schema: Option<String>,
    /// Output directory (overrides POCO_OUTPUT__DIRECTORY)
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Namespace written at the top of each file
    #[arg(long)]
    pub namespace: Option<String>,
    /// Target language: csharp or rust
    #[arg(long)]
    pub language: Option<TargetLanguage>,
    /// Name style: verbatim or pascal_case
    #[arg(long)]
    pub naming: Option<NamingStyle>,
}

impl Cli {
    /// Applies flags on top of the environment-loaded config.
    pub fn apply(self, cfg: &mut GeneratorConfig) {
        if let Some(url) = self.database_url {
            match cfg.database.as_mut() {
                Some(database) => database.url = url,
                None => cfg.database = Some(DatabaseConfig::new(url)),
            }
        }
        if let Some(schema) = self.schema {
            if let Some(database) = cfg.database.as_mut() {
                database.schema = Some(schema);
            }
        }
        if let Some(out) = self.out {
            cfg.output.directory = out;
        }
        if let Some(namespace) = self.namespace {
            cfg.output.namespace = namespace;
        }
        if let Some(language) = self.language {
            cfg.output.language = language;
        }
        if let Some(naming) = self.naming {
            cfg.output.naming = naming;
        }
    }
}
