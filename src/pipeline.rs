use std::path::PathBuf;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::{
    codegen::{ClassEmitter, EmittedType, NamingStyle, TargetLanguage},
    config::GeneratorConfig,
    error::{GenerateResult, UnmappedTypeWarning},
    output::OutputWriter,
    schema::{SchemaReader, TableGroup, group_by_table},
};

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub namespace: String,
    pub language: TargetLanguage,
    pub naming: NamingStyle,
    pub schema: Option<String>,
}

impl GenerationOptions {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            language: TargetLanguage::default(),
            naming: NamingStyle::default(),
            schema: None,
        }
    }

    pub fn emitter(&self) -> ClassEmitter {
        ClassEmitter::new(self.namespace.clone())
            .with_language(self.language)
            .with_naming(self.naming)
    }
}

impl From<&GeneratorConfig> for GenerationOptions {
    fn from(cfg: &GeneratorConfig) -> Self {
        Self {
            namespace: cfg.output.namespace.clone(),
            language: cfg.output.language,
            naming: cfg.output.naming,
            schema: cfg.database.as_ref().and_then(|db| db.schema.clone()),
        }
    }
}

#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Locations returned by the writer, in emission order.
    pub generated: Vec<PathBuf>,
    pub unmapped: Vec<UnmappedTypeWarning>,
}

/// Renders every group. Any render failure fails the whole batch.
pub fn emit_all(
    emitter: &ClassEmitter,
    groups: &[TableGroup],
) -> GenerateResult<Vec<EmittedType>> {
    groups.iter().map(|group| emitter.emit(group)).collect()
}

/// Reads the catalog, renders one unit per table and hands each unit to
/// `writer`. All units are rendered before the first write, so a failed read
/// or render leaves the output untouched. The first write failure aborts.
pub async fn generate(
    db: &DatabaseConnection,
    options: &GenerationOptions,
    writer: &mut dyn OutputWriter,
) -> GenerateResult<GenerationReport> {
    let columns = SchemaReader::new(db)
        .with_schema(options.schema.clone())
        .read()
        .await?;
    let groups = group_by_table(columns);
    let units = emit_all(&options.emitter(), &groups)?;

    let mut report = GenerationReport::default();
    for unit in units {
        let path = writer.write_unit(&unit)?;
        info!(file = %unit.file_name, fields = unit.fields.len(), "generated");
        report.generated.push(path);
        report.unmapped.extend(unit.unmapped);
    }

    for warning in &report.unmapped {
        warn!(
            table = %warning.table,
            column = %warning.column,
            declared_type = %warning.declared_type,
            "unmapped column type, emitted as fallback"
        );
    }
    info!(
        tables = report.generated.len(),
        unmapped = report.unmapped.len(),
        "generation completed"
    );

    Ok(report)
}
