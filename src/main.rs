use anyhow::Context;
use clap::Parser;

use poco_gen::{
    cli::Cli,
    config::{GeneratorConfig, defaults::DEFAULT_RUST_LOG},
    db::connection,
    logging::init_tracing,
    output::FsWriter,
    pipeline::{self, GenerationOptions},
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("generation failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = match GeneratorConfig::from_env() {
        Ok(cfg) => cfg,
        Err(err) => {
            init_tracing(DEFAULT_RUST_LOG);
            return Err(err);
        }
    };
    cli.apply(&mut cfg);
    init_tracing(&cfg.logging.rust_log);
    cfg.validate()?;

    let database = cfg
        .database
        .as_ref()
        .context("database config is required")?;
    let db = connection::connect(database).await?;

    let options = GenerationOptions::from(&cfg);
    let mut writer = FsWriter::new(cfg.output.directory.clone());
    tracing::info!(
        directory = %writer.directory().display(),
        language = %options.language,
        "starting generation"
    );

    pipeline::generate(&db, &options, &mut writer).await?;
    Ok(())
}
