pub mod configs;
pub mod defaults;
pub mod envconfig;
pub mod validate;

pub use configs::{DatabaseConfig, GeneratorConfig, LoggingConfig, OutputConfig};
pub use envconfig::EnvConfig;
