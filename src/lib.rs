pub mod cli;
pub mod codegen;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod schema;
