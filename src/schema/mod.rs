pub mod descriptor;
pub mod grouper;
pub mod reader;

pub use descriptor::ColumnDescriptor;
pub use grouper::{TableGroup, group_by_table};
pub use reader::SchemaReader;
