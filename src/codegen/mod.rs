pub mod emitter;
pub mod naming;
pub mod type_map;

pub use emitter::{ClassEmitter, EmittedType, TargetLanguage};
pub use naming::{NamingStyle, to_pascal_case};
pub use type_map::{ScalarType, map_declared_type};
