pub mod builder;
pub mod cache;
pub mod config;
pub mod document;
pub mod error;
pub mod registry;
pub mod serializer;

pub use crate::builder::build_document;
pub use crate::cache::{ApiSnapshot, DocumentCache, global_document_cache};
pub use crate::config::ServiceMetadata;
pub use crate::document::{
    Document, Info, License, MediaType, Operation, Parameter, ParameterLocation, PathItem,
    Response, SchemaRef,
};
pub use crate::error::RegistryError;
pub use crate::registry::{SchemaFragment, SchemaRegistry};
pub use crate::serializer::to_json_bytes;
