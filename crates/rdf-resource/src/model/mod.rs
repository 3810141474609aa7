//! Data model types for RDF resources.
//!
//! This module contains the core types for representing a single graph node:
//! - Identifiers (URIs and blank node labels)
//! - Values (literals and resource references)
//! - Resources (identified, multi-valued property maps)

pub mod id;
pub mod resource;
pub mod value;

pub use id::{derived_blank_node_id, fresh_blank_node_id, is_blank_node};
pub use resource::{DumpFormat, Resource};
pub use value::{Value, Values};
