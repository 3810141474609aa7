//! RDF resources: identified graph nodes with multi-valued properties.
//!
//! A [`Resource`] is a URI or blank node identifier plus a map from property
//! names to ordered lists of distinct values. This crate covers the single
//! node only; parsers, serializers and graph containers build on top of it.
//!
//! # Quick Start
//!
//! ```rust
//! use rdf_resource::{PrefixTable, Resource, Value};
//!
//! let prefixes = PrefixTable::with_defaults();
//!
//! let mut alice = Resource::new("http://example.org/alice")?;
//! alice.set("rdf:type", "foaf:Person")?;
//! alice.add("foaf:name", "Alice")?;
//! alice.add("foaf:name", "Alice")?;
//!
//! assert_eq!(alice.all("foaf:name")?, vec![Value::from("Alice")]);
//! assert_eq!(alice.rdf_type(), Some(&Value::from("foaf:Person")));
//! assert_eq!(alice.label(&prefixes), "Alice");
//! assert_eq!(alice.get_field("foaf", "name")?, Some(&Value::from("Alice")));
//! # Ok::<(), rdf_resource::ResourceError>(())
//! ```
//!
//! # Modules
//!
//! - [`model`]: Identifiers, values and the resource itself
//! - [`accessor`]: Namespace/local-name lookups and method-style names
//! - [`namespace`]: Prefix table consumed for shortening and labels
//! - [`vocab`]: Well-known property names and namespace URIs
//! - [`error`]: Error types
//!
//! # Semantics
//!
//! - Setting a property to no values removes it; adding no values does
//!   nothing.
//! - Values within a property are unique and keep insertion order.
//! - Empty identifiers and empty property names are rejected before any
//!   state changes.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade (property removal at `trace`,
//! [`Resource::log_dump`] at `debug`) and never installs a logger itself.

pub mod accessor;
pub mod error;
pub mod model;
pub mod namespace;
pub mod vocab;

// Re-export commonly used types at crate root
pub use accessor::{Accessed, Accessor, AccessorKind};
pub use error::{NamespaceError, ResourceError};
pub use model::{
    derived_blank_node_id, fresh_blank_node_id, is_blank_node, DumpFormat, Resource, Value, Values,
};
pub use namespace::{NamespaceRegistry, PrefixTable};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
