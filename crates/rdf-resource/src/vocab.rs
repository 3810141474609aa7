//! Well-known names used by the resource accessors.
//!
//! Property names are stored in their prefixed (`prefix:local`) form, so the
//! constants here are prefixed names rather than full URIs. The namespace
//! URIs seed [`PrefixTable::with_defaults`](crate::PrefixTable::with_defaults).

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Identifiers starting with this prefix denote blank nodes.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Prefix of blank node identifiers minted from random UUIDs.
pub const FRESH_BLANK_NODE_PREFIX: &str = "_:genid";

/// Prefix of blank node identifiers derived from caller-supplied bytes.
pub const DERIVED_BLANK_NODE_PREFIX: &str = "_:b";

// =============================================================================
// PROPERTIES
// =============================================================================

/// Separator used by [`Resource::join_default`](crate::Resource::join_default).
pub const DEFAULT_SEPARATOR: &str = " ";

/// `rdf:type`
pub const RDF_TYPE: &str = "rdf:type";

/// `rdfs:label`
pub const RDFS_LABEL: &str = "rdfs:label";

/// `foaf:name`
pub const FOAF_NAME: &str = "foaf:name";

/// `dc:title`
pub const DC_TITLE: &str = "dc:title";

/// Properties consulted by [`Resource::label`](crate::Resource::label), in
/// priority order.
pub const LABEL_PROPERTIES: [&str; 3] = [RDFS_LABEL, FOAF_NAME, DC_TITLE];

// =============================================================================
// NAMESPACES
// =============================================================================

/// Namespace URIs registered in the default prefix table.
pub mod namespaces {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const SKOS: &str = "http://www.w3.org/2004/02/skos/core#";

    /// `(prefix, namespace URI)` pairs for the default prefix table.
    pub const DEFAULTS: [(&str, &str); 8] = [
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("owl", OWL),
        ("xsd", XSD),
        ("foaf", FOAF),
        ("dc", DC),
        ("dcterms", DCTERMS),
        ("skos", SKOS),
    ];
}
