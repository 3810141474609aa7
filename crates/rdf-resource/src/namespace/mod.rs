//! Namespace prefix lookups.
//!
//! Resources never own namespace state. Operations that need to map a URI to
//! a prefix take a [`NamespaceRegistry`] argument, so callers decide which
//! prefix table is in effect and tests can substitute a fixed one.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::error::NamespaceError;
use crate::vocab::namespaces;

/// Read-only URI-to-prefix lookups consumed by [`Resource`](crate::Resource).
///
/// Both lookups are pure and never fail: an unmapped URI yields `None` or
/// the URI unchanged.
pub trait NamespaceRegistry {
    /// Returns the prefix whose namespace URI starts `uri`.
    fn namespace_of_uri(&self, uri: &str) -> Option<&str>;

    /// Shortens `uri` to `prefix:local`, or returns it unchanged.
    fn shorten<'a>(&self, uri: &'a str) -> Cow<'a, str>;
}

impl<R: NamespaceRegistry + ?Sized> NamespaceRegistry for &R {
    fn namespace_of_uri(&self, uri: &str) -> Option<&str> {
        (**self).namespace_of_uri(uri)
    }

    fn shorten<'a>(&self, uri: &'a str) -> Cow<'a, str> {
        (**self).shorten(uri)
    }
}

lazy_static::lazy_static! {
    /// Process-wide read-only table of the well-known prefixes.
    static ref DEFAULT_TABLE: PrefixTable = {
        let mut table = PrefixTable::new();
        for (prefix, uri) in namespaces::DEFAULTS {
            table.prefixes.insert(prefix.to_string(), uri.to_string());
        }
        table
    };
}

/// A prefix table mapping short prefixes to namespace URIs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTable {
    prefixes: BTreeMap<String, String>,
}

impl PrefixTable {
    /// Creates an empty prefix table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table holding the well-known prefixes (rdf, rdfs, owl, xsd,
    /// foaf, dc, dcterms, skos).
    pub fn with_defaults() -> Self {
        DEFAULT_TABLE.clone()
    }

    /// Returns the shared table of well-known prefixes.
    pub fn defaults() -> &'static PrefixTable {
        &DEFAULT_TABLE
    }

    /// Registers (or replaces) a prefix.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> Result<Option<String>, NamespaceError> {
        let prefix = prefix.into();
        let uri = uri.into();
        if !is_prefix_name(&prefix) {
            return Err(NamespaceError::InvalidPrefix { prefix });
        }
        if uri.is_empty() {
            return Err(NamespaceError::InvalidNamespace { prefix });
        }
        Ok(self.prefixes.insert(prefix, uri))
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_prefix(
        mut self,
        prefix: impl Into<String>,
        uri: impl Into<String>,
    ) -> Result<Self, NamespaceError> {
        self.insert(prefix, uri)?;
        Ok(self)
    }

    /// Gets the namespace URI for a prefix.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Removes a prefix, returning its namespace URI.
    pub fn remove(&mut self, prefix: &str) -> Option<String> {
        self.prefixes.remove(prefix)
    }

    /// Iterates `(prefix, namespace URI)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Expands `prefix:local` to a full URI.
    ///
    /// Returns None when the name has no colon or the prefix is unknown.
    pub fn expand(&self, name: &str) -> Option<String> {
        let (prefix, local) = name.split_once(':')?;
        let uri = self.get(prefix)?;
        Some(format!("{}{}", uri, local))
    }

    /// Finds the registered namespace with the longest URI that prefixes `uri`.
    fn longest_match(&self, uri: &str) -> Option<(&str, &str)> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| uri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, ns)| (prefix.as_str(), ns.as_str()))
    }
}

impl NamespaceRegistry for PrefixTable {
    fn namespace_of_uri(&self, uri: &str) -> Option<&str> {
        self.longest_match(uri).map(|(prefix, _)| prefix)
    }

    fn shorten<'a>(&self, uri: &'a str) -> Cow<'a, str> {
        match self.longest_match(uri) {
            Some((prefix, ns)) => Cow::Owned(format!("{}:{}", prefix, &uri[ns.len()..])),
            None => Cow::Borrowed(uri),
        }
    }
}

/// `[A-Za-z_][A-Za-z0-9_.-]*`
fn is_prefix_name(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}
