//! The resource node: an identifier plus a multi-valued property map.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ResourceError;
use crate::model::id::{derived_blank_node_id, fresh_blank_node_id, is_blank_node};
use crate::model::value::{Value, Values};
use crate::namespace::NamespaceRegistry;
use crate::vocab::{DEFAULT_SEPARATOR, LABEL_PROPERTIES, RDF_TYPE};

/// A single identified node in an RDF-style graph.
///
/// Each property holds an ordered list of distinct values. A property with
/// no values is never stored: setting it to nothing removes it.
///
/// Properties are kept in a `BTreeMap`, so [`property_names`] enumerates
/// them in lexicographic order. Values keep insertion order.
///
/// [`property_names`]: Resource::property_names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    identifier: String,
    properties: BTreeMap<String, Vec<Value>>,
}

/// Rendering mode for [`Resource::dump`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpFormat {
    #[default]
    Text,
    Html,
}

fn check_property(property: &str) -> Result<(), ResourceError> {
    if property.is_empty() {
        return Err(ResourceError::empty_property());
    }
    Ok(())
}

impl Resource {
    /// Creates a resource with no properties.
    ///
    /// Fails if `identifier` is empty.
    pub fn new(identifier: impl Into<String>) -> Result<Self, ResourceError> {
        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(ResourceError::empty_identifier());
        }
        Ok(Self {
            identifier,
            properties: BTreeMap::new(),
        })
    }

    /// Creates a blank node with a freshly minted identifier.
    pub fn new_blank() -> Self {
        Self {
            identifier: fresh_blank_node_id(),
            properties: BTreeMap::new(),
        }
    }

    /// Creates a blank node whose identifier is derived from `seed`.
    pub fn derived_blank(seed: &[u8]) -> Self {
        Self {
            identifier: derived_blank_node_id(seed),
            properties: BTreeMap::new(),
        }
    }

    /// Returns the URI or blank node identifier.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Replaces all values of `property`.
    ///
    /// Duplicates are collapsed, keeping the first occurrence. An empty
    /// `values` removes the property.
    pub fn set(&mut self, property: &str, values: impl Into<Values>) -> Result<(), ResourceError> {
        check_property(property)?;
        let values = values.into();
        if let Some(reason) = values.validate() {
            return Err(ResourceError::InvalidArgument {
                argument: "value",
                reason,
            });
        }

        let mut unique: Vec<Value> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }

        if unique.is_empty() {
            if self.properties.remove(property).is_some() {
                log::trace!("{}: removed property {}", self.identifier, property);
            }
        } else {
            self.properties.insert(property.to_string(), unique);
        }
        Ok(())
    }

    /// Appends values to `property`, skipping any already present.
    ///
    /// An empty `value` is a no-op; `add` never removes data.
    pub fn add(&mut self, property: &str, value: impl Into<Values>) -> Result<(), ResourceError> {
        check_property(property)?;
        let value = value.into();
        if value.is_empty() {
            return Ok(());
        }

        let mut values = self.properties.get(property).cloned().unwrap_or_default();
        for v in value {
            if !values.contains(&v) {
                values.push(v);
            }
        }
        self.set(property, values)
    }

    /// Removes `property` and returns its values.
    pub fn remove(&mut self, property: &str) -> Result<Vec<Value>, ResourceError> {
        check_property(property)?;
        let removed = self.properties.remove(property).unwrap_or_default();
        if !removed.is_empty() {
            log::trace!("{}: removed property {}", self.identifier, property);
        }
        Ok(removed)
    }

    /// Returns true if `property` has at least one value.
    pub fn has_property(&self, property: &str) -> Result<bool, ResourceError> {
        check_property(property)?;
        Ok(self.properties.contains_key(property))
    }

    /// Returns the first value of `property` in insertion order.
    pub fn get(&self, property: &str) -> Result<Option<&Value>, ResourceError> {
        check_property(property)?;
        Ok(self.first(property))
    }

    /// Returns a copy of all values of `property`, empty if absent.
    pub fn all(&self, property: &str) -> Result<Vec<Value>, ResourceError> {
        check_property(property)?;
        Ok(self.properties.get(property).cloned().unwrap_or_default())
    }

    /// Joins the lexical forms of all values of `property` with `separator`.
    pub fn join(&self, property: &str, separator: &str) -> Result<String, ResourceError> {
        check_property(property)?;
        let joined = self
            .values(property)
            .iter()
            .map(Value::as_str)
            .collect::<Vec<_>>()
            .join(separator);
        Ok(joined)
    }

    /// [`join`](Self::join) with a single space.
    pub fn join_default(&self, property: &str) -> Result<String, ResourceError> {
        self.join(property, DEFAULT_SEPARATOR)
    }

    /// Names of all populated properties.
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }

    pub fn is_blank_node(&self) -> bool {
        is_blank_node(&self.identifier)
    }

    /// All values of `rdf:type`.
    pub fn types(&self) -> Vec<Value> {
        self.values(RDF_TYPE).to_vec()
    }

    /// The first value of `rdf:type`.
    pub fn rdf_type(&self) -> Option<&Value> {
        self.first(RDF_TYPE)
    }

    /// The prefix of the namespace this resource's identifier belongs to.
    pub fn namespace<'r>(&self, registry: &'r impl NamespaceRegistry) -> Option<&'r str> {
        registry.namespace_of_uri(&self.identifier)
    }

    /// The identifier shortened to `prefix:local` where possible.
    pub fn short_identifier(&self, registry: &impl NamespaceRegistry) -> Cow<'_, str> {
        registry.shorten(&self.identifier)
    }

    /// A human-readable label.
    ///
    /// Tries `rdfs:label`, `foaf:name` and `dc:title` in that order, skipping
    /// values with empty text, then falls back to the short identifier.
    pub fn label(&self, registry: &impl NamespaceRegistry) -> String {
        LABEL_PROPERTIES
            .iter()
            .filter_map(|property| self.first(property))
            .map(Value::as_str)
            .find(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.short_identifier(registry).into_owned())
    }

    /// Renders identifier, types and every property for inspection.
    ///
    /// The layout is for humans and may change.
    pub fn dump(&self, format: DumpFormat) -> String {
        let esc = |s: &str| match format {
            DumpFormat::Text => s.to_string(),
            DumpFormat::Html => escape_html(s),
        };
        let types = self
            .values(RDF_TYPE)
            .iter()
            .map(|t| esc(t.as_str()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        match format {
            DumpFormat::Text => {
                out.push_str(&self.identifier);
                out.push('\n');
            }
            DumpFormat::Html => {
                out.push_str("<pre>");
                out.push_str(&format!("<b>{}</b>\n", esc(&self.identifier)));
            }
        }
        out.push_str(&format!("Types: {}\n", types));
        out.push_str("Properties:\n");
        for (property, values) in &self.properties {
            out.push_str(&format!("  {} =>\n", esc(property)));
            for value in values {
                out.push_str(&format!("    {}\n", esc(&dump_value(value))));
            }
        }
        if format == DumpFormat::Html {
            out.push_str("</pre>");
        }
        out
    }

    /// Logs the text dump at debug level.
    pub fn log_dump(&self) {
        log::debug!("{}", self.dump(DumpFormat::Text));
    }

    fn values(&self, property: &str) -> &[Value] {
        self.properties
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn first(&self, property: &str) -> Option<&Value> {
        self.values(property).first()
    }
}

fn dump_value(value: &Value) -> String {
    match value {
        Value::Literal {
            value,
            language: Some(lang),
        } => format!("\"{}\"@{}", value, lang),
        Value::Literal { value, .. } => format!("\"{}\"", value),
        Value::Typed { value, datatype } => format!("\"{}\"^^{}", value, datatype),
        Value::Reference(identifier) => format!("<{}>", identifier),
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)
    }
}
