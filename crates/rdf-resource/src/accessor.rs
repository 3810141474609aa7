//! Namespace/local-name accessors.
//!
//! `get_field("foaf", "name")` reads the same data as `get("foaf:name")`.
//! Front ends that only have a method-style name (`getFoaf_Name`,
//! `allDc_Title`) can translate it with [`Accessor::parse`] and run it with
//! [`Resource::call`]. This layer only translates names; all reads go
//! through [`Resource::get`] and [`Resource::all`].
//!
//! Name translation:
//! - the namespace is lower-cased
//! - the first character of the local name is lower-cased
//! - namespace and local name are joined with `:`

use crate::error::ResourceError;
use crate::model::{Resource, Value};

/// Whether an accessor reads the first value or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// First value, like [`Resource::get`].
    Get,
    /// Every value, like [`Resource::all`].
    All,
}

/// A resolved accessor: a kind plus the prefixed property name it reads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accessor {
    kind: AccessorKind,
    property: String,
}

/// Result of running an [`Accessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessed<'a> {
    One(Option<&'a Value>),
    Many(Vec<Value>),
}

impl Accessor {
    /// Builds an accessor from a namespace prefix and a local name.
    ///
    /// Fails with `InvalidArgument` if either part is empty.
    pub fn new(kind: AccessorKind, namespace: &str, local: &str) -> Result<Self, ResourceError> {
        match field_property(namespace, local) {
            Some(property) => Ok(Self { kind, property }),
            None => Err(ResourceError::empty_property()),
        }
    }

    /// Parses a method-style name: `get<Ns>_<Local>` or `all<Ns>_<Local>`.
    ///
    /// Anything else fails with `UnknownMethod` naming `name`.
    pub fn parse(name: &str) -> Result<Self, ResourceError> {
        let (kind, rest) = if let Some(rest) = name.strip_prefix("get") {
            (AccessorKind::Get, rest)
        } else if let Some(rest) = name.strip_prefix("all") {
            (AccessorKind::All, rest)
        } else {
            return Err(ResourceError::unknown_method(name));
        };

        let property = rest
            .split_once('_')
            .and_then(|(namespace, local)| field_property(namespace, local))
            .ok_or_else(|| ResourceError::unknown_method(name))?;
        Ok(Self { kind, property })
    }

    pub fn kind(&self) -> AccessorKind {
        self.kind
    }

    /// The prefixed property name, e.g. `foaf:name`.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Runs this accessor against `resource`.
    pub fn apply<'a>(&self, resource: &'a Resource) -> Result<Accessed<'a>, ResourceError> {
        match self.kind {
            AccessorKind::Get => resource.get(&self.property).map(Accessed::One),
            AccessorKind::All => resource.all(&self.property).map(Accessed::Many),
        }
    }
}

impl Accessed<'_> {
    /// The first value, whichever kind of accessor produced this.
    pub fn first(&self) -> Option<&Value> {
        match self {
            Accessed::One(value) => *value,
            Accessed::Many(values) => values.first(),
        }
    }

    /// All values as an owned list.
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Accessed::One(value) => value.into_iter().cloned().collect(),
            Accessed::Many(values) => values,
        }
    }
}

fn field_property(namespace: &str, local: &str) -> Option<String> {
    let mut chars = local.chars();
    let first = chars.next()?;
    if namespace.is_empty() {
        return None;
    }
    let mut property = String::with_capacity(namespace.len() + local.len() + 1);
    property.push_str(&namespace.to_lowercase());
    property.push(':');
    property.extend(first.to_lowercase());
    property.push_str(chars.as_str());
    Some(property)
}

impl Resource {
    /// `get("<namespace>:<local>")` with accessor name translation.
    pub fn get_field(&self, namespace: &str, local: &str) -> Result<Option<&Value>, ResourceError> {
        let accessor = Accessor::new(AccessorKind::Get, namespace, local)?;
        self.get(accessor.property())
    }

    /// `all("<namespace>:<local>")` with accessor name translation.
    pub fn all_field(&self, namespace: &str, local: &str) -> Result<Vec<Value>, ResourceError> {
        let accessor = Accessor::new(AccessorKind::All, namespace, local)?;
        self.all(accessor.property())
    }

    /// Runs a method-style accessor name such as `getFoaf_Name`.
    pub fn call(&self, name: &str) -> Result<Accessed<'_>, ResourceError> {
        Accessor::parse(name)?.apply(self)
    }
}
