//! Error types for resource access and namespace registration.

use thiserror::Error;

/// Errors raised by [`Resource`](crate::Resource) operations.
///
/// All of these are caller errors: they are returned before any state is
/// touched and are never retried or swallowed internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("invalid {argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },

    #[error("tried to call unknown method Resource::{name}")]
    UnknownMethod { name: String },
}

impl ResourceError {
    pub(crate) fn empty_identifier() -> Self {
        ResourceError::InvalidArgument {
            argument: "identifier",
            reason: "should be a string and cannot be empty",
        }
    }

    pub(crate) fn empty_property() -> Self {
        ResourceError::InvalidArgument {
            argument: "property",
            reason: "should be a string and cannot be empty",
        }
    }

    pub(crate) fn unknown_method(name: &str) -> Self {
        ResourceError::UnknownMethod {
            name: name.to_string(),
        }
    }
}

/// Errors raised while editing a [`PrefixTable`](crate::PrefixTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamespaceError {
    #[error("invalid namespace prefix {prefix:?}")]
    InvalidPrefix { prefix: String },

    #[error("namespace URI for prefix {prefix:?} cannot be empty")]
    InvalidNamespace { prefix: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_method_names_the_call() {
        let err = ResourceError::unknown_method("fooFoaf_Name");
        assert_eq!(
            err.to_string(),
            "tried to call unknown method Resource::fooFoaf_Name"
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = ResourceError::empty_property();
        assert_eq!(
            err.to_string(),
            "invalid property: should be a string and cannot be empty"
        );
    }
}
