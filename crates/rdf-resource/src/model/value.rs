//! Property values.
//!
//! A value is a plain or language-tagged literal, a datatyped literal, or a
//! reference to another resource. Equality is structural, so the literal
//! `"x"` and a reference to `x` are different values and both can live in
//! the same property.

use std::fmt;

/// A single value of a resource property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// Plain literal with optional language tag.
    Literal {
        value: String,
        /// BCP 47 language tag, or None for an untagged literal.
        language: Option<String>,
    },

    /// Literal with an explicit datatype (prefixed name or URI).
    Typed { value: String, datatype: String },

    /// Reference to another resource by identifier.
    Reference(String),
}

impl Value {
    /// Creates an untagged literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Value::Literal {
            value: value.into(),
            language: None,
        }
    }

    /// Creates a language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Value::Literal {
            value: value.into(),
            language: Some(language.into()),
        }
    }

    /// Creates a datatyped literal.
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Value::Typed {
            value: value.into(),
            datatype: datatype.into(),
        }
    }

    /// Creates a reference to another resource.
    pub fn reference(identifier: impl Into<String>) -> Self {
        Value::Reference(identifier.into())
    }

    /// Returns the lexical form (literal text or referenced identifier).
    pub fn as_str(&self) -> &str {
        match self {
            Value::Literal { value, .. } => value,
            Value::Typed { value, .. } => value,
            Value::Reference(identifier) => identifier,
        }
    }

    /// Returns true if this value points at another resource.
    pub fn is_reference(&self) -> bool {
        matches!(self, Value::Reference(_))
    }

    /// Returns the language tag, if any.
    pub fn language(&self) -> Option<&str> {
        match self {
            Value::Literal { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    /// Returns the datatype, if any.
    pub fn datatype(&self) -> Option<&str> {
        match self {
            Value::Typed { datatype, .. } => Some(datatype),
            _ => None,
        }
    }

    /// Validates this value.
    ///
    /// Returns an error description if invalid, None if valid.
    pub fn validate(&self) -> Option<&'static str> {
        match self {
            Value::Literal {
                language: Some(tag),
                ..
            } => {
                if !is_language_tag(tag) {
                    return Some("malformed language tag");
                }
            }
            Value::Typed { datatype, .. } => {
                if datatype.is_empty() {
                    return Some("datatype cannot be empty");
                }
            }
            Value::Reference(identifier) => {
                if identifier.is_empty() {
                    return Some("referenced identifier cannot be empty");
                }
            }
            _ => {}
        }
        None
    }
}

/// `[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*`
fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic()));
    primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::literal(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::literal(value)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

/// Zero or more values passed to [`Resource::set`](crate::Resource::set) and
/// [`Resource::add`](crate::Resource::add).
///
/// A single value, a sequence, and "nothing" all convert into this type, so
/// one call shape covers all three cases. An empty `Values` plays the role
/// of null: `set` removes the property, `add` does nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(Vec<Value>);

impl Values {
    /// The empty value list.
    pub fn none() -> Self {
        Values(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Returns the description of the first invalid value, if any.
    pub fn validate(&self) -> Option<&'static str> {
        self.0.iter().find_map(Value::validate)
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.0
    }
}

impl IntoIterator for Values {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Value> for Values {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Values(iter.into_iter().collect())
    }
}

impl From<Value> for Values {
    fn from(value: Value) -> Self {
        Values(vec![value])
    }
}

impl From<&Value> for Values {
    fn from(value: &Value) -> Self {
        Values(vec![value.clone()])
    }
}

impl From<&str> for Values {
    fn from(value: &str) -> Self {
        Values(vec![Value::from(value)])
    }
}

impl From<String> for Values {
    fn from(value: String) -> Self {
        Values(vec![Value::from(value)])
    }
}

impl<T: Into<Value>> From<Option<T>> for Values {
    fn from(value: Option<T>) -> Self {
        Values(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Values {
    fn from(values: Vec<T>) -> Self {
        Values(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Values {
    fn from(values: [T; N]) -> Self {
        Values(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Values {
    fn from(values: &[T]) -> Self {
        Values(values.iter().cloned().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Value::from("x"), Value::literal("x"));
        assert_ne!(Value::literal("x"), Value::reference("x"));
        assert_ne!(Value::literal("x"), Value::typed("x", "xsd:string"));
        assert_ne!(Value::literal("x"), Value::lang_literal("x", "en"));
    }

    #[test]
    fn test_lexical_form() {
        assert_eq!(Value::lang_literal("chat", "fr").as_str(), "chat");
        assert_eq!(Value::typed("42", "xsd:integer").to_string(), "42");
        assert_eq!(Value::reference("_:b0").as_str(), "_:b0");
        assert_eq!(Value::typed("42", "xsd:integer").datatype(), Some("xsd:integer"));
        assert_eq!(Value::lang_literal("chat", "fr").language(), Some("fr"));
        assert!(Value::reference("_:b0").is_reference());
    }

    #[test]
    fn test_value_validation() {
        assert!(Value::literal("").validate().is_none());
        assert!(Value::lang_literal("colour", "en-GB").validate().is_none());
        assert!(Value::lang_literal("x", "zh-Hant-TW").validate().is_none());
        assert!(Value::lang_literal("x", "").validate().is_some());
        assert!(Value::lang_literal("x", "en_GB").validate().is_some());
        assert!(Value::lang_literal("x", "en-").validate().is_some());
        assert!(Value::lang_literal("x", "toolongprimary").validate().is_some());
        assert!(Value::typed("1", "").validate().is_some());
        assert!(Value::reference("").validate().is_some());
    }

    #[test]
    fn test_values_conversions() {
        assert_eq!(Values::from("a").len(), 1);
        assert_eq!(Values::from(vec!["a", "b"]).len(), 2);
        assert_eq!(Values::from(["a", "b", "c"]).len(), 3);
        assert!(Values::from(None::<&str>).is_empty());
        assert_eq!(Values::from(Some("a")), Values::from("a"));
        assert!(Values::from(Vec::<Value>::new()).is_empty());
        assert!(Values::none().is_empty());

        let slice: &[&str] = &["x", "y"];
        let values: Vec<Value> = Values::from(slice).into_vec();
        assert_eq!(values, vec![Value::from("x"), Value::from("y")]);
    }

    #[test]
    fn test_values_validate_reports_first_error() {
        let values = Values::from(vec![
            Value::literal("ok"),
            Value::reference(""),
            Value::typed("1", ""),
        ]);
        assert_eq!(values.validate(), Some("referenced identifier cannot be empty"));
    }
}
