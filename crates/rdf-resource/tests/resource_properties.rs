//! Property-based tests for resource mutation semantics.
//!
//! Values are drawn from a small alphabet so duplicates are common.

use proptest::prelude::*;
use rdf_resource::{Resource, Value, Values};

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[a-c]{0,2}".prop_map(Value::literal),
        "[a-c]{1,2}".prop_map(Value::reference),
    ]
}

fn values() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(value(), 0..8)
}

fn property() -> impl Strategy<Value = String> {
    "[a-z]{1,4}:[a-z]{1,4}"
}

/// First-occurrence de-duplication, the reference for stored sequences.
fn dedup(values: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::new();
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}

// =============================================================================
// Identifiers
// =============================================================================

proptest! {
    /// Any non-empty identifier round-trips unchanged.
    #[test]
    fn prop_identifier_roundtrip(id in ".{1,40}") {
        let r = Resource::new(id.clone()).unwrap();
        prop_assert_eq!(r.identifier(), id.as_str());
        prop_assert_eq!(r.is_blank_node(), id.starts_with("_:"));
    }
}

// =============================================================================
// set / add
// =============================================================================

proptest! {
    /// set stores the de-duplicated sequence in first-occurrence order.
    #[test]
    fn prop_set_dedups(p in property(), vs in values()) {
        let mut r = Resource::new("http://example.org/r").unwrap();
        r.set(&p, vs.clone()).unwrap();
        prop_assert_eq!(r.all(&p).unwrap(), dedup(&vs));
        prop_assert_eq!(r.property_names().contains(&p.as_str()), !vs.is_empty());
    }

    /// Adding values one at a time converges to the same state as one set.
    #[test]
    fn prop_add_converges_with_set(p in property(), vs in values()) {
        let mut added = Resource::new("http://example.org/r").unwrap();
        for v in &vs {
            added.add(&p, v).unwrap();
        }
        let mut set = Resource::new("http://example.org/r").unwrap();
        set.set(&p, vs).unwrap();
        prop_assert_eq!(added, set);
    }

    /// Repeating an add leaves the property unchanged.
    #[test]
    fn prop_add_idempotent(p in property(), before in values(), vs in values()) {
        let mut r = Resource::new("http://example.org/r").unwrap();
        r.set(&p, before).unwrap();
        r.add(&p, vs.clone()).unwrap();
        let once = r.all(&p).unwrap();
        r.add(&p, vs).unwrap();
        prop_assert_eq!(r.all(&p).unwrap(), once);
    }

    /// add appends only values not already present, keeping prior order.
    #[test]
    fn prop_add_appends(p in property(), before in values(), vs in values()) {
        let mut r = Resource::new("http://example.org/r").unwrap();
        r.set(&p, before.clone()).unwrap();
        r.add(&p, vs.clone()).unwrap();
        let mut expected = dedup(&before);
        expected.extend(vs);
        prop_assert_eq!(r.all(&p).unwrap(), dedup(&expected));
    }
}

// =============================================================================
// Null semantics
// =============================================================================

proptest! {
    /// Setting nothing removes the property.
    #[test]
    fn prop_set_none_removes(p in property(), vs in values()) {
        let mut r = Resource::new("http://example.org/r").unwrap();
        r.set(&p, vs).unwrap();
        r.set(&p, Values::none()).unwrap();
        prop_assert_eq!(r.get(&p).unwrap(), None);
        prop_assert!(!r.property_names().contains(&p.as_str()));
    }

    /// Adding nothing never changes or removes data.
    #[test]
    fn prop_add_none_is_noop(p in property(), vs in values()) {
        let mut r = Resource::new("http://example.org/r").unwrap();
        r.set(&p, vs).unwrap();
        let before = r.clone();
        r.add(&p, None::<Value>).unwrap();
        r.add(&p, Vec::<Value>::new()).unwrap();
        prop_assert_eq!(r, before);
    }

    /// get is always the first element of all.
    #[test]
    fn prop_get_is_first_of_all(p in property(), vs in values()) {
        let mut r = Resource::new("http://example.org/r").unwrap();
        r.add(&p, vs).unwrap();
        prop_assert_eq!(r.get(&p).unwrap().cloned(), r.all(&p).unwrap().first().cloned());
    }
}
