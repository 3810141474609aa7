//! Resource identifiers.
//!
//! An identifier is either a URI or a blank node label (`_:` prefix). Blank
//! node labels can be minted fresh from a random UUID, or derived
//! deterministically from input bytes for stable skolem-style names.

use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::vocab::{BLANK_NODE_PREFIX, DERIVED_BLANK_NODE_PREFIX, FRESH_BLANK_NODE_PREFIX};

/// Returns true if `identifier` names a blank node.
pub fn is_blank_node(identifier: &str) -> bool {
    identifier.starts_with(BLANK_NODE_PREFIX)
}

/// Mints a new blank node identifier from a random UUIDv4.
///
/// ```text
/// id = "_:genid" + hex(uuid_v4)
/// ```
pub fn fresh_blank_node_id() -> String {
    format!("{}{}", FRESH_BLANK_NODE_PREFIX, Uuid::new_v4().simple())
}

/// Derives a blank node identifier from input bytes using SHA-256.
///
/// ```text
/// id = "_:b" + hex(SHA-256(input_bytes)[0:16])
/// ```
pub fn derived_blank_node_id(input: &[u8]) -> String {
    let hash = Sha256::digest(input);
    let mut s = String::with_capacity(DERIVED_BLANK_NODE_PREFIX.len() + 32);
    s.push_str(DERIVED_BLANK_NODE_PREFIX);
    for byte in &hash[..16] {
        s.push_str(&format!("{:02x}", byte));
    }
    s
}
