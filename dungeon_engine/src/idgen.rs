//! ** idgen module **
//! Namespace and helper for generating stable v5 uuids for rooms loaded from the dungeon definition.
use uuid::Uuid;

pub const NAMESPACE_ROOM: Uuid = uuid::uuid!("5b0e7c2a-93d1-4f6e-8a27-c41f0d9e6b13");

/// Generate a v5 UUID for a room token from the dungeon definition.
pub fn uuid_from_token(namespace: &Uuid, token: &str) -> Uuid {
    Uuid::new_v5(namespace, token.as_bytes())
}
