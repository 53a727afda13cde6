use serde_json::Value;
use sha2::{Digest, Sha256};

/// Issues display identifiers for extracted orders
///
/// Kept behind a trait so the hash-derived placeholder below can be
/// replaced by a real allocator (monotonic counter, random id) without
/// touching the pipeline.
pub(crate) trait TicketIssuer: Send + Sync {
    fn issue(&self, order: &Value) -> String;
}

/// Hash-and-modulo ticket ids: `TKT-` plus the order's content hash
/// mod 10000, zero-padded to four digits
///
/// Deterministic for identical orders; distinct orders can collide by
/// construction. Not an identity scheme.
pub(crate) struct HashTicketIssuer;

impl TicketIssuer for HashTicketIssuer {
    fn issue(&self, order: &Value) -> String {
        let digest = Sha256::digest(order.to_string().as_bytes());
        let word = u64::from_be_bytes(digest[..8].try_into().expect("digest is longer than 8 bytes"));
        format!("TKT-{:04}", word % 10_000)
    }
}
