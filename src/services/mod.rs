//! Collaborator contracts the task depends on.
//!
//! The datastore and the credential encryption scheme belong to the host
//! system; the task only needs the lookups and the decrypt call below.

pub mod datastore;
pub mod encryption;

pub use datastore::{InMemoryNodeStore, NodeStore};
pub use encryption::Encryption;
