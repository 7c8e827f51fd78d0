//! Fluent async hashing API
//!
//! Actions take data as arguments:
//! `Hash::sha256().with_key(key).compute(data).await`

pub mod builder;
pub mod hash_entry;
pub(crate) mod hash_functions;

pub use builder::{HashBuilder, HmacBuilder, Pbkdf2Builder};
pub use hash_entry::Hash;
