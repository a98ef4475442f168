//! Record shapes returned by the repositories.
//!
//! Each struct derives `FromRow` to decode a result row and `Serialize` to
//! render it at the API boundary. Timestamps go through
//! [`kfranchise_core::timestamp`]; nullable columns are `Option` and always
//! serialize, as `null` when absent.

pub mod category;
pub mod file;
pub mod franchise;
pub mod stats;
