//! Architecture identifier lookup.
//!
//! A fixed table maps lowercase architecture name strings (as reported by
//! platform properties, e.g. "amd64" or "powerpc64") to [`Processor`]
//! descriptors. The table is built once per process and read-only
//! afterwards, so lookups from any thread need no locking.

mod error;
mod processor;
mod registry;

#[cfg(test)]
mod tests;

pub use error::{RegistryError, RegistryResult};
pub use processor::{Bitness, Family, Processor};
pub use registry::{lookup, lookup_host};
