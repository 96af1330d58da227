use std::{error::Error, fmt};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Integrity failures while building the alias table. These indicate a
/// defect in the fixed table itself, never a runtime condition; lookup
/// misses are reported as `None`, not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateAlias { alias: &'static str },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateAlias { alias } => {
                write!(f, "alias '{alias}' is registered for more than one processor")
            }
        }
    }
}

impl Error for RegistryError {}
