//! Process-wide alias table mapping architecture name strings to
//! [`Processor`] descriptors.
//!
//! The table is a pure function of [`ALIAS_GROUPS`], memoized behind a
//! `OnceLock` on first access. Aliases are lowercase and matching is
//! case-sensitive; callers normalize if they want anything looser.

use std::sync::OnceLock;

use ahash::AHashMap;
use log::debug;

use super::error::{RegistryError, RegistryResult};
use super::processor::{Bitness, Family, Processor};

type AliasMap = AHashMap<&'static str, Processor>;
type AliasGroup = (Processor, &'static [&'static str]);

/// Fixed alias groups, one per processor class. Every alias must be unique
/// across the whole table; a duplicate would silently shadow one family
/// with another and fails table construction instead.
pub(crate) const ALIAS_GROUPS: &[AliasGroup] = &[
    (
        Processor::new(Bitness::Bits32, Family::X86),
        &["x86", "i386", "i486", "i586", "i686", "pentium"],
    ),
    (
        Processor::new(Bitness::Bits64, Family::X86),
        &["x86_64", "amd64", "em64t", "universal"],
    ),
    (
        Processor::new(Bitness::Bits32, Family::Ia64),
        &["ia64_32", "ia64n"],
    ),
    (
        Processor::new(Bitness::Bits64, Family::Ia64),
        &["ia64", "ia64w"],
    ),
    (
        Processor::new(Bitness::Bits32, Family::PowerPc),
        &["ppc", "power", "powerpc", "power_pc", "power_rs"],
    ),
    (
        Processor::new(Bitness::Bits64, Family::PowerPc),
        &["ppc64", "power64", "powerpc64", "power_pc64", "power_rs64"],
    ),
];

static ALIAS_TABLE: OnceLock<AliasMap> = OnceLock::new();

fn table() -> &'static AliasMap {
    ALIAS_TABLE.get_or_init(|| match build_table(ALIAS_GROUPS) {
        Ok(map) => map,
        // A duplicate in the fixed table is an authoring defect; abort
        // initialization rather than pick one of the two mappings.
        Err(err) => panic!("architecture alias table is invalid: {err}"),
    })
}

pub(crate) fn build_table(groups: &[AliasGroup]) -> RegistryResult<AliasMap> {
    let mut map = AliasMap::new();
    for (processor, aliases) in groups {
        for &alias in *aliases {
            if map.contains_key(alias) {
                return Err(RegistryError::DuplicateAlias { alias });
            }
            map.insert(alias, *processor);
        }
    }
    debug!("architecture alias table built with {} aliases", map.len());
    Ok(map)
}

/// Looks up the descriptor registered for `name`.
///
/// Exact, case-sensitive match against the lowercase alias table; a string
/// with no registered alias yields `None`.
pub fn lookup(name: &str) -> Option<Processor> {
    table().get(name).copied()
}

/// Looks up the descriptor for the architecture this binary was compiled
/// for, as reported by `std::env::consts::ARCH`, delegating to [`lookup`].
pub fn lookup_host() -> Option<Processor> {
    lookup(std::env::consts::ARCH)
}
