use super::processor::{Bitness, Family, Processor};
use super::registry::{self, ALIAS_GROUPS};
use super::{RegistryError, lookup, lookup_host};

#[test]
fn resolves_every_registered_alias() {
    for (processor, aliases) in ALIAS_GROUPS {
        for &alias in *aliases {
            assert_eq!(lookup(alias), Some(*processor), "alias '{alias}'");
        }
    }
}

#[test]
fn aliases_of_one_group_yield_equal_descriptors() {
    let amd64 = lookup("amd64").expect("amd64 is registered");
    let x86_64 = lookup("x86_64").expect("x86_64 is registered");
    assert_eq!(amd64, x86_64);
    assert_eq!(amd64.bitness(), Bitness::Bits64);
    assert_eq!(amd64.family(), Family::X86);
    assert!(amd64.is_64_bit());
    assert!(amd64.is_x86());
}

#[test]
fn unknown_names_are_a_normal_miss() {
    assert_eq!(lookup("not-a-real-arch"), None);
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("x86 "), None);
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(lookup("x86").is_some());
    assert_eq!(lookup("X86"), None);
    assert_eq!(lookup("AMD64"), None);
}

#[test]
fn ia64_widths_map_to_distinct_descriptors() {
    let narrow = lookup("ia64n").expect("ia64n is registered");
    let wide = lookup("ia64w").expect("ia64w is registered");
    assert!(narrow.is_32_bit() && narrow.is_ia64());
    assert!(wide.is_64_bit() && wide.is_ia64());
    assert_ne!(narrow, wide);
    assert_eq!(Some(wide), lookup("ia64"));
}

#[test]
fn ppc_aliases_cover_power_spellings() {
    let ppc = lookup("ppc").expect("ppc is registered");
    for alias in ["power", "powerpc", "power_pc", "power_rs"] {
        assert_eq!(lookup(alias), Some(ppc));
    }
    let ppc64 = lookup("ppc64").expect("ppc64 is registered");
    assert!(ppc64.is_64_bit() && ppc64.is_ppc());
    assert_ne!(ppc, ppc64);
}

#[test]
fn fixed_groups_have_disjoint_aliases() {
    registry::build_table(ALIAS_GROUPS).expect("fixed table has no duplicate alias");
}

#[test]
fn duplicate_alias_fails_table_construction() {
    let groups: &[(Processor, &[&str])] = &[
        (
            Processor::new(Bitness::Bits32, Family::X86),
            &["x86", "i386"],
        ),
        (
            Processor::new(Bitness::Bits64, Family::X86),
            &["x86_64", "x86"],
        ),
    ];
    let err = registry::build_table(groups).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateAlias { alias: "x86" });
    assert_eq!(
        err.to_string(),
        "alias 'x86' is registered for more than one processor"
    );
}

#[test]
fn host_lookup_delegates_to_the_table() {
    assert_eq!(lookup_host(), lookup(std::env::consts::ARCH));
}

#[test]
fn descriptor_display_names_family_and_width() {
    let ppc64 = lookup("power_rs64").expect("power_rs64 is registered");
    assert_eq!(ppc64.to_string(), "ppc 64-bit");
    assert_eq!(Bitness::Unknown.label(), "unknown");
    assert_eq!(Family::Unknown.label(), "unknown");
}
