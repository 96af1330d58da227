//! Integration coverage over the public crate surface.

use valuekit::{Bitness, Family, MutablePair, Pair, PairView, Triple, TripleView, arch};

#[test]
fn x86_64_aliases_resolve_to_one_descriptor() {
    let amd64 = arch::lookup("amd64").expect("amd64 is registered");
    let x86_64 = arch::lookup("x86_64").expect("x86_64 is registered");
    assert_eq!(amd64, x86_64);
    assert_eq!(amd64.bitness(), Bitness::Bits64);
    assert_eq!(amd64.family(), Family::X86);
}

#[test]
fn unknown_architecture_is_a_normal_miss() {
    assert!(arch::lookup("not-a-real-arch").is_none());
}

#[test]
fn host_lookup_uses_the_compiled_target() {
    assert_eq!(arch::lookup_host(), arch::lookup(std::env::consts::ARCH));
}

#[test]
fn tuples_serve_as_general_value_containers() {
    let entry = Pair::new("amd64", arch::lookup("amd64"));
    assert!(entry.value().is_some());
    assert_eq!(*entry.key(), "amd64");

    let mut row = MutablePair::new("requests", 1u32);
    assert_eq!(row.set_value(2), 1);
    assert_eq!(*row.right(), 2);

    let triple = Triple::new(1, "mid", 'r');
    assert_eq!(*triple.middle(), "mid");
    assert_eq!(triple.to_string(), "(1,mid,r)");
}
