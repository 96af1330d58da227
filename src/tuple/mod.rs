//! Fixed-arity, heterogeneously typed value containers.
//!
//! Each arity comes in two flavors: an immutable value type ([`Pair`],
//! [`Triple`]) whose slots are fixed at construction, and a mutable type
//! ([`MutablePair`], [`MutableTriple`]) with public slots and setters. The
//! flavors share the [`PairView`] / [`TripleView`] capability traits instead
//! of a common base type, and tuples of either flavor compare equal when
//! their current slot values are equal.
//!
//! A slot that may be absent is typed `Option<T>`. Ordering is lexicographic
//! by slot order and delegates to each slot's `Ord`, so an absent slot sorts
//! before every present value.

mod pair;
mod triple;


pub use pair::{MutablePair, Pair};
pub use triple::{MutableTriple, Triple};

/// Read access to the two slots of a pair, plus the key/value contract:
/// the left slot is the key, the right slot is the value.
pub trait PairView<L, R> {
    fn left(&self) -> &L;
    fn right(&self) -> &R;

    fn key(&self) -> &L {
        self.left()
    }

    fn value(&self) -> &R {
        self.right()
    }
}

/// Read access to the three slots of a triple.
pub trait TripleView<L, M, R> {
    fn left(&self) -> &L;
    fn middle(&self) -> &M;
    fn right(&self) -> &R;
}
