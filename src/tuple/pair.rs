use std::fmt;
use std::mem;

use super::PairView;

/// An immutable ordered pair of two independently typed elements.
///
/// Slots are fixed at construction and the type derives structural equality,
/// hashing, and lexicographic ordering (left slot first). Safe to share
/// freely; requires no synchronization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<L, R> {
    left: L,
    right: R,
}

impl<L, R> Pair<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Consumes the pair, returning both slots.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> PairView<L, R> for Pair<L, R> {
    fn left(&self) -> &L {
        &self.left
    }

    fn right(&self) -> &R {
        &self.right
    }
}

/// A mutable ordered pair. Slots may be reassigned after construction.
///
/// Mutation goes through `&mut self`, so exclusive access is enforced
/// statically; share across threads only behind external synchronization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MutablePair<L, R> {
    pub left: L,
    pub right: R,
}

impl<L, R> MutablePair<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn set_left(&mut self, left: L) {
        self.left = left;
    }

    pub fn set_right(&mut self, right: R) {
        self.right = right;
    }

    /// Replaces the value (right slot) under the key/value contract,
    /// returning the previous value.
    pub fn set_value(&mut self, value: R) -> R {
        mem::replace(&mut self.right, value)
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> PairView<L, R> for MutablePair<L, R> {
    fn left(&self) -> &L {
        &self.left
    }

    fn right(&self) -> &R {
        &self.right
    }
}

// Flavors with equal current slot values compare equal, both directions.
impl<L: PartialEq, R: PartialEq> PartialEq<MutablePair<L, R>> for Pair<L, R> {
    fn eq(&self, other: &MutablePair<L, R>) -> bool {
        self.left == other.left && self.right == other.right
    }
}

impl<L: PartialEq, R: PartialEq> PartialEq<Pair<L, R>> for MutablePair<L, R> {
    fn eq(&self, other: &Pair<L, R>) -> bool {
        self.left == other.left && self.right == other.right
    }
}

impl<L, R> From<(L, R)> for Pair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

impl<L, R> From<(L, R)> for MutablePair<L, R> {
    fn from((left, right): (L, R)) -> Self {
        Self::new(left, right)
    }
}

impl<L, R> From<MutablePair<L, R>> for Pair<L, R> {
    fn from(pair: MutablePair<L, R>) -> Self {
        Self::new(pair.left, pair.right)
    }
}

impl<L, R> From<Pair<L, R>> for MutablePair<L, R> {
    fn from(pair: Pair<L, R>) -> Self {
        let (left, right) = pair.into_parts();
        Self::new(left, right)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Pair<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.left, self.right)
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for MutablePair<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.left, self.right)
    }
}
