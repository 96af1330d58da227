use std::fmt;

use super::TripleView;

/// An immutable ordered triple of three independently typed elements.
///
/// Same contract as [`Pair`](super::Pair) at arity three: structural
/// equality and hashing, lexicographic ordering by slot order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple<L, M, R> {
    left: L,
    middle: M,
    right: R,
}

impl<L, M, R> Triple<L, M, R> {
    pub fn new(left: L, middle: M, right: R) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    /// Consumes the triple, returning all three slots.
    pub fn into_parts(self) -> (L, M, R) {
        (self.left, self.middle, self.right)
    }
}

impl<L, M, R> TripleView<L, M, R> for Triple<L, M, R> {
    fn left(&self) -> &L {
        &self.left
    }

    fn middle(&self) -> &M {
        &self.middle
    }

    fn right(&self) -> &R {
        &self.right
    }
}

/// A mutable ordered triple. Slots may be reassigned after construction;
/// not safe for unsynchronized cross-thread mutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MutableTriple<L, M, R> {
    pub left: L,
    pub middle: M,
    pub right: R,
}

impl<L, M, R> MutableTriple<L, M, R> {
    pub fn new(left: L, middle: M, right: R) -> Self {
        Self {
            left,
            middle,
            right,
        }
    }

    pub fn set_left(&mut self, left: L) {
        self.left = left;
    }

    pub fn set_middle(&mut self, middle: M) {
        self.middle = middle;
    }

    pub fn set_right(&mut self, right: R) {
        self.right = right;
    }

    pub fn into_parts(self) -> (L, M, R) {
        (self.left, self.middle, self.right)
    }
}

impl<L, M, R> TripleView<L, M, R> for MutableTriple<L, M, R> {
    fn left(&self) -> &L {
        &self.left
    }

    fn middle(&self) -> &M {
        &self.middle
    }

    fn right(&self) -> &R {
        &self.right
    }
}

impl<L: PartialEq, M: PartialEq, R: PartialEq> PartialEq<MutableTriple<L, M, R>>
    for Triple<L, M, R>
{
    fn eq(&self, other: &MutableTriple<L, M, R>) -> bool {
        self.left == other.left && self.middle == other.middle && self.right == other.right
    }
}

impl<L: PartialEq, M: PartialEq, R: PartialEq> PartialEq<Triple<L, M, R>>
    for MutableTriple<L, M, R>
{
    fn eq(&self, other: &Triple<L, M, R>) -> bool {
        self.left == other.left && self.middle == other.middle && self.right == other.right
    }
}

impl<L, M, R> From<(L, M, R)> for Triple<L, M, R> {
    fn from((left, middle, right): (L, M, R)) -> Self {
        Self::new(left, middle, right)
    }
}

impl<L, M, R> From<(L, M, R)> for MutableTriple<L, M, R> {
    fn from((left, middle, right): (L, M, R)) -> Self {
        Self::new(left, middle, right)
    }
}

impl<L, M, R> From<MutableTriple<L, M, R>> for Triple<L, M, R> {
    fn from(triple: MutableTriple<L, M, R>) -> Self {
        Self::new(triple.left, triple.middle, triple.right)
    }
}

impl<L, M, R> From<Triple<L, M, R>> for MutableTriple<L, M, R> {
    fn from(triple: Triple<L, M, R>) -> Self {
        let (left, middle, right) = triple.into_parts();
        Self::new(left, middle, right)
    }
}

impl<L: fmt::Display, M: fmt::Display, R: fmt::Display> fmt::Display for Triple<L, M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.left, self.middle, self.right)
    }
}

impl<L: fmt::Display, M: fmt::Display, R: fmt::Display> fmt::Display for MutableTriple<L, M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.left, self.middle, self.right)
    }
}
