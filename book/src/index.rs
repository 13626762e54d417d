//! One-based indices as shown to the user.
//!
//! Commands such as `delete 1` refer to entries of the currently displayed
//! list counted from one. Internally every collection access is zero-based,
//! so the two bases are kept apart by this type instead of by convention.

/// An index into a displayed list.
///
/// Stores the zero-based form; both bases are available through accessors
/// so off-by-one conversions happen in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// Builds an index from the user-facing one-based form.
    ///
    /// Returns `None` for zero, which has no one-based meaning.
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    /// Builds an index from the internal zero-based form.
    pub fn from_zero_based(index: usize) -> Self {
        Self(index)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}
