//! Traits defining different ways to access data from lattice storage.
//!
//! A [`Chunk`](crate::Chunk) is indexable by `Stride` (flat offset) or `Local` (in-chunk point).
//! A [`SparseMap`](crate::SparseMap) is indexable by `PointN` (global point). Indexing a `Chunk`
//! assumes that the location is in-bounds, panicking otherwise; a `SparseMap` normalizes every
//! global point into bounds before it reaches a chunk.

pub trait Get<L> {
    type Data;

    /// Get an owned value at `location`.
    fn get(&self, location: L) -> Self::Data;
}

pub trait GetRef<L> {
    type Data;

    /// Get an immutable reference to the value at `location`.
    fn get_ref(&self, location: L) -> &Self::Data;
}

pub trait GetMut<L> {
    type Data;

    /// Get a mutable reference to the value at `location`.
    fn get_mut(&mut self, location: L) -> &mut Self::Data;
}
