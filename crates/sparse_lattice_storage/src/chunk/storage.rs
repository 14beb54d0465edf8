pub mod hash_map;

pub use hash_map::*;

use sparse_lattice_core::PointN;

/// The key for one chunk of a sparse lattice: the point's coordinates floor-divided by the chunk
/// size on every axis.
///
/// Two keys are equal iff all `D` components are equal. Collision resistance of the chunk table
/// comes from the hasher ([`SmallKeyBuildHasher`](crate::SmallKeyBuildHasher)), so `Hash` is the
/// plain component-wise derive.
#[derive(Debug, Hash, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ChunkKey<I, const D: usize>(pub PointN<I, D>);

// A few of these traits could be derived. But it seems that derive will not help the compiler
// infer trait bounds as well.

impl<I, const D: usize> Clone for ChunkKey<I, D>
where
    PointN<I, D>: Clone,
{
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<I, const D: usize> Copy for ChunkKey<I, D> where PointN<I, D>: Copy {}

impl<I, const D: usize> PartialEq for ChunkKey<I, D>
where
    PointN<I, D>: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// A 2-dimensional `ChunkKey`.
pub type ChunkKey2 = ChunkKey<i32, 2>;
/// A 3-dimensional `ChunkKey`.
pub type ChunkKey3 = ChunkKey<i32, 3>;

/// Methods for reading and writing chunks from/to an associative store.
///
/// The store only grows: chunks are inserted on first access and there is no deletion or eviction.
/// Bounding the memory of the chunk table is deliberately left to the caller.
pub trait ChunkStorage<I, const D: usize> {
    type Chunk;

    /// Borrow the chunk at `key`.
    fn get(&self, key: ChunkKey<I, D>) -> Option<&Self::Chunk>;

    /// Mutably borrow the chunk at `key`.
    fn get_mut(&mut self, key: ChunkKey<I, D>) -> Option<&mut Self::Chunk>;

    /// Mutably borrow the chunk at `key`. If it doesn't exist, insert the return value of
    /// `create_chunk`.
    fn get_mut_or_insert_with(
        &mut self,
        key: ChunkKey<I, D>,
        create_chunk: impl FnOnce() -> Self::Chunk,
    ) -> &mut Self::Chunk;

    /// Replace the chunk at `key` with `chunk`, returning the old value.
    fn replace(&mut self, key: ChunkKey<I, D>, chunk: Self::Chunk) -> Option<Self::Chunk>;

    /// Overwrite the chunk at `key` with `chunk`. Drops the previous value.
    fn write(&mut self, key: ChunkKey<I, D>, chunk: Self::Chunk);

    /// The number of chunks currently stored.
    fn num_chunks(&self) -> usize;
}
