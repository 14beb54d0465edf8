//! A sparse lattice map made up of dense chunks, designed for random access.
//!
//! The addressable space is all of `Z^D`, but memory is only allocated per chunk: the first
//! mutable access to any coordinate inside a never-touched band materializes one whole
//! `S^D`-element [`Chunk`], and further accesses in that band reuse it. Chunks are keyed by their
//! floor-divided coordinates, so negative coordinates get their own chunks below zero rather than
//! aliasing the ones above.
//!
//! Reads through [`SparseMap::clone_point`] or [`SparseMap::get_point`] never allocate; untouched
//! coordinates take the map's ambient value.
//!
//! There is no deletion, no eviction, and no interior locking. The chunk table grows monotonically
//! with the number of distinct bands touched, and concurrent access requires external
//! synchronization.
//!
//! # Example
//! ```
//! use sparse_lattice_core::PointN;
//! use sparse_lattice_storage::prelude::*;
//!
//! // 2-dimensional map of i32 values, i32 coordinates, 4x4 chunks.
//! let mut map = SparseHashMap2::<i32, 4>::new();
//!
//! *map.get_mut(PointN([5, -1])) = 7;
//!
//! assert_eq!(map.get(PointN([5, -1])), 7);
//! // A coordinate one band over is backed by different storage.
//! assert_eq!(map.get(PointN([9, -1])), 0);
//! assert_eq!(map.num_chunks(), 1);
//! ```

use crate::{Chunk, ChunkIndexer, ChunkKey, ChunkStorage, Get, GetMut, GetRef};

use sparse_lattice_core::prelude::*;

/// A map from global lattice coordinates to values of type `T`, backed by lazily-allocated dense
/// chunks of `S^D` elements.
///
/// `SparseMap` is generic over the chunk table type `Store`; any [`ChunkStorage`] works, and
/// [`SparseHashMap`](crate::SparseHashMap) is the alias for the default
/// [`SmallKeyHashMap`](crate::SmallKeyHashMap)-backed table.
pub struct SparseMap<T, I, const D: usize, const S: usize, Store> {
    /// Translates from lattice coordinates to chunk key space.
    pub indexer: ChunkIndexer<I, D, S>,
    storage: Store,
    // Also serves GetRef, which must return a reference to a non-temporary value for vacant
    // chunks.
    ambient_value: T,
}

impl<T, I, const D: usize, const S: usize, Store> SparseMap<T, I, D, S, Store>
where
    I: LatticeScalar,
    Store: Default,
{
    /// Creates an empty map whose untouched coordinates take `T::default()`.
    #[inline]
    pub fn new() -> Self
    where
        T: Default,
    {
        Self::with_ambient_value(T::default())
    }

    /// Creates an empty map whose untouched coordinates take `ambient_value`.
    #[inline]
    pub fn with_ambient_value(ambient_value: T) -> Self {
        Self::with_storage(ambient_value, Store::default())
    }
}

impl<T, I, const D: usize, const S: usize, Store> SparseMap<T, I, D, S, Store>
where
    I: LatticeScalar,
{
    /// Creates a map using the given `storage`, which may already contain chunks.
    #[inline]
    pub fn with_storage(ambient_value: T, storage: Store) -> Self {
        Self {
            indexer: ChunkIndexer::new(),
            storage,
            ambient_value,
        }
    }
}

impl<T, I, const D: usize, const S: usize, Store> Default for SparseMap<T, I, D, S, Store>
where
    T: Default,
    I: LatticeScalar,
    Store: Default,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, I, const D: usize, const S: usize, Store> SparseMap<T, I, D, S, Store> {
    /// Consumes `self` and returns the backing chunk storage.
    #[inline]
    pub fn take_storage(self) -> Store {
        self.storage
    }

    /// Borrows the internal chunk storage.
    #[inline]
    pub fn storage(&self) -> &Store {
        &self.storage
    }

    /// Mutably borrows the internal chunk storage.
    #[inline]
    pub fn storage_mut(&mut self) -> &mut Store {
        &mut self.storage
    }

    /// The value taken by all coordinates outside of the materialized chunks.
    #[inline]
    pub fn ambient_value(&self) -> &T {
        &self.ambient_value
    }
}

impl<T, I, const D: usize, const S: usize, Store> SparseMap<T, I, D, S, Store>
where
    I: LatticeScalar,
    Store: ChunkStorage<I, D, Chunk = Chunk<T, D, S>>,
{
    /// The number of chunks that have been materialized so far.
    #[inline]
    pub fn num_chunks(&self) -> usize {
        self.storage.num_chunks()
    }

    /// Borrow the chunk at `key`, if it has been materialized.
    #[inline]
    pub fn get_chunk(&self, key: ChunkKey<I, D>) -> Option<&Chunk<T, D, S>> {
        self.storage.get(key)
    }

    /// Mutably borrow the chunk at `key`, if it has been materialized.
    #[inline]
    pub fn get_mut_chunk(&mut self, key: ChunkKey<I, D>) -> Option<&mut Chunk<T, D, S>> {
        self.storage.get_mut(key)
    }

    /// Mutably borrow the chunk at `key`, materializing an ambient-filled chunk if it is vacant.
    #[inline]
    pub fn get_mut_chunk_or_insert_ambient(&mut self, key: ChunkKey<I, D>) -> &mut Chunk<T, D, S>
    where
        T: Clone,
    {
        let Self {
            storage,
            ambient_value,
            ..
        } = self;

        storage.get_mut_or_insert_with(key, || {
            #[cfg(feature = "tracing")]
            tracing::trace!("materializing vacant chunk");

            Chunk::fill(ambient_value.clone())
        })
    }

    /// Overwrite the chunk at `key` with `chunk`. Drops the previous value.
    #[inline]
    pub fn write_chunk(&mut self, key: ChunkKey<I, D>, chunk: Chunk<T, D, S>) {
        self.storage.write(key, chunk);
    }

    /// Replace the chunk at `key` with `chunk`, returning the old value.
    #[inline]
    pub fn replace_chunk(
        &mut self,
        key: ChunkKey<I, D>,
        chunk: Chunk<T, D, S>,
    ) -> Option<Chunk<T, D, S>> {
        self.storage.replace(key, chunk)
    }

    /// Clone the value at point `p`. Untouched coordinates yield the ambient value; no chunk is
    /// materialized.
    #[inline]
    pub fn clone_point(&self, p: PointN<I, D>) -> T
    where
        T: Clone,
    {
        let (key, local) = self.indexer.split_point(p);

        self.get_chunk(key)
            .map(|chunk| chunk.get(local))
            .unwrap_or_else(|| self.ambient_value.clone())
    }

    /// Get a reference to the value at point `p`, or `None` if no chunk covers `p` yet. Never
    /// materializes a chunk.
    #[inline]
    pub fn get_point(&self, p: PointN<I, D>) -> Option<&T> {
        let (key, local) = self.indexer.split_point(p);

        self.get_chunk(key).map(|chunk| chunk.get_ref(local))
    }

    /// Get a mutable reference to the value at point `p`, materializing an ambient-filled chunk
    /// for `p`'s band if necessary.
    ///
    /// The reference is stable for the lifetime of the map in the sense that re-indexing the same
    /// point always reaches the same slot; mutations through it are visible to all later reads.
    #[inline]
    pub fn get_mut_point(&mut self, p: PointN<I, D>) -> &mut T
    where
        T: Clone,
    {
        let (key, local) = self.indexer.split_point(p);

        self.get_mut_chunk_or_insert_ambient(key).get_mut(local)
    }
}

impl<T, I, const D: usize, const S: usize, Store> Get<PointN<I, D>> for SparseMap<T, I, D, S, Store>
where
    T: Clone,
    I: LatticeScalar,
    Store: ChunkStorage<I, D, Chunk = Chunk<T, D, S>>,
{
    type Data = T;

    #[inline]
    fn get(&self, p: PointN<I, D>) -> T {
        self.clone_point(p)
    }
}

impl<T, I, const D: usize, const S: usize, Store> GetRef<PointN<I, D>>
    for SparseMap<T, I, D, S, Store>
where
    I: LatticeScalar,
    Store: ChunkStorage<I, D, Chunk = Chunk<T, D, S>>,
{
    type Data = T;

    #[inline]
    fn get_ref(&self, p: PointN<I, D>) -> &T {
        self.get_point(p).unwrap_or(&self.ambient_value)
    }
}

impl<T, I, const D: usize, const S: usize, Store> GetMut<PointN<I, D>>
    for SparseMap<T, I, D, S, Store>
where
    T: Clone,
    I: LatticeScalar,
    Store: ChunkStorage<I, D, Chunk = Chunk<T, D, S>>,
{
    type Data = T;

    #[inline]
    fn get_mut(&mut self, p: PointN<I, D>) -> &mut T {
        self.get_mut_point(p)
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    use sparse_lattice_core::PointN;

    use pretty_assertions::assert_eq;

    #[test]
    fn write_then_read_round_trips() {
        let mut map = SparseHashMap2::<i32, 4>::new();

        *map.get_mut(PointN([5, -1])) = 7;

        assert_eq!(map.get(PointN([5, -1])), 7);
        assert_eq!(map.get_ref(PointN([5, -1])), &7);
        assert_eq!(map.get_point(PointN([5, -1])), Some(&7));
    }

    #[test]
    fn neighboring_band_does_not_alias() {
        let mut map = SparseHashMap2::<i32, 4>::new();

        *map.get_mut(PointN([5, -1])) = 7;

        // floor(9 / 4) = 2, so (9, -1) lives in a different chunk even though its in-chunk
        // offset matches.
        assert_eq!(map.get(PointN([9, -1])), 0);
    }

    #[test]
    fn same_band_resolves_to_the_same_chunk() {
        let mut map = SparseHashMap2::<i32, 4>::new();

        *map.get_mut(PointN([5, -1])) = 7;
        *map.get_mut(PointN([4, -4])) = 8;

        // Both points are in the band with key (1, -1).
        assert_eq!(map.num_chunks(), 1);
        assert_eq!(map.get(PointN([5, -1])), 7);
        assert_eq!(map.get(PointN([4, -4])), 8);
    }

    #[test]
    fn writes_one_band_apart_allocate_two_chunks() {
        let mut map = SparseHashMap::<i32, i64, 1, 16>::new();

        *map.get_mut(PointN([0])) = 1;
        *map.get_mut(PointN([16])) = 2;

        assert_eq!(map.num_chunks(), 2);
        assert_eq!(map.get(PointN([0])), 1);
        assert_eq!(map.get(PointN([16])), 2);
    }

    #[test]
    fn writes_within_one_band_share_a_chunk() {
        let mut map = SparseHashMap::<i32, i64, 1, 16>::new();

        *map.get_mut(PointN([15])) = 1;
        *map.get_mut(PointN([0])) = 2;

        assert_eq!(map.num_chunks(), 1);
    }

    #[test]
    fn reads_never_materialize_chunks() {
        let map = SparseHashMap3::<i32, 8>::new();

        assert_eq!(map.get(PointN([100, -100, 0])), 0);
        assert_eq!(map.get_point(PointN([100, -100, 0])), None);
        assert_eq!(map.num_chunks(), 0);
    }

    #[test]
    fn untouched_slots_of_a_materialized_chunk_take_the_ambient_value() {
        let mut map = SparseHashMap2::<i32, 4>::with_ambient_value(-1);

        *map.get_mut(PointN([5, -1])) = 7;

        // Same chunk, never written.
        assert_eq!(map.get(PointN([6, -2])), -1);
        // Vacant chunk.
        assert_eq!(map.get(PointN([-50, 50])), -1);
        assert_eq!(map.get_ref(PointN([-50, 50])), &-1);
    }

    #[test]
    fn distinct_chunks_with_equal_offsets_do_not_alias() {
        let mut map = SparseHashMap3::<i32, 8>::new();

        // All three points have in-chunk offset (1, 1, 1).
        *map.get_mut(PointN([1, 1, 1])) = 1;
        *map.get_mut(PointN([9, 1, 1])) = 2;
        *map.get_mut(PointN([1, -7, 1])) = 3;

        assert_eq!(map.num_chunks(), 3);
        assert_eq!(map.get(PointN([1, 1, 1])), 1);
        assert_eq!(map.get(PointN([9, 1, 1])), 2);
        assert_eq!(map.get(PointN([1, -7, 1])), 3);
    }

    #[test]
    fn whole_chunk_access_agrees_with_point_access() {
        let mut map = SparseHashMap2::<i32, 4>::new();

        *map.get_mut(PointN([5, -1])) = 7;

        let key = map.indexer.key_containing_point(PointN([5, -1]));
        assert_eq!(key, ChunkKey(PointN([1, -1])));

        let local = map.indexer.local_offset(PointN([5, -1]));
        let chunk = map.get_chunk(key).unwrap();
        assert_eq!(chunk.get(local), 7);
        assert_eq!(map.get_mut_chunk(key).unwrap().get(local), 7);
    }

    #[test]
    fn write_chunk_replaces_band_contents() {
        let mut map = SparseHashMap2::<i32, 4>::new();

        *map.get_mut(PointN([0, 0])) = 7;
        map.write_chunk(ChunkKey(PointN([0, 0])), Chunk::fill(9));

        assert_eq!(map.get(PointN([0, 0])), 9);
        assert_eq!(map.get(PointN([3, 3])), 9);
        assert_eq!(map.num_chunks(), 1);
    }

    #[test]
    fn replace_chunk_returns_the_old_chunk() {
        let mut map = SparseHashMap2::<i32, 4>::new();

        *map.get_mut(PointN([2, 2])) = 7;

        let old = map.replace_chunk(ChunkKey(PointN([0, 0])), Chunk::fill(9));
        assert_eq!(old.unwrap().get(Local([2, 2])), 7);
        assert_eq!(map.get(PointN([2, 2])), 9);
    }

    #[test]
    fn storage_borrows_expose_the_chunk_table() {
        let mut map = SparseHashMap2::<i32, 4>::new();

        map.storage_mut()
            .write(ChunkKey(PointN([1, -1])), Chunk::fill(9));

        assert_eq!(map.storage().num_chunks(), 1);
        // (5, -1) has key (1, -1), so point access sees the chunk written through the storage.
        assert_eq!(map.get(PointN([5, -1])), 9);
    }

    #[test]
    fn non_default_storage_can_be_supplied() {
        let storage = SmallKeyHashMap::default();
        let mut map = SparseHashMap2::<i32, 4>::with_storage(0, storage);

        *map.get_mut(PointN([1, 2])) = 3;

        let storage = map.take_storage();
        assert_eq!(storage.num_chunks(), 1);
    }
}
