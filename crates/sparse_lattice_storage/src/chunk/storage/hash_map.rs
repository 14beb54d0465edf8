use crate::dev_prelude::{Chunk, ChunkKey, ChunkStorage, SmallKeyHashMap, SparseMap};

use core::hash::Hash;

impl<I, const D: usize, Ch> ChunkStorage<I, D> for SmallKeyHashMap<ChunkKey<I, D>, Ch>
where
    ChunkKey<I, D>: Hash + Eq,
{
    type Chunk = Ch;

    #[inline]
    fn get(&self, key: ChunkKey<I, D>) -> Option<&Ch> {
        self.get(&key)
    }

    #[inline]
    fn get_mut(&mut self, key: ChunkKey<I, D>) -> Option<&mut Ch> {
        self.get_mut(&key)
    }

    #[inline]
    fn get_mut_or_insert_with(
        &mut self,
        key: ChunkKey<I, D>,
        create_chunk: impl FnOnce() -> Ch,
    ) -> &mut Ch {
        self.entry(key).or_insert_with(create_chunk)
    }

    #[inline]
    fn replace(&mut self, key: ChunkKey<I, D>, chunk: Ch) -> Option<Ch> {
        self.insert(key, chunk)
    }

    #[inline]
    fn write(&mut self, key: ChunkKey<I, D>, chunk: Ch) {
        self.insert(key, chunk);
    }

    #[inline]
    fn num_chunks(&self) -> usize {
        self.len()
    }
}

/// The default chunk table: a `HashMap` from chunk key to chunk, hashed with
/// [`SmallKeyBuildHasher`](crate::SmallKeyBuildHasher).
pub type SparseHashMapStorage<T, I, const D: usize, const S: usize> =
    SmallKeyHashMap<ChunkKey<I, D>, Chunk<T, D, S>>;

/// A `SparseMap` using `HashMap` as chunk storage.
pub type SparseHashMap<T, I, const D: usize, const S: usize> =
    SparseMap<T, I, D, S, SparseHashMapStorage<T, I, D, S>>;
/// A 2-dimensional `SparseHashMap` with `i32` coordinates.
pub type SparseHashMap2<T, const S: usize> = SparseHashMap<T, i32, 2, S>;
/// A 3-dimensional `SparseHashMap` with `i32` coordinates.
pub type SparseHashMap3<T, const S: usize> = SparseHashMap<T, i32, 3, S>;
