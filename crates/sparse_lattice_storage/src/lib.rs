//! Sparse storage for N-dimensional integer lattices.
//!
//! The address space is the whole lattice `Z^D`, but backing memory is only allocated in
//! fixed-size hyper-cubic blocks as coordinates are touched. The two storage types are:
//!   - [`Chunk`]: a dense array of `S^D` elements with a flat, mixed-radix layout
//!   - [`SparseMap`]: a lazily-populated map from chunk coordinates to `Chunk`s
//!
//! `SparseMap` splits every global coordinate into a chunk key (floor division by `S`) and an
//! in-chunk offset (floor remainder), so negative coordinates work the same as positive ones.
//! Chunks are materialized on first mutable access to any coordinate inside their band and are
//! never evicted.

pub mod access_traits;
pub mod chunk;
pub mod coords;

pub use access_traits::*;
pub use chunk::*;
pub use coords::*;

// Hash types to use for small keys like `ChunkKey`.
pub type SmallKeyHashMap<K, V> = ahash::AHashMap<K, V>;
pub type SmallKeyBuildHasher = ahash::RandomState;

pub mod prelude {
    pub use super::{
        Chunk, ChunkIndexer, ChunkKey, ChunkStorage, Get, GetMut, GetRef, Local, SmallKeyHashMap,
        SparseHashMap, SparseHashMap2, SparseHashMap3, SparseMap, Stride,
    };
}

pub(crate) mod dev_prelude {
    pub(crate) use crate::{Chunk, ChunkKey, ChunkStorage, SmallKeyHashMap, SparseMap};
}
