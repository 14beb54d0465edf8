//! Sparse N-dimensional arrays with lazily-allocated, dense hyper-cubic chunks.
//!
//! The coordinate space is the whole integer lattice `Z^D`, but memory is only allocated for the
//! `S^D`-element chunks whose bands have actually been written. This suits domains like voxel
//! worlds and unbounded grids, where the addressable space is enormous but occupied regions are
//! sparse and locally clustered.
//!
//! This library is organized into two crates, re-exported here:
//! - **core**: the `PointN` lattice point type and integer math
//! - **storage**: the dense `Chunk` and lazy `SparseMap` containers
//!
//! # Example
//! ```
//! use sparse_lattice::prelude::*;
//!
//! // 3-dimensional map of u8 values, i32 coordinates, 16x16x16 chunks.
//! let mut map = SparseHashMap3::<u8, 16>::new();
//!
//! *map.get_mut(PointN([301, -2, 0])) = 1;
//!
//! assert_eq!(map.get(PointN([301, -2, 0])), 1);
//! // Only the one chunk containing the written point was allocated.
//! assert_eq!(map.num_chunks(), 1);
//! ```

pub use sparse_lattice_core as core;
pub use sparse_lattice_storage as storage;

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::storage::prelude::*;
}
