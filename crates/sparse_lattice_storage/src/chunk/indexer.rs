use crate::{ChunkKey, Local};

use sparse_lattice_core::prelude::*;

use num::ToPrimitive;

/// Translates global lattice coordinates into chunk space.
///
/// Each axis of a point is split into a chunk coordinate, `div_floor(c, S)`, and an in-chunk
/// offset, `mod_floor(c, S)`. Floor semantics matter: truncating division would send `-1` to chunk
/// `0` instead of chunk `-1`, aliasing it with coordinate `1`. With floor semantics the offset is
/// in `[0, S)` for any sign, and `key * S + offset` recomposes the input exactly.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ChunkIndexer<I, const D: usize, const S: usize> {
    chunk_size: I,
}

impl<I, const D: usize, const S: usize> ChunkIndexer<I, D, S>
where
    I: LatticeScalar,
{
    /// Creates an indexer for chunks of size `S` on every axis.
    ///
    /// Panics if `S` is zero or not representable in the scalar type `I`.
    #[inline]
    pub fn new() -> Self {
        assert!(S > 0, "chunk size must be positive");
        let chunk_size =
            num::NumCast::from(S).expect("chunk size must be representable in the scalar type");

        Self { chunk_size }
    }

    /// The constant axis length of a chunk, as a lattice scalar.
    #[inline]
    pub fn chunk_size(&self) -> I {
        self.chunk_size
    }

    /// Returns the key of the chunk that contains `point`.
    #[inline]
    pub fn key_containing_point(&self, point: PointN<I, D>) -> ChunkKey<I, D> {
        ChunkKey(point.div_floor(self.chunk_size))
    }

    /// Returns the in-chunk offset of `point`, each component in `[0, S)`.
    #[inline]
    pub fn local_offset(&self, point: PointN<I, D>) -> Local<D> {
        let remainder = point.mod_floor(self.chunk_size);

        let mut local = [0; D];
        for (l, c) in local.iter_mut().zip(remainder.0.iter()) {
            // mod_floor is nonnegative, so the cast cannot fail.
            *l = c.to_usize().unwrap();
        }

        Local(local)
    }

    /// Splits `point` into the key of its chunk and its offset inside that chunk.
    #[inline]
    pub fn split_point(&self, point: PointN<I, D>) -> (ChunkKey<I, D>, Local<D>) {
        (self.key_containing_point(point), self.local_offset(point))
    }

    /// The smallest global point inside the chunk at `key`, i.e. `key * S`. Inverse of
    /// [`key_containing_point`](Self::key_containing_point) at offset zero.
    #[inline]
    pub fn min_of_chunk(&self, key: ChunkKey<I, D>) -> PointN<I, D> {
        key.0 * self.chunk_size
    }
}

impl<I, const D: usize, const S: usize> Default for ChunkIndexer<I, D, S>
where
    I: LatticeScalar,
{
    #[inline]
    fn default() -> Self {
        Self::new()
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
    use super::*;

    use rand::{distributions::Uniform, Rng, SeedableRng};

    #[test]
    fn splits_negative_coordinates_into_the_chunk_below_zero() {
        let indexer = ChunkIndexer::<i32, 2, 4>::new();

        let (key, local) = indexer.split_point(PointN([5, -1]));

        assert_eq!(key, ChunkKey(PointN([1, -1])));
        assert_eq!(local, Local([1, 3]));
    }

    #[test]
    fn coordinates_one_band_apart_get_different_keys() {
        let indexer = ChunkIndexer::<i32, 2, 4>::new();

        let near = indexer.key_containing_point(PointN([5, -1]));
        let far = indexer.key_containing_point(PointN([9, -1]));

        assert_ne!(near, far);
        assert_eq!(far, ChunkKey(PointN([2, -1])));
    }

    #[test]
    fn min_of_chunk_for_negative_key_is_negative() {
        let indexer = ChunkIndexer::<i32, 3, 16>::new();

        let key = indexer.key_containing_point(PointN([-1, -1, -1]));

        assert_eq!(key, ChunkKey(PointN([-1, -1, -1])));
        assert_eq!(indexer.min_of_chunk(key), PointN([-16, -16, -16]));
    }

    #[test]
    fn split_recomposes_the_input_for_any_sign() {
        const S: usize = 12;
        let indexer = ChunkIndexer::<i64, 3, S>::new();

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let coord_range = Uniform::new(-1000i64, 1000);
        for _ in 0..1000 {
            let p = PointN([
                rng.sample(coord_range),
                rng.sample(coord_range),
                rng.sample(coord_range),
            ]);

            let (key, local) = indexer.split_point(p);
            for i in 0..3 {
                assert!(local.0[i] < S);
                assert_eq!(key.0.at(i) * S as i64 + local.0[i] as i64, p.at(i));
            }
        }
    }

    #[test]
    fn works_with_narrow_scalar_types() {
        let indexer = ChunkIndexer::<i8, 1, 16>::new();

        let (key, local) = indexer.split_point(PointN([-128i8]));

        assert_eq!(key, ChunkKey(PointN([-8])));
        assert_eq!(local, Local([0]));
    }

    #[test]
    #[should_panic]
    fn chunk_size_wider_than_the_scalar_type_is_rejected() {
        let _ = ChunkIndexer::<i8, 1, 128>::new();
    }
}
