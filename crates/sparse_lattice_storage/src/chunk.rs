//! The dense block of storage behind one band of a sparse lattice.

pub mod indexer;
pub mod map;
pub mod storage;

pub use indexer::*;
pub use map::*;
pub use storage::*;

use crate::{Get, GetMut, GetRef, Local, Stride};

/// A dense array of exactly `S^D` elements, the unit of allocation for a
/// [`SparseMap`](crate::SparseMap).
///
/// `D` is the dimensionality and `S` the length of every axis, so chunks are hyper-cubic. Elements
/// live in one contiguous allocation with a mixed-radix flat layout; see [`Chunk::stride_from_local`]
/// for the exact encoding.
///
/// A chunk knows nothing about where it sits in the lattice. Translating global coordinates into
/// chunk-local ones is the job of [`ChunkIndexer`].
pub struct Chunk<T, const D: usize, const S: usize> {
    values: Vec<T>,
}

impl<T, const D: usize, const S: usize> Chunk<T, D, S> {
    /// The number of elements in any chunk of this shape.
    pub const NUM_ELEMENTS: usize = S.pow(D as u32);

    /// Creates a chunk with all `S^D` elements initialized to `value`.
    #[inline]
    pub fn fill(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            values: vec![value; Self::NUM_ELEMENTS],
        }
    }

    /// Creates a chunk initialized by calling `filler` once per element, in stride order.
    #[inline]
    pub fn fill_with(filler: impl FnMut() -> T) -> Self {
        let mut values = Vec::with_capacity(Self::NUM_ELEMENTS);
        values.resize_with(Self::NUM_ELEMENTS, filler);

        Self { values }
    }

    /// Flattens chunk-local coordinates into an offset of the backing slice.
    ///
    /// The encoding is mixed-radix with uniform radix `S` and axis 0 least significant:
    /// `stride = local[0] + S * (local[1] + S * (local[2] + ...))`. This is a bijection from
    /// `[0, S)^D` onto `[0, S^D)`, and it is the layout contract for anything that addresses the
    /// backing slice directly.
    ///
    /// Every component of `local` must be less than `S`. This is checked with `debug_assert!`
    /// only; in release builds an out-of-range component produces an out-of-range stride, which
    /// panics at the slice index.
    #[inline]
    pub fn stride_from_local(local: Local<D>) -> Stride {
        let mut offset = 0;
        let mut radix = 1;
        for &c in local.iter() {
            debug_assert!(c < S, "local component {} out of range for chunk size {}", c, S);
            offset += c * radix;
            radix *= S;
        }

        Stride(offset)
    }
}

impl<T, const D: usize, const S: usize> Default for Chunk<T, D, S>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::fill_with(T::default)
    }
}

impl<T, const D: usize, const S: usize> Get<Stride> for Chunk<T, D, S>
where
    T: Clone,
{
    type Data = T;

    #[inline]
    fn get(&self, stride: Stride) -> T {
        self.values[stride.0].clone()
    }
}

impl<T, const D: usize, const S: usize> GetRef<Stride> for Chunk<T, D, S> {
    type Data = T;

    #[inline]
    fn get_ref(&self, stride: Stride) -> &T {
        &self.values[stride.0]
    }
}

impl<T, const D: usize, const S: usize> GetMut<Stride> for Chunk<T, D, S> {
    type Data = T;

    #[inline]
    fn get_mut(&mut self, stride: Stride) -> &mut T {
        &mut self.values[stride.0]
    }
}

impl<T, const D: usize, const S: usize> Get<Local<D>> for Chunk<T, D, S>
where
    T: Clone,
{
    type Data = T;

    #[inline]
    fn get(&self, local: Local<D>) -> T {
        self.get(Self::stride_from_local(local))
    }
}

impl<T, const D: usize, const S: usize> GetRef<Local<D>> for Chunk<T, D, S> {
    type Data = T;

    #[inline]
    fn get_ref(&self, local: Local<D>) -> &T {
        self.get_ref(Self::stride_from_local(local))
    }
}

impl<T, const D: usize, const S: usize> GetMut<Local<D>> for Chunk<T, D, S> {
    type Data = T;

    #[inline]
    fn get_mut(&mut self, local: Local<D>) -> &mut T {
        self.get_mut(Self::stride_from_local(local))
    }
}

// ████████╗███████╗███████╗████████╗
// ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝
//    ██║   █████╗  ███████╗   ██║
//    ██║   ██╔══╝  ╚════██║   ██║
//    ██║   ███████╗███████║   ██║
//    ╚═╝   ╚══════╝╚══════╝   ╚═╝
