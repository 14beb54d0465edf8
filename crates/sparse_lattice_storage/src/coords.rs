use core::ops::Deref;

/// Chunk-local coordinates.
///
/// A global `PointN` must first be translated into chunk-local coordinates before indexing a
/// `Chunk` with `Get*<Local<D>>`. Every component is in `[0, S)` for the chunk size `S`, which is
/// why the components are unsigned even when the global scalar type is signed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Local<const D: usize>(pub [usize; D]);

impl<const D: usize> Deref for Local<D> {
    type Target = [usize; D];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The most efficient coordinates for a chunk's backing slice. A single number that translates
/// directly to a slice offset.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Stride(pub usize);
